// geometry module turns a selection range into viewport rectangles
use super::host::{CoordinateMapper, SelectionSource};
use super::rect::Rect;
use super::selection::{SelectionRange, TextPosition};
use tracing::trace;

/// Computes one rectangle per logical line covered by `range`, in document
/// order. Soft-wrapped lines are not split into visual rows, so a wrapped
/// line yields a single span that may be wider than what is painted.
///
/// The caller is expected to skip empty selections.
pub fn compute_rects<M>(range: SelectionRange, mapper: &M) -> Vec<Rect>
where
    M: CoordinateMapper + ?Sized,
{
    let (start, end) = range.normalized();

    if start.line == end.line {
        return vec![span(mapper, start, end)];
    }

    let mut rects = Vec::with_capacity(end.line - start.line + 1);

    // first line
    let first_end = TextPosition::new(start.line, mapper.line_length(start.line));
    rects.push(span(mapper, start, first_end));

    // in-between lines
    for line in (start.line + 1)..end.line {
        rects.push(span(
            mapper,
            TextPosition::new(line, 0),
            TextPosition::new(line, mapper.line_length(line)),
        ));
    }

    // last line
    rects.push(span(mapper, TextPosition::new(end.line, 0), end));

    rects
}

/// Rectangles for the host's current primary selection, preferring overlay
/// bounds the host already has over recomputing them from positions.
pub fn resolve_rects<H>(host: &H) -> Vec<Rect>
where
    H: CoordinateMapper + SelectionSource + ?Sized,
{
    if !host.has_non_empty_selection() {
        return Vec::new();
    }

    if let Some(rects) = host.overlay_rects() {
        trace!(count = rects.len(), "using host overlay rects");
        return rects;
    }

    let rects = compute_rects(host.primary_selection(), host);
    trace!(count = rects.len(), "computed selection rects");
    rects
}

fn span<M>(mapper: &M, from: TextPosition, to: TextPosition) -> Rect
where
    M: CoordinateMapper + ?Sized,
{
    Rect::between(mapper.char_coords(from), mapper.char_coords(to))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::test_host::GridHost;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn pos(line: usize, column: usize) -> TextPosition {
        TextPosition::new(line, column)
    }

    #[test]
    fn test_single_line_gives_one_rect() {
        let host = GridHost::new(&[20]);
        let rects = compute_rects(SelectionRange::new(pos(0, 3), pos(0, 8)), &host);

        assert_eq!(rects.len(), 1);
        assert_eq!(rects[0], Rect::new(30.0, 80.0, 0.0, 20.0));
        assert_eq!(rects[0].width(), 50.0);
    }

    #[test]
    fn test_multi_line_spans() {
        let host = GridHost::new(&[10, 8, 6, 5]);
        let rects = compute_rects(SelectionRange::new(pos(0, 2), pos(3, 4)), &host);

        assert_eq!(
            rects,
            vec![
                Rect::new(20.0, 100.0, 0.0, 20.0),
                Rect::new(0.0, 80.0, 20.0, 40.0),
                Rect::new(0.0, 60.0, 40.0, 60.0),
                Rect::new(0.0, 40.0, 60.0, 80.0),
            ]
        );
    }

    #[test]
    fn test_adjacent_lines_have_no_interior() {
        let host = GridHost::new(&[10, 8]);
        let rects = compute_rects(SelectionRange::new(pos(0, 4), pos(1, 1)), &host);

        assert_eq!(
            rects,
            vec![
                Rect::new(40.0, 100.0, 0.0, 20.0),
                Rect::new(0.0, 10.0, 20.0, 40.0),
            ]
        );
    }

    #[test]
    fn test_scrolled_host_maps_into_viewport() {
        let mut host = GridHost::new(&[4, 4, 4, 4]);
        host.scroll_top = 2;
        let rects = compute_rects(SelectionRange::new(pos(2, 0), pos(2, 4)), &host);

        assert_eq!(rects, vec![Rect::new(0.0, 40.0, 0.0, 20.0)]);
    }

    #[test]
    fn test_resolve_without_selection_is_empty() {
        let host = GridHost::new(&[10]);
        assert!(resolve_rects(&host).is_empty());
    }

    #[test]
    fn test_resolve_prefers_overlay_rects() {
        let mut host = GridHost::new(&[10, 10]);
        host.selection = Some(SelectionRange::new(pos(0, 1), pos(1, 2)));
        host.overlay = Some(vec![Rect::new(1.0, 2.0, 3.0, 4.0)]);

        assert_eq!(resolve_rects(&host), vec![Rect::new(1.0, 2.0, 3.0, 4.0)]);
    }

    #[test]
    fn test_resolve_falls_back_to_geometry() {
        let mut host = GridHost::new(&[10, 10]);
        host.selection = Some(SelectionRange::new(pos(1, 2), pos(0, 1)));

        assert_eq!(resolve_rects(&host).len(), 2);
    }

    proptest! {
        #[test]
        fn prop_anchor_head_order_is_irrelevant(
            a_line in 0usize..6, a_col in 0usize..12,
            b_line in 0usize..6, b_col in 0usize..12,
        ) {
            let host = GridHost::new(&[12, 3, 0, 12, 7, 12]);
            let a = pos(a_line, a_col);
            let b = pos(b_line, b_col);

            let forward = compute_rects(SelectionRange::new(a, b), &host);
            let backward = compute_rects(SelectionRange::new(b, a), &host);

            prop_assert_eq!(&forward, &backward);
            let (start, end) = SelectionRange::new(a, b).normalized();
            prop_assert_eq!(forward.len(), end.line - start.line + 1);
        }
    }
}
