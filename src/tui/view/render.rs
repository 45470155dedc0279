// render module responsible for all the render logic
use super::graphemes::truncate_to_width;
use super::{Layout, View};
use crate::core::SelectionRange;
use crate::tui::shortcuts::Shortcuts;
use crate::tui::terminal::Terminal;
use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
};
use std::io::{stdout, Error};

pub fn render_view(view: &View) -> Result<(), Error> {
    draw_header(view)?;

    let selection = view.selection.filter(|s| !s.is_empty());
    let max_width = view.width.saturating_sub(Layout::MARGIN) as usize;

    for row in 0..view.visible_rows() {
        let line_idx = row + view.scroll_offset;
        let terminal_row = row as u16 + Layout::HEADER;

        queue!(stdout(), MoveTo(0, terminal_row))?;
        Terminal::clear_rest_of_line()?;

        if let Some(line) = view.buffer.line(line_idx) {
            draw_margin_line(terminal_row, line_idx)?;
            let graphemes = truncate_to_width(line, max_width);
            render_line_with_selection(&graphemes, line_idx, selection)?;
        }
    }

    draw_footer(view)?;
    Terminal::execute()
}

fn draw_header(view: &View) -> Result<(), Error> {
    let title = match &view.filename {
        Some(name) => format!(" {} ", name),
        None => " Selection Pointer ".to_string(),
    };
    let x = (view.width / 2).saturating_sub(title.len() as u16 / 2);
    queue!(stdout(), MoveTo(0, 0))?;
    Terminal::clear_rest_of_line()?;
    queue!(
        stdout(),
        MoveTo(x, 0),
        SetForegroundColor(Color::Yellow),
        Print(title),
        ResetColor
    )?;
    Ok(())
}

fn draw_margin_line(row: u16, line_idx: usize) -> Result<(), Error> {
    queue!(
        stdout(),
        MoveTo(0, row),
        SetForegroundColor(Color::DarkGrey),
        Print(format!("{:>3} ", line_idx + 1)),
        ResetColor
    )?;
    Ok(())
}

// Columns of `line_idx` covered by the selection, end exclusive
fn selected_columns(selection: SelectionRange, line_idx: usize, len: usize) -> (usize, usize) {
    let (start, end) = selection.normalized();
    let sel_start = if line_idx == start.line { start.column } else { 0 };
    let sel_end = if line_idx == end.line { end.column } else { len };
    (sel_start, sel_end)
}

fn render_line_with_selection(
    graphemes: &[&str],
    line_idx: usize,
    selection: Option<SelectionRange>,
) -> Result<(), Error> {
    let range = selection
        .filter(|s| s.covers_line(line_idx))
        .map(|s| selected_columns(s, line_idx, graphemes.len()));

    let Some((sel_start, sel_end)) = range else {
        queue!(stdout(), Print(graphemes.concat()))?;
        return Ok(());
    };

    let sel_start = sel_start.min(graphemes.len());
    let sel_end = sel_end.clamp(sel_start, graphemes.len());

    queue!(
        stdout(),
        Print(graphemes[..sel_start].concat()),
        SetBackgroundColor(Color::DarkBlue),
        SetForegroundColor(Color::White),
        Print(graphemes[sel_start..sel_end].concat()),
        ResetColor,
        Print(graphemes[sel_end..].concat())
    )?;
    Ok(())
}

fn draw_footer(view: &View) -> Result<(), Error> {
    let footer_row = view.height.saturating_sub(Layout::FOOTER);

    let status = if !view.pointer_enabled {
        "pointer: off".to_string()
    } else if view.pointer_shape.is_empty() {
        "pointer: -".to_string()
    } else {
        format!("pointer: {}", view.pointer_shape)
    };

    queue!(stdout(), MoveTo(0, footer_row))?;
    Terminal::clear_rest_of_line()?;
    queue!(
        stdout(),
        SetForegroundColor(Color::DarkGrey),
        Print(Shortcuts::footer_hint()),
        ResetColor
    )?;

    let x = view.width.saturating_sub(status.len() as u16 + 1);
    queue!(
        stdout(),
        MoveTo(x, footer_row),
        SetForegroundColor(Color::Yellow),
        Print(status),
        ResetColor
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TextPosition;

    #[test]
    fn test_selected_columns_per_line() {
        let selection = SelectionRange::new(TextPosition::new(2, 3), TextPosition::new(0, 2));
        assert_eq!(selected_columns(selection, 0, 10), (2, 10));
        assert_eq!(selected_columns(selection, 1, 8), (0, 8));
        assert_eq!(selected_columns(selection, 2, 5), (0, 3));
    }
}
