// buffer module: the read-only text both frontends display
use unicode_segmentation::UnicodeSegmentation;

#[derive(Clone, Debug, Default)]
pub struct Buffer {
    pub lines: Vec<String>,
}

impl Buffer {
    // handle loading a file
    pub fn from_string(content: &str) -> Self {
        let mut lines: Vec<String> = content.lines().map(|line| line.to_string()).collect();

        // Ensure there is at least one line if the file is empty
        if lines.is_empty() {
            lines.push(String::new());
        }

        Self { lines }
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn line(&self, idx: usize) -> Option<&str> {
        self.lines.get(idx).map(String::as_str)
    }

    // Length in graphemes; lines past the end are empty
    pub fn line_len(&self, idx: usize) -> usize {
        self.line(idx).map(|l| l.graphemes(true).count()).unwrap_or(0)
    }

    // Text shown when no file is given
    pub fn welcome() -> Self {
        Self::from_string(WELCOME)
    }
}

const WELCOME: &str = "\
Selection pointer demo

Drag with the mouse to select some text, release the button,
then move the pointer back over the highlighted text.
While the pointer is over the selection its shape changes to the
configured style; anywhere else it goes back to the default.

Scroll with the wheel: the selection geometry is recomputed.
Ctrl+A selects everything, Ctrl+P switches the pointer on and off.
Wide characters count by display width: 日本語のテキスト, emoji 🦀🦀.
";
