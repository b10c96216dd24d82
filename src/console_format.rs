/// Console formatting module - Pure rendering concerns
///
/// This module handles all console output formatting including:
/// - Box-drawing borders
/// - Cell alignment and padding
/// - ANSI colors
/// - Text truncation by display width
///
/// It knows nothing about grades or students; the report module hands it
/// pre-extracted cells and column geometry.
///
/// ## Output Flexibility
///
/// `TableWriter` writes to any `std::io::Write` destination, so the same code
/// renders into a `Vec<u8>` for tests and JSON-free pipelines or straight to
/// stdout.
use std::io::{self, IsTerminal, Write};
use term::color::Color;
use terminal_size::terminal_size;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Marker appended to truncated text
pub const ELLIPSIS: &str = "...";

/// Horizontal alignment of a cell inside its column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
    Center,
}

/// Text of a single cell plus the color that wraps it
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Cell {
    pub text: String,
    pub color: Option<Color>,
}

impl Cell {
    pub fn plain(text: impl Into<String>) -> Self {
        Self { text: text.into(), color: None }
    }

    pub fn colored(text: impl Into<String>, color: Color) -> Self {
        Self { text: text.into(), color: Some(color) }
    }

    /// Cell text with its color applied (if enabled)
    pub fn painted(&self, use_colors: bool) -> String {
        match self.color {
            Some(color) => paint(&self.text, color, use_colors),
            None => self.text.clone(),
        }
    }
}

/// Which horizontal border to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Border {
    Top,
    Separator,
    Bottom,
}

impl Border {
    fn glyphs(self) -> (char, char, char) {
        match self {
            Border::Top => ('╭', '┬', '╮'),
            Border::Separator => ('├', '┼', '┤'),
            Border::Bottom => ('╰', '┴', '╯'),
        }
    }
}

/// Writer for table output - configurable for color/plain text
pub struct TableWriter<W: Write> {
    writer: W,
    use_colors: bool,
}

impl<W: Write> TableWriter<W> {
    /// Create a new table writer
    pub fn new(writer: W, use_colors: bool) -> Self {
        Self { writer, use_colors }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Write a plain line of text
    pub fn write_line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", text)
    }

    /// Write an empty line
    pub fn writeln(&mut self) -> io::Result<()> {
        writeln!(self.writer)
    }

    /// Write a horizontal border spanning the given column widths
    pub fn write_border(&mut self, border: Border, widths: &[usize]) -> io::Result<()> {
        writeln!(self.writer, "{}", format_border(border, widths))
    }

    /// Write one table row; `cells` pairs each cell with its width and alignment
    pub fn write_row(&mut self, cells: &[(Cell, usize, Align)]) -> io::Result<()> {
        let mut line = String::from("│");
        for (cell, width, align) in cells {
            line.push_str(&align_cell(cell, *width, *align, self.use_colors));
            line.push('│');
        }
        writeln!(self.writer, "{}", line)
    }

    /// Write `label: value` with the value colored
    pub fn write_field(&mut self, label: &str, value: &Cell) -> io::Result<()> {
        writeln!(self.writer, "{}: {}", label, value.painted(self.use_colors))
    }

    /// Write a whole line in one color
    pub fn write_colored_line(&mut self, text: &str, color: Color) -> io::Result<()> {
        writeln!(self.writer, "{}", paint(text, color, self.use_colors))
    }
}

//
// Borders and alignment
//

/// Format a horizontal border line (without trailing newline)
pub fn format_border(border: Border, widths: &[usize]) -> String {
    let (left, mid, right) = border.glyphs();
    let segments: Vec<String> = widths.iter().map(|w| "─".repeat(*w)).collect();
    format!("{}{}{}", left, segments.join(&mid.to_string()), right)
}

/// Pad a cell to exactly `width` display columns.
///
/// Right alignment keeps one space before the closing border, left alignment
/// one space after the opening border. Centered cells put the smaller half of
/// an odd padding on the left. Color wraps the text only, never the padding.
pub fn align_cell(cell: &Cell, width: usize, align: Align, use_colors: bool) -> String {
    let pad = width.saturating_sub(display_width(&cell.text));
    let text = cell.painted(use_colors);

    match align {
        Align::Right => format!("{}{} ", " ".repeat(pad.saturating_sub(1)), text),
        Align::Left => format!(" {}{}", text, " ".repeat(pad.saturating_sub(1))),
        Align::Center => {
            let left = pad / 2;
            format!("{}{}{}", " ".repeat(left), text, " ".repeat(pad - left))
        }
    }
}

//
// Colors
//

/// ANSI SGR foreground code for a `term` color constant
pub fn ansi_code(color: Color) -> u32 {
    if color < 8 { 30 + color } else { 90 + (color - 8) }
}

/// Wrap text in a color escape sequence, or return it unchanged
pub fn paint(text: &str, color: Color, use_colors: bool) -> String {
    if use_colors { format!("\x1b[{}m{}\x1b[0m", ansi_code(color), text) } else { text.to_string() }
}

/// Whether stdout is attached to a terminal wide enough to report a size
pub fn stdout_is_terminal() -> bool {
    terminal_size().is_some()
}

/// Whether stderr is attached to a terminal
pub fn stderr_is_terminal() -> bool {
    io::stderr().is_terminal()
}

//
// Text Formatting Utilities
//

/// Count the display width of a string, accounting for wide Unicode characters
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Cut a string down to at most `limit` display columns.
///
/// Text that already fits is returned unchanged; longer text keeps
/// `limit - 3` columns and gets an `...` marker, so truncating twice is a
/// no-op.
pub fn truncate_text(s: &str, limit: usize) -> String {
    if display_width(s) <= limit {
        return s.to_string();
    }

    let (target, marker) = if limit >= ELLIPSIS.len() { (limit - ELLIPSIS.len(), ELLIPSIS) } else { (limit, "") };

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let c_width = UnicodeWidthChar::width(c).unwrap_or(1);
        if current_width + c_width > target {
            break;
        }
        result.push(c);
        current_width += c_width;
    }
    result.push_str(marker);
    result
}

#[cfg(test)]
#[path = "console_format_test.rs"]
mod console_format_test;
