//! Report type definitions for the rendering model.
//!
//! A record kind describes itself once through [`ReportRecord`]: its fixed
//! column schema, its verbose text block and its JSON wire shape. Columns
//! carry a plain extraction function returning a tagged [`CellValue`], so the
//! renderers never switch on column names.

use crate::console_format::{Align, Cell};
use crate::types::GradeStatus;
use serde::Serialize;
use term::color::{self, Color};

/// Grades below this value are shown in the warning color
pub const GRADE_WARNING_BELOW: f64 = 13.5;

/// Placeholder for an absent grade
pub const ABSENT_GRADE: &str = "-";

/// Extracted cell content, tagged by how it is formatted.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Plain text, truncated to fit its column
    Text(String),
    /// Identifier or counter, shown in full
    Number(i64),
    /// Numeric grade: two decimals, colored by threshold, `-` when absent
    Grade(Option<f64>),
    /// Classified status, colored by status
    Status(GradeStatus),
}

impl CellValue {
    /// Whether this value counts as data for column visibility
    pub fn is_present(&self) -> bool {
        match self {
            CellValue::Grade(value) => value.is_some(),
            CellValue::Text(_) | CellValue::Number(_) | CellValue::Status(_) => true,
        }
    }

    /// Only free text may be cut short; everything else sizes its column
    pub fn truncates(&self) -> bool {
        matches!(self, CellValue::Text(_))
    }

    pub fn to_cell(&self) -> Cell {
        match self {
            CellValue::Text(text) => Cell::plain(text.clone()),
            CellValue::Number(n) => Cell::plain(n.to_string()),
            CellValue::Grade(value) => grade_cell(*value),
            CellValue::Status(status) => status_cell(*status),
        }
    }
}

/// Format a grade; the threshold is inclusive on the high side.
pub fn grade_cell(value: Option<f64>) -> Cell {
    match value {
        None => Cell::plain(ABSENT_GRADE),
        Some(v) => Cell::colored(format!("{:.2}", v), grade_color(v)),
    }
}

pub fn grade_color(value: f64) -> Color {
    if value < GRADE_WARNING_BELOW { color::RED } else { color::BRIGHT_BLUE }
}

pub fn status_cell(status: GradeStatus) -> Cell {
    Cell::colored(status.as_str(), status_color(status))
}

pub fn status_color(status: GradeStatus) -> Color {
    match status {
        GradeStatus::Passed => color::GREEN,
        GradeStatus::Failed => color::RED,
        GradeStatus::Pending => color::YELLOW,
    }
}

/// How a column's width is decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sizing {
    /// Always exactly this wide
    Fixed(usize),
    /// Widest of header and content plus padding, never below `min`
    Fitted { min: usize },
}

/// One entry of a record kind's fixed candidate schema.
pub struct Column<R> {
    pub label: &'static str,
    pub align: Align,
    pub header_align: Align,
    pub sizing: Sizing,
    /// Shown even when no record has data for it
    pub always_visible: bool,
    /// Carries the warning text of a record's sub-row
    pub label_column: bool,
    pub extract: fn(&R) -> CellValue,
}

impl<R> Column<R> {
    pub fn fixed(label: &'static str, width: usize, align: Align, extract: fn(&R) -> CellValue) -> Self {
        Self {
            label,
            align,
            header_align: align,
            sizing: Sizing::Fixed(width),
            always_visible: false,
            label_column: false,
            extract,
        }
    }

    /// Fitted columns are always visible
    pub fn fitted(label: &'static str, min: usize, align: Align, extract: fn(&R) -> CellValue) -> Self {
        Self {
            label,
            align,
            header_align: align,
            sizing: Sizing::Fitted { min },
            always_visible: true,
            label_column: false,
            extract,
        }
    }

    pub fn always_visible(mut self) -> Self {
        self.always_visible = true;
        self
    }

    /// Align the header label differently from the cells
    pub fn header_align(mut self, align: Align) -> Self {
        self.header_align = align;
        self
    }

    pub fn label_column(mut self) -> Self {
        self.label_column = true;
        self
    }
}

/// A line of the verbose text format.
#[derive(Debug, Clone, PartialEq)]
pub enum TextLine {
    /// `Label: value`
    Field { label: &'static str, value: Cell },
    /// A full line in the warning color
    Warning(&'static str),
}

impl TextLine {
    pub fn field(label: &'static str, value: Cell) -> Self {
        TextLine::Field { label, value }
    }
}

/// A record kind the report module can render in every format.
pub trait ReportRecord: Sized {
    /// Plural noun for "No <kind> found."
    const KIND: &'static str;

    /// Line printed above text and table listings
    const HEADING: Option<&'static str> = None;

    /// JSON shape with stable field names
    type Wire: Serialize;

    /// Fixed candidate columns, in display order
    fn schema() -> Vec<Column<Self>>;

    /// Verbose text block for this record
    fn text_lines(&self) -> Vec<TextLine>;

    fn to_wire(&self) -> Self::Wire;

    /// Warning shown in a sub-row under this record's table row
    fn table_warning(&self) -> Option<&'static str> {
        None
    }
}

/// "No courses found." and friends
pub fn empty_message<R: ReportRecord>() -> String {
    format!("No {} found.", R::KIND)
}
