//! Report generation module - record lists to rendered output.
//!
//! This module handles:
//! - Describing each record kind's columns, text block and JSON shape
//! - Planning which columns are worth showing
//! - Rendering tables, verbose text and JSON
//! - Dispatching to exactly one of those per call
//!
//! Low-level console rendering (borders, padding, colors) lives in the
//! console_format module.
//!
//! # Module Organization
//!
//! - `types` - Rendering model (CellValue, Column, ReportRecord)
//! - `records` - Schemas and text blocks for grades, students, professors
//! - `plan` - Column visibility and widths
//! - `table` - Bordered table output
//! - `simple` - Verbose text output
//! - `export` - JSON output and wire structs

mod export;
mod plan;
mod records;
mod simple;
mod table;
mod types;

// Re-export types
pub use types::{ReportRecord, empty_message};

use export::export_json;
use simple::render_text;
use table::render_table;

use crate::types::{OutputFormat, RenderConfig};
use log::debug;
use std::io::{self, Write};

/// Render records in the configured output format.
///
/// Exactly one renderer runs per call. Text and table short-circuit an empty
/// list with "No <kind> found."; the JSON encodings always emit an array.
pub fn render<R: ReportRecord>(records: &[R], config: &RenderConfig) -> io::Result<String> {
    debug!("rendering {} {} as {}", records.len(), R::KIND, config.format.name());

    match config.format {
        OutputFormat::Text => render_text(records, config.use_colors),
        OutputFormat::Table => render_table(records, config.use_colors),
        OutputFormat::PrettyJson => export_json(records, true),
        OutputFormat::CompactJson => export_json(records, false),
    }
}

/// Render records and write them to `out`.
pub fn write_report<R: ReportRecord, W: Write>(mut out: W, records: &[R], config: &RenderConfig) -> io::Result<()> {
    let rendered = render(records, config)?;
    out.write_all(rendered.as_bytes())?;
    out.flush()
}
