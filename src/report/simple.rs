//! Simple output format: verbose `Label: value` blocks.
//!
//! One block per record with a blank line between blocks and no borders.
//! Easier to read on narrow terminals and to grep than the table.

use super::types::{ReportRecord, TextLine, empty_message};
use crate::console_format::TableWriter;
use std::io;
use term::color;

/// Render records as verbose text blocks.
pub fn render_text<R: ReportRecord>(records: &[R], use_colors: bool) -> io::Result<String> {
    if records.is_empty() {
        return Ok(format!("{}\n", empty_message::<R>()));
    }

    let mut writer = TableWriter::new(Vec::new(), use_colors);
    if let Some(heading) = R::HEADING {
        writer.write_line(heading)?;
        writer.writeln()?;
    }

    for (i, record) in records.iter().enumerate() {
        if i > 0 {
            writer.writeln()?;
        }
        for line in record.text_lines() {
            match line {
                TextLine::Field { label, value } => writer.write_field(label, &value)?,
                TextLine::Warning(text) => writer.write_colored_line(text, color::RED)?,
            }
        }
    }

    Ok(String::from_utf8_lossy(&writer.into_inner()).into_owned())
}
