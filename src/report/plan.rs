//! Column planning.
//!
//! Decides which columns of a fixed schema are worth showing for a given
//! record list and how wide each one is. Planning depends only on the data
//! and keeps schema order, so the same records always give the same table.

use super::types::{Column, Sizing};
use crate::console_format::display_width;
use log::debug;

/// Padding added to fitted columns around their widest content
pub const FITTED_PADDING: usize = 2;

/// Space a fixed column keeps beside its header and untruncated content
pub const FIXED_MARGIN: usize = 2;

/// A schema column selected for display, with its resolved width
pub struct PlannedColumn<'a, R> {
    pub column: &'a Column<R>,
    pub width: usize,
}

/// Select the visible columns of `schema` and size them.
pub fn plan<'a, R>(records: &[R], schema: &'a [Column<R>]) -> Vec<PlannedColumn<'a, R>> {
    let planned: Vec<PlannedColumn<'a, R>> = schema
        .iter()
        .filter(|column| column.always_visible || has_data(records, column))
        .map(|column| PlannedColumn { column, width: column_width(records, column) })
        .collect();

    debug!(
        "planned {} of {} columns: {:?}",
        planned.len(),
        schema.len(),
        labels(&planned)
    );
    planned
}

/// Labels of the planned columns, in order
pub fn labels<R>(planned: &[PlannedColumn<'_, R>]) -> Vec<&'static str> {
    planned.iter().map(|p| p.column.label).collect()
}

fn has_data<R>(records: &[R], column: &Column<R>) -> bool {
    records.iter().any(|record| (column.extract)(record).is_present())
}

fn column_width<R>(records: &[R], column: &Column<R>) -> usize {
    match column.sizing {
        Sizing::Fixed(width) => {
            // a fixed width is a floor: labels and numbers never overflow it
            let content = records
                .iter()
                .map(|record| (column.extract)(record))
                .filter(|value| !value.truncates())
                .map(|value| display_width(&value.to_cell().text))
                .max()
                .unwrap_or(0);
            width.max(content.max(display_width(column.label)) + FIXED_MARGIN)
        }
        Sizing::Fitted { min } => {
            let content = records
                .iter()
                .map(|record| display_width(&(column.extract)(record).to_cell().text))
                .max()
                .unwrap_or(0);
            (content.max(display_width(column.label)) + FITTED_PADDING).max(min)
        }
    }
}
