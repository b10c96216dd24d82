//! Table output formatting for record lists.
//!
//! Every record kind goes through the same routine: plan the columns, then
//! draw top border, header, separator, one row per record (plus an optional
//! warning sub-row) and bottom border.

use super::plan::{PlannedColumn, plan};
use super::types::{CellValue, ReportRecord, empty_message};
use crate::console_format::{Align, Border, Cell, TableWriter, truncate_text};
use std::io::{self, Write};
use term::color;

/// Space a text cell keeps free around its content
pub const CELL_PADDING: usize = 2;

/// Render records as a bordered table.
///
/// An empty list renders as the "No <kind> found." line with no borders.
pub fn render_table<R: ReportRecord>(records: &[R], use_colors: bool) -> io::Result<String> {
    if records.is_empty() {
        return Ok(format!("{}\n", empty_message::<R>()));
    }

    let schema = R::schema();
    let columns = plan(records, &schema);

    let mut writer = TableWriter::new(Vec::new(), use_colors);
    if let Some(heading) = R::HEADING {
        writer.write_line(heading)?;
    }
    write_table(&mut writer, records, &columns)?;

    Ok(String::from_utf8_lossy(&writer.into_inner()).into_owned())
}

fn write_table<R: ReportRecord, W: Write>(
    writer: &mut TableWriter<W>,
    records: &[R],
    columns: &[PlannedColumn<'_, R>],
) -> io::Result<()> {
    let widths: Vec<usize> = columns.iter().map(|c| c.width).collect();

    writer.write_border(Border::Top, &widths)?;
    let header: Vec<(Cell, usize, Align)> =
        columns.iter().map(|c| (Cell::plain(c.column.label), c.width, c.column.header_align)).collect();
    writer.write_row(&header)?;
    writer.write_border(Border::Separator, &widths)?;

    for record in records {
        writer.write_row(&record_cells(record, columns))?;
        if let Some(warning) = record.table_warning() {
            writer.write_row(&warning_cells(warning, columns))?;
        }
    }

    writer.write_border(Border::Bottom, &widths)
}

/// Cells of one record's row
fn record_cells<R>(record: &R, columns: &[PlannedColumn<'_, R>]) -> Vec<(Cell, usize, Align)> {
    columns
        .iter()
        .map(|c| {
            let cell = match (c.column.extract)(record) {
                CellValue::Text(text) => Cell::plain(truncate_text(&text, c.width.saturating_sub(CELL_PADDING))),
                value => value.to_cell(),
            };
            (cell, c.width, c.column.align)
        })
        .collect()
}

/// Cells of a warning sub-row: blank except for the label column
fn warning_cells<R>(warning: &str, columns: &[PlannedColumn<'_, R>]) -> Vec<(Cell, usize, Align)> {
    columns
        .iter()
        .map(|c| {
            let cell = if c.column.label_column {
                Cell::colored(truncate_text(warning, c.width.saturating_sub(CELL_PADDING)), color::RED)
            } else {
                Cell::default()
            };
            (cell, c.width, Align::Left)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console_format::display_width;
    use crate::types::{CourseGrade, ProfessorMatch, StudentMatch};

    fn grade(id: i64, name: &str, units: [Option<f64>; 3]) -> CourseGrade {
        let mut grade = CourseGrade { course_id: id, course_name: name.to_string(), attempt: 1, ..Default::default() };
        grade.unit_averages[..3].copy_from_slice(&units);
        grade
    }

    #[test]
    fn test_empty_table_has_no_borders() {
        assert_eq!(render_table::<CourseGrade>(&[], true).unwrap(), "No courses found.\n");
        assert_eq!(render_table::<StudentMatch>(&[], false).unwrap(), "No students found.\n");
        assert_eq!(render_table::<ProfessorMatch>(&[], false).unwrap(), "No professors found.\n");
    }

    #[test]
    fn test_grade_table_layout() {
        let mut record = grade(4521, "CALCULO I", [Some(15.0), Some(12.5), None]);
        record.attempt = 2;
        let out = render_table(&[record], false).unwrap();
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with('╭') && lines[0].ends_with('╮'));
        assert!(lines[2].starts_with('├') && lines[2].ends_with('┤'));
        assert!(lines[4].starts_with('╰') && lines[4].ends_with('╯'));
        assert_eq!(
            lines[1],
            "│  Course │ Course Name                        │ Attempt │  Unit 1 │  Unit 2 │  Status  │"
        );
        assert_eq!(
            lines[3],
            "│    4521 │ CALCULO I                          │       2 │   15.00 │   12.50 │ PENDING  │"
        );

        // every line has the same display width
        let width = display_width(lines[0]);
        assert!(lines.iter().all(|l| display_width(l) == width));
    }

    #[test]
    fn test_full_grade_schema_keeps_grid() {
        let mut record = grade(4530, "PROGRAMACION ORIENTADA A OBJETOS", [Some(15.0), Some(14.0), Some(16.5)]);
        record.unit_averages[3..].copy_from_slice(&[Some(12.0), Some(18.0), Some(11.25)]);
        record.substitute_exam = Some(14.0);
        record.postponed_average = Some(10.0);
        record.overall_average = Some(14.8);
        record.final_average = Some(15.2);
        record.disqualified = true;
        let out = render_table(&[record], false).unwrap();
        let lines: Vec<&str> = out.lines().collect();

        // all 14 columns are shown
        assert_eq!(lines[1].matches('│').count(), 15);
        assert!(lines[1].ends_with("│ Final Avg │  Status  │"), "header was: {}", lines[1]);
        assert!(lines[3].ends_with("│     15.20 │  PASSED  │"), "row was: {}", lines[3]);

        let width = display_width(lines[0]);
        for line in &lines {
            assert_eq!(display_width(line), width, "ragged line: {}", line);
        }
    }

    #[test]
    fn test_long_ids_are_never_truncated() {
        let mut record = grade(12345678, "CALCULO I", [Some(15.0), None, None]);
        record.attempt = 123456789;
        let out = render_table(&[record], false).unwrap();
        let lines: Vec<&str> = out.lines().collect();

        assert!(lines[3].starts_with("│ 12345678 │ CALCULO I "), "row was: {}", lines[3]);
        assert!(lines[3].contains("│ 123456789 │"));
        assert!(!out.contains("..."));

        let width = display_width(lines[0]);
        assert!(lines.iter().all(|l| display_width(l) == width));
    }

    #[test]
    fn test_absent_grade_shows_dash() {
        let records = vec![grade(1, "A", [Some(15.0), None, None]), grade(2, "B", [None, None, None])];
        let out = render_table(&records, false).unwrap();
        let row = out.lines().nth(4).unwrap();
        assert!(row.contains("│       - │"), "row was: {}", row);
    }

    #[test]
    fn test_grade_color_boundary() {
        let records = vec![grade(1, "A", [Some(13.4), Some(13.5), None])];
        let out = render_table(&records, true).unwrap();
        assert!(out.contains("\x1b[31m13.40\x1b[0m"));
        assert!(out.contains("\x1b[94m13.50\x1b[0m"));
    }

    #[test]
    fn test_status_colors() {
        let failed = grade(1, "A", [Some(10.0), Some(10.0), Some(10.0)]);
        let pending = grade(2, "B", [Some(10.0), None, None]);
        let mut passed = grade(3, "C", [None, None, None]);
        passed.official_final_status = true;

        let out = render_table(&[failed, pending, passed], true).unwrap();
        assert!(out.contains("\x1b[31mFAILED\x1b[0m"));
        assert!(out.contains("\x1b[33mPENDING\x1b[0m"));
        assert!(out.contains("\x1b[32mPASSED\x1b[0m"));
    }

    #[test]
    fn test_no_escapes_without_colors() {
        let records = vec![grade(1, "A", [Some(13.4), Some(18.0), Some(11.0)])];
        let out = render_table(&records, false).unwrap();
        assert!(!out.contains('\x1b'));
    }

    #[test]
    fn test_long_course_name_truncated() {
        let name = "SEMINARIO DE INVESTIGACION EN INGENIERIA DE SISTEMAS";
        let out = render_table(&[grade(1, name, [None, None, None])], false).unwrap();
        assert!(out.contains("│ SEMINARIO DE INVESTIGACION EN I... │"));
        assert!(!out.contains(name));
    }

    #[test]
    fn test_disqualified_sub_row() {
        let mut record = grade(7, "QUIMICA", [Some(8.0), None, None]);
        record.disqualified = true;
        let out = render_table(&[record, grade(8, "BIOLOGIA", [None, None, None])], false).unwrap();
        let lines: Vec<&str> = out.lines().collect();

        // 3 borders, header, 2 data rows and 1 warning row
        assert_eq!(lines.len(), 7);
        assert_eq!(
            lines[4],
            "│         │ WARNING: Student disqualified      │         │         │          │"
        );
        assert!(lines[5].contains("BIOLOGIA"));
    }

    #[test]
    fn test_disqualified_warning_colored_without_padding() {
        let mut record = grade(7, "QUIMICA", [None, None, None]);
        record.disqualified = true;
        let out = render_table(&[record], true).unwrap();
        assert!(out.contains("│ \x1b[31mWARNING: Student disqualified\x1b[0m      │"));
    }

    #[test]
    fn test_student_table() {
        let students = vec![StudentMatch {
            id: "1023300118".to_string(),
            name: "ANA TORRES".to_string(),
            national_id: "70123456".to_string(),
        }];
        let out = render_table(&students, false).unwrap();
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], "Students found:");
        assert_eq!(lines[2], "│ Student ID  │ Student Name                       │     DNI     │");
        assert_eq!(lines[4], "│ 1023300118  │ ANA TORRES                         │ 70123456    │");
    }

    #[test]
    fn test_professor_table_widens_for_long_names() {
        let name = "JOSE ANTONIO DE LA CRUZ VILLANUEVA SANCHEZ";
        let professors = vec![ProfessorMatch {
            code: "P-12".to_string(),
            name: name.to_string(),
            national_id: "18001234".to_string(),
            worker_id: "5521".to_string(),
        }];
        let out = render_table(&professors, false).unwrap();
        assert!(out.starts_with("Professors found:\n"));
        assert!(out.contains(&format!("│ {} │", name)));
        assert!(out.contains("Worker ID"));
    }

    #[test]
    fn test_professor_headers_are_centered() {
        let professors = vec![ProfessorMatch {
            code: "P-12".to_string(),
            name: "JOSE VILLANUEVA".to_string(),
            national_id: "18001234".to_string(),
            worker_id: "5521".to_string(),
        }];
        let out = render_table(&professors, false).unwrap();
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[2], "│    Code     │ Professor Name                     │     DNI     │  Worker ID  │");
        assert_eq!(lines[4], "│ P-12        │ JOSE VILLANUEVA                    │ 18001234    │ 5521        │");
    }
}
