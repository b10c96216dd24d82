//! Schemas, text blocks and wire shapes for each record kind.

use super::export::{GradeJson, ProfessorJson, StudentJson};
use super::types::{CellValue, Column, ReportRecord, TextLine, grade_cell, status_cell};
use crate::console_format::{Align, Cell};
use crate::types::{CourseGrade, ProfessorMatch, StudentMatch};

/// Width of every numeric grade column
const GRADE_WIDTH: usize = 9;

/// Floor for identifier columns in person tables
const ID_MIN_WIDTH: usize = 13;

/// Floor for name columns in person tables
const NAME_MIN_WIDTH: usize = 36;

/// Shown under a disqualified course in the table
pub const DISQUALIFIED_WARNING: &str = "WARNING: Student disqualified";

/// Shown in the text block of a disqualified course
pub const DISQUALIFIED_NOTICE: &str = "Warning: the student was disqualified in this course";

/// Text-format labels for the optional averages, in display order
const AVERAGE_LABELS: [&str; 10] = [
    "Average of Unit 1",
    "Average of Unit 2",
    "Average of Unit 3",
    "Average of Unit 4",
    "Average of Unit 5",
    "Average of Unit 6",
    "Substitute exam",
    "Course Average",
    "Failed",
    "Course Final Average",
];

impl CourseGrade {
    /// Optional averages in the order of [`AVERAGE_LABELS`]
    fn optional_averages(&self) -> [Option<f64>; 10] {
        let u = &self.unit_averages;
        [
            u[0],
            u[1],
            u[2],
            u[3],
            u[4],
            u[5],
            self.substitute_exam,
            self.overall_average,
            self.postponed_average,
            self.final_average,
        ]
    }
}

impl ReportRecord for CourseGrade {
    const KIND: &'static str = "courses";

    type Wire = GradeJson;

    fn schema() -> Vec<Column<Self>> {
        vec![
            Column::fixed("Course", 9, Align::Right, |g: &CourseGrade| CellValue::Number(g.course_id))
                .always_visible(),
            Column::fixed("Course Name", 36, Align::Left, |g: &CourseGrade| CellValue::Text(g.course_name.clone()))
                .always_visible()
                .label_column(),
            Column::fixed("Attempt", 9, Align::Right, |g: &CourseGrade| CellValue::Number(g.attempt))
                .always_visible(),
            Column::fixed("Unit 1", GRADE_WIDTH, Align::Right, |g: &CourseGrade| CellValue::Grade(g.unit(1))),
            Column::fixed("Unit 2", GRADE_WIDTH, Align::Right, |g: &CourseGrade| CellValue::Grade(g.unit(2))),
            Column::fixed("Unit 3", GRADE_WIDTH, Align::Right, |g: &CourseGrade| CellValue::Grade(g.unit(3))),
            Column::fixed("Unit 4", GRADE_WIDTH, Align::Right, |g: &CourseGrade| CellValue::Grade(g.unit(4))),
            Column::fixed("Unit 5", GRADE_WIDTH, Align::Right, |g: &CourseGrade| CellValue::Grade(g.unit(5))),
            Column::fixed("Unit 6", GRADE_WIDTH, Align::Right, |g: &CourseGrade| CellValue::Grade(g.unit(6))),
            Column::fixed("Subst", GRADE_WIDTH, Align::Right, |g: &CourseGrade| CellValue::Grade(g.substitute_exam)),
            Column::fixed("Failed", GRADE_WIDTH, Align::Right, |g: &CourseGrade| {
                CellValue::Grade(g.postponed_average)
            }),
            Column::fixed("Average", GRADE_WIDTH, Align::Right, |g: &CourseGrade| {
                CellValue::Grade(g.overall_average)
            }),
            Column::fixed("Final Avg", GRADE_WIDTH, Align::Right, |g: &CourseGrade| {
                CellValue::Grade(g.final_average)
            }),
            Column::fixed("Status", 10, Align::Center, |g: &CourseGrade| CellValue::Status(g.status()))
                .always_visible(),
        ]
    }

    fn text_lines(&self) -> Vec<TextLine> {
        let mut lines = vec![
            TextLine::field("Course ID", Cell::plain(self.course_id.to_string())),
            TextLine::field("Course", Cell::plain(self.course_name.clone())),
            TextLine::field("Time", Cell::plain(self.attempt.to_string())),
        ];

        for (label, value) in AVERAGE_LABELS.into_iter().zip(self.optional_averages()) {
            if value.is_some() {
                lines.push(TextLine::field(label, grade_cell(value)));
            }
        }

        if self.disqualified {
            lines.push(TextLine::Warning(DISQUALIFIED_NOTICE));
        }

        lines.push(TextLine::field("Final status", status_cell(self.status())));
        lines
    }

    fn to_wire(&self) -> GradeJson {
        GradeJson::from(self)
    }

    fn table_warning(&self) -> Option<&'static str> {
        self.disqualified.then_some(DISQUALIFIED_WARNING)
    }
}

impl ReportRecord for StudentMatch {
    const KIND: &'static str = "students";
    const HEADING: Option<&'static str> = Some("Students found:");

    type Wire = StudentJson;

    fn schema() -> Vec<Column<Self>> {
        vec![
            Column::fitted("Student ID", ID_MIN_WIDTH, Align::Left, |s: &StudentMatch| CellValue::Text(s.id.clone()))
                .header_align(Align::Center),
            Column::fitted("Student Name", NAME_MIN_WIDTH, Align::Left, |s: &StudentMatch| {
                CellValue::Text(s.name.clone())
            })
            .label_column(),
            Column::fitted("DNI", ID_MIN_WIDTH, Align::Left, |s: &StudentMatch| {
                CellValue::Text(s.national_id.clone())
            })
            .header_align(Align::Center),
        ]
    }

    fn text_lines(&self) -> Vec<TextLine> {
        vec![
            TextLine::field("Code", Cell::plain(self.id.clone())),
            TextLine::field("Name", Cell::plain(self.name.clone())),
            TextLine::field("DNI", Cell::plain(self.national_id.clone())),
        ]
    }

    fn to_wire(&self) -> StudentJson {
        StudentJson::from(self)
    }
}

impl ReportRecord for ProfessorMatch {
    const KIND: &'static str = "professors";
    const HEADING: Option<&'static str> = Some("Professors found:");

    type Wire = ProfessorJson;

    fn schema() -> Vec<Column<Self>> {
        vec![
            Column::fitted("Code", ID_MIN_WIDTH, Align::Left, |p: &ProfessorMatch| CellValue::Text(p.code.clone()))
                .header_align(Align::Center),
            Column::fitted("Professor Name", NAME_MIN_WIDTH, Align::Left, |p: &ProfessorMatch| {
                CellValue::Text(p.name.clone())
            })
            .label_column(),
            Column::fitted("DNI", ID_MIN_WIDTH, Align::Left, |p: &ProfessorMatch| {
                CellValue::Text(p.national_id.clone())
            })
            .header_align(Align::Center),
            Column::fitted("Worker ID", ID_MIN_WIDTH, Align::Left, |p: &ProfessorMatch| {
                CellValue::Text(p.worker_id.clone())
            })
            .header_align(Align::Center),
        ]
    }

    fn text_lines(&self) -> Vec<TextLine> {
        vec![
            TextLine::field("Code", Cell::plain(self.code.clone())),
            TextLine::field("Name", Cell::plain(self.name.clone())),
            TextLine::field("DNI", Cell::plain(self.national_id.clone())),
            TextLine::field("Worker ID", Cell::plain(self.worker_id.clone())),
        ]
    }

    fn to_wire(&self) -> ProfessorJson {
        ProfessorJson::from(self)
    }
}
