/// Command execution: fetch, filter, render, decide the exit code
///
/// Commands take a [`Portal`] and a writer so they can run against a
/// snapshot in tests and against stdout in `main`.
use crate::portal::{Portal, StudentQuery};
use crate::report::{self, ReportRecord, empty_message};
use crate::types::{CourseGrade, RenderConfig};
use log::debug;
use std::collections::HashSet;
use std::io::Write;

/// Process exit code for a command that did its job
pub const EXIT_OK: i32 = 0;

/// Process exit code for failures and for filtered queries with no match
pub const EXIT_FAILURE: i32 = 1;

/// Printed when `search` has nothing to search by
pub const MISSING_CRITERIA: &str = "You must provide a code, name or dni";

/// Course selection for the `grades` command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GradeFilter {
    /// Raw course IDs as typed; invalid ones are reported and skipped
    pub course_ids: Vec<String>,
    /// Fragments matched against course names, ignoring case
    pub course_names: Vec<String>,
}

impl GradeFilter {
    pub fn is_empty(&self) -> bool {
        self.course_ids.is_empty() && self.course_names.is_empty()
    }
}

/// What the `search` command looks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchRequest {
    Students(StudentQuery),
    Professors { name: String, lastname: String },
}

/// List grades, optionally restricted by ID and name.
///
/// With filters, the result is every course whose ID was given or whose name
/// contains one of the fragments, in portal order. A filtered query that
/// matches nothing prints the empty message and exits with [`EXIT_FAILURE`];
/// an unfiltered empty listing is not an error.
pub fn run_grades<P: Portal + ?Sized, W: Write>(
    portal: &P,
    filter: &GradeFilter,
    config: &RenderConfig,
    out: &mut W,
) -> Result<i32, String> {
    let grades = portal.fetch_grades()?;
    debug!("fetched {} course grades", grades.len());

    if filter.is_empty() {
        write_records(out, &grades, config)?;
        return Ok(EXIT_OK);
    }

    let ids = parse_course_ids(&filter.course_ids, out)?;
    let selected = select_grades(grades, &ids, &filter.course_names);
    debug!("{} course grades match the filter", selected.len());

    if selected.is_empty() {
        writeln!(out, "{}", empty_message::<CourseGrade>()).map_err(write_error)?;
        return Ok(EXIT_FAILURE);
    }

    write_records(out, &selected, config)?;
    Ok(EXIT_OK)
}

/// Run a student or professor search and render the hits.
///
/// An empty result is rendered like any other list and is not an error.
pub fn run_search<P: Portal + ?Sized, W: Write>(
    portal: &P,
    request: &SearchRequest,
    config: &RenderConfig,
    out: &mut W,
) -> Result<i32, String> {
    match request {
        SearchRequest::Students(query) => {
            let students = portal.search_students(query)?;
            debug!("{} students found", students.len());
            write_records(out, &students, config)?;
        }
        SearchRequest::Professors { name, lastname } => {
            let professors = portal.search_professors(name, lastname)?;
            debug!("{} professors found", professors.len());
            write_records(out, &professors, config)?;
        }
    }
    Ok(EXIT_OK)
}

/// Keep the IDs that parse as integers, reporting the rest on `out`
fn parse_course_ids<W: Write>(raw_ids: &[String], out: &mut W) -> Result<HashSet<i64>, String> {
    let mut ids = HashSet::new();
    for raw in raw_ids {
        match raw.trim().parse::<i64>() {
            Ok(id) => {
                ids.insert(id);
            }
            Err(_) => writeln!(out, "Invalid course ID: {}", raw).map_err(write_error)?,
        }
    }
    Ok(ids)
}

/// Grades selected by ID or by name fragment, in their original order
fn select_grades(grades: Vec<CourseGrade>, ids: &HashSet<i64>, names: &[String]) -> Vec<CourseGrade> {
    let fragments: Vec<String> = names.iter().map(|n| n.trim().to_lowercase()).filter(|n| !n.is_empty()).collect();

    grades
        .into_iter()
        .filter(|g| {
            let name = g.course_name.to_lowercase();
            ids.contains(&g.course_id) || fragments.iter().any(|f| name.contains(f.as_str()))
        })
        .collect()
}

fn write_records<R: ReportRecord, W: Write>(out: &mut W, records: &[R], config: &RenderConfig) -> Result<(), String> {
    report::write_report(&mut *out, records, config).map_err(|e| {
        if config.format.is_json() { format!("Failed to encode JSON output: {}", e) } else { write_error(e) }
    })
}

fn write_error(e: std::io::Error) -> String {
    format!("Failed to write output: {}", e)
}
