/// Core data structures for academic records
///
/// This module defines the canonical records handed to the renderers after
/// normalization, plus the small enums shared across the output pipeline.

/// Number of partial-period averages a course can carry
pub const UNIT_COUNT: usize = 6;

/// One student's grade state for one course attempt
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CourseGrade {
    pub course_id: i64,
    pub course_name: String,
    pub attempt: i64,
    /// Unit averages 1..=6, `None` when not submitted
    pub unit_averages: [Option<f64>; UNIT_COUNT],
    pub substitute_exam: Option<f64>,
    pub overall_average: Option<f64>,
    pub postponed_average: Option<f64>,
    pub final_average: Option<f64>,
    pub disqualified: bool,
    /// The portal already certified a pass
    pub official_final_status: bool,
}

impl CourseGrade {
    /// Semantic status derived from the partial data we have
    pub fn status(&self) -> GradeStatus {
        crate::status::classify(
            self.official_final_status,
            self.unit_averages[0],
            self.unit_averages[1],
            self.unit_averages[2],
            self.overall_average,
            self.final_average,
        )
    }

    /// Unit average by 1-based unit number
    pub fn unit(&self, number: usize) -> Option<f64> {
        number.checked_sub(1).and_then(|i| self.unit_averages.get(i).copied().flatten())
    }
}

/// A student returned by a search
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StudentMatch {
    pub id: String,
    pub name: String,
    pub national_id: String,
}

/// A professor returned by a search
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProfessorMatch {
    pub code: String,
    pub name: String,
    pub national_id: String,
    pub worker_id: String,
}

/// Pass/fail state of a course attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GradeStatus {
    Passed,
    Failed,
    /// Semester still in progress
    Pending,
}

impl GradeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GradeStatus::Passed => "PASSED",
            GradeStatus::Failed => "FAILED",
            GradeStatus::Pending => "PENDING",
        }
    }
}

impl std::fmt::Display for GradeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output encoding selected once per invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Verbose `Label: value` blocks
    Text,
    /// Bordered box-drawing table
    #[default]
    Table,
    /// Indented JSON array
    PrettyJson,
    /// Single-line JSON array for piping
    CompactJson,
}

impl OutputFormat {
    /// Parse a format name, `None` if the name is not recognized
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "text" | "default" => Some(OutputFormat::Text),
            "table" => Some(OutputFormat::Table),
            "json" | "pretty" | "pretty-json" => Some(OutputFormat::PrettyJson),
            "raw" | "compact" | "compact-json" => Some(OutputFormat::CompactJson),
            _ => None,
        }
    }

    /// Parse a format name, falling back to `Table` for anything unknown
    pub fn parse_lenient(name: &str) -> Self {
        Self::from_name(name).unwrap_or_else(|| {
            log::warn!("unknown output format '{}', falling back to table", name);
            OutputFormat::Table
        })
    }

    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Table => "table",
            OutputFormat::PrettyJson => "json",
            OutputFormat::CompactJson => "raw",
        }
    }

    pub fn is_json(&self) -> bool {
        matches!(self, OutputFormat::PrettyJson | OutputFormat::CompactJson)
    }
}

/// Rendering settings resolved once at startup and passed to every renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderConfig {
    pub format: OutputFormat,
    /// Print extra context lines (config file used, snapshot path)
    pub detailed: bool,
    /// Emit ANSI color sequences
    pub use_colors: bool,
}

impl RenderConfig {
    #[cfg(test)]
    pub fn plain(format: OutputFormat) -> Self {
        Self { format, detailed: false, use_colors: false }
    }
}

#[cfg(test)]
#[path = "data_structures_test.rs"]
mod data_structures_test;
