//! JSON export for every record kind.
//!
//! Pretty and compact output serialize the same wire structs, so both carry
//! identical data and differ only in whitespace. Field names are part of the
//! tool's interface and must not follow internal renames.

use super::types::ReportRecord;
use crate::types::{CourseGrade, ProfessorMatch, StudentMatch};
use serde::{Deserialize, Serialize};
use std::io;

/// Wire shape of a course grade
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeJson {
    pub course_id: i64,
    pub course_name: String,
    pub attempt: i64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub average_1: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub average_2: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub average_3: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub average_4: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub average_5: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub average_6: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub substitute: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub average: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub postponed: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub final_average: Option<f64>,
    pub disabled: bool,
    /// Derived status: PASSED, FAILED or PENDING
    pub final_status: String,
}

impl From<&CourseGrade> for GradeJson {
    fn from(grade: &CourseGrade) -> Self {
        let u = &grade.unit_averages;
        GradeJson {
            course_id: grade.course_id,
            course_name: grade.course_name.clone(),
            attempt: grade.attempt,
            average_1: u[0],
            average_2: u[1],
            average_3: u[2],
            average_4: u[3],
            average_5: u[4],
            average_6: u[5],
            substitute: grade.substitute_exam,
            average: grade.overall_average,
            postponed: grade.postponed_average,
            final_average: grade.final_average,
            disabled: grade.disqualified,
            final_status: grade.status().as_str().to_string(),
        }
    }
}

/// Wire shape of a student search hit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentJson {
    pub student_id: String,
    pub student_name: String,
    pub dni: String,
}

impl From<&StudentMatch> for StudentJson {
    fn from(student: &StudentMatch) -> Self {
        StudentJson {
            student_id: student.id.clone(),
            student_name: student.name.clone(),
            dni: student.national_id.clone(),
        }
    }
}

/// Wire shape of a professor search hit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfessorJson {
    pub code: String,
    pub professor_name: String,
    pub dni: String,
    pub worker_id: String,
}

impl From<&ProfessorMatch> for ProfessorJson {
    fn from(professor: &ProfessorMatch) -> Self {
        ProfessorJson {
            code: professor.code.clone(),
            professor_name: professor.name.clone(),
            dni: professor.national_id.clone(),
            worker_id: professor.worker_id.clone(),
        }
    }
}

/// Export records as a JSON array, indented or on a single line.
///
/// An empty list still produces `[]`. The output ends with a newline.
pub fn export_json<R: ReportRecord>(records: &[R], pretty: bool) -> io::Result<String> {
    let wire: Vec<R::Wire> = records.iter().map(R::to_wire).collect();

    let mut output = if pretty { serde_json::to_string_pretty(&wire)? } else { serde_json::to_string(&wire)? };
    output.push('\n');
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn sample_grades() -> Vec<CourseGrade> {
        let mut passed = CourseGrade {
            course_id: 4521,
            course_name: "CALCULO I".to_string(),
            attempt: 1,
            overall_average: Some(15.25),
            ..Default::default()
        };
        passed.unit_averages[..3].copy_from_slice(&[Some(15.0), Some(16.0), Some(14.75)]);

        let pending = CourseGrade {
            course_id: 4522,
            course_name: "FISICA \"A\"".to_string(),
            attempt: 2,
            disqualified: true,
            ..Default::default()
        };
        vec![passed, pending]
    }

    #[test]
    fn test_empty_list_is_empty_array() {
        assert_eq!(export_json::<CourseGrade>(&[], true).unwrap(), "[]\n");
        assert_eq!(export_json::<StudentMatch>(&[], false).unwrap(), "[]\n");
    }

    #[test]
    fn test_pretty_and_compact_carry_same_data() {
        let grades = sample_grades();
        let pretty = export_json(&grades, true).unwrap();
        let compact = export_json(&grades, false).unwrap();

        assert_ne!(pretty, compact);
        assert_eq!(compact.trim_end().lines().count(), 1);

        let a: Value = serde_json::from_str(&pretty).unwrap();
        let b: Value = serde_json::from_str(&compact).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_grade_fields() {
        let compact = export_json(&sample_grades(), false).unwrap();
        let value: Value = serde_json::from_str(&compact).unwrap();

        let first = &value[0];
        assert_eq!(first["course_id"], 4521);
        assert_eq!(first["course_name"], "CALCULO I");
        assert_eq!(first["average_1"], 15.0);
        assert_eq!(first["average"], 15.25);
        assert_eq!(first["final_status"], "PASSED");
        assert_eq!(first["disabled"], false);
        assert!(first.get("average_4").is_none());
        assert!(first.get("final_average").is_none());

        let second = &value[1];
        assert_eq!(second["final_status"], "PENDING");
        assert_eq!(second["disabled"], true);
        assert_eq!(second["course_name"], "FISICA \"A\"");
    }

    #[test]
    fn test_person_fields() {
        let professors = vec![ProfessorMatch {
            code: "P-12".to_string(),
            name: "LUIS RAMOS".to_string(),
            national_id: "18001234".to_string(),
            worker_id: "5521".to_string(),
        }];
        let value: Value = serde_json::from_str(&export_json(&professors, true).unwrap()).unwrap();
        assert_eq!(value[0]["code"], "P-12");
        assert_eq!(value[0]["professor_name"], "LUIS RAMOS");
        assert_eq!(value[0]["dni"], "18001234");
        assert_eq!(value[0]["worker_id"], "5521");
    }
}
