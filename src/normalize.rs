/// Record normalization
///
/// Raw portal records arrive with numbers encoded as text, zero used as a
/// "not submitted" sentinel, and flags encoded as `"0"`/`"1"`. Everything in
/// this module turns those transport quirks into the canonical records from
/// `types`, so the renderers never see them.
///
/// A field that cannot be parsed is logged and treated as absent; it never
/// aborts the record or the rest of the list.
use crate::types::{CourseGrade, ProfessorMatch, StudentMatch, UNIT_COUNT};
use log::warn;
use serde::Deserialize;

/// A scalar as the portal may send it
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

/// Course grade exactly as found in a portal export
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawCourseGrade {
    pub course_id: Option<RawValue>,
    pub course_name: Option<String>,
    pub attempt: Option<RawValue>,
    pub average1: Option<RawValue>,
    pub average2: Option<RawValue>,
    pub average3: Option<RawValue>,
    pub average4: Option<RawValue>,
    pub average5: Option<RawValue>,
    pub average6: Option<RawValue>,
    pub substitute: Option<RawValue>,
    pub average: Option<RawValue>,
    pub postponed: Option<RawValue>,
    pub final_average: Option<RawValue>,
    pub disabled: Option<RawValue>,
    pub final_status: Option<RawValue>,
}

/// Student search hit as found in a portal export
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawStudent {
    pub student_id: Option<RawValue>,
    pub student_name: Option<String>,
    pub dni: Option<RawValue>,
}

/// Professor search hit as found in a portal export
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawProfessor {
    pub code: Option<RawValue>,
    pub professor_name: Option<String>,
    pub dni: Option<RawValue>,
    pub worker_id: Option<RawValue>,
}

/// Portal markers for an officially certified pass
const PASSED_MARKERS: [&str; 2] = ["APROBADO", "PASSED"];

/// Normalize one raw course grade
pub fn normalize_grade(raw: &RawCourseGrade) -> CourseGrade {
    let course_name = raw.course_name.clone().unwrap_or_default().trim().to_string();
    let course_id = parse_integer(&course_name, "courseId", raw.course_id.as_ref());
    let ctx = if course_name.is_empty() { course_id.to_string() } else { course_name.clone() };

    let raw_units = [&raw.average1, &raw.average2, &raw.average3, &raw.average4, &raw.average5, &raw.average6];
    let mut unit_averages = [None; UNIT_COUNT];
    for (i, value) in raw_units.iter().enumerate() {
        unit_averages[i] = parse_decimal(&ctx, &format!("average{}", i + 1), value.as_ref());
    }

    CourseGrade {
        course_id,
        attempt: parse_integer(&ctx, "attempt", raw.attempt.as_ref()),
        unit_averages,
        substitute_exam: parse_decimal(&ctx, "substitute", raw.substitute.as_ref()),
        overall_average: parse_decimal(&ctx, "average", raw.average.as_ref()),
        postponed_average: parse_decimal(&ctx, "postponed", raw.postponed.as_ref()),
        final_average: parse_decimal(&ctx, "finalAverage", raw.final_average.as_ref()),
        disqualified: parse_flag(raw.disabled.as_ref()),
        official_final_status: parse_official_status(raw.final_status.as_ref()),
        course_name,
    }
}

pub fn normalize_grades(raw: &[RawCourseGrade]) -> Vec<CourseGrade> {
    raw.iter().map(normalize_grade).collect()
}

pub fn normalize_student(raw: &RawStudent) -> StudentMatch {
    StudentMatch {
        id: text_of(raw.student_id.as_ref()),
        name: raw.student_name.clone().unwrap_or_default().trim().to_string(),
        national_id: text_of(raw.dni.as_ref()),
    }
}

pub fn normalize_professor(raw: &RawProfessor) -> ProfessorMatch {
    ProfessorMatch {
        code: text_of(raw.code.as_ref()),
        name: raw.professor_name.clone().unwrap_or_default().trim().to_string(),
        national_id: text_of(raw.dni.as_ref()),
        worker_id: text_of(raw.worker_id.as_ref()),
    }
}

/// Parse a grade-like decimal. Zero, blank and unparsable values are absent.
pub fn parse_decimal(ctx: &str, field: &str, value: Option<&RawValue>) -> Option<f64> {
    let parsed = match value? {
        RawValue::Number(n) => *n,
        RawValue::Text(s) => {
            let s = s.trim();
            if s.is_empty() {
                return None;
            }
            match s.parse::<f64>() {
                Ok(n) => n,
                Err(e) => {
                    warn!("{}: ignoring unparsable {} '{}': {}", ctx, field, s, e);
                    return None;
                }
            }
        }
        RawValue::Bool(b) => {
            warn!("{}: ignoring non-numeric {} '{}'", ctx, field, b);
            return None;
        }
    };

    if !parsed.is_finite() {
        warn!("{}: ignoring non-finite {}", ctx, field);
        return None;
    }

    // Zero is the portal's "not submitted" sentinel
    if parsed == 0.0 { None } else { Some(parsed) }
}

/// Parse an integer field; unparsable values become 0.
pub fn parse_integer(ctx: &str, field: &str, value: Option<&RawValue>) -> i64 {
    let parsed = match value {
        None => return 0,
        Some(RawValue::Number(n)) if n.fract() == 0.0 && n.is_finite() => Some(*n as i64),
        Some(RawValue::Text(s)) => s.trim().parse::<i64>().ok(),
        Some(_) => None,
    };

    parsed.unwrap_or_else(|| {
        warn!("{}: ignoring unparsable {} {:?}", ctx, field, value);
        0
    })
}

/// `"0"`, blank, `0` and `false` are false; anything else is true.
pub fn parse_flag(value: Option<&RawValue>) -> bool {
    match value {
        None => false,
        Some(RawValue::Bool(b)) => *b,
        Some(RawValue::Number(n)) => *n != 0.0,
        Some(RawValue::Text(s)) => {
            let s = s.trim();
            !s.is_empty() && s != "0"
        }
    }
}

pub fn parse_official_status(value: Option<&RawValue>) -> bool {
    match value {
        None => false,
        Some(RawValue::Bool(b)) => *b,
        Some(RawValue::Number(n)) => *n != 0.0,
        Some(RawValue::Text(s)) => PASSED_MARKERS.iter().any(|m| s.trim().eq_ignore_ascii_case(m)),
    }
}

fn text_of(value: Option<&RawValue>) -> String {
    match value {
        None => String::new(),
        Some(RawValue::Text(s)) => s.trim().to_string(),
        Some(RawValue::Number(n)) if n.fract() == 0.0 => format!("{}", *n as i64),
        Some(RawValue::Number(n)) => n.to_string(),
        Some(RawValue::Bool(b)) => b.to_string(),
    }
}
