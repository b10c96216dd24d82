//! Final status classification for a course attempt.

use crate::types::GradeStatus;

/// Minimum average that passes a completed course
pub const PASSING_AVERAGE: f64 = 14.0;

/// Classify a course attempt from whatever grade data is available.
///
/// An official pass from the portal wins outright. Otherwise the first three
/// unit averages must all be present before the course counts as complete;
/// a complete course passes when either the overall or the final average
/// reaches [`PASSING_AVERAGE`].
pub fn classify(
    official_final_status: bool,
    unit1: Option<f64>,
    unit2: Option<f64>,
    unit3: Option<f64>,
    overall_average: Option<f64>,
    final_average: Option<f64>,
) -> GradeStatus {
    if official_final_status {
        return GradeStatus::Passed;
    }

    if unit1.is_none() || unit2.is_none() || unit3.is_none() {
        return GradeStatus::Pending;
    }

    let reaches = |avg: Option<f64>| avg.is_some_and(|v| v >= PASSING_AVERAGE);
    if reaches(overall_average) || reaches(final_average) { GradeStatus::Passed } else { GradeStatus::Failed }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_official_status_wins() {
        assert_eq!(classify(true, None, None, None, Some(10.0), Some(9.0)), GradeStatus::Passed);
        assert_eq!(classify(true, Some(5.0), Some(5.0), Some(5.0), Some(5.0), None), GradeStatus::Passed);
    }

    #[test]
    fn test_complete_course_below_threshold_fails() {
        let status = classify(false, Some(15.0), Some(15.0), Some(15.0), Some(10.0), Some(10.0));
        assert_eq!(status, GradeStatus::Failed);
    }

    #[test]
    fn test_missing_unit_is_pending() {
        assert_eq!(classify(false, None, Some(15.0), Some(15.0), Some(10.0), Some(10.0)), GradeStatus::Pending);
        assert_eq!(classify(false, Some(15.0), Some(15.0), None, Some(18.0), Some(18.0)), GradeStatus::Pending);
    }

    #[test]
    fn test_overall_average_alone_passes() {
        let status = classify(false, Some(15.0), Some(15.0), Some(15.0), Some(14.0), Some(9.0));
        assert_eq!(status, GradeStatus::Passed);
    }

    #[test]
    fn test_final_average_alone_passes() {
        let status = classify(false, Some(12.0), Some(13.0), Some(11.0), None, Some(14.0));
        assert_eq!(status, GradeStatus::Passed);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let just_below = classify(false, Some(1.0), Some(1.0), Some(1.0), Some(13.99), Some(13.99));
        assert_eq!(just_below, GradeStatus::Failed);
        let at = classify(false, Some(1.0), Some(1.0), Some(1.0), Some(PASSING_AVERAGE), None);
        assert_eq!(at, GradeStatus::Passed);
    }
}
