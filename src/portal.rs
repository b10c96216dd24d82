/// Portal access for grades and directory searches
///
/// The renderers never talk to the portal directly; commands go through the
/// [`Portal`] trait and get canonical records back. [`SnapshotPortal`] serves
/// those records from a JSON export on disk.
use crate::normalize::{
    RawCourseGrade, RawProfessor, RawStudent, normalize_grades, normalize_professor, normalize_student,
};
use crate::types::{CourseGrade, ProfessorMatch, StudentMatch};
use log::debug;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// How a student search identifies the student
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StudentQuery {
    /// Exact student code
    Code(String),
    /// First name(s) and last name(s), matched as fragments of the full name
    FullName { name: String, lastname: String },
    /// Exact national ID
    NationalId(String),
}

/// Source of academic records
pub trait Portal {
    /// All course grades of the logged-in student
    fn fetch_grades(&self) -> Result<Vec<CourseGrade>, String>;

    fn search_students(&self, query: &StudentQuery) -> Result<Vec<StudentMatch>, String>;

    fn search_professors(&self, name: &str, lastname: &str) -> Result<Vec<ProfessorMatch>, String>;
}

/// On-disk layout of a portal export
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SnapshotFile {
    courses: Vec<RawCourseGrade>,
    students: Vec<RawStudent>,
    professors: Vec<RawProfessor>,
}

/// Portal backed by a JSON snapshot file
#[derive(Debug)]
pub struct SnapshotPortal {
    source: PathBuf,
    snapshot: SnapshotFile,
}

impl SnapshotPortal {
    /// Read and parse a snapshot file
    pub fn load(path: &Path) -> Result<Self, String> {
        let content =
            fs::read_to_string(path).map_err(|e| format!("Failed to read snapshot {}: {}", path.display(), e))?;
        let mut portal = Self::from_json(&content).map_err(|e| format!("{} ({})", e, path.display()))?;
        portal.source = path.to_path_buf();
        Ok(portal)
    }

    /// Parse snapshot content that is already in memory
    pub fn from_json(content: &str) -> Result<Self, String> {
        let snapshot: SnapshotFile =
            serde_json::from_str(content).map_err(|e| format!("Failed to parse snapshot JSON: {}", e))?;

        debug!(
            "snapshot holds {} courses, {} students, {} professors",
            snapshot.courses.len(),
            snapshot.students.len(),
            snapshot.professors.len()
        );

        Ok(SnapshotPortal { source: PathBuf::new(), snapshot })
    }

    /// File the snapshot was loaded from, empty for in-memory snapshots
    pub fn source(&self) -> &Path {
        &self.source
    }
}

impl Portal for SnapshotPortal {
    fn fetch_grades(&self) -> Result<Vec<CourseGrade>, String> {
        Ok(normalize_grades(&self.snapshot.courses))
    }

    fn search_students(&self, query: &StudentQuery) -> Result<Vec<StudentMatch>, String> {
        debug!("searching students by {:?}", query);
        let students = self.snapshot.students.iter().map(normalize_student);

        let matches = match query {
            StudentQuery::Code(code) => students.filter(|s| s.id == code.trim()).collect(),
            StudentQuery::NationalId(dni) => students.filter(|s| s.national_id == dni.trim()).collect(),
            StudentQuery::FullName { name, lastname } => {
                students.filter(|s| name_matches(&s.name, name, lastname)).collect()
            }
        };
        Ok(matches)
    }

    fn search_professors(&self, name: &str, lastname: &str) -> Result<Vec<ProfessorMatch>, String> {
        debug!("searching professors by name '{}' '{}'", name, lastname);
        Ok(self
            .snapshot
            .professors
            .iter()
            .map(normalize_professor)
            .filter(|p| name_matches(&p.name, name, lastname))
            .collect())
    }
}

/// Both fragments appear in the full name, ignoring case
fn name_matches(full_name: &str, name: &str, lastname: &str) -> bool {
    let full_name = full_name.to_lowercase();
    [name, lastname].iter().all(|fragment| full_name.contains(&fragment.trim().to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    const SNAPSHOT: &str = r#"{
        "courses": [
            {"courseId": "4521", "courseName": "CALCULO I", "attempt": "1",
             "average1": "15.5", "average2": "0", "disabled": "0", "finalStatus": ""},
            {"courseId": 4522, "courseName": "FISICA I", "attempt": 2,
             "average1": 12, "average2": 13, "average3": 11, "average": "12.00", "disabled": "1"}
        ],
        "students": [
            {"studentId": "1023300118", "studentName": "TORRES QUISPE, ANA MARIA", "dni": "70123456"},
            {"studentId": "1023300119", "studentName": "RAMOS DIAZ, LUIS", "dni": 70999888}
        ],
        "professors": [
            {"code": "P-12", "professorName": "VILLANUEVA SANCHEZ, JOSE", "dni": "18001234", "workerId": "5521"}
        ]
    }"#;

    #[test]
    fn test_fetch_grades_normalizes() {
        let portal = SnapshotPortal::from_json(SNAPSHOT).unwrap();
        let grades = portal.fetch_grades().unwrap();

        assert_eq!(grades.len(), 2);
        assert_eq!(grades[0].course_id, 4521);
        assert_eq!(grades[0].unit(1), Some(15.5));
        assert_eq!(grades[0].unit(2), None);
        assert!(!grades[0].disqualified);
        assert_eq!(grades[1].attempt, 2);
        assert_eq!(grades[1].overall_average, Some(12.0));
        assert!(grades[1].disqualified);
    }

    #[test]
    fn test_student_search_by_code_and_dni() {
        let portal = SnapshotPortal::from_json(SNAPSHOT).unwrap();

        let by_code = portal.search_students(&StudentQuery::Code("1023300119".to_string())).unwrap();
        assert_eq!(by_code.len(), 1);
        assert_eq!(by_code[0].name, "RAMOS DIAZ, LUIS");

        let by_dni = portal.search_students(&StudentQuery::NationalId("70999888".to_string())).unwrap();
        assert_eq!(by_dni.len(), 1);
        assert_eq!(by_dni[0].id, "1023300119");

        let partial = portal.search_students(&StudentQuery::Code("10233".to_string())).unwrap();
        assert!(partial.is_empty());
    }

    #[test]
    fn test_student_search_by_name_ignores_case() {
        let portal = SnapshotPortal::from_json(SNAPSHOT).unwrap();
        let query = StudentQuery::FullName { name: "ana".to_string(), lastname: "Torres".to_string() };
        let found = portal.search_students(&query).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].national_id, "70123456");

        let query = StudentQuery::FullName { name: "ana".to_string(), lastname: "ramos".to_string() };
        assert!(portal.search_students(&query).unwrap().is_empty());
    }

    #[test]
    fn test_professor_search() {
        let portal = SnapshotPortal::from_json(SNAPSHOT).unwrap();
        let found = portal.search_professors("Jose", "villanueva").unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].worker_id, "5521");
        assert!(portal.search_professors("Maria", "villanueva").unwrap().is_empty());
    }

    #[test]
    fn test_missing_sections_are_empty() {
        let portal = SnapshotPortal::from_json("{}").unwrap();
        assert!(portal.fetch_grades().unwrap().is_empty());
        assert!(portal.search_professors("a", "b").unwrap().is_empty());
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("snapshot.json");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(SNAPSHOT.as_bytes()).unwrap();

        let portal = SnapshotPortal::load(&path).unwrap();
        assert_eq!(portal.source(), path.as_path());
        assert_eq!(portal.fetch_grades().unwrap().len(), 2);
    }

    #[test]
    fn test_load_errors() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope.json");
        let err = SnapshotPortal::load(&missing).unwrap_err();
        assert!(err.contains("Failed to read snapshot"));

        let broken = temp_dir.path().join("broken.json");
        fs::write(&broken, "{\"courses\": [").unwrap();
        let err = SnapshotPortal::load(&broken).unwrap_err();
        assert!(err.contains("Failed to parse snapshot JSON"));
    }
}
