//! Flat-file export of roster records
//!
//! Three comma-separated files are written, one row per record and no header:
//! - students: `id,name,email,rollNumber,department,semester`
//! - courses: `courseCode,courseName,creditHours,instructor`
//! - grades: `studentId,courseCode,marks,semester`
//!
//! Fields are written verbatim. Embedded commas are not escaped.

use super::config::PathsConfig;
use super::error::RosterError;
use super::roster::Roster;
use crate::{debug, info, warn};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Default file name for student rows
pub const STUDENTS_FILE: &str = "students.txt";
/// Default file name for course rows
pub const COURSES_FILE: &str = "courses.txt";
/// Default file name for grade rows
pub const GRADES_FILE: &str = "grades.txt";

/// File names used for the three record sets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordFiles {
    /// Student rows
    pub students: String,
    /// Course rows
    pub courses: String,
    /// Grade rows
    pub grades: String,
}

impl Default for RecordFiles {
    fn default() -> Self {
        Self {
            students: STUDENTS_FILE.to_string(),
            courses: COURSES_FILE.to_string(),
            grades: GRADES_FILE.to_string(),
        }
    }
}

impl RecordFiles {
    /// Take file names from the paths config, falling back to defaults for empty entries
    #[must_use]
    pub fn from_paths(paths: &PathsConfig) -> Self {
        let pick = |value: &str, fallback: &str| {
            if value.is_empty() {
                fallback.to_string()
            } else {
                value.to_string()
            }
        };
        Self {
            students: pick(&paths.students_file, STUDENTS_FILE),
            courses: pick(&paths.courses_file, COURSES_FILE),
            grades: pick(&paths.grades_file, GRADES_FILE),
        }
    }

    /// Full paths of the three files under `dir`, in students/courses/grades order
    #[must_use]
    pub fn resolve(&self, dir: &Path) -> [PathBuf; 3] {
        [
            dir.join(&self.students),
            dir.join(&self.courses),
            dir.join(&self.grades),
        ]
    }
}

/// Row counts and destinations of a completed export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    /// Student rows written
    pub students: usize,
    /// Course rows written
    pub courses: usize,
    /// Grade rows written
    pub grades: usize,
    /// Files written, in students/courses/grades order
    pub paths: Vec<PathBuf>,
}

/// Outcome of an import request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    /// Whether the courses file was present
    pub courses_file_found: bool,
    /// Records loaded into the roster (always zero; loading is not supported yet)
    pub records_loaded: usize,
}

/// Write one row per student
///
/// # Errors
/// Returns any error from the underlying writer
pub fn write_students<W: Write>(roster: &Roster, out: &mut W) -> io::Result<usize> {
    for student in roster.students() {
        writeln!(
            out,
            "{},{},{},{},{},{}",
            student.id(),
            student.name(),
            student.email(),
            student.roll_number,
            student.department,
            student.semester
        )?;
    }
    Ok(roster.students().len())
}

/// Write one row per course
///
/// # Errors
/// Returns any error from the underlying writer
pub fn write_courses<W: Write>(roster: &Roster, out: &mut W) -> io::Result<usize> {
    for course in roster.courses() {
        writeln!(
            out,
            "{},{},{},{}",
            course.code, course.name, course.credit_hours, course.instructor
        )?;
    }
    Ok(roster.courses().len())
}

/// Write one row per grade, grouped by student in roster order
///
/// # Errors
/// Returns any error from the underlying writer
pub fn write_grades<W: Write>(roster: &Roster, out: &mut W) -> io::Result<usize> {
    let mut count = 0;
    for student in roster.students() {
        for grade in student.grades() {
            writeln!(
                out,
                "{},{},{},{}",
                student.id(),
                grade.course_code,
                grade.marks(),
                grade.semester
            )?;
            count += 1;
        }
    }
    Ok(count)
}

fn write_file<F>(path: &Path, write_rows: F) -> Result<usize, RosterError>
where
    F: FnOnce(&mut BufWriter<File>) -> io::Result<usize>,
{
    let mut writer = BufWriter::new(File::create(path)?);
    let rows = write_rows(&mut writer)?;
    writer.flush()?;
    debug!("Wrote {rows} rows to {}", path.display());
    Ok(rows)
}

/// Export students, courses, and grades into `dir`
///
/// The directory is created if missing. Each file is opened right before it is
/// written and closed before the next one is opened.
///
/// # Errors
/// Returns [`RosterError::Io`] if the directory or any file cannot be written
pub fn export_all(
    roster: &Roster,
    dir: &Path,
    files: &RecordFiles,
) -> Result<ExportSummary, RosterError> {
    fs::create_dir_all(dir)?;

    let [students_path, courses_path, grades_path] = files.resolve(dir);

    let students = write_file(&students_path, |w| write_students(roster, w))?;
    let courses = write_file(&courses_path, |w| write_courses(roster, w))?;
    let grades = write_file(&grades_path, |w| write_grades(roster, w))?;

    info!(
        "Exported {students} students, {courses} courses, {grades} grades to {}",
        dir.display()
    );

    Ok(ExportSummary {
        students,
        courses,
        grades,
        paths: vec![students_path, courses_path, grades_path],
    })
}

/// Import records from `dir`
///
/// Loading is not supported yet: the courses file is only checked for
/// presence, the roster is never touched, and the call always succeeds.
#[must_use]
pub fn import_all(dir: &Path, files: &RecordFiles) -> ImportSummary {
    let courses_path = dir.join(&files.courses);
    let courses_file_found = courses_path.is_file();

    if courses_file_found {
        warn!(
            "Import is not supported yet; {} was left unread",
            courses_path.display()
        );
    } else {
        debug!("No courses file at {}", courses_path.display());
    }

    ImportSummary {
        courses_file_found,
        records_loaded: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{Course, Person, Student};

    fn roster() -> Roster {
        let mut roster = Roster::new();
        roster
            .add_student(Student::new(
                Person::new(1, "Alan Turing".to_string(), "alan@example.edu".to_string()),
                11,
                "Computer Science".to_string(),
                2,
            ))
            .unwrap();
        roster
            .add_course(Course::new(
                "CS2500".to_string(),
                "Fundamentals I".to_string(),
                4,
                "Dr. Felleisen".to_string(),
            ))
            .unwrap();
        roster.assign_grade(1, "CS2500", 1, 90.0).unwrap();
        roster.assign_grade(1, "CS2500", 2, 72.5).unwrap();
        roster
    }

    #[test]
    fn test_write_students_layout() {
        let mut buf = Vec::new();
        let rows = write_students(&roster(), &mut buf).unwrap();

        assert_eq!(rows, 1);
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "1,Alan Turing,alan@example.edu,11,Computer Science,2\n"
        );
    }

    #[test]
    fn test_write_courses_layout() {
        let mut buf = Vec::new();
        write_courses(&roster(), &mut buf).unwrap();

        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "CS2500,Fundamentals I,4,Dr. Felleisen\n"
        );
    }

    #[test]
    fn test_write_grades_layout() {
        let mut buf = Vec::new();
        let rows = write_grades(&roster(), &mut buf).unwrap();

        assert_eq!(rows, 2);
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "1,CS2500,90,1\n1,CS2500,72.5,2\n"
        );
    }

    #[test]
    fn test_record_files_from_paths() {
        let paths = PathsConfig {
            data_dir: String::new(),
            students_file: "people.csv".to_string(),
            courses_file: String::new(),
            grades_file: "marks.csv".to_string(),
        };

        let files = RecordFiles::from_paths(&paths);
        assert_eq!(files.students, "people.csv");
        assert_eq!(files.courses, COURSES_FILE);
        assert_eq!(files.grades, "marks.csv");
    }

    #[test]
    fn test_resolve_joins_directory() {
        let files = RecordFiles::default();
        let [students, courses, grades] = files.resolve(Path::new("records"));

        assert_eq!(students, Path::new("records").join(STUDENTS_FILE));
        assert_eq!(courses, Path::new("records").join(COURSES_FILE));
        assert_eq!(grades, Path::new("records").join(GRADES_FILE));
    }
}
