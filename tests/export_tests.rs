//! Integration tests for flat-file export and the import stub

use gradebook::core::models::{Course, Person, Student};
use gradebook::core::records_export::RecordFiles;
use gradebook::core::{ErrorKind, Roster};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn populated() -> Roster {
    let mut roster = Roster::new();
    roster
        .add_student(Student::new(
            Person::new(10, "Barbara Liskov".to_string(), "liskov@example.edu".to_string()),
            1010,
            "EECS".to_string(),
            6,
        ))
        .unwrap();
    roster
        .add_student(Student::new(
            Person::new(11, "Edsger Dijkstra".to_string(), "ewd@example.edu".to_string()),
            1011,
            "Mathematics".to_string(),
            8,
        ))
        .unwrap();
    roster
        .add_course(Course::new(
            "CS4500".to_string(),
            "Software Development".to_string(),
            4,
            "Dr. Lieberherr".to_string(),
        ))
        .unwrap();
    roster
        .add_course(Course::new(
            "MATH2331".to_string(),
            "Linear Algebra".to_string(),
            3,
            "Dr. Strang".to_string(),
        ))
        .unwrap();
    roster.assign_grade(10, "CS4500", 5, 93.5).unwrap();
    roster.assign_grade(11, "MATH2331", 7, 100.0).unwrap();
    roster.assign_grade(11, "CS4500", 7, 58.0).unwrap();
    roster
}

fn read_rows(path: &Path) -> Vec<Vec<String>> {
    fs::read_to_string(path)
        .expect("export file should exist")
        .lines()
        .map(|line| line.split(',').map(str::to_string).collect())
        .collect()
}

#[test]
fn test_export_writes_three_files() {
    let dir = TempDir::new().unwrap();
    let roster = populated();

    let summary = roster
        .export_all(dir.path(), &RecordFiles::default())
        .expect("export should succeed");

    assert_eq!(summary.students, 2);
    assert_eq!(summary.courses, 2);
    assert_eq!(summary.grades, 3);
    assert_eq!(summary.paths.len(), 3);

    assert_eq!(
        fs::read_to_string(dir.path().join("students.txt")).unwrap(),
        "10,Barbara Liskov,liskov@example.edu,1010,EECS,6\n\
         11,Edsger Dijkstra,ewd@example.edu,1011,Mathematics,8\n"
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("grades.txt")).unwrap(),
        "10,CS4500,93.5,5\n11,MATH2331,100,7\n11,CS4500,58,7\n"
    );
}

#[test]
fn test_export_rows_reconstruct_records() {
    let dir = TempDir::new().unwrap();
    let roster = populated();
    roster
        .export_all(dir.path(), &RecordFiles::default())
        .unwrap();

    let mut rebuilt = Roster::new();
    for row in read_rows(&dir.path().join("courses.txt")) {
        rebuilt
            .add_course(Course::new(
                row[0].clone(),
                row[1].clone(),
                row[2].parse().unwrap(),
                row[3].clone(),
            ))
            .unwrap();
    }
    for row in read_rows(&dir.path().join("students.txt")) {
        rebuilt
            .add_student(Student::new(
                Person::new(row[0].parse().unwrap(), row[1].clone(), row[2].clone()),
                row[3].parse().unwrap(),
                row[4].clone(),
                row[5].parse().unwrap(),
            ))
            .unwrap();
    }
    for row in read_rows(&dir.path().join("grades.txt")) {
        rebuilt
            .assign_grade(
                row[0].parse().unwrap(),
                &row[1],
                row[3].parse().unwrap(),
                row[2].parse().unwrap(),
            )
            .unwrap();
    }

    assert_eq!(rebuilt.courses(), roster.courses());
    assert_eq!(rebuilt.students(), roster.students());
}

#[test]
fn test_export_creates_missing_directory() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("nested").join("records");

    Roster::new()
        .export_all(&nested, &RecordFiles::default())
        .unwrap();

    assert!(nested.join("students.txt").is_file());
    assert_eq!(fs::read_to_string(nested.join("courses.txt")).unwrap(), "");
}

#[test]
fn test_export_failure_is_reported() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("not_a_dir");
    fs::write(&blocker, "occupied").unwrap();

    let err = populated()
        .export_all(&blocker, &RecordFiles::default())
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Io);
}

#[test]
fn test_import_is_a_stub() {
    let dir = TempDir::new().unwrap();
    let roster = populated();
    roster
        .export_all(dir.path(), &RecordFiles::default())
        .unwrap();

    let empty = Roster::new();
    let summary = empty.import_all(dir.path(), &RecordFiles::default());
    assert!(summary.courses_file_found);
    assert_eq!(summary.records_loaded, 0);
    assert!(empty.students().is_empty());
    assert!(empty.courses().is_empty());

    let missing = TempDir::new().unwrap();
    let summary = empty.import_all(missing.path(), &RecordFiles::default());
    assert!(!summary.courses_file_found);
    assert_eq!(summary.records_loaded, 0);
}
