//! Text views of roster data
//!
//! Every function here is a read-only projection that renders to a `String`.
//! GPA values always come from [`Student::calculate_gpa`].

use crate::core::models::{Course, Grade, Student};
use crate::core::roster::Roster;
use std::fmt::Write;

const GRADE_RULE_WIDTH: usize = 50;
const STUDENT_RULE_WIDTH: usize = 60;

/// Format a GPA the way every report shows it (two decimals)
#[must_use]
pub fn format_gpa(gpa: f64) -> String {
    format!("{gpa:.2}")
}

/// Render the details block for one student
#[must_use]
pub fn student_details(student: &Student) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "ID: {}", student.id());
    let _ = writeln!(out, "Name: {}", student.name());
    let _ = writeln!(out, "Email: {}", student.email());
    let _ = writeln!(out, "Roll Number: {}", student.roll_number);
    let _ = writeln!(out, "Department: {}", student.department);
    let _ = writeln!(out, "Semester: {}", student.semester);
    let _ = writeln!(out, "GPA: {}", format_gpa(student.calculate_gpa()));
    out
}

fn grade_row(grade: &Grade) -> String {
    format!(
        "{:<12}{:<8}{:<6}{:<10}",
        grade.course_code,
        grade.marks(),
        grade.letter(),
        grade.semester
    )
}

/// Render a student's grade report: one row per grade, then the GPA
#[must_use]
pub fn grade_report(student: &Student) -> String {
    let rule = "-".repeat(GRADE_RULE_WIDTH);
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Grade Report for {} (ID: {})",
        student.name(),
        student.id()
    );
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(
        out,
        "{:<12}{:<8}{:<6}{:<10}",
        "Course Code", "Marks", "Grade", "Semester"
    );
    let _ = writeln!(out, "{rule}");
    for grade in student.grades() {
        let _ = writeln!(out, "{}", grade_row(grade));
    }
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "GPA: {}", format_gpa(student.calculate_gpa()));
    out
}

/// Render the table of all students with their GPA
#[must_use]
pub fn student_list(roster: &Roster) -> String {
    if roster.students().is_empty() {
        return "No students found!\n".to_string();
    }

    let rule = "-".repeat(STUDENT_RULE_WIDTH);
    let mut out = String::new();
    let _ = writeln!(out, "=== All Students ===");
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(
        out,
        "{:<8}{:<20}{:<15}{:<10}{:<8}",
        "ID", "Name", "Department", "Semester", "GPA"
    );
    let _ = writeln!(out, "{rule}");
    for student in roster.students() {
        let _ = writeln!(
            out,
            "{:<8}{:<20}{:<15}{:<10}{:<8}",
            student.id(),
            student.name(),
            student.department,
            student.semester,
            format_gpa(student.calculate_gpa())
        );
    }
    let _ = writeln!(out, "{rule}");
    out
}

fn course_block(course: &Course) -> String {
    format!(
        "Course Code: {}\nCourse Name: {}\nCredit Hours: {}\nInstructor: {}\n",
        course.code, course.name, course.credit_hours, course.instructor
    )
}

/// Render every course with its full catalog fields
#[must_use]
pub fn course_list(roster: &Roster) -> String {
    if roster.courses().is_empty() {
        return "No courses found!\n".to_string();
    }

    let mut out = String::from("=== All Courses ===\n");
    for course in roster.courses() {
        let _ = writeln!(out, "\n{}", course_block(course));
    }
    out
}
