//! Roster: the owner of every student and course record
//!
//! All mutation goes through the operations here. Lookups hand out borrows that
//! live only as long as the call site holds the roster.

use super::error::RosterError;
use super::models::{Course, Grade, Student};
use super::records_export::{self, ExportSummary, ImportSummary, RecordFiles};
use crate::{debug, info, warn};
use std::path::Path;

/// Lowest mark accepted when assigning a grade
pub const MIN_MARKS: f64 = 0.0;

/// Highest mark accepted when assigning a grade
pub const MAX_MARKS: f64 = 100.0;

/// Aggregate owner of all students and courses
#[derive(Debug, Clone, Default)]
pub struct Roster {
    /// Students in insertion order, unique by id
    students: Vec<Student>,

    /// Courses in insertion order, unique by code
    courses: Vec<Course>,
}

impl Roster {
    /// Create an empty roster
    #[must_use]
    pub const fn new() -> Self {
        Self {
            students: Vec::new(),
            courses: Vec::new(),
        }
    }

    /// All students in insertion order
    #[must_use]
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    /// All courses in insertion order
    #[must_use]
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Find a student by id
    #[must_use]
    pub fn find_student_by_id(&self, id: u32) -> Option<&Student> {
        self.students.iter().find(|s| s.id() == id)
    }

    fn find_student_by_id_mut(&mut self, id: u32) -> Option<&mut Student> {
        self.students.iter_mut().find(|s| s.id() == id)
    }

    /// Find a student by roll number
    ///
    /// Roll numbers are not unique-checked on insert; the first match wins.
    #[must_use]
    pub fn find_student_by_roll(&self, roll_number: u32) -> Option<&Student> {
        self.students.iter().find(|s| s.roll_number == roll_number)
    }

    /// Find a course by its code
    #[must_use]
    pub fn find_course_by_code(&self, code: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.code == code)
    }

    /// Add a student
    ///
    /// # Errors
    /// Returns [`RosterError::DuplicateStudent`] if a student with the same id exists.
    /// The roster is left unchanged in that case.
    pub fn add_student(&mut self, student: Student) -> Result<(), RosterError> {
        if self.find_student_by_id(student.id()).is_some() {
            warn!("Rejected duplicate student id {}", student.id());
            return Err(RosterError::DuplicateStudent(student.id()));
        }

        info!("Added student {} ({})", student.id(), student.name());
        self.students.push(student);
        Ok(())
    }

    /// Add a course
    ///
    /// # Errors
    /// - [`RosterError::InvalidCourseCode`] if the code is not 5 to 10 characters long
    /// - [`RosterError::DuplicateCourse`] if a course with the same code exists
    pub fn add_course(&mut self, course: Course) -> Result<(), RosterError> {
        if !Course::is_valid_code(&course.code) {
            warn!("Rejected invalid course code '{}'", course.code);
            return Err(RosterError::InvalidCourseCode(course.code));
        }
        if self.find_course_by_code(&course.code).is_some() {
            warn!("Rejected duplicate course code '{}'", course.code);
            return Err(RosterError::DuplicateCourse(course.code));
        }

        info!("Added course {} ({})", course.code, course.name);
        self.courses.push(course);
        Ok(())
    }

    /// Record a new grade for a student
    ///
    /// Checks run in order: student exists, course exists, marks within `0..=100`.
    /// A new grade is always appended, even if the student already has one for
    /// the same course.
    ///
    /// # Errors
    /// - [`RosterError::StudentNotFound`] if no student has `student_id`
    /// - [`RosterError::CourseNotFound`] if no course has `course_code`
    /// - [`RosterError::MarksOutOfRange`] if `marks` is outside `0..=100` or not finite
    pub fn assign_grade(
        &mut self,
        student_id: u32,
        course_code: &str,
        semester: u32,
        marks: f64,
    ) -> Result<(), RosterError> {
        if self.find_student_by_id(student_id).is_none() {
            warn!("Rejected grade for unknown student {student_id}");
            return Err(RosterError::StudentNotFound(student_id));
        }
        if self.find_course_by_code(course_code).is_none() {
            warn!("Rejected grade for unknown course '{course_code}'");
            return Err(RosterError::CourseNotFound(course_code.to_string()));
        }
        if !(MIN_MARKS..=MAX_MARKS).contains(&marks) {
            warn!("Rejected marks {marks} for student {student_id} in {course_code}");
            return Err(RosterError::MarksOutOfRange(marks));
        }

        let student = self
            .find_student_by_id_mut(student_id)
            .ok_or(RosterError::StudentNotFound(student_id))?;
        student.add_grade(Grade::new(course_code.to_string(), marks, semester));
        info!("Assigned {marks} in {course_code} to student {student_id}");
        Ok(())
    }

    /// Change the marks of a student's first grade for a course
    ///
    /// Unlike [`assign_grade`](Self::assign_grade), `new_marks` is not range checked.
    ///
    /// # Errors
    /// - [`RosterError::StudentNotFound`] if no student has `student_id`
    /// - [`RosterError::GradeNotFound`] if the student has no grade for `course_code`
    pub fn update_grade(
        &mut self,
        student_id: u32,
        course_code: &str,
        new_marks: f64,
    ) -> Result<(), RosterError> {
        let Some(student) = self.find_student_by_id_mut(student_id) else {
            warn!("Rejected grade update for unknown student {student_id}");
            return Err(RosterError::StudentNotFound(student_id));
        };

        if student.update_grade(course_code, new_marks) {
            debug!("Updated {course_code} for student {student_id} to {new_marks}");
            Ok(())
        } else {
            warn!("Rejected update: student {student_id} has no grade in '{course_code}'");
            Err(RosterError::GradeNotFound {
                student_id,
                course_code: course_code.to_string(),
            })
        }
    }

    /// Write students, courses, and grades to flat files in `dir`
    ///
    /// # Errors
    /// Returns [`RosterError::Io`] if any destination cannot be created or written
    pub fn export_all(&self, dir: &Path, files: &RecordFiles) -> Result<ExportSummary, RosterError> {
        records_export::export_all(self, dir, files)
    }

    /// Load records from flat files in `dir`
    ///
    /// Not supported yet: nothing is parsed, the roster is left as is, and the
    /// call always reports success.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn import_all(&self, dir: &Path, files: &RecordFiles) -> ImportSummary {
        records_export::import_all(dir, files)
    }
}
