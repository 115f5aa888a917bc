//! Error types for roster operations

use std::fmt;
use thiserror::Error;

/// Broad category of a roster failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A student, course, or grade lookup missed
    NotFound,
    /// An add collided with an existing id or code
    DuplicateKey,
    /// Marks outside `0..=100` on the assign path
    OutOfRange,
    /// Input rejected by an entry check (e.g., course code length)
    InvalidInput,
    /// Reading or writing a record file failed
    Io,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let as_str = match self {
            Self::NotFound => "not found",
            Self::DuplicateKey => "duplicate key",
            Self::OutOfRange => "out of range",
            Self::InvalidInput => "invalid input",
            Self::Io => "io",
        };
        write!(f, "{as_str}")
    }
}

/// Errors returned by [`Roster`](crate::core::roster::Roster) operations
#[derive(Error, Debug)]
pub enum RosterError {
    /// No student with the given id
    #[error("Student not found: {0}")]
    StudentNotFound(u32),

    /// No course with the given code
    #[error("Course not found: {0}")]
    CourseNotFound(String),

    /// The student has no grade recorded for the course
    #[error("Course {course_code} not found for student {student_id}")]
    GradeNotFound {
        /// Student that was searched
        student_id: u32,
        /// Course code that was missing
        course_code: String,
    },

    /// A student with this id already exists
    #[error("Student with ID {0} already exists")]
    DuplicateStudent(u32),

    /// A course with this code already exists
    #[error("Course with code {0} already exists")]
    DuplicateCourse(String),

    /// Course code length outside the accepted range
    #[error("Invalid course code '{0}': must be 5 to 10 characters")]
    InvalidCourseCode(String),

    /// Marks outside `0..=100`
    #[error("Invalid marks {0}: must be between 0 and 100")]
    MarksOutOfRange(f64),

    /// Record file I/O failure
    #[error("Record file error: {0}")]
    Io(#[from] std::io::Error),
}

impl RosterError {
    /// Category of this error
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::StudentNotFound(_) | Self::CourseNotFound(_) | Self::GradeNotFound { .. } => {
                ErrorKind::NotFound
            }
            Self::DuplicateStudent(_) | Self::DuplicateCourse(_) => ErrorKind::DuplicateKey,
            Self::MarksOutOfRange(_) => ErrorKind::OutOfRange,
            Self::InvalidCourseCode(_) => ErrorKind::InvalidInput,
            Self::Io(_) => ErrorKind::Io,
        }
    }
}
