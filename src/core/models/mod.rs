//! Data models for `Gradebook`

pub mod course;
pub mod grade;
pub mod student;

pub use course::Course;
pub use grade::{Grade, LetterGrade};
pub use student::{Person, Student};
