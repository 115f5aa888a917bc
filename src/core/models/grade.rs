//! Grade model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Letter grade derived from a numeric mark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LetterGrade {
    /// 90 and above
    A,
    /// 80 up to 90
    B,
    /// 70 up to 80
    C,
    /// 60 up to 70
    D,
    /// Below 60, including negative marks
    F,
}

impl LetterGrade {
    /// Map a numeric mark onto its letter band
    ///
    /// Each band is inclusive on its lower edge. Marks are not range checked
    /// here, so anything below 60 (negative values included) resolves to `F`.
    #[must_use]
    pub fn from_marks(marks: f64) -> Self {
        if marks >= 90.0 {
            Self::A
        } else if marks >= 80.0 {
            Self::B
        } else if marks >= 70.0 {
            Self::C
        } else if marks >= 60.0 {
            Self::D
        } else {
            Self::F
        }
    }

    /// Grade points used for GPA calculation
    #[must_use]
    pub const fn grade_points(self) -> f64 {
        match self {
            Self::A => 4.0,
            Self::B => 3.0,
            Self::C => 2.0,
            Self::D => 1.0,
            Self::F => 0.0,
        }
    }

    /// Single character form of the letter
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::D => 'D',
            Self::F => 'F',
        }
    }
}

impl fmt::Display for LetterGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.as_char(), f)
    }
}

/// A single course result for a student
///
/// Deserializing ignores any stored letter and derives it from `marks`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "GradeRecord")]
pub struct Grade {
    /// Code of the course this grade belongs to (e.g., "CS2510")
    pub course_code: String,

    /// Semester the grade was earned in
    pub semester: u32,

    marks: f64,

    letter: LetterGrade,
}

/// Stored form of a [`Grade`]; the letter is always recomputed
#[derive(Deserialize)]
struct GradeRecord {
    course_code: String,
    semester: u32,
    marks: f64,
}

impl From<GradeRecord> for Grade {
    fn from(record: GradeRecord) -> Self {
        Self::new(record.course_code, record.marks, record.semester)
    }
}

impl Grade {
    /// Create a new grade, deriving the letter from `marks`
    ///
    /// # Arguments
    /// * `course_code` - Course code
    /// * `marks` - Numeric mark, expected in `0..=100` but not enforced
    /// * `semester` - Semester number
    #[must_use]
    pub fn new(course_code: String, marks: f64, semester: u32) -> Self {
        Self {
            course_code,
            semester,
            marks,
            letter: LetterGrade::from_marks(marks),
        }
    }

    /// Numeric mark
    #[must_use]
    pub const fn marks(&self) -> f64 {
        self.marks
    }

    /// Derived letter grade
    #[must_use]
    pub const fn letter(&self) -> LetterGrade {
        self.letter
    }

    /// Replace the mark and recompute the letter
    pub fn set_marks(&mut self, marks: f64) {
        self.marks = marks;
        self.letter = LetterGrade::from_marks(marks);
    }

    /// Grade points for this result
    #[must_use]
    pub const fn grade_points(&self) -> f64 {
        self.letter.grade_points()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_band_lower_edges() {
        assert_eq!(LetterGrade::from_marks(90.0), LetterGrade::A);
        assert_eq!(LetterGrade::from_marks(89.99), LetterGrade::B);
        assert_eq!(LetterGrade::from_marks(80.0), LetterGrade::B);
        assert_eq!(LetterGrade::from_marks(79.5), LetterGrade::C);
        assert_eq!(LetterGrade::from_marks(70.0), LetterGrade::C);
        assert_eq!(LetterGrade::from_marks(60.0), LetterGrade::D);
        assert_eq!(LetterGrade::from_marks(59.99), LetterGrade::F);
    }

    #[test]
    fn test_out_of_range_marks_are_not_rejected() {
        assert_eq!(LetterGrade::from_marks(-15.0), LetterGrade::F);
        assert_eq!(LetterGrade::from_marks(150.0), LetterGrade::A);
    }

    #[test]
    fn test_grade_points() {
        assert!((LetterGrade::A.grade_points() - 4.0).abs() < f64::EPSILON);
        assert!((LetterGrade::B.grade_points() - 3.0).abs() < f64::EPSILON);
        assert!((LetterGrade::C.grade_points() - 2.0).abs() < f64::EPSILON);
        assert!((LetterGrade::D.grade_points() - 1.0).abs() < f64::EPSILON);
        assert!(LetterGrade::F.grade_points().abs() < f64::EPSILON);
    }

    #[test]
    fn test_grade_creation() {
        let grade = Grade::new("CS2510".to_string(), 84.5, 2);

        assert_eq!(grade.course_code, "CS2510");
        assert_eq!(grade.semester, 2);
        assert!((grade.marks() - 84.5).abs() < f64::EPSILON);
        assert_eq!(grade.letter(), LetterGrade::B);
        assert!((grade.grade_points() - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_set_marks_recomputes_letter() {
        let mut grade = Grade::new("CS2510".to_string(), 55.0, 1);
        assert_eq!(grade.letter(), LetterGrade::F);

        grade.set_marks(91.0);
        assert_eq!(grade.letter(), LetterGrade::A);
        assert!((grade.marks() - 91.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_deserialized_letter_follows_marks() {
        let grade: Grade = toml::from_str(
            "course_code = \"CS2500\"\nsemester = 1\nmarks = 95.0\nletter = \"F\"",
        )
        .expect("grade should parse");

        assert_eq!(grade.letter(), LetterGrade::A);
        assert_eq!(grade, Grade::new("CS2500".to_string(), 95.0, 1));
    }

    #[test]
    fn test_serialized_grade_reloads_unchanged() {
        let grade = Grade::new("CS3500".to_string(), 72.5, 4);
        let text = toml::to_string(&grade).expect("grade should serialize");

        let reloaded: Grade = toml::from_str(&text).expect("grade should reload");
        assert_eq!(reloaded, grade);
    }

    #[test]
    fn test_letter_display() {
        assert_eq!(LetterGrade::C.to_string(), "C");
    }
}
