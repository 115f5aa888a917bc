//! Student model

use super::Grade;
use serde::{Deserialize, Serialize};

/// Identity fields shared by anyone the system records
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Person {
    /// Unique identifier
    pub id: u32,

    /// Full name
    pub name: String,

    /// Contact email
    pub email: String,
}

impl Person {
    /// Create a new person
    #[must_use]
    pub const fn new(id: u32, name: String, email: String) -> Self {
        Self { id, name, email }
    }
}

/// Represents an enrolled student and their recorded grades
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    /// Identity fields
    pub person: Person,

    /// Roll number (not required to be unique)
    pub roll_number: u32,

    /// Department (e.g., "Computer Science")
    pub department: String,

    /// Current semester
    pub semester: u32,

    /// Grades in the order they were recorded
    grades: Vec<Grade>,
}

impl Student {
    /// Create a new student with no grades
    ///
    /// # Arguments
    /// * `person` - Identity fields (id, name, email)
    /// * `roll_number` - Roll number
    /// * `department` - Department name
    /// * `semester` - Current semester
    #[must_use]
    pub const fn new(person: Person, roll_number: u32, department: String, semester: u32) -> Self {
        Self {
            person,
            roll_number,
            department,
            semester,
            grades: Vec::new(),
        }
    }

    /// Student id
    #[must_use]
    pub const fn id(&self) -> u32 {
        self.person.id
    }

    /// Student name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.person.name
    }

    /// Student email
    #[must_use]
    pub fn email(&self) -> &str {
        &self.person.email
    }

    /// Recorded grades in insertion order
    #[must_use]
    pub fn grades(&self) -> &[Grade] {
        &self.grades
    }

    /// Append a grade. Several grades for the same course may coexist.
    pub fn add_grade(&mut self, grade: Grade) {
        self.grades.push(grade);
    }

    /// Update the marks of the first grade recorded for `course_code`
    ///
    /// # Returns
    /// `true` if a grade for the course was found and updated
    pub fn update_grade(&mut self, course_code: &str, new_marks: f64) -> bool {
        if let Some(grade) = self.grades.iter_mut().find(|g| g.course_code == course_code) {
            grade.set_marks(new_marks);
            true
        } else {
            false
        }
    }

    /// Grade point average across all recorded grades
    ///
    /// # Returns
    /// The arithmetic mean of grade points, or `0.0` when no grades exist
    #[must_use]
    pub fn calculate_gpa(&self) -> f64 {
        if self.grades.is_empty() {
            return 0.0;
        }

        let total: f64 = self.grades.iter().map(Grade::grade_points).sum();
        #[allow(clippy::cast_precision_loss)]
        let count = self.grades.len() as f64;
        total / count
    }
}
