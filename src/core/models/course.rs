//! Course model

use serde::{Deserialize, Serialize};

/// Shortest accepted course code
pub const MIN_CODE_LEN: usize = 5;

/// Longest accepted course code
pub const MAX_CODE_LEN: usize = 10;

/// Represents a course in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Course code, unique within a roster (e.g., "CS2510")
    pub code: String,

    /// Course name (e.g., "Fundamentals of Computer Science II")
    pub name: String,

    /// Credit hours
    pub credit_hours: u32,

    /// Instructor name
    pub instructor: String,
}

impl Course {
    /// Create a new course
    ///
    /// # Arguments
    /// * `code` - Course code
    /// * `name` - Full course name
    /// * `credit_hours` - Credit hours
    /// * `instructor` - Instructor name
    #[must_use]
    pub const fn new(code: String, name: String, credit_hours: u32, instructor: String) -> Self {
        Self {
            code,
            name,
            credit_hours,
            instructor,
        }
    }

    /// Check whether a course code has an acceptable length
    ///
    /// # Returns
    /// `true` if the code is between 5 and 10 characters long (inclusive)
    #[must_use]
    pub fn is_valid_code(code: &str) -> bool {
        (MIN_CODE_LEN..=MAX_CODE_LEN).contains(&code.chars().count())
    }
}
