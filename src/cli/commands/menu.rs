//! Interactive menu handler
//!
//! Drives a [`Roster`] from line-based input. Generic over the reader and writer
//! so sessions can be scripted.

use gradebook::core::models::{Course, Person, Student};
use gradebook::core::records_export::RecordFiles;
use gradebook::core::{report, Roster, RosterError};
use gradebook::logger::is_verbose_enabled;
use gradebook::{error, info, warn};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;

const BANNER_RULE: &str = "=======================================";

/// Menu entries, numbered as shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// 0
    Exit,
    /// 1
    AddStudent,
    /// 2
    AddCourse,
    /// 3
    AssignGrade,
    /// 4
    UpdateGrade,
    /// 5
    ViewStudent,
    /// 6
    ViewGradeReport,
    /// 7
    ListStudents,
    /// 8
    ListCourses,
    /// 9
    Export,
    /// 10
    Import,
}

impl MenuChoice {
    /// Map a menu number onto its entry
    pub const fn from_number(number: u32) -> Option<Self> {
        Some(match number {
            0 => Self::Exit,
            1 => Self::AddStudent,
            2 => Self::AddCourse,
            3 => Self::AssignGrade,
            4 => Self::UpdateGrade,
            5 => Self::ViewStudent,
            6 => Self::ViewGradeReport,
            7 => Self::ListStudents,
            8 => Self::ListCourses,
            9 => Self::Export,
            10 => Self::Import,
            _ => return None,
        })
    }
}

/// Where exported records go and which file names they use
#[derive(Debug, Clone)]
pub struct RecordLocation {
    /// Directory holding the record files
    pub dir: PathBuf,
    /// File names for each record set
    pub files: RecordFiles,
}

/// Interactive session over a roster
pub struct Menu<R, W> {
    roster: Roster,
    input: R,
    output: W,
    records: RecordLocation,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    /// Create a session with an empty roster
    pub const fn new(input: R, output: W, records: RecordLocation) -> Self {
        Self {
            roster: Roster::new(),
            input,
            output,
            records,
        }
    }

    /// Roster state at the end of the session
    pub const fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Consume the session, returning the writer
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run until the user picks 0 or input ends
    ///
    /// # Errors
    /// Returns an error only if reading input or writing output fails
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.show_menu()?;
            let Some(line) = self.read_line()? else {
                info!("Input closed; leaving menu");
                return Ok(());
            };

            match line.trim().parse::<u32>().ok().and_then(MenuChoice::from_number) {
                Some(MenuChoice::Exit) => {
                    writeln!(self.output, "\nThank you for using the system!")?;
                    return Ok(());
                }
                Some(choice) => self.dispatch(choice)?,
                None => writeln!(self.output, "Invalid choice! Please try again.")?,
            }
        }
    }

    fn show_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n{BANNER_RULE}")?;
        writeln!(self.output, "   STUDENT GRADE MANAGEMENT SYSTEM")?;
        writeln!(self.output, "{BANNER_RULE}")?;
        for entry in [
            "1. Add New Student",
            "2. Add New Course",
            "3. Assign Grade to Student",
            "4. Update Student Grade",
            "5. View Student Details",
            "6. View Grade Report",
            "7. Display All Students",
            "8. Display All Courses",
            "9. Save Data to Files",
            "10. Load Data from Files",
            "0. Exit",
        ] {
            writeln!(self.output, "{entry}")?;
        }
        writeln!(self.output, "{BANNER_RULE}")?;
        write!(self.output, "Enter your choice: ")?;
        self.output.flush()
    }

    fn dispatch(&mut self, choice: MenuChoice) -> io::Result<()> {
        match choice {
            MenuChoice::Exit => Ok(()),
            MenuChoice::AddStudent => self.add_student(),
            MenuChoice::AddCourse => self.add_course(),
            MenuChoice::AssignGrade => self.assign_grade(),
            MenuChoice::UpdateGrade => self.update_grade(),
            MenuChoice::ViewStudent => self.view_student(),
            MenuChoice::ViewGradeReport => self.view_grade_report(),
            MenuChoice::ListStudents => {
                let text = report::student_list(&self.roster);
                write!(self.output, "\n{text}")
            }
            MenuChoice::ListCourses => {
                let text = report::course_list(&self.roster);
                write!(self.output, "\n{text}")
            }
            MenuChoice::Export => self.export(),
            MenuChoice::Import => self.import(),
        }
    }

    /// Read one line, `None` at end of input
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Prompt for free text
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}: ")?;
        self.output.flush()?;
        Ok(self.read_line()?.map(|s| s.trim().to_string()))
    }

    /// Prompt for a parsed value; reports unparsable input and yields `None`
    fn prompt_value<T: FromStr>(&mut self, label: &str) -> io::Result<Option<T>> {
        let Some(raw) = self.prompt(label)? else {
            return Ok(None);
        };
        match raw.parse::<T>() {
            Ok(value) => Ok(Some(value)),
            Err(_) => {
                writeln!(self.output, "Invalid input '{raw}'!")?;
                Ok(None)
            }
        }
    }

    fn reject(&mut self, err: &RosterError) -> io::Result<()> {
        warn!("Operation rejected ({}): {err}", err.kind());
        writeln!(self.output, "{err}")
    }

    fn report_result(&mut self, result: Result<(), RosterError>, success: &str) -> io::Result<()> {
        match result {
            Ok(()) => writeln!(self.output, "{success}"),
            Err(e) => self.reject(&e),
        }
    }

    fn add_student(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n=== Add New Student ===")?;
        let Some(id) = self.prompt_value::<u32>("Enter Student ID")? else {
            return Ok(());
        };
        if self.roster.find_student_by_id(id).is_some() {
            return self.reject(&RosterError::DuplicateStudent(id));
        }
        let Some(name) = self.prompt("Enter Name")? else {
            return Ok(());
        };
        let Some(email) = self.prompt("Enter Email")? else {
            return Ok(());
        };
        let Some(roll) = self.prompt_value::<u32>("Enter Roll Number")? else {
            return Ok(());
        };
        let Some(department) = self.prompt("Enter Department")? else {
            return Ok(());
        };
        let Some(semester) = self.prompt_value::<u32>("Enter Semester")? else {
            return Ok(());
        };

        let student = Student::new(Person::new(id, name, email), roll, department, semester);
        let result = self.roster.add_student(student);
        self.report_result(result, "Student added successfully!")
    }

    fn add_course(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n=== Add New Course ===")?;
        let Some(code) = self.prompt("Enter Course Code")? else {
            return Ok(());
        };
        if !Course::is_valid_code(&code) {
            return self.reject(&RosterError::InvalidCourseCode(code));
        }
        if self.roster.find_course_by_code(&code).is_some() {
            return self.reject(&RosterError::DuplicateCourse(code));
        }
        let Some(name) = self.prompt("Enter Course Name")? else {
            return Ok(());
        };
        let Some(credits) = self.prompt_value::<u32>("Enter Credit Hours")? else {
            return Ok(());
        };
        let Some(instructor) = self.prompt("Enter Instructor Name")? else {
            return Ok(());
        };

        let result = self
            .roster
            .add_course(Course::new(code, name, credits, instructor));
        self.report_result(result, "Course added successfully!")
    }

    fn assign_grade(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n=== Assign Grade ===")?;
        let Some(student_id) = self.prompt_value::<u32>("Enter Student ID")? else {
            return Ok(());
        };
        if self.roster.find_student_by_id(student_id).is_none() {
            return self.reject(&RosterError::StudentNotFound(student_id));
        }
        let Some(code) = self.prompt("Enter Course Code")? else {
            return Ok(());
        };
        if self.roster.find_course_by_code(&code).is_none() {
            return self.reject(&RosterError::CourseNotFound(code));
        }
        let Some(semester) = self.prompt_value::<u32>("Enter Semester")? else {
            return Ok(());
        };
        let Some(marks) = self.prompt_value::<f64>("Enter Marks (0-100)")? else {
            return Ok(());
        };

        let result = self.roster.assign_grade(student_id, &code, semester, marks);
        self.report_result(result, "Grade assigned successfully!")
    }

    fn update_grade(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n=== Update Grade ===")?;
        let Some(student_id) = self.prompt_value::<u32>("Enter Student ID")? else {
            return Ok(());
        };
        if self.roster.find_student_by_id(student_id).is_none() {
            return self.reject(&RosterError::StudentNotFound(student_id));
        }
        let Some(code) = self.prompt("Enter Course Code")? else {
            return Ok(());
        };
        let Some(marks) = self.prompt_value::<f64>("Enter New Marks")? else {
            return Ok(());
        };

        let result = self.roster.update_grade(student_id, &code, marks);
        self.report_result(result, "Grade updated successfully!")
    }

    fn view_student(&mut self) -> io::Result<()> {
        let Some(student_id) = self.prompt_value::<u32>("\nEnter Student ID")? else {
            return Ok(());
        };
        match self.roster.find_student_by_id(student_id) {
            Some(student) => {
                let text = report::student_details(student);
                write!(self.output, "\n=== Student Details ===\n{text}")
            }
            None => writeln!(self.output, "{}", RosterError::StudentNotFound(student_id)),
        }
    }

    fn view_grade_report(&mut self) -> io::Result<()> {
        let Some(student_id) = self.prompt_value::<u32>("\nEnter Student ID")? else {
            return Ok(());
        };
        match self.roster.find_student_by_id(student_id) {
            Some(student) => {
                let text = report::grade_report(student);
                write!(self.output, "\n{text}")
            }
            None => writeln!(self.output, "{}", RosterError::StudentNotFound(student_id)),
        }
    }

    fn export(&mut self) -> io::Result<()> {
        match self
            .roster
            .export_all(&self.records.dir, &self.records.files)
        {
            Ok(summary) => {
                if is_verbose_enabled() {
                    for path in &summary.paths {
                        writeln!(self.output, "  wrote {}", path.display())?;
                    }
                }
                writeln!(self.output, "Data saved successfully!")
            }
            Err(e) => {
                error!("Export to {} failed: {e}", self.records.dir.display());
                writeln!(self.output, "✗ Failed to save data: {e}")
            }
        }
    }

    fn import(&mut self) -> io::Result<()> {
        let summary = self
            .roster
            .import_all(&self.records.dir, &self.records.files);
        info!(
            "Import requested: courses file found = {}, records loaded = {}",
            summary.courses_file_found, summary.records_loaded
        );
        writeln!(self.output, "Data loaded successfully!")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn session(script: &str, dir: PathBuf) -> Menu<Cursor<Vec<u8>>, Vec<u8>> {
        let mut menu = Menu::new(
            Cursor::new(script.as_bytes().to_vec()),
            Vec::new(),
            RecordLocation {
                dir,
                files: RecordFiles::default(),
            },
        );
        menu.run().unwrap();
        menu
    }

    fn output_of(menu: Menu<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(menu.into_output()).unwrap()
    }

    const ADD_STUDENT: &str = "1\n1\nAda Lovelace\nada@example.edu\n101\nComputer Science\n3\n";
    const ADD_COURSE: &str = "2\nCS1800\nDiscrete Structures\n4\nDr. Lionelle\n";

    #[test]
    fn test_menu_choice_numbers() {
        assert_eq!(MenuChoice::from_number(0), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::from_number(10), Some(MenuChoice::Import));
        assert_eq!(MenuChoice::from_number(11), None);
    }

    #[test]
    fn test_exit_immediately() {
        let menu = session("0\n", PathBuf::from("unused"));
        assert!(output_of(menu).contains("Thank you for using the system!"));
    }

    #[test]
    fn test_end_of_input_leaves_loop() {
        let menu = session("", PathBuf::from("unused"));
        assert!(menu.roster().students().is_empty());
    }

    #[test]
    fn test_invalid_choice_redisplays_menu() {
        let menu = session("42\nabc\n0\n", PathBuf::from("unused"));
        let out = output_of(menu);

        assert_eq!(out.matches("Invalid choice! Please try again.").count(), 2);
        assert_eq!(out.matches("STUDENT GRADE MANAGEMENT SYSTEM").count(), 3);
    }

    #[test]
    fn test_add_student_course_and_grade() {
        let script = format!("{ADD_STUDENT}{ADD_COURSE}3\n1\nCS1800\n1\n95\n0\n");
        let menu = session(&script, PathBuf::from("unused"));

        let student = menu.roster().find_student_by_id(1).unwrap();
        assert_eq!(student.name(), "Ada Lovelace");
        assert_eq!(student.grades().len(), 1);
        assert!((student.calculate_gpa() - 4.0).abs() < f64::EPSILON);

        let out = output_of(menu);
        assert!(out.contains("Student added successfully!"));
        assert!(out.contains("Course added successfully!"));
        assert!(out.contains("Grade assigned successfully!"));
    }

    #[test]
    fn test_duplicate_student_stops_before_details() {
        let script = format!("{ADD_STUDENT}1\n1\n0\n");
        let menu = session(&script, PathBuf::from("unused"));

        assert_eq!(menu.roster().students().len(), 1);
        assert!(output_of(menu).contains("Student with ID 1 already exists"));
    }

    #[test]
    fn test_assign_out_of_range_marks() {
        let script = format!("{ADD_STUDENT}{ADD_COURSE}3\n1\nCS1800\n1\n101\n0\n");
        let menu = session(&script, PathBuf::from("unused"));

        assert!(menu.roster().find_student_by_id(1).unwrap().grades().is_empty());
        assert!(output_of(menu).contains("must be between 0 and 100"));
    }

    #[test]
    fn test_short_course_code_rejected() {
        let menu = session("2\nCS1\n0\n", PathBuf::from("unused"));

        assert!(menu.roster().courses().is_empty());
        assert!(output_of(menu).contains("Invalid course code 'CS1'"));
    }

    #[test]
    fn test_non_numeric_id_abandons_operation() {
        let menu = session("1\nabc\n0\n", PathBuf::from("unused"));

        assert!(menu.roster().students().is_empty());
        assert!(output_of(menu).contains("Invalid input 'abc'!"));
    }

    #[test]
    fn test_negative_id_is_invalid_input() {
        let menu = session("1\n-5\n0\n", PathBuf::from("unused"));

        assert!(menu.roster().students().is_empty());
        assert!(output_of(menu).contains("Invalid input '-5'!"));
    }

    #[test]
    fn test_update_grade_without_record() {
        let script = format!("{ADD_STUDENT}4\n1\nCS1800\n70\n0\n");
        let menu = session(&script, PathBuf::from("unused"));
        assert!(output_of(menu).contains("Course CS1800 not found for student 1"));
    }

    #[test]
    fn test_grade_report_view() {
        let script = format!("{ADD_STUDENT}{ADD_COURSE}3\n1\nCS1800\n1\n85\n6\n1\n0\n");
        let out = output_of(session(&script, PathBuf::from("unused")));

        assert!(out.contains("Grade Report for Ada Lovelace (ID: 1)"));
        assert!(out.contains("GPA: 3.00"));
    }

    #[test]
    fn test_export_and_import() {
        let dir = tempfile::tempdir().unwrap();
        let script = format!("{ADD_STUDENT}{ADD_COURSE}9\n10\n0\n");
        let menu = session(&script, dir.path().to_path_buf());

        assert_eq!(menu.roster().students().len(), 1);
        let courses = std::fs::read_to_string(dir.path().join("courses.txt")).unwrap();
        assert_eq!(courses, "CS1800,Discrete Structures,4,Dr. Lionelle\n");

        let out = output_of(menu);
        assert!(out.contains("Data saved successfully!"));
        assert!(out.contains("Data loaded successfully!"));
    }

    #[cfg(feature = "verbose")]
    #[test]
    fn test_verbose_export_lists_files_in_session_output() {
        gradebook::logger::enable_verbose();
        let dir = tempfile::tempdir().unwrap();
        let out = output_of(session("9
0
", dir.path().to_path_buf()));

        for file in ["students.txt", "courses.txt", "grades.txt"] {
            let line = format!("  wrote {}", dir.path().join(file).display());
            assert!(out.contains(&line), "missing {line}");
        }
    }
}
