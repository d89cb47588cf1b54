//! A classroom: one teacher's roster plus the room label.

use serde::Serialize;

use crate::grade::Grade;
use crate::name;
use crate::person::Student;
use crate::staff::Teacher;

#[derive(Debug, Clone, Serialize)]
pub struct Classroom {
    pub teacher: Teacher,
    pub grade: Grade,
    pub room: String,
    pub students: Vec<Student>,
}

impl Classroom {
    pub fn new(teacher: Teacher, grade: Grade, room: &str, students: Vec<Student>) -> Self {
        let room = name::title_case(room.trim()).replace("# ", "");
        Self { teacher, grade, room, students }
    }

    /// Sheet title in the class-list convention: grade label plus the
    /// teacher's surname token, e.g. "2 SMITH".
    pub fn sheet_title(&self) -> String {
        format!("{} {}", self.grade.label(), self.teacher.last_name())
    }
}
