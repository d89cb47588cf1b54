//! `rollbook-core` — value model shared by every Rollbook crate.
//!
//! Grades, name normalization, identity keys, and the Student / Teacher /
//! Guardian / Classroom records. Pure value objects: everything here is
//! immutable after construction and carries no I/O.

pub mod error;
pub mod grade;
pub mod guardian;
pub mod name;
pub mod person;
pub mod roster;
pub mod staff;

pub use error::ModelError;
pub use grade::Grade;
pub use guardian::Guardian;
pub use person::{Student, StudentKey};
pub use roster::Classroom;
pub use staff::{NameCorrections, Teacher, TeacherKey};
