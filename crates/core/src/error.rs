use std::fmt;

#[derive(Debug)]
pub enum ModelError {
    /// Grade label that is neither "K" nor numeric after suffix stripping.
    InvalidGrade(String),
    /// Ordinal outside the displayable K..5 range.
    GradeRange(i64),
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGrade(value) => write!(f, "invalid grade: '{value}'"),
            Self::GradeRange(ordinal) => {
                write!(f, "grade ordinal {ordinal} outside the K-5 range")
            }
        }
    }
}

impl std::error::Error for ModelError {}
