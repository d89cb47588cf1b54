//! Grade parsing and display.
//!
//! Source workbooks label grades inconsistently: "K", "Kdg", "1ST", "3",
//! or a bare numeric cell (3.0). All of them normalize to an ordinal where
//! 0 is kindergarten.

use std::fmt;

use regex::Regex;

use crate::error::ModelError;

/// A school grade, compared and hashed by ordinal only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Grade {
    ordinal: i64,
}

impl Grade {
    /// Parse a grade label. Ordinal-suffix letters (ST/ND/RD/TH) and the
    /// kindergarten abbreviation (DG) are stripped before parsing, so
    /// "Kdg" → K and "1ST" → 1.
    pub fn parse(raw: &str) -> Result<Self, ModelError> {
        let suffix = Regex::new(r"(ST|ND|RD|TH|DG)").unwrap();
        let upper = raw.to_uppercase();
        let stripped = suffix.replace_all(&upper, "");
        let stripped = stripped.trim();

        if stripped == "K" {
            return Ok(Self { ordinal: 0 });
        }

        let number: f64 = stripped
            .parse()
            .map_err(|_| ModelError::InvalidGrade(raw.to_string()))?;
        Ok(Self { ordinal: number.trunc() as i64 })
    }

    /// Build from a numeric spreadsheet cell. Fractional values truncate.
    pub fn from_cell(value: f64) -> Self {
        Self { ordinal: value.trunc() as i64 }
    }

    pub fn ordinal(&self) -> i64 {
        self.ordinal
    }

    /// Short label: "K" for kindergarten, the number otherwise.
    pub fn label(&self) -> String {
        if self.ordinal == 0 {
            "K".to_string()
        } else {
            self.ordinal.to_string()
        }
    }

    /// Long label for sheet headings. Errors outside the K-5 range.
    pub fn pretty(&self) -> Result<&'static str, ModelError> {
        match self.ordinal {
            0 => Ok("Kindergarten"),
            1 => Ok("1st Grade"),
            2 => Ok("2nd Grade"),
            3 => Ok("3rd Grade"),
            4 => Ok("4th Grade"),
            5 => Ok("5th Grade"),
            other => Err(ModelError::GradeRange(other)),
        }
    }
}

// Display is the short label so `{grade}` interpolation matches the
// source workbooks' own notation.
impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl serde::Serialize for Grade {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.label())
    }
}
