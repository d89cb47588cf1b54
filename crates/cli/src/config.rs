//! Run configuration: school facts, the teacher name-correction table,
//! and index layout geometry. Every field has a default, so running with
//! no config file at all is valid.

use std::fmt;
use std::path::Path;

use serde::Deserialize;

use rollbook_core::NameCorrections;
use rollbook_io::StaffConfig;
use rollbook_layout::LayoutConfig;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub school: SchoolConfig,
    pub corrections: NameCorrections,
    pub layout: LayoutConfig,
    pub staff: StaffConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SchoolConfig {
    /// The school's own locality, elided from guardian addresses
    /// (e.g. "Lombard, IL 60148").
    pub locality: Option<String>,
}

#[derive(Debug)]
pub enum ConfigError {
    Parse(String),
    Validation(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(msg) => write!(f, "config parse error: {msg}"),
            Self::Validation(msg) => write!(f, "config validation error: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl RunConfig {
    pub fn from_toml(input: &str) -> Result<Self, ConfigError> {
        let config: RunConfig =
            toml::from_str(input).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a file, or fall back to defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => {
                let input = std::fs::read_to_string(path).map_err(|e| {
                    ConfigError::Parse(format!("cannot read {}: {e}", path.display()))
                })?;
                Self::from_toml(&input)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.layout
            .validate()
            .map_err(|e| ConfigError::Validation(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_defaults() {
        let config = RunConfig::from_toml("").unwrap();
        assert!(config.school.locality.is_none());
        assert!(config.corrections.is_empty());
        assert_eq!(config.layout.page_height, 62);
    }

    #[test]
    fn full_config_parses() {
        let config = RunConfig::from_toml(
            r#"
[school]
locality = "Lombard, IL 60148"

[corrections]
"MORGAN EVANCIC" = "MORGAN BAETZ"

[layout]
page_height = 50
column_groups = 3

[staff]
email_domain = "example.org"
"#,
        )
        .unwrap();
        assert_eq!(config.school.locality.as_deref(), Some("Lombard, IL 60148"));
        assert_eq!(config.corrections.apply("MORGAN EVANCIC"), "MORGAN BAETZ");
        assert_eq!(config.layout.page_height, 50);
        assert_eq!(config.layout.column_groups, 3);
        assert_eq!(config.staff.email_domain, "example.org");
    }

    #[test]
    fn invalid_layout_geometry_rejected() {
        let err = RunConfig::from_toml("[layout]\npage_height = 5\n").unwrap_err();
        assert!(err.to_string().contains("validation"));
    }

    #[test]
    fn malformed_toml_rejected() {
        assert!(RunConfig::from_toml("[layout\npage_height = 5").is_err());
    }
}
