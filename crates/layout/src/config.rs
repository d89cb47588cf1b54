use serde::Deserialize;

use crate::error::LayoutError;

/// Rows a letter header occupies.
pub const HEADER_ROWS: usize = 3;
/// Rows one index entry occupies.
pub const ENTRY_ROWS: usize = 1;
/// Physical columns per column-group: label, value, tag.
pub const GROUP_WIDTH: usize = 3;

/// Geometry of the paginated index grid.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Rows available on one page.
    pub page_height: usize,
    /// Column-groups laid side by side before a page wraps.
    pub column_groups: usize,
    /// Rows reserved below a header before the column wraps — keeps at
    /// least one entry under every header.
    pub header_buffer: usize,
    /// Rows reserved below an entry before the column wraps.
    pub entry_buffer: usize,
    /// Start offset for a column-group opened by a header.
    pub header_start: usize,
    /// Start offset for a column-group opened by an entry.
    pub entry_start: usize,
    /// Extra offset applied to page 0 only (title band). Observed in the
    /// rendered output; verify against it before changing.
    pub first_page_offset: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            page_height: 62,
            column_groups: 2,
            header_buffer: 4,
            entry_buffer: 1,
            header_start: 0,
            entry_start: 2,
            first_page_offset: 2,
        }
    }
}

impl LayoutConfig {
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.column_groups == 0 {
            return Err(LayoutError::Config("column_groups must be at least 1".into()));
        }
        if self.header_buffer < HEADER_ROWS + ENTRY_ROWS {
            return Err(LayoutError::Config(format!(
                "header_buffer must reserve a header plus one entry ({} rows), got {}",
                HEADER_ROWS + ENTRY_ROWS,
                self.header_buffer
            )));
        }
        if self.entry_buffer < ENTRY_ROWS {
            return Err(LayoutError::Config(format!(
                "entry_buffer must be at least {ENTRY_ROWS}, got {}",
                self.entry_buffer
            )));
        }
        let worst_start = self.first_page_offset + self.header_start.max(self.entry_start) + 1;
        if worst_start + self.header_buffer >= self.page_height {
            return Err(LayoutError::Config(format!(
                "page_height {} cannot hold a header block after the worst-case start offset {worst_start}",
                self.page_height
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert!(LayoutConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_column_groups_rejected() {
        let cfg = LayoutConfig { column_groups: 0, ..Default::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn undersized_page_rejected() {
        let cfg = LayoutConfig { page_height: 8, ..Default::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn header_buffer_must_reserve_an_entry() {
        let cfg = LayoutConfig { header_buffer: 3, ..Default::default() };
        assert!(cfg.validate().is_err());
    }
}
