//! Staff contact sheet cleanup.
//!
//! The district's staff export arrives with raw upper-case names, bare
//! mailbox ids, and numeric phone extensions. This pass rewrites it into
//! a presentable sheet: title-cased names, mailto links on the addresses,
//! and dialer links on the extensions.

use std::path::Path;

use calamine::{open_workbook_auto, Data, Range, Reader};
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatUnderline, Url, Workbook};
use serde::Deserialize;

use rollbook_core::name;

use crate::error::IoError;

/// Rows processed beyond the header; the export pads hundreds of empty
/// rows below the real data.
const MAX_STAFF_ROWS: u32 = 100;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StaffConfig {
    /// Mail domain appended to bare mailbox ids.
    pub email_domain: String,
    /// Dialer URL prefix; the extension is appended verbatim.
    pub phone_link_prefix: String,
}

impl Default for StaffConfig {
    fn default() -> Self {
        Self {
            email_domain: "sd44.org".to_string(),
            phone_link_prefix: "https://call.ctrlq.org/1630827".to_string(),
        }
    }
}

#[derive(Debug, Default, Clone, serde::Serialize)]
pub struct StaffReport {
    pub rows: usize,
    pub truncated: bool,
}

pub fn transform_staff(
    input: &Path,
    output: &Path,
    config: &StaffConfig,
) -> Result<StaffReport, IoError> {
    let mut workbook = open_workbook_auto(input).map_err(|e| IoError::Open {
        path: input.display().to_string(),
        message: e.to_string(),
    })?;
    let sheet = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| IoError::Open {
            path: input.display().to_string(),
            message: "workbook has no sheets".to_string(),
        })?;
    let range = workbook.worksheet_range(&sheet).map_err(|e| IoError::Sheet {
        sheet: sheet.clone(),
        message: e.to_string(),
    })?;

    let mut out = Workbook::new();
    let ws = out.add_worksheet();

    let left = Format::new()
        .set_font_name("Arial")
        .set_font_size(10)
        .set_align(FormatAlign::Left);
    let link = left
        .clone()
        .set_underline(FormatUnderline::Single)
        .set_font_color(Color::Black);

    let mut report = StaffReport::default();
    let end = range.end().map(|(row, _)| row).unwrap_or(0);

    for row in 1..=end {
        if row > MAX_STAFF_ROWS {
            report.truncated = true;
            break;
        }
        let out_row = row - 1;

        if let Some(Data::String(raw)) = range.get_value((row, 0)) {
            ws.write_string_with_format(out_row, 0, name::title_case(raw.trim()), &left)?;
        }
        match range.get_value((row, 1)) {
            Some(Data::String(role)) => {
                ws.write_string_with_format(out_row, 1, role, &left)?;
            }
            Some(Data::Float(n)) => {
                ws.write_number_with_format(out_row, 1, *n, &left)?;
            }
            _ => {}
        }
        if let Some(Data::String(mailbox)) = range.get_value((row, 2)) {
            let address = format!("{}@{}", mailbox.trim().to_lowercase(), config.email_domain);
            let url = Url::new(format!("mailto:{address}")).set_text(address.as_str());
            ws.write_url_with_format(out_row, 2, url, &link)?;
        }
        if let Some(extension) = numeric_extension(&range, row) {
            let url = Url::new(format!("{}{extension}", config.phone_link_prefix))
                .set_text(extension.to_string());
            ws.write_url_with_format(out_row, 3, url, &link)?;
        }

        report.rows += 1;
    }

    out.save(output)
        .map_err(|e| IoError::Write(format!("cannot save {}: {e}", output.display())))?;
    Ok(report)
}

fn numeric_extension(range: &Range<Data>, row: u32) -> Option<i64> {
    match range.get_value((row, 3))? {
        Data::Float(n) => Some(*n as i64),
        Data::Int(n) => Some(*n),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_the_district() {
        let config = StaffConfig::default();
        assert_eq!(config.email_domain, "sd44.org");
        assert!(config.phone_link_prefix.starts_with("https://"));
    }
}
