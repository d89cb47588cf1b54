//! Workbook ingestion (xlsx, xls, ods via calamine).
//!
//! Two source shapes. The class-list workbook carries one sheet per
//! teacher: a header row (`TEACHER: NAME`, grade label, room) and student
//! names from row 4 down to a blank or "total" row. The directory export
//! is flat rows of student/grade/teacher plus one or two guardian column
//! blocks, whose width is signaled by the header row.

use std::path::Path;

use calamine::{open_workbook_auto, Data, Range, Reader};
use regex::Regex;

use rollbook_core::{Classroom, Grade, Guardian, NameCorrections, Student, Teacher};

use crate::error::IoError;

/// Per-import statistics for the class-list workbook.
#[derive(Debug, Default, Clone, serde::Serialize)]
pub struct ClassListReport {
    pub classrooms: usize,
    pub students: usize,
    pub skipped_sheets: Vec<String>,
    pub warnings: Vec<String>,
}

/// Per-import statistics for the directory export(s).
#[derive(Debug, Default, Clone, serde::Serialize)]
pub struct DirectoryReport {
    pub files: usize,
    pub students: usize,
    pub guardians: usize,
    pub skipped_rows: usize,
    pub warnings: Vec<String>,
}

/// Import the class-list workbook: one classroom per teacher sheet.
/// Placeholder sheets ("Sheet1", …) are skipped and reported.
pub fn import_class_lists(
    path: &Path,
    corrections: &NameCorrections,
) -> Result<(Vec<Classroom>, ClassListReport), IoError> {
    let mut workbook = open_workbook_auto(path).map_err(|e| IoError::Open {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    let sheet_names = workbook.sheet_names().to_vec();
    let mut report = ClassListReport::default();
    let mut classrooms = Vec::new();

    for name in &sheet_names {
        if name.starts_with("Sheet") {
            report.skipped_sheets.push(name.clone());
            continue;
        }
        let range = workbook.worksheet_range(name).map_err(|e| IoError::Sheet {
            sheet: name.clone(),
            message: e.to_string(),
        })?;
        let classroom = parse_class_sheet(name, &range, corrections)?;
        if classroom.students.is_empty() {
            report.warnings.push(format!("sheet '{name}': no students listed"));
        }
        report.classrooms += 1;
        report.students += classroom.students.len();
        classrooms.push(classroom);
    }

    Ok((classrooms, report))
}

fn parse_class_sheet(
    sheet: &str,
    range: &Range<Data>,
    corrections: &NameCorrections,
) -> Result<Classroom, IoError> {
    let raw = cell_string(range, 0, 0).ok_or_else(|| IoError::MissingCell {
        sheet: sheet.to_string(),
        cell: "A1".to_string(),
    })?;
    let teacher_name = clean_teacher_header(&raw);

    // The sheet title is the roster's source of truth; a header that
    // names someone else means the workbook was edited inconsistently.
    if teacher_name != sheet {
        return Err(IoError::SheetTitleMismatch {
            sheet: sheet.to_string(),
            teacher: teacher_name,
        });
    }

    let grade_label = cell_string(range, 0, 1).ok_or_else(|| IoError::MissingCell {
        sheet: sheet.to_string(),
        cell: "B1".to_string(),
    })?;
    let grade = Grade::parse(&grade_label)?;
    let room = cell_string(range, 0, 2).ok_or_else(|| IoError::MissingCell {
        sheet: sheet.to_string(),
        cell: "C1".to_string(),
    })?;

    let teacher = Teacher::new(&teacher_name, grade, corrections);

    let mut students = Vec::new();
    for row in 3..=end_row(range) {
        let Some(name) = cell_string(range, row, 0) else {
            break;
        };
        if name.to_lowercase().contains("total") {
            break;
        }
        students.push(Student::new(&name, grade, teacher.clone()));
    }

    Ok(Classroom::new(teacher, grade, &room, students))
}

/// "Teacher: Jane Smith (long-term sub)" → "JANE SMITH".
fn clean_teacher_header(raw: &str) -> String {
    let paren = Regex::new(r" \(.*\)$").unwrap();
    let upper = raw.to_uppercase().replace("TEACHER: ", "");
    paren.replace(upper.trim(), "").trim().to_string()
}

/// Import one or more directory exports into the full student population.
pub fn import_directory<P: AsRef<Path>>(
    paths: &[P],
    corrections: &NameCorrections,
    home_locality: Option<&str>,
) -> Result<(Vec<Student>, DirectoryReport), IoError> {
    let mut report = DirectoryReport::default();
    let mut students = Vec::new();

    for path in paths {
        let path = path.as_ref();
        import_directory_file(path, corrections, home_locality, &mut students, &mut report)?;
        report.files += 1;
    }

    report.students = students.len();
    Ok((students, report))
}

fn import_directory_file(
    path: &Path,
    corrections: &NameCorrections,
    home_locality: Option<&str>,
    students: &mut Vec<Student>,
    report: &mut DirectoryReport,
) -> Result<(), IoError> {
    let source = path.display().to_string();
    let mut workbook = open_workbook_auto(path).map_err(|e| IoError::Open {
        path: source.clone(),
        message: e.to_string(),
    })?;
    let sheet = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| IoError::Open {
            path: source.clone(),
            message: "workbook has no sheets".to_string(),
        })?;
    let range = workbook.worksheet_range(&sheet).map_err(|e| IoError::Sheet {
        sheet: sheet.clone(),
        message: e.to_string(),
    })?;

    // The export widens when phone/address columns are present; the
    // header row says which shape this file is.
    let has_phone = cell_string(&range, 0, 6).as_deref() == Some("Phone");
    let has_address = cell_string(&range, 0, 7).as_deref() == Some("Address");
    let guardian2_col = if has_address {
        10
    } else if has_phone {
        7
    } else {
        6
    };

    for row in 1..=end_row(&range) {
        let name = cell_string(&range, row, 0);
        let grade_label = cell_string(&range, row, 1);
        if name.is_none() && grade_label.is_none() {
            // Filler row at the bottom of the export.
            report.skipped_rows += 1;
            continue;
        }

        let row_number = row as usize + 1;
        let missing = |field: &'static str| IoError::MissingField {
            source: source.clone(),
            row: row_number,
            field,
        };
        let name = name.ok_or_else(|| missing("student name"))?;
        let grade_label = grade_label.ok_or_else(|| missing("grade"))?;
        let grade = Grade::parse(&grade_label)?;
        let teacher_name = cell_string(&range, row, 2).ok_or_else(|| missing("teacher"))?;
        let teacher = Teacher::new(&teacher_name, grade, corrections);

        let mut guardians = Vec::new();
        match cell_string(&range, row, 4) {
            Some(g1_name) => {
                let email = cell_string(&range, row, 5).unwrap_or_default();
                let phone = if has_phone { cell_string(&range, row, 6) } else { None };
                let address = if has_address { cell_string(&range, row, 7) } else { None };
                guardians.push(Guardian::new(&g1_name, &email, phone, address, home_locality));
            }
            None => {
                report
                    .warnings
                    .push(format!("{source} row {row_number}: no guardian recorded for {name}"));
            }
        }
        if let Some(g2_name) = cell_string(&range, row, guardian2_col) {
            let email = cell_string(&range, row, guardian2_col + 1).unwrap_or_default();
            let phone = cell_string(&range, row, guardian2_col + 2);
            guardians.push(Guardian::new(&g2_name, &email, phone, None, home_locality));
        }

        report.guardians += guardians.len();
        students.push(Student::with_guardians(&name, grade, teacher, guardians));
    }

    Ok(())
}

fn end_row(range: &Range<Data>) -> u32 {
    range.end().map(|(row, _)| row).unwrap_or(0)
}

/// Read a cell as trimmed text. Numeric cells render without a trailing
/// ".0"; empty and error cells are `None`.
fn cell_string(range: &Range<Data>, row: u32, col: u32) -> Option<String> {
    match range.get_value((row, col))? {
        Data::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Data::Float(n) => Some(format_number(*n)),
        Data::Int(n) => Some(n.to_string()),
        Data::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn format_number(n: f64) -> String {
    if n.fract() == 0.0 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn teacher_header_cleaned() {
        assert_eq!(clean_teacher_header("Teacher: Jane Smith"), "JANE SMITH");
        assert_eq!(clean_teacher_header("TEACHER: SMITH (am)"), "SMITH");
        assert_eq!(clean_teacher_header("  SMITH  "), "SMITH");
    }

    #[test]
    fn numbers_render_without_decimal_tail() {
        assert_eq!(format_number(112.0), "112");
        assert_eq!(format_number(3.5), "3.5");
    }
}
