//! Styled workbook output (rust_xlsxwriter).
//!
//! One sheet per classroom in the front-office style — merged heading
//! rows, bordered student table — plus an "Index" sheet rendered from the
//! layout engine's coordinate stream with explicit page breaks at page
//! boundaries.

use std::collections::HashSet;
use std::path::Path;
use std::time::Instant;

use rust_xlsxwriter::{Format, FormatAlign, FormatBorder, Workbook, Worksheet};

use rollbook_core::Classroom;
use rollbook_layout::{LayoutConfig, PlacedGroup, GROUP_WIDTH};

use crate::error::IoError;

/// Result of a workbook export.
#[derive(Debug, Default, Clone, serde::Serialize)]
pub struct ExportReport {
    pub class_sheets: usize,
    pub student_rows: usize,
    pub index_entries: usize,
    pub index_pages: usize,
    pub warnings: Vec<String>,
    pub export_duration_ms: u128,
}

struct ClassFormats {
    heading: Format,
    subheading: Format,
    table_heading: Format,
    table_heading_end: Format,
    student: Format,
    student_bottom: Format,
    plain: Format,
    plain_bottom: Format,
    end: Format,
    end_bottom: Format,
}

impl ClassFormats {
    fn new() -> Self {
        let base = Format::new().set_font_name("Arial").set_font_size(10);
        let heading = Format::new()
            .set_font_name("Arial")
            .set_bold()
            .set_font_size(12)
            .set_align(FormatAlign::Center)
            .set_align(FormatAlign::VerticalCenter);
        let subheading = heading.clone().set_font_size(11);
        let table_heading = Format::new()
            .set_font_name("Arial")
            .set_bold()
            .set_font_size(9)
            .set_border_top(FormatBorder::Medium)
            .set_border_bottom(FormatBorder::Medium);
        let table_heading_end = table_heading.clone().set_border_right(FormatBorder::Medium);
        let student = Format::new().set_font_name("Arial").set_bold().set_font_size(11);
        Self {
            student_bottom: student.clone().set_border_bottom(FormatBorder::Thin),
            student,
            table_heading,
            table_heading_end,
            heading,
            subheading,
            plain_bottom: base.clone().set_border_bottom(FormatBorder::Thin),
            end: base.clone().set_border_right(FormatBorder::Thin),
            end_bottom: base
                .clone()
                .set_border_right(FormatBorder::Thin)
                .set_border_bottom(FormatBorder::Thin),
            plain: base,
        }
    }
}

/// Write the full output workbook: class sheets then the index.
pub fn export_workbook(
    classrooms: &[Classroom],
    placed: &[PlacedGroup],
    layout: &LayoutConfig,
    path: &Path,
) -> Result<ExportReport, IoError> {
    let start = Instant::now();
    let mut workbook = Workbook::new();
    let mut report = ExportReport::default();
    let formats = ClassFormats::new();
    let mut used_titles: HashSet<String> = HashSet::new();

    for classroom in classrooms {
        let title = unique_title(classroom.sheet_title(), &mut used_titles, &mut report);
        write_class_sheet(&mut workbook, classroom, &title, &formats, &mut report)?;
    }

    write_index_sheet(&mut workbook, placed, layout, &mut report)?;

    workbook
        .save(path)
        .map_err(|e| IoError::Write(format!("cannot save {}: {e}", path.display())))?;
    report.export_duration_ms = start.elapsed().as_millis();
    Ok(report)
}

/// Sheet names must be unique; two same-grade teachers sharing a surname
/// would otherwise collide.
fn unique_title(base: String, used: &mut HashSet<String>, report: &mut ExportReport) -> String {
    if used.insert(base.clone()) {
        return base;
    }
    let mut n = 2;
    loop {
        let candidate = format!("{base} ({n})");
        if used.insert(candidate.clone()) {
            report
                .warnings
                .push(format!("duplicate sheet title '{base}' renamed to '{candidate}'"));
            return candidate;
        }
        n += 1;
    }
}

fn write_class_sheet(
    workbook: &mut Workbook,
    classroom: &Classroom,
    title: &str,
    fmt: &ClassFormats,
    report: &mut ExportReport,
) -> Result<(), IoError> {
    let ws = workbook.add_worksheet();
    ws.set_name(title)?;

    ws.set_column_width(0, 11)?;
    ws.set_column_width(1, 22.5)?;
    ws.set_column_width(2, 18.85)?;
    ws.set_column_width(3, 31)?;
    ws.set_column_width(4, 14)?;

    ws.merge_range(0, 0, 0, 4, classroom.teacher.display_name(), &fmt.heading)?;
    let subtitle = format!("{} - {}", classroom.grade.pretty()?, classroom.room);
    ws.merge_range(1, 0, 1, 4, &subtitle, &fmt.subheading)?;

    let columns = ["Student", "Family Address", "Parent/Guardian", "Email", "Phone"];
    for (col, label) in columns.iter().enumerate() {
        let format = if col == columns.len() - 1 {
            &fmt.table_heading_end
        } else {
            &fmt.table_heading
        };
        ws.write_string_with_format(3, col as u16, *label, format)?;
    }

    let mut row: u32 = 4;
    for student in &classroom.students {
        let guardians = student.guardians();
        let address = student.address();
        let two_rows = guardians.len() > 1 || address.is_some();

        let g1 = guardians.first();
        let g1_name = g1.map(|g| g.display_name());
        let first_last = !two_rows;
        put(ws, row, 0, Some(student.display_name()), pick(fmt, Cell::Student, first_last))?;
        put(ws, row, 1, None, pick(fmt, Cell::Plain, first_last))?;
        put(ws, row, 2, g1_name.as_deref(), pick(fmt, Cell::Plain, first_last))?;
        put(ws, row, 3, g1.map(|g| g.email()), pick(fmt, Cell::Plain, first_last))?;
        put(ws, row, 4, g1.and_then(|g| g.phone()), pick(fmt, Cell::End, first_last))?;

        if two_rows {
            row += 1;
            let g2 = guardians.get(1);
            let g2_name = g2.map(|g| g.display_name());
            put(ws, row, 0, None, pick(fmt, Cell::Plain, true))?;
            put(ws, row, 1, address, pick(fmt, Cell::Plain, true))?;
            put(ws, row, 2, g2_name.as_deref(), pick(fmt, Cell::Plain, true))?;
            put(ws, row, 3, g2.map(|g| g.email()), pick(fmt, Cell::Plain, true))?;
            put(ws, row, 4, g2.and_then(|g| g.phone()), pick(fmt, Cell::End, true))?;
        }

        row += 1;
        report.student_rows += 1;
    }

    report.class_sheets += 1;
    Ok(())
}

enum Cell {
    Student,
    Plain,
    End,
}

fn pick(fmt: &ClassFormats, cell: Cell, block_bottom: bool) -> &Format {
    match (cell, block_bottom) {
        (Cell::Student, false) => &fmt.student,
        (Cell::Student, true) => &fmt.student_bottom,
        (Cell::Plain, false) => &fmt.plain,
        (Cell::Plain, true) => &fmt.plain_bottom,
        (Cell::End, false) => &fmt.end,
        (Cell::End, true) => &fmt.end_bottom,
    }
}

fn put(
    ws: &mut Worksheet,
    row: u32,
    col: u16,
    text: Option<&str>,
    format: &Format,
) -> Result<(), IoError> {
    match text {
        Some(t) => ws.write_string_with_format(row, col, t, format)?,
        // Blank writes carry the border even where there is no content.
        None => ws.write_blank(row, col, format)?,
    };
    Ok(())
}

fn write_index_sheet(
    workbook: &mut Workbook,
    placed: &[PlacedGroup],
    layout: &LayoutConfig,
    report: &mut ExportReport,
) -> Result<(), IoError> {
    let ws = workbook.add_worksheet();
    ws.set_name("Index")?;

    let letter = Format::new()
        .set_font_name("Arial")
        .set_bold()
        .set_font_size(14)
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter);
    let entry_name = Format::new().set_font_name("Arial").set_font_size(10);
    let entry_grade = entry_name.clone().set_align(FormatAlign::Center);
    let title = Format::new()
        .set_font_name("Arial")
        .set_bold()
        .set_font_size(12)
        .set_align(FormatAlign::Center);

    let total_cols = (layout.column_groups * GROUP_WIDTH) as u16;
    for group in 0..layout.column_groups {
        let base = (group * GROUP_WIDTH) as u16;
        ws.set_column_width(base, 24)?;
        ws.set_column_width(base + 1, 5)?;
        ws.set_column_width(base + 2, 13)?;
    }

    if layout.first_page_offset > 0 && total_cols > 1 {
        ws.merge_range(0, 0, 0, total_cols - 1, "Student Index", &title)?;
    }

    let mut last_page = 0;
    for group in placed {
        let anchor = group.header.anchor;
        ws.merge_range(
            anchor.row as u32,
            anchor.column(0) as u16,
            (anchor.row + group.header.rows - 1) as u32,
            anchor.column(GROUP_WIDTH - 1) as u16,
            group.letter.to_string().as_str(),
            &letter,
        )?;
        last_page = last_page.max(anchor.page);

        for entry in &group.entries {
            let cell = entry.position.cell;
            let row = cell.row as u32;
            let student = &entry.student;
            ws.write_string_with_format(row, cell.column(0) as u16, student.index_name(), &entry_name)?;
            ws.write_string_with_format(row, cell.column(1) as u16, student.grade().label(), &entry_grade)?;
            ws.write_string_with_format(
                row,
                cell.column(2) as u16,
                student.teacher().last_name_display(),
                &entry_name,
            )?;
            last_page = last_page.max(cell.page);
            report.index_entries += 1;
        }
    }

    report.index_pages = last_page + 1;
    if last_page > 0 {
        let breaks: Vec<u32> = (1..=last_page)
            .map(|p| (p * layout.page_height) as u32)
            .collect();
        ws.set_page_breaks(&breaks)?;
    }

    Ok(())
}
