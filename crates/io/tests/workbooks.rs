//! Round-trip tests: fixtures are written with rust_xlsxwriter into a
//! temp dir, then imported back through the calamine path.

use std::path::Path;

use rust_xlsxwriter::Workbook;

use rollbook_core::{Grade, NameCorrections, Student};
use rollbook_io::{
    export_workbook, import_class_lists, import_directory, IoError,
};
use rollbook_layout::{lay_out, letter_groups, LayoutConfig};

const LOCALITY: &str = "Lombard, IL 60148";

fn write_class_list(path: &Path) {
    let mut wb = Workbook::new();
    wb.add_worksheet().set_name("Sheet1").unwrap();

    let ws = wb.add_worksheet();
    ws.set_name("SMITH").unwrap();
    ws.write_string(0, 0, "Teacher: Smith (am)").unwrap();
    ws.write_string(0, 1, "2ND").unwrap();
    ws.write_string(0, 2, "# 112").unwrap();
    ws.write_string(3, 0, "DOE, JANE").unwrap();
    ws.write_string(4, 0, "ROE, RICK").unwrap();
    ws.write_string(5, 0, "Total: 2").unwrap();
    ws.write_string(6, 0, "GHOST, IGNORED").unwrap();

    let ws = wb.add_worksheet();
    ws.set_name("JONES").unwrap();
    ws.write_string(0, 0, "Teacher: Jones").unwrap();
    ws.write_string(0, 1, "Kdg").unwrap();
    ws.write_number(0, 2, 4.0).unwrap();
    ws.write_string(3, 0, "KIM, ADA").unwrap();

    wb.save(path).unwrap();
}

fn write_directory_wide(path: &Path) {
    // Phone and Address columns present: guardian 2 starts at column K.
    let mut wb = Workbook::new();
    let ws = wb.add_worksheet();
    let header = [
        "Student", "Grade", "Teacher", "Room", "Parent/Guardian", "Email", "Phone", "Address",
    ];
    for (col, label) in header.iter().enumerate() {
        ws.write_string(0, col as u16, *label).unwrap();
    }
    ws.write_string(0, 10, "Guardian 2").unwrap();

    ws.write_string(1, 0, "DOE, JANE").unwrap();
    ws.write_string(1, 1, "2").unwrap();
    ws.write_string(1, 2, "Jane Smith").unwrap();
    ws.write_string(1, 4, "DOE, PAT").unwrap();
    ws.write_string(1, 5, "PAT@Example.COM").unwrap();
    ws.write_number(1, 6, 6305550100.0).unwrap();
    ws.write_string(1, 7, "123 MAIN ST LOMBARD, IL 60148").unwrap();
    ws.write_string(1, 10, "DOE, SAM").unwrap();
    ws.write_string(1, 11, "sam@example.com").unwrap();
    ws.write_string(1, 12, "630-555-0101").unwrap();

    // No guardian recorded.
    ws.write_string(2, 0, "ROE, RICK").unwrap();
    ws.write_number(2, 1, 2.0).unwrap();
    ws.write_string(2, 2, "Jane Smith").unwrap();

    // Row 4 left blank; a real student after it keeps the scan going.
    ws.write_string(4, 0, "KIM, ADA").unwrap();
    ws.write_string(4, 1, "K").unwrap();
    ws.write_string(4, 2, "Amy Jones").unwrap();
    ws.write_string(4, 4, "KIM, LEE").unwrap();
    ws.write_string(4, 5, "lee@example.com").unwrap();

    wb.save(path).unwrap();
}

fn write_directory_narrow(path: &Path) {
    // Neither Phone nor Address: guardian 2 starts right after the email.
    let mut wb = Workbook::new();
    let ws = wb.add_worksheet();
    for (col, label) in ["Student", "Grade", "Teacher", "Room", "Parent/Guardian", "Email"]
        .iter()
        .enumerate()
    {
        ws.write_string(0, col as u16, *label).unwrap();
    }
    ws.write_string(0, 6, "Guardian 2").unwrap();

    ws.write_string(1, 0, "POE, EDGAR").unwrap();
    ws.write_string(1, 1, "3RD").unwrap();
    ws.write_string(1, 2, "Amy Jones").unwrap();
    ws.write_string(1, 4, "POE, VAL").unwrap();
    ws.write_string(1, 5, "val@example.com").unwrap();
    ws.write_string(1, 6, "POE, IDA").unwrap();
    ws.write_string(1, 7, "ida@example.com").unwrap();
    ws.write_string(1, 8, "630-555-0102").unwrap();

    wb.save(path).unwrap();
}

#[test]
fn class_list_import() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("classes.xlsx");
    write_class_list(&path);

    let (classrooms, report) =
        import_class_lists(&path, &NameCorrections::default()).unwrap();

    assert_eq!(report.classrooms, 2);
    assert_eq!(report.students, 3);
    assert_eq!(report.skipped_sheets, ["Sheet1"]);

    let smith = &classrooms[0];
    assert_eq!(smith.teacher.name(), "SMITH");
    assert_eq!(smith.grade, Grade::parse("2").unwrap());
    assert_eq!(smith.room, "112");
    // The scan stopped at the total row.
    let names: Vec<&str> = smith.students.iter().map(Student::name).collect();
    assert_eq!(names, ["DOE, JANE", "ROE, RICK"]);

    let jones = &classrooms[1];
    assert_eq!(jones.grade, Grade::parse("K").unwrap());
    assert_eq!(jones.room, "4");
}

#[test]
fn class_sheet_title_mismatch_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("classes.xlsx");

    let mut wb = Workbook::new();
    let ws = wb.add_worksheet();
    ws.set_name("JONES").unwrap();
    ws.write_string(0, 0, "Teacher: Smith").unwrap();
    ws.write_string(0, 1, "2").unwrap();
    ws.write_string(0, 2, "7").unwrap();
    wb.save(&path).unwrap();

    let err = import_class_lists(&path, &NameCorrections::default()).unwrap_err();
    assert!(matches!(err, IoError::SheetTitleMismatch { .. }));
}

#[test]
fn directory_import_wide_layout() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pta.xlsx");
    write_directory_wide(&path);

    let (students, report) = import_directory(
        &[&path],
        &NameCorrections::default(),
        Some(LOCALITY),
    )
    .unwrap();

    assert_eq!(students.len(), 3);
    assert_eq!(report.files, 1);
    assert_eq!(report.skipped_rows, 1);
    assert_eq!(report.warnings.len(), 1);
    assert!(report.warnings[0].contains("ROE, RICK"));

    let jane = &students[0];
    assert_eq!(jane.guardians().len(), 2);
    assert_eq!(jane.guardians()[0].email(), "pat@example.com");
    assert_eq!(jane.guardians()[0].phone(), Some("6305550100"));
    assert_eq!(jane.address(), Some("123 Main St"));
    assert_eq!(jane.guardians()[1].phone(), Some("630-555-0101"));
    assert_eq!(jane.teacher().last_name(), "SMITH");

    let rick = &students[1];
    assert!(rick.guardians().is_empty());
    assert_eq!(rick.grade(), Grade::parse("2").unwrap());
}

#[test]
fn directory_import_narrow_layout() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pta.xlsx");
    write_directory_narrow(&path);

    let (students, _) = import_directory(
        &[&path],
        &NameCorrections::default(),
        Some(LOCALITY),
    )
    .unwrap();

    assert_eq!(students.len(), 1);
    let edgar = &students[0];
    assert_eq!(edgar.grade(), Grade::parse("3").unwrap());
    assert_eq!(edgar.guardians().len(), 2);
    // Without the Phone column flag the first guardian has no phone.
    assert_eq!(edgar.guardians()[0].phone(), None);
    assert_eq!(edgar.guardians()[1].name(), "POE, IDA");
    assert_eq!(edgar.guardians()[1].phone(), Some("630-555-0102"));
}

#[test]
fn export_produces_class_sheets_and_index() {
    let dir = tempfile::tempdir().unwrap();
    let class_path = dir.path().join("classes.xlsx");
    let pta_path = dir.path().join("pta.xlsx");
    let out_path = dir.path().join("directory.xlsx");
    write_class_list(&class_path);
    write_directory_wide(&pta_path);

    let (classrooms, _) = import_class_lists(&class_path, &NameCorrections::default()).unwrap();
    let (people, _) =
        import_directory(&[&pta_path], &NameCorrections::default(), Some(LOCALITY)).unwrap();
    let outcome = rollbook_recon::reconcile(classrooms, &people);

    let everyone: Vec<Student> = outcome
        .classrooms
        .iter()
        .flat_map(|c| c.students.iter().cloned())
        .collect();
    let layout = LayoutConfig::default();
    let placed = lay_out(letter_groups(everyone), &layout).unwrap();

    let report = export_workbook(&outcome.classrooms, &placed, &layout, &out_path).unwrap();
    assert_eq!(report.class_sheets, 2);
    assert_eq!(report.index_entries, 3);
    assert_eq!(report.index_pages, 1);

    // Read it back.
    use calamine::{open_workbook_auto, Reader};
    let mut wb = open_workbook_auto(&out_path).unwrap();
    let names = wb.sheet_names().to_vec();
    assert!(names.contains(&"2 SMITH".to_string()));
    assert!(names.contains(&"K JONES".to_string()));
    assert!(names.contains(&"Index".to_string()));

    let smith = wb.worksheet_range("2 SMITH").unwrap();
    // Directory-sourced full teacher name in the heading.
    assert_eq!(
        smith.get_value((0, 0)).unwrap().to_string(),
        "Jane Smith"
    );
    assert_eq!(
        smith.get_value((1, 0)).unwrap().to_string(),
        "2nd Grade - 112"
    );

    let index = wb.worksheet_range("Index").unwrap();
    // First letter group anchors at the page-0 offset.
    assert_eq!(index.get_value((2, 0)).unwrap().to_string(), "D");
    assert_eq!(index.get_value((5, 0)).unwrap().to_string(), "Doe, Jane");
}
