//! Flat CSV export of the reconciled directory, for downstream tooling.

use std::io::Write;

use rollbook_core::Classroom;

use crate::error::IoError;

const HEADER: [&str; 11] = [
    "class",
    "room",
    "grade",
    "student",
    "guardian1",
    "guardian1_email",
    "guardian1_phone",
    "guardian2",
    "guardian2_email",
    "guardian2_phone",
    "address",
];

/// One row per student. Returns the number of data rows written.
pub fn export_csv<W: Write>(classrooms: &[Classroom], writer: W) -> Result<usize, IoError> {
    let mut out = csv::Writer::from_writer(writer);
    out.write_record(HEADER)?;

    let mut rows = 0;
    for classroom in classrooms {
        for student in &classroom.students {
            let guardians = student.guardians();
            let g1 = guardians.first();
            let g2 = guardians.get(1);
            out.write_record([
                classroom.teacher.display_name().to_string(),
                classroom.room.clone(),
                classroom.grade.label(),
                student.display_name().to_string(),
                g1.map(|g| g.display_name()).unwrap_or_default(),
                g1.map(|g| g.email().to_string()).unwrap_or_default(),
                g1.and_then(|g| g.phone()).unwrap_or_default().to_string(),
                g2.map(|g| g.display_name()).unwrap_or_default(),
                g2.map(|g| g.email().to_string()).unwrap_or_default(),
                g2.and_then(|g| g.phone()).unwrap_or_default().to_string(),
                student.address().unwrap_or_default().to_string(),
            ])?;
            rows += 1;
        }
    }

    out.flush().map_err(|e| IoError::Write(e.to_string()))?;
    Ok(rows)
}
