use rollbook_core::{Classroom, Student};

use crate::matcher::match_classroom;
use crate::report::{ReconMeta, ReconOutcome, ReconSummary, Unmatched};

/// Merge classrooms against the directory population.
///
/// Per classroom: substitute directory records into roster slots by
/// student identity (teacher pools are derived by loose teacher identity),
/// re-sort by student ordering, and adopt the full teacher name carried by
/// the first sorted student — the directory is authoritative for teacher
/// names, the class list only records surnames. Roster membership itself
/// never changes: no slot is added or removed, only substituted.
///
/// Reconciliation never fails. Unconsumed directory records land in the
/// outcome's `unmatched` list for the caller to report.
pub fn reconcile(classrooms: Vec<Classroom>, directory: &[Student]) -> ReconOutcome {
    let mut consumed = vec![false; directory.len()];
    let mut merged = Vec::with_capacity(classrooms.len());
    let mut unmatched = Vec::new();
    let mut students_total = 0;
    let mut substituted_total = 0;

    for classroom in classrooms {
        let out = match_classroom(
            &classroom.students,
            directory,
            &mut consumed,
            &classroom.teacher.key(),
        );

        let mut students = out.students;
        students.sort();

        // An empty classroom keeps its class-list teacher.
        let teacher = students
            .first()
            .map(|s| s.teacher().clone())
            .unwrap_or_else(|| classroom.teacher.clone());

        unmatched.extend(out.leftovers.into_iter().map(|student| Unmatched {
            teacher: teacher.display_name().to_string(),
            student,
        }));

        students_total += students.len();
        substituted_total += out.substituted;

        merged.push(Classroom {
            teacher,
            grade: classroom.grade,
            room: classroom.room,
            students,
        });
    }

    let summary = ReconSummary {
        classrooms: merged.len(),
        students: students_total,
        substituted: substituted_total,
        roster_only: students_total - substituted_total,
        unmatched: unmatched.len(),
    };

    ReconOutcome {
        meta: ReconMeta::now(),
        summary,
        classrooms: merged,
        unmatched,
    }
}
