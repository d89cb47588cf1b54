use std::collections::HashMap;

use rollbook_core::{Student, StudentKey, TeacherKey};

/// Result of matching one classroom's roster against the directory.
#[derive(Debug)]
pub struct ClassMatchOutput {
    /// The roster, element-for-element, with directory records substituted
    /// where an identity match existed. Same length as the input roster.
    pub students: Vec<Student>,
    /// How many roster slots received a directory record.
    pub substituted: usize,
    /// Directory records for this teacher that no roster slot consumed.
    pub leftovers: Vec<Student>,
}

/// Substitute directory records into roster slots by student identity.
///
/// The candidate pool is the subset of `directory` whose teacher identity
/// matches `teacher_key` and which no earlier classroom consumed
/// (`consumed` is shared across the whole run, so a directory record is
/// substituted at most once). Duplicate identities within the pool: last
/// write wins.
pub fn match_classroom(
    roster: &[Student],
    directory: &[Student],
    consumed: &mut [bool],
    teacher_key: &TeacherKey,
) -> ClassMatchOutput {
    let mut pool: HashMap<StudentKey, usize> = HashMap::new();
    for (i, record) in directory.iter().enumerate() {
        if consumed[i] {
            continue;
        }
        if record.teacher().key() == *teacher_key {
            pool.insert(record.key(), i);
        }
    }

    let mut students = Vec::with_capacity(roster.len());
    let mut substituted = 0;
    for provisional in roster {
        match pool.remove(&provisional.key()) {
            Some(i) => {
                consumed[i] = true;
                students.push(directory[i].clone());
                substituted += 1;
            }
            None => students.push(provisional.clone()),
        }
    }

    let mut leftovers: Vec<Student> = pool.into_values().map(|i| directory[i].clone()).collect();
    leftovers.sort();

    ClassMatchOutput { students, substituted, leftovers }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rollbook_core::{Grade, Guardian, NameCorrections, Teacher};

    fn teacher(name: &str, grade: &str) -> Teacher {
        Teacher::new(name, Grade::parse(grade).unwrap(), &NameCorrections::default())
    }

    fn provisional(name: &str, grade: &str, teacher_name: &str) -> Student {
        Student::new(name, Grade::parse(grade).unwrap(), teacher(teacher_name, grade))
    }

    fn contact(name: &str, grade: &str, teacher_name: &str) -> Student {
        let g = Guardian::new("DOE, PAT", "pat@example.com", None, None, None);
        Student::with_guardians(name, Grade::parse(grade).unwrap(), teacher(teacher_name, grade), vec![g])
    }

    #[test]
    fn matched_slot_takes_directory_record() {
        let roster = vec![provisional("DOE, JANE", "2", "SMITH")];
        let directory = vec![contact("DOE, JANE", "2", "Jane Smith")];
        let mut consumed = vec![false];

        let out = match_classroom(&roster, &directory, &mut consumed, &roster[0].teacher().key());
        assert_eq!(out.substituted, 1);
        assert_eq!(out.students.len(), 1);
        assert_eq!(out.students[0].guardians().len(), 1);
        assert!(out.leftovers.is_empty());
        assert!(consumed[0]);
    }

    #[test]
    fn unmatched_slot_keeps_provisional_record() {
        let roster = vec![provisional("DOE, JANE", "2", "SMITH")];
        let directory = vec![contact("ROE, RICK", "2", "Jane Smith")];
        let mut consumed = vec![false];

        let out = match_classroom(&roster, &directory, &mut consumed, &roster[0].teacher().key());
        assert_eq!(out.substituted, 0);
        assert!(out.students[0].guardians().is_empty());
        assert_eq!(out.leftovers.len(), 1);
        assert_eq!(out.leftovers[0].name(), "ROE, RICK");
        assert!(!consumed[0]);
    }

    #[test]
    fn other_teachers_records_stay_out_of_the_pool() {
        let roster = vec![provisional("DOE, JANE", "2", "SMITH")];
        let directory = vec![contact("DOE, JANE", "2", "Amy Jones")];
        let mut consumed = vec![false];

        let out = match_classroom(&roster, &directory, &mut consumed, &roster[0].teacher().key());
        assert_eq!(out.substituted, 0);
        // Not a leftover either: it belongs to Jones's pool.
        assert!(out.leftovers.is_empty());
    }

    #[test]
    fn consumed_records_are_not_offered_twice() {
        let roster = vec![provisional("DOE, JANE", "2", "SMITH")];
        let directory = vec![contact("DOE, JANE", "2", "Jane Smith")];
        let mut consumed = vec![true];

        let out = match_classroom(&roster, &directory, &mut consumed, &roster[0].teacher().key());
        assert_eq!(out.substituted, 0);
        assert!(out.leftovers.is_empty());
    }
}
