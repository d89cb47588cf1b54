//! Alphabetical grouping of the reconciled population.
//!
//! Two-pass sort-then-chunk: one sort by the grouping letter, then a walk
//! producing contiguous runs, each run re-sorted by student ordering.
//! The iterator is single-pass; restarting means recomputing.

use rollbook_core::Student;

/// One letter's worth of index entries.
#[derive(Debug)]
pub struct LetterGroup {
    pub letter: char,
    pub students: Vec<Student>,
}

/// Group students by the first character of their recorded name.
///
/// The grouping key is case-folded so a stray lower-case source row still
/// lands in the letter it is displayed under. Groups come out in
/// character order; students within a group in (grade, name) order.
pub fn letter_groups(mut students: Vec<Student>) -> LetterGroups {
    students.sort_by_key(group_letter);
    LetterGroups {
        remaining: students.into_iter().peekable(),
    }
}

pub struct LetterGroups {
    remaining: std::iter::Peekable<std::vec::IntoIter<Student>>,
}

impl Iterator for LetterGroups {
    type Item = LetterGroup;

    fn next(&mut self) -> Option<LetterGroup> {
        let first = self.remaining.next()?;
        let letter = group_letter(&first);
        let mut students = vec![first];
        while let Some(next) = self.remaining.peek() {
            if group_letter(next) != letter {
                break;
            }
            students.push(self.remaining.next().unwrap());
        }
        students.sort();
        Some(LetterGroup { letter, students })
    }
}

fn group_letter(student: &Student) -> char {
    student
        .name()
        .chars()
        .next()
        .map(|c| c.to_ascii_uppercase())
        .unwrap_or('#')
}

#[cfg(test)]
mod tests {
    use super::*;
    use rollbook_core::{Grade, NameCorrections, Teacher};

    fn student(name: &str, grade: &str) -> Student {
        let g = Grade::parse(grade).unwrap();
        Student::new(name, g, Teacher::new("SMITH", g, &NameCorrections::default()))
    }

    #[test]
    fn groups_come_out_in_letter_order() {
        let groups: Vec<LetterGroup> = letter_groups(vec![
            student("ZIMMER, AMY", "1"),
            student("ADLER, BEN", "2"),
            student("MOSS, CARL", "K"),
        ])
        .collect();
        let letters: Vec<char> = groups.iter().map(|g| g.letter).collect();
        assert_eq!(letters, ['A', 'M', 'Z']);
    }

    #[test]
    fn case_folded_grouping_key() {
        let groups: Vec<LetterGroup> = letter_groups(vec![
            student("adler, amy", "1"),
            student("ADLER, BEN", "2"),
        ])
        .collect();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].letter, 'A');
        assert_eq!(groups[0].students.len(), 2);
    }

    #[test]
    fn students_within_a_group_sorted_by_grade_then_name() {
        let groups: Vec<LetterGroup> = letter_groups(vec![
            student("ADLER, BEN", "2"),
            student("ABBOT, ZOE", "2"),
            student("AMES, CAL", "K"),
        ])
        .collect();
        let names: Vec<&str> = groups[0].students.iter().map(Student::name).collect();
        // Kindergarten sorts ahead of grade 2.
        assert_eq!(names, ["AMES, CAL", "ABBOT, ZOE", "ADLER, BEN"]);
    }

    #[test]
    fn empty_input_yields_no_groups() {
        assert_eq!(letter_groups(Vec::new()).count(), 0);
    }
}
