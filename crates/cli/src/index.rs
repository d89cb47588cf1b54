//! `rollbook index` — the alphabetical student index as console text.

use std::path::PathBuf;

use rollbook_core::Student;
use rollbook_layout::letter_groups;

use crate::config::RunConfig;
use crate::pipeline;
use crate::CliError;

pub fn cmd_index(
    class_list: PathBuf,
    directory: Vec<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<(), CliError> {
    let config = RunConfig::load(config_path.as_deref())?;
    let run = pipeline::run(&class_list, &directory, &config)?;
    pipeline::print_warnings(&run);

    let everyone: Vec<Student> = run
        .outcome
        .classrooms
        .iter()
        .flat_map(|c| c.students.iter().cloned())
        .collect();
    let total = everyone.len();

    for group in letter_groups(everyone) {
        println!("{}:", group.letter);
        for student in &group.students {
            println!(
                "  {:<30} {} {}",
                student.index_name(),
                student.grade(),
                student.teacher().last_name_display(),
            );
        }
        println!();
    }
    println!("{total} students");

    Ok(())
}
