//! Fixed-width table output for student listings

use std::io::{self, Write};

use crate::student::Student;

const ROLL_WIDTH: usize = 10;
const NAME_WIDTH: usize = 22;
const GRADE_WIDTH: usize = 8;
const AGE_WIDTH: usize = 6;

fn row(roll: &str, name: &str, grade: &str, age: &str) -> String {
    let line = format!(
        "{:<rw$}{:<nw$}{:<gw$}{:<aw$}",
        roll,
        name,
        grade,
        age,
        rw = ROLL_WIDTH,
        nw = NAME_WIDTH,
        gw = GRADE_WIDTH,
        aw = AGE_WIDTH
    );
    line.trim_end().to_string()
}

/// Write a header followed by one line per student
pub fn write_table<'a, W: Write>(
    out: &mut W,
    students: impl IntoIterator<Item = &'a Student>,
) -> io::Result<()> {
    writeln!(out, "{}", row("Roll", "Name", "Grade", "Age"))?;
    writeln!(
        out,
        "{}",
        "-".repeat(ROLL_WIDTH + NAME_WIDTH + GRADE_WIDTH + AGE_WIDTH)
    )?;
    for s in students {
        writeln!(out, "{}", row(&s.roll, &s.name, &s.grade, &s.age))?;
    }
    Ok(())
}
