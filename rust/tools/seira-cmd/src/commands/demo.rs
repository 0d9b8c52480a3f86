//! Demo command implementation
//!
//! Walks the sequence containers through their paces: sized construction,
//! element mutation, deep copies, whole-value assignment and rendering.

use std::io::{self, Write};

use seira_common::Result;
use seira_sequence::byte_sequence::ByteSequence;
use seira_sequence::fixed_sequence::FixedSequence;
use seira_sequence::printer;

pub fn run() -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_demo(&mut out)
}

fn write_demo(out: &mut impl Write) -> Result<()> {
    let mut values = FixedSequence::<f64>::with_len(4)?;
    for (i, slot) in values.iter_mut().enumerate() {
        *slot = i as f64 * 1.5;
    }
    write!(out, "values: ")?;
    printer::render(out, &values, ", ")?;
    writeln!(out)?;

    let mut copy = values.try_clone()?;
    copy.iter_mut().for_each(|v| *v *= 2.0);
    write!(out, "doubled copy: ")?;
    printer::render(out, &copy, ", ")?;
    writeln!(out)?;
    write!(out, "original after copy: ")?;
    printer::render(out, &values, ", ")?;
    writeln!(out)?;

    values.assign(&copy);
    write!(out, "after assign: ")?;
    printer::render(out, &values, ", ")?;
    writeln!(out)?;

    let greeting = ByteSequence::from_c_str(c"Hello world")?;
    write!(out, "greeting: ")?;
    printer::render(out, &greeting, "")?;
    writeln!(out)?;

    let total: f64 = values.iter().sum();
    writeln!(out, "sum: {total}")?;
    Ok(())
}
