//! Render command implementation

use std::ffi::CString;
use std::io::{self, Write};

use seira_common::{Result, error::Error};
use seira_sequence::byte_sequence::ByteSequence;
use seira_sequence::printer;

pub fn run(text: String, separator: String) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_rendered(&mut out, &text, &separator)
}

fn write_rendered(out: &mut impl Write, text: &str, separator: &str) -> Result<()> {
    let source = CString::new(text).map_err(|e| Error::invalid_arg("text", e.to_string()))?;
    let sequence = ByteSequence::from_c_str(&source)?;
    printer::render(out, &sequence, separator)?;
    out.write_all(b"\n")?;
    Ok(())
}
