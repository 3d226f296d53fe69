//! Format a date from the command line

use anyhow::Result;
use std::io::Write;

use crate::helpers::format_date;

/// Print a date the way pages render it
pub fn run<W: Write>(input: &str, include_relative: bool, out: &mut W) -> Result<()> {
    writeln!(out, "{}", format_date(input, include_relative)?)?;
    Ok(())
}
