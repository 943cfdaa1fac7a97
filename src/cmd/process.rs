use std::io::Write;

use crate::domain::error::ProcessError;
use crate::engine::fingerprint::{Fingerprint, compute_fingerprint};

pub const BANNER: &str = "=== CPU Instruction Tracing for Name Processing ===";

/// Execute `process` for one name, writing the diagnostic lines to `output`.
///
/// Name bytes are written as-is so non-UTF-8 input round-trips to the terminal unchanged.
pub fn run<W: Write>(name: &[u8], mut output: W) -> Result<Fingerprint, ProcessError> {
    writeln!(output, "{BANNER}")?;
    write_name_line(&mut output, b"Name to process: ", name, b"")?;
    writeln!(output, "Starting processing...")?;
    write_name_line(&mut output, b"Processing name: ", name, b"")?;

    let fingerprint = compute_fingerprint(name);

    let summary = format!(
        ", Length: {}, Hash: {}, Result: {}",
        fingerprint.length, fingerprint.hash, fingerprint.result
    );
    write_name_line(&mut output, b"Name: ", name, summary.as_bytes())?;
    writeln!(output, "Processing complete. Result: {}", fingerprint.result)?;
    output.flush()?;

    Ok(fingerprint)
}

/// Write the usage message shown for a malformed invocation.
pub fn write_usage<W: Write>(program: &str, mut output: W) -> Result<(), ProcessError> {
    writeln!(output, "Usage: {program} <name>")?;
    writeln!(output, "Example: {program} \"John\"")?;
    output.flush()?;
    Ok(())
}

fn write_name_line<W: Write>(
    output: &mut W,
    prefix: &[u8],
    name: &[u8],
    suffix: &[u8],
) -> Result<(), ProcessError> {
    output.write_all(prefix)?;
    output.write_all(name)?;
    output.write_all(suffix)?;
    output.write_all(b"\n")?;
    Ok(())
}
