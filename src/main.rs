use std::ffi::{OsStr, OsString};
use std::io;
use std::process;

use clap::Parser;
use namefp::cmd::process as process_cmd;
use namefp::domain::error::ProcessError;
use serde::Serialize;
use serde_json::{Value, json};

const DEFAULT_PROGRAM: &str = "namefp";

#[derive(Debug, Parser)]
#[command(
    name = "namefp",
    about = "Deterministic DJB2 and byte-frequency fingerprint of a name",
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Cli {
    /// Name to fingerprint, taken verbatim.
    #[arg(
        value_name = "NAME",
        allow_hyphen_values = true,
        value_parser = clap::value_parser!(OsString)
    )]
    name: OsString,
}

#[derive(Serialize)]
struct CliError<'a> {
    error: &'a str,
    message: String,
    code: i32,
    details: Value,
}

fn main() {
    process::exit(run());
}

fn run() -> i32 {
    let args: Vec<OsString> = std::env::args_os().collect();
    let program = program_name(args.first().map(OsString::as_os_str));
    let cli = match parse_invocation(&args) {
        Some(cli) => cli,
        None => return handle_invalid_invocation(&program),
    };

    let stdout = io::stdout();
    let output = stdout.lock();
    match process_cmd::run(&name_bytes(&cli.name), output) {
        Ok(_) => 0,
        Err(error) => {
            emit_write_error("process", &error);
            1
        }
    }
}

/// Accept exactly one argument after the program name, whatever it looks like.
///
/// The count is checked on the raw arguments so an option terminator such as `--` is
/// counted like any other word; clap then sees the argument behind its own `--`.
fn parse_invocation(args: &[OsString]) -> Option<Cli> {
    let [program, name] = args else {
        return None;
    };
    Cli::try_parse_from([program.clone(), OsString::from("--"), name.clone()]).ok()
}

fn handle_invalid_invocation(program: &str) -> i32 {
    let stdout = io::stdout();
    if let Err(error) = process_cmd::write_usage(program, stdout.lock()) {
        emit_write_error("usage", &error);
    }
    1
}

fn program_name(arg0: Option<&OsStr>) -> String {
    arg0.map(|arg| arg.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_PROGRAM.to_string())
}

#[cfg(unix)]
fn name_bytes(name: &OsStr) -> Vec<u8> {
    use std::os::unix::ffi::OsStrExt;
    name.as_bytes().to_vec()
}

#[cfg(not(unix))]
fn name_bytes(name: &OsStr) -> Vec<u8> {
    name.to_string_lossy().into_owned().into_bytes()
}

fn emit_write_error(command: &'static str, error: &ProcessError) {
    emit_error(
        "internal_error",
        error.to_string(),
        json!({"command": command}),
        1,
    );
}

fn emit_error(error: &'static str, message: String, details: Value, code: i32) {
    let payload = CliError {
        error,
        message,
        code,
        details,
    };
    match serde_json::to_string(&payload) {
        Ok(serialized) => eprintln!("{serialized}"),
        Err(_) => eprintln!(
            "{{\"error\":\"internal_error\",\"message\":\"failed to serialize error\",\"code\":1}}"
        ),
    }
}
