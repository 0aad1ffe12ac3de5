// src/exec/command.rs

//! Synchronous shell command execution with combined output capture.

use std::io::{self, Read, Write};
use std::process::Command;

use thiserror::Error;
use tracing::{debug, info};

/// Width of the `=` line printed above and below captured output.
pub const SEPARATOR_WIDTH: usize = 80;

/// Why a command execution failed.
#[derive(Error, Debug)]
pub enum ExecError {
    #[error("spawning `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("capturing output of `{command}`: {source}")]
    Io {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("`{command}` {}", describe_exit(*.code))]
    Failed { command: String, code: Option<i32> },

    #[error("executor task for `{command}` did not complete: {reason}")]
    Aborted { command: String, reason: String },
}

impl ExecError {
    /// Exit code of the child process, when it ran and exited normally.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            ExecError::Failed { code, .. } => *code,
            _ => None,
        }
    }
}

fn describe_exit(code: Option<i32>) -> String {
    match code {
        Some(code) => format!("exited with status {code}"),
        None => "was terminated by a signal".to_string(),
    }
}

/// The `=` separator line, without trailing newline.
pub fn separator() -> String {
    "=".repeat(SEPARATOR_WIDTH)
}

/// Build a shell command appropriate for the platform.
fn shell_command(command: &str) -> Command {
    if cfg!(windows) {
        let mut c = Command::new("cmd");
        c.arg("/C").arg(command);
        c
    } else {
        let mut c = Command::new("sh");
        c.arg("-c").arg(command);
        c
    }
}

/// Run `command` through the shell, blocking until it exits.
///
/// Stdout and stderr share one pipe, so the returned buffer holds both
/// streams interleaved in the order the child wrote them. The buffer is
/// only returned when the command exits with status zero.
pub fn run_captured(command: &str) -> Result<Vec<u8>, ExecError> {
    let io_err = |source| ExecError::Io {
        command: command.to_string(),
        source,
    };

    let (mut reader, writer) = io::pipe().map_err(io_err)?;
    let writer_err = writer.try_clone().map_err(io_err)?;

    debug!(command, "spawning shell process");

    let mut child = {
        let mut cmd = shell_command(command);
        cmd.stdin(std::process::Stdio::null())
            .stdout(writer)
            .stderr(writer_err);
        cmd.spawn().map_err(|source| ExecError::Spawn {
            command: command.to_string(),
            source,
        })?
        // `cmd` drops here, closing our copies of the write end so the
        // read below sees EOF once the child exits.
    };

    let mut output = Vec::new();
    let read_res = reader.read_to_end(&mut output);
    let status = child.wait().map_err(io_err)?;
    read_res.map_err(io_err)?;

    info!(
        command,
        exit_code = status.code(),
        success = status.success(),
        "command exited"
    );

    if status.success() {
        Ok(output)
    } else {
        Err(ExecError::Failed {
            command: command.to_string(),
            code: status.code(),
        })
    }
}

/// Write captured output framed above and below by separator lines.
pub fn write_framed<W: Write + ?Sized>(out: &mut W, output: &[u8]) -> io::Result<()> {
    let line = separator();
    writeln!(out, "{line}")?;
    out.write_all(output)?;
    writeln!(out, "{line}")?;
    out.flush()
}
