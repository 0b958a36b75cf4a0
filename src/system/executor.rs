// src/system/executor.rs

//! Running external tools.

use std::process::{Command as StdCommand, Stdio};
use thiserror::Error;

/// Failure to run an external tool.
#[derive(Error, Debug)]
pub enum ExecutionError {
    /// The process could not be spawned.
    #[error("Command '{0}' could not be executed: {1}")]
    CommandFailed(String, #[source] std::io::Error),
    /// The process ran and exited unsuccessfully.
    #[error("Command '{command}' exited with a non-zero error code.")]
    NonZeroExitStatus {
        /// The command line, for messages.
        command: String,
        /// Combined stdout and stderr of the failed command.
        output: Vec<u8>,
    },
}

impl ExecutionError {
    /// Raw output captured before the failure, if the command ran at all.
    pub fn output(&self) -> Option<&[u8]> {
        match self {
            Self::NonZeroExitStatus { output, .. } => Some(output),
            Self::CommandFailed(..) => None,
        }
    }
}

/// Runs an external program and hands back its combined output.
///
/// This is the only seam through which the crate touches `bash`, `reg` or
/// `setx`, so tests can substitute a recording implementation.
pub trait CommandRunner {
    /// Runs `program` with `args` to completion. Failures are never retried.
    ///
    /// # Errors
    /// `CommandFailed` if the process cannot be spawned, `NonZeroExitStatus`
    /// if it exits unsuccessfully.
    fn run(&self, program: &str, args: &[String]) -> Result<Vec<u8>, ExecutionError>;
}

/// [`CommandRunner`] backed by real processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<Vec<u8>, ExecutionError> {
        let command_line = display_command(program, args);
        log::debug!("Running: {}", command_line);

        let command_output = StdCommand::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| ExecutionError::CommandFailed(command_line.clone(), e))?;

        let mut output = command_output.stdout;
        output.extend_from_slice(&command_output.stderr);

        if !command_output.status.success() {
            log::warn!(
                "Command '{}' exited with code: {:?}",
                command_line,
                command_output.status.code()
            );
            return Err(ExecutionError::NonZeroExitStatus {
                command: command_line,
                output,
            });
        }
        Ok(output)
    }
}

/// Renders a command for logs and error messages.
fn display_command(program: &str, args: &[String]) -> String {
    let mut line = program.to_string();
    for arg in args {
        line.push(' ');
        line.push_str(arg);
    }
    line
}
