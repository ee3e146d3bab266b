//! Shell command execution.

use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

/// Shell used to run command lines.
pub const DEFAULT_SHELL: &str = "/bin/sh";

/// What to do with a child's stdout and stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputHandling {
    /// Send output to /dev/null.
    #[default]
    Discard,
    /// Let output through to the terminal.
    Inherit,
    /// Collect output into the result.
    Capture,
}

/// Result of executing a shell command.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output, when captured.
    pub stdout: String,

    /// Standard error, when captured.
    pub stderr: String,
}

impl CommandResult {
    /// Create a result with only an exit code.
    pub fn exited(code: i32) -> Self {
        Self {
            exit_code: Some(code),
            ..Default::default()
        }
    }

    /// Whether the command exited with status 0.
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Runs shell command lines.
///
/// The activation verifier depends only on this trait so tests can
/// substitute scripted exit codes.
#[async_trait(?Send)]
pub trait ProcessExecutor {
    /// Run `command_line` and wait for it to exit.
    ///
    /// Returns an error only when the process could not be started.
    async fn run(
        &self,
        command_line: &str,
        output: OutputHandling,
    ) -> std::io::Result<CommandResult>;
}

/// Executes command lines with `<shell> -c`.
#[derive(Debug, Clone)]
pub struct ShellExecutor {
    shell: String,
}

impl ShellExecutor {
    pub fn new() -> Self {
        Self::with_shell(DEFAULT_SHELL)
    }

    pub fn with_shell(shell: impl Into<String>) -> Self {
        Self {
            shell: shell.into(),
        }
    }
}

impl Default for ShellExecutor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl ProcessExecutor for ShellExecutor {
    async fn run(
        &self,
        command_line: &str,
        output: OutputHandling,
    ) -> std::io::Result<CommandResult> {
        tracing::debug!("Running `{}` with {}", command_line, self.shell);

        let mut cmd = Command::new(&self.shell);
        cmd.arg("-c").arg(command_line).stdin(Stdio::inherit());

        match output {
            OutputHandling::Discard => {
                let status = cmd.stdout(Stdio::null()).stderr(Stdio::null()).status().await?;
                Ok(CommandResult {
                    exit_code: status.code(),
                    ..Default::default()
                })
            }
            OutputHandling::Inherit => {
                let status = cmd
                    .stdout(Stdio::inherit())
                    .stderr(Stdio::inherit())
                    .status()
                    .await?;
                Ok(CommandResult {
                    exit_code: status.code(),
                    ..Default::default()
                })
            }
            OutputHandling::Capture => {
                let out = cmd.output().await?;
                Ok(CommandResult {
                    exit_code: out.status.code(),
                    stdout: String::from_utf8_lossy(&out.stdout).to_string(),
                    stderr: String::from_utf8_lossy(&out.stderr).to_string(),
                })
            }
        }
    }
}
