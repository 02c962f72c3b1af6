use std::process::ExitCode;

/// What a subcommand wants printed, and the exit code to finish with.
#[derive(Debug)]
pub(crate) struct CommandResult {
    pub exit_code: ExitCode,
    pub stderr: Option<String>,
    pub stdout: Option<String>,
}

impl CommandResult {
    /// A failed run whose message goes to stderr.
    pub fn stderr(fmt_args: std::fmt::Arguments<'_>) -> Self {
        Self {
            exit_code: ExitCode::FAILURE,
            stderr: Some(fmt_args.to_string()),
            stdout: None,
        }
    }

    /// A successful run. The catalogue JSON or the write summary goes to
    /// stdout.
    pub fn stdout(fmt_args: std::fmt::Arguments<'_>) -> Self {
        Self {
            exit_code: ExitCode::SUCCESS,
            stderr: None,
            stdout: Some(fmt_args.to_string()),
        }
    }
}
