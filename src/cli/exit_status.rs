use std::process::ExitCode;

/// Exit status for CLI commands, following common conventions for checker
/// tools.
///
/// - `Success` (0): Command completed, nothing wrong
/// - `Failure` (1): Command completed but found problems (issues, lookup miss)
/// - `Error` (2): Command failed outright (unreadable file, bad JSON, IO error)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed, nothing wrong.
    Success,
    /// Command completed but found problems.
    Failure,
    /// Command failed outright.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
