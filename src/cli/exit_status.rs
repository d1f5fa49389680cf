use std::process::ExitCode;

/// Process exit status of a glean run.
///
/// - `Success` (0): nothing at error severity (warnings are allowed)
/// - `Failure` (1): malformed literals or unreadable files were reported
/// - `Error` (2): the run itself failed (bad config, unwritable output, broken `.po`)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl ExitStatus {
    pub fn from_error_count(error_count: usize) -> Self {
        if error_count > 0 {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
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
