use std::process::ExitCode;

use super::run::RunOutcome;

/// Exit status of the `resgen` binary.
///
/// `Failure` means outputs were written but an error issue was reported,
/// e.g. the requested comment language does not exist. `Error` means
/// nothing usable was produced (usage, configuration or I/O error).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl ExitStatus {
    /// Status for a completed run. Warnings alone still succeed.
    pub fn of(outcome: &RunOutcome) -> Self {
        match outcome {
            RunOutcome::Generated(report) if report.error_count() > 0 => ExitStatus::Failure,
            _ => ExitStatus::Success,
        }
    }

    pub fn code(self) -> u8 {
        self as u8
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status.code())
    }
}
