use std::process::ExitCode;

/// Process exit status of a glossa command.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitStatus {
    /// The command did its work, even if no term needed translating.
    Success = 0,
    /// The command declined to act, e.g. `init` with a config already present.
    Failure = 1,
    /// A run was aborted: unreadable source, malformed cache, or a
    /// translation service error.
    Error = 2,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status as u8)
    }
}
