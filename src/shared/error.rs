use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// A failed report delivery is not an error from the scanner's point of view,
/// so a run that could not upload still exits with `Success`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// The scan completed and the report was produced
    Success = 0,
    /// Configuration, rule loading or cluster access failed
    ApplicationError = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ApplicationError => write!(f, "Application Error (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Which of a rule's two patterns failed to compile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
    Detection,
    Version,
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternKind::Detection => write!(f, "detection"),
            PatternKind::Version => write!(f, "version"),
        }
    }
}

/// Application-specific errors for a cluster scan.
///
/// Everything except `DeliveryFailed` aborts the run before a report is emitted.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Failed to read detection rules: {path}\nDetails: {details}\n\n💡 Hint: Set RULES_FILE or --rules-file to a readable YAML file")]
    ConfigReadError { path: PathBuf, details: String },

    #[error("Failed to parse detection rules: {path}\nDetails: {details}\n\n💡 Hint: The file must contain a 'docker' list of {{applicationName, detectionRegex, versionRegex}} entries")]
    ConfigParseError { path: PathBuf, details: String },

    #[error("Invalid {kind} regex for application '{application}': {details}")]
    InvalidPattern {
        application: String,
        kind: PatternKind,
        details: String,
    },

    #[error("Invalid setting {setting}: {reason}")]
    InvalidSetting { setting: &'static str, reason: String },

    #[error("Workload source failed while trying to {operation}\nDetails: {details}\n\n💡 Hint: Check the kubeconfig or the service account permissions")]
    WorkloadSourceError { operation: String, details: String },

    #[error("Report delivery failed: {details}")]
    DeliveryFailed { details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },
}
