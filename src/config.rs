//! Runtime settings for a scan.
//!
//! Turns parsed command-line arguments (with their environment fallbacks)
//! into a validated `ScannerConfig`. Every check runs before the cluster is
//! contacted. Outside managed environments the process environment is first
//! seeded from a `.env` file.

use anyhow::Context;
use std::path::{Path, PathBuf};

use crate::application::dto::OutputFormat;
use crate::cli::Args;
use crate::shared::error::ScanError;
use crate::shared::Result;

/// Marks a managed environment; when present, no `.env` file is read
pub const APP_ENV: &str = "APP_ENV";

/// Seeds the process environment from a dotenv file.
///
/// Skipped when `APP_ENV` is set. A missing file is not an error. Variables
/// already present in the environment are never overridden, so explicit
/// environment settings win over the file. Returns whether a file was loaded.
pub fn load_env_file(path: &Path) -> Result<bool> {
    if std::env::var_os(APP_ENV).is_some() {
        log::debug!("{} is set; not reading {}", APP_ENV, path.display());
        return Ok(false);
    }

    match dotenvy::from_path(path) {
        Ok(()) => {
            log::debug!("Loaded settings from {}", path.display());
            Ok(true)
        }
        Err(e) if e.not_found() => {
            log::debug!("No {} file; using the process environment", path.display());
            Ok(false)
        }
        Err(e) => {
            Err(e).with_context(|| format!("Failed to load settings from {}", path.display()))
        }
    }
}

/// Where and how the report is uploaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkSettings {
    pub url: String,
    pub token: String,
}

/// Validated scanner configuration.
#[derive(Debug, Clone)]
pub struct ScannerConfig {
    pub rules_path: PathBuf,
    pub cluster_name: Option<String>,
    pub kubeconfig: Option<PathBuf>,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    sink: Option<SinkSettings>,
    no_upload: bool,
}

impl ScannerConfig {
    pub fn from_args(args: &Args) -> Result<Self> {
        if args.rules_file.as_os_str().is_empty() {
            return Err(ScanError::InvalidSetting {
                setting: "RULES_FILE",
                reason: "path must not be empty".to_string(),
            }
            .into());
        }

        let sink = resolve_sink(args.api_url.as_deref(), args.api_token.as_deref())?;

        Ok(Self {
            rules_path: args.rules_file.clone(),
            cluster_name: non_blank(args.cluster_name.as_deref()),
            kubeconfig: args.kubeconfig.clone(),
            format: args.format,
            output: args.output.clone(),
            sink,
            no_upload: args.no_upload,
        })
    }

    /// Upload settings, or `None` when uploading is not configured or disabled
    pub fn sink_settings(&self) -> Option<&SinkSettings> {
        if self.no_upload {
            return None;
        }
        self.sink.as_ref()
    }

    /// True when the API is configured but `--no-upload` suppresses it
    pub fn upload_suppressed(&self) -> bool {
        self.no_upload && self.sink.is_some()
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn resolve_sink(url: Option<&str>, token: Option<&str>) -> Result<Option<SinkSettings>> {
    match (non_blank(url), non_blank(token)) {
        (None, None) => Ok(None),
        (Some(_), None) => Err(ScanError::InvalidSetting {
            setting: "API_TOKEN",
            reason: "must be set when API_URL is set".to_string(),
        }
        .into()),
        (None, Some(_)) => Err(ScanError::InvalidSetting {
            setting: "API_URL",
            reason: "must be set when API_TOKEN is set".to_string(),
        }
        .into()),
        (Some(url), Some(token)) => {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ScanError::InvalidSetting {
                    setting: "API_URL",
                    reason: format!("'{}' is not an absolute http(s) URL", url),
                }
                .into());
            }
            Ok(Some(SinkSettings { url, token }))
        }
    }
}
