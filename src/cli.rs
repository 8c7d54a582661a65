use clap::Parser;
use std::path::PathBuf;

use crate::application::dto::OutputFormat;

/// Default location of the detection rules document
pub const DEFAULT_RULES_FILE: &str = "./keepup-detection.yaml";

/// Detect known applications and their versions from cluster workload images
#[derive(Parser, Debug)]
#[command(name = "keepup-scanner")]
#[command(version)]
#[command(
    about = "Detect known applications and their versions from cluster workload images",
    long_about = None
)]
pub struct Args {
    /// Path to the detection rules YAML document
    #[arg(long, env = "RULES_FILE", default_value = DEFAULT_RULES_FILE)]
    pub rules_file: PathBuf,

    /// Inventory API endpoint the report is uploaded to
    #[arg(long, env = "API_URL")]
    pub api_url: Option<String>,

    /// Token sent in the x-api-token header
    #[arg(long, env = "API_TOKEN", hide_env_values = true)]
    pub api_token: Option<String>,

    /// Cluster name to report instead of the platform-provided one
    #[arg(long, env = "CLUSTER_NAME")]
    pub cluster_name: Option<String>,

    /// Explicit kubeconfig file (defaults to in-cluster or KUBECONFIG inference)
    #[arg(long, value_name = "PATH")]
    pub kubeconfig: Option<PathBuf>,

    /// Local output format: json or markdown
    #[arg(short, long, default_value = "json")]
    pub format: OutputFormat,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Do not upload the report even if the API is configured
    #[arg(long)]
    pub no_upload: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::try_parse_from(["keepup-scanner"]).unwrap();
        assert_eq!(args.format, OutputFormat::Json);
        assert!(args.output.is_none());
        assert!(args.kubeconfig.is_none());
        assert!(!args.no_upload);
    }

    #[test]
    fn test_args_all_flags() {
        let args = Args::try_parse_from([
            "keepup-scanner",
            "--rules-file",
            "/etc/keepup/rules.yaml",
            "--api-url",
            "https://inventory.example.com/clusters",
            "--api-token",
            "secret",
            "--cluster-name",
            "prod-eu",
            "--kubeconfig",
            "/tmp/kubeconfig",
            "-f",
            "md",
            "-o",
            "report.md",
            "--no-upload",
        ])
        .unwrap();

        assert_eq!(args.rules_file, PathBuf::from("/etc/keepup/rules.yaml"));
        assert_eq!(
            args.api_url.as_deref(),
            Some("https://inventory.example.com/clusters")
        );
        assert_eq!(args.api_token.as_deref(), Some("secret"));
        assert_eq!(args.cluster_name.as_deref(), Some("prod-eu"));
        assert_eq!(args.kubeconfig, Some(PathBuf::from("/tmp/kubeconfig")));
        assert_eq!(args.format, OutputFormat::Markdown);
        assert_eq!(args.output, Some(PathBuf::from("report.md")));
        assert!(args.no_upload);
    }

    #[test]
    fn test_args_invalid_format() {
        let result = Args::try_parse_from(["keepup-scanner", "--format", "yaml"]);
        let error = result.unwrap_err();
        assert_eq!(error.kind(), clap::error::ErrorKind::ValueValidation);
    }
}
