//! keepup-scanner - image inventory for Kubernetes clusters
//!
//! Walks every namespace of a cluster, collects the container images used by
//! Deployments, StatefulSets and DaemonSets, matches them against a list of
//! detection rules and reports one normalized version per application and
//! namespace.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`detection`): Rules, images, versions and the aggregation logic
//! - **Application Layer** (`application`): The scan use case and its DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Kubernetes, filesystem, HTTP and console implementations
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use keepup_scanner::prelude::*;
//! use std::path::PathBuf;
//!
//! # async fn scan() -> Result<()> {
//! let rules = RuleStore::load(
//!     &FileSystemReader::new(),
//!     &PathBuf::from("keepup-detection.yaml"),
//! )?;
//! let source = KubeWorkloadSource::connect(None).await?;
//!
//! let use_case = ScanClusterUseCase::new(
//!     source.clone(),
//!     source,
//!     None::<ApiReportSink>,
//!     StderrProgressReporter::new(),
//! );
//!
//! let request = ScanRequest::new(rules, None);
//! let response = use_case.execute(request).await?;
//!
//! let output = JsonReportFormatter::new().format(&response.report)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod detection;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonReportFormatter, MarkdownReportFormatter};
    pub use crate::adapters::outbound::kubernetes::KubeWorkloadSource;
    pub use crate::adapters::outbound::network::ApiReportSink;
    pub use crate::application::dto::{DeliveryStatus, OutputFormat, ScanRequest, ScanResponse};
    pub use crate::application::use_cases::ScanClusterUseCase;
    pub use crate::detection::domain::{
        ClusterReport, DetectedComponent, DetectionRule, ImageReference, NormalizedVersion,
        RuleSet, WorkloadKind, WorkloadSpec,
    };
    pub use crate::detection::policies::{ClusterIdentity, VersionPrecedence};
    pub use crate::detection::services::{
        ImageCollector, NamespaceAggregator, RuleMatcher, RuleStore, VersionNormalizer,
    };
    pub use crate::ports::outbound::{
        ClusterMetadataSource, OutputPresenter, ProgressReporter, ReportFormatter, ReportSink,
        RuleReader, WorkloadSource,
    };
    pub use crate::shared::Result;
}
