use crate::application::dto::{DeliveryStatus, ScanRequest, ScanResponse};
use crate::detection::domain::{ClusterReport, RuleSet, WorkloadKind, WorkloadSpec};
use crate::detection::policies::ClusterIdentity;
use crate::detection::services::{ImageCollector, NamespaceAggregator, RuleMatcher, VersionNormalizer};
use crate::ports::outbound::{ClusterMetadataSource, ProgressReporter, ReportSink, WorkloadSource};
use crate::shared::Result;

/// ScanClusterUseCase - Core use case for the image inventory
///
/// Walks every namespace with an already loaded rule set, reduces the
/// container images found there to (application, version) pairs and hands
/// the final report to the optional report sink. Rules are loaded by the
/// caller through `RuleStore`.
///
/// # Type Parameters
/// * `WS` - WorkloadSource implementation
/// * `CM` - ClusterMetadataSource implementation
/// * `RS` - ReportSink implementation (optional)
/// * `PR` - ProgressReporter implementation
pub struct ScanClusterUseCase<WS, CM, RS, PR> {
    workload_source: WS,
    cluster_metadata: CM,
    report_sink: Option<RS>,
    progress_reporter: PR,
}

/// Per-namespace result: the aggregated detections and the image count
type NamespaceScan = (NamespaceAggregator, usize);

impl<WS, CM, RS, PR> ScanClusterUseCase<WS, CM, RS, PR>
where
    WS: WorkloadSource,
    CM: ClusterMetadataSource,
    RS: ReportSink,
    PR: ProgressReporter,
{
    /// Creates a new ScanClusterUseCase with injected dependencies
    pub fn new(
        workload_source: WS,
        cluster_metadata: CM,
        report_sink: Option<RS>,
        progress_reporter: PR,
    ) -> Self {
        Self {
            workload_source,
            cluster_metadata,
            report_sink,
            progress_reporter,
        }
    }

    /// Executes one full scan
    ///
    /// # Errors
    /// Workload listing failures abort the run. A failed delivery does not;
    /// it is reported through `ScanResponse::delivery`.
    pub async fn execute(&self, request: ScanRequest) -> Result<ScanResponse> {
        // Step 1: Check the rule set
        let rules = &request.rules;
        self.report_rules(rules);

        // Step 2: Enumerate namespaces
        let namespaces = self.workload_source.list_namespaces().await?;
        self.progress_reporter
            .report(&format!("🔍 Scanning {} namespace(s)", namespaces.len()));

        // Step 3: Collect, match and aggregate per namespace
        let mut aggregator = NamespaceAggregator::new();
        let mut images_scanned = 0;
        for (index, namespace) in namespaces.iter().enumerate() {
            self.progress_reporter
                .report_progress(index + 1, namespaces.len(), Some(namespace));
            let (scanned, count) = self.scan_namespace(namespace, rules).await?;
            aggregator = aggregator.merge(scanned);
            images_scanned += count;
        }
        self.progress_reporter.report_completion(&format!(
            "✅ Detected {} component(s) in {} image(s)",
            aggregator.len(),
            images_scanned
        ));

        let dropped_without_version = aggregator.without_version();
        if dropped_without_version > 0 {
            log::info!(
                "{} matched image(s) carried no extractable version and were skipped",
                dropped_without_version
            );
        }

        // Step 4: Resolve cluster identity
        let (cluster_name, kube_version) = self.resolve_identity(&request).await;

        // Step 5: Build the report
        let report = aggregator.into_report(&cluster_name, &kube_version);

        // Step 6: Deliver if a sink is configured
        let delivery = self.deliver(&report).await;

        Ok(ScanResponse::new(
            report,
            delivery,
            images_scanned,
            dropped_without_version,
        ))
    }

    fn report_rules(&self, rules: &RuleSet) {
        if rules.is_empty() {
            self.progress_reporter.report_error(
                "⚠️  Warning: The rules file defines no applications. The report will be empty.",
            );
        } else {
            self.progress_reporter
                .report(&format!("✅ Using {} detection rule(s)", rules.len()));
        }
    }

    async fn scan_namespace(&self, namespace: &str, rules: &RuleSet) -> Result<NamespaceScan> {
        let mut workloads: Vec<WorkloadSpec> = Vec::new();
        for kind in WorkloadKind::ALL {
            workloads.extend(self.workload_source.list_workloads(kind, namespace).await?);
        }

        let images = ImageCollector::collect(namespace, &workloads);
        let mut aggregator = NamespaceAggregator::new();

        for image in images.sorted() {
            let Some(rule) = RuleMatcher::first_match(image, rules) else {
                continue;
            };
            let version = VersionNormalizer::extract(rule, image);
            log::debug!(
                "{}: image '{}' matched '{}' (version: {})",
                namespace,
                image,
                rule.application_name(),
                version
                    .as_ref()
                    .map(ToString::to_string)
                    .unwrap_or_else(|| "none".to_string())
            );
            aggregator.record(namespace, rule.application_name(), version);
        }

        Ok((aggregator, images.len()))
    }

    async fn resolve_identity(&self, request: &ScanRequest) -> (String, String) {
        let platform_name = match request.cluster_name.as_deref() {
            Some(name) if !name.trim().is_empty() => None,
            _ => match self.cluster_metadata.cluster_name().await {
                Ok(name) => name,
                Err(e) => {
                    log::warn!("Could not determine cluster name: {:#}", e);
                    None
                }
            },
        };

        let platform_version = match self.cluster_metadata.kube_version().await {
            Ok(version) => Some(version),
            Err(e) => {
                log::warn!("Could not determine Kubernetes version: {:#}", e);
                None
            }
        };

        (
            ClusterIdentity::resolve_name(request.cluster_name.as_deref(), platform_name),
            ClusterIdentity::resolve_version(platform_version),
        )
    }

    async fn deliver(&self, report: &ClusterReport) -> DeliveryStatus {
        let Some(sink) = &self.report_sink else {
            return DeliveryStatus::Skipped;
        };

        self.progress_reporter.report("📤 Uploading report...");
        match sink.deliver(report).await {
            Ok(()) => {
                self.progress_reporter
                    .report_completion("✅ Report delivered to the inventory API");
                DeliveryStatus::Delivered
            }
            Err(e) => {
                let details = format!("{:#}", e);
                log::warn!("Report delivery failed: {}", details);
                self.progress_reporter
                    .report_error(&format!("⚠️  Warning: Report delivery failed: {}", details));
                DeliveryStatus::Failed(details)
            }
        }
    }
}
