use async_trait::async_trait;
use keepup_scanner::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock ReportSink that records delivered reports
#[derive(Default, Clone)]
pub struct MockReportSink {
    should_fail: bool,
    pub delivered: Arc<Mutex<Vec<ClusterReport>>>,
}

impl MockReportSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    pub fn delivered(&self) -> Vec<ClusterReport> {
        self.delivered.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReportSink for MockReportSink {
    async fn deliver(&self, report: &ClusterReport) -> Result<()> {
        if self.should_fail {
            anyhow::bail!("API request failed with status: 500");
        }
        self.delivered.lock().unwrap().push(report.clone());
        Ok(())
    }
}
