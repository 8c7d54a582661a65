use crate::adapters::outbound::formatters::JsonReportFormatter;
use crate::detection::domain::ClusterReport;
use crate::ports::outbound::ReportSink;
use crate::shared::error::ScanError;
use crate::shared::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Header carrying the inventory API token
const API_TOKEN_HEADER: &str = "x-api-token";

/// Upper bound for a single delivery attempt
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// ApiReportSink adapter uploading the report with an authenticated PUT
///
/// The body is the `JsonReportFormatter` document sent as JSON.
/// Each report is sent once; there is no retry.
pub struct ApiReportSink {
    client: reqwest::Client,
    url: String,
    token: String,
}

impl ApiReportSink {
    /// Creates a sink for `url`, authenticating with `token`
    pub fn new(url: impl Into<String>, token: impl Into<String>) -> Result<Self> {
        let user_agent = format!("keepup-scanner/{}", env!("CARGO_PKG_VERSION"));
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            url: url.into(),
            token: token.into(),
        })
    }

    fn build_request(&self, report: &ClusterReport) -> reqwest::Result<reqwest::Request> {
        self.client
            .put(&self.url)
            .header(API_TOKEN_HEADER, &self.token)
            .json(&JsonReportFormatter::document(report))
            .build()
    }
}

#[async_trait]
impl ReportSink for ApiReportSink {
    async fn deliver(&self, report: &ClusterReport) -> Result<()> {
        let request = self
            .build_request(report)
            .map_err(|e| ScanError::DeliveryFailed {
                details: format!("could not build request for {}: {}", self.url, e),
            })?;
        let response = self
            .client
            .execute(request)
            .await
            .map_err(|e| ScanError::DeliveryFailed {
                details: format!("request to {} failed: {}", self.url, e),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScanError::DeliveryFailed {
                details: format!("API request failed with status: {}", status.as_u16()),
            }
            .into());
        }

        log::info!("Successfully sent report to {} ({})", self.url, status);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sink_creation() {
        let sink = ApiReportSink::new("https://inventory.example.com/api/clusters", "secret");
        assert!(sink.is_ok());
    }

    #[test]
    fn test_request_is_authenticated_json_put() {
        use crate::detection::domain::{DetectedComponent, NormalizedVersion};
        use reqwest::header::CONTENT_TYPE;

        let sink = ApiReportSink::new("https://inventory.example.com/api/clusters", "secret")
            .unwrap();
        let report = ClusterReport::new(
            "prod-eu",
            "v1.31.2",
            vec![DetectedComponent::new(
                "redis",
                NormalizedVersion::new("7", "2", "4").unwrap(),
                "cache",
            )],
        );

        let request = sink.build_request(&report).unwrap();

        assert_eq!(request.method(), &reqwest::Method::PUT);
        assert_eq!(
            request.url().as_str(),
            "https://inventory.example.com/api/clusters"
        );
        assert_eq!(request.headers()[CONTENT_TYPE], "application/json");
        assert_eq!(request.headers()[API_TOKEN_HEADER], "secret");

        let body = request.body().and_then(|b| b.as_bytes()).unwrap();
        let json: serde_json::Value = serde_json::from_slice(body).unwrap();
        assert_eq!(json["cluster_name"], "prod-eu");
        assert_eq!(json["helm_charts"][0]["chart_name"], "redis");
        assert_eq!(json["helm_charts"][0]["version"], "7.2.4");
    }

    #[tokio::test]
    async fn test_deliver_transport_error_is_delivery_failed() {
        // Port 9 (discard) on localhost is not expected to accept HTTP.
        let sink = ApiReportSink::new("http://127.0.0.1:9/api", "secret").unwrap();
        let report = ClusterReport::new("c", "v1.31.2", vec![]);
        let err = sink.deliver(&report).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ScanError>(),
            Some(ScanError::DeliveryFailed { .. })
        ));
    }
}
