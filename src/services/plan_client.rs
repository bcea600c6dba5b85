use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::{
    error::{PlanAiError, Result},
    types::{decode_trip_response, TripRequest, TripResponse},
};

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000/api/v1/plan";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Anything that can turn a trip request into an itinerary
#[async_trait]
pub trait Planner: Send + Sync {
    async fn plan(&self, request: &TripRequest) -> Result<TripResponse>;
}

/// HTTP client for the remote planner endpoint. One POST per call, no retries.
#[derive(Clone, Debug)]
pub struct PlanClient {
    api_url: String,
    timeout: Duration,
}

impl PlanClient {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub async fn submit(&self, request: &TripRequest) -> Result<TripResponse> {
        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|err| PlanAiError::Http(format!("Failed to build HTTP client: {err}")))?;

        debug!(url = %self.api_url, ?request, "Sending trip request");

        let response = client
            .post(&self.api_url)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|err| self.transport_error(err))?;

        let status = response.status();
        let response_text = response
            .text()
            .await
            .map_err(|err| self.transport_error(err))?;

        if !status.is_success() {
            let detail = extract_detail(&response_text);
            warn!(
                status = status.as_u16(),
                has_detail = detail.is_some(),
                "Planner returned an error response"
            );
            return Err(PlanAiError::Api {
                status: status.as_u16(),
                detail,
            });
        }

        let plan = decode_trip_response(&response_text)?;
        info!(
            days = plan.plan.len(),
            items = plan.item_count(),
            "Received itinerary"
        );
        Ok(plan)
    }

    fn transport_error(&self, err: reqwest::Error) -> PlanAiError {
        if err.is_timeout() {
            PlanAiError::Timeout(format!(
                "planner did not answer within {}s",
                self.timeout.as_secs()
            ))
        } else {
            PlanAiError::Http(format!("HTTP request failed: {err}"))
        }
    }
}

#[async_trait]
impl Planner for PlanClient {
    async fn plan(&self, request: &TripRequest) -> Result<TripResponse> {
        self.submit(request).await
    }
}

/// Pull a human-readable `detail` string out of an error body.
///
/// Validation errors carry `detail` as a list of objects; those are not shown verbatim.
fn extract_detail(body: &str) -> Option<String> {
    serde_json::from_str::<Value>(body)
        .ok()?
        .get("detail")?
        .as_str()
        .filter(|detail| !detail.is_empty())
        .map(str::to_string)
}
