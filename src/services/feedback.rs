use tracing::{info, warn};

use crate::types::{Choice, TripRequest, TripResponse};

/// Pre-filled link to the external feedback form.
#[derive(Clone, Debug, PartialEq)]
pub struct FeedbackLink {
    url: String,
}

impl FeedbackLink {
    /// Append a few request fields (and the trip title, once there is one) as query parameters.
    pub fn build(base_url: &str, request: &TripRequest, response: Option<&TripResponse>) -> Self {
        let mut params = vec![
            ("destination", request.destination.clone()),
            ("duration_days", request.duration_days.to_string()),
            ("party_size", request.party_size.to_string()),
            (
                "main_mode",
                request.transportation.main_mode.wire_value().to_string(),
            ),
        ];
        if let Some(response) = response {
            params.push(("trip_title", response.trip_title.clone()));
        }

        let query = params
            .iter()
            .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&");

        let separator = if base_url.contains('?') { '&' } else { '?' };
        Self {
            url: format!("{base_url}{separator}{query}"),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.url
    }

    /// Open the link in the system browser. Returns false if it could not be opened.
    pub fn open(&self) -> bool {
        match open::that(&self.url) {
            Ok(()) => {
                info!(url = %self.url, "Opened feedback form");
                true
            }
            Err(error) => {
                warn!(%error, "Failed to open browser for feedback form");
                false
            }
        }
    }
}
