use std::time::Duration;

use tracing::debug;

use crate::{
    error::{PlanAiError, Result},
    services::{PlanClient, DEFAULT_API_URL, DEFAULT_TIMEOUT},
};

pub const API_URL_ENV: &str = "PLAN_AI_API_URL";
pub const TIMEOUT_ENV: &str = "PLAN_AI_TIMEOUT_SECS";
pub const FEEDBACK_URL_ENV: &str = "PLAN_AI_FEEDBACK_URL";

/// Runtime settings for the wizard
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub api_url: String,
    pub timeout: Duration,
    pub feedback_url: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            feedback_url: None,
        }
    }
}

impl Config {
    /// Read settings from the process environment (after `.env` has been loaded).
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key lookup; unset or blank keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let mut config = Self::default();

        if let Some(api_url) = value(API_URL_ENV) {
            config.api_url = api_url;
        }
        if let Some(timeout) = value(TIMEOUT_ENV) {
            config.timeout = parse_timeout(&timeout)?;
        }
        config.feedback_url = value(FEEDBACK_URL_ENV);

        debug!(?config, "Loaded configuration");
        Ok(config)
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_feedback_url(mut self, feedback_url: impl Into<String>) -> Self {
        self.feedback_url = Some(feedback_url.into());
        self
    }

    pub fn plan_client(&self) -> PlanClient {
        PlanClient::new(self.api_url.clone()).with_timeout(self.timeout)
    }
}

/// Parse a timeout given in whole seconds.
pub fn parse_timeout(raw: &str) -> Result<Duration> {
    let seconds: u64 = raw.trim().parse().map_err(|_| {
        PlanAiError::Config(format!("timeout must be a whole number of seconds, got '{raw}'"))
    })?;
    if seconds == 0 {
        return Err(PlanAiError::Config(
            "timeout must be at least 1 second".to_string(),
        ));
    }
    Ok(Duration::from_secs(seconds))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert!(config.feedback_url.is_none());
    }

    #[test]
    fn test_reads_all_keys() {
        let config = Config::from_lookup(lookup(&[
            (API_URL_ENV, "http://planner.local/api/v1/plan"),
            (TIMEOUT_ENV, "15"),
            (FEEDBACK_URL_ENV, "https://forms.example.com/f"),
        ]))
        .unwrap();

        assert_eq!(config.api_url, "http://planner.local/api/v1/plan");
        assert_eq!(config.timeout, Duration::from_secs(15));
        assert_eq!(
            config.feedback_url.as_deref(),
            Some("https://forms.example.com/f")
        );
        assert_eq!(config.plan_client().timeout(), Duration::from_secs(15));
    }

    #[test]
    fn test_blank_values_are_ignored() {
        let config = Config::from_lookup(lookup(&[(API_URL_ENV, "  "), (FEEDBACK_URL_ENV, "")]))
            .unwrap();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert!(config.feedback_url.is_none());
    }

    #[test]
    fn test_invalid_timeout() {
        let err = Config::from_lookup(lookup(&[(TIMEOUT_ENV, "soon")])).unwrap_err();
        assert_eq!(err.error_code(), "CONFIG_ERROR");
        assert!(parse_timeout("0").is_err());
    }
}
