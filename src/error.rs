use thiserror::Error;

/// Message shown when a submission fails without a server-supplied detail.
pub const GENERIC_FAILURE_MESSAGE: &str = "계획 생성에 실패했습니다. 백엔드 서버를 확인해 주세요.";

/// Main error type for the planner wizard
#[derive(Error, Debug)]
pub enum PlanAiError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Timeout error: {0}")]
    Timeout(String),

    #[error("Planner API returned HTTP {status}{}", format_detail(.detail))]
    Api { status: u16, detail: Option<String> },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid input for {field}: {message}")]
    InvalidInput { field: &'static str, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn format_detail(detail: &Option<String>) -> String {
    detail
        .as_deref()
        .map(|d| format!(": {d}"))
        .unwrap_or_default()
}

/// Result type alias
pub type Result<T> = std::result::Result<T, PlanAiError>;

impl PlanAiError {
    /// Server-supplied detail message, if the planner sent one
    pub fn detail(&self) -> Option<&str> {
        match self {
            PlanAiError::Api { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// Text shown on the error screen after a failed submission
    pub fn user_message(&self) -> String {
        self.detail()
            .map(str::to_string)
            .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string())
    }

    /// Get the error code for structured responses
    pub fn error_code(&self) -> &'static str {
        match self {
            PlanAiError::Config(_) => "CONFIG_ERROR",
            PlanAiError::Http(_) => "HTTP_ERROR",
            PlanAiError::Timeout(_) => "TIMEOUT_ERROR",
            PlanAiError::Api { .. } => "API_ERROR",
            PlanAiError::Serialization(_) => "SERIALIZATION_ERROR",
            PlanAiError::Validation(_) => "VALIDATION_ERROR",
            PlanAiError::InvalidInput { .. } => "INVALID_INPUT",
            PlanAiError::Io(_) => "IO_ERROR",
        }
    }

    /// Convert to a structured error payload
    pub fn to_error_payload(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.error_code(),
                "message": self.to_string(),
                "detail": self.detail(),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_detail() {
        let error = PlanAiError::Api {
            status: 500,
            detail: Some("AI 계획 생성에 실패했습니다.".to_string()),
        };
        assert_eq!(error.user_message(), "AI 계획 생성에 실패했습니다.");
        assert!(error.to_string().contains("HTTP 500"));
    }

    #[test]
    fn test_user_message_falls_back_to_generic() {
        let api = PlanAiError::Api {
            status: 502,
            detail: None,
        };
        assert_eq!(api.user_message(), GENERIC_FAILURE_MESSAGE);
        assert_eq!(api.to_string(), "Planner API returned HTTP 502");

        let timeout = PlanAiError::Timeout("request exceeded 60s".to_string());
        assert_eq!(timeout.user_message(), GENERIC_FAILURE_MESSAGE);
    }

    #[test]
    fn test_error_payload() {
        let error = PlanAiError::InvalidInput {
            field: "party_size",
            message: "must be at least 1".to_string(),
        };
        let payload = error.to_error_payload();
        assert_eq!(payload["error"]["code"], "INVALID_INPUT");
        assert!(payload["error"]["detail"].is_null());
        assert!(payload["error"]["message"]
            .as_str()
            .unwrap()
            .contains("party_size"));
    }
}
