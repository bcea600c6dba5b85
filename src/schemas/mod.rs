//! JSON schemas for the wire types and path-aware decoding helpers.

pub mod validation;

use schemars::schema_for;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{
    error::{PlanAiError, Result},
    types::{TripRequest, TripResponse},
};

pub use validation::validate_against_schema;

/// JSON schema of the request body posted to the planner
pub fn request_schema() -> Result<Value> {
    Ok(serde_json::to_value(schema_for!(TripRequest))?)
}

/// JSON schema of the itinerary the planner returns
pub fn response_schema() -> Result<Value> {
    Ok(serde_json::to_value(schema_for!(TripResponse))?)
}

/// Deserialize `raw`, naming the offending JSON path when it does not fit `T`.
pub fn decode_json<T: DeserializeOwned>(raw: &str, what: &str) -> Result<T> {
    let mut deserializer = serde_json::Deserializer::from_str(raw);
    serde_path_to_error::deserialize(&mut deserializer).map_err(|err| {
        let path = err.path().to_string();
        let location = if path.is_empty() || path == "." {
            "<root>".to_string()
        } else {
            path
        };
        PlanAiError::Validation(format!(
            "failed to decode {} at {}: {}",
            what,
            location,
            err.inner()
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_schema_lists_wire_fields() {
        let schema = request_schema().unwrap();
        let props = schema["properties"].as_object().unwrap();

        for field in [
            "destination",
            "duration_days",
            "party_size",
            "accommodation",
            "budget_krw",
            "transportation",
            "style",
        ] {
            assert!(props.contains_key(field), "missing {field}");
        }
        assert_eq!(props["destination"]["type"], "string");
        assert_eq!(props["duration_days"]["type"], "integer");
        assert_eq!(props["duration_days"]["minimum"].as_f64(), Some(1.0));
        assert_eq!(props["party_size"]["minimum"].as_f64(), Some(1.0));
    }

    #[test]
    fn test_response_schema_has_plan_array() {
        let schema = response_schema().unwrap();
        assert_eq!(schema["properties"]["plan"]["type"], "array");
        assert!(schema["definitions"]["ItemKind"].is_object());
    }
}
