use jsonschema::{Draft, JSONSchema};
use serde_json::Value;

use crate::error::{PlanAiError, Result};

const MAX_SCHEMA_ERRORS: usize = 3;

/// Validate `payload` against `schema`, reporting up to three failing paths.
pub fn validate_against_schema(schema: &Value, payload: &Value, what: &str) -> Result<()> {
    let validator = JSONSchema::options()
        .with_draft(Draft::Draft7)
        .compile(schema)
        .map_err(|err| {
            PlanAiError::Validation(format!(
                "Failed to prepare {} schema for validation: {}",
                what, err
            ))
        })?;

    if let Err(errors) = validator.validate(payload) {
        let mut details = Vec::new();
        let mut truncated = false;

        for (idx, error) in errors.enumerate() {
            if idx < MAX_SCHEMA_ERRORS {
                let mut path = error.instance_path.to_string();
                if path.is_empty() {
                    path = "<root>".to_string();
                }
                details.push(format!("{}: {}", path, error));
            } else {
                truncated = true;
                break;
            }
        }

        let mut detail_str = if details.is_empty() {
            format!("{what} failed schema validation")
        } else {
            details.join("; ")
        };

        if truncated {
            detail_str.push_str("; additional errors truncated");
        }

        return Err(PlanAiError::Validation(format!(
            "{} does not match its schema: {}",
            what, detail_str
        )));
    }

    Ok(())
}
