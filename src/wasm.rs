//! WASM entry points for browser use.

use wasm_bindgen::prelude::*;

use crate::cloud::{CloudCapabilities, StaticCatalog};
use crate::error::Error;
use crate::field::{ErrorList, FieldError};

/// Validate a cluster JSON document.
/// Returns a `ValidationReport` object.
#[wasm_bindgen]
pub fn validate_cluster(json: &str) -> JsValue {
    let report = validate_cluster_inner(json);
    serde_wasm_bindgen::to_value(&report).unwrap_or(JsValue::NULL)
}

fn validate_cluster_inner(json: &str) -> ValidationReport {
    ValidationReport::from_result(crate::validate::validate_cluster_json(json))
}

/// Validate an instance-group JSON document.
///
/// `instance_types_json` is an optional JSON array of known instance type names;
/// when omitted, machine types are not checked.
#[wasm_bindgen]
pub fn validate_instance_group(json: &str, instance_types_json: Option<String>) -> JsValue {
    let report = validate_instance_group_inner(json, instance_types_json.as_deref());
    serde_wasm_bindgen::to_value(&report).unwrap_or(JsValue::NULL)
}

fn validate_instance_group_inner(json: &str, instance_types_json: Option<&str>) -> ValidationReport {
    let catalog = match instance_types_json {
        Some(raw) => match serde_json::from_str::<Vec<String>>(raw) {
            Ok(names) => Some(StaticCatalog::from_names(names)),
            Err(e) => {
                return ValidationReport::ParseError {
                    message: format!("Failed to parse instance types JSON: {}", e),
                };
            }
        },
        None => None,
    };
    let cloud = catalog.as_ref().map(|c| c as &dyn CloudCapabilities);

    ValidationReport::from_result(crate::validate::validate_instance_group_json(json, cloud))
}

// ---------------------------------------------------------------------------
// DTOs for serialization to JS
// ---------------------------------------------------------------------------

#[derive(Debug, serde::Serialize, serde::Deserialize)]
struct ErrorDto {
    kind: String,
    path: String,
    identity: String,
    value: Option<serde_json::Value>,
    detail: String,
}

impl From<FieldError> for ErrorDto {
    fn from(e: FieldError) -> Self {
        ErrorDto {
            kind: e.kind.to_string(),
            path: e.path.to_string(),
            identity: e.identity(),
            value: e.bad_value,
            detail: e.detail,
        }
    }
}

#[derive(Debug, serde::Serialize, serde::Deserialize)]
#[serde(tag = "status")]
enum ValidationReport {
    #[serde(rename = "valid")]
    Valid,
    #[serde(rename = "invalid")]
    Invalid { errors: Vec<ErrorDto> },
    #[serde(rename = "parseError")]
    ParseError { message: String },
}

impl ValidationReport {
    fn from_result(result: Result<ErrorList, Error>) -> Self {
        match result {
            Ok(errors) if errors.is_empty() => ValidationReport::Valid,
            Ok(errors) => ValidationReport::Invalid {
                errors: errors.into_iter().map(ErrorDto::from).collect(),
            },
            Err(e) => ValidationReport::ParseError {
                message: e.to_string(),
            },
        }
    }
}
