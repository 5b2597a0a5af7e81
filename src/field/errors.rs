//! Path-qualified validation findings.

use std::fmt;

use serde_json::Value;

use super::path::Path;

/// The closed set of finding kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorType {
    /// A mandatory field is absent or empty.
    Required,
    /// Present but malformed, or outside an open-ended constraint.
    Invalid,
    /// Present but disallowed given the rest of the configuration.
    Forbidden,
    /// References something missing from a sibling collection.
    NotFound,
    /// Repeats an earlier value where uniqueness is required.
    Duplicate,
    /// Not a member of a closed enumeration.
    Unsupported,
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::Required => "Required value",
            ErrorType::Invalid => "Invalid value",
            ErrorType::Forbidden => "Forbidden",
            ErrorType::NotFound => "Not found",
            ErrorType::Duplicate => "Duplicate value",
            ErrorType::Unsupported => "Unsupported value",
        }
    }
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    pub kind: ErrorType,
    pub path: Path,
    pub bad_value: Option<Value>,
    pub detail: String,
}

/// Findings in the order the rules discovered them.
pub type ErrorList = Vec<FieldError>;

impl FieldError {
    pub fn required(path: Path, detail: impl Into<String>) -> Self {
        FieldError {
            kind: ErrorType::Required,
            path,
            bad_value: None,
            detail: detail.into(),
        }
    }

    pub fn invalid(path: Path, value: impl Into<Value>, detail: impl Into<String>) -> Self {
        FieldError {
            kind: ErrorType::Invalid,
            path,
            bad_value: Some(value.into()),
            detail: detail.into(),
        }
    }

    pub fn forbidden(path: Path, detail: impl Into<String>) -> Self {
        FieldError {
            kind: ErrorType::Forbidden,
            path,
            bad_value: None,
            detail: detail.into(),
        }
    }

    pub fn not_found(path: Path, value: impl Into<Value>, detail: impl Into<String>) -> Self {
        FieldError {
            kind: ErrorType::NotFound,
            path,
            bad_value: Some(value.into()),
            detail: detail.into(),
        }
    }

    pub fn duplicate(path: Path, value: impl Into<Value>) -> Self {
        FieldError {
            kind: ErrorType::Duplicate,
            path,
            bad_value: Some(value.into()),
            detail: "duplicate entry".into(),
        }
    }

    pub fn unsupported(path: Path, value: impl Into<Value>, supported: &[&str]) -> Self {
        let listed: Vec<String> = supported.iter().map(|s| format!("{:?}", s)).collect();
        FieldError {
            kind: ErrorType::Unsupported,
            path,
            bad_value: Some(value.into()),
            detail: format!("supported values: {}", listed.join(", ")),
        }
    }

    /// Comparable identity, `"<kind>::<path>"`. The detail text is not part of it.
    pub fn identity(&self) -> String {
        format!("{}::{}", self.kind, self.path)
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.kind)?;
        if let Some(value) = &self.bad_value {
            write!(f, ": {}", value)?;
        }
        if !self.detail.is_empty() {
            write!(f, ": {}", self.detail)?;
        }
        Ok(())
    }
}

/// Identities of every finding, in order.
pub fn identities(errors: &[FieldError]) -> Vec<String> {
    errors.iter().map(FieldError::identity).collect()
}

/// One-line aggregate of a list, e.g. `[a: Forbidden: ..., b: Not found: ...]`.
pub fn summarize(errors: &[FieldError]) -> String {
    match errors {
        [] => String::new(),
        [only] => only.to_string(),
        many => {
            let parts: Vec<String> = many.iter().map(ToString::to_string).collect();
            format!("[{}]", parts.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_uses_kind_and_path() {
        let e = FieldError::invalid(
            Path::new(["spec", "additionalSecurityGroups"]).index(1),
            "",
            "security group cannot be empty, if specified",
        );
        assert_eq!(e.identity(), "Invalid value::spec.additionalSecurityGroups[1]");
    }

    #[test]
    fn display_includes_value_and_detail() {
        let e = FieldError::invalid(
            Path::new(["spec", "instanceMetadata", "httpPutResponseHopLimit"]),
            -1,
            "HTTPPutResponseLimit must be a value between 1 and 64",
        );
        assert_eq!(
            e.to_string(),
            "spec.instanceMetadata.httpPutResponseHopLimit: Invalid value: -1: \
             HTTPPutResponseLimit must be a value between 1 and 64"
        );
    }

    #[test]
    fn display_without_value() {
        let e = FieldError::forbidden(
            Path::new(["spec", "externalCloudControllerManager"]),
            "not allowed",
        );
        assert_eq!(
            e.to_string(),
            "spec.externalCloudControllerManager: Forbidden: not allowed"
        );
    }

    #[test]
    fn unsupported_lists_allowed_values() {
        let e = FieldError::unsupported(Path::new(["x"]), "abc", &["optional", "required"]);
        assert_eq!(e.kind, ErrorType::Unsupported);
        assert_eq!(e.bad_value, Some(Value::from("abc")));
        assert_eq!(e.detail, r#"supported values: "optional", "required""#);
    }

    #[test]
    fn summarize_lists() {
        assert_eq!(summarize(&[]), "");
        let a = FieldError::required(Path::new(["a"]), "missing");
        let b = FieldError::duplicate(Path::new(["b"]).index(2), "sg-1");
        assert_eq!(summarize(&[a.clone()]), "a: Required value: missing");
        assert_eq!(
            summarize(&[a, b]),
            r#"[a: Required value: missing, b[2]: Duplicate value: "sg-1": duplicate entry]"#
        );
    }
}
