//! Crate-level error type.
//!
//! Individual findings are `FieldError` values, not Rust errors. `Error` covers
//! the two ways a document can fail to pass the gate as a whole.

use thiserror::Error;

use crate::field::{ErrorList, summarize};

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to parse {document} JSON: {source}")]
    Parse {
        document: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("{document} failed validation: {}", summarize(.errors))]
    Rejected {
        document: &'static str,
        errors: ErrorList,
    },
}

impl Error {
    /// The findings carried by a rejection; empty for parse failures.
    pub fn field_errors(&self) -> &[crate::field::FieldError] {
        match self {
            Error::Parse { .. } => &[],
            Error::Rejected { errors, .. } => errors,
        }
    }
}
