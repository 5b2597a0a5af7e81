//! Path model and validation findings shared by every rule.

pub mod errors;
pub mod path;

pub use errors::{ErrorList, ErrorType, FieldError, identities, summarize};
pub use path::{Path, Segment};
