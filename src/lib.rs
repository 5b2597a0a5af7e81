pub mod cloud;
pub mod error;
pub mod field;
pub mod parse;
pub mod validate;
pub mod wasm;
