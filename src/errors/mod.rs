//! Error types produced by the lexer.
//!
//! - `LexError` with the scanner state and source position at failure
//! - `ErrorImpl` variants describing what went wrong
//! - `LexResult`, the coarse failure kind a parser dispatches on
//! - Tips used when rendering diagnostics

pub mod errors;
