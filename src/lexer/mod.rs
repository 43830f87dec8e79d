//! Lexical analysis for Nod source code.
//!
//! This module contains the scanner that converts source text into a stream
//! of tokens for parsing. It handles:
//!
//! - A single-pass finite-state scanner with maximal munch
//! - Recognition of keywords, identifiers, literals and operators
//! - Escape sequence validation inside string and char literals
//! - Line/column tracking for error reporting

pub mod escapes;
pub mod lexer;
pub mod tokens;
