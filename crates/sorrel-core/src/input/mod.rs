//! Provides the token-stream plumbing shared by all parameter parsers.
//!
//! This module defines the abstraction over whitespace-delimited token sources
//! and the outcome taxonomy that parsing and validation operations report
//! through. Parameter records in [`crate::params`] consume tokens through
//! these interfaces without caring whether the underlying input is an
//! in-memory string or a buffered reader.

pub mod outcome;
pub mod source;
