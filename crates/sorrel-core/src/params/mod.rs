//! Provides the typed parameter records for SOR solver input blocks.
//!
//! This module contains the domain side of the crate: the value types that
//! solver parameters are built from and the keyword-driven record that
//! accumulates them. Parsing is incremental. A record starts from documented
//! defaults, consumes one keyword (plus its arguments) at a time from a
//! [`crate::input::source::TokenSource`], and tracks per-field flags so that
//! a completeness check can tell explicitly-set values apart from defaults.
//!
//! - **Charge discretization** ([`charge`]) - The supported charge spreading
//!   methods and their legacy numeric codes
//! - **Grid geometry** ([`grid`]) - Grid center specifications
//! - **Solver records** ([`sor`]) - The SOR parameter record, its keyword
//!   dispatch, and the post-parse completeness check

pub mod charge;
pub mod grid;
pub mod sor;
