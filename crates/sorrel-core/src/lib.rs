//! # Sorrel Core Library
//!
//! A typed parameter layer for successive over-relaxation (SOR) electrostatics
//! solvers, built around streaming keyword-value parsing of solver input blocks.
//!
//! ## Architectural Philosophy
//!
//! The library separates the mechanics of token consumption from the meaning of
//! the parameters themselves.
//!
//! - **[`input`]: The Plumbing.** Defines the [`input::source::TokenSource`]
//!   abstraction over whitespace-delimited token streams and the three-level
//!   outcome taxonomy (`Success` / `Warning` / `Fail`) that every parsing and
//!   validation step reports through.
//!
//! - **[`params`]: The Domain.** Contains the typed parameter records
//!   (`SorParam`), the value enums they are built from (`ChargeMethod`,
//!   `GridCenter`), and the keyword dispatch that populates a record one
//!   keyword at a time while tracking which fields have been explicitly set.

pub mod input;
pub mod params;
