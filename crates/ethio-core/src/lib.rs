//! # ethio-core
//!
//! Core types and error definitions for ethiocal.
//!
//! This crate provides the building blocks shared across the other crates in
//! the workspace: the error taxonomy, the `ensure_date!` / `ensure_range!`
//! macros, and primitive type aliases.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure_date!` / `ensure_range!` macros.
pub mod errors;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Proleptic (era-independent, signed) Ethiopian year.
pub type Year = i32;

/// Day count relative to 1970-01-01 (Gregorian), day 0 being that date.
pub type EpochDay = i64;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
