//! # ql-core
//!
//! Core types and error definitions for quantlib-rs.
//!
//! This crate provides the building blocks shared across the other crates in
//! the workspace: the primitive type aliases and the error hierarchy with its
//! `ensure!` / `ensure_ordered!` macros.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `ensure_ordered!` macros.
pub mod errors;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used throughout the library.
pub type Real = f64;

/// A volatility level expressed as a decimal.
pub type Volatility = Real;

/// A time measurement in years.
pub type Time = Real;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
