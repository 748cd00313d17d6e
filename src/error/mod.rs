//! Structured error values with dual projections.
//!
//! [`StructuredError`] carries everything needed to diagnose a failure after
//! the fact — message, creation timestamp, opaque payload, numeric code,
//! causal chain, captured stack trace — independent of how it is eventually
//! surfaced. Two projections are provided:
//!
//! - [`StructuredError::to_json`] for machine-readable logs
//! - [`StructuredError::print`] for human-readable terminal output, with
//!   ANSI coloring that silently degrades to plain text when unavailable
//!
//! # Key Types
//!
//! - [`StructuredError`] - The error value itself
//! - [`StructuredErrorBuilder`] - Fluent construction with optional fields
//!
//! # Examples
//!
//! ```rust
//! use crosscut::error::StructuredError;
//! use serde_json::{Map, json};
//!
//! let mut extra = Map::new();
//! extra.insert("attempt".into(), json!(3));
//!
//! let err = StructuredError::builder("upstream refused the request")
//!     .extra(extra)
//!     .code(75)
//!     .build();
//!
//! assert_eq!(err.code(), 75);
//! err.print(false);
//! ```

mod structured;
mod style;

pub use structured::{StructuredError, StructuredErrorBuilder};
