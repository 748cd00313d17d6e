#![deny(unsafe_code)]
#![warn(missing_docs)]

//! Cross-cutting utilities shared by services and tools.
//!
//! This crate provides two independent building blocks, plus a small frozen
//! runtime-constants surface:
//!
//! - **Structured errors** via [`StructuredError`](error::StructuredError)
//!   - A message, a creation timestamp, an opaque structured payload, a
//!     numeric code, and an optional causal chain
//!   - A JSON projection with a fixed key set, and a colored console
//!     projection that degrades to plain text when styling is unavailable
//! - **Deadline racing** via [`with_timeout`](time::with_timeout)
//!   - Races any in-flight future against a timer; the loser is discarded
//!   - The timer is released on every exit path, so repeated calls never
//!     accumulate stale timers
//!
//! # Design Philosophy
//!
//! Both components are leaves: they depend on nothing else in the crate and
//! carry no shared state. They propagate failures unchanged — neither one
//! retries, logs, or swallows an error. Composition (retry loops, logging,
//! tracing spans) is the caller's job.
//!
//! # Examples
//!
//! Using the prelude for convenient imports:
//!
//! ```rust
//! use crosscut::prelude::*;
//! use std::time::Duration;
//!
//! # async fn example() {
//! let outcome = with_timeout(
//!     async { Ok::<_, StructuredError>(42) },
//!     Duration::from_millis(100),
//!     || Err(StructuredError::new("operation timed out")),
//! )
//! .await;
//! # }
//! ```

pub mod config;
pub mod error;
pub mod time;

/// Convenient re-exports of commonly used items.
///
/// Import all core utilities with:
///
/// ```rust
/// use crosscut::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::{RuntimeEnv, runtime_env};
    pub use crate::error::{StructuredError, StructuredErrorBuilder};
    pub use crate::time::with_timeout;
}
