//! Deadline-bounded execution of asynchronous operations.
//!
//! # Key Functions
//!
//! - [`with_timeout`] - Race an in-flight future against a deadline
//!
//! # Examples
//!
//! ```rust
//! use crosscut::time::with_timeout;
//! use std::time::Duration;
//!
//! # async fn example() {
//! let outcome = with_timeout(
//!     async { "completed" },
//!     Duration::from_millis(30),
//!     || "timed out",
//! )
//! .await;
//! # }
//! ```

mod timeout;

pub use timeout::with_timeout;
