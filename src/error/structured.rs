//! The structured error value and its projections.

use std::backtrace::{Backtrace, BacktraceStatus};
use std::error::Error as StdError;
use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use serde_json::{Map, Value, json};
use thiserror::Error;

use super::style::Palette;

/// Placeholder printed for absent optional fields.
const ABSENT: &str = "(null)";

/// A universal error value carrying useful extra context.
///
/// Every instance records its message, the wall-clock instant it was
/// created, an opaque structured payload ("extra"), a numeric code, an
/// optional causal predecessor, and a stack trace when the runtime captures
/// one (`RUST_BACKTRACE=1`). All fields are set at construction and never
/// mutated, so a value can be shared freely between concurrent readers.
///
/// Construction cannot fail. An empty message is permitted, though not
/// recommended.
///
/// # Examples
///
/// ```rust
/// use crosscut::error::StructuredError;
/// use serde_json::{Map, json};
///
/// let mut extra = Map::new();
/// extra.insert("foo".into(), json!("bar"));
/// extra.insert("baz".into(), json!(15));
///
/// let err = StructuredError::builder("this is a structured error")
///     .extra(extra)
///     .code(-1)
///     .cause(std::io::Error::other("connection reset"))
///     .build();
///
/// let projection = err.to_json();
/// assert_eq!(projection["code"], -1);
/// assert_eq!(projection["extra"]["foo"], "bar");
/// ```
#[derive(Debug, Error)]
#[error("{message}")]
pub struct StructuredError {
    message: String,
    created_at: DateTime<Utc>,
    extra: Option<Map<String, Value>>,
    code: i32,
    #[source]
    cause: Option<Box<dyn StdError + Send + Sync>>,
    stack_trace: Option<String>,
}

impl StructuredError {
    /// Create an error with only a message; the code defaults to 1.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use crosscut::error::StructuredError;
    ///
    /// let err = StructuredError::new("disk full");
    /// assert_eq!(err.code(), 1);
    /// ```
    pub fn new(message: impl Into<String>) -> Self {
        Self::builder(message).build()
    }

    /// Create a new builder for configuring the optional fields.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use crosscut::error::StructuredError;
    ///
    /// let err = StructuredError::builder("upstream unavailable")
    ///     .code(69)
    ///     .build();
    /// ```
    pub fn builder(message: impl Into<String>) -> StructuredErrorBuilder {
        StructuredErrorBuilder {
            message: message.into(),
            extra: None,
            code: None,
            cause: None,
        }
    }

    /// The human-readable message supplied at construction.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The wall-clock instant this error was constructed.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// The opaque structured payload, if one was supplied.
    ///
    /// The payload is carried, never interpreted.
    pub fn extra(&self) -> Option<&Map<String, Value>> {
        self.extra.as_ref()
    }

    /// The numeric code. Defaults to 1; the meaning is caller-defined
    /// (commonly a process exit code).
    pub fn code(&self) -> i32 {
        self.code
    }

    /// The stack trace captured at construction, if the runtime was
    /// configured to capture one.
    pub fn stack_trace(&self) -> Option<&str> {
        self.stack_trace.as_deref()
    }

    /// Project this error to a JSON value with a fixed key set.
    ///
    /// The keys are exactly `name`, `createdAt`, `message`, `extra`,
    /// `code`, `stackTrace`, and `cause`, in every case; absent optionals
    /// become `null`. The cause is passed through as its display rendering
    /// rather than re-serialized recursively — a caller that needs the
    /// whole chain machine-readable serializes each link itself.
    ///
    /// Pure projection; no side effects.
    pub fn to_json(&self) -> Value {
        json!({
            "name": "StructuredError",
            "createdAt": self.created_at,
            "message": &self.message,
            "extra": &self.extra,
            "code": self.code,
            "stackTrace": &self.stack_trace,
            "cause": self.cause.as_ref().map(|cause| cause.to_string()),
        })
    }

    /// Render the console projection without writing it anywhere.
    ///
    /// Five lines in fixed order: Date, Message, Extras, Code, Stack.
    /// Absent optionals render as a gray `(null)` placeholder rather than
    /// being omitted, so the shape is stable. With `force_plain` (or when
    /// styling is unavailable) the output is textually identical, merely
    /// unstyled.
    pub fn render(&self, force_plain: bool) -> String {
        let palette = Palette::resolve(force_plain);

        let extras = match &self.extra {
            Some(extra) => Value::Object(extra.clone()).to_string(),
            None => palette.gray(ABSENT),
        };
        let stack = match &self.stack_trace {
            Some(stack) => palette.gray(stack),
            None => palette.gray(ABSENT),
        };

        [
            format!(
                "{} {}",
                palette.green("Date:"),
                palette.cyan(&self.created_at.to_string())
            ),
            format!(
                "{} {}",
                palette.green("Message:"),
                palette.yellow(&self.message)
            ),
            format!("{} {}", palette.green("Extras:"), extras),
            format!("{} {}", palette.green("Code:"), self.code),
            format!("{} {}", palette.green("Stack:"), stack),
        ]
        .join("\n")
    }

    /// Write the console projection to stderr.
    ///
    /// Diagnostics go to the error stream so they never pollute piped
    /// output. This never fails: a write error on stderr is discarded.
    pub fn print(&self, force_plain: bool) {
        let mut stderr = std::io::stderr().lock();
        let _ = writeln!(stderr, "{}", self.render(force_plain));
    }
}

impl Serialize for StructuredError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_json().serialize(serializer)
    }
}

/// Builder for configuring the optional fields of a [`StructuredError`].
///
/// The timestamp and stack trace are captured by [`build`](Self::build),
/// at the point of failure detection.
#[derive(Debug)]
pub struct StructuredErrorBuilder {
    message: String,
    extra: Option<Map<String, Value>>,
    code: Option<i32>,
    cause: Option<Box<dyn StdError + Send + Sync>>,
}

impl StructuredErrorBuilder {
    /// Attach an opaque structured payload.
    ///
    /// The payload is stored as given; it is never copied, validated, or
    /// interpreted by the error itself.
    pub fn extra(mut self, extra: Map<String, Value>) -> Self {
        self.extra = Some(extra);
        self
    }

    /// Set the numeric code.
    ///
    /// Default: 1
    pub fn code(mut self, code: i32) -> Self {
        self.code = Some(code);
        self
    }

    /// Chain a causal predecessor.
    ///
    /// The cause becomes this error's [`source`](StdError::source). Since
    /// every error is constructed fresh and only ever points at an error
    /// that already exists, the chain is a simple singly-linked list and
    /// cannot form a cycle.
    pub fn cause(mut self, cause: impl StdError + Send + Sync + 'static) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }

    /// Build the [`StructuredError`], capturing the timestamp and, when the
    /// runtime supports it, a stack trace.
    pub fn build(self) -> StructuredError {
        StructuredError {
            message: self.message,
            created_at: Utc::now(),
            extra: self.extra,
            code: self.code.unwrap_or(1),
            cause: self.cause,
            stack_trace: capture_stack_trace(),
        }
    }
}

/// Capture the current stack trace if the runtime is collecting them.
///
/// Follows `std::backtrace` semantics: absent unless `RUST_BACKTRACE` (or
/// `RUST_LIB_BACKTRACE`) enables capture.
fn capture_stack_trace() -> Option<String> {
    let backtrace = Backtrace::capture();
    match backtrace.status() {
        BacktraceStatus::Captured => Some(backtrace.to_string()),
        _ => None,
    }
}
