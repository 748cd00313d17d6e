//! Frozen runtime constants derived from the process environment.
//!
//! The values here are read once, the first time they are asked for, and
//! never change afterwards. Nothing in this crate branches on them; they
//! exist for callers that need a single process-wide answer to "which
//! environment am I running in?".

use std::sync::OnceLock;

/// Environment variable consulted to determine the runtime environment.
pub const ENV_VAR: &str = "APP_ENV";

/// Process-wide runtime environment flags.
///
/// Obtained via [`runtime_env`]; the struct itself is plain data and can be
/// copied freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuntimeEnv {
    /// Whether the process is running in production (`APP_ENV=production`).
    pub is_production: bool,
}

impl RuntimeEnv {
    fn from_env_value(value: Option<&str>) -> Self {
        Self {
            is_production: value == Some("production"),
        }
    }

    fn read() -> Self {
        let value = std::env::var(ENV_VAR).ok();
        Self::from_env_value(value.as_deref())
    }
}

/// Return the process-wide runtime environment.
///
/// The environment variable is read on first call and the result is cached
/// for the lifetime of the process; later changes to the variable are not
/// observed.
///
/// # Examples
///
/// ```rust
/// use crosscut::config::runtime_env;
///
/// if runtime_env().is_production {
///     // quiet down diagnostics, tighten limits, ...
/// }
/// ```
pub fn runtime_env() -> RuntimeEnv {
    static RUNTIME_ENV: OnceLock<RuntimeEnv> = OnceLock::new();
    *RUNTIME_ENV.get_or_init(RuntimeEnv::read)
}
