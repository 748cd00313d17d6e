//! Terminal styling with silent plain-text fallback.
//!
//! Coloring is an optional capability, never a requirement: the `color`
//! cargo feature pulls in the ANSI crate, and a process-wide probe decides
//! once whether styling is actually usable. When the feature is absent or
//! the probe fails, every operation degrades to identity-on-text. The
//! error-reporting path must never itself fail because styling is missing,
//! so nothing here returns an error or logs a warning.

use std::sync::OnceLock;

/// The narrow palette used by the console projection.
///
/// Four text-to-text operations, resolved to either the ANSI variant or the
/// unconditional plain variant.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Palette {
    Ansi,
    Plain,
}

impl Palette {
    /// Resolve the palette for one rendering pass.
    ///
    /// `force_plain` always wins; otherwise the cached process-wide probe
    /// decides.
    pub(crate) fn resolve(force_plain: bool) -> Self {
        if force_plain || !styling_available() {
            Palette::Plain
        } else {
            Palette::Ansi
        }
    }

    pub(crate) fn green(self, text: &str) -> String {
        match self {
            Palette::Ansi => ansi::green(text),
            Palette::Plain => text.to_string(),
        }
    }

    pub(crate) fn cyan(self, text: &str) -> String {
        match self {
            Palette::Ansi => ansi::cyan(text),
            Palette::Plain => text.to_string(),
        }
    }

    pub(crate) fn yellow(self, text: &str) -> String {
        match self {
            Palette::Ansi => ansi::yellow(text),
            Palette::Plain => text.to_string(),
        }
    }

    pub(crate) fn gray(self, text: &str) -> String {
        match self {
            Palette::Ansi => ansi::gray(text),
            Palette::Plain => text.to_string(),
        }
    }
}

/// Probe the styling capability once per process.
///
/// Styling is available when the `color` feature is compiled in and the
/// `NO_COLOR` convention is not in effect.
fn styling_available() -> bool {
    static AVAILABLE: OnceLock<bool> = OnceLock::new();
    *AVAILABLE.get_or_init(|| {
        cfg!(feature = "color") && std::env::var_os("NO_COLOR").is_none()
    })
}

#[cfg(feature = "color")]
mod ansi {
    use owo_colors::OwoColorize;

    pub(super) fn green(text: &str) -> String {
        text.green().to_string()
    }

    pub(super) fn cyan(text: &str) -> String {
        text.cyan().to_string()
    }

    pub(super) fn yellow(text: &str) -> String {
        text.yellow().to_string()
    }

    pub(super) fn gray(text: &str) -> String {
        text.bright_black().to_string()
    }
}

// The identity variant stands in when the optional crate is not compiled in.
#[cfg(not(feature = "color"))]
mod ansi {
    pub(super) fn green(text: &str) -> String {
        text.to_string()
    }

    pub(super) fn cyan(text: &str) -> String {
        text.to_string()
    }

    pub(super) fn yellow(text: &str) -> String {
        text.to_string()
    }

    pub(super) fn gray(text: &str) -> String {
        text.to_string()
    }
}
