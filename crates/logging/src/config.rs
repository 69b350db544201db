//! crates/logging/src/config.rs
//! Verbosity configuration for the sstr targets.

use std::fmt;

/// Target prefix shared by the storage (`sstr::buffer`) and formatter
/// (`sstr::format`) events.
const SSTR_TARGET: &str = "sstr";

/// Severity threshold for log events.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LogLevel {
    /// Errors only.
    Error,
    /// Warnings and errors.
    #[default]
    Warn,
    /// Informational messages.
    Info,
    /// Storage and rendering diagnostics.
    Debug,
    /// Every event, including heap growth.
    Trace,
}

impl LogLevel {
    /// Lowercase name as accepted by filter directives.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Logging configuration.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LogConfig {
    /// Threshold for the sstr targets.
    pub level: LogLevel,
    /// Threshold for every other target.
    pub default_level: LogLevel,
    /// Include event targets in the output.
    pub with_target: bool,
    /// Colour the output.
    pub ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Warn,
            default_level: LogLevel::Warn,
            with_target: true,
            ansi: false,
        }
    }
}

impl LogConfig {
    /// Create a configuration from a `-v` count.
    ///
    /// 0 keeps warnings only, 1 enables info, 2 debug and 3 or more trace.
    pub fn from_verbose_level(level: u8) -> Self {
        let level = match level {
            0 => LogLevel::Warn,
            1 => LogLevel::Info,
            2 => LogLevel::Debug,
            _ => LogLevel::Trace,
        };
        Self {
            level,
            ..Self::default()
        }
    }

    /// Threshold for the sstr targets.
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// Filter directives in `EnvFilter` syntax.
    pub fn filter_directives(&self) -> String {
        let mut directives = self.default_level.as_str().to_owned();
        if self.level != self.default_level {
            directives.push(',');
            directives.push_str(SSTR_TARGET);
            directives.push('=');
            directives.push_str(self.level.as_str());
        }
        directives
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_level_is_warn_only() {
        let config = LogConfig::from_verbose_level(0);
        assert_eq!(config.level(), LogLevel::Warn);
        assert_eq!(config.filter_directives(), "warn");
    }

    #[test]
    fn levels_increase_with_count() {
        assert_eq!(LogConfig::from_verbose_level(1).level(), LogLevel::Info);
        assert_eq!(LogConfig::from_verbose_level(2).level(), LogLevel::Debug);
        assert_eq!(LogConfig::from_verbose_level(3).level(), LogLevel::Trace);
        assert_eq!(LogConfig::from_verbose_level(u8::MAX).level(), LogLevel::Trace);
    }

    #[test]
    fn directives_scope_sstr_targets() {
        let config = LogConfig::from_verbose_level(3);
        assert_eq!(config.filter_directives(), "warn,sstr=trace");
    }

    #[test]
    fn level_ordering_follows_verbosity() {
        assert!(LogLevel::Error < LogLevel::Warn);
        assert!(LogLevel::Debug < LogLevel::Trace);
        assert_eq!(LogLevel::Info.to_string(), "info");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_uses_lowercase_levels() {
        let config: LogConfig = serde_json::from_str(r#"{"level":"debug"}"#).unwrap();
        assert_eq!(config.level, LogLevel::Debug);
        assert_eq!(config.default_level, LogLevel::Warn);
        assert!(config.with_target);

        let json = serde_json::to_string(&LogConfig::from_verbose_level(1)).unwrap();
        assert!(json.contains(r#""level":"info""#));
    }
}
