//! # Config - runtime settings
//!
//! All settings come from environment variables, read once at start-up:
//!
//! ```text
//! TSC_MAX_DIM        simplex dimension bound for the algorithm  (default: 3)
//! TSC_STRICT_HEADER  fail on inconsistent header fields         (default: "false")
//! TSC_KEEP_DIAGONAL  keep zero-persistence pairs                (default: "false")
//! TSC_LOG_FORMAT     "text" or "json" log lines on stderr       (default: "text")
//! ```
//!
//! Values that do not parse fall back to the default.

/// Log line format for the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Pipeline settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Upper simplex-dimension bound handed to the persistence algorithm.
    pub max_dimension: usize,
    /// Reject files whose diagnostic header fields disagree with the counts.
    pub strict_header: bool,
    /// Report intervals with `birth == death`.
    pub keep_zero_persistence: bool,
    pub log_format: LogFormat,
}

pub const DEFAULT_MAX_DIMENSION: usize = 3;

impl Default for Config {
    fn default() -> Self {
        Self {
            max_dimension: DEFAULT_MAX_DIMENSION,
            strict_header: false,
            keep_zero_persistence: false,
            log_format: LogFormat::Text,
        }
    }
}

impl Config {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup` (a stand-in for the
    /// environment in tests).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let env_or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());
        let defaults = Self::default();

        let max_dimension = env_or("TSC_MAX_DIM", "3")
            .trim()
            .parse()
            .unwrap_or(defaults.max_dimension);
        let strict_header = parse_bool(&env_or("TSC_STRICT_HEADER", "false")).unwrap_or(defaults.strict_header);
        let keep_zero_persistence =
            parse_bool(&env_or("TSC_KEEP_DIAGONAL", "false")).unwrap_or(defaults.keep_zero_persistence);
        let log_format = match env_or("TSC_LOG_FORMAT", "text").trim().to_lowercase().as_str() {
            "json" => LogFormat::Json,
            _ => LogFormat::Text,
        };

        Self {
            max_dimension,
            strict_header,
            keep_zero_persistence,
            log_format,
        }
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
