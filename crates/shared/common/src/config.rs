//! Tool configuration loaded from environment variables.

use std::env;

/// Default log filter when neither `CONTRACTS_LOG` nor `RUST_LOG` is set
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Log filter override specific to this tool
pub const ENV_LOG: &str = "CONTRACTS_LOG";

/// Fallback log filter shared with other tracing-based tools
pub const ENV_RUST_LOG: &str = "RUST_LOG";

/// Pretty-print JSON output ("1", "true", "yes", "on")
pub const ENV_PRETTY: &str = "CONTRACTS_PRETTY";

/// Configuration shared by the command-line tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolConfig {
    /// tracing `EnvFilter` directive
    pub log_level: String,
    /// Pretty-print JSON output
    pub pretty: bool,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            pretty: false,
        }
    }
}

impl ToolConfig {
    /// Load configuration from environment variables (and `.env` if present).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            log_level: non_blank(lookup(ENV_LOG))
                .or_else(|| non_blank(lookup(ENV_RUST_LOG)))
                .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            pretty: lookup(ENV_PRETTY).map(|v| parse_flag(&v)).unwrap_or(false),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
