/// Output format for diagnostic logs written to stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

pub struct Config {
    pub log_format: LogFormat,
    /// Default `EnvFilter` directive when `RUST_LOG` is unset
    pub default_log_filter: String,
    /// Emit ANSI colors in menus and messages
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_format: LogFormat::Text,
            default_log_filter: "warn".to_string(),
            color: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let defaults = Self::default();

        let log_format = match std::env::var("GV_LOG_FORMAT") {
            Ok(value) if value.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Text,
        };
        let default_log_filter =
            std::env::var("GV_LOG_LEVEL").unwrap_or(defaults.default_log_filter);
        let color = std::env::var_os("NO_COLOR").is_none()
            && std::env::var("GV_COLOR")
                .map(|value| parse_bool(&value).unwrap_or(true))
                .unwrap_or(defaults.color);

        Self {
            log_format,
            default_log_filter,
            color,
        }
    }

    /// Plain output, no colors. Used by tests and non-interactive runs.
    pub fn plain() -> Self {
        Self {
            color: false,
            ..Self::default()
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
