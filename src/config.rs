//! Backend endpoint and logging configuration.
//!
//! DESIGN
//! ======
//! WASM builds have no process environment, so values are captured at compile
//! time (`option_env!`) and normalized once at startup. Everything else reads
//! the typed `ApiConfig` from context instead of hard-coding an origin.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";
pub const DEFAULT_LOG_LEVEL: log::Level = log::Level::Info;

/// Where REST calls are sent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL without a trailing slash. Empty means same-origin root.
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_API_BASE_URL.to_owned() }
    }
}

impl ApiConfig {
    /// Build config from the `LUMI_API_BASE_URL` value baked in at compile time.
    pub fn from_build_env() -> Self {
        Self::resolve(option_env!("LUMI_API_BASE_URL"))
    }

    /// Normalize a raw base URL.
    ///
    /// Accepts absolute `http(s)://` URLs and root-relative paths (`/api`).
    /// Anything else falls back to [`DEFAULT_API_BASE_URL`].
    pub fn resolve(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
            return Self::default();
        };
        if !is_supported_base(raw) {
            log::warn!("ignoring unsupported api base url {raw:?}; using {DEFAULT_API_BASE_URL}");
            return Self::default();
        }
        Self { base_url: raw.trim_end_matches('/').to_owned() }
    }

    /// Join `path` onto the base URL with exactly one separating slash.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

fn is_supported_base(raw: &str) -> bool {
    raw.starts_with("http://") || raw.starts_with("https://") || raw.starts_with('/')
}

/// Parse a log level name, defaulting to [`DEFAULT_LOG_LEVEL`].
pub fn log_level_from(raw: Option<&str>) -> log::Level {
    raw.and_then(|v| v.trim().parse::<log::Level>().ok())
        .unwrap_or(DEFAULT_LOG_LEVEL)
}
