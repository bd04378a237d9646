use std::time::Duration;

use crate::pages::FALLBACK_BRAND_NAME;

/// Page studio configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | STUDIO_ENVIRONMENT | development | runtime environment |
/// | LOG_LEVEL | info | tracing max level |
/// | LOG_DIR | (unset) | rolling log directory |
/// | ASSET_RESOLVE_TIMEOUT_MS | 5000 | per-reference resolver timeout |
/// | FALLBACK_BRAND_NAME | Goodness | brand name assumed for nameless clone sources |
/// | ASSET_BASE_URL | /assets | prefix joined onto storage references |
///
/// # Example
///
/// ```ignore
/// LOG_LEVEL=debug ASSET_RESOLVE_TIMEOUT_MS=2000 cargo run -p page-studio -- soil-king "Soil King"
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// development | staging | production
    pub environment: String,
    pub log_level: String,
    /// Daily rolling log files are written here when the directory exists
    pub log_dir: Option<String>,
    pub asset_resolve_timeout_ms: u64,
    pub fallback_brand_name: String,
    pub asset_base_url: String,
}

impl Config {
    /// Load from the environment, falling back to defaults
    pub fn from_env() -> Self {
        Self {
            environment: std::env::var("STUDIO_ENVIRONMENT")
                .unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.trim().is_empty()),
            asset_resolve_timeout_ms: std::env::var("ASSET_RESOLVE_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5000),
            fallback_brand_name: std::env::var("FALLBACK_BRAND_NAME")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| FALLBACK_BRAND_NAME.into()),
            asset_base_url: std::env::var("ASSET_BASE_URL").unwrap_or_else(|_| "/assets".into()),
        }
    }

    /// Environment config with the values tests usually pin
    pub fn with_overrides(asset_resolve_timeout_ms: u64, fallback_brand_name: impl Into<String>) -> Self {
        let mut config = Self::from_env();
        config.asset_resolve_timeout_ms = asset_resolve_timeout_ms;
        config.fallback_brand_name = fallback_brand_name.into();
        config
    }

    pub fn asset_timeout(&self) -> Duration {
        Duration::from_millis(self.asset_resolve_timeout_ms)
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides() {
        let config = Config::with_overrides(250, "Acme");
        assert_eq!(config.asset_timeout(), Duration::from_millis(250));
        assert_eq!(config.fallback_brand_name, "Acme");
    }
}
