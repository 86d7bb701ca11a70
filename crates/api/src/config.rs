use gamebase_catalog::{DEFAULT_ANDROID_CATALOG_URL, DEFAULT_IOS_CATALOG_URL};

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Directory served at the root for any path no API route matches.
    pub static_dir: String,
    /// Source of the Android top-100 catalog.
    pub android_catalog_url: String,
    /// Source of the iOS top-100 catalog.
    pub ios_catalog_url: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `STATIC_DIR`           | `static`                   |
    /// | `ANDROID_CATALOG_URL`  | S3 `android.top100.json`   |
    /// | `IOS_CATALOG_URL`      | S3 `ios.top100.json`       |
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// Panics on unparseable numeric values so misconfiguration fails fast
    /// at startup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let host = var("HOST", "0.0.0.0");

        let port: u16 = var("PORT", "3000")
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = var("CORS_ORIGINS", "http://localhost:5173")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = var("REQUEST_TIMEOUT_SECS", "30")
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            static_dir: var("STATIC_DIR", "static"),
            android_catalog_url: var("ANDROID_CATALOG_URL", DEFAULT_ANDROID_CATALOG_URL),
            ios_catalog_url: var("IOS_CATALOG_URL", DEFAULT_IOS_CATALOG_URL),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> ServerConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let config = config_from(&[]);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.cors_origins, vec!["http://localhost:5173"]);
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.static_dir, "static");
        assert_eq!(config.android_catalog_url, DEFAULT_ANDROID_CATALOG_URL);
        assert_eq!(config.ios_catalog_url, DEFAULT_IOS_CATALOG_URL);
    }

    #[test]
    fn overrides() {
        let config = config_from(&[
            ("PORT", "8080"),
            ("CORS_ORIGINS", "https://a.example, ,https://b.example"),
            ("IOS_CATALOG_URL", "http://localhost:9000/ios.json"),
        ]);
        assert_eq!(config.port, 8080);
        assert_eq!(
            config.cors_origins,
            vec!["https://a.example", "https://b.example"]
        );
        assert_eq!(config.ios_catalog_url, "http://localhost:9000/ios.json");
    }

    #[test]
    #[should_panic(expected = "PORT must be a valid u16")]
    fn invalid_port_panics() {
        config_from(&[("PORT", "not-a-port")]);
    }
}
