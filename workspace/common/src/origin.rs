//! Base URL of the analysis service.
//!
//! The same origin serves the analyze endpoint and the generated plot images,
//! so both are derived from one [`ServiceOrigin`].

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Origin used when nothing else is configured.
pub const DEFAULT_SERVICE_ORIGIN: &str = "http://127.0.0.1:5001";

/// Path of the upload endpoint relative to the origin.
pub const ANALYZE_PATH: &str = "api/analyze";

/// Validated service base URL, stored without a trailing slash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceOrigin(String);

impl ServiceOrigin {
    /// Parse a configured origin such as `http://127.0.0.1:5001/`.
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let trimmed = raw.trim().trim_end_matches('/');

        let host = trimmed
            .strip_prefix("http://")
            .or_else(|| trimmed.strip_prefix("https://"))
            .ok_or_else(|| ConfigError::InvalidOrigin(raw.to_string()))?;

        if host.is_empty() || host.starts_with('/') {
            return Err(ConfigError::InvalidOrigin(raw.to_string()));
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// URL of the analyze endpoint.
    pub fn analyze_url(&self) -> String {
        self.resolve(ANALYZE_PATH)
    }

    /// URL of a server-hosted resource. The path is appended verbatim.
    pub fn resolve(&self, path: &str) -> String {
        format!("{}/{}", self.0, path)
    }
}

impl Default for ServiceOrigin {
    fn default() -> Self {
        Self(DEFAULT_SERVICE_ORIGIN.to_string())
    }
}

impl FromStr for ServiceOrigin {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ServiceOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_origin() {
        let origin = ServiceOrigin::default();
        assert_eq!(origin.analyze_url(), "http://127.0.0.1:5001/api/analyze");
        assert_eq!(origin.resolve("out/a.png"), "http://127.0.0.1:5001/out/a.png");
    }

    #[test]
    fn test_parse_strips_trailing_slashes() {
        let origin = ServiceOrigin::parse("  https://analysis.example.com:8443// ").unwrap();
        assert_eq!(origin.as_str(), "https://analysis.example.com:8443");
        assert_eq!(origin.analyze_url(), "https://analysis.example.com:8443/api/analyze");
    }

    #[test]
    fn test_parse_rejects_invalid_values() {
        for raw in ["", "   ", "127.0.0.1:5001", "ftp://host", "http://", "http:///path"] {
            assert_eq!(
                ServiceOrigin::parse(raw),
                Err(ConfigError::InvalidOrigin(raw.to_string())),
                "expected {raw:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_resolve_is_verbatim() {
        let origin: ServiceOrigin = "http://localhost:5001".parse().unwrap();
        assert_eq!(origin.resolve("static/plots/my plot.png"), "http://localhost:5001/static/plots/my plot.png");
        assert_eq!(origin.resolve("/abs.png"), "http://localhost:5001//abs.png");
    }
}
