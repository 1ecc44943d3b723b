//! Package registry existence checks.

use reqwest::blocking::Client;
use reqwest::StatusCode;
use std::time::Duration;

use crate::error::{IgniteError, Result};

/// Answers "is this package published?".
pub trait PackageRegistry {
    /// Whether `package` exists in the registry.
    fn exists(&self, package: &str) -> Result<bool>;
}

/// Queries an npm-compatible registry over HTTP.
pub struct HttpRegistry {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl HttpRegistry {
    /// Create a registry client with the default 30-second timeout.
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_timeout(base_url, Duration::from_secs(30))
    }

    /// Create a registry client with a custom timeout.
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("ignite/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(anyhow::Error::from)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        })
    }

    /// Get the configured timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Document URL for a package. Scoped names keep their `@` but have
    /// the `/` escaped, as the npm registry expects.
    pub fn package_url(&self, package: &str) -> String {
        format!("{}/{}", self.base_url, package.replace('/', "%2F"))
    }
}

impl PackageRegistry for HttpRegistry {
    fn exists(&self, package: &str) -> Result<bool> {
        let url = self.package_url(package);
        tracing::debug!(%url, "querying registry");

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/vnd.npm.install-v1+json")
            .send()
            .map_err(|e| IgniteError::RegistryUnavailable {
                module: package.to_string(),
                message: e.to_string(),
            })?;

        match response.status() {
            status if status.is_success() => Ok(true),
            StatusCode::NOT_FOUND => Ok(false),
            status => Err(IgniteError::RegistryUnavailable {
                module: package.to_string(),
                message: format!("HTTP {} from {}", status, url),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[test]
    fn default_timeout_is_30_seconds() {
        let registry = HttpRegistry::new("https://registry.npmjs.org").unwrap();
        assert_eq!(registry.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn package_url_escapes_scopes() {
        let registry = HttpRegistry::new("https://registry.npmjs.org/").unwrap();
        assert_eq!(
            registry.package_url("ignite-maps"),
            "https://registry.npmjs.org/ignite-maps"
        );
        assert_eq!(
            registry.package_url("@infinitered/ignite-maps"),
            "https://registry.npmjs.org/@infinitered%2Fignite-maps"
        );
    }

    #[test]
    fn existing_package_is_found() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/ignite-vector-icons");
            then.status(200).body(r#"{"name":"ignite-vector-icons"}"#);
        });

        let registry = HttpRegistry::new(&server.base_url()).unwrap();
        assert!(registry.exists("ignite-vector-icons").unwrap());
        mock.assert();
    }

    #[test]
    fn missing_package_is_not_an_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/ignite-nope");
            then.status(404).body(r#"{"error":"Not found"}"#);
        });

        let registry = HttpRegistry::new(&server.base_url()).unwrap();
        assert!(!registry.exists("ignite-nope").unwrap());
    }

    #[test]
    fn server_errors_are_registry_unavailable() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/ignite-flaky");
            then.status(503);
        });

        let registry = HttpRegistry::new(&server.base_url()).unwrap();
        let err = registry.exists("ignite-flaky").unwrap_err();
        assert!(matches!(err, IgniteError::RegistryUnavailable { .. }));
        assert!(err.to_string().contains("503"));
    }

    #[test]
    fn unreachable_registry_is_registry_unavailable() {
        let registry =
            HttpRegistry::with_timeout("http://127.0.0.1:9", Duration::from_secs(2)).unwrap();
        let err = registry.exists("ignite-anything").unwrap_err();
        assert!(matches!(err, IgniteError::RegistryUnavailable { .. }));
    }
}
