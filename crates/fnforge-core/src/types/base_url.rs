//! Backend base URL type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;

use crate::error::Error;

/// The default backend when none has been configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// A validated backend base URL.
///
/// Endpoint joining always produces exactly one separating slash,
/// regardless of trailing slashes on the base or leading slashes on the
/// endpoint.
///
/// # Example
///
/// ```
/// use fnforge_core::BaseUrl;
///
/// let base = BaseUrl::new("http://localhost:8000/").unwrap();
/// assert_eq!(base.join("/api/functions/"),
///            "http://localhost:8000/api/functions/");
/// assert_eq!(base.join("api/functions/"),
///            "http://localhost:8000/api/functions/");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BaseUrl(Url);

impl BaseUrl {
    /// Create a new base URL from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an [`Error::InvalidInput`] if the URL is not an absolute
    /// http(s) URL with a host.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref();
        let url = Url::parse(s).map_err(|e| Error::InvalidInput {
            message: format!("invalid base URL '{}': {}", s, e),
        })?;

        Self::validate(&url, s)?;

        Ok(Self(url))
    }

    /// Returns the full URL for an endpoint path, with exactly one
    /// separating slash.
    pub fn join(&self, endpoint: &str) -> String {
        let base = self.0.as_str().trim_end_matches('/');
        let endpoint = endpoint.trim_start_matches('/');
        format!("{}/{}", base, endpoint)
    }

    /// Returns the base URL as a string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the host string.
    pub fn host(&self) -> Option<&str> {
        self.0.host_str()
    }

    fn validate(url: &Url, original: &str) -> Result<(), Error> {
        if url.cannot_be_a_base() {
            return Err(Error::InvalidInput {
                message: format!("invalid base URL '{}': must be an absolute URL", original),
            });
        }

        let scheme = url.scheme();
        if scheme != "http" && scheme != "https" {
            return Err(Error::InvalidInput {
                message: format!("invalid base URL '{}': must use http or https", original),
            });
        }

        if url.host_str().is_none() {
            return Err(Error::InvalidInput {
                message: format!("invalid base URL '{}': must have a host", original),
            });
        }

        Ok(())
    }
}

impl Default for BaseUrl {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL).expect("default base URL is valid")
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BaseUrl {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for BaseUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.0.as_str())
    }
}

impl<'de> Deserialize<'de> for BaseUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        BaseUrl::new(&s).map_err(serde::de::Error::custom)
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_localhost_http() {
        let base = BaseUrl::new("http://localhost:8000").unwrap();
        assert_eq!(base.host(), Some("localhost"));
    }

    #[test]
    fn valid_https_url() {
        let base = BaseUrl::new("https://api.example.com").unwrap();
        assert_eq!(base.host(), Some("api.example.com"));
    }

    #[test]
    fn join_normalizes_to_one_slash() {
        let base = BaseUrl::new("http://localhost:8000").unwrap();
        assert_eq!(
            base.join("/api/functions/"),
            "http://localhost:8000/api/functions/"
        );

        let base = BaseUrl::new("http://localhost:8000/").unwrap();
        assert_eq!(
            base.join("api/functions/"),
            "http://localhost:8000/api/functions/"
        );
    }

    #[test]
    fn invalid_scheme() {
        assert!(BaseUrl::new("ftp://example.com").is_err());
    }

    #[test]
    fn invalid_relative_url() {
        assert!(BaseUrl::new("/api/functions/").is_err());
    }

    #[test]
    fn default_is_local_backend() {
        assert_eq!(BaseUrl::default().host(), Some("localhost"));
    }
}
