//! Runtime configuration passed explicitly into the pipeline.

/// API root used when neither `--base-url` nor `TODOREPORT_BASE_URL` is set.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Settings for talking to the upstream API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// API root without a trailing slash.
    pub base_url: String,
}

impl Config {
    /// Construct from a user-supplied API root.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed() {
        assert_eq!(Config::new("http://api.test/").base_url, "http://api.test");
        assert_eq!(Config::new("http://api.test//").base_url, "http://api.test");
    }

    #[test]
    fn test_default_points_at_jsonplaceholder() {
        assert_eq!(Config::default().base_url, DEFAULT_BASE_URL);
    }
}
