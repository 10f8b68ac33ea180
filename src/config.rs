pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Runtime configuration, read from the environment after `dotenv`.
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self::with_base_url(
            std::env::var("SONGDROP_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
        )
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_stripped() {
        let config = Config::with_base_url("http://radio.local:5000/");
        assert_eq!(config.base_url, "http://radio.local:5000");
    }

    #[test]
    fn default_base_url_is_kept_as_is() {
        let config = Config::with_base_url(DEFAULT_BASE_URL);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }
}
