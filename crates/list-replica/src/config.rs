//! API Configuration

/// Build-time variable holding the API base address
pub const API_URL_VAR: &str = "LIST_MANAGER_API_URL";

/// Used when no base address was configured
pub const DEFAULT_API_URL: &str = "http://localhost:8080/api/v1";

/// Where the task API lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Reads `LIST_MANAGER_API_URL` as captured at compile time.
    ///
    /// Browser builds have no process environment, so the address is baked
    /// in by the bundler the same way front-end "public" env vars are.
    pub fn from_env() -> Self {
        match option_env!("LIST_MANAGER_API_URL") {
            Some(url) if !url.trim().is_empty() => Self::new(url),
            _ => {
                log::info!("{API_URL_VAR} not set, using {DEFAULT_API_URL}");
                Self::new(DEFAULT_API_URL)
            }
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path such as `/tasks/find-all`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}
