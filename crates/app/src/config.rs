/// Client configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development; override via
/// environment variables (a `.env` file is honored).
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the fishing-log API, without a trailing slash.
    pub api_endpoint: String,
    /// Base URL photos are served from, without a trailing slash.
    pub photo_base_url: String,
}

/// Default API endpoint for local development.
const DEFAULT_API_ENDPOINT: &str = "http://localhost:8000/api";

/// Default photo bucket URL.
const DEFAULT_PHOTO_BASE_URL: &str = "https://fishing-journal.s3.amazonaws.com";

impl AppConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var          | Default                                     |
    /// |------------------|---------------------------------------------|
    /// | `API_ENDPOINT`   | `http://localhost:8000/api`                 |
    /// | `PHOTO_BASE_URL` | `https://fishing-journal.s3.amazonaws.com`  |
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let api_endpoint = std::env::var("API_ENDPOINT")
            .unwrap_or_else(|_| DEFAULT_API_ENDPOINT.into())
            .trim_end_matches('/')
            .to_string();

        let photo_base_url = std::env::var("PHOTO_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_PHOTO_BASE_URL.into())
            .trim_end_matches('/')
            .to_string();

        Self {
            api_endpoint,
            photo_base_url,
        }
    }
}
