/// Default content API base URL.
pub const DEFAULT_CONTENT_API_BASE_URL: &str = "https://deccanservices.demovoting.com/api";

/// Default base URL for relative media paths.
pub const DEFAULT_UPLOAD_BASE_URL: &str = "https://deccanservices.demovoting.com/uploads";

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
    /// Base URL of the remote content API.
    pub content_api_base_url: String,
    /// Base URL that relative media paths resolve against.
    pub upload_base_url: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                                          |
    /// |------------------------|--------------------------------------------------|
    /// | `HOST`                 | `0.0.0.0`                                        |
    /// | `PORT`                 | `3000`                                           |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`                          |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                                             |
    /// | `CONTENT_API_BASE_URL` | `https://deccanservices.demovoting.com/api`      |
    /// | `UPLOAD_BASE_URL`      | `https://deccanservices.demovoting.com/uploads`  |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins = parse_origins(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:5173".into()),
        );

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let content_api_base_url = std::env::var("CONTENT_API_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_CONTENT_API_BASE_URL.into());

        let upload_base_url =
            std::env::var("UPLOAD_BASE_URL").unwrap_or_else(|_| DEFAULT_UPLOAD_BASE_URL.into());

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            content_api_base_url,
            upload_base_url,
        }
    }
}

/// Split a comma-separated origin list, dropping blanks.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
