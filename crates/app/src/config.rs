use std::path::PathBuf;
use std::time::Duration;

use bbsr_browse::controller::DEFAULT_DEBOUNCE;
use bbsr_core::pagination::DEFAULT_PAGE_SIZE;

/// Application configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct GuideConfig {
    /// Base URL of the attractions API (default: `http://localhost:5000`).
    pub api_url: String,
    /// Items per page (default: `12`).
    pub page_size: u32,
    /// Quiet period before a search fetch fires (default: `100` ms).
    pub debounce: Duration,
    /// Directory for the session file, when persistence is wanted.
    pub session_dir: Option<PathBuf>,
}

impl GuideConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var             | Default                 |
    /// |---------------------|-------------------------|
    /// | `GUIDE_API_URL`     | `http://localhost:5000` |
    /// | `GUIDE_PAGE_SIZE`   | `12`                    |
    /// | `GUIDE_DEBOUNCE_MS` | `100`                   |
    /// | `GUIDE_SESSION_DIR` | unset (no persistence)  |
    pub fn from_env() -> Self {
        let api_url =
            std::env::var("GUIDE_API_URL").unwrap_or_else(|_| "http://localhost:5000".into());

        let page_size: u32 = std::env::var("GUIDE_PAGE_SIZE")
            .unwrap_or_else(|_| DEFAULT_PAGE_SIZE.to_string())
            .parse()
            .expect("GUIDE_PAGE_SIZE must be a valid u32");

        let debounce_ms: u64 = std::env::var("GUIDE_DEBOUNCE_MS")
            .unwrap_or_else(|_| DEFAULT_DEBOUNCE.as_millis().to_string())
            .parse()
            .expect("GUIDE_DEBOUNCE_MS must be a valid u64");

        let session_dir = std::env::var("GUIDE_SESSION_DIR").ok().map(PathBuf::from);

        Self {
            api_url,
            page_size,
            debounce: Duration::from_millis(debounce_ms),
            session_dir,
        }
    }
}
