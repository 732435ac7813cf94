//! Configuration loading from environment variables.

use std::env;
use std::path::PathBuf;

/// Runtime configuration for RyoPaste.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the hosted table service.
    pub store_url: String,
    /// API key sent with every store request.
    pub store_key: String,
    /// Public base URL used when building shareable paste links.
    pub public_url: String,
    /// Path of the JSON file backing the view history ledger.
    pub history_path: String,
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: String) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = resolve_home_dir() {
            return home.join(rest).to_string_lossy().to_string();
        }
    }
    path
}

fn resolve_home_dir() -> Option<PathBuf> {
    // Prefer explicit HOME if set (Unix, some Windows shells)
    if let Ok(home) = env::var("HOME") {
        if !home.trim().is_empty() {
            return Some(PathBuf::from(home));
        }
    }

    // Windows USERPROFILE (standard)
    if let Ok(profile) = env::var("USERPROFILE") {
        if !profile.trim().is_empty() {
            return Some(PathBuf::from(profile));
        }
    }

    // Fallback to current directory if available
    std::env::current_dir().ok()
}

const DEFAULT_STORE_URL: &str = "http://localhost:3000";

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Returns
    /// A populated [`Config`] with defaults applied when env vars are missing.
    pub fn from_env() -> Self {
        let store_url = env::var("STORE_URL")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_STORE_URL.to_string());
        Self {
            public_url: env::var("PUBLIC_URL")
                .ok()
                .filter(|value| !value.trim().is_empty())
                .map(|value| value.trim_end_matches('/').to_string())
                .unwrap_or_else(|| store_url.trim_end_matches('/').to_string()),
            store_key: env::var("STORE_KEY").unwrap_or_default(),
            history_path: env::var("HISTORY_PATH")
                .map(expand_tilde)
                .unwrap_or_else(|_| {
                    let home = resolve_home_dir().unwrap_or_else(|| PathBuf::from("."));
                    home.join(".cache")
                        .join("ryopaste")
                        .join("history.json")
                        .to_string_lossy()
                        .to_string()
                }),
            store_url,
        }
    }
}
