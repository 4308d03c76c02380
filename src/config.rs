//! Backend endpoint configuration.
//!
//! The base URL comes from the `--url` flag when given, else the
//! `CITADASH_API_URL` environment variable, else a localhost default
//! matching the backend's development port.

use std::env;

pub const BASE_URL_ENV: &str = "CITADASH_API_URL";
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Resolve the backend base URL from explicit flag and environment
/// values. Pure function: the caller supplies both inputs.
pub fn resolve_base_url(flag: Option<&str>, env_value: Option<&str>) -> String {
    let url = flag
        .or(env_value)
        .filter(|s| !s.trim().is_empty())
        .unwrap_or(DEFAULT_BASE_URL);
    url.trim_end_matches('/').to_string()
}

/// Resolve the base URL against the process environment.
pub fn base_url(flag: Option<&str>) -> String {
    let from_env = env::var(BASE_URL_ENV).ok();
    resolve_base_url(flag, from_env.as_deref())
}
