//! Environment helpers

use std::path::Path;

use crate::error::OpenRouterError;

/// Load `KEY=VALUE` lines from an env file into the process environment.
///
/// Defaults to `.env` in the current directory. Values already present in
/// the environment are overridden, matching the usual development workflow
/// of editing `.env` and re-running. A missing file is not an error: it
/// returns `Ok(false)` so callers can fall back to the ambient environment.
///
/// Not safe to call concurrently with other environment mutation; intended
/// for process startup.
pub fn load_env_file(path: Option<&Path>) -> Result<bool, OpenRouterError> {
    let path = path.unwrap_or_else(|| Path::new(".env"));
    match dotenvy::from_path_override(path) {
        Ok(()) => Ok(true),
        Err(err) if err.not_found() => Ok(false),
        Err(err) => Err(OpenRouterError::EnvFile(err.to_string())),
    }
}

/// Whether the named environment variable is set and non-blank.
///
/// Side-effect-free; whitespace-only values count as unset.
pub fn api_key_present(name: &str) -> bool {
    std::env::var(name)
        .map(|value| !value.trim().is_empty())
        .unwrap_or(false)
}
