//! JSON file helpers

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::Path;

use crate::error::OpenRouterError;

/// Serialize `value` as pretty-printed JSON to `path`.
///
/// Parent directories are created as needed. Disk-level failures propagate
/// as [`OpenRouterError::Io`].
pub fn save_json<T: Serialize>(value: &T, path: &Path) -> Result<(), OpenRouterError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let text = serde_json::to_string_pretty(value)?;
    std::fs::write(path, text)?;
    Ok(())
}

/// Deserialize a JSON file into `T`.
///
/// Use `T = serde_json::Value` when the shape is not known in advance.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, OpenRouterError> {
    let text = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

/// Create a directory (and parents) if absent. Idempotent.
pub fn ensure_directory(path: &Path) -> Result<(), OpenRouterError> {
    std::fs::create_dir_all(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    #[test]
    fn save_then_load_roundtrips_structurally() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        let value = json!({"a": 1});

        save_json(&value, &path).unwrap();
        let loaded: Value = load_json(&path).unwrap();
        assert_eq!(loaded, value);
    }

    #[test]
    fn save_creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("data.json");

        save_json(&json!([1, 2, 3]), &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn load_missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_json::<Value>(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, OpenRouterError::Io(_)));
    }

    #[test]
    fn load_invalid_json_is_a_json_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{not json").unwrap();

        let err = load_json::<Value>(&path).unwrap_err();
        assert!(matches!(err, OpenRouterError::Json(_)));
    }

    #[test]
    fn ensure_directory_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a").join("b");

        ensure_directory(&path).unwrap();
        assert!(path.is_dir());
        ensure_directory(&path).unwrap();
        assert!(path.is_dir());
    }
}
