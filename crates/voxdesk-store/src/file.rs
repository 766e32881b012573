//! Read and write helpers for JSON store files.

use std::io::ErrorKind;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::StoreError;

/// Loads a JSON array from `path`, treating a missing or corrupt file as empty.
///
/// Never fails. A file that exists but cannot be read or parsed is logged at
/// `warn` level and reported as an empty sequence.
pub fn load_array_or_empty<T: DeserializeOwned>(path: &Path) -> Vec<T> {
    match read_json::<Vec<T>>(path) {
        Ok(items) => items,
        Err(StoreError::NotFound(_)) => {
            tracing::debug!(path = %path.display(), "store file absent, starting empty");
            Vec::new()
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), "store file unreadable, starting empty: {}", e);
            Vec::new()
        }
    }
}

/// Loads a JSON array from `path` one record at a time.
///
/// Like [`load_array_or_empty`], but a record that does not match `T` is
/// skipped with a warning instead of discarding the whole file.
pub fn load_records_or_empty<T: DeserializeOwned>(path: &Path) -> Vec<T> {
    load_array_or_empty::<Value>(path)
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value(record) {
            Ok(item) => Some(item),
            Err(e) => {
                tracing::warn!(path = %path.display(), index, "skipping unreadable record: {}", e);
                None
            }
        })
        .collect()
}

/// Reads and deserializes the JSON document at `path`.
///
/// # Errors
///
/// Returns `StoreError::NotFound` if the file does not exist,
/// `StoreError::Io` if it cannot be read, or `StoreError::Serialization`
/// if its contents are not valid JSON of the expected shape.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, StoreError> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(StoreError::NotFound(path.to_path_buf()))
        }
        Err(e) => return Err(StoreError::Io(e)),
    };
    Ok(serde_json::from_str(&contents)?)
}

/// Serializes `value` as pretty-printed JSON and writes it to `path`.
///
/// Missing parent directories are created. The file is replaced in full and
/// always ends with a newline.
///
/// # Errors
///
/// Returns `StoreError::Serialization` if `value` cannot be serialized or
/// `StoreError::Io` if the directory or file cannot be written.
pub fn write_json_pretty<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), StoreError> {
    let mut contents = serde_json::to_string_pretty(value)?;
    contents.push('\n');

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, contents)?;
    Ok(())
}
