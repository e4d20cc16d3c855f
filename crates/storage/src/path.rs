//! Path validation for backend-relative paths.

use std::path::{Component, Path, PathBuf};

use crate::error::{ErrorKind, Result};

/// Validates and normalizes a backend-relative path.
///
/// Rejects anything that would leave the backend root (`..` past the top),
/// Windows prefixes, null bytes, and paths that normalize to nothing. Version
/// codes end up in file names, so this is what stops a version like `../x`
/// from reaching the filesystem.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use lectern_storage::validate_path;
///
/// assert_eq!(validate_path("KJV.json").unwrap(), Path::new("KJV.json"));
/// assert_eq!(validate_path("./old/../KJV.json").unwrap(), Path::new("KJV.json"));
/// assert!(validate_path("../KJV.json").is_err());
/// assert!(validate_path("K\0JV.json").is_err());
/// ```
pub fn validate(path: impl AsRef<Path>) -> Result<PathBuf> {
    let original = path.as_ref();
    let invalid = || ErrorKind::InvalidPath(original.to_path_buf());
    let mut components = Vec::new();
    for component in original.components() {
        match component {
            Component::Normal(segment) => {
                // Null bytes survive Path::components() on Unix but truncate in syscalls.
                if segment.as_encoded_bytes().contains(&0) {
                    exn::bail!(invalid());
                }
                components.push(segment);
            },
            Component::CurDir | Component::RootDir => {},
            Component::Prefix(_) => exn::bail!(invalid()),
            Component::ParentDir => {
                if components.pop().is_none() {
                    exn::bail!(invalid());
                }
            },
        }
    }
    if components.is_empty() {
        exn::bail!(invalid());
    }
    Ok(components.into_iter().collect())
}
