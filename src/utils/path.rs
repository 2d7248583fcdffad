//! Helpers for user-supplied output and config paths.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Resolve a leading `~` (alone or followed by a separator) to the home directory.
///
/// `~user` forms and paths without a home directory are returned unchanged.
pub fn expand_tilde(path: &str) -> PathBuf {
    let rest = match path.strip_prefix('~') {
        Some("") => "",
        Some(rest) if rest.starts_with('/') || rest.starts_with(std::path::MAIN_SEPARATOR) => {
            &rest[1..]
        }
        _ => return PathBuf::from(path),
    };

    match dirs::home_dir() {
        Some(home) if rest.is_empty() => home,
        Some(home) => home.join(rest),
        None => PathBuf::from(path),
    }
}

/// Sibling of `target` that output is written to before being renamed into place.
///
/// `out/edges.csv` stages as `out/.edges.csv.tmp`, on the same filesystem so
/// the final rename does not copy.
pub fn staging_path(target: &Path) -> PathBuf {
    let mut name = OsString::from(".");
    name.push(target.file_name().unwrap_or(target.as_os_str()));
    name.push(".tmp");
    target.with_file_name(name)
}
