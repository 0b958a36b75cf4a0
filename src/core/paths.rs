// src/core/paths.rs

//! Turning a text-file target into a profile path.

use crate::{
    constants::{DEFAULT_PROFILE, HOME_MARKER},
    errors::EnvError,
};
use std::path::PathBuf;

/// Resolves a text-file target to the concrete profile path it addresses.
///
/// An empty target falls back to [`DEFAULT_PROFILE`] for every operation, so
/// `get`, `set` and `unset` always agree on which file they touch. A target
/// that is `~` or starts with `~/` has the `~` replaced by the current user's
/// home directory; anything else, including `~alice/...`, is used verbatim.
///
/// # Errors
/// Returns [`EnvError::HomeDirNotFound`] if the target is `~` or starts with `~/` and the
/// home directory cannot be determined.
pub fn resolve_profile_path(target: &str) -> Result<PathBuf, EnvError> {
    expand_home(target, dirs::home_dir)
}

/// Same as [`resolve_profile_path`], with the home directory lookup injected.
pub(crate) fn expand_home<F>(target: &str, home_dir: F) -> Result<PathBuf, EnvError>
where
    F: FnOnce() -> Option<PathBuf>,
{
    let target = if target.is_empty() {
        DEFAULT_PROFILE
    } else {
        target
    };

    // Only `~` and `~/...` name the current user's home; `~alice/...` is left as-is.
    let rest = match target.strip_prefix(HOME_MARKER) {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest,
        _ => return Ok(PathBuf::from(target)),
    };

    let home = home_dir().ok_or(EnvError::HomeDirNotFound)?;
    let mut expanded = home.into_os_string();
    expanded.push(rest);
    let resolved = PathBuf::from(expanded);
    log::debug!("Resolved '{}' to '{}'", target, resolved.display());
    Ok(resolved)
}
