// src/system/backend.rs

//! Choosing between a shell profile and a registry scope.

use crate::{
    constants::{DEFAULT_PROFILE, TARGET_SYSTEM, TARGET_USER},
    errors::EnvError,
    models::{Backend, Platform, RegistryScope},
};

impl Backend {
    /// Picks the storage medium for `target` on `platform`.
    ///
    /// On POSIX every target names a profile and an empty one means
    /// `~/.bashrc`. On Windows only `""`, `"user"` and `"system"` are valid.
    ///
    /// # Errors
    /// Returns [`EnvError::InvalidTarget`] for any other target on Windows.
    pub fn select(platform: Platform, target: &str) -> Result<Self, EnvError> {
        let backend = match platform {
            Platform::Posix if target.is_empty() => Self::TextFile(DEFAULT_PROFILE.to_string()),
            Platform::Posix => Self::TextFile(target.to_string()),
            Platform::Windows => match target {
                "" | TARGET_USER => Self::Registry(RegistryScope::User),
                TARGET_SYSTEM => Self::Registry(RegistryScope::System),
                other => return Err(EnvError::InvalidTarget(other.to_string())),
            },
        };
        log::debug!("Selected backend {:?} for target '{}'", backend, target);
        Ok(backend)
    }

    /// The backend used when no target is given.
    pub fn default_for(platform: Platform) -> Self {
        match platform {
            Platform::Posix => Self::TextFile(DEFAULT_PROFILE.to_string()),
            Platform::Windows => Self::Registry(RegistryScope::User),
        }
    }
}
