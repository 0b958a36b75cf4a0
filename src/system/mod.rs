//! # System Interaction Layer
//!
//! Everything that leaves the process: running `bash`, `reg` and `setx`,
//! touching profile files on disk, and deciding which of those the host uses.
//!
//! ## Modules
//!
//! - **`backend`**: Selects a shell profile or a registry scope from a target string.
//! - **`executor`**: The [`executor::CommandRunner`] seam and its process-backed implementation.
//! - **`profile`**: Reads and atomically rewrites profiles, and builds the append-and-source script.
//! - **`registry`**: Argument lists for `reg query`, `reg delete` and `setx`.

pub mod backend;
pub mod executor;
pub mod profile;
pub mod registry;
