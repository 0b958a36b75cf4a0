//! Persistent, user- or system-scoped environment variables.
//!
//! On POSIX hosts variables are `export KEY=VALUE` lines in a shell profile
//! (`~/.bashrc` by default). On Windows they live in the registry and are
//! edited through `reg` and `setx`.
//!
//! ```no_run
//! globalenv::set("EDITOR", "nano")?;
//! assert_eq!(globalenv::get("EDITOR")?, "nano");
//! globalenv::unset("EDITOR")?;
//! # Ok::<(), globalenv::EnvError>(())
//! ```

pub mod cli;
pub mod constants;
pub mod core;
pub mod env;
pub mod errors;
pub mod models;
pub mod system;

pub use env::{GlobalEnv, get, set, unset};
pub use errors::EnvError;
