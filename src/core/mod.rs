// src/core/mod.rs

//! Pure parsing logic: no processes, no file I/O.

pub mod definitions;
pub mod paths;
pub mod registry_output;
