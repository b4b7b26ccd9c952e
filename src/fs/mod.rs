//! Filesystem utilities for promptline.
//!
//! Workspace state files are small and rewritten whole, so every write goes
//! through the atomic helpers here.

pub mod atomic;

pub use atomic::{atomic_write_file, remove_if_exists};
