//! File System Module
//!
//! Read-only filesystem over resources embedded in the binary.
//! - ResourceFilesystem: immutable path -> bytes table
//! - ResourceSetBuilder: explicit construction, also used by `embed_resources!`

pub mod types;
pub mod embedded_fs;

pub use types::*;
pub use embedded_fs::{ResourceFilesystem, ResourceSetBuilder};
