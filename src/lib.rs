//! resource-fs - Resources compiled into the binary, read back by path
//!
//! Declare a resource set with [`embed_resources!`] and open entries through
//! its `get_filesystem()` accessor, or build a [`ResourceFilesystem`] directly.

pub mod fs;
mod embed;

pub use fs::*;

#[doc(hidden)]
pub mod __private {
    pub use lazy_static::lazy_static;
}
