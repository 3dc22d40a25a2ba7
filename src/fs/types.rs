//! Embedded Resource Types
//!
//! Core types for the read-only embedded resource filesystem.

use std::borrow::Cow;
use std::io::Cursor;
use std::ops::{Deref, Range};
use std::ptr;

use base64::Engine;
use thiserror::Error;

/// Embedded resource errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResourceError {
    #[error("ENOENT: no such embedded resource, open '{path}'")]
    NotFound { path: String },

    #[error("EEXIST: duplicate embedded resource '{path}'")]
    Duplicate { path: String },

    #[error("EINVAL: embedded resource path is empty")]
    EmptyPath,

    #[error("EILSEQ: embedded resource is not valid UTF-8 '{path}'")]
    InvalidUtf8 { path: String },
}

/// Supported output encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BufferEncoding {
    #[default]
    Utf8,
    Base64,
    Hex,
}

impl BufferEncoding {
    /// Parse encoding from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "utf8" | "utf-8" => Some(Self::Utf8),
            "base64" => Some(Self::Base64),
            "hex" => Some(Self::Hex),
            _ => None,
        }
    }
}

/// Convert bytes to string with encoding
pub fn from_buffer(buffer: &[u8], encoding: BufferEncoding) -> String {
    match encoding {
        BufferEncoding::Base64 => base64::engine::general_purpose::STANDARD.encode(buffer),
        BufferEncoding::Hex => buffer.iter().map(|b| format!("{:02x}", b)).collect(),
        BufferEncoding::Utf8 => String::from_utf8_lossy(buffer).into_owned(),
    }
}

/// A single resource stored in a filesystem table.
///
/// Declared resources borrow bytes baked into the binary; resources added
/// through the builder may own theirs. Neither changes after construction.
#[derive(Debug, Clone)]
pub(crate) struct EmbeddedResource {
    path: String,
    data: Cow<'static, [u8]>,
}

impl EmbeddedResource {
    pub(crate) fn new(path: String, data: Cow<'static, [u8]>) -> Self {
        Self { path, data }
    }

    /// Normalized path of the resource
    pub(crate) fn path(&self) -> &str {
        &self.path
    }

    pub(crate) fn len(&self) -> usize {
        self.data.len()
    }

    /// Borrow the resource as an open file view.
    pub(crate) fn as_file(&self) -> EmbeddedFile<'_> {
        EmbeddedFile {
            path: &self.path,
            data: &self.data,
        }
    }
}

/// Non-owning view over an opened resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmbeddedFile<'a> {
    path: &'a str,
    data: &'a [u8],
}

impl<'a> EmbeddedFile<'a> {
    pub fn path(&self) -> &'a str {
        self.path
    }

    pub fn as_bytes(&self) -> &'a [u8] {
        self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Start marker of the byte range. Never null, even for empty content.
    pub fn begin(&self) -> *const u8 {
        self.data.as_ptr_range().start
    }

    /// One-past-the-end marker of the byte range. Never null.
    pub fn end(&self) -> *const u8 {
        self.data.as_ptr_range().end
    }

    pub fn as_ptr_range(&self) -> Range<*const u8> {
        self.data.as_ptr_range()
    }

    pub fn iter(&self) -> std::slice::Iter<'a, u8> {
        self.data.iter()
    }

    /// Content as text, failing on invalid UTF-8.
    pub fn to_str(&self) -> Result<&'a str, ResourceError> {
        std::str::from_utf8(self.data).map_err(|_| ResourceError::InvalidUtf8 {
            path: self.path.to_string(),
        })
    }

    /// `std::io::Read` + `Seek` cursor over the content.
    pub fn reader(&self) -> Cursor<&'a [u8]> {
        Cursor::new(self.data)
    }
}

impl Deref for EmbeddedFile<'_> {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.data
    }
}

impl AsRef<[u8]> for EmbeddedFile<'_> {
    fn as_ref(&self) -> &[u8] {
        self.data
    }
}

impl<'a> IntoIterator for &EmbeddedFile<'a> {
    type Item = &'a u8;
    type IntoIter = std::slice::Iter<'a, u8>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

/// Outcome of opening a path.
///
/// A missing resource is `NotFound`, not an error. Its byte range is the
/// null sentinel: `begin() == end() == null`. A zero-length resource is
/// `Found` with equal, non-null markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenResult<'a> {
    Found(EmbeddedFile<'a>),
    NotFound,
}

impl<'a> OpenResult<'a> {
    pub fn is_found(&self) -> bool {
        matches!(self, OpenResult::Found(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, OpenResult::NotFound)
    }

    pub fn file(&self) -> Option<&EmbeddedFile<'a>> {
        match self {
            OpenResult::Found(file) => Some(file),
            OpenResult::NotFound => None,
        }
    }

    pub fn into_option(self) -> Option<EmbeddedFile<'a>> {
        match self {
            OpenResult::Found(file) => Some(file),
            OpenResult::NotFound => None,
        }
    }

    /// Convert to a `Result`, reporting `path` on a miss.
    pub fn into_result(self, path: &str) -> Result<EmbeddedFile<'a>, ResourceError> {
        self.into_option().ok_or_else(|| ResourceError::NotFound {
            path: path.to_string(),
        })
    }

    /// Content bytes; empty for `NotFound`.
    pub fn as_bytes(&self) -> &'a [u8] {
        match self {
            OpenResult::Found(file) => file.as_bytes(),
            OpenResult::NotFound => &[],
        }
    }

    /// Start marker, null for `NotFound`.
    pub fn begin(&self) -> *const u8 {
        match self {
            OpenResult::Found(file) => file.begin(),
            OpenResult::NotFound => ptr::null(),
        }
    }

    /// End marker, null for `NotFound`.
    pub fn end(&self) -> *const u8 {
        match self {
            OpenResult::Found(file) => file.end(),
            OpenResult::NotFound => ptr::null(),
        }
    }

    pub fn byte_range(&self) -> Range<*const u8> {
        self.begin()..self.end()
    }
}

impl<'a> From<OpenResult<'a>> for Option<EmbeddedFile<'a>> {
    fn from(result: OpenResult<'a>) -> Self {
        result.into_option()
    }
}

// ============================================================================
// Tests
// ============================================================================
