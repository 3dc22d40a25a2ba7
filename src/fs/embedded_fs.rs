//! Embedded Resource Filesystem
//!
//! A read-only lookup table from resource paths to embedded bytes.

use std::borrow::Cow;
use std::collections::HashMap;

use tracing::{debug, trace};

use super::types::*;

/// Immutable table of embedded resources.
///
/// There is no API to add or remove entries once built, so `open` needs no
/// locking and may be called from any number of threads.
#[derive(Debug, Clone)]
pub struct ResourceFilesystem {
    name: String,
    entries: HashMap<String, EmbeddedResource>,
}

impl ResourceFilesystem {
    /// Start building a resource set called `name`.
    pub fn builder(name: impl Into<String>) -> ResourceSetBuilder {
        ResourceSetBuilder {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    /// Name of the resource set.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of resources in the set.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Open the resource at `path`.
    ///
    /// A miss is reported as [`OpenResult::NotFound`], whose byte range is
    /// the null sentinel. Any string is accepted; the empty string never
    /// matches.
    pub fn open(&self, path: &str) -> OpenResult<'_> {
        match self.lookup(path) {
            Some(resource) => {
                trace!(set = %self.name, path = resource.path(), size = resource.len(), "opened embedded resource");
                OpenResult::Found(resource.as_file())
            }
            None => {
                debug!(set = %self.name, path, "embedded resource not found");
                OpenResult::NotFound
            }
        }
    }

    /// Open the resource at `path`, turning a miss into [`ResourceError::NotFound`].
    pub fn open_file(&self, path: &str) -> Result<EmbeddedFile<'_>, ResourceError> {
        self.open(path).into_result(path)
    }

    /// Check if a resource exists at `path`.
    pub fn exists(&self, path: &str) -> bool {
        self.lookup(path).is_some()
    }

    /// Every entry is a regular file, so this matches [`exists`](Self::exists).
    pub fn is_file(&self, path: &str) -> bool {
        self.exists(path)
    }

    fn lookup(&self, path: &str) -> Option<&EmbeddedResource> {
        self.entries
            .get(path)
            .or_else(|| self.entries.get(normalize_path(path).as_str()))
    }
}

/// Collects entries for a [`ResourceFilesystem`].
#[derive(Debug, Clone)]
pub struct ResourceSetBuilder {
    name: String,
    entries: Vec<(String, Cow<'static, [u8]>)>,
}

impl ResourceSetBuilder {
    /// Add a resource. `data` may borrow static bytes or own a buffer.
    pub fn resource(mut self, path: impl Into<String>, data: impl Into<Cow<'static, [u8]>>) -> Self {
        self.entries.push((path.into(), data.into()));
        self
    }

    /// Validate paths and freeze the table.
    pub fn build(self) -> Result<ResourceFilesystem, ResourceError> {
        let mut entries: HashMap<String, EmbeddedResource> = HashMap::with_capacity(self.entries.len());
        for (path, data) in self.entries {
            let normalized = normalize_path(&path);
            if normalized.is_empty() {
                return Err(ResourceError::EmptyPath);
            }
            if entries.contains_key(&normalized) {
                return Err(ResourceError::Duplicate { path: normalized });
            }
            entries.insert(normalized.clone(), EmbeddedResource::new(normalized, data));
        }
        debug!(set = %self.name, resources = entries.len(), "built embedded resource set");
        Ok(ResourceFilesystem {
            name: self.name,
            entries,
        })
    }
}

// ============================================================================
// Path utilities
// ============================================================================

/// Canonical key for a resource path: `/`-separated, no leading slash,
/// `.` and empty components dropped, `..` applied.
pub(crate) fn normalize_path(path: &str) -> String {
    let mut resolved: Vec<&str> = Vec::new();
    for part in path.split(['/', '\\']) {
        match part {
            "" | "." => {}
            ".." => {
                resolved.pop();
            }
            _ => resolved.push(part),
        }
    }
    resolved.join("/")
}

// ============================================================================
// Tests
// ============================================================================
