use crate::domain::DomainError;
use std::fmt;
use std::path::{Path, PathBuf};

/// A filesystem path guaranteed to be relative.
///
/// Invariant: Never absolute. Enforced at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RelativePath(PathBuf);

impl RelativePath {
    /// Fallible constructor.
    pub fn try_new(path: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let path = path.into();
        if path.is_absolute() || path.has_root() {
            Err(DomainError::AbsolutePathNotAllowed {
                path: path.display().to_string(),
            })
        } else {
            Ok(Self(path))
        }
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }
}

impl AsRef<Path> for RelativePath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

/// Capability-based permissions model.
///
/// Everyone may read; only the owner ever gets write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Permissions {
    writable: bool,
}

impl Permissions {
    /// Owner read/write, group and other read-only (`0644`).
    pub const fn read_write() -> Self {
        Self { writable: true }
    }

    pub const fn writable(&self) -> bool {
        self.writable
    }

    /// Unix permission bits for this capability set.
    pub const fn mode(&self) -> u32 {
        if self.writable { 0o644 } else { 0o444 }
    }
}

impl Default for Permissions {
    fn default() -> Self {
        Self::read_write()
    }
}
