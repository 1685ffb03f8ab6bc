//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `strata-adapters` crate provides implementations.

use crate::domain::Permissions;
use crate::error::StrataResult;
use std::path::Path;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `strata_adapters::filesystem::LocalFilesystem` (production)
/// - `strata_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - `create_dir_all` must succeed when the directory already exists
/// - `write_file` replaces existing content
/// - Permissions are capability-based; adapters map them to the platform
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> StrataResult<()>;

    /// Write content to a file, replacing it if it exists.
    fn write_file(&self, path: &Path, content: &str) -> StrataResult<()>;

    /// Set file permissions.
    fn set_permissions(&self, path: &Path, permissions: Permissions) -> StrataResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}
