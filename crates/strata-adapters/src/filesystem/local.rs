//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use strata_core::{
    application::{ApplicationError, ports::Filesystem},
    domain::Permissions,
    error::{StrataError, StrataResult},
};
use tracing::trace;

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> StrataResult<()> {
        trace!(path = %path.display(), "create_dir_all");
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> StrataResult<()> {
        trace!(path = %path.display(), bytes = content.len(), "write_file");
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn set_permissions(&self, path: &Path, permissions: Permissions) -> StrataResult<()> {
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(path, std::fs::Permissions::from_mode(permissions.mode()))
                .map_err(|e| map_io_error(path, e, "set permissions"))?;
        }
        #[cfg(not(unix))]
        {
            // Only the read-only flag exists outside unix.
            let mut perms = std::fs::metadata(path)
                .map_err(|e| map_io_error(path, e, "get metadata"))?
                .permissions();
            perms.set_readonly(!permissions.writable());
            std::fs::set_permissions(path, perms)
                .map_err(|e| map_io_error(path, e, "set permissions"))?;
        }
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> StrataError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_dir_all_is_idempotent() {
        let temp = tempfile::tempdir().unwrap();
        let dir = temp.path().join("components/01-atoms/Button");
        let fs = LocalFilesystem::new();

        fs.create_dir_all(&dir).unwrap();
        fs.create_dir_all(&dir).unwrap();
        assert!(fs.exists(&dir));
    }

    #[test]
    fn write_file_overwrites() {
        let temp = tempfile::tempdir().unwrap();
        let file = temp.path().join("Button.yml");
        let fs = LocalFilesystem::new();

        fs.write_file(&file, "old").unwrap();
        fs.write_file(&file, "text: 'Hello World'\n").unwrap();
        assert_eq!(
            std::fs::read_to_string(&file).unwrap(),
            "text: 'Hello World'\n"
        );
    }

    #[test]
    fn write_into_missing_directory_is_filesystem_error() {
        let temp = tempfile::tempdir().unwrap();
        let file = temp.path().join("missing/Button.twig");

        let err = LocalFilesystem::new().write_file(&file, "x").unwrap_err();
        assert!(matches!(
            err,
            StrataError::Application(ApplicationError::FilesystemError { .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn set_permissions_applies_mode() {
        use std::os::unix::fs::PermissionsExt;

        let temp = tempfile::tempdir().unwrap();
        let file = temp.path().join("Button.twig");
        let fs = LocalFilesystem::new();
        fs.write_file(&file, "x").unwrap();

        fs.set_permissions(&file, Permissions::read_write()).unwrap();

        let mode = std::fs::metadata(&file).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o644);
    }
}
