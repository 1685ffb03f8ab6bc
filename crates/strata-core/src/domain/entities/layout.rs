use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::domain::{entities::common::Permissions, error::DomainError};

/// Files ready for materialization under one component directory.
///
/// This is the output of planning. It contains no business logic, only data.
#[derive(Debug, Clone)]
pub struct ComponentLayout {
    pub(crate) root: PathBuf,
    pub(crate) files: Vec<FileToWrite>,
}

impl ComponentLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            files: Vec::new(),
        }
    }

    pub fn add_file(&mut self, path: impl Into<PathBuf>, content: String, perms: Permissions) {
        self.files.push(FileToWrite {
            path: path.into(),
            content,
            permissions: perms,
        });
    }

    pub fn with_file(
        mut self,
        path: impl Into<PathBuf>,
        content: String,
        perms: Permissions,
    ) -> Self {
        self.add_file(path, content, perms);
        self
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.files.is_empty() {
            return Err(DomainError::EmptyLayout);
        }

        let mut seen = HashSet::new();
        for file in &self.files {
            if file.path.is_absolute() || file.path.has_root() {
                return Err(DomainError::AbsolutePathNotAllowed {
                    path: file.path.display().to_string(),
                });
            }

            if !seen.insert(&file.path) {
                return Err(DomainError::DuplicatePath {
                    path: file.path.display().to_string(),
                });
            }
        }

        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn files(&self) -> impl Iterator<Item = &FileToWrite> {
        self.files.iter()
    }

    /// Full path of each file (`root` joined with its relative path).
    pub fn file_paths(&self) -> Vec<PathBuf> {
        self.files.iter().map(|f| self.root.join(&f.path)).collect()
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }
}

#[derive(Debug, Clone)]
pub struct FileToWrite {
    pub path: PathBuf,
    pub content: String,
    pub permissions: Permissions,
}
