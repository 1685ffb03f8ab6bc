//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the scaffolding workflow:
//! 1. Validate the component spec
//! 2. Generate the three artifacts
//! 3. Write them through the `Filesystem` port
//!
//! It implements the driving port (incoming) and uses driven ports (outgoing).

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::{
    application::ports::Filesystem,
    domain::{
        ComponentLayout, ComponentScaffolder, ComponentSpec, DesignLevel,
        DomainValidator as validator, LEVEL_REGISTRY, Permissions,
    },
    error::StrataResult,
};

/// Information about a design level for display purposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LevelInfo {
    pub key: String,
    pub title: String,
    pub directory: String,
    pub children_from: String,
}

/// Outcome of one scaffold (or dry-run) invocation.
#[derive(Debug, Clone, Serialize)]
pub struct ScaffoldReport {
    /// Correlates the report with the run's tracing span.
    pub id: Uuid,
    pub component: String,
    pub level: DesignLevel,
    pub output_dir: PathBuf,
    pub files: Vec<PathBuf>,
    pub generated_at: DateTime<Utc>,
    pub dry_run: bool,
}

/// Main scaffolding service.
pub struct ScaffoldService {
    scaffolder: ComponentScaffolder,
    filesystem: Box<dyn Filesystem>,
}

impl ScaffoldService {
    /// Create a new scaffold service writing under the default `components` root.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use strata_core::application::{ScaffoldService, ports::Filesystem};
    ///
    /// # fn demo(filesystem: Box<dyn Filesystem>) {
    /// let service = ScaffoldService::new(filesystem).with_root("web/themes/ds/components");
    /// # }
    /// ```
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            scaffolder: ComponentScaffolder::default(),
            filesystem,
        }
    }

    /// Use a different namespace root.
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.scaffolder = ComponentScaffolder::new(root);
        self
    }

    /// Generate and lay out a component without touching the filesystem.
    ///
    /// The spec is validated by the scaffolder before any content is built.
    pub fn plan(&self, spec: &ComponentSpec) -> StrataResult<ComponentLayout> {
        let artifacts = self.scaffolder.generate(spec)?;
        let mut layout = ComponentLayout::new(artifacts.output_dir.clone());
        for artifact in artifacts.iter() {
            layout.add_file(
                artifact.relative_path.as_path(),
                artifact.content(),
                Permissions::read_write(),
            );
        }

        validator::validate_layout(&layout)?;
        Ok(layout)
    }

    /// Scaffold a component: create its directory and write all three files.
    ///
    /// Existing files with the same names are overwritten.
    #[instrument(skip_all, fields(component = %spec))]
    pub fn scaffold(&self, spec: &ComponentSpec) -> StrataResult<ScaffoldReport> {
        let layout = self.plan(spec)?;
        let report = self.report(spec, &layout, false);
        info!(run_id = %report.id, output_dir = %layout.root().display(), "Scaffolding component");

        self.write_layout(&layout)?;

        info!(files = layout.file_count(), "Scaffold completed successfully");
        Ok(report)
    }

    /// Describe what `scaffold` would write, without writing.
    #[instrument(skip_all, fields(component = %spec))]
    pub fn preview(&self, spec: &ComponentSpec) -> StrataResult<ScaffoldReport> {
        let layout = self.plan(spec)?;
        let report = self.report(spec, &layout, true);
        debug!(run_id = %report.id, "Dry run, nothing written");
        Ok(report)
    }

    /// All design levels in hierarchy order.
    pub fn list_levels() -> Vec<LevelInfo> {
        LEVEL_REGISTRY
            .iter()
            .map(|def| LevelInfo {
                key: def.level.to_string(),
                title: def.level.title(),
                directory: def.directory.to_string(),
                children_from: def.child_level.to_string(),
            })
            .collect()
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn report(&self, spec: &ComponentSpec, layout: &ComponentLayout, dry_run: bool) -> ScaffoldReport {
        ScaffoldReport {
            id: Uuid::new_v4(),
            component: spec.name().to_string(),
            level: spec.level(),
            output_dir: layout.root().to_path_buf(),
            files: layout.file_paths(),
            generated_at: Utc::now(),
            dry_run,
        }
    }

    fn write_layout(&self, layout: &ComponentLayout) -> StrataResult<()> {
        self.filesystem.create_dir_all(layout.root())?;

        for file in layout.files() {
            let path = layout.root().join(&file.path);

            if self.filesystem.exists(&path) {
                debug!(path = %path.display(), "Overwriting existing file");
            }

            self.filesystem.write_file(&path, &file.content)?;
            self.filesystem.set_permissions(&path, file.permissions)?;
        }

        Ok(())
    }
}
