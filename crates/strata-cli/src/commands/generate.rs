//! Component generation: `strata <Name> <Level> [Children]`.
//!
//! Translates positional arguments into a `ComponentSpec`, runs the core
//! scaffold service against the local filesystem and reports the result.

use tracing::{debug, instrument};

use strata_adapters::LocalFilesystem;
use strata_core::{
    application::{ScaffoldReport, ScaffoldService},
    domain::ComponentSpec,
};

use crate::{
    cli::GenerateArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute component generation.
#[instrument(skip_all, fields(component = args.name.as_deref().unwrap_or_default()))]
pub fn execute(args: GenerateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let spec = build_spec(&args)?;
    let root = config.root(args.root.as_deref());
    debug!(root = %root.display(), dry_run = args.dry_run, "Resolved namespace root");

    let service = ScaffoldService::new(Box::new(LocalFilesystem::new())).with_root(root);

    let report = if args.dry_run {
        service.preview(&spec)?
    } else {
        service.scaffold(&spec)?
    };

    render(&report, &output)
}

/// Build a spec from the raw positionals; level parsing errors come from the core.
fn build_spec(args: &GenerateArgs) -> CliResult<ComponentSpec> {
    let name = args.name.as_deref().ok_or_else(|| missing("NAME"))?;
    let level = args.level.as_deref().ok_or_else(|| missing("LEVEL"))?;
    let children = args
        .children
        .as_deref()
        .map(ComponentSpec::split_child_list)
        .unwrap_or_default();

    ComponentSpec::parse(name, level, children).map_err(|e| CliError::Core(e.into()))
}

fn missing(what: &str) -> CliError {
    CliError::InvalidInput {
        message: format!("missing required argument <{what}>"),
        source: None,
    }
}

fn render(report: &ScaffoldReport, output: &OutputManager) -> CliResult<()> {
    if output.is_json() {
        output.json(report)?;
        return Ok(());
    }

    if report.dry_run {
        output.info(&format!(
            "Dry run: would create component '{}' in '{}'",
            report.component,
            report.output_dir.display()
        ))?;
    } else {
        output.success(&format!(
            "Component '{}' created in '{}'",
            report.component,
            report.output_dir.display()
        ))?;
    }

    for file in &report.files {
        output.detail(&file.display().to_string())?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_core::domain::{DesignLevel, DomainError};
    use strata_core::error::StrataError;

    fn args(name: &str, level: &str, children: Option<&str>) -> GenerateArgs {
        GenerateArgs {
            name: Some(name.into()),
            level: Some(level.into()),
            children: children.map(Into::into),
            root: None,
            dry_run: false,
        }
    }

    #[test]
    fn children_are_split_and_trimmed() {
        let spec = build_spec(&args("NameTitleBlock", "Organisms", Some(" Heading , Subheading,"))).unwrap();
        assert_eq!(spec.level(), DesignLevel::Organisms);
        assert_eq!(spec.children(), ["Heading", "Subheading"]);
    }

    #[test]
    fn absent_children_mean_empty_list() {
        let spec = build_spec(&args("Button", "atoms", None)).unwrap();
        assert!(!spec.has_children());
    }

    #[test]
    fn invalid_level_is_core_error() {
        let err = build_spec(&args("Button", "widgets", None)).unwrap_err();
        assert!(matches!(
            err,
            CliError::Core(StrataError::Domain(DomainError::InvalidLevel { .. }))
        ));
        assert_eq!(err.exit_code(), 0);
    }

    #[test]
    fn missing_positional_is_invalid_input() {
        let mut a = args("Button", "atoms", None);
        a.level = None;
        assert!(matches!(build_spec(&a), Err(CliError::InvalidInput { .. })));
    }
}
