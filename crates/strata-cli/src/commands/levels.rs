//! Implementation of the `strata levels` command.

use strata_core::application::{LevelInfo, ScaffoldService};

use crate::{
    cli::{LevelsArgs, LevelsFormat},
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: LevelsArgs, output: OutputManager) -> CliResult<()> {
    let levels = ScaffoldService::list_levels();

    // --output-format json wins over --format.
    let format = if output.is_json() {
        LevelsFormat::Json
    } else {
        args.format
    };

    match format {
        LevelsFormat::Table => {
            output.header("Design levels:")?;
            for row in table_rows(&levels) {
                output.print(&row)?;
            }
        }
        LevelsFormat::List => {
            for level in &levels {
                output.print(&level.key)?;
            }
        }
        LevelsFormat::Json => output.json(&levels)?,
    }

    Ok(())
}

fn table_rows(levels: &[LevelInfo]) -> Vec<String> {
    levels
        .iter()
        .map(|l| {
            format!(
                "  {:<10} {:<26} children from {}",
                l.key, l.directory, l.children_from
            )
        })
        .collect()
}
