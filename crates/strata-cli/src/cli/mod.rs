//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
///
/// The bare form `strata <Name> <Level> [Children]` generates a component.
/// Subcommands take precedence over the positional form, so `levels`, `ls`,
/// `init`, `config` and `completions` cannot be used as component names.
#[derive(Debug, Parser)]
#[command(
    name    = "strata",
    bin_name = "strata",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Scaffold atomic design components",
    long_about = "Strata writes the Twig template, YAML data file and Storybook \
                  story for a design-system component into \
                  components/<NN-level>/<Name>/.",
    after_help = "EXAMPLES:\n\
        \x20 strata Button atoms\n\
        \x20 strata NameTitleBlock organisms Heading,Subheading\n\
        \x20 strata CourseCard templates --dry-run\n\
        \x20 strata levels\n\n\
        Component names must be JavaScript identifiers. The subcommand names \
        levels, ls, init, config and completions are reserved.",
    arg_required_else_help = true,
    args_conflicts_with_subcommands = true,
    subcommand_negates_reqs = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Component to generate when no subcommand is given.
    #[command(flatten)]
    pub generate: GenerateArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the design levels.
    #[command(
        visible_alias = "ls",
        about = "List design levels and their directories",
        after_help = "EXAMPLES:\n\
            \x20 strata levels\n\
            \x20 strata levels --format json"
    )]
    Levels(LevelsArgs),

    /// Initialise a Strata configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 strata init\n\
            \x20 strata init --force\n\
            \x20 strata --config ./strata.toml init"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 strata completions bash > ~/.local/share/bash-completion/completions/strata\n\
            \x20 strata completions zsh  > ~/.zfunc/_strata\n\
            \x20 strata completions fish > ~/.config/fish/completions/strata.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Strata configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 strata config get defaults.root\n\
            \x20 strata config list\n\
            \x20 strata config path"
    )]
    Config(ConfigCommands),
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Positional arguments for component generation.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Component name, used verbatim for file names.
    #[arg(value_name = "NAME", required = true, help = "Component name (e.g. NameTitleBlock)")]
    pub name: Option<String>,

    /// Design level key; parsed case-insensitively by the core.
    #[arg(
        value_name = "LEVEL",
        required = true,
        help = "Design level: base, atoms, molecules, organisms, templates, pages"
    )]
    pub level: Option<String>,

    /// Comma-separated child components.
    #[arg(value_name = "CHILDREN", help = "Comma-separated child components (e.g. Heading,Subheading)")]
    pub children: Option<String>,

    /// Namespace root directory.
    #[arg(
        short = 'r',
        long = "root",
        value_name = "DIR",
        help = "Namespace root (default: components)"
    )]
    pub root: Option<PathBuf>,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── levels ────────────────────────────────────────────────────────────────────

/// Arguments for `strata levels`.
#[derive(Debug, Args)]
pub struct LevelsArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: LevelsFormat,
}

/// Output format for the `levels` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LevelsFormat {
    /// Human-readable table.
    Table,
    /// One key per line.
    List,
    /// JSON array.
    Json,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `strata init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `strata completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `strata config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.root`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_positional_form() {
        let cli = Cli::parse_from(["strata", "NameTitleBlock", "organisms", "Heading,Subheading"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.generate.name.as_deref(), Some("NameTitleBlock"));
        assert_eq!(cli.generate.level.as_deref(), Some("organisms"));
        assert_eq!(cli.generate.children.as_deref(), Some("Heading,Subheading"));
        assert!(!cli.generate.dry_run);
    }

    #[test]
    fn children_are_optional() {
        let cli = Cli::parse_from(["strata", "Button", "atoms"]);
        assert!(cli.generate.children.is_none());
    }

    #[test]
    fn level_is_not_validated_by_clap() {
        // The core reports the invalid level with the list of valid keys.
        let cli = Cli::parse_from(["strata", "Button", "widgets"]);
        assert_eq!(cli.generate.level.as_deref(), Some("widgets"));
    }

    #[test]
    fn missing_level_is_usage_error() {
        let result = Cli::try_parse_from(["strata", "Button"]);
        assert!(result.is_err());
    }

    #[test]
    fn too_many_positionals_is_usage_error() {
        let result = Cli::try_parse_from(["strata", "Button", "atoms", "A,B", "extra"]);
        assert!(result.is_err());
    }

    #[test]
    fn subcommand_without_positionals() {
        let cli = Cli::parse_from(["strata", "levels", "--format", "json"]);
        match cli.command {
            Some(Commands::Levels(args)) => assert_eq!(args.format, LevelsFormat::Json),
            other => panic!("expected Levels command, got {other:?}"),
        }
    }

    #[test]
    fn subcommand_names_win_over_component_names() {
        let cli = Cli::parse_from(["strata", "init"]);
        assert!(matches!(cli.command, Some(Commands::Init(_))));
        assert!(cli.generate.name.is_none());

        assert!(Cli::try_parse_from(["strata", "levels", "atoms"]).is_err());
    }

    #[test]
    fn root_and_dry_run_flags() {
        let cli = Cli::parse_from(["strata", "--dry-run", "--root", "web/components", "Card", "molecules"]);
        assert!(cli.generate.dry_run);
        assert_eq!(cli.generate.root, Some(PathBuf::from("web/components")));
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["strata", "--quiet", "--verbose", "levels"]);
        assert!(result.is_err());
    }
}
