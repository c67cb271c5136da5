//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. No generation logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use schemer_core::domain::MergeStrategy;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

#[derive(Debug, Parser)]
#[command(
    name    = "schemer",
    bin_name = "schemer",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Generate files into a multi-project workspace",
    long_about = "Schemer resolves a project from the workspace's angular.json, \
                  renders a template set for the requested name and shows what \
                  would be merged into the project tree.",
    after_help = "EXAMPLES:\n\
        \x20 schemer generate widget\n\
        \x20 schemer generate admin/user-card --project shop\n\
        \x20 schemer g button --path projects/ui/src/lib/controls -s prefix=ui\n\
        \x20 schemer completions bash > /usr/share/bash-completion/completions/schemer",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render templates for a name and report the resulting changes.
    #[command(
        visible_alias = "g",
        about = "Generate files for a name",
        after_help = "EXAMPLES:\n\
            \x20 schemer generate widget\n\
            \x20 schemer generate sub/widget --path /custom\n\
            \x20 schemer generate card -t ./files -s owner=core --show-content\n\
            \x20 schemer generate card --on-conflict error --output-format json"
    )]
    Generate(GenerateArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 schemer completions bash > ~/.local/share/bash-completion/completions/schemer\n\
            \x20 schemer completions zsh  > ~/.zfunc/_schemer\n\
            \x20 schemer completions fish > ~/.config/fish/completions/schemer.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Schemer configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 schemer config get merge.on_conflict\n\
            \x20 schemer config list\n\
            \x20 schemer config path"
    )]
    Config(ConfigCommands),
}

// ── generate ──────────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Artifact name. May carry folders: `admin/user-card`.
    #[arg(value_name = "NAME", help = "Artifact name, optionally with folders")]
    pub name: String,

    #[arg(
        short = 'p',
        long = "project",
        value_name = "PROJECT",
        help = "Target project (default: the workspace's defaultProject)"
    )]
    pub project: Option<String>,

    #[arg(
        long = "path",
        value_name = "DIR",
        help = "Tree directory to generate into (default: <sourceRoot>/app or /lib)"
    )]
    pub path: Option<String>,

    #[arg(
        short = 'w',
        long = "workspace",
        value_name = "DIR",
        default_value = ".",
        help = "Workspace root containing angular.json"
    )]
    pub workspace: PathBuf,

    #[arg(
        short = 't',
        long = "templates",
        value_name = "DIR",
        help = "Template directory (default: config templates.local_path, else built-in component)"
    )]
    pub templates: Option<PathBuf>,

    /// Extra template variable. Repeatable.
    #[arg(
        short = 's',
        long = "set",
        value_name = "KEY=VALUE",
        value_parser = parse_key_value,
        help = "Template variable (repeatable)"
    )]
    pub set: Vec<(String, String)>,

    #[arg(
        long = "on-conflict",
        value_enum,
        value_name = "POLICY",
        help = "What to do when a generated file already exists (default: config merge.on_conflict)"
    )]
    pub on_conflict: Option<ConflictPolicy>,

    #[arg(long = "show-content", help = "Print rendered file contents")]
    pub show_content: bool,
}

/// `--on-conflict` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ConflictPolicy {
    /// Replace existing files and report them as updates.
    Overwrite,
    /// Refuse the whole generation.
    Error,
}

impl From<ConflictPolicy> for MergeStrategy {
    fn from(policy: ConflictPolicy) -> Self {
        match policy {
            ConflictPolicy::Overwrite => Self::Overwrite,
            ConflictPolicy::Error => Self::Error,
        }
    }
}

fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{raw}'"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("missing key in '{raw}'"));
    }
    Ok((key.to_string(), value.to_string()))
}

// ── completions ───────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `merge.on_conflict`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_generate_with_everything() {
        let cli = Cli::parse_from([
            "schemer",
            "generate",
            "admin/user-card",
            "-p",
            "shop",
            "--path",
            "/custom",
            "-s",
            "owner=core",
            "--set",
            "empty=",
            "--on-conflict",
            "error",
        ]);
        let Commands::Generate(args) = cli.command else {
            panic!("expected Generate command");
        };
        assert_eq!(args.name, "admin/user-card");
        assert_eq!(args.project.as_deref(), Some("shop"));
        assert_eq!(args.path.as_deref(), Some("/custom"));
        assert_eq!(
            args.set,
            vec![
                ("owner".to_string(), "core".to_string()),
                ("empty".to_string(), String::new())
            ]
        );
        assert_eq!(args.on_conflict, Some(ConflictPolicy::Error));
        assert_eq!(args.workspace, PathBuf::from("."));
    }

    #[test]
    fn generate_alias() {
        let cli = Cli::parse_from(["schemer", "g", "widget"]);
        assert!(matches!(cli.command, Commands::Generate(_)));
    }

    #[test]
    fn set_requires_equals() {
        assert!(Cli::try_parse_from(["schemer", "g", "w", "-s", "novalue"]).is_err());
        assert!(Cli::try_parse_from(["schemer", "g", "w", "-s", "=v"]).is_err());
    }

    #[test]
    fn conflict_policy_maps_to_strategy() {
        assert_eq!(
            MergeStrategy::from(ConflictPolicy::Error),
            MergeStrategy::Error
        );
        assert_eq!(
            MergeStrategy::from(ConflictPolicy::Overwrite),
            MergeStrategy::Overwrite
        );
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["schemer", "--quiet", "--verbose", "g", "w"]);
        assert!(result.is_err());
    }
}
