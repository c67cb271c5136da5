//! Output management and formatting.

use std::io::{self, IsTerminal};

use clap::ValueEnum;
use console::Term;
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;
use crate::error::{CliError, CliResult};

/// How a generated file lands in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Create,
    Update,
}

impl ChangeKind {
    fn label(self) -> &'static str {
        match self {
            Self::Create => "CREATE",
            Self::Update => "UPDATE",
        }
    }
}

/// Writes user-facing output to stdout.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    ///
    /// `--output-format` wins over `output.format`; `auto` in both resolves to
    /// Human on a terminal and Plain otherwise.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> CliResult<Self> {
        let requested = match args.output_format {
            OutputFormat::Auto => OutputFormat::from_str(&config.output.format, true).map_err(
                |e| CliError::ConfigError {
                    message: format!("output.format: {e}"),
                    source: None,
                },
            )?,
            explicit => explicit,
        };

        let resolved_format = match requested {
            OutputFormat::Auto if io::stdout().is_terminal() => OutputFormat::Human,
            OutputFormat::Auto => OutputFormat::Plain,
            other => other,
        };

        Ok(Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format != OutputFormat::Human,
            term: Term::stdout(),
        })
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.symbol_line("\u{2713}", msg, |s| s.green().bold().to_string())
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        self.symbol_line("\u{26a0}", msg, |s| s.yellow().bold().to_string())
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        self.symbol_line("\u{2139}", msg, |s| s.blue().bold().to_string())
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    /// `  CREATE /path (N bytes)`.
    pub fn change(&self, kind: ChangeKind, path: &str, bytes: usize) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let label = match (kind, self.no_color) {
            (_, true) => kind.label().to_string(),
            (ChangeKind::Create, false) => kind.label().green().to_string(),
            (ChangeKind::Update, false) => kind.label().yellow().to_string(),
        };
        self.term
            .write_line(&format!("  {label} {path} ({bytes} bytes)"))
    }

    /// Pretty JSON document. Written even in quiet mode.
    pub fn json<T: Serialize>(&self, value: &T) -> CliResult<()> {
        let rendered = serde_json::to_string_pretty(value).map_err(io::Error::from)?;
        self.term.write_line(&rendered)?;
        Ok(())
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    /// The resolved (non-Auto) output format.
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }

    fn symbol_line(&self, symbol: &str, msg: &str, paint: fn(&str) -> String) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("{symbol} {msg}")
        } else {
            format!("{} {}", paint(symbol), msg)
        };
        self.term.write_line(&line)
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn args(format: OutputFormat, quiet: bool) -> GlobalArgs {
        GlobalArgs {
            verbose: 0,
            quiet,
            no_color: false,
            config: None,
            output_format: format,
        }
    }

    #[test]
    fn explicit_format_wins_over_config() {
        let mut config = AppConfig::default();
        config.output.format = "json".into();
        let out = OutputManager::new(&args(OutputFormat::Plain, false), &config).unwrap();
        assert_eq!(out.format(), OutputFormat::Plain);
    }

    #[test]
    fn config_format_used_when_auto() {
        let mut config = AppConfig::default();
        config.output.format = "json".into();
        let out = OutputManager::new(&args(OutputFormat::Auto, false), &config).unwrap();
        assert_eq!(out.format(), OutputFormat::Json);
    }

    #[test]
    fn unknown_config_format_is_config_error() {
        let mut config = AppConfig::default();
        config.output.format = "yaml".into();
        let err = OutputManager::new(&args(OutputFormat::Auto, false), &config)
            .err()
            .unwrap();
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn plain_never_colours() {
        let out =
            OutputManager::new(&args(OutputFormat::Plain, false), &AppConfig::default()).unwrap();
        assert!(out.no_color);
    }

    #[test]
    fn quiet_suppresses_lines() {
        let out =
            OutputManager::new(&args(OutputFormat::Plain, true), &AppConfig::default()).unwrap();
        assert!(out.is_quiet());
        assert!(out.print("hidden").is_ok());
        assert!(out.change(ChangeKind::Create, "/a", 1).is_ok());
    }
}
