//! CLI command definitions and argument parsing.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Boardline - place components on circuit boards and draw the result.
#[derive(Debug, Parser)]
#[command(name = "boardline")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Layout file (TOML); the built-in layout is used when omitted
    #[arg(short, long, global = true, env = "BOARDLINE_LAYOUT")]
    pub layout: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Bounds check applied to every board
    #[arg(long, value_enum, global = true)]
    pub bounds: Option<BoundsArg>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Do not print the title banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// CLI commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Place the layout's components and draw every board (default)
    Run,

    /// Place the layout's components and list what happened to each
    Check,

    /// Show the component catalog
    Catalog,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Board grids as text (default)
    Text,
    /// JSON format
    Json,
    /// Quiet format (failures only)
    Quiet,
}

/// Bounds check options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum BoundsArg {
    /// Historical check, lets wide parts hang past the right edge
    Literal,
    /// Whole part must lie on the board
    Exact,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Text => crate::config::OutputFormat::Text,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

impl From<BoundsArg> for boardline_domain::BoundsRule {
    fn from(bounds: BoundsArg) -> Self {
        match bounds {
            BoundsArg::Literal => boardline_domain::BoundsRule::Literal,
            BoundsArg::Exact => boardline_domain::BoundsRule::Exact,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand() {
        let cli = Cli::parse_from(["boardline"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 0);
        assert!(!cli.no_color);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "boardline",
            "check",
            "--layout",
            "boards.toml",
            "--bounds",
            "exact",
            "-vv",
        ]);
        assert_eq!(cli.command, Some(Command::Check));
        assert_eq!(cli.layout, Some(PathBuf::from("boards.toml")));
        assert!(matches!(cli.bounds, Some(BoundsArg::Exact)));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_init_force() {
        let cli = Cli::parse_from(["boardline", "init", "--force"]);
        assert_eq!(cli.command, Some(Command::Init { force: true }));
    }

    #[test]
    fn test_format_conversion() {
        let format: crate::config::OutputFormat = CliFormat::Quiet.into();
        assert_eq!(format, crate::config::OutputFormat::Quiet);
    }

    #[test]
    fn test_bounds_conversion() {
        let rule: boardline_domain::BoundsRule = BoundsArg::Exact.into();
        assert_eq!(rule, boardline_domain::BoundsRule::Exact);
    }
}
