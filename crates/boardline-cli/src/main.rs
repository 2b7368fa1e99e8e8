//! Boardline CLI - place components on circuit boards and draw the result.

use boardline_cli::commands;
use boardline_cli::layout::resolve_layout;
use boardline_cli::logging::init_tracing;
use boardline_cli::{Cli, Command, Config, Formatter};
use boardline_domain::PlacementRules;
use clap::Parser;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> boardline_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let command = cli.command.unwrap_or(Command::Run);

    // Init writes the config file, so it must not require one to load
    let config = match command {
        Command::Init { .. } => Config::default(),
        _ => Config::load(cli.config.as_deref())?,
    };

    // Flags override the config file
    let format = cli.format.map(Into::into).unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let banner = !cli.no_banner && config.settings.banner;
    let rules = match cli.bounds {
        Some(bounds) => PlacementRules { bounds: bounds.into() },
        None => config.placement_rules(),
    };

    let formatter = Formatter::new(format, color_enabled, banner);

    match command {
        Command::Run => {
            let layout = resolve_layout(cli.layout.as_deref().or(config.layout.as_deref()))?;
            commands::execute_run(&layout, rules, &formatter)?;
        }
        Command::Check => {
            let layout = resolve_layout(cli.layout.as_deref().or(config.layout.as_deref()))?;
            commands::execute_check(&layout, rules, &formatter)?;
        }
        Command::Catalog => {
            commands::execute_catalog(&formatter)?;
        }
        Command::Init { force } => {
            commands::execute_init(cli.config.as_deref(), force, &formatter)?;
        }
    }

    Ok(())
}
