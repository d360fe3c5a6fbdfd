mod adapters;
mod cli;
mod config;
mod core;

use clap::Parser;

use cli::{Cli, Commands};
use config::app_config::AppConfig;

fn main() {
    let args = Cli::parse();

    let config = match AppConfig::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            cli::output::failure(&e);
            std::process::exit(1);
        }
    };

    cli::logging::init(args.verbose, args.quiet, config.log.level.as_deref());
    if !config.display.color {
        colored::control::set_override(false);
    }
    cli::context::init(config);

    let result = match &args.command {
        Commands::Inspect { file } => cli::commands::inspect::execute(file.as_deref(), args.json),
        Commands::Claims { file } => cli::commands::claims::execute(file.as_deref(), args.json),
        Commands::Paste => cli::commands::paste::execute(args.json),
    };

    if let Err(e) = result {
        tracing::debug!(error = ?e, "command failed");
        cli::output::failure(&e);
        std::process::exit(1);
    }
}
