//! # Folio CLI
//!
//! Admin surface for the portfolio: edit the two documents, render the site,
//! publish, and run the update endpoints.
//!
//! ## Startup sequence
//!
//! 1. Load `.env`, parse arguments (clap handles `--help` / `--version`).
//! 2. Initialise the tracing subscriber.
//! 3. Load configuration (defaults, file, environment).
//! 4. Build the [`OutputManager`] and dispatch.
//! 5. Translate any [`CliError`] into a message and exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                 |
//! |------|-------------------------|
//! |  0   | Success                 |
//! |  1   | Internal / system error |
//! |  2   | User / input error      |
//! |  3   | Resource not found      |
//! |  4   | Configuration error     |

use std::io::IsTerminal as _;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, instrument};

use crate::{
    cli::{Cli, Commands},
    commands::Context,
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    // Real deployments use the environment; a missing .env is fine.
    let _ = dotenvy::dotenv();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version arrive here too.
            let code = if e.use_stderr() { 2 } else { 0 };
            let _ = e.print();
            return ExitCode::from(code);
        }
    };

    let serving = matches!(cli.command, Commands::Serve(_));
    if let Err(e) = init_logging(&cli.global, serving) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        no_color = cli.global.no_color,
        "CLI started"
    );

    let config = match AppConfig::load(cli.global.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            return handle_error(
                CliError::ConfigError {
                    message: format!("{e:#}"),
                    source: None,
                },
                cli.global.verbose > 0,
            );
        }
    };

    let verbose = cli.global.verbose > 0;
    let output = OutputManager::new(&cli.global, &config);
    let ctx = Context::new(cli.global, config, output);

    match run(cli.command, &ctx) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => handle_error(e, verbose),
    }
}

#[instrument(skip_all)]
fn run(command: Commands, ctx: &Context) -> CliResult<()> {
    match command {
        Commands::Project(cmd) => commands::project::execute(cmd, ctx),
        Commands::Settings(cmd) => commands::settings::execute(cmd, ctx),
        Commands::Stats => commands::stats::execute(ctx),
        Commands::Build(args) => commands::build::execute(args, ctx),
        Commands::Export(args) => commands::export::execute(args, ctx),
        Commands::Publish(args) => commands::publish::execute(args, ctx),
        Commands::Serve(args) => commands::serve::execute(args, ctx),
        Commands::Init(args) => commands::init::execute(args, ctx),
        Commands::Config(cmd) => commands::config::execute(cmd, ctx),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}

/// Log, print to stderr, and map to the exit code.
fn handle_error(err: CliError, verbose: bool) -> ExitCode {
    err.log();

    let msg = if std::io::stderr().is_terminal() {
        err.format_colored(verbose)
    } else {
        err.format_plain(verbose)
    };
    eprint!("{msg}");

    ExitCode::from(err.exit_code())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_structure_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn cli_version_matches_cargo() {
        let cmd = Cli::command();
        assert_eq!(cmd.get_version(), Some(env!("CARGO_PKG_VERSION")));
    }
}
