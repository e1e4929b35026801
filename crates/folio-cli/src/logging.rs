//! Tracing subscriber initialisation.
//!
//! Only the binary installs a subscriber; the library crates only emit
//! spans and events.
//!
//! # Verbosity mapping
//!
//! | Flag(s)  | Filter level |
//! |----------|--------------|
//! | (none)   | WARN         |
//! | `-v`     | INFO         |
//! | `-vv`    | DEBUG        |
//! | `-vvv`   | TRACE        |
//! | `--quiet`| ERROR        |
//!
//! `RUST_LOG` overrides all of the above if set. `serve` raises the floor to
//! INFO so requests are visible without `-v`.

use std::io::IsTerminal as _;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::GlobalArgs;

/// Crates whose events are shown at the selected level.
const CRATES: [&str; 4] = ["folio", "folio_core", "folio_adapters", "folio_server"];

/// Initialise the global tracing subscriber. Call once, before any event.
pub fn init_logging(args: &GlobalArgs, serving: bool) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives(args, serving)));

    let use_ansi = !args.no_color && std::io::stderr().is_terminal();

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(serving)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_ansi(use_ansi)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))?;

    Ok(())
}

fn filter_directives(args: &GlobalArgs, serving: bool) -> String {
    let level = derive_level(args, serving);
    let mut directives: Vec<String> = CRATES.iter().map(|c| format!("{c}={level}")).collect();
    if serving {
        directives.push(format!("tower_http={level}"));
    }
    directives.join(",")
}

/// Translate the verbosity counter + quiet flag to a level string.
fn derive_level(args: &GlobalArgs, serving: bool) -> &'static str {
    if args.quiet {
        return "error";
    }
    match (args.verbose, serving) {
        (0, false) => "warn",
        (0, true) | (1, _) => "info",
        (2, _) => "debug",
        _ => "trace",
    }
}
