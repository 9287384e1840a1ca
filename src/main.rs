//! looptrap - link-layer loop detector CLI.
//!
//! Probes each selected interface with a fingerprinted broadcast frame
//! and waits for the switching fabric to hand it back. Opening the raw
//! channels requires elevated privileges; without them every interface
//! reports a transport failure rather than crashing the run.

use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use looptrap::discovery::{self, Selector};
use looptrap::orchestrator;
use looptrap::reporter::{ConsoleReporter, ProbeReporter};
use looptrap::transport::PnetOpener;

#[derive(Parser)]
#[command(name = "looptrap")]
#[command(about = "Detects link-layer loops by probing interfaces with fingerprinted frames")]
struct Cli {
    /// Interface to probe, or `any` to probe every eligible interface
    interface: String,

    /// Seconds to wait for each probe to come back
    #[arg(default_value_t = 10, value_parser = clap::value_parser!(u64).range(1..))]
    timeout: u64,

    /// Enable verbose diagnostics on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match detect(&cli) {
        // The exit status carries the loop count; the per-interface
        // lines remain authoritative once it saturates.
        Ok(detected) => ExitCode::from(detected.min(u8::MAX as usize) as u8),
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn detect(cli: &Cli) -> anyhow::Result<usize> {
    let selector = Selector::from_arg(&cli.interface);
    let interfaces = discovery::discover(&selector)
        .with_context(|| format!("failed to discover interfaces for '{}'", cli.interface))?;

    let reporter: Arc<dyn ProbeReporter> = Arc::new(ConsoleReporter::new());
    reporter.on_start(interfaces.len());

    let result = orchestrator::run(
        interfaces,
        Duration::from_secs(cli.timeout),
        Arc::new(PnetOpener),
        Arc::clone(&reporter),
    );
    Ok(result.detected_count())
}
