//! label-perf - classify benchmark output against a performance threshold
//!
//! Prints exactly one of `good`, `bad` or `skip` on stdout. Logs go to stderr.
//!
//! # Usage
//! ```sh
//! label-perf 200 micros/op greater perf.txt
//! label-perf 700 MB/S less perf.txt
//! ```

use anyhow::Result;
use clap::Parser;
use clap::error::ErrorKind;
use label_perf::application::labeler::PerfLabeler;
use label_perf::config::Config;
use label_perf::domain::performance::Threshold;
use label_perf::interfaces::cli::{Cli, Invocation, usage_text};
use std::fmt::Display;
use std::io::Write;
use tracing::debug;

fn main() -> Result<()> {
    // Usage and help never depend on configuration
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.print()?;
            return Ok(());
        }
        Err(err) => usage_exit(err),
    };

    let invocation = match Invocation::from_args(&cli.args) {
        Ok(invocation) => invocation,
        Err(err) => usage_exit(err),
    };

    // Load environment variables
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;

    // Setup logging (stderr only, stdout carries the classification)
    tracing_subscriber::fmt()
        .with_env_filter(config.env_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let threshold = Threshold::new(invocation.value, invocation.unit, &invocation.direction)?;
    debug!(
        "Threshold: {}, file: {}, on_malformed: {}",
        threshold,
        invocation.path.display(),
        config.on_malformed
    );

    let labeler = PerfLabeler::new(threshold, config.on_malformed);
    let classification = labeler.label_file(&invocation.path)?;
    println!("{}", classification);

    Ok(())
}

fn usage_exit(reason: impl Display) -> ! {
    eprintln!("{}", reason);
    print!("{}", usage_text());
    std::io::stdout().flush().ok();
    std::process::exit(1);
}
