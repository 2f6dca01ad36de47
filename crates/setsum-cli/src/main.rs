// Interactive setsum shell over stdin/stdout

use std::io;

use anyhow::Context;
use clap::Parser;
use setsum::{Setsum, Shell, ShellConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "setsum")]
#[command(about = "Order-independent multiset checksum shell", long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Stop on a malformed merge/subtract digest instead of reporting it
    #[arg(long)]
    strict: bool,

    /// Prompt written before each line is read
    #[arg(short, long)]
    prompt: Option<String>,

    /// Hex digest to start the running checksum from
    #[arg(short, long, value_name = "HEX_DIGEST")]
    initial: Option<String>,

    /// Print a JSON session report to stderr on exit
    #[arg(long)]
    report: bool,
}

impl Cli {
    fn shell_config(&self) -> anyhow::Result<ShellConfig> {
        let initial = match &self.initial {
            Some(hex_digest) => Setsum::from_hex_digest(hex_digest)
                .with_context(|| format!("invalid --initial digest {:?}", hex_digest))?,
            None => Setsum::default(),
        };
        Ok(ShellConfig {
            prompt: self.prompt.clone(),
            strict: self.strict,
            initial,
        })
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout carries only shell output.
    let log_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = cli.shell_config()?;
    tracing::debug!(
        "starting shell: strict={}, initial={}",
        config.strict,
        config.initial
    );
    let report = Shell::new(config)
        .run(io::stdin().lock(), io::stdout().lock())
        .context("shell session failed")?;

    if cli.report {
        eprintln!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(())
}
