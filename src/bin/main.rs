use std::io::BufRead;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::warn;

use method_sig::logging::SimpleLogger;
use method_sig::parser;

/// Parse Java-like method signatures and print their parts.
#[derive(Parser, Debug)]
#[command(name = "method-sig", version)]
struct Cli {
    /// Signatures to parse, e.g. "private void log(String value)". Read one per line from
    /// stdin when none are given.
    signatures: Vec<String>,

    /// Print results as JSON instead of Rust debug output.
    #[arg(long)]
    json: bool,

    /// Raise the log level (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn print_signature(signature: &str, json: bool) -> Result<()> {
    let parsed = parser::parse(signature).with_context(|| format!("cannot parse {:?}", signature))?;
    if json {
        println!("{}", serde_json::to_string_pretty(&parsed)?);
    } else {
        println!("{:#?}", parsed);
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    SimpleLogger::init(SimpleLogger::level_for_verbosity(cli.verbose))
        .context("failed to install logger")?;

    let signatures = if cli.signatures.is_empty() {
        std::io::stdin()
            .lock()
            .lines()
            .collect::<std::io::Result<Vec<_>>>()
            .context("failed to read signatures from stdin")?
            .into_iter()
            .filter(|line| !line.trim().is_empty())
            .collect()
    } else {
        cli.signatures
    };

    let mut failures = 0;
    for signature in &signatures {
        if let Err(e) = print_signature(signature, cli.json) {
            warn!("{:#}", e);
            failures += 1;
        }
    }

    if failures > 0 {
        bail!("{} of {} signatures failed to parse", failures, signatures.len());
    }
    Ok(())
}
