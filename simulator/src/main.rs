//! Print the distance tables of every router, round by round, until they converge.

use clap::{Arg, ArgAction, Command};
use simulator::{simulate, Config, Error, Format, Output};
use std::{
    io::{self, BufWriter},
    path::PathBuf,
    process::ExitCode,
};
use tracing::{error, info};

/// Returns the version of the crate.
pub const fn crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Flag for verbose output
const VERBOSE_FLAG: &str = "verbose";

/// Path that selects standard input
const STDIN: &str = "-";

fn main() -> ExitCode {
    // Define application
    let matches = Command::new("distvec")
        .version(crate_version())
        .about("Simulate synchronous distance-vector routing and print every round.")
        .arg(
            Arg::new("topology")
                .help("Path to the topology file (reads standard input if omitted or `-`)")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .help("Topology encoding (inferred from the file extension if omitted)")
                .value_parser(["text", "yaml"]),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .default_value("text")
                .help("Encoding of the rounds written to standard output")
                .value_parser(["text", "json"]),
        )
        .arg(
            Arg::new("max-rounds")
                .long("max-rounds")
                .help("Stop after this many rounds of relaxation even if not converged")
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(
            Arg::new(VERBOSE_FLAG)
                .short('v')
                .long(VERBOSE_FLAG)
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    // Create logger
    let level = if matches.get_flag(VERBOSE_FLAG) {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    // Run simulation
    let path = matches
        .get_one::<PathBuf>("topology")
        .filter(|path| path.as_os_str() != STDIN);
    let format = matches.get_one::<String>("format").map(String::as_str);
    let output = matches
        .get_one::<String>("output")
        .map_or("text", String::as_str);
    let max_rounds = matches.get_one::<u64>("max-rounds").copied();
    match run(path, format, output, max_rounds) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = ?e, "simulation failed");
            ExitCode::FAILURE
        }
    }
}

fn run(
    path: Option<&PathBuf>,
    format: Option<&str>,
    output: &str,
    max_rounds: Option<u64>,
) -> Result<(), Error> {
    let (content, inferred) = match path {
        Some(path) => (std::fs::read_to_string(path)?, Format::infer(path)),
        None => (io::read_to_string(io::stdin())?, Format::Text),
    };
    let config = Config {
        format: format.map_or(Ok(inferred), str::parse)?,
        output: output.parse::<Output>()?,
        max_rounds,
    };
    info!(?config, "loaded topology");

    let mut out = BufWriter::new(io::stdout().lock());
    let summary = simulate(&content, &config, &mut out)?;
    info!(rounds = summary.rounds, stable = summary.stable, "simulation complete");
    Ok(())
}
