use crate::config::BatchConfigFile;
use crate::errors::{AppError, AppResult};
use crate::models::{AccessionNumber, Cik, Resource};
use crate::urls::build_url;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;

// CLI metadata constants
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
const APP_AUTHOR: &str = env!("CARGO_PKG_AUTHORS");
const APP_ABOUT: &str = env!("CARGO_PKG_DESCRIPTION");

/// Builds the `edgar-urls` command definition.
///
/// - `url`: build a single URL from a resource name, CIK and optional accession number
/// - `toml`: build every URL listed in a TOML batch file
pub fn build_command() -> Command<'static> {
    Command::new("edgar-urls")
        .version(APP_VERSION)
        .author(APP_AUTHOR)
        .about(APP_ABOUT)
        .subcommand(
            Command::new("url")
                .about("Print the URL of a single EDGAR resource")
                .after_help("Resources: entity-page, entity-page-alternate, insider-transactions,\nowner-transactions, entity-json, filing, filing-header, filing-page\nExample:\n  edgar-urls url filing --cik 320193 --accession 0000320193-20-000096")
                .arg(
                    Arg::new("resource")
                        .help("Resource name or alias (e.g. 'filing', 'hdr', 'json')")
                        .required(true)
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    Arg::new("cik")
                        .short('c')
                        .long("cik")
                        .help("Central Index Key, with or without leading zeros")
                        .required(true)
                        .value_parser(clap::value_parser!(String))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("accession")
                        .short('a')
                        .long("accession")
                        .help("Accession number (NNNNNNNNNN-YY-NNNNNN), required for filing resources")
                        .value_parser(clap::value_parser!(String))
                        .action(ArgAction::Set),
                ),
        )
        .subcommand(
            Command::new("toml")
                .about("Print every URL requested in a TOML batch file")
                .arg(
                    Arg::new("config")
                        .help("Path to the TOML batch file")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf)),
                ),
        )
}

/// Parses command-line arguments and prints the requested URLs to stdout.
///
/// Without a subcommand the help text is printed.
///
/// # Errors
///
/// Returns an error if a resource, CIK or accession number is invalid, if the
/// batch file cannot be loaded, or if writing to stdout fails.
pub fn cli() -> AppResult<()> {
    let cmd = build_command();
    let mut cmd_for_help = cmd.clone();
    let matches = cmd.get_matches();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if !run(&matches, &mut out)? {
        cmd_for_help
            .print_help()
            .map_err(|e| AppError::IoError(format!("Failed to print help: {e}")))?;
    }
    Ok(())
}

/// Executes the matched subcommand, writing one URL per line to `out`.
///
/// Returns `false` when no subcommand was given.
pub fn run<W: Write>(matches: &ArgMatches, out: &mut W) -> AppResult<bool> {
    match matches.subcommand() {
        Some(("url", sub)) => {
            let resource: Resource = sub
                .get_one::<String>("resource")
                .expect("resource is required")
                .parse()?;
            let cik: Cik = sub
                .get_one::<String>("cik")
                .expect("cik is required")
                .parse()?;
            let accession = sub.get_one::<String>("accession").map(|s| s.as_str());

            let url = build_url(resource, cik.value(), accession)?;
            writeln!(out, "{url}")?;
        }
        Some(("toml", sub)) => {
            let config_path = sub
                .get_one::<PathBuf>("config")
                .expect("config is required");

            let requests = BatchConfigFile::from_toml_file(config_path)?;
            info!(
                path = %config_path.display(),
                requests = requests.len(),
                "Loaded batch file"
            );

            // Build every URL before printing so a failing batch prints nothing.
            let urls = requests
                .iter()
                .map(|request| {
                    build_url(
                        request.resource,
                        request.cik.value(),
                        request.accession.as_ref().map(AccessionNumber::as_str),
                    )
                })
                .collect::<AppResult<Vec<_>>>()?;
            for url in &urls {
                writeln!(out, "{url}")?;
            }
        }
        _ => return Ok(false),
    }

    Ok(true)
}
