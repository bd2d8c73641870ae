use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use version_scope::config::{Config, log_path};
use version_scope::cpe::{CpeMatch, is_affected};
use version_scope::version::{
    ComparisonOperator, VersionRange, compare, extract, is_valid,
};

#[derive(Parser)]
#[command(name = "version-scope")]
#[command(version, about = "Validate, extract and compare loosely structured version strings")]
struct Cli {
    /// JSON configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Write logs to the default log file instead of stderr
    #[arg(long, global = true)]
    log_to_file: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check whether a string is a recognizable version
    Valid { version: String },
    /// Print the best version found in TEXT (or stdin)
    Extract { text: Option<String> },
    /// Compare two versions with <, <=, ==, >= or >
    Compare {
        left: String,
        #[arg(value_parser = parse_operator)]
        op: ComparisonOperator,
        right: String,
    },
    /// Check whether a version lies between optional bounds
    Covered {
        version: String,
        #[arg(long)]
        min: Option<String>,
        #[arg(long)]
        max: Option<String>,
        /// Exclude the bounds themselves (overrides the configured default)
        #[arg(long)]
        exclusive: bool,
    },
    /// Check a version against a JSON array of CPE match records
    Affected {
        version: String,
        #[arg(long)]
        matches: PathBuf,
    },
}

fn parse_operator(s: &str) -> Result<ComparisonOperator, String> {
    s.parse().map_err(|e| format!("{e}"))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    if cli.log_to_file && config.log.file.is_none() {
        config.log.file = Some(log_path());
    }
    let _guard = version_scope::logging::init(&config.log)?;

    match cli.command {
        Command::Valid { version } => println!("{}", is_valid(&version)),
        Command::Extract { text } => {
            let text = match text {
                Some(text) => text,
                None => {
                    let mut buf = String::new();
                    std::io::stdin()
                        .read_to_string(&mut buf)
                        .context("failed to read stdin")?;
                    buf
                }
            };
            if let Some(found) = extract(&text) {
                println!("{found}");
            }
        }
        Command::Compare { left, op, right } => println!("{}", compare(&left, op, &right)),
        Command::Covered {
            version,
            min,
            max,
            exclusive,
        } => {
            let range = VersionRange::new(
                min.as_deref(),
                max.as_deref(),
                config.range.inclusive && !exclusive,
            );
            println!("{}", range.contains(&version)?);
        }
        Command::Affected { version, matches } => {
            let content = std::fs::read_to_string(&matches)
                .with_context(|| format!("failed to read {}", matches.display()))?;
            let records: Vec<CpeMatch> = serde_json::from_str(&content)
                .with_context(|| format!("failed to parse {}", matches.display()))?;
            println!("{}", is_affected(&version, &records));
        }
    }

    Ok(())
}
