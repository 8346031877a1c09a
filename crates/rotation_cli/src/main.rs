//! Rotation CLI
//!
//! Roster + match count + match length → fair keeper/substitution schedule
//! (CSV) and a playing-time summary on stdout. Missing values are prompted
//! for on stdin.

#[cfg(feature = "cli")]
use anyhow::{Context, Result};
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use std::io::{self, Write};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
use rotation_cli::{
    parse_count, parse_roster, prompt, render_summary, write_json, write_schedule_file,
    SeriesInput, SummaryDocument,
};
#[cfg(feature = "cli")]
use rotation_core::models::random_names;
#[cfg(feature = "cli")]
use rotation_core::{RotationConfig, SeriesSchedule};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "rotation")]
#[command(about = "Fair goalkeeper and substitution rotation for 8-a-side match series", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Generate the schedule for a series of matches
    Schedule {
        /// Number of matches (prompted if omitted)
        #[arg(long)]
        matches: Option<String>,

        /// Match length in minutes (prompted if omitted)
        #[arg(long)]
        duration: Option<String>,

        /// Comma separated player names (prompted if omitted)
        #[arg(long, conflicts_with = "random_players")]
        players: Option<String>,

        /// Use N generated player names instead of --players
        #[arg(long)]
        random_players: Option<usize>,

        /// Seed for --random-players
        #[arg(long, default_value = "7")]
        seed: u64,

        /// Minutes between substitution checkpoints (overrides the config file)
        #[arg(long)]
        interval: Option<u32>,

        /// JSON rotation config file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Output CSV file path
        #[arg(long, default_value = rotation_cli::DEFAULT_OUTPUT_PATH)]
        output: PathBuf,

        /// Also write the playing-time summary as JSON
        #[arg(long)]
        summary_json: Option<PathBuf>,

        /// Also write the rotation plans as JSON
        #[arg(long)]
        plan_json: Option<PathBuf>,
    },

    /// Print a generated demo roster
    Roster {
        /// Number of names
        #[arg(long, default_value = "10")]
        count: usize,

        /// Shuffle seed
        #[arg(long, default_value = "7")]
        seed: u64,
    },
}

#[cfg(feature = "cli")]
fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rotation_core=info,rotation_cli=info".into()),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Schedule {
            matches,
            duration,
            players,
            random_players,
            seed,
            interval,
            config,
            output,
            summary_json,
            plan_json,
        } => {
            let config = load_config(config, interval)?;

            let stdin = io::stdin();
            let mut input = stdin.lock();
            let mut stdout = io::stdout();

            println!("{}", "=".repeat(60));
            println!("8-a-side Rotation Schedule Generator");
            println!("{}", "=".repeat(60));

            let matches = match matches {
                Some(raw) => raw,
                None => prompt(&mut input, &mut stdout, "\nNumber of matches: ")?,
            };
            let match_count = parse_count("Number of matches", &matches)?;

            let duration = match duration {
                Some(raw) => raw,
                None => prompt(&mut input, &mut stdout, "Match length (minutes): ")?,
            };
            let match_duration = parse_count("Match length", &duration)?;

            let names = match (random_players, players) {
                (Some(count), _) => random_names(count, seed),
                (None, Some(raw)) => parse_roster(&raw),
                (None, None) => {
                    println!("\nEnter player names separated by commas.");
                    println!("Example: Alex,Ben,Chris,David,Emma,Felix,George,Hannah");
                    parse_roster(&prompt(&mut input, &mut stdout, "Players: ")?)
                }
            };

            let series = SeriesInput::new(names, match_count, match_duration, &config)?;
            println!("\nGenerating... ({} players)", series.names.len());

            let schedule = SeriesSchedule::generate(
                series.names,
                series.match_count,
                series.match_duration,
                &config,
            );

            write_schedule_file(&output, &schedule)?;
            println!("\nSchedule written to '{}'.", output.display());

            if let Some(path) = plan_json {
                write_json(&path, &schedule)?;
            }
            if let Some(path) = summary_json {
                write_json(&path, &SummaryDocument::new(&schedule))?;
            }

            print!("{}", render_summary(&schedule.summary()));
            stdout.flush().context("Failed to flush stdout")?;
        }

        Commands::Roster { count, seed } => {
            println!("{}", random_names(count, seed).join(","));
        }
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn load_config(path: Option<PathBuf>, interval: Option<u32>) -> Result<RotationConfig> {
    let mut config = match path {
        Some(path) => RotationConfig::load(&path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => RotationConfig::default(),
    };
    if let Some(interval) = interval {
        config = config.with_interval(interval);
    }
    config.validate().context("Invalid rotation config")?;
    tracing::debug!(?config, "rotation config");
    Ok(config)
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("rotation CLI is not available. Enable the 'cli' feature to use it.");
    std::process::exit(1);
}
