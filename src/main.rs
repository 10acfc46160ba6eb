//! swingrecs - rank the artists missing from a music library

use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tracing::info;

use swingrecs::config::{Paths, RecommenderConfig};
use swingrecs::io::{read_table, write_recommendations, TableFormat};
use swingrecs::models::format_number;
use swingrecs::Recommender;

/// swingrecs - missing-artist recommendations
#[derive(Parser, Debug)]
#[command(name = "swingrecs")]
#[command(author = "swingmx")]
#[command(version)]
#[command(about = "Recommend artists similar to your library that you don't own yet")]
struct Args {
    /// Library table (csv, tsv or json)
    input: PathBuf,

    /// Where to write recommendations (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Input format, guessed from the extension when omitted
    #[arg(long)]
    input_format: Option<TableFormat>,

    /// Output format, guessed from the output extension when omitted
    #[arg(long)]
    output_format: Option<TableFormat>,

    /// Keep only the top N recommendations
    #[arg(long)]
    limit: Option<usize>,

    /// Drop recommendations scoring below this
    #[arg(long)]
    min_score: Option<f64>,

    /// Merge spellings of the same artist into one recommendation
    #[arg(long)]
    group_by_key: bool,

    /// Path to a settings file (defaults to settings.json in the config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable debug mode
    #[arg(long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

    // logs go to stderr so stdout stays clean for the output table
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .init();

    let config = load_config(&args)?;
    run(&args, config)
}

fn load_config(args: &Args) -> Result<RecommenderConfig> {
    let mut config = match &args.config {
        Some(path) => RecommenderConfig::load(path, true)?,
        None => RecommenderConfig::load(&Paths::new(None).settings_path(), false)?,
    };

    // command line wins over settings
    config.apply_overrides(args.limit, args.min_score, args.group_by_key);

    config.validate()?;
    Ok(config)
}

fn run(args: &Args, config: RecommenderConfig) -> Result<()> {
    let table = read_table(&args.input, args.input_format, config.delimiter_byte()?)
        .with_context(|| format!("Failed to read library table {:?}", args.input))?;
    info!("Loaded {} library rows from {:?}", table.len(), args.input);

    let log_top = config.log_top;
    let recommender = Recommender::new(config);
    let recommendations = recommender
        .recommend(&table)
        .context("Failed to compute recommendations")?;

    info!("Found {} missing artists", recommendations.len());
    for (rank, rec) in recommendations.iter().take(log_top).enumerate() {
        info!(
            "#{} {} (score {:.3}, {} related, {} plays)",
            rank + 1,
            rec.missing_artist,
            rec.priority_score,
            rec.recommendation_count,
            format_number(rec.related_total_plays)
        );
    }

    let output_format = args
        .output_format
        .or_else(|| args.output.as_deref().and_then(TableFormat::from_path))
        .unwrap_or(TableFormat::Csv);

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file {:?}", path))?;
            let mut writer = BufWriter::new(file);
            write_recommendations(&mut writer, output_format, &recommendations)?;
            writer.flush()?;
            info!("Wrote recommendations to {:?}", path);
        }
        None => {
            write_recommendations(io::stdout().lock(), output_format, &recommendations)?;
        }
    }

    Ok(())
}
