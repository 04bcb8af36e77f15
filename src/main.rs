mod describe;
mod error;
mod report;
mod schedule;
mod source;
mod upcoming;

use std::path::PathBuf;

use anyhow::{bail, Result};
use chrono::Utc;
use clap::Parser;

use report::ExpressionReport;
use source::file::DEFAULT_INPUT_FILE;

/// Inspect cron expressions: upcoming run times, a plain-English
/// description, and a CSV summary table.
#[derive(Parser)]
#[command(name = "cron-preview", version, about)]
struct Cli {
    /// Cron expressions to inspect (five fields each, quoted)
    expressions: Vec<String>,

    /// Read expressions from the input file instead of the arguments
    #[arg(long)]
    file: bool,

    /// Input file read with --file, one expression per line
    #[arg(long, default_value = DEFAULT_INPUT_FILE)]
    input: PathBuf,

    /// Inspect the built-in demonstration expressions
    #[arg(long)]
    builtin: bool,

    /// Where the CSV summary is written
    #[arg(short, long, default_value = "cron_schedule.csv")]
    output: PathBuf,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let source = source::create_source(cli.builtin, cli.file, &cli.input, &cli.expressions);

    let expressions = source.load()?;
    if expressions.is_empty() {
        bail!("No cron expressions given. Pass them as arguments, or use --file / --builtin.");
    }
    log::info!(
        "Loaded {} expression(s) from source: {}",
        expressions.len(),
        source.source_name()
    );

    let now = Utc::now();
    let mut rows = Vec::new();
    for text in &expressions {
        match ExpressionReport::build(text, now) {
            Ok(report) => {
                println!("{}", report.render_block());
                rows.push(report.to_row());
            }
            Err(err) => {
                log::error!("Skipping '{}': {}", text, err);
            }
        }
    }

    report::write_csv(&cli.output, &rows)?;
    println!("CSV file created successfully: {}", cli.output.display());

    Ok(())
}
