use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
    process::ExitCode,
};

use anyhow::{Context, Result};
use clap::Parser;
use content_recommender::{
    config::{DEFAULT_MAX_FEATURES, DEFAULT_TOP_N},
    ContentRecommender, Recommendation, RecommenderConfig,
};
use log::error;

const DESCRIPTION_PREVIEW_CHARS: usize = 200;

#[derive(Parser)]
#[command(
    name = "content-recommender",
    about = "Recommend items whose descriptions best match a free-text query",
    version
)]
struct Cli {
    /// CSV file with title and description columns, or a JSON array of
    /// { "title", "description" } records
    #[arg(short, long)]
    data: PathBuf,

    /// Number of recommendations to show
    #[arg(short = 'n', long, default_value_t = DEFAULT_TOP_N)]
    top_n: usize,

    /// Vocabulary size cap (0 disables the cap)
    #[arg(long, default_value_t = DEFAULT_MAX_FEATURES)]
    max_features: usize,

    /// Query text; prompts on stdin when omitted
    #[arg(short, long)]
    query: Option<String>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            error!("Unexpected error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = RecommenderConfig::new()
        .top_n(cli.top_n)
        .max_features(cli.max_features);
    let mut recommender = ContentRecommender::new(config);

    if let Err(e) = recommender.load_file(&cli.data) {
        error!("Error loading dataset {}: {}", cli.data.display(), e);
        eprintln!("Failed to load data. Exiting.");
        return Ok(ExitCode::FAILURE);
    }
    if recommender.documents().is_empty() {
        eprintln!("No data loaded: {} contains no usable records.", cli.data.display());
        return Ok(ExitCode::FAILURE);
    }
    recommender.build();

    let query = match cli.query {
        Some(q) => q,
        None => prompt()?,
    };
    let query = query.trim();
    if query.is_empty() {
        eprintln!("Error: Description cannot be empty.");
        return Ok(ExitCode::FAILURE);
    }

    let recs = recommender
        .recommend_default(query)
        .context("ranking failed")?;
    if recs.is_empty() || recs.iter().all(|r| r.score <= 0.0) {
        println!("\nNo recommendations found. Please try a different description.");
        return Ok(ExitCode::SUCCESS);
    }
    print_recommendations(&recs);
    Ok(ExitCode::SUCCESS)
}

fn prompt() -> Result<String> {
    println!("\nWelcome to the Content-Based Recommendation System!");
    println!("------------------------------------------------");
    print!("\nPlease describe what you're looking for: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read query from stdin")?;
    Ok(line)
}

fn print_recommendations(recs: &[Recommendation]) {
    println!("\nTop Recommendations:");
    println!("-------------------");
    for (i, rec) in recs.iter().enumerate() {
        let preview: String = rec.description.chars().take(DESCRIPTION_PREVIEW_CHARS).collect();
        println!("\n{}. {}", i + 1, rec.title);
        println!("   Similarity Score: {:.4}", rec.score);
        println!("   Description: {}...", preview);
    }
}
