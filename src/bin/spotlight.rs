//! Command-line front-end for the spotlight pipeline.
//!
//! Collects (company name, website URL) pairs from `--pair` flags or a
//! pairs file, runs the batch, and prints the combined report.

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use spotlight::{
    run_batch, HttpFetcher, OllamaGenerator, PipelineConfig, MAX_BATCH_SIZE,
};

#[derive(Debug, Parser)]
#[command(name = "spotlight", about = "Generate social-media posts from company homepages")]
struct Args {
    /// A company/website pair as "Name=URL"; repeatable, up to 12
    #[arg(long = "pair", value_name = "NAME=URL")]
    pairs: Vec<String>,

    /// File of pairs, one "name,url" per line; '#' starts a comment
    #[arg(long, value_name = "FILE")]
    pairs_file: Option<std::path::PathBuf>,

    /// Model identifier for the generation backend
    #[arg(long, env = "SPOTLIGHT_MODEL", default_value = "llama3.1:latest")]
    model: String,

    /// Base URL of the Ollama server
    #[arg(long, env = "SPOTLIGHT_OLLAMA_URL", default_value = "http://localhost:11434")]
    ollama_url: String,

    /// Directory artifacts are written to
    #[arg(long, default_value = "output")]
    output_dir: std::path::PathBuf,
}

/// Parse one "Name=URL" argument.
fn parse_pair(raw: &str) -> Result<(String, String)> {
    match raw.split_once('=') {
        Some((name, url)) => Ok((name.to_string(), url.to_string())),
        None => bail!("invalid pair {raw:?}: expected \"Name=URL\""),
    }
}

/// Read pairs from a file of "name,url" lines.
fn read_pairs_file(path: &std::path::Path) -> Result<Vec<(String, String)>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read pairs file {}", path.display()))?;

    let mut pairs = Vec::new();
    for (lineno, line) in raw.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let (name, url) = line
            .split_once(',')
            .with_context(|| format!("{}:{}: expected \"name,url\"", path.display(), lineno + 1))?;
        pairs.push((name.to_string(), url.to_string()));
    }

    Ok(pairs)
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let mut pairs: Vec<(String, String)> = args
        .pairs
        .iter()
        .map(|p| parse_pair(p))
        .collect::<Result<_>>()?;

    if let Some(path) = &args.pairs_file {
        pairs.extend(read_pairs_file(path)?);
    }

    if pairs.is_empty() {
        bail!("no pairs given; use --pair \"Name=URL\" or --pairs-file");
    }
    if pairs.len() > MAX_BATCH_SIZE {
        bail!("too many pairs: {} given, at most {} accepted", pairs.len(), MAX_BATCH_SIZE);
    }

    let config = PipelineConfig::new()
        .with_model(args.model)
        .with_output_dir(args.output_dir);
    let fetcher = HttpFetcher::new();
    let generator = OllamaGenerator::with_base_url(args.ollama_url);

    let report = run_batch(&pairs, &config, &fetcher, &generator).await;
    println!("{report}");

    Ok(())
}
