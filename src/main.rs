use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use colored::Colorize;
use prettytable::{format, row, Table};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use tracing::{info, warn};

use clarion::feed::parse_feed;
use clarion::logging::configure_logging;
use clarion::{FilterKeyword, Pipeline, PipelineOutput, PipelineParams, Source};

/// Score, cluster, and annotate already-fetched news feeds.
#[derive(Parser, Debug)]
#[command(name = "clarion", version, about)]
struct Cli {
    /// JSON file listing sources and their feed file paths
    #[arg(long)]
    sources: PathBuf,

    /// Optional JSON file with custom filter keywords
    #[arg(long)]
    keywords: Option<PathBuf>,

    /// Recency window: 6h, 12h, 24h, 48h, week, all
    #[arg(long, default_value = "24h")]
    recency: String,

    /// Per-source cap: 5, 10, 15, 20, none
    #[arg(long = "per-source", default_value = "10")]
    per_source: String,

    /// Disable same-story clustering
    #[arg(long = "no-cluster")]
    no_cluster: bool,

    /// Emit the full annotated output as JSON instead of a table
    #[arg(long)]
    json: bool,
}

/// One entry in the sources file.
#[derive(Debug, Deserialize)]
struct SourceSpec {
    id: String,
    name: String,
    #[serde(default)]
    bias: String,
    #[serde(default)]
    factual: String,
    /// Path to the already-fetched feed file
    feed: PathBuf,
    #[serde(default)]
    content_type: Option<String>,
}

fn main() -> Result<()> {
    configure_logging();
    let cli = Cli::parse();

    let params = PipelineParams {
        recency: cli
            .recency
            .parse()
            .map_err(|e: String| anyhow::anyhow!(e))?,
        per_source_cap: cli
            .per_source
            .parse()
            .map_err(|e: String| anyhow::anyhow!(e))?,
        clustering: !cli.no_cluster,
    };

    let specs: Vec<SourceSpec> = {
        let text = fs::read_to_string(&cli.sources)
            .with_context(|| format!("reading sources file {}", cli.sources.display()))?;
        serde_json::from_str(&text).context("parsing sources file")?
    };

    let keywords: Vec<FilterKeyword> = match &cli.keywords {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading keywords file {}", path.display()))?;
            serde_json::from_str(&text).context("parsing keywords file")?
        }
        None => Vec::new(),
    };

    let mut batches = Vec::new();
    for spec in specs {
        let source = Source {
            id: spec.id.clone(),
            name: spec.name.clone(),
            bias: spec.bias.as_str().into(),
            factual: spec.factual.as_str().into(),
        };
        let text = match fs::read_to_string(&spec.feed) {
            Ok(text) => text,
            Err(err) => {
                warn!("Skipping source {}: cannot read {}: {}", spec.id, spec.feed.display(), err);
                continue;
            }
        };
        match parse_feed(&text, spec.content_type.as_deref()) {
            Ok(entries) => {
                info!("Parsed {} entries from {}", entries.len(), spec.name);
                batches.push((source, entries));
            }
            Err(err) => {
                warn!("Skipping source {}: {}", spec.id, err);
            }
        }
    }

    let output = Pipeline::new().run(&batches, &keywords, &params, Utc::now());

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_table(&output);
    }
    Ok(())
}

fn print_table(output: &PipelineOutput) {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_CLEAN);
    table.set_titles(row!["Cluster", "Score", "Grade", "Source", "Title", "Published"]);

    for ranked in &output.articles {
        let cluster = &output.clusters[ranked.cluster_id];
        let cluster_label = if ranked.is_representative && cluster.is_cluster() {
            format!("#{} {} (x{})", cluster.id, cluster.topic, cluster.size())
        } else if ranked.is_representative {
            format!("#{}", cluster.id)
        } else {
            format!("#{} \u{2514}", cluster.id)
        };

        let score = ranked.article.score.to_string();
        let score_colored = match ranked.grade.letter {
            "A" => score.green(),
            "B" => score.bright_green(),
            "C" => score.yellow(),
            "D" => score.bright_yellow(),
            _ => score.red(),
        };

        let published = ranked
            .article
            .published_at
            .map(|p| p.format("%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "unknown".to_string());

        table.add_row(row![
            cluster_label,
            score_colored,
            ranked.grade.letter,
            ranked.article.source_id,
            truncate(&ranked.article.title, 70),
            published
        ]);
    }

    table.printstd();
    println!(
        "{} articles in {} clusters",
        output.articles.len(),
        output.clusters.len()
    );
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        text.chars().take(max - 1).collect::<String>() + "\u{2026}"
    }
}
