use anyhow::Result;
use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;
use tracing::{info, warn};

use typeslice::discovery::{self, DiscoveryConfig};
use typeslice::output;
use typeslice::reader::{ContentReader, ReaderConfig};
use typeslice::segmenter::{preview_split, split_text, SplitOptions};

#[derive(Parser, Debug)]
#[command(name = "typeslice")]
#[command(about = "Splits literary text files into typing-sized segments")]
#[command(version)]
struct Args {
    /// Root directory to scan for *.txt content files
    root_dir: PathBuf,

    /// Only split files longer than this many characters
    #[arg(long, default_value_t = 200)]
    threshold: usize,

    /// Soft maximum segment length in characters
    #[arg(long, default_value_t = 150)]
    max_length: usize,

    /// Minimum accumulated length before a boundary flush
    #[arg(long, default_value_t = 30)]
    min_length: usize,

    /// Print split previews as JSON instead of writing slice files
    #[arg(long)]
    preview: bool,

    /// Re-split files that already have a slice file
    #[arg(long)]
    overwrite_all: bool,

    /// Abort on first error
    #[arg(long)]
    fail_fast: bool,

    /// Stats output file path
    #[arg(long, default_value = "run_stats.json")]
    stats_out: PathBuf,
}

/// Per-run counters written to the stats file.
#[derive(Debug, Default, Serialize)]
struct RunStats {
    files_discovered: usize,
    files_invalid: usize,
    files_below_threshold: usize,
    files_already_sliced: usize,
    files_unsplittable: usize,
    files_split: usize,
    segments_written: usize,
    duration_ms: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    // WHY: structured JSON logging enables observability and debugging in production
    tracing_subscriber::fmt()
        .with_target(false)
        .json()
        .init();

    let args = Args::parse();

    info!("Starting typeslice");
    info!(?args, "Parsed CLI arguments");

    // WHY: validate root directory exists early to fail fast with clear error
    if !args.root_dir.exists() {
        anyhow::bail!("Root directory does not exist: {}", args.root_dir.display());
    }

    if !args.root_dir.is_dir() {
        anyhow::bail!("Root path is not a directory: {}", args.root_dir.display());
    }

    let start_time = std::time::Instant::now();
    let mut stats = RunStats::default();

    let discovery_config = DiscoveryConfig {
        fail_fast: args.fail_fast,
    };

    info!("Starting file discovery in: {}", args.root_dir.display());
    let discovered_files = discovery::collect_discovered_files(&args.root_dir, discovery_config).await?;
    stats.files_discovered = discovered_files.len();

    let valid_files: Vec<_> = discovered_files
        .iter()
        .filter(|f| f.is_valid_utf8 && f.error.is_none())
        .collect();
    stats.files_invalid = discovered_files.len() - valid_files.len();

    info!("File discovery completed: {} total files found", discovered_files.len());
    for file in &discovered_files {
        if let Some(ref error) = file.error {
            warn!("Issue with {}: {}", file.path.display(), error);
        } else if !file.is_valid_utf8 {
            warn!("UTF-8 validation failed: {}", file.path.display());
        }
    }

    println!("typeslice v{} - scanning {}", env!("CARGO_PKG_VERSION"), args.root_dir.display());
    println!("Found {} content files ({} with issues)", discovered_files.len(), stats.files_invalid);

    let reader = ContentReader::new(ReaderConfig {
        fail_fast: args.fail_fast,
    });
    let options = SplitOptions {
        max_length: args.max_length,
        min_length: args.min_length,
    };

    for file in valid_files {
        let (content, read_stats) = reader.read_content(&file.path).await?;
        if read_stats.read_error.is_some() {
            stats.files_invalid += 1;
            continue;
        }

        // Threshold check is the caller's policy: short content is left whole.
        if (read_stats.chars_read as usize) <= args.threshold {
            stats.files_below_threshold += 1;
            continue;
        }

        if !args.preview && !args.overwrite_all && output::slice_file_exists(&file.path) {
            info!("Slice file already exists, skipping: {}", file.path.display());
            stats.files_already_sliced += 1;
            continue;
        }

        if args.preview {
            let preview = preview_split(&content, &options);
            let json = serde_json::to_string_pretty(&preview)?;
            println!("--- {}", file.path.display());
            println!("{json}");
            stats.files_split += 1;
            stats.segments_written += preview.segment_count;
            continue;
        }

        let segments = split_text(&content, &options);

        // A split that produced nothing new is not worth persisting.
        if segments.len() <= 1 {
            warn!("No meaningful split for {}", file.path.display());
            stats.files_unsplittable += 1;
            continue;
        }

        let slice_path = output::write_slice_file(&file.path, &segments)?;
        info!(
            "Split {} into {} segments -> {}",
            file.path.display(),
            segments.len(),
            slice_path.display()
        );
        println!(
            "  {} : {} chars -> {} segments",
            file.path.display(),
            read_stats.chars_read,
            segments.len()
        );

        stats.files_split += 1;
        stats.segments_written += segments.len();
    }

    stats.duration_ms = start_time.elapsed().as_millis() as u64;

    let stats_json = serde_json::to_string_pretty(&stats)?;
    tokio::fs::write(&args.stats_out, &stats_json).await?;
    info!("Run stats written to {}", args.stats_out.display());

    println!("Split complete:");
    println!("  Files split: {}", stats.files_split);
    println!("  Segments written: {}", stats.segments_written);
    println!(
        "  Skipped: {} below threshold, {} already sliced, {} unsplittable",
        stats.files_below_threshold, stats.files_already_sliced, stats.files_unsplittable
    );

    Ok(())
}
