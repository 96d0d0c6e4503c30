// WHY: content files arrive as plain *.txt dumps nested under a root
// directory. Discovery walks them with a recursive glob, validates UTF-8 up
// front, and leaves the split decision to the caller.

use anyhow::Result;
use glob::glob;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, warn};

/// Configuration for file discovery behavior
#[derive(Debug, Clone, Default)]
pub struct DiscoveryConfig {
    /// Whether to fail fast on first error or continue processing
    pub fail_fast: bool,
}

/// Result of file discovery validation
#[derive(Debug, Clone)]
pub struct DiscoveredFile {
    pub path: PathBuf,
    pub is_valid_utf8: bool,
    pub error: Option<String>,
}

/// Discover all `*.txt` files recursively under `root_dir`, validating each
/// as UTF-8. Slice aux files produced by a previous run are excluded so a
/// re-run never re-splits its own output.
pub async fn collect_discovered_files(
    root_dir: impl AsRef<Path>,
    config: DiscoveryConfig,
) -> Result<Vec<DiscoveredFile>> {
    let pattern = format!("{}/**/*.txt", root_dir.as_ref().display());
    let mut discovered = Vec::new();

    for entry in glob(&pattern)? {
        let path = match entry {
            Ok(path) => path,
            Err(e) => {
                warn!("Glob error during discovery: {}", e);
                if config.fail_fast {
                    anyhow::bail!("File discovery failed: {}", e);
                }
                continue;
            }
        };

        if !path.is_file() || crate::output::is_slice_file(&path) {
            continue;
        }

        debug!("Validating discovered file: {}", path.display());
        let file = match fs::read(&path).await {
            Ok(bytes) => {
                let is_valid_utf8 = String::from_utf8(bytes).is_ok();
                DiscoveredFile {
                    path,
                    is_valid_utf8,
                    error: None,
                }
            }
            Err(e) => {
                let error = format!("Failed to read file: {e}");
                if config.fail_fast {
                    anyhow::bail!("{}: {}", path.display(), error);
                }
                DiscoveredFile {
                    path,
                    is_valid_utf8: false,
                    error: Some(error),
                }
            }
        };

        discovered.push(file);
    }

    Ok(discovered)
}
