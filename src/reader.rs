// WHY: split decisions need the whole content of a file, not a line stream,
// so the reader loads each file in one async read and reports per-file stats
// for the run report.

use anyhow::Result;
use std::path::Path;
use tokio::fs;
use tracing::{debug, warn};

/// Configuration for file reading behavior
#[derive(Debug, Clone, Default)]
pub struct ReaderConfig {
    /// Whether to fail fast on first error or continue processing
    pub fail_fast: bool,
}

/// Statistics for one file read
#[derive(Debug, Clone)]
pub struct ReadStats {
    pub file_path: String,
    pub bytes_read: u64,
    pub chars_read: u64,
    pub duration_ms: u64,
    pub read_error: Option<String>,
}

/// Async whole-file reader for content sources
pub struct ContentReader {
    config: ReaderConfig,
}

impl ContentReader {
    pub fn new(config: ReaderConfig) -> Self {
        Self { config }
    }

    /// Read a file's full content as UTF-8. A failed read yields empty
    /// content plus an error in the stats unless fail_fast is set.
    pub async fn read_content<P: AsRef<Path>>(&self, file_path: P) -> Result<(String, ReadStats)> {
        let path = file_path.as_ref();
        let start_time = std::time::Instant::now();

        debug!("Reading content file: {}", path.display());

        match fs::read_to_string(path).await {
            Ok(content) => {
                let stats = ReadStats {
                    file_path: path.display().to_string(),
                    bytes_read: content.len() as u64,
                    chars_read: content.chars().count() as u64,
                    duration_ms: start_time.elapsed().as_millis() as u64,
                    read_error: None,
                };
                Ok((content, stats))
            }
            Err(e) => {
                let error_msg = format!("Failed to read {}: {}", path.display(), e);
                warn!("{}", error_msg);

                if self.config.fail_fast {
                    anyhow::bail!(error_msg);
                }

                let stats = ReadStats {
                    file_path: path.display().to_string(),
                    bytes_read: 0,
                    chars_read: 0,
                    duration_ms: start_time.elapsed().as_millis() as u64,
                    read_error: Some(error_msg),
                };
                Ok((String::new(), stats))
            }
        }
    }
}
