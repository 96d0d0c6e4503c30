// WHY: slice files sit next to their source so a practice session (or a
// re-run) can find the segments without a database. Format is one
// `index<TAB>segment` line per segment, 1-based, trailing newline guaranteed.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const SLICE_SUFFIX: &str = "_slices";

/// Generate the slice aux file path for a source file,
/// e.g. `poems/나그네.txt` -> `poems/나그네_slices.txt`.
pub fn generate_slice_file_path(source_path: &Path) -> PathBuf {
    let mut slice_path = source_path.to_path_buf();
    let file_stem = slice_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("unknown");
    slice_path.set_file_name(format!("{file_stem}{SLICE_SUFFIX}.txt"));
    slice_path
}

/// Check whether a slice aux file already exists for the given source.
pub fn slice_file_exists<P: AsRef<Path>>(source_path: P) -> bool {
    generate_slice_file_path(source_path.as_ref()).exists()
}

/// Whether a path is itself a slice aux file from a previous run.
pub fn is_slice_file(path: &Path) -> bool {
    path.file_stem()
        .and_then(|s| s.to_str())
        .is_some_and(|stem| stem.ends_with(SLICE_SUFFIX))
}

/// Write segments to the slice aux file for `source_path`, one
/// `index\tsegment` line each. Returns the written path.
pub fn write_slice_file<P: AsRef<Path>>(source_path: P, segments: &[String]) -> Result<PathBuf, io::Error> {
    let slice_path = generate_slice_file_path(source_path.as_ref());

    let mut content = String::new();
    for (idx, segment) in segments.iter().enumerate() {
        content.push_str(&format!("{}\t{}\n", idx + 1, segment));
    }

    fs::write(&slice_path, content)?;
    Ok(slice_path)
}

/// Read a slice aux file back into its segments.
///
/// Lines without a tab separator are skipped rather than rejected, so a
/// hand-edited file still loads.
pub fn read_slice_file<P: AsRef<Path>>(source_path: P) -> Result<Vec<String>, io::Error> {
    let slice_path = generate_slice_file_path(source_path.as_ref());
    let content = fs::read_to_string(slice_path)?;

    let segments = content
        .lines()
        .filter_map(|line| line.split_once('\t'))
        .map(|(_, segment)| segment.to_string())
        .collect();

    Ok(segments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_slice_path_generation() {
        let path = generate_slice_file_path(Path::new("poems/나그네.txt"));
        assert_eq!(path, Path::new("poems/나그네_slices.txt"));
    }

    #[test]
    fn test_is_slice_file() {
        assert!(is_slice_file(Path::new("poems/나그네_slices.txt")));
        assert!(!is_slice_file(Path::new("poems/나그네.txt")));
    }

    #[test]
    fn test_write_and_read_round_trip() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let source = temp_dir.path().join("novel.txt");
        std::fs::write(&source, "원본 본문").expect("Failed to write source");

        let segments = vec!["첫 세그먼트.".to_string(), "둘째 세그먼트.".to_string()];

        assert!(!slice_file_exists(&source));
        let written = write_slice_file(&source, &segments).expect("Failed to write slice file");
        assert!(slice_file_exists(&source));

        let raw = std::fs::read_to_string(&written).expect("Failed to read slice file");
        assert_eq!(raw, "1\t첫 세그먼트.\n2\t둘째 세그먼트.\n");

        let read_back = read_slice_file(&source).expect("Failed to read slice file");
        assert_eq!(read_back, segments);
    }

    #[test]
    fn test_read_skips_malformed_lines() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let source = temp_dir.path().join("essay.txt");
        let slice_path = generate_slice_file_path(&source);
        std::fs::write(&slice_path, "1\t유효한 줄\n주석 줄\n2\t다른 줄\n").expect("Failed to write");

        let segments = read_slice_file(&source).expect("Failed to read slice file");
        assert_eq!(segments, vec!["유효한 줄", "다른 줄"]);
    }
}
