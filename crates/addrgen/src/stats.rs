//! Reading fixture files back and measuring their duplicates.

use std::{
    collections::HashSet,
    io::BufRead,
    path::{Path, PathBuf},
};

use crate::generator::{FILE_EXTENSION, FILE_PREFIX};

/// Duplicate statistics for one fixture file.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FixtureStats {
    /// The file the statistics were computed from.
    pub path: PathBuf,
    /// The number of values in the file.
    pub num_values: usize,
    /// The number of distinct values in the file.
    pub num_distinct: usize,
    /// The fraction of values that repeat a value seen elsewhere in the file.
    pub duplicate_rate: f64,
}

impl std::fmt::Display for FixtureStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} values, {} distinct, duplicate rate {:.4}",
            self.path.display(),
            self.num_values,
            self.num_distinct,
            self.duplicate_rate
        )
    }
}

impl FixtureStats {
    /// Computes the statistics for numbers that were read from `path`.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn from_numbers<P: AsRef<Path>>(path: P, numbers: &[u16]) -> Self {
        let num_values = numbers.len();
        let num_distinct = numbers.iter().collect::<HashSet<_>>().len();
        let duplicate_rate = if num_values == 0 {
            0.0
        } else {
            1.0 - num_distinct as f64 / num_values as f64
        };

        Self {
            path: path.as_ref().to_path_buf(),
            num_values,
            num_distinct,
            duplicate_rate,
        }
    }

    /// Reads the fixture file at `path` and computes its statistics.
    ///
    /// # Errors
    ///
    /// See [`read_numbers`].
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let numbers = read_numbers(&path)?;
        Ok(Self::from_numbers(path, &numbers))
    }
}

/// Reads the numbers from a fixture file.
///
/// Blank lines are skipped.
///
/// # Errors
///
/// - If the file cannot be opened or read.
/// - If any line is not a decimal integer in `[0, 65536)`.
pub fn read_numbers<P: AsRef<Path>>(path: P) -> Result<Vec<u16>, String> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).map_err(|e| format!("Failed to open '{}': {e}", path.display()))?;
    let reader = std::io::BufReader::new(file);

    let mut numbers = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| format!("Failed to read '{}': {e}", path.display()))?;
        if line.is_empty() {
            continue;
        }
        if !line.bytes().all(|b| b.is_ascii_digit()) {
            return Err(format!("Invalid value '{line}' on line {} of '{}': expected only decimal digits", i + 1, path.display()));
        }
        let n = line
            .parse::<u16>()
            .map_err(|e| format!("Invalid value '{line}' on line {} of '{}': {e}", i + 1, path.display()))?;
        numbers.push(n);
    }

    Ok(numbers)
}

/// Lists the fixture files in `dir`, ordered by their number.
///
/// Files whose names do not look like `addresses_<i>.txt` are ignored.
///
/// # Errors
///
/// - If the directory cannot be read.
pub fn fixture_paths<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>, String> {
    let dir = dir.as_ref();
    let entries = std::fs::read_dir(dir).map_err(|e| format!("Failed to read directory '{}': {e}", dir.display()))?;

    let mut indexed = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| format!("Failed to read entry in '{}': {e}", dir.display()))?.path();
        if let Some(i) = fixture_index(&path) {
            indexed.push((i, path));
        }
    }
    indexed.sort_by_key(|&(i, _)| i);

    Ok(indexed.into_iter().map(|(_, path)| path).collect())
}

/// Returns `i` if the file name of `path` is `addresses_<i>.txt`.
fn fixture_index(path: &Path) -> Option<usize> {
    if path.extension().and_then(|s| s.to_str()) != Some(FILE_EXTENSION) {
        return None;
    }
    path.file_stem()
        .and_then(|s| s.to_str())
        .and_then(|s| s.strip_prefix(FILE_PREFIX))
        .and_then(|s| s.parse().ok())
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::{FixtureStats, fixture_index};

    #[test]
    fn index() {
        assert_eq!(fixture_index(Path::new("dir/addresses_3.txt")), Some(3));
        assert_eq!(fixture_index(Path::new("addresses_12.txt")), Some(12));
        assert_eq!(fixture_index(Path::new("addresses_x.txt")), None);
        assert_eq!(fixture_index(Path::new("addresses_3.csv")), None);
        assert_eq!(fixture_index(Path::new("manifest.json")), None);
    }

    #[test]
    fn rates() {
        let stats = FixtureStats::from_numbers("a", &[1, 2, 2, 3, 3, 3, 4, 5, 6, 7]);
        assert_eq!(stats.num_values, 10);
        assert_eq!(stats.num_distinct, 7);
        assert!((stats.duplicate_rate - 0.3).abs() < 1e-12);

        let stats = FixtureStats::from_numbers("b", &[]);
        assert_eq!(stats.num_values, 0);
        assert!(stats.duplicate_rate.abs() < f64::EPSILON);
    }
}
