//! Sampling fixture numbers and writing them to disk.

use std::{
    io::Write,
    path::{Path, PathBuf},
};

use rand::{
    Rng,
    seq::{IndexedRandom, SliceRandom, index},
};

use crate::{DOMAIN_SIZE, FixtureConfig};

/// The prefix shared by the names of all fixture files.
pub const FILE_PREFIX: &str = "addresses_";

/// The extension shared by all fixture files.
pub const FILE_EXTENSION: &str = "txt";

/// What was written for a single fixture file.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FileReport {
    /// Where the file was written.
    pub path: PathBuf,
    /// The repeat rate sampled for this file.
    pub repeat_rate: f64,
    /// The number of distinct values in the file.
    pub unique_count: usize,
    /// The number of values drawn again from the distinct ones.
    pub repeat_count: usize,
}

impl std::fmt::Display for FileReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} unique + {} repeats (rate {:.4})",
            self.path.display(),
            self.unique_count,
            self.repeat_count,
            self.repeat_rate
        )
    }
}

/// Returns the name of the `i`-th fixture file. Files are numbered from 1.
#[must_use]
pub fn file_name(i: usize) -> String {
    format!("{FILE_PREFIX}{i}.{FILE_EXTENSION}")
}

/// Samples a repeat rate uniformly from `[min, max]`.
///
/// The caller must ensure that `min <= max`. See [`FixtureConfig::validate`].
pub fn sample_repeat_rate<R: Rng>(min: f64, max: f64, rng: &mut R) -> f64 {
    rng.random_range(min..=max)
}

/// Splits `n` numbers into the number of distinct values and the number of repeats for the given repeat rate.
///
/// The number of distinct values is `floor(n * (1 - rate))`, except that a non-empty file always keeps at least one distinct value so that there is
/// something to repeat. That floor reaches 0 when `rate` is 1.0, or close enough to it that `n * (1 - rate) < 1`; drawing repeats from an empty set
/// of distinct values would fail in that case. The distinct count stays within 1 of `n * (1 - rate)`.
#[expect(clippy::cast_precision_loss, clippy::cast_sign_loss, clippy::cast_possible_truncation)]
#[must_use]
pub fn split_counts(n: usize, rate: f64) -> (usize, usize) {
    if n == 0 {
        return (0, 0);
    }
    let unique_count = ((n as f64) * (1.0 - rate)).floor() as usize;
    let unique_count = unique_count.clamp(1, n);
    (unique_count, n - unique_count)
}

/// Generates `unique_count` distinct numbers followed by `repeat_count` numbers drawn from them, and shuffles the lot.
///
/// # Errors
///
/// - If `unique_count` exceeds [`DOMAIN_SIZE`].
/// - If `repeat_count` is positive but `unique_count` is zero.
pub fn generate_numbers<R: Rng>(unique_count: usize, repeat_count: usize, rng: &mut R) -> Result<Vec<u16>, String> {
    if unique_count > DOMAIN_SIZE {
        return Err(format!("Domain exceeded: cannot draw {unique_count} distinct values from {DOMAIN_SIZE}"));
    }

    // `index::sample` only yields indices below `DOMAIN_SIZE`, all of which fit in a `u16`.
    #[expect(clippy::cast_possible_truncation)]
    let mut numbers = index::sample(rng, DOMAIN_SIZE, unique_count)
        .into_iter()
        .map(|i| i as u16)
        .collect::<Vec<_>>();

    let repeats = (0..repeat_count)
        .map(|_| numbers[..unique_count].choose(rng).copied())
        .collect::<Option<Vec<_>>>()
        .ok_or_else(|| format!("Cannot draw {repeat_count} repeats from an empty set of distinct values"))?;
    numbers.extend(repeats);

    numbers.shuffle(rng);
    Ok(numbers)
}

/// Writes the numbers to the file at `path`, one per line.
///
/// # Errors
///
/// - If the file cannot be created or written to.
pub fn write_numbers<P: AsRef<Path>>(path: P, numbers: &[u16]) -> Result<(), String> {
    let path = path.as_ref();
    let file = std::fs::File::create(path).map_err(|e| format!("Failed to create file '{}': {e}", path.display()))?;
    let mut writer = std::io::BufWriter::new(file);

    for n in numbers {
        writeln!(writer, "{n}").map_err(|e| format!("Failed to write to '{}': {e}", path.display()))?;
    }

    writer.flush().map_err(|e| format!("Failed to flush '{}': {e}", path.display()))
}

/// Generates all the fixture files described by `config`.
///
/// The output directory is created if it does not exist, even when no files are requested. Files are written one at a time and each file gets its
/// own repeat rate sampled from the configured range.
///
/// # Arguments
///
/// * `config` - What to generate and where.
/// * `rng` - The source of randomness. Use a seeded generator for reproducible fixtures.
///
/// # Returns
///
/// One [`FileReport`] per file, in the order the files were written.
///
/// # Errors
///
/// - If the configuration is invalid. See [`FixtureConfig::validate`].
/// - If the output directory or any of the files could not be written.
pub fn generate<R: Rng>(config: &FixtureConfig, rng: &mut R) -> Result<Vec<FileReport>, String> {
    config.validate()?;

    let out_dir = &config.out_dir;
    if !out_dir.exists() {
        std::fs::create_dir_all(out_dir).map_err(|e| format!("Failed to create output directory '{}': {e}", out_dir.display()))?;
    } else if !out_dir.is_dir() {
        return Err(format!("Output path '{}' is not a directory.", out_dir.display()));
    }

    ftlog::info!("Generating {config}");

    let mut reports = Vec::with_capacity(config.num_files);
    for i in 1..=config.num_files {
        let repeat_rate = sample_repeat_rate(config.min_repeat_rate, config.max_repeat_rate, rng);
        let (unique_count, repeat_count) = split_counts(config.numbers_per_file, repeat_rate);
        ftlog::debug!("File {i}: repeat rate {repeat_rate:.4}, {unique_count} unique, {repeat_count} repeats");

        let numbers = generate_numbers(unique_count, repeat_count, rng)?;

        let path = out_dir.join(file_name(i));
        write_numbers(&path, &numbers)?;

        let report = FileReport {
            path,
            repeat_rate,
            unique_count,
            repeat_count,
        };
        ftlog::info!("Wrote {report}");
        reports.push(report);
    }

    Ok(reports)
}

#[cfg(test)]
mod tests {
    use rand::prelude::*;
    use test_case::test_case;

    use super::{file_name, generate_numbers, sample_repeat_rate, split_counts};

    #[test_case(10, 0.5, (5, 5) ; "half")]
    #[test_case(2500, 0.25, (1875, 625) ; "quarter")]
    #[test_case(10, 0.0, (10, 0) ; "no repeats")]
    #[test_case(10, 1.0, (1, 9) ; "all repeats keeps one")]
    #[test_case(1, 0.4, (1, 0) ; "single value")]
    #[test_case(3, 0.8, (1, 2) ; "near one keeps one")]
    #[test_case(0, 0.5, (0, 0) ; "empty")]
    #[test_case(7, 0.5, (3, 4) ; "floor")]
    fn counts(n: usize, rate: f64, expected: (usize, usize)) {
        let (unique, repeat) = split_counts(n, rate);
        assert_eq!((unique, repeat), expected);
        assert_eq!(unique + repeat, n);
    }

    #[test]
    fn names() {
        assert_eq!(file_name(1), "addresses_1.txt");
        assert_eq!(file_name(42), "addresses_42.txt");
    }

    #[test]
    fn rates_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let rate = sample_repeat_rate(0.4, 0.6, &mut rng);
            assert!((0.4..=0.6).contains(&rate), "rate out of range: {rate}");
        }
        let rate = sample_repeat_rate(0.5, 0.5, &mut rng);
        assert!((rate - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn numbers() -> Result<(), String> {
        let mut rng = StdRng::seed_from_u64(42);
        let numbers = generate_numbers(100, 50, &mut rng)?;
        assert_eq!(numbers.len(), 150);

        let distinct = numbers.iter().collect::<std::collections::HashSet<_>>();
        assert_eq!(distinct.len(), 100);

        Ok(())
    }

    #[test]
    fn whole_domain() -> Result<(), String> {
        let mut rng = StdRng::seed_from_u64(42);
        let mut numbers = generate_numbers(crate::DOMAIN_SIZE, 0, &mut rng)?;
        numbers.sort_unstable();
        assert!(numbers.iter().copied().eq(0..=u16::MAX));
        Ok(())
    }

    #[test]
    fn bad_counts() {
        let mut rng = StdRng::seed_from_u64(42);
        assert!(generate_numbers(crate::DOMAIN_SIZE + 1, 0, &mut rng).is_err());
        assert!(generate_numbers(0, 3, &mut rng).is_err());
        assert_eq!(generate_numbers(0, 0, &mut rng), Ok(Vec::new()));
    }
}
