//! What to generate and where to put it.

use std::path::{Path, PathBuf};

use crate::DOMAIN_SIZE;

/// Describes a batch of fixture files.
///
/// The default configuration creates 5 files of 2500 numbers each, with repeat rates between 0.4 and 0.6, under `test/addresses`.
///
/// A configuration can also be read from a YAML or JSON file with [`FixtureConfig::from_path`]. Any field missing from the file keeps its default value.
#[must_use]
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FixtureConfig {
    /// How many files to create.
    pub num_files: usize,
    /// How many numbers each file holds.
    pub numbers_per_file: usize,
    /// The smallest repeat rate that may be sampled for a file.
    pub min_repeat_rate: f64,
    /// The largest repeat rate that may be sampled for a file.
    pub max_repeat_rate: f64,
    /// The directory in which the files are written.
    pub out_dir: PathBuf,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            num_files: 5,
            numbers_per_file: 2500,
            min_repeat_rate: 0.4,
            max_repeat_rate: 0.6,
            out_dir: PathBuf::from("test/addresses"),
        }
    }
}

impl std::fmt::Display for FixtureConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} files x {} numbers, repeat rate in [{}, {}], in {}",
            self.num_files,
            self.numbers_per_file,
            self.min_repeat_rate,
            self.max_repeat_rate,
            self.out_dir.display()
        )
    }
}

impl FixtureConfig {
    /// Sets the number of files to create.
    pub fn with_num_files(mut self, num_files: usize) -> Self {
        self.num_files = num_files;
        self
    }

    /// Sets the number of numbers in each file.
    pub fn with_numbers_per_file(mut self, numbers_per_file: usize) -> Self {
        self.numbers_per_file = numbers_per_file;
        self
    }

    /// Sets the range from which the repeat rate of each file is sampled.
    pub fn with_repeat_rates(mut self, min: f64, max: f64) -> Self {
        self.min_repeat_rate = min;
        self.max_repeat_rate = max;
        self
    }

    /// Sets the output directory.
    pub fn with_out_dir<P: AsRef<Path>>(mut self, out_dir: P) -> Self {
        self.out_dir = out_dir.as_ref().to_path_buf();
        self
    }

    /// Checks that the configuration describes files that can actually be generated.
    ///
    /// # Errors
    ///
    /// - If either repeat rate is not a finite number in `[0, 1]`.
    /// - If the minimum repeat rate is larger than the maximum.
    /// - If `numbers_per_file` exceeds the number of distinct values in the domain.
    pub fn validate(&self) -> Result<(), String> {
        for (name, rate) in [("min_repeat_rate", self.min_repeat_rate), ("max_repeat_rate", self.max_repeat_rate)] {
            if !rate.is_finite() || !(0.0..=1.0).contains(&rate) {
                return Err(format!("{name} must be in [0, 1], got: {rate}"));
            }
        }

        if self.min_repeat_rate > self.max_repeat_rate {
            return Err(format!(
                "min_repeat_rate ({}) must not be larger than max_repeat_rate ({})",
                self.min_repeat_rate, self.max_repeat_rate
            ));
        }

        if self.numbers_per_file > DOMAIN_SIZE {
            return Err(format!(
                "Domain exceeded: numbers_per_file ({}) must be at most {DOMAIN_SIZE}",
                self.numbers_per_file
            ));
        }

        Ok(())
    }

    /// Reads a configuration from a `.yaml`, `.yml` or `.json` file and validates it.
    ///
    /// # Errors
    ///
    /// - If the file has some other extension.
    /// - If the file cannot be read or parsed.
    /// - If the parsed configuration is invalid. See [`Self::validate`].
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| format!("Failed to read config file '{}': {e}", path.display()))?;

        let config: Self = match path.extension().and_then(|s| s.to_str()) {
            Some("yaml" | "yml") => serde_yaml::from_str(&contents).map_err(|e| format!("Failed to parse YAML config '{}': {e}", path.display()))?,
            Some("json") => serde_json::from_str(&contents).map_err(|e| format!("Failed to parse JSON config '{}': {e}", path.display()))?,
            Some(ext) => return Err(format!("Unknown config format {ext} for path: {}", path.display())),
            None => {
                return Err(format!(
                    "Could not determine config format without extension for path: {}",
                    path.display()
                ));
            }
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::FixtureConfig;

    #[test]
    fn defaults() {
        let config = FixtureConfig::default();
        assert_eq!(config.num_files, 5);
        assert_eq!(config.numbers_per_file, 2500);
        assert!((config.min_repeat_rate - 0.4).abs() < f64::EPSILON);
        assert!((config.max_repeat_rate - 0.6).abs() < f64::EPSILON);
        assert_eq!(config.out_dir, std::path::PathBuf::from("test/addresses"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn invalid_rates() {
        let config = FixtureConfig::default().with_repeat_rates(0.7, 0.3);
        assert!(config.validate().is_err());

        let config = FixtureConfig::default().with_repeat_rates(-0.1, 0.3);
        assert!(config.validate().is_err());

        let config = FixtureConfig::default().with_repeat_rates(0.1, 1.5);
        assert!(config.validate().is_err());

        let config = FixtureConfig::default().with_repeat_rates(f64::NAN, 0.5);
        assert!(config.validate().is_err());

        let config = FixtureConfig::default().with_repeat_rates(0.0, 1.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn domain_exceeded() {
        let config = FixtureConfig::default().with_numbers_per_file(crate::DOMAIN_SIZE);
        assert!(config.validate().is_ok());

        let config = config.with_numbers_per_file(crate::DOMAIN_SIZE + 1);
        let err = config.validate().err().unwrap_or_default();
        assert!(err.starts_with("Domain exceeded"), "{err}");
    }
}
