//! Generating fixture files from the command line.

use std::path::{Path, PathBuf};

use addrgen::FixtureConfig;
use rand::Rng;

/// The name of the file describing each generated fixture.
pub const MANIFEST_NAME: &str = "manifest.json";

/// Builds the fixture configuration from the defaults, an optional config file and the options given on the command line, in increasing order of
/// precedence.
///
/// # Errors
///
/// - If the config file cannot be read or parsed.
/// - If the resulting configuration is invalid.
pub fn resolve_config(
    config_path: Option<&Path>,
    num_files: Option<usize>,
    numbers_per_file: Option<usize>,
    min_rate: Option<f64>,
    max_rate: Option<f64>,
    out_dir: Option<PathBuf>,
) -> Result<FixtureConfig, String> {
    let mut config = match config_path {
        Some(path) => {
            ftlog::info!("Reading config from {path:?}");
            FixtureConfig::from_path(path)?
        }
        None => FixtureConfig::default(),
    };

    if let Some(n) = num_files {
        config.num_files = n;
    }
    if let Some(n) = numbers_per_file {
        config.numbers_per_file = n;
    }
    if let Some(rate) = min_rate {
        config.min_repeat_rate = rate;
    }
    if let Some(rate) = max_rate {
        config.max_repeat_rate = rate;
    }
    if let Some(dir) = out_dir {
        config.out_dir = dir;
    }

    config.validate()?;
    Ok(config)
}

/// Generates the fixtures and prints a completion message.
///
/// # Errors
///
/// - If generation fails. See [`addrgen::generate`].
/// - If the manifest cannot be written.
pub fn generate_fixtures<R: Rng>(config: &FixtureConfig, manifest: bool, rng: &mut R) -> Result<(), String> {
    let reports = addrgen::generate(config, rng)?;

    if manifest {
        let manifest_path = config.out_dir.join(MANIFEST_NAME);
        let contents = serde_json::to_string_pretty(&reports).map_err(|e| format!("Failed to serialize manifest: {e}"))?;
        std::fs::write(&manifest_path, contents).map_err(|e| format!("Failed to write manifest '{}': {e}", manifest_path.display()))?;
        ftlog::info!("Wrote manifest to {manifest_path:?}");
    }

    println!("{} test files were generated in '{}'.", reports.len(), config.out_dir.display());
    Ok(())
}
