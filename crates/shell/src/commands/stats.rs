//! Inspecting existing fixture files.

use std::path::Path;

use addrgen::{FixtureStats, stats};

/// Prints the statistics of every fixture file in `inp_dir`.
///
/// # Errors
///
/// - If the directory or any fixture file cannot be read.
/// - If a fixture file holds something other than integers in `[0, 65536)`.
pub fn print_stats(inp_dir: &Path) -> Result<(), String> {
    let paths = stats::fixture_paths(inp_dir)?;
    ftlog::info!("Found {} fixture files in {inp_dir:?}", paths.len());

    if paths.is_empty() {
        println!("No fixture files found in '{}'.", inp_dir.display());
        return Ok(());
    }

    for path in paths {
        let stats = FixtureStats::from_path(&path)?;
        ftlog::info!("{stats}");
        println!("{stats}");
    }

    Ok(())
}
