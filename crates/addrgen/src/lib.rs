//! Synthetic address fixtures with a controlled rate of duplicates.
//!
//! Each fixture file holds integers in `[0, 65536)`, one per line. A fraction of the values in each file, the repeat rate, are copies of other values
//! in the same file. The repeat rate is sampled uniformly per file from a configured range, which makes the files useful as inputs for testing
//! deduplication and counting logic.
//!
//! ## Modules
//!
//! - [`config`]: The [`FixtureConfig`] describing what to generate.
//! - [`generator`]: Sampling the numbers and writing the fixture files.
//! - [`stats`]: Reading fixture files back and measuring their duplicates.

pub mod config;
pub mod generator;
pub mod stats;

pub use config::FixtureConfig;
pub use generator::{FileReport, generate};
pub use stats::FixtureStats;

/// The number of distinct values a fixture may contain, i.e. the size of `[0, 65536)`.
pub const DOMAIN_SIZE: usize = 1 << 16;
