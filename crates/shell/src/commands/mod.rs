//! The commands under the `addrgen` CLI.

pub mod generate;
pub mod stats;

use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate fixture files of integers in [0, 65536) with a controlled rate of duplicates.
    Generate {
        /// A YAML or JSON file with the fixture configuration. Options given on the command line take precedence.
        #[arg(short('C'), long)]
        config: Option<PathBuf>,

        /// How many files to create [default: 5].
        #[arg(short('n'), long)]
        num_files: Option<usize>,

        /// How many numbers each file holds [default: 2500].
        #[arg(short('c'), long)]
        numbers_per_file: Option<usize>,

        /// The smallest repeat rate sampled for a file [default: 0.4].
        #[arg(long)]
        min_rate: Option<f64>,

        /// The largest repeat rate sampled for a file [default: 0.6].
        #[arg(long)]
        max_rate: Option<f64>,

        /// The directory in which to write the files [default: test/addresses].
        #[arg(short('o'), long)]
        out_dir: Option<PathBuf>,

        /// Also write a `manifest.json` describing each file into the output directory.
        #[arg(short('m'), long, default_value_t = false)]
        manifest: bool,
    },
    /// Print the size, distinct values and duplicate rate of existing fixture files.
    Stats {
        /// The directory containing the fixture files.
        #[arg(short('i'), long, default_value = "test/addresses")]
        inp_dir: PathBuf,
    },
}
