use std::path::PathBuf;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Create config.toml file if not exists or is broken.
    #[arg(long)]
    pub create_config: bool,
    /// Seed this file until interrupted.
    #[arg(long)]
    pub seed: Option<PathBuf>,
    /// Piece length in bytes used when hashing the seeded file.
    #[arg(long, default_value_t = 262144)]
    pub piece_length: u64,
    /// Tracker to announce on, may be repeated.
    #[arg(long = "tracker")]
    pub trackers: Vec<String>,
}
