// Core modules
pub mod config;
pub mod data;
pub mod engine;
pub mod models;
pub mod utils;

// Re-export commonly used types outside of crate
pub use data::{DraftStore, HistoryStore};
pub use engine::{AnimationController, apportion, build_bracelet};
pub use models::{
    Bead, Bracelet, Element, ElementColorMap, ElementRatio, HistoryEntry, RatioContainer,
};

// CLI argument parsing
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Number of beads on the bracelet (clamped to 1..=20)
    #[arg(long, default_value_t = config::constants::DEFAULT_NUM_BEADS)]
    pub beads: usize,

    /// Animation speed multiplier (clamped to 0.5..=2.0)
    #[arg(long, default_value_t = 1.0)]
    pub speed: f64,

    /// Directory for the history document and draft files
    #[arg(long, default_value = ".bead_loom")]
    pub data_dir: PathBuf,
}
