//! Configuration module for the bead loom engine.

mod defaults;
mod persistence;

// Public
pub mod constants;

// Re-export commonly used items
pub use defaults::{DEFAULT_DRAFT_CONTENT, DEFAULT_DRAFT_NAME, DEMO_GOAL, demo_colors};
pub use persistence::PERSISTENCE;
