use std::time::Duration;

// Top Level Constants
pub const MAX_BEADS: usize = 20;
pub const DEFAULT_NUM_BEADS: usize = 10;

/// Fill color for bracelet slots no category has a claim on.
pub const PLACEHOLDER_COLOR: &str = "#CCCCCC";

pub mod animation {
    /// Number of re-apportion steps in one flash-randomize run.
    pub const FLASH_ITERATIONS: usize = 25;
    /// Base wait per flash step; divided by the speed multiplier.
    pub const FLASH_STEP_MS: f64 = 200.0;
    /// Total grow-sequence duration at speed 1.0. Spread across
    /// MAX_BEADS - 1 pauses so the wall time stays fixed.
    pub const GROW_TOTAL_MS: f64 = 5000.0;

    pub const SPEED_MIN: f64 = 0.5;
    pub const SPEED_MAX: f64 = 2.0;
}

pub mod drafts {
    use super::Duration;

    /// Idle period after the last edit before an autosave fires.
    pub const AUTOSAVE_IDLE: Duration = Duration::from_millis(2000);
    /// Drafts larger than this are never attached to outbound requests.
    pub const PAYLOAD_MAX_BYTES: usize = 12288;
}
