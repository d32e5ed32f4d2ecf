//! Bundled seed content for first-run state.

use crate::models::{ElementColorMap, ElementRatio};

/// Name of the draft seeded on first run (mirrors the helper script the
/// analysis service understands).
pub const DEFAULT_DRAFT_NAME: &str = "functions";

/// Seed content for the default draft. Browser-safe helper JS the user is
/// free to edit or replace entirely.
pub const DEFAULT_DRAFT_CONTENT: &str = r#"/**
 * Clamp a percentage into the 0..100 domain.
 * @param {number} value
 * @returns {number}
 */
function clampPercent(value) {
  return Math.min(100, Math.max(0, value));
}

/**
 * Normalise a five-element ratio object so its fields sum to 100.
 * @param {{metal:number,wood:number,water:number,fire:number,earth:number}} ratio
 * @returns {object} a new ratio object
 */
function normaliseRatio(ratio) {
  const keys = ["metal", "wood", "water", "fire", "earth"];
  const total = keys.reduce((sum, k) => sum + clampPercent(ratio[k]), 0);
  if (total === 0) {
    return { metal: 20, wood: 20, water: 20, fire: 20, earth: 20 };
  }
  const out = {};
  keys.forEach((k) => {
    out[k] = (clampPercent(ratio[k]) / total) * 100;
  });
  return out;
}
"#;

/// Goal ratio used by the dev harness when no analysis response is at hand.
pub const DEMO_GOAL: ElementRatio = ElementRatio {
    metal: 20.0,
    wood: 20.0,
    water: 20.0,
    fire: 20.0,
    earth: 20.0,
};

/// Classic element palette for the dev harness.
pub fn demo_colors() -> ElementColorMap {
    ElementColorMap {
        metal: "#FFFFFF".into(),
        wood: "#00A550".into(),
        water: "#0000FF".into(),
        fire: "#FF0000".into(),
        earth: "#8B4513".into(),
    }
}
