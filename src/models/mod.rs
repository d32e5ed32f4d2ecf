mod bead;
mod draft;
mod element;
mod history;

// Wire shapes stay addressable as a module (models::wire::ArrangeRequest).
pub mod wire;

// Re-export commonly used items
pub use bead::{Bead, Bracelet};
pub use draft::DraftFile;
pub use element::{Element, ElementColorMap, ElementRatio, RatioContainer};
pub use history::HistoryEntry;
