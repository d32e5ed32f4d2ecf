mod draft_store;
mod history_store;

pub use draft_store::DraftStore;
pub use history_store::HistoryStore;
