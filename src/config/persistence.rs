//! File persistence layout configuration

/// Configuration for the session history document
pub struct HistoryPersistenceConfig {
    /// Filename of the one-document history log, relative to the data dir
    pub filename: &'static str,
}

/// Configuration for draft file storage
pub struct DraftPersistenceConfig {
    /// Subdirectory (under the data dir) holding draft contents
    pub directory: &'static str,
    /// Registry document mapping draft ids to names and paths
    pub registry_filename: &'static str,
    /// Extension appended to the name-derived draft filenames
    pub extension: &'static str,
}

/// The Master Persistence Configuration
pub struct PersistenceConfig {
    pub history: HistoryPersistenceConfig,
    pub drafts: DraftPersistenceConfig,
}

pub const PERSISTENCE: PersistenceConfig = PersistenceConfig {
    history: HistoryPersistenceConfig {
        filename: "bracelet_history.json",
    },
    drafts: DraftPersistenceConfig {
        directory: "drafts",
        registry_filename: "draft_registry.json",
        extension: "txt",
    },
};
