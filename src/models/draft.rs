use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Registry row for one user-editable text asset. The name is unique across
/// the registry and derives the on-disk location; contents live in their own
/// flat file, not in the registry document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftFile {
    pub id: Uuid,
    pub name: String,
    pub path: PathBuf,
}
