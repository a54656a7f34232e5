use serde::{Deserialize, Serialize};

use super::GhUser;

/// GitHub Repository.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhRepository {
    /// Identifier.
    pub id: u64,
    /// Name.
    pub name: String,
    /// Owner.
    pub owner: GhUser,
}
