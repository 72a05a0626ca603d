/// Collection identifiers
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three independent remote record sets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Collection {
    /// Books the reader wants to read
    Wishlist,
    /// Books being read, with a bookmark
    InProgress,
    /// Books read, with a finish date and review
    Finished,
}

impl Collection {
    /// All collections, in lifecycle order
    pub const ALL: [Collection; 3] = [Self::Wishlist, Self::InProgress, Self::Finished];

    /// Endpoint path used when no override is configured
    pub fn default_path(&self) -> &'static str {
        match self {
            Self::Wishlist => "wishlist",
            Self::InProgress => "inprogress",
            Self::Finished => "finished",
        }
    }

    /// Whether the collection rejects a second record with the same catalog id
    pub fn enforces_unique_external_id(&self) -> bool {
        matches!(self, Self::Wishlist)
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Wishlist => "wishlist",
            Self::InProgress => "in-progress",
            Self::Finished => "finished",
        };
        f.write_str(label)
    }
}
