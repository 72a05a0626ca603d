use serde::{Deserialize, Serialize};
use shelf_core::RecordId;

/// What a collection controller is doing right now
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Activity {
    #[default]
    Idle,
    Fetching,
    Mutating { target: Target, kind: MutationKind },
}

impl Activity {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Whether `id` is the record an operation is currently in flight for
    pub fn is_mutating(&self, id: &RecordId) -> bool {
        matches!(self, Self::Mutating { target: Target::Record(r), .. } if r == id)
    }
}

/// The thing an in-flight mutation is about
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Target {
    /// An existing record
    Record(RecordId),
    /// A record still being created, keyed by its catalog id when it has one
    Pending(Option<String>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MutationKind {
    Add,
    Update,
    Remove,
    Move,
}

/// Outcome of the last `fetch_all`
///
/// `Failed` is kept apart from `Loaded` so an unreachable store does not
/// look like an empty collection.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", content = "reason", rename_all = "snake_case")]
pub enum LoadState {
    #[default]
    NotLoaded,
    Loaded,
    Failed(String),
}

impl LoadState {
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// Review text being edited for one finished record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewDraft {
    pub target: RecordId,
    pub text: String,
}
