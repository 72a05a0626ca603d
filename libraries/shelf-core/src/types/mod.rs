//! Domain types

mod book;
mod candidate;
mod coerce;
mod collection;
mod ids;
mod patch;

pub use book::{BookDetails, BookRecord};
pub use candidate::Candidate;
pub use collection::Collection;
pub use ids::RecordId;
pub use patch::RecordPatch;
