//! Topic-to-legislation linking.
//!
//! [`similarity`] provides the partial-ratio metric; [`linker`] applies it
//! to pick the best legislation match per discourse topic.

pub mod linker;
pub mod similarity;

pub use linker::{DEFAULT_THRESHOLD, LinkError, candidates, link};
pub use similarity::partial_ratio;
