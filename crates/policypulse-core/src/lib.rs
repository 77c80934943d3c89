pub mod labeling;
pub mod records;
pub mod text;

pub use labeling::{Predicate, Rule, TopicLabeler};
pub use records::{LegislationRecord, MatchResult, Post, NO_MATCH};
pub use text::{clean_text, normalize};
