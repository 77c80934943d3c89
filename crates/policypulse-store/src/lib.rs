//! Storage layer: CSV datasets for every pipeline artifact.

mod error;
pub use error::StoreError;

mod dataset;
pub use dataset::{CsvStore, read_csv, write_csv};

mod merge;
pub use merge::merge_emotions;

mod summary;
pub use summary::{SummaryRow, summarize_emotions, summarize_topics};
