//! CSV-backed dataset store for the pipeline's tabular artifacts.

use std::path::{Path, PathBuf};

use policypulse_core::{LegislationRecord, MatchResult, Post};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::info;

use crate::StoreError;

/// Read all rows of a CSV file into typed records.
///
/// A missing file is [`StoreError::NotFound`]; an empty file is a valid
/// empty dataset.
pub fn read_csv<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, StoreError> {
    if !path.exists() {
        return Err(StoreError::NotFound(path.to_path_buf()));
    }
    let mut reader = csv::Reader::from_path(path)?;
    let rows = reader.deserialize().collect::<Result<Vec<T>, _>>()?;
    Ok(rows)
}

/// Write typed records to a CSV file, creating parent directories.
pub fn write_csv<T: Serialize>(path: &Path, rows: &[T]) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut writer = csv::Writer::from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    info!(count = rows.len(), path = %path.display(), "wrote dataset");
    Ok(())
}

/// CSV store rooted at a data directory.
///
/// Raw scrapes live under `raw/`, every derived artifact under `processed/`.
/// One read/write method pair per pipeline artifact, so stages agree on file
/// names without passing paths around.
pub struct CsvStore {
    root: PathBuf,
}

impl CsvStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    // ── Raw scrapes ──

    pub fn read_raw_posts(&self) -> Result<Vec<Post>, StoreError> {
        read_csv(&self.root.join("raw/reddit_scraped_posts.csv"))
    }

    pub fn write_raw_posts(&self, posts: &[Post]) -> Result<(), StoreError> {
        write_csv(&self.root.join("raw/reddit_scraped_posts.csv"), posts)
    }

    /// Legislation input to the linker. An absent or empty file is signalled
    /// here, at the boundary; the linker itself accepts an empty set.
    pub fn read_raw_legislation(&self) -> Result<Vec<LegislationRecord>, StoreError> {
        let path = self.root.join("raw/uk_legislation.csv");
        let laws: Vec<LegislationRecord> = read_csv(&path)?;
        if laws.is_empty() {
            return Err(StoreError::Empty(path));
        }
        Ok(laws)
    }

    pub fn write_raw_legislation(&self, laws: &[LegislationRecord]) -> Result<(), StoreError> {
        write_csv(&self.root.join("raw/uk_legislation.csv"), laws)
    }

    // ── Processing stages ──

    pub fn read_cleaned_posts(&self) -> Result<Vec<Post>, StoreError> {
        read_csv(&self.root.join("processed/reddit_cleaned.csv"))
    }

    pub fn write_cleaned_posts(&self, posts: &[Post]) -> Result<(), StoreError> {
        write_csv(&self.root.join("processed/reddit_cleaned.csv"), posts)
    }

    pub fn read_topic_posts(&self) -> Result<Vec<Post>, StoreError> {
        read_csv(&self.root.join("processed/reddit_with_topics.csv"))
    }

    pub fn write_topic_posts(&self, posts: &[Post]) -> Result<(), StoreError> {
        write_csv(&self.root.join("processed/reddit_with_topics.csv"), posts)
    }

    pub fn read_emotion_posts(&self) -> Result<Vec<Post>, StoreError> {
        read_csv(&self.root.join("processed/reddit_with_emotions.csv"))
    }

    pub fn write_emotion_posts(&self, posts: &[Post]) -> Result<(), StoreError> {
        write_csv(&self.root.join("processed/reddit_with_emotions.csv"), posts)
    }

    pub fn read_labeled_posts(&self) -> Result<Vec<Post>, StoreError> {
        read_csv(&self.root.join("processed/reddit_with_final_topics.csv"))
    }

    pub fn write_labeled_posts(&self, posts: &[Post]) -> Result<(), StoreError> {
        write_csv(&self.root.join("processed/reddit_with_final_topics.csv"), posts)
    }

    // ── Linker output and dashboard exports ──

    pub fn read_mapping(&self) -> Result<Vec<MatchResult>, StoreError> {
        read_csv(&self.root.join("processed/topic_legislation_mapping.csv"))
    }

    pub fn write_mapping(&self, mapping: &[MatchResult]) -> Result<(), StoreError> {
        write_csv(&self.root.join("processed/topic_legislation_mapping.csv"), mapping)
    }

    pub fn read_dashboard_posts(&self) -> Result<Vec<Post>, StoreError> {
        read_csv(&self.root.join("processed/reddit_dashboard_data.csv"))
    }

    pub fn write_dashboard_posts(&self, posts: &[Post]) -> Result<(), StoreError> {
        write_csv(&self.root.join("processed/reddit_dashboard_data.csv"), posts)
    }

    pub fn write_dashboard_laws(&self, mapping: &[MatchResult]) -> Result<(), StoreError> {
        write_csv(&self.root.join("processed/laws_dashboard_data.csv"), mapping)
    }

    // ── Linker topic input ──

    /// Distinct non-empty `Final_Topic_Label` values in first-seen order.
    ///
    /// The labelled dataset must exist and be non-empty: a labelling run
    /// that produced nothing is a pipeline fault, not a valid topic set.
    pub fn distinct_topics(&self) -> Result<Vec<String>, StoreError> {
        let path = self.root.join("processed/reddit_with_final_topics.csv");
        let posts: Vec<Post> = read_csv(&path)?;
        if posts.is_empty() {
            return Err(StoreError::Empty(path));
        }

        let mut topics: Vec<String> = Vec::new();
        for post in posts {
            let Some(label) = post.final_topic_label else {
                continue;
            };
            if label.trim().is_empty() || topics.contains(&label) {
                continue;
            }
            topics.push(label);
        }
        info!(count = topics.len(), "collected distinct topics");
        Ok(topics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use policypulse_core::MatchResult;
    use tempfile::TempDir;

    fn post(id: &str, label: Option<&str>) -> Post {
        Post {
            id: id.into(),
            title: format!("post {id}"),
            selftext: String::new(),
            created_utc: 1_700_000_000.0,
            author: "a".into(),
            score: 1,
            num_comments: 0,
            subreddit: "ukvisa".into(),
            url: format!("https://reddit.com/{id}"),
            keyword_matched: vec!["UK visa".into()],
            full_text: String::new(),
            text_cleaned: String::new(),
            topic_id: None,
            topic_name: None,
            final_topic_label: label.map(str::to_string),
            emotion_label: None,
        }
    }

    fn law(keyword: &str, title: &str) -> LegislationRecord {
        LegislationRecord {
            keyword: keyword.into(),
            title: title.into(),
            link: "https://www.gov.uk/x".into(),
            date: "2014-05-14".into(),
            summary: "summary".into(),
            source: "GOV.UK".into(),
        }
    }

    #[test]
    fn posts_roundtrip_through_csv() {
        let dir = TempDir::new().unwrap();
        let store = CsvStore::new(dir.path());

        let posts = vec![post("a", None), post("b", Some("ILR & Settlement"))];
        store.write_raw_posts(&posts).unwrap();

        let loaded = store.read_raw_posts().unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].id, "a");
        assert_eq!(loaded[0].keyword_matched, vec!["UK visa"]);
        assert_eq!(loaded[1].final_topic_label.as_deref(), Some("ILR & Settlement"));
    }

    #[test]
    fn missing_dataset_is_not_found() {
        let dir = TempDir::new().unwrap();
        let store = CsvStore::new(dir.path());
        assert!(matches!(
            store.read_raw_posts(),
            Err(StoreError::NotFound(_))
        ));
    }

    #[test]
    fn empty_legislation_is_signalled_at_the_boundary() {
        let dir = TempDir::new().unwrap();
        let store = CsvStore::new(dir.path());
        store.write_raw_legislation(&[]).unwrap();
        assert!(matches!(
            store.read_raw_legislation(),
            Err(StoreError::Empty(_))
        ));
    }

    #[test]
    fn legislation_roundtrip() {
        let dir = TempDir::new().unwrap();
        let store = CsvStore::new(dir.path());
        store
            .write_raw_legislation(&[law("visa", "Immigration Act 2014")])
            .unwrap();
        let laws = store.read_raw_legislation().unwrap();
        assert_eq!(laws.len(), 1);
        assert_eq!(laws[0].title, "Immigration Act 2014");
    }

    #[test]
    fn mapping_roundtrip_keeps_sentinels() {
        let dir = TempDir::new().unwrap();
        let store = CsvStore::new(dir.path());
        let mapping = vec![
            MatchResult {
                topic: "Visa Applications & Issues".into(),
                law_keyword: "visa".into(),
                law_title: "Immigration Act 2014".into(),
                law_link: "u1".into(),
                law_date: "2014-05-14".into(),
                match_score: 82,
            },
            MatchResult::no_match("NHS & Health Access"),
        ];
        store.write_mapping(&mapping).unwrap();
        let loaded = store.read_mapping().unwrap();
        assert_eq!(loaded, mapping);
        assert!(loaded[1].is_no_match());
    }

    #[test]
    fn distinct_topics_first_seen_order() {
        let dir = TempDir::new().unwrap();
        let store = CsvStore::new(dir.path());
        store
            .write_labeled_posts(&[
                post("a", Some("ILR & Settlement")),
                post("b", None),
                post("c", Some("EUSS & Settled Status")),
                post("d", Some("ILR & Settlement")),
                post("e", Some("  ")),
            ])
            .unwrap();

        let topics = store.distinct_topics().unwrap();
        assert_eq!(topics, vec!["ILR & Settlement", "EUSS & Settled Status"]);
    }

    #[test]
    fn distinct_topics_requires_rows() {
        let dir = TempDir::new().unwrap();
        let store = CsvStore::new(dir.path());
        store.write_labeled_posts(&[]).unwrap();
        assert!(matches!(
            store.distinct_topics(),
            Err(StoreError::Empty(_))
        ));
    }
}
