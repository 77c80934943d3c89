//! Shared record types flowing through the pipeline.
//!
//! One row type per tabular artifact: scraped posts, legislation references,
//! and topic-to-legislation matches. Column names follow the CSV headers the
//! dashboard collaborator expects, so serde renames appear where the header
//! diverges from Rust naming.

use serde::{Deserialize, Serialize};

/// Sentinel value written into `law_keyword`/`law_title` when no legislation
/// cleared the confidence threshold for a topic.
pub const NO_MATCH: &str = "No match";

/// A scraped discourse post, enriched in place as it moves through the
/// cleaning, modelling, and labelling stages.
///
/// Early-stage files simply leave the later columns empty; every stage can
/// re-read its predecessor's output with the same row type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub selftext: String,
    pub created_utc: f64,
    pub author: String,
    pub score: i64,
    pub num_comments: i64,
    pub subreddit: String,
    pub url: String,
    /// Search keywords that selected this post at collection time.
    #[serde(default, with = "semicolon_list")]
    pub keyword_matched: Vec<String>,
    /// `title` + `selftext`, built by the processing stage.
    #[serde(default)]
    pub full_text: String,
    /// Normalised, stopword-free text for the topic model.
    #[serde(default)]
    pub text_cleaned: String,
    /// Cluster id from the topic model (-1 = outlier).
    #[serde(default)]
    pub topic_id: Option<i64>,
    /// Raw topic name from the topic model.
    #[serde(default)]
    pub topic_name: Option<String>,
    /// Human-readable label after the rule-based labelling pass.
    #[serde(default, rename = "Final_Topic_Label")]
    pub final_topic_label: Option<String>,
    #[serde(default)]
    pub emotion_label: Option<String>,
}

/// A reference to a law or policy document scraped from a government source.
///
/// The linker consumes `keyword`, `title`, `link`, and `date`; `summary` and
/// `source` are carried for the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegislationRecord {
    /// Search keyword the document was found under. May be empty.
    #[serde(default)]
    pub keyword: String,
    pub title: String,
    pub link: String,
    /// ISO-like date string. May be empty.
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub source: String,
}

/// The best legislation match for one topic, or the "no match" sentinel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub topic: String,
    pub law_keyword: String,
    pub law_title: String,
    pub law_link: String,
    pub law_date: String,
    /// Partial similarity score in [0, 100]. 0 for the sentinel.
    pub match_score: u8,
}

impl MatchResult {
    /// Sentinel result for a topic with no legislation above threshold.
    pub fn no_match(topic: &str) -> Self {
        Self {
            topic: topic.to_string(),
            law_keyword: NO_MATCH.to_string(),
            law_title: NO_MATCH.to_string(),
            law_link: String::new(),
            law_date: String::new(),
            match_score: 0,
        }
    }

    /// Whether this is the sentinel rather than a real match.
    pub fn is_no_match(&self) -> bool {
        self.match_score == 0 && self.law_title == NO_MATCH
    }
}

/// Serialise a `Vec<String>` as one semicolon-joined CSV cell.
mod semicolon_list {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(list: &[String], ser: S) -> Result<S::Ok, S::Error> {
        ser.serialize_str(&list.join(";"))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<Vec<String>, D::Error> {
        let joined = String::deserialize(de)?;
        if joined.is_empty() {
            return Ok(Vec::new());
        }
        Ok(joined.split(';').map(str::to_string).collect())
    }
}
