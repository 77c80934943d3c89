//! Summary tables for the written report: per-topic and per-emotion counts.

use policypulse_core::Post;
use serde::{Deserialize, Serialize};

/// One row of a distribution table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRow {
    pub label: String,
    pub post_count: usize,
    /// Share of the corpus, formatted to one decimal place, e.g. `"37.5%"`.
    pub percentage: String,
}

/// Distribution of posts across final topic labels, most frequent first.
///
/// Ties keep first-seen label order. Unlabelled posts are skipped but still
/// count toward the corpus size.
pub fn summarize_topics(posts: &[Post]) -> Vec<SummaryRow> {
    distribution(posts, |p| p.final_topic_label.as_deref(), None)
}

/// Distribution of the ten most frequent emotion labels.
pub fn summarize_emotions(posts: &[Post]) -> Vec<SummaryRow> {
    distribution(posts, |p| p.emotion_label.as_deref(), Some(10))
}

fn distribution<'a>(
    posts: &'a [Post],
    field: impl Fn(&'a Post) -> Option<&'a str>,
    top: Option<usize>,
) -> Vec<SummaryRow> {
    let mut labels: Vec<&str> = Vec::new();
    let mut counts: Vec<usize> = Vec::new();

    for post in posts {
        let Some(label) = field(post) else { continue };
        if label.is_empty() {
            continue;
        }
        match labels.iter().position(|l| *l == label) {
            Some(i) => counts[i] += 1,
            None => {
                labels.push(label);
                counts.push(1);
            }
        }
    }

    let total = posts.len();
    let mut rows: Vec<SummaryRow> = labels
        .into_iter()
        .zip(counts)
        .map(|(label, count)| SummaryRow {
            label: label.to_string(),
            post_count: count,
            percentage: format!("{:.1}%", 100.0 * count as f64 / total as f64),
        })
        .collect();

    // Stable sort keeps first-seen order among equal counts.
    rows.sort_by(|a, b| b.post_count.cmp(&a.post_count));
    if let Some(n) = top {
        rows.truncate(n);
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(label: Option<&str>, emotion: Option<&str>) -> Post {
        Post {
            id: "x".into(),
            title: String::new(),
            selftext: String::new(),
            created_utc: 0.0,
            author: String::new(),
            score: 0,
            num_comments: 0,
            subreddit: String::new(),
            url: String::new(),
            keyword_matched: vec![],
            full_text: String::new(),
            text_cleaned: String::new(),
            topic_id: None,
            topic_name: None,
            final_topic_label: label.map(str::to_string),
            emotion_label: emotion.map(str::to_string),
        }
    }

    #[test]
    fn counts_and_percentages() {
        let posts = vec![
            post(Some("ILR & Settlement"), None),
            post(Some("ILR & Settlement"), None),
            post(Some("NHS & Health Access"), None),
            post(Some("ILR & Settlement"), None),
        ];
        let rows = summarize_topics(&posts);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].label, "ILR & Settlement");
        assert_eq!(rows[0].post_count, 3);
        assert_eq!(rows[0].percentage, "75.0%");
        assert_eq!(rows[1].percentage, "25.0%");
    }

    #[test]
    fn unlabelled_posts_dilute_percentages() {
        let posts = vec![post(Some("ILR & Settlement"), None), post(None, None)];
        let rows = summarize_topics(&posts);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].percentage, "50.0%");
    }

    #[test]
    fn ties_keep_first_seen_order() {
        let posts = vec![
            post(Some("B Topic"), None),
            post(Some("A Topic"), None),
        ];
        let rows = summarize_topics(&posts);
        assert_eq!(rows[0].label, "B Topic");
        assert_eq!(rows[1].label, "A Topic");
    }

    #[test]
    fn emotions_truncate_to_top_ten() {
        let mut posts = Vec::new();
        for i in 0..12 {
            // Emotion i appears 12 - i times.
            for _ in 0..(12 - i) {
                posts.push(post(None, Some(&format!("emotion_{i}"))));
            }
        }
        let rows = summarize_emotions(&posts);
        assert_eq!(rows.len(), 10);
        assert_eq!(rows[0].label, "emotion_0");
        assert_eq!(rows[9].label, "emotion_9");
    }

    #[test]
    fn empty_corpus_yields_no_rows() {
        assert!(summarize_topics(&[]).is_empty());
        assert!(summarize_emotions(&[]).is_empty());
    }
}
