//! Dashboard merge: join emotion labels onto the labelled post dataset.

use std::collections::HashMap;

use policypulse_core::Post;
use tracing::info;

/// Left-join emotion labels onto labelled posts by post id.
///
/// Posts with no emotion row keep `emotion_label = None`; emotion rows with
/// no matching post are ignored. Post order is preserved.
pub fn merge_emotions(labeled: &[Post], emotions: &[Post]) -> Vec<Post> {
    let by_id: HashMap<&str, &Option<String>> = emotions
        .iter()
        .map(|p| (p.id.as_str(), &p.emotion_label))
        .collect();

    let mut merged = Vec::with_capacity(labeled.len());
    let mut joined = 0usize;
    for post in labeled {
        let mut post = post.clone();
        if let Some(label) = by_id.get(post.id.as_str())
            && label.is_some()
        {
            post.emotion_label = (*label).clone();
            joined += 1;
        }
        merged.push(post);
    }

    info!(total = merged.len(), joined, "merged emotion labels");
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: &str, label: Option<&str>, emotion: Option<&str>) -> Post {
        Post {
            id: id.into(),
            title: format!("post {id}"),
            selftext: String::new(),
            created_utc: 1_700_000_000.0,
            author: "a".into(),
            score: 1,
            num_comments: 0,
            subreddit: "ukvisa".into(),
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
    fn joins_by_id() {
        let labeled = vec![
            post("a", Some("ILR & Settlement"), None),
            post("b", Some("NHS & Health Access"), None),
        ];
        let emotions = vec![
            post("b", None, Some("annoyance")),
            post("a", None, Some("fear")),
        ];

        let merged = merge_emotions(&labeled, &emotions);
        assert_eq!(merged[0].emotion_label.as_deref(), Some("fear"));
        assert_eq!(merged[1].emotion_label.as_deref(), Some("annoyance"));
        // Labels from the left side survive the join.
        assert_eq!(merged[0].final_topic_label.as_deref(), Some("ILR & Settlement"));
    }

    #[test]
    fn unmatched_posts_keep_none() {
        let labeled = vec![post("a", Some("ILR & Settlement"), None)];
        let merged = merge_emotions(&labeled, &[]);
        assert!(merged[0].emotion_label.is_none());
    }

    #[test]
    fn extra_emotion_rows_are_ignored() {
        let labeled = vec![post("a", None, None)];
        let emotions = vec![
            post("a", None, Some("joy")),
            post("zzz", None, Some("anger")),
        ];
        let merged = merge_emotions(&labeled, &emotions);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].emotion_label.as_deref(), Some("joy"));
    }

    #[test]
    fn preserves_post_order() {
        let labeled = vec![post("c", None, None), post("a", None, None), post("b", None, None)];
        let merged = merge_emotions(&labeled, &[]);
        let ids: Vec<&str> = merged.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }
}
