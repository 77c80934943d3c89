//! One function per pipeline stage.

use std::path::Path;

use anyhow::Context;
use chrono::{DateTime, Utc};
use policypulse_core::{TopicLabeler, clean_text};
use policypulse_ingest::{GovUkClient, RedditClient, govuk, reddit};
use policypulse_model::{EmotionClassifier, RemoteModelClient, TopicModel};
use policypulse_store::{
    CsvStore, StoreError, merge_emotions, summarize_emotions, summarize_topics, write_csv,
};
use tracing::{info, warn};

pub async fn collect_reddit(
    store: &CsvStore,
    user_agent: &str,
    limit: u32,
    since: Option<DateTime<Utc>>,
) -> anyhow::Result<()> {
    let client = RedditClient::new(user_agent);
    let posts = client
        .collect(reddit::DEFAULT_SUBREDDITS, reddit::DEFAULT_KEYWORDS, limit, since)
        .await
        .context("collecting reddit posts")?;
    store.write_raw_posts(&posts)?;
    Ok(())
}

pub async fn collect_legislation(store: &CsvStore, count: u32) -> anyhow::Result<()> {
    let client = GovUkClient::new();
    let laws = client
        .collect(govuk::DEFAULT_SEARCH_KEYWORDS, count)
        .await
        .context("collecting legislation")?;
    store.write_raw_legislation(&laws)?;
    Ok(())
}

/// Build `full_text` and `text_cleaned` for every raw post.
pub fn process(store: &CsvStore) -> anyhow::Result<()> {
    let mut posts = store.read_raw_posts().context("reading raw posts")?;
    for post in &mut posts {
        post.full_text = if post.selftext.is_empty() {
            post.title.clone()
        } else {
            format!("{} {}", post.title, post.selftext)
        };
        post.text_cleaned = clean_text(&post.full_text);
    }
    info!(count = posts.len(), "cleaned post text");
    store.write_cleaned_posts(&posts)?;
    Ok(())
}

/// Run both models over the cleaned corpus.
///
/// Topics are assigned from the cleaned text, emotions from the full text,
/// matching how the study models were trained.
pub async fn model(store: &CsvStore, endpoint: &str) -> anyhow::Result<()> {
    let posts = store.read_cleaned_posts().context("reading cleaned posts")?;
    let client = RemoteModelClient::new(endpoint);

    let cleaned: Vec<String> = posts.iter().map(|p| p.text_cleaned.clone()).collect();
    let assignments = client
        .assign_topics(&cleaned)
        .await
        .context("assigning topics")?;
    let mut topic_posts = posts.clone();
    for (post, assignment) in topic_posts.iter_mut().zip(assignments) {
        post.topic_id = Some(assignment.topic_id);
        post.topic_name = Some(assignment.topic_name);
    }
    store.write_topic_posts(&topic_posts)?;

    let full: Vec<String> = posts.iter().map(|p| p.full_text.clone()).collect();
    let emotions = client
        .classify_emotions(&full)
        .await
        .context("classifying emotions")?;
    let mut emotion_posts = posts;
    for (post, emotion) in emotion_posts.iter_mut().zip(emotions) {
        post.emotion_label = Some(emotion);
    }
    store.write_emotion_posts(&emotion_posts)?;

    Ok(())
}

/// Apply the rule-based study labels to the topic-model output.
pub fn label(store: &CsvStore) -> anyhow::Result<()> {
    let mut posts = store.read_topic_posts().context("reading topic posts")?;
    let labeler = TopicLabeler::uk_immigration();
    for post in &mut posts {
        let topic_name = post.topic_name.as_deref().unwrap_or_default();
        post.final_topic_label = Some(labeler.label(topic_name, &post.full_text).to_string());
    }
    info!(count = posts.len(), "labelled posts");
    store.write_labeled_posts(&posts)?;
    Ok(())
}

/// Link each distinct topic to its best-matching legislation record.
pub fn link(store: &CsvStore, threshold: u8) -> anyhow::Result<()> {
    let topics = store.distinct_topics().context("reading topics")?;
    let laws = store.read_raw_legislation().context("reading legislation")?;

    let mapping = policypulse_link::link(&topics, &laws, threshold)?;
    let matched = mapping.iter().filter(|m| !m.is_no_match()).count();
    info!(
        topics = mapping.len(),
        matched,
        threshold,
        "linked topics to legislation"
    );

    store.write_mapping(&mapping)?;
    Ok(())
}

/// Build the merged dashboard datasets.
pub fn merge(store: &CsvStore) -> anyhow::Result<()> {
    let labeled = store.read_labeled_posts().context("reading labelled posts")?;
    let emotions = store.read_emotion_posts().context("reading emotion posts")?;
    let merged = merge_emotions(&labeled, &emotions);
    store.write_dashboard_posts(&merged)?;

    // The laws dashboard file is a copy of the mapping; a missing mapping
    // just means the link stage has not run yet.
    match store.read_mapping() {
        Ok(mapping) => store.write_dashboard_laws(&mapping)?,
        Err(StoreError::NotFound(path)) => {
            warn!(path = %path.display(), "mapping not found, skipping laws dashboard");
        }
        Err(err) => return Err(err.into()),
    }

    Ok(())
}

/// Write the per-topic and per-emotion distribution tables.
pub fn analyze(store: &CsvStore, reports_dir: &Path) -> anyhow::Result<()> {
    let posts = store
        .read_dashboard_posts()
        .context("reading dashboard posts")?;

    write_csv(
        &reports_dir.join("table_topic_distribution.csv"),
        &summarize_topics(&posts),
    )?;
    write_csv(
        &reports_dir.join("table_emotion_distribution.csv"),
        &summarize_emotions(&posts),
    )?;
    Ok(())
}
