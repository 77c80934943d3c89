//! Best-match selection between discourse topics and legislation records.
//!
//! For every distinct topic, each legislation record is scored with
//! [`partial_ratio`] over the normalised `keyword` + `title` text. Records at
//! or above the threshold are candidates; the single highest-scoring
//! candidate is kept (earliest record wins ties), and a topic with no
//! candidate gets the explicit "No match" sentinel instead of being dropped.

use std::collections::HashSet;

use policypulse_core::{LegislationRecord, MatchResult, normalize};
use thiserror::Error;

use crate::similarity::partial_ratio;

/// Default confidence threshold for the study pipeline.
pub const DEFAULT_THRESHOLD: u8 = 75;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LinkError {
    #[error("threshold must lie in 0..=100, got {0}")]
    InvalidThreshold(u8),
}

/// Link each distinct topic to its best-matching legislation record.
///
/// Blank topics are dropped, duplicate topics are collapsed to their first
/// occurrence, and the output preserves first-seen topic order: exactly one
/// row per distinct non-blank input topic, always. An empty `laws` slice is
/// valid and yields all sentinels.
///
/// # Errors
///
/// [`LinkError::InvalidThreshold`] when `threshold > 100`. Data-quality
/// problems never error: a record blank in both `keyword` and `title`
/// simply scores 0 against every topic.
pub fn link(
    topics: &[String],
    laws: &[LegislationRecord],
    threshold: u8,
) -> Result<Vec<MatchResult>, LinkError> {
    check_threshold(threshold)?;

    let scoring_texts: Vec<String> = laws.iter().map(scoring_text).collect();

    let mut seen = HashSet::new();
    let mut results = Vec::new();
    for topic in topics {
        if normalize(Some(topic.as_str())).is_empty() || !seen.insert(topic.as_str()) {
            continue;
        }
        results.push(best_match(topic, laws, &scoring_texts, threshold));
    }

    Ok(results)
}

/// Every legislation record scoring at or above the threshold for one topic,
/// in legislation input order with per-candidate scores.
///
/// This is the intermediate pass behind [`link`]; [`link`] keeps only the
/// best candidate per topic.
///
/// # Errors
///
/// [`LinkError::InvalidThreshold`] when `threshold > 100`.
pub fn candidates(
    topic: &str,
    laws: &[LegislationRecord],
    threshold: u8,
) -> Result<Vec<MatchResult>, LinkError> {
    check_threshold(threshold)?;

    let topic_norm = normalize(Some(topic));
    let matches = laws
        .iter()
        .filter_map(|law| {
            let score = partial_ratio(&topic_norm, &scoring_text(law));
            (score >= threshold).then(|| to_result(topic, law, score))
        })
        .collect();

    Ok(matches)
}

fn check_threshold(threshold: u8) -> Result<(), LinkError> {
    if threshold > 100 {
        return Err(LinkError::InvalidThreshold(threshold));
    }
    Ok(())
}

/// Normalised `keyword` + `title` text a record is scored on.
fn scoring_text(law: &LegislationRecord) -> String {
    let combined = format!("{} {}", law.keyword, law.title);
    normalize(Some(&combined))
}

fn best_match(
    topic: &str,
    laws: &[LegislationRecord],
    scoring_texts: &[String],
    threshold: u8,
) -> MatchResult {
    let topic_norm = normalize(Some(topic));

    let mut best: Option<MatchResult> = None;
    for (law, text) in laws.iter().zip(scoring_texts) {
        let score = partial_ratio(&topic_norm, text);
        if score < threshold {
            continue;
        }
        // Strictly greater: on ties the earliest record stays.
        if best.as_ref().is_none_or(|b| score > b.match_score) {
            best = Some(to_result(topic, law, score));
        }
    }

    best.unwrap_or_else(|| MatchResult::no_match(topic))
}

fn to_result(topic: &str, law: &LegislationRecord, score: u8) -> MatchResult {
    MatchResult {
        topic: topic.to_string(),
        law_keyword: law.keyword.clone(),
        law_title: law.title.clone(),
        law_link: law.link.clone(),
        law_date: law.date.clone(),
        match_score: score,
    }
}
