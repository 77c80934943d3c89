//! Black-box model boundary.
//!
//! The pipeline treats the topic model and the emotion classifier as opaque
//! `text -> label` functions. These traits are that boundary; the `remote`
//! feature supplies a client that calls an inference server over HTTP.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(feature = "remote")]
mod remote;
#[cfg(feature = "remote")]
pub use remote::RemoteModelClient;

#[derive(Debug, Error)]
pub enum ModelError {
    #[cfg(feature = "remote")]
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("server returned {status}: {body}")]
    Server { status: u16, body: String },

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("model returned {got} results for {expected} documents")]
    LengthMismatch { expected: usize, got: usize },
}

/// One topic-model assignment for one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicAssignment {
    /// Cluster id; -1 marks an outlier document.
    pub topic_id: i64,
    /// Raw cluster name, e.g. `"4_brp_card_waiting_weeks"`.
    pub topic_name: String,
}

/// Clusters documents and names each cluster.
#[async_trait]
pub trait TopicModel {
    /// One assignment per input document, in input order.
    async fn assign_topics(&self, docs: &[String]) -> Result<Vec<TopicAssignment>, ModelError>;
}

/// Assigns the single most likely emotion label per document.
#[async_trait]
pub trait EmotionClassifier {
    /// One label per input document, in input order.
    async fn classify_emotions(&self, docs: &[String]) -> Result<Vec<String>, ModelError>;
}

/// Check a model response covers every input document exactly once.
pub(crate) fn check_lengths(expected: usize, got: usize) -> Result<(), ModelError> {
    if expected != got {
        return Err(ModelError::LengthMismatch { expected, got });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topic_assignment_json_roundtrip() {
        let assignment = TopicAssignment {
            topic_id: 4,
            topic_name: "4_brp_card_waiting_weeks".into(),
        };
        let json = serde_json::to_string(&assignment).unwrap();
        let parsed: TopicAssignment = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, assignment);
    }

    #[test]
    fn outlier_topic_id_is_negative() {
        let json = r#"{"topic_id": -1, "topic_name": "-1_outliers"}"#;
        let parsed: TopicAssignment = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.topic_id, -1);
    }

    #[test]
    fn length_check_accepts_matching_counts() {
        assert!(check_lengths(3, 3).is_ok());
        assert!(check_lengths(0, 0).is_ok());
    }

    #[test]
    fn length_check_rejects_mismatch() {
        let err = check_lengths(3, 2).unwrap_err();
        assert!(matches!(
            err,
            ModelError::LengthMismatch { expected: 3, got: 2 }
        ));
    }
}
