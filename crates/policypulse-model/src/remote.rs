//! HTTP client for a remote inference server.
//!
//! The server exposes two batch endpoints: `POST /topics` returns one topic
//! assignment per document, `POST /emotions` one emotion label per document.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{EmotionClassifier, ModelError, TopicAssignment, TopicModel, check_lengths};

/// Client for a remote topic/emotion inference server.
pub struct RemoteModelClient {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Serialize)]
struct BatchRequest<'a> {
    docs: &'a [String],
}

#[derive(Deserialize)]
struct TopicsResponse {
    topics: Vec<TopicAssignment>,
}

#[derive(Deserialize)]
struct EmotionsResponse {
    emotions: Vec<String>,
}

impl RemoteModelClient {
    /// Create a client for the given inference-server base URL
    /// (e.g. `http://localhost:8500`, no trailing slash needed).
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn post<Req: Serialize, Resp: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        body: &Req,
    ) -> Result<Resp, ModelError> {
        let url = format!("{}{}", self.base_url, path);
        let resp = self.client.post(&url).json(body).send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ModelError::Server {
                status: status.as_u16(),
                body,
            });
        }
        Ok(resp.json().await?)
    }
}

#[async_trait]
impl TopicModel for RemoteModelClient {
    async fn assign_topics(&self, docs: &[String]) -> Result<Vec<TopicAssignment>, ModelError> {
        info!(count = docs.len(), "requesting topic assignments");
        let response: TopicsResponse = self.post("/topics", &BatchRequest { docs }).await?;
        check_lengths(docs.len(), response.topics.len())?;
        Ok(response.topics)
    }
}

#[async_trait]
impl EmotionClassifier for RemoteModelClient {
    async fn classify_emotions(&self, docs: &[String]) -> Result<Vec<String>, ModelError> {
        info!(count = docs.len(), "requesting emotion labels");
        let response: EmotionsResponse = self.post("/emotions", &BatchRequest { docs }).await?;
        check_lengths(docs.len(), response.emotions.len())?;
        Ok(response.emotions)
    }
}
