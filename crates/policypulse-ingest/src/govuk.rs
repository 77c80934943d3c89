//! GOV.UK search-API client for legislation and guidance documents.

use policypulse_core::LegislationRecord;
use serde::Deserialize;

/// Search keywords used to pull guidance and policy documents.
pub const DEFAULT_SEARCH_KEYWORDS: &[&str] = &[
    "eVisa",
    "immigration act 2014",
    "biometric residence permit",
    "right to rent",
];

// ── Search payload ──

#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<SearchResult>,
}

#[derive(Debug, Deserialize)]
pub struct SearchResult {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub public_timestamp: String,
}

/// Map one search result to a [`LegislationRecord`].
///
/// Relative links get the site origin prepended; the date keeps only the
/// date part of the publication timestamp.
pub fn to_record(result: &SearchResult, keyword: &str, origin: &str) -> LegislationRecord {
    let link = if result.link.starts_with('/') {
        format!("{origin}{}", result.link)
    } else {
        result.link.clone()
    };
    let date = result
        .public_timestamp
        .split('T')
        .next()
        .unwrap_or_default()
        .to_string();

    LegislationRecord {
        keyword: keyword.to_string(),
        title: result.title.clone(),
        link,
        date,
        summary: result.description.clone(),
        source: "GOV.UK".to_string(),
    }
}

/// Drop records whose title was already seen; the first occurrence wins.
pub fn dedup_by_title(records: Vec<LegislationRecord>) -> Vec<LegislationRecord> {
    let mut seen = std::collections::HashSet::new();
    records
        .into_iter()
        .filter(|r| seen.insert(r.title.clone()))
        .collect()
}

#[cfg(feature = "http")]
mod client {
    use std::time::Duration;

    use policypulse_core::LegislationRecord;
    use tracing::info;

    use super::{SearchResponse, dedup_by_title, to_record};
    use crate::IngestError;

    /// Pause between search requests.
    const FETCH_DELAY: Duration = Duration::from_secs(1);

    /// Client for the GOV.UK search API.
    pub struct GovUkClient {
        client: reqwest::Client,
        pub(crate) base_url: String,
    }

    impl GovUkClient {
        pub fn new() -> Self {
            Self::with_base_url("https://www.gov.uk")
        }

        /// Override the API origin, mainly for tests.
        pub fn with_base_url(base_url: &str) -> Self {
            Self {
                client: reqwest::Client::new(),
                base_url: base_url.trim_end_matches('/').to_string(),
            }
        }

        /// Run one keyword search.
        pub async fn search(&self, keyword: &str, count: u32) -> Result<SearchResponse, IngestError> {
            let url = format!(
                "{}/api/search.json?q={}&count={}",
                self.base_url,
                urlencode(keyword),
                count
            );

            let resp = self.client.get(&url).send().await?;
            let status = resp.status();
            if !status.is_success() {
                let body = resp.text().await.unwrap_or_default();
                return Err(IngestError::Server {
                    status: status.as_u16(),
                    body,
                });
            }

            Ok(resp.json().await?)
        }

        /// Search every keyword and collect deduplicated legislation records.
        pub async fn collect(
            &self,
            keywords: &[&str],
            count: u32,
        ) -> Result<Vec<LegislationRecord>, IngestError> {
            let mut records = Vec::new();

            for (i, keyword) in keywords.iter().enumerate() {
                if i > 0 {
                    tokio::time::sleep(FETCH_DELAY).await;
                }

                info!(keyword, "searching GOV.UK");
                let response = self.search(keyword, count).await?;
                records.extend(
                    response
                        .results
                        .iter()
                        .map(|r| to_record(r, keyword, &self.base_url)),
                );
            }

            let records = dedup_by_title(records);
            info!(count = records.len(), "collected legislation records");
            Ok(records)
        }
    }

    impl Default for GovUkClient {
        fn default() -> Self {
            Self::new()
        }
    }

    /// Percent-encode the characters that actually occur in search keywords.
    fn urlencode(s: &str) -> String {
        s.replace(' ', "%20")
    }
}

#[cfg(feature = "http")]
pub use client::GovUkClient;
