//! Reddit listing-API client and keyword filtering for discourse posts.
//!
//! The study corpus is built from the public `new.json` listing of each
//! subreddit, filtered client-side against the search keyword list so every
//! retained post records which keywords selected it.

use policypulse_core::Post;
use serde::Deserialize;

/// Subreddits monitored by the study.
pub const DEFAULT_SUBREDDITS: &[&str] = &[
    "ukvisa",
    "spousevisauk",
    "immigration",
    "visas",
    "immigrationUK",
    "unitedkingdom",
    "europe",
    "britishproblems",
    "legaladviceuk",
    "the3million",
    "migrants",
    "openrightsgroup",
    "AskUK",
    "ukpolitics",
    "worldnews",
    "immigrationlaw",
];

/// Search keywords a post must mention to enter the corpus.
pub const DEFAULT_KEYWORDS: &[&str] = &[
    "share code",
    "digital immigration",
    "online immigration status",
    "evisa",
    "digital BRP",
    "immigration app",
    "BRP replacement",
    "settled status",
    "EUSS",
    "UK visa",
    "spouse visa",
    "student visa",
    "tier 2 visa",
    "ILR",
    "home office error",
    "vfs delay",
    "UKVI portal problem",
    "biometric delay",
    "email from UKVI",
    "right to work UK",
    "renting with share code",
    "NHS and immigration",
    "check immigration status",
    "immigration bill",
    "UK immigration law",
    "european settlement scheme",
    "rwanda policy",
];

// ── Listing payload ──

#[derive(Debug, Deserialize)]
pub struct Listing {
    pub data: ListingData,
}

#[derive(Debug, Deserialize)]
pub struct ListingData {
    pub children: Vec<ListingChild>,
}

#[derive(Debug, Deserialize)]
pub struct ListingChild {
    pub data: ListedPost,
}

/// The subset of a listing entry the pipeline keeps.
#[derive(Debug, Deserialize)]
pub struct ListedPost {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub selftext: String,
    pub created_utc: f64,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub score: i64,
    #[serde(default)]
    pub num_comments: i64,
    pub subreddit: String,
    #[serde(default)]
    pub url: String,
}

/// Keywords (in list order) that appear in the post's title or body,
/// case-insensitive. Empty means the post is out of scope.
pub fn matched_keywords(post: &ListedPost, keywords: &[&str]) -> Vec<String> {
    let haystack = format!("{} {}", post.title, post.selftext).to_lowercase();
    keywords
        .iter()
        .filter(|kw| haystack.contains(&kw.to_lowercase()))
        .map(|kw| kw.to_string())
        .collect()
}

/// Convert a listing entry into a pipeline [`Post`].
pub fn to_post(listed: ListedPost, keyword_matched: Vec<String>) -> Post {
    Post {
        id: listed.id,
        title: listed.title,
        selftext: listed.selftext,
        created_utc: listed.created_utc,
        author: listed.author,
        score: listed.score,
        num_comments: listed.num_comments,
        subreddit: listed.subreddit,
        url: listed.url,
        keyword_matched,
        full_text: String::new(),
        text_cleaned: String::new(),
        topic_id: None,
        topic_name: None,
        final_topic_label: None,
        emotion_label: None,
    }
}

#[cfg(feature = "http")]
mod client {
    use std::time::Duration;

    use chrono::{DateTime, Utc};
    use policypulse_core::Post;
    use tracing::info;

    use super::{Listing, matched_keywords, to_post};
    use crate::IngestError;

    /// Pause between subreddit fetches, to stay well under the rate limit.
    const FETCH_DELAY: Duration = Duration::from_secs(2);

    /// Client for the public Reddit listing API.
    pub struct RedditClient {
        client: reqwest::Client,
        pub(crate) base_url: String,
        user_agent: String,
    }

    impl RedditClient {
        /// Create a client identifying itself with the given user agent.
        pub fn new(user_agent: &str) -> Self {
            Self::with_base_url("https://www.reddit.com", user_agent)
        }

        /// Override the API origin, mainly for tests.
        pub fn with_base_url(base_url: &str, user_agent: &str) -> Self {
            Self {
                client: reqwest::Client::new(),
                base_url: base_url.trim_end_matches('/').to_string(),
                user_agent: user_agent.to_string(),
            }
        }

        /// Fetch the newest posts of one subreddit.
        pub async fn fetch_new(&self, subreddit: &str, limit: u32) -> Result<Listing, IngestError> {
            let url = format!("{}/r/{}/new.json?limit={}", self.base_url, subreddit, limit);

            let resp = self
                .client
                .get(&url)
                .header(reqwest::header::USER_AGENT, &self.user_agent)
                .send()
                .await?;
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

        /// Collect keyword-matching posts across subreddits.
        ///
        /// If `since` is provided, only posts created after that timestamp
        /// are kept, for incremental collection runs.
        pub async fn collect(
            &self,
            subreddits: &[&str],
            keywords: &[&str],
            limit: u32,
            since: Option<DateTime<Utc>>,
        ) -> Result<Vec<Post>, IngestError> {
            let cutoff = since.map(|ts| ts.timestamp() as f64);
            let mut posts = Vec::new();

            for (i, subreddit) in subreddits.iter().enumerate() {
                if i > 0 {
                    tokio::time::sleep(FETCH_DELAY).await;
                }

                info!(subreddit, "fetching listing");
                let listing = self.fetch_new(subreddit, limit).await?;

                for child in listing.data.children {
                    let listed = child.data;
                    if let Some(cutoff) = cutoff
                        && listed.created_utc <= cutoff
                    {
                        continue;
                    }
                    let matched = matched_keywords(&listed, keywords);
                    if !matched.is_empty() {
                        posts.push(to_post(listed, matched));
                    }
                }
            }

            info!(count = posts.len(), "collected posts");
            Ok(posts)
        }
    }
}

#[cfg(feature = "http")]
pub use client::RedditClient;
