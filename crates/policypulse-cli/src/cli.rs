//! CLI argument definitions.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use policypulse_link::DEFAULT_THRESHOLD;

/// Discourse-to-legislation research pipeline.
#[derive(Debug, Parser)]
#[command(name = "policypulse", version, about)]
pub struct Cli {
    /// Data directory holding the raw/ and processed/ artifacts.
    #[arg(long, global = true, default_value = "data", env = "POLICYPULSE_DATA_DIR")]
    pub data_dir: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Scrape a source into its raw dataset.
    Collect {
        #[command(subcommand)]
        source: CollectSource,
    },
    /// Clean post text for the topic model.
    Process,
    /// Assign topics and emotions via the inference server.
    Model {
        /// Inference-server base URL.
        #[arg(long, env = "POLICYPULSE_MODEL_URL")]
        endpoint: String,
    },
    /// Apply rule-based topic labels to the topic-model output.
    Label,
    /// Link each topic to its best-matching legislation record.
    Link {
        /// Confidence threshold in 0..=100.
        #[arg(long, default_value_t = DEFAULT_THRESHOLD, env = "POLICYPULSE_THRESHOLD")]
        threshold: u8,
    },
    /// Build the merged dashboard datasets.
    Merge,
    /// Write summary tables for the report.
    Analyze {
        /// Output directory for the summary tables.
        #[arg(long, default_value = "reports", env = "POLICYPULSE_REPORTS_DIR")]
        reports_dir: PathBuf,
    },
}

#[derive(Debug, Subcommand)]
pub enum CollectSource {
    /// Keyword-matching posts from the monitored subreddits.
    Reddit {
        /// User agent sent to the listing API.
        #[arg(long, default_value = "policypulse/0.1", env = "POLICYPULSE_USER_AGENT")]
        user_agent: String,
        /// Listing size requested per subreddit.
        #[arg(long, default_value_t = 100)]
        limit: u32,
        /// Only keep posts created after this RFC 3339 timestamp.
        #[arg(long)]
        since: Option<DateTime<Utc>>,
    },
    /// Guidance and policy documents from the GOV.UK search API.
    Legislation {
        /// Results requested per search keyword.
        #[arg(long, default_value_t = 100)]
        count: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_link_with_default_threshold() {
        let cli = Cli::parse_from(["policypulse", "link"]);
        match cli.command {
            Command::Link { threshold } => assert_eq!(threshold, 75),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parses_link_with_explicit_threshold() {
        let cli = Cli::parse_from(["policypulse", "link", "--threshold", "60"]);
        match cli.command {
            Command::Link { threshold } => assert_eq!(threshold, 60),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parses_collect_reddit_with_since() {
        let cli = Cli::parse_from([
            "policypulse",
            "collect",
            "reddit",
            "--since",
            "2024-04-01T00:00:00Z",
        ]);
        match cli.command {
            Command::Collect {
                source: CollectSource::Reddit { since, limit, .. },
            } => {
                assert!(since.is_some());
                assert_eq!(limit, 100);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn data_dir_defaults() {
        let cli = Cli::parse_from(["policypulse", "process"]);
        assert_eq!(cli.data_dir, PathBuf::from("data"));
    }

    #[test]
    fn data_dir_is_global() {
        let cli = Cli::parse_from(["policypulse", "merge", "--data-dir", "/tmp/run1"]);
        assert_eq!(cli.data_dir, PathBuf::from("/tmp/run1"));
    }
}
