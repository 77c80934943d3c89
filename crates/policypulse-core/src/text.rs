//! Text normalisation for scoring and cleaning for the topic model.
//!
//! Two distinct operations live here. [`normalize`] is the light form used
//! before similarity scoring: lowercase and trim, nothing else, so scores
//! stay comparable with the raw legislation titles. [`clean_text`] is the
//! aggressive form used before topic modelling: URLs, mentions, punctuation,
//! digits, and stopwords are all stripped.

/// English stopwords removed by [`clean_text`].
///
/// Matches the standard corpus-linguistics list used when the study corpus
/// was first cleaned; kept sorted for readability, matched linearly.
const STOPWORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "ain", "all", "am", "an", "and", "any",
    "are", "aren", "as", "at", "be", "because", "been", "before", "being", "below", "between",
    "both", "but", "by", "can", "couldn", "d", "did", "didn", "do", "does", "doesn", "doing",
    "don", "down", "during", "each", "few", "for", "from", "further", "had", "hadn", "has",
    "hasn", "have", "haven", "having", "he", "her", "here", "hers", "herself", "him", "himself",
    "his", "how", "i", "if", "in", "into", "is", "isn", "it", "its", "itself", "just", "ll", "m",
    "ma", "me", "mightn", "more", "most", "mustn", "my", "myself", "needn", "no", "nor", "not",
    "now", "o", "of", "off", "on", "once", "only", "or", "other", "our", "ours", "ourselves",
    "out", "over", "own", "re", "s", "same", "shan", "she", "should", "shouldn", "so", "some",
    "such", "t", "than", "that", "the", "their", "theirs", "them", "themselves", "then", "there",
    "these", "they", "this", "those", "through", "to", "too", "under", "until", "up", "ve",
    "very", "was", "wasn", "we", "were", "weren", "what", "when", "where", "which", "while",
    "who", "whom", "why", "will", "with", "won", "wouldn", "y", "you", "your", "yours",
    "yourself", "yourselves",
];

/// Normalise text for similarity scoring: lowercase and trim.
///
/// `None` (a missing cell) becomes the empty string, so malformed rows
/// degrade to a zero score instead of erroring.
pub fn normalize(text: Option<&str>) -> String {
    match text {
        Some(s) => s.trim().to_lowercase(),
        None => String::new(),
    }
}

/// Clean raw post text for the topic model.
///
/// Lowercases, drops URL and @mention tokens, strips punctuation and digits,
/// removes stopwords, and rejoins the surviving tokens with single spaces.
pub fn clean_text(text: &str) -> String {
    let lowered = text.to_lowercase();

    let tokens = lowered
        .split_whitespace()
        .filter(|tok| !is_url(tok) && !tok.starts_with('@'))
        .filter_map(|tok| {
            let word: String = tok.chars().filter(|c| c.is_alphabetic()).collect();
            if word.is_empty() || STOPWORDS.contains(&word.as_str()) {
                None
            } else {
                Some(word)
            }
        })
        .collect::<Vec<_>>();

    tokens.join(" ")
}

fn is_url(token: &str) -> bool {
    token.starts_with("http://") || token.starts_with("https://") || token.starts_with("www.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_lowercases_and_trims() {
        assert_eq!(normalize(Some("  Visa Applications & Issues  ")), "visa applications & issues");
    }

    #[test]
    fn normalize_missing_is_empty() {
        assert_eq!(normalize(None), "");
    }

    #[test]
    fn normalize_blank_is_empty() {
        assert_eq!(normalize(Some("   ")), "");
    }

    #[test]
    fn clean_removes_urls() {
        let cleaned = clean_text("check https://www.gov.uk/evisa and www.ukvi.gov.uk today");
        assert_eq!(cleaned, "check today");
    }

    #[test]
    fn clean_removes_mentions_and_hash_signs() {
        let cleaned = clean_text("@ukvi ignored #evisa rollout problems");
        assert_eq!(cleaned, "ignored evisa rollout problems");
    }

    #[test]
    fn clean_removes_punctuation_and_digits() {
        let cleaned = clean_text("waited 12 weeks!! BRP (still) missing...");
        assert_eq!(cleaned, "waited weeks brp still missing");
    }

    #[test]
    fn clean_removes_stopwords() {
        let cleaned = clean_text("the visa was refused because of an error");
        assert_eq!(cleaned, "visa refused error");
    }

    #[test]
    fn clean_empty_input() {
        assert_eq!(clean_text(""), "");
        assert_eq!(clean_text("the a an of"), "");
    }

    #[test]
    fn clean_token_of_only_digits_is_dropped() {
        assert_eq!(clean_text("2014 immigration act"), "immigration act");
    }
}
