//! Rule-based topic labelling.
//!
//! The topic model emits raw cluster names like `"4_brp_card_waiting_weeks"`.
//! Labelling maps those onto the fixed set of human-readable study topics via
//! an ordered list of (predicate, label) rules, evaluated first-match-wins.
//! Posts that fall through to the fallback label get a second, refinement
//! pass over the full post text.

/// A labelling predicate over a piece of text.
#[derive(Debug, Clone)]
pub enum Predicate {
    /// Matches when any of the keywords appears as a substring
    /// (case-insensitive).
    ContainsAny(Vec<String>),
}

impl Predicate {
    /// Convenience constructor from string literals.
    pub fn contains_any(keywords: &[&str]) -> Self {
        Self::ContainsAny(keywords.iter().map(|k| k.to_lowercase()).collect())
    }

    fn matches(&self, text: &str) -> bool {
        let lowered = text.to_lowercase();
        match self {
            Self::ContainsAny(keywords) => keywords.iter().any(|k| lowered.contains(k.as_str())),
        }
    }
}

/// One labelling rule: first rule whose predicate matches wins.
#[derive(Debug, Clone)]
pub struct Rule {
    pub predicate: Predicate,
    pub label: String,
}

impl Rule {
    pub fn new(predicate: Predicate, label: &str) -> Self {
        Self {
            predicate,
            label: label.to_string(),
        }
    }
}

/// Ordered-rule topic labeller with a fallback label and a refinement pass.
#[derive(Debug, Clone)]
pub struct TopicLabeler {
    rules: Vec<Rule>,
    /// Applied to the full post text when the topic-name rules fell through.
    refinements: Vec<Rule>,
    fallback: String,
}

impl TopicLabeler {
    pub fn new(rules: Vec<Rule>, refinements: Vec<Rule>, fallback: &str) -> Self {
        Self {
            rules,
            refinements,
            fallback: fallback.to_string(),
        }
    }

    /// The rule set used for the UK immigration discourse study.
    pub fn uk_immigration() -> Self {
        let rules = vec![
            Rule::new(
                Predicate::contains_any(&["brp", "biometric"]),
                "BRP & Biometric Problems",
            ),
            Rule::new(
                Predicate::contains_any(&["visa", "application"]),
                "Visa Applications & Issues",
            ),
            Rule::new(
                Predicate::contains_any(&["settled", "euss"]),
                "EUSS & Settled Status",
            ),
            Rule::new(
                Predicate::contains_any(&["delay", "ukvi"]),
                "UKVI Delays & Complaints",
            ),
            Rule::new(
                Predicate::contains_any(&["share", "work"]),
                "Right to Work / Share Code",
            ),
            Rule::new(
                Predicate::contains_any(&["student"]),
                "Student Visa & Universities",
            ),
            Rule::new(Predicate::contains_any(&["ilr"]), "ILR & Settlement"),
            Rule::new(
                Predicate::contains_any(&["law", "policy"]),
                "UK Immigration Law & Policy",
            ),
            Rule::new(
                Predicate::contains_any(&["nhs", "health"]),
                "NHS & Health Access",
            ),
        ];

        let refinements = vec![
            Rule::new(
                Predicate::contains_any(&["delay", "waiting", "complaint"]),
                "UKVI Delays & Complaints",
            ),
            Rule::new(
                Predicate::contains_any(&["brp", "biometric"]),
                "BRP & Biometric Problems",
            ),
        ];

        Self::new(rules, refinements, "General Immigration Concerns")
    }

    /// Label used when no rule matches.
    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    /// Map a raw topic-model name to a study label, first-match-wins.
    pub fn label_topic(&self, topic_name: &str) -> &str {
        self.rules
            .iter()
            .find(|rule| rule.predicate.matches(topic_name))
            .map(|rule| rule.label.as_str())
            .unwrap_or(&self.fallback)
    }

    /// Full labelling: topic-name rules, then refinement over the post text
    /// for rows that landed on the fallback.
    pub fn label(&self, topic_name: &str, full_text: &str) -> &str {
        let label = self.label_topic(topic_name);
        if label != self.fallback {
            return label;
        }
        self.refinements
            .iter()
            .find(|rule| rule.predicate.matches(full_text))
            .map(|rule| rule.label.as_str())
            .unwrap_or(&self.fallback)
    }
}
