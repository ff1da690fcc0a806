// ZeroDecay - core/filter.rs
//
// Live card filter for the Monitoring search box.
// The typed text is tried as a case-insensitive regex first; anything that
// does not compile is matched literally instead. Building a filter never
// fails, so every keystroke yields a visibility decision for every card.

use crate::core::model::Card;
use regex::{Regex, RegexBuilder};

#[derive(Debug, Clone)]
enum Matcher {
    /// Empty pattern: everything is visible.
    Everything,
    /// Compiled regex (either the raw pattern or its escaped form).
    Regex(Regex),
    /// Lowercased needle for plain containment. Only reached when even the
    /// escaped pattern exceeds the regex size limit.
    Substring(String),
}

/// Compiled search box text.
#[derive(Debug, Clone)]
pub struct CardFilter {
    pattern: String,
    matcher: Matcher,
    literal: bool,
}

impl CardFilter {
    /// Compile `pattern`. Invalid expressions fall back to literal matching.
    pub fn new(pattern: &str) -> Self {
        if pattern.is_empty() {
            return Self {
                pattern: String::new(),
                matcher: Matcher::Everything,
                literal: false,
            };
        }

        match case_insensitive(pattern) {
            Ok(regex) => Self {
                pattern: pattern.to_string(),
                matcher: Matcher::Regex(regex),
                literal: false,
            },
            Err(e) => {
                tracing::debug!(
                    pattern,
                    error = %e,
                    "Search text is not a valid regex; matching it literally"
                );
                let matcher = match case_insensitive(&regex::escape(pattern)) {
                    Ok(regex) => Matcher::Regex(regex),
                    Err(e) => {
                        tracing::warn!(error = %e, "Escaped search text rejected; using substring match");
                        Matcher::Substring(pattern.to_lowercase())
                    }
                };
                Self {
                    pattern: pattern.to_string(),
                    matcher,
                    literal: true,
                }
            }
        }
    }

    /// The text this filter was built from.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// True when the text did not compile as a regex and is matched verbatim.
    pub fn is_literal(&self) -> bool {
        self.literal
    }

    /// True when the filter hides nothing.
    pub fn is_empty(&self) -> bool {
        matches!(self.matcher, Matcher::Everything)
    }

    /// Whether a card named `name` stays visible. Unanchored search.
    pub fn matches(&self, name: &str) -> bool {
        match &self.matcher {
            Matcher::Everything => true,
            Matcher::Regex(regex) => regex.is_match(name),
            Matcher::Substring(needle) => name.to_lowercase().contains(needle.as_str()),
        }
    }

    /// Visibility of each card, index-aligned with `cards`.
    pub fn visibility(&self, cards: &[Card]) -> Vec<bool> {
        cards.iter().map(|card| self.matches(&card.name)).collect()
    }
}

impl Default for CardFilter {
    fn default() -> Self {
        Self::new("")
    }
}

fn case_insensitive(pattern: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(pattern).case_insensitive(true).build()
}

/// Visibility of each card under `pattern`, index-aligned with `cards`.
pub fn filter_visibility(pattern: &str, cards: &[Card]) -> Vec<bool> {
    CardFilter::new(pattern).visibility(cards)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(names: &[&str]) -> Vec<Card> {
        names.iter().map(|n| Card::new(*n, vec![true])).collect()
    }

    #[test]
    fn test_empty_pattern_shows_all() {
        let cards = cards(&["John.json", "cat.jpg", "lol.cs"]);
        assert_eq!(filter_visibility("", &cards), vec![true, true, true]);
        assert!(CardFilter::new("").is_empty());
    }

    #[test]
    fn test_regex_pattern() {
        let cards = cards(&["backup_set_alpha.bak", "John.json", "tiny.cfg"]);
        assert_eq!(filter_visibility(r"\.bak$", &cards), vec![true, false, false]);
        assert_eq!(filter_visibility("json|cfg", &cards), vec![false, true, true]);
    }

    #[test]
    fn test_case_insensitive() {
        let cards = cards(&["John.json", "cat.jpg"]);
        assert_eq!(filter_visibility("JOHN", &cards), vec![true, false]);
        assert_eq!(filter_visibility("^CaT", &cards), vec![false, true]);
    }

    #[test]
    fn test_unanchored_search() {
        let cards = cards(&["critical_backup.dat"]);
        assert_eq!(filter_visibility("backup", &cards), vec![true]);
    }

    #[test]
    fn test_leading_star_falls_back_to_literal() {
        let cards = cards(&["backup_set_alpha.bak", "John.json"]);
        let filter = CardFilter::new("*.bak");
        assert!(filter.is_literal());
        assert_eq!(filter.visibility(&cards), vec![false, false]);
    }

    #[test]
    fn test_literal_fallback_matches_verbatim_text() {
        let cards = cards(&["report[v2.docx", "report_v2.docx"]);
        let filter = CardFilter::new("[v2");
        assert!(filter.is_literal());
        assert_eq!(filter.visibility(&cards), vec![true, false]);
    }

    #[test]
    fn test_invalid_patterns_still_produce_full_mapping() {
        let cards = cards(&["a.txt", "b.txt", "c.txt"]);
        for pattern in ["[abc", "(unclosed", "a{2", "+", "\\", "?*"] {
            let vis = filter_visibility(pattern, &cards);
            assert_eq!(vis.len(), cards.len(), "pattern {pattern:?}");
        }
    }

    #[test]
    fn test_idempotent() {
        let cards = cards(&["John.json", "cat.jpg", "backup_set_beta_needs_check.bak"]);
        for pattern in ["", "j", "*.bak", "b.*k$"] {
            assert_eq!(
                filter_visibility(pattern, &cards),
                filter_visibility(pattern, &cards),
                "pattern {pattern:?}"
            );
        }
    }

    #[test]
    fn test_valid_regex_is_not_literal() {
        let filter = CardFilter::new("cat");
        assert!(!filter.is_literal());
        assert_eq!(filter.pattern(), "cat");
    }
}
