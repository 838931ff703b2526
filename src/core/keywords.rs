use crate::domain::model::{Document, Keyword};
use regex::Regex;
use std::collections::{HashMap, HashSet};

/// Maximum number of ranked keywords returned.
pub const TOP_KEYWORDS: usize = 10;
/// Tokens shorter than this (in characters) are discarded.
pub const MIN_TOKEN_CHARS: usize = 4;

/// Ranks the most frequent non-stopword tokens of a document. The stopword
/// set is injected so callers (and tests) control the language fixture.
pub struct KeywordExtractor {
    stop_words: HashSet<String>,
    token_pattern: Regex,
}

impl KeywordExtractor {
    pub fn new(stop_words: HashSet<String>) -> Self {
        Self {
            stop_words,
            token_pattern: Regex::new(r"\w+").unwrap(),
        }
    }

    /// Up to [`TOP_KEYWORDS`] (token, count) pairs, sorted by descending
    /// count. Ties keep the order in which distinct tokens first appeared;
    /// the sort is stable and the count table is insertion-ordered.
    pub fn extract(&self, document: &Document) -> Vec<Keyword> {
        let text = document.as_str().to_lowercase();

        let mut counts: HashMap<&str, usize> = HashMap::new();
        let mut order: Vec<&str> = Vec::new();

        for token in self.token_pattern.find_iter(&text).map(|m| m.as_str()) {
            if token.chars().count() < MIN_TOKEN_CHARS || self.stop_words.contains(token) {
                continue;
            }
            match counts.get_mut(token) {
                Some(count) => *count += 1,
                None => {
                    counts.insert(token, 1);
                    order.push(token);
                }
            }
        }

        let mut ranked: Vec<Keyword> = order
            .into_iter()
            .filter_map(|token| {
                counts.remove(token).map(|count| Keyword {
                    token: token.to_string(),
                    count,
                })
            })
            .collect();
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked.truncate(TOP_KEYWORDS);
        ranked
    }
}
