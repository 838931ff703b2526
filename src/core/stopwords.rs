use crate::utils::error::{Result, RiskError};
use std::collections::HashSet;

/// English stopword list matching NLTK's `stopwords.words("english")`.
const ENGLISH: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan", "shan't",
    "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't", "wouldn",
    "wouldn't",
];

/// Stopword set for a language name. Only English ships built-in; anything
/// else is a configuration error raised before the pipeline runs.
pub fn for_language(language: &str) -> Result<HashSet<String>> {
    match language.to_ascii_lowercase().as_str() {
        "english" | "en" => Ok(english()),
        other => Err(RiskError::InvalidConfigValueError {
            field: "language".to_string(),
            value: other.to_string(),
            reason: "No built-in stopword list for this language. Supported: english".to_string(),
        }),
    }
}

pub fn english() -> HashSet<String> {
    ENGLISH.iter().map(|w| (*w).to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_contains_function_words() {
        let stop = english();
        assert!(stop.contains("the"));
        assert!(stop.contains("and"));
        assert!(stop.contains("wouldn't"));
        assert!(!stop.contains("solar"));
    }

    #[test]
    fn test_for_language_is_case_insensitive() {
        assert!(for_language("English").is_ok());
        assert!(for_language("en").is_ok());
    }

    #[test]
    fn test_unknown_language_is_config_error() {
        let err = for_language("klingon").unwrap_err();
        assert!(err.to_string().contains("language"));
    }
}
