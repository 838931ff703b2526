use crate::domain::model::{Document, SentenceSentiment, SentimentLabel, SentimentTally};
use crate::domain::ports::PolarityScorer;
use unicode_segmentation::UnicodeSegmentation;

/// Scores each sentence of a document with the injected polarity scorer and
/// labels it against the fixed thresholds. Sentence order is preserved.
pub struct SentimentAnalyzer<P: PolarityScorer> {
    scorer: P,
}

impl<P: PolarityScorer> SentimentAnalyzer<P> {
    pub fn new(scorer: P) -> Self {
        Self { scorer }
    }

    /// One entry per detected sentence (UAX #29 boundaries), in document
    /// order. An empty document yields an empty sequence.
    pub fn analyze(&self, document: &Document) -> Vec<SentenceSentiment> {
        document
            .as_str()
            .unicode_sentences()
            .map(str::trim)
            .filter(|sentence| !sentence.is_empty())
            .map(|sentence| {
                let polarity = self.scorer.score(sentence);
                SentenceSentiment {
                    sentence: sentence.to_string(),
                    polarity,
                    label: SentimentLabel::from_polarity(polarity),
                }
            })
            .collect()
    }
}

/// Label counts over one analysis run.
pub fn tally(sentences: &[SentenceSentiment]) -> SentimentTally {
    let mut tally = SentimentTally::default();
    for sentence in sentences {
        tally.record(sentence.label);
    }
    tally
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::scorer::VaderScorer;

    /// Scores by keyword lookup so label outcomes are fully controlled.
    struct StubScorer;

    impl PolarityScorer for StubScorer {
        fn score(&self, text: &str) -> f64 {
            let lowered = text.to_lowercase();
            if lowered.contains("good") {
                0.5
            } else if lowered.contains("bad") {
                -0.5
            } else {
                0.0
            }
        }
    }

    #[test]
    fn test_one_entry_per_sentence_in_order() {
        let analyzer = SentimentAnalyzer::new(StubScorer);
        let document = Document::new("Good start. Nothing to report. Bad ending.");

        let sentences = analyzer.analyze(&document);

        assert_eq!(sentences.len(), 3);
        assert_eq!(sentences[0].sentence, "Good start.");
        assert_eq!(sentences[0].label, SentimentLabel::Positive);
        assert_eq!(sentences[1].label, SentimentLabel::Neutral);
        assert_eq!(sentences[2].sentence, "Bad ending.");
        assert_eq!(sentences[2].label, SentimentLabel::Negative);
    }

    #[test]
    fn test_empty_document_yields_empty_sequence() {
        let analyzer = SentimentAnalyzer::new(StubScorer);
        let sentences = analyzer.analyze(&Document::new(""));
        assert!(sentences.is_empty());
        assert_eq!(tally(&sentences), SentimentTally::default());
    }

    #[test]
    fn test_whitespace_document_yields_empty_sequence() {
        let analyzer = SentimentAnalyzer::new(StubScorer);
        assert!(analyzer.analyze(&Document::new("   \n\t  ")).is_empty());
    }

    #[test]
    fn test_labels_consistent_with_polarity() {
        let analyzer = SentimentAnalyzer::new(StubScorer);
        let document = Document::new("Good news here. Bad news there. Plain news everywhere.");

        for sentence in analyzer.analyze(&document) {
            assert_eq!(sentence.label, SentimentLabel::from_polarity(sentence.polarity));
        }
    }

    #[test]
    fn test_tally_counts_labels() {
        let analyzer = SentimentAnalyzer::new(StubScorer);
        let document = Document::new("Good. Good. Bad. Whatever.");

        let counts = tally(&analyzer.analyze(&document));

        assert_eq!(counts.positive, 2);
        assert_eq!(counts.negative, 1);
        assert_eq!(counts.neutral, 1);
        assert_eq!(counts.total(), 4);
    }

    #[test]
    fn test_analysis_is_deterministic() {
        let analyzer = SentimentAnalyzer::new(VaderScorer::new());
        let document = Document::new("The consultation went well. Some residents remain upset.");

        let first = analyzer.analyze(&document);
        let second = analyzer.analyze(&document);

        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.sentence, b.sentence);
            assert_eq!(a.polarity.to_bits(), b.polarity.to_bits());
            assert_eq!(a.label, b.label);
        }
    }

    #[test]
    fn test_vader_example_document() {
        let analyzer = SentimentAnalyzer::new(VaderScorer::new());
        let document = Document::new("Great news. Great news. Terrible outcome.");

        let sentences = analyzer.analyze(&document);
        assert_eq!(sentences.len(), 3);

        let counts = tally(&sentences);
        assert_eq!(counts.positive, 2);
        assert_eq!(counts.negative, 1);
        assert_eq!(counts.neutral, 0);
    }
}
