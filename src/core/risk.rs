use crate::domain::model::{RiskLevel, SentimentTally};

const HIGH_NEG_RATIO: f64 = 0.5;
const HIGH_NEG_COUNT: usize = 10;
const MEDIUM_NEG_RATIO: f64 = 0.2;

/// Coarse risk heuristic over the sentiment tally. First matching rule wins;
/// an empty tally has a negative ratio of zero and scores Low.
pub fn score_risk(tally: &SentimentTally) -> RiskLevel {
    let total = tally.total();
    let neg_ratio = if total > 0 {
        tally.negative as f64 / total as f64
    } else {
        0.0
    };

    if neg_ratio > HIGH_NEG_RATIO || tally.negative > HIGH_NEG_COUNT {
        RiskLevel::High
    } else if neg_ratio > MEDIUM_NEG_RATIO {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tally(positive: usize, neutral: usize, negative: usize) -> SentimentTally {
        SentimentTally {
            positive,
            neutral,
            negative,
        }
    }

    #[test]
    fn test_empty_tally_is_low() {
        assert_eq!(score_risk(&SentimentTally::default()), RiskLevel::Low);
    }

    #[test]
    fn test_majority_negative_is_high() {
        assert_eq!(score_risk(&tally(1, 0, 2)), RiskLevel::High);
    }

    #[test]
    fn test_absolute_negative_count_overrides_ratio() {
        // 11 negatives out of 100: ratio 0.11 but count > 10
        assert_eq!(score_risk(&tally(89, 0, 11)), RiskLevel::High);
        assert_eq!(score_risk(&tally(0, 0, 11)), RiskLevel::High);
    }

    #[test]
    fn test_ten_negatives_do_not_trigger_high() {
        // count rule is strictly greater than 10
        assert_eq!(score_risk(&tally(90, 0, 10)), RiskLevel::Low);
    }

    #[test]
    fn test_moderate_negative_ratio_is_medium() {
        // 1 of 3 negative: ratio 0.33
        assert_eq!(score_risk(&tally(2, 0, 1)), RiskLevel::Medium);
    }

    #[test]
    fn test_ratio_exactly_half_is_medium() {
        // 0.5 is not > 0.5; falls through to the ratio > 0.2 rule
        assert_eq!(score_risk(&tally(1, 0, 1)), RiskLevel::Medium);
    }

    #[test]
    fn test_ratio_exactly_fifth_is_low() {
        // 0.2 is not > 0.2
        assert_eq!(score_risk(&tally(4, 0, 1)), RiskLevel::Low);
    }

    #[test]
    fn test_mostly_positive_is_low() {
        assert_eq!(score_risk(&tally(10, 5, 1)), RiskLevel::Low);
    }

    #[test]
    fn test_every_tally_maps_to_exactly_one_level() {
        // sweep a grid; score_risk must be total over non-negative counts
        for positive in 0..20 {
            for neutral in 0..5 {
                for negative in 0..20 {
                    let level = score_risk(&tally(positive, neutral, negative));
                    assert!(matches!(
                        level,
                        RiskLevel::Low | RiskLevel::Medium | RiskLevel::High
                    ));
                }
            }
        }
    }
}
