//! Categorical sentiment averaging and sentiment tiers.

use moneymind_common::{round_half_up, QuestionRecord};
use moneymind_config::SentimentColors;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Scores strictly above this value are positive.
pub const POSITIVE_THRESHOLD: f64 = 20.0;

/// One category of an average: a record is in the category when its
/// identifier equals `token` or its prompt contains `fragment`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySlot {
    /// Exact identifier, e.g. `Q(1)`.
    pub token: Cow<'static, str>,
    /// Prompt substring.
    pub fragment: Cow<'static, str>,
}

impl CategorySlot {
    /// Creates a slot.
    pub fn new(
        token: impl Into<Cow<'static, str>>,
        fragment: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            token: token.into(),
            fragment: fragment.into(),
        }
    }

    /// Whether `record` belongs to this slot.
    #[must_use]
    pub fn matches(&self, record: &QuestionRecord) -> bool {
        record.identifier.as_deref() == Some(&*self.token)
            || record
                .prompt_fragment
                .as_deref()
                .is_some_and(|prompt| prompt.contains(&*self.fragment))
    }
}

/// The three survey questions.
pub const THREE_QUESTIONS: [(&str, &str); 3] = [
    ("Q(1)", "money mean to you"),
    ("Q(2)", "managing your money easier"),
    ("Q(3)", "tricks help you make your money last"),
];

/// Averages scores over a fixed set of categories.
///
/// Every category must be located for a result; the first record matching a
/// category is the one used, so a single record may fill several slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoricalAverager {
    slots: Vec<CategorySlot>,
}

impl CategoricalAverager {
    /// Creates an averager over the given categories.
    #[must_use]
    pub const fn new(slots: Vec<CategorySlot>) -> Self {
        Self { slots }
    }

    /// Averager over `Q(1)`, `Q(2)` and `Q(3)`.
    #[must_use]
    pub fn three_questions() -> Self {
        Self::new(
            THREE_QUESTIONS
                .iter()
                .map(|(token, fragment)| CategorySlot::new(*token, *fragment))
                .collect(),
        )
    }

    /// Categories of this averager.
    #[must_use]
    pub fn slots(&self) -> &[CategorySlot] {
        &self.slots
    }

    /// Index of the first slot `record` belongs to.
    #[must_use]
    pub fn slot_of(&self, record: &QuestionRecord) -> Option<usize> {
        self.slots.iter().position(|slot| slot.matches(record))
    }

    /// The record filling each slot, or `None` if any slot is empty.
    #[must_use]
    pub fn locate<'r>(&self, records: &'r [QuestionRecord]) -> Option<Vec<&'r QuestionRecord>> {
        self.slots
            .iter()
            .map(|slot| records.iter().find(|record| slot.matches(record)))
            .collect()
    }

    /// Rounded mean score, or `None` when fewer records than slots are
    /// given, a slot cannot be filled, or the mean is not finite.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn try_average(&self, records: &[QuestionRecord]) -> Option<i64> {
        if self.slots.is_empty() || records.len() < self.slots.len() {
            return None;
        }

        let located = self.locate(records)?;
        let sum: f64 = located.iter().map(|record| record.sentiment).sum();
        let mean = sum / self.slots.len() as f64;
        mean.is_finite().then(|| round_half_up(mean))
    }

    /// Rounded mean score, `0` whenever [`Self::try_average`] has none.
    #[must_use]
    pub fn average(&self, records: &[QuestionRecord]) -> i64 {
        self.try_average(records).unwrap_or(0)
    }
}

impl Default for CategoricalAverager {
    fn default() -> Self {
        Self::three_questions()
    }
}

/// Rounded mean sentiment of the three survey questions, or `None` when
/// they cannot all be found.
#[must_use]
pub fn try_average_three_question_sentiment(records: &[QuestionRecord]) -> Option<i64> {
    CategoricalAverager::three_questions().try_average(records)
}

/// Rounded mean sentiment of the three survey questions, `0` when they
/// cannot all be found.
#[must_use]
pub fn average_three_question_sentiment(records: &[QuestionRecord]) -> i64 {
    try_average_three_question_sentiment(records).unwrap_or(0)
}

/// Coarse classification of a sentiment score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentTier {
    /// Above 20.
    Positive,
    /// From 0 to 20.
    Neutral,
    /// Below 0.
    Negative,
}

impl SentimentTier {
    /// Classifies a score.
    #[must_use]
    pub fn classify(score: f64) -> Self {
        if score > POSITIVE_THRESHOLD {
            Self::Positive
        } else if score < 0.0 {
            Self::Negative
        } else {
            Self::Neutral
        }
    }

    /// Color of this tier.
    #[must_use]
    pub fn color(self, colors: &SentimentColors) -> &str {
        match self {
            Self::Positive => &colors.positive,
            Self::Neutral => &colors.neutral,
            Self::Negative => &colors.negative,
        }
    }
}

impl fmt::Display for SentimentTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Positive => "positive",
            Self::Neutral => "neutral",
            Self::Negative => "negative",
        };
        f.write_str(name)
    }
}

/// Headline text of an average: `+18%`, `0%`, `-12%`.
#[must_use]
pub fn format_sentiment(average: i64) -> String {
    if average > 0 {
        format!("+{average}%")
    } else {
        format!("{average}%")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use moneymind_common::test_utils::survey_fixtures::*;

    #[test]
    fn test_tagged_average() {
        let records = tagged_questions(15.0, 28.0, 10.0);
        assert_eq!(average_three_question_sentiment(&records), 18);
        assert_eq!(try_average_three_question_sentiment(&records), Some(18));
    }

    #[test]
    fn test_prompt_only_average() {
        let records = prompted_questions(22.0, 12.0, 8.0);
        assert_eq!(average_three_question_sentiment(&records), 14);
    }

    #[test]
    fn test_too_few_records() {
        let records = tagged_questions(15.0, 28.0, 10.0);
        assert_eq!(average_three_question_sentiment(&records[..2]), 0);
        assert_eq!(average_three_question_sentiment(&[]), 0);
        assert_eq!(try_average_three_question_sentiment(&records[..2]), None);
    }

    #[test]
    fn test_missing_slot_yields_zero() {
        let records = vec![
            QuestionRecord::tagged("Q(1)", 40.0),
            QuestionRecord::tagged("Q(2)", 40.0),
            QuestionRecord::tagged("Q(4)", 40.0),
        ];
        assert_eq!(try_average_three_question_sentiment(&records), None);
        assert_eq!(average_three_question_sentiment(&records), 0);
    }

    #[test]
    fn test_true_zero_is_distinguishable() {
        let records = tagged_questions(10.0, -10.0, 0.0);
        assert_eq!(try_average_three_question_sentiment(&records), Some(0));
    }

    #[test]
    fn test_first_match_wins() {
        let mut records = tagged_questions(15.0, 28.0, 10.0);
        records.push(QuestionRecord::tagged("Q(1)", 90.0));
        assert_eq!(average_three_question_sentiment(&records), 18);
    }

    #[test]
    fn test_order_does_not_matter() {
        let mut records = prompted_questions(22.0, 12.0, 8.0);
        records.reverse();
        assert_eq!(average_three_question_sentiment(&records), 14);
    }

    #[test]
    fn test_negative_halves_round_up() {
        // mean of -2, -3, -2.5 is -2.5
        let records = tagged_questions(-2.0, -3.0, -2.5);
        assert_eq!(average_three_question_sentiment(&records), -2);
    }

    #[test]
    fn test_non_finite_sentiment() {
        let records = tagged_questions(f64::NAN, 1.0, 2.0);
        assert_eq!(try_average_three_question_sentiment(&records), None);
    }

    #[test]
    fn test_custom_categories() {
        let averager = CategoricalAverager::new(vec![
            CategorySlot::new("A", "alpha"),
            CategorySlot::new("B", "beta"),
        ]);
        let records = vec![
            QuestionRecord::prompted("the beta question", 3.0),
            QuestionRecord::tagged("A", 4.0),
        ];
        assert_eq!(averager.try_average(&records), Some(4));
        assert_eq!(averager.slot_of(&records[0]), Some(1));
        assert_eq!(CategoricalAverager::new(Vec::new()).average(&records), 0);
    }

    #[test]
    fn test_tiers() {
        assert_eq!(SentimentTier::classify(21.0), SentimentTier::Positive);
        assert_eq!(SentimentTier::classify(20.0), SentimentTier::Neutral);
        assert_eq!(SentimentTier::classify(0.0), SentimentTier::Neutral);
        assert_eq!(SentimentTier::classify(-1.0), SentimentTier::Negative);

        let colors = SentimentColors::default();
        assert_eq!(SentimentTier::Positive.color(&colors), "#548235");
        assert_eq!(SentimentTier::Neutral.color(&colors), "#FFBF3F");
        assert_eq!(SentimentTier::Negative.color(&colors), "#00C49F");
    }

    #[test]
    fn test_format_sentiment() {
        assert_eq!(format_sentiment(18), "+18%");
        assert_eq!(format_sentiment(0), "0%");
        assert_eq!(format_sentiment(-12), "-12%");
    }
}
