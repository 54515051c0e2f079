//! Sentiment of a segment's three survey questions.

use crate::domain::{Accessor, DomainOptions, RangeComputer};
use crate::sentiment::{CategoricalAverager, SentimentTier};
use crate::traits::ChartBuilder;
use crate::view::{Bar, ChartKind, ChartView, SentimentSummary};
use moneymind_common::{QuestionRecord, Result};
use moneymind_config::{SegmentData, StylingConfig};

/// Builds the question sentiment chart and the segment's headline average.
#[derive(Debug, Clone, Default)]
pub struct SentimentChart {
    averager: CategoricalAverager,
}

impl SentimentChart {
    /// Creates the builder for the three survey questions.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the builder with a custom set of question categories.
    #[must_use]
    pub const fn with_averager(averager: CategoricalAverager) -> Self {
        Self { averager }
    }
}

/// Axis label of a question: its identifier, else its prompt.
fn question_label(question: &QuestionRecord) -> String {
    question
        .identifier
        .as_deref()
        .or(question.prompt_fragment.as_deref())
        .unwrap_or_default()
        .to_string()
}

impl ChartBuilder for SentimentChart {
    type Data = SegmentData;

    fn build(&self, segment: &SegmentData, styling: &StylingConfig) -> Result<ChartView> {
        let questions = &segment.strategies;

        let computer = RangeComputer::new(DomainOptions::from_style(&styling.domain, true));
        let domain = computer.compute(questions, &Accessor::key("sentiment"))?;

        let bars = questions
            .iter()
            .map(|question| {
                let tier = SentimentTier::classify(question.sentiment);
                let description = question
                    .description
                    .clone()
                    .or_else(|| question.prompt_fragment.clone());
                Bar::new(question_label(question), question.sentiment, tier.color(&styling.sentiment))
                    .with_tier(tier)
                    .with_description(description)
            })
            .collect();

        let published = segment.summary.as_ref().and_then(|s| s.avg_sentiment);
        let summary = SentimentSummary::new(self.averager.try_average(questions), published);

        let title = "Financial Management Strategies";
        Ok(ChartView::new(self.name(), title, ChartKind::Bar, domain)
            .with_bars(bars)
            .with_sentiment(summary))
    }

    fn name(&self) -> &str {
        "question_sentiment"
    }

    fn description(&self) -> &str {
        "Sentiment of the three survey questions and their average"
    }
}
