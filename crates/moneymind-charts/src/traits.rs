//! Trait definitions shared by the chart builders.

use crate::view::ChartView;
use moneymind_common::{MetricRecord, ProductRecord, QuestionRecord, Result};
use moneymind_config::StylingConfig;

/// Records that expose named numeric fields to axis computations.
pub trait FieldSource {
    /// Value of the named field, or `None` if the record has no such field.
    fn field(&self, key: &str) -> Option<f64>;
}

impl FieldSource for MetricRecord {
    fn field(&self, key: &str) -> Option<f64> {
        match key {
            "value" => Some(self.value),
            other => self.series.get(other).copied(),
        }
    }
}

impl FieldSource for QuestionRecord {
    fn field(&self, key: &str) -> Option<f64> {
        (key == "sentiment").then_some(self.sentiment)
    }
}

impl FieldSource for ProductRecord {
    fn field(&self, key: &str) -> Option<f64> {
        (key == "relevance").then_some(self.relevance)
    }
}

impl<T: FieldSource + ?Sized> FieldSource for &T {
    fn field(&self, key: &str) -> Option<f64> {
        (**self).field(key)
    }
}

/// Builds the view model of one dashboard chart.
pub trait ChartBuilder: Send + Sync {
    /// The data this builder charts.
    type Data: ?Sized;

    /// Builds the chart from data and styling.
    ///
    /// # Errors
    ///
    /// Fails when the data cannot produce a valid axis domain.
    fn build(&self, data: &Self::Data, styling: &StylingConfig) -> Result<ChartView>;

    /// Stable identifier of this chart.
    fn name(&self) -> &str;

    /// Human readable description of this chart.
    fn description(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_record_fields() {
        let record = MetricRecord::new("Security Focused", 34.0).with_series("genZ", 25.0);
        assert_eq!(record.field("value"), Some(34.0));
        assert_eq!(record.field("genZ"), Some(25.0));
        assert_eq!(record.field("millennials"), None);
    }

    #[test]
    fn test_question_and_product_fields() {
        let question = QuestionRecord::tagged("Q(1)", -5.0);
        assert_eq!(question.field("sentiment"), Some(-5.0));
        assert_eq!(question.field("value"), None);

        let product = ProductRecord::new("Bilingual services", 82.0, "English and Spanish");
        assert_eq!(product.field("relevance"), Some(82.0));
        assert_eq!(product.field("sentiment"), None);
    }
}
