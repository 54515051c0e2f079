//! Products ranked by relevance to a segment.

use crate::domain::{Accessor, DomainOptions, RangeComputer};
use crate::palette::ranked_fill;
use crate::ranked_metrics::sort_descending;
use crate::traits::ChartBuilder;
use crate::view::{Bar, ChartKind, ChartView};
use moneymind_common::Result;
use moneymind_config::{SegmentData, StylingConfig};

/// Builds a segment's product relevance ranking in the segment's accent
/// color.
#[derive(Debug, Clone, Default)]
pub struct RelevanceChart;

impl RelevanceChart {
    /// Creates the builder.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ChartBuilder for RelevanceChart {
    type Data = SegmentData;

    fn build(&self, segment: &SegmentData, styling: &StylingConfig) -> Result<ChartView> {
        let sorted = sort_descending(&segment.relevant_products, |product| product.relevance);

        let computer = RangeComputer::new(DomainOptions::from_style(&styling.domain, true));
        let domain = computer.compute(&sorted, &Accessor::key("relevance"))?;

        let color = styling.segment_color(&segment.key);
        let bars = sorted
            .iter()
            .enumerate()
            .map(|(rank, product)| {
                Bar::new(product.label.clone(), product.relevance, ranked_fill(color, rank))
                    .with_description(product.description.clone())
            })
            .collect();

        Ok(ChartView::new(self.name(), "Most Relevant Products", ChartKind::Bar, domain)
            .with_bars(bars))
    }

    fn name(&self) -> &str {
        "product_relevance"
    }

    fn description(&self) -> &str {
        "Products ranked by relevance to the segment"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AxisDomain;
    use moneymind_config::builtin_dataset;

    #[test]
    fn test_millennial_products() {
        let styling = StylingConfig::default();
        let millennials = builtin_dataset().segment("millennials").unwrap();
        let view = RelevanceChart::new().build(millennials, &styling).unwrap();

        assert_eq!(view.bars.len(), millennials.relevant_products.len());
        assert!(view
            .bars
            .windows(2)
            .all(|pair| pair[0].value >= pair[1].value));
        assert_eq!(view.bars[0].fill, "#0088FEff");
        assert_eq!(view.bars[1].fill, "#0088FEd9");
        assert_eq!(view.domain.min, 0);
        assert!(view.domain.contains(view.bars[0].value));
    }

    #[test]
    fn test_unknown_segment_uses_default_color() {
        let styling = StylingConfig::default();
        let mut segment = builtin_dataset().segments[0].clone();
        segment.key = "retirees".into();
        let view = RelevanceChart::new().build(&segment, &styling).unwrap();

        assert!(view.bars[0].fill.starts_with(&styling.default_segment_color));
    }

    #[test]
    fn test_no_products() {
        let mut segment = builtin_dataset().segments[0].clone();
        segment.relevant_products.clear();
        let view = RelevanceChart::new()
            .build(&segment, &StylingConfig::default())
            .unwrap();

        assert!(view.bars.is_empty());
        assert_eq!(view.domain, AxisDomain::new(0, 100));
    }
}
