//! Ranked metric bars: strategies, tools and pain points of the overview.

use crate::domain::{Accessor, DomainOptions, RangeComputer};
use crate::palette::ranked_fill;
use crate::traits::ChartBuilder;
use crate::view::{Bar, ChartKind, ChartView};
use moneymind_common::{MetricRecord, Result};
use moneymind_config::StylingConfig;
use std::cmp::Ordering;

/// Which overview table a ranking shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankedSeries {
    /// Money management strategies.
    Strategies,
    /// Digital tools.
    Tools,
    /// Pain points.
    PainPoints,
}

impl RankedSeries {
    /// Base color of the ranking.
    #[must_use]
    pub fn color(self, styling: &StylingConfig) -> &str {
        match self {
            Self::Strategies => &styling.strategies_color,
            Self::Tools => &styling.tools_color,
            Self::PainPoints => &styling.pain_points_color,
        }
    }
}

/// Builds a horizontal bar chart sorted by value, largest first.
#[derive(Debug, Clone)]
pub struct RankedMetricChart {
    series: RankedSeries,
}

impl RankedMetricChart {
    /// Creates the builder for one overview table.
    #[must_use]
    pub const fn new(series: RankedSeries) -> Self {
        Self { series }
    }

    /// Strategies ranking.
    #[must_use]
    pub const fn strategies() -> Self {
        Self::new(RankedSeries::Strategies)
    }

    /// Tools ranking.
    #[must_use]
    pub const fn tools() -> Self {
        Self::new(RankedSeries::Tools)
    }

    /// Pain points ranking.
    #[must_use]
    pub const fn pain_points() -> Self {
        Self::new(RankedSeries::PainPoints)
    }

    const fn title(&self) -> &'static str {
        match self.series {
            RankedSeries::Strategies => "Money Management Strategies",
            RankedSeries::Tools => "Most Requested Digital Tools",
            RankedSeries::PainPoints => "Key Pain Points",
        }
    }
}

/// Records sorted by `value`, largest first; ties keep their order.
pub(crate) fn sort_descending<T, F>(records: &[T], value: F) -> Vec<&T>
where
    F: Fn(&T) -> f64,
{
    let mut sorted: Vec<&T> = records.iter().collect();
    sorted.sort_by(|a, b| value(b).partial_cmp(&value(a)).unwrap_or(Ordering::Equal));
    sorted
}

impl ChartBuilder for RankedMetricChart {
    type Data = [MetricRecord];

    fn build(&self, records: &[MetricRecord], styling: &StylingConfig) -> Result<ChartView> {
        let sorted = sort_descending(records, |record| record.value);

        let computer = RangeComputer::new(DomainOptions::from_style(&styling.domain, true));
        let domain = computer.compute(&sorted, &Accessor::key("value"))?;

        let color = self.series.color(styling);
        let bars = sorted
            .iter()
            .enumerate()
            .map(|(rank, record)| {
                Bar::new(record.label.clone(), record.value, ranked_fill(color, rank))
                    .with_description(record.description.clone())
            })
            .collect();

        Ok(ChartView::new(self.name(), self.title(), ChartKind::Bar, domain).with_bars(bars))
    }

    fn name(&self) -> &str {
        match self.series {
            RankedSeries::Strategies => "strategies_ranking",
            RankedSeries::Tools => "tools_ranking",
            RankedSeries::PainPoints => "pain_points_ranking",
        }
    }

    fn description(&self) -> &str {
        match self.series {
            RankedSeries::Strategies => "Money management strategies by adoption",
            RankedSeries::Tools => "Digital tools by demand",
            RankedSeries::PainPoints => "Pain points by concern level",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AxisDomain;

    fn tools() -> Vec<MetricRecord> {
        vec![
            MetricRecord::new("Goal Tracking", 62.0),
            MetricRecord::new("Mobile Banking", 85.0).with_description("Anytime access"),
            MetricRecord::new("Budgeting Apps", 74.0),
        ]
    }

    #[test]
    fn test_sorted_with_fading_fill() {
        let styling = StylingConfig::default();
        let view = RankedMetricChart::tools().build(&tools(), &styling).unwrap();

        let labels: Vec<&str> = view.bars.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, ["Mobile Banking", "Budgeting Apps", "Goal Tracking"]);

        let fills: Vec<&str> = view.bars.iter().map(|b| b.fill.as_str()).collect();
        assert_eq!(fills, ["#FFBF3Fff", "#FFBF3Fd9", "#FFBF3Fb3"]);
        assert_eq!(view.bars[0].description.as_deref(), Some("Anytime access"));

        // 62..85, margin 3.45
        assert_eq!(view.domain, AxisDomain::new(0, 89));
        assert_eq!(view.name, "tools_ranking");
    }

    #[test]
    fn test_each_series_uses_its_color() {
        let styling = StylingConfig::default();
        let records = tools();

        let pain = RankedMetricChart::pain_points().build(&records, &styling).unwrap();
        assert!(pain.bars[0].fill.starts_with("#D71E28"));

        let strategies = RankedMetricChart::strategies().build(&records, &styling).unwrap();
        assert!(strategies.bars[0].fill.starts_with("#20B2AA"));
    }

    #[test]
    fn test_ties_keep_input_order() {
        let records = vec![
            MetricRecord::new("a", 10.0),
            MetricRecord::new("b", 20.0),
            MetricRecord::new("c", 10.0),
        ];
        let sorted = sort_descending(&records, |r| r.value);
        let labels: Vec<&str> = sorted.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, ["b", "a", "c"]);
    }

    #[test]
    fn test_nan_is_rejected() {
        let mut records = tools();
        records[2].value = f64::NAN;
        let err = RankedMetricChart::tools()
            .build(&records, &StylingConfig::default())
            .unwrap_err();
        assert!(err.to_string().contains("non-finite"));
    }
}
