//! Overview money-mind distribution: one bar group per archetype, one bar
//! per segment.

use crate::domain::{Accessor, DomainOptions, RangeComputer};
use crate::traits::ChartBuilder;
use crate::view::{Bar, BarGroup, ChartKind, ChartView};
use moneymind_common::{MetricRecord, Result};
use moneymind_config::{SeriesStyle, StylingConfig};

/// Builds the overview money-mind grouped bar chart.
#[derive(Debug, Clone, Default)]
pub struct MoneyMindDistributionChart;

impl MoneyMindDistributionChart {
    /// Creates the builder.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

/// Largest plotted share of a row, or its overall value when the row has
/// none of the plotted columns.
fn largest_share(row: &MetricRecord, series: &[SeriesStyle]) -> f64 {
    series
        .iter()
        .filter_map(|style| row.series.get(&style.key).copied())
        .reduce(f64::max)
        .unwrap_or(row.value)
}

impl ChartBuilder for MoneyMindDistributionChart {
    type Data = [MetricRecord];

    fn build(&self, rows: &[MetricRecord], styling: &StylingConfig) -> Result<ChartView> {
        let computer = RangeComputer::new(DomainOptions::from_style(&styling.domain, true));
        let domain = computer.compute(
            rows,
            &Accessor::derived(|row: &MetricRecord| largest_share(row, &styling.overview_series)),
        )?;

        let groups = rows
            .iter()
            .map(|row| BarGroup {
                label: row.label.clone(),
                bars: styling
                    .overview_series
                    .iter()
                    .filter_map(|series| {
                        row.series.get(&series.key).map(|share| {
                            Bar::new(
                                series.label.clone(),
                                *share,
                                format!("{}{}", series.color, styling.series_alpha),
                            )
                        })
                    })
                    .collect(),
            })
            .collect();

        let title = "Money Mind Distribution";
        Ok(ChartView::new(self.name(), title, ChartKind::GroupedBar, domain).with_groups(groups))
    }

    fn name(&self) -> &str {
        "money_mind_distribution"
    }

    fn description(&self) -> &str {
        "Share of each money-mind archetype per segment"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AxisDomain;
    use moneymind_config::builtin_dataset;

    #[test]
    fn test_builtin_overview() {
        let styling = StylingConfig::default();
        let rows = &builtin_dataset().overview.money_mind;
        let view = MoneyMindDistributionChart::new().build(rows, &styling).unwrap();

        // largest shares per row are 45, 50, 55 and 45
        assert_eq!(view.domain, AxisDomain::new(0, 57));
        assert_eq!(view.kind, ChartKind::GroupedBar);
        assert_eq!(view.groups.len(), 4);

        let security = &view.groups[0];
        assert_eq!(security.label, "Security Focused");
        assert_eq!(security.bars.len(), 5);
        assert_eq!(security.bars[0].label, "Millennials");
        assert_eq!(security.bars[0].value, 30.0);
        assert_eq!(security.bars[0].fill, "#0088FEdd");
    }

    #[test]
    fn test_rows_without_series_use_value() {
        let styling = StylingConfig::default();
        let rows = vec![MetricRecord::new("Security", 30.0), MetricRecord::new("Growth", 45.0)];
        let view = MoneyMindDistributionChart::new().build(&rows, &styling).unwrap();

        assert_eq!(view.domain, AxisDomain::new(0, 48));
        assert!(view.groups.iter().all(|group| group.bars.is_empty()));
    }

    #[test]
    fn test_empty_table() {
        let view = MoneyMindDistributionChart::new()
            .build(&[], &StylingConfig::default())
            .unwrap();
        assert_eq!(view.domain, AxisDomain::new(0, 100));
        assert!(view.groups.is_empty());
    }
}
