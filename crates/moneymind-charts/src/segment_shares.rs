//! Money-mind pie of one segment.

use crate::domain::{Accessor, DomainOptions, RangeComputer};
use crate::palette::money_mind_color;
use crate::traits::ChartBuilder;
use crate::view::{Bar, ChartKind, ChartView};
use moneymind_common::Result;
use moneymind_config::{SegmentData, StylingConfig};

/// Builds a segment's money-mind pie, one slice per archetype.
///
/// Archetype shares are answered independently and need not add up to 100,
/// so each slice also carries its share of the slice total.
#[derive(Debug, Clone, Default)]
pub struct SegmentShareChart;

impl SegmentShareChart {
    /// Creates the builder.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ChartBuilder for SegmentShareChart {
    type Data = SegmentData;

    fn build(&self, segment: &SegmentData, styling: &StylingConfig) -> Result<ChartView> {
        let slices = &segment.money_mind;

        let computer = RangeComputer::new(DomainOptions::from_style(&styling.domain, false));
        let domain = computer.compute(slices, &Accessor::key("value"))?;

        let total: f64 = slices.iter().map(|slice| slice.value).sum();
        let bars = slices
            .iter()
            .map(|slice| {
                let bar = Bar::new(
                    slice.label.clone(),
                    slice.value,
                    money_mind_color(&slice.label, &styling.money_mind),
                )
                .with_description(slice.description.clone());
                if total > 0.0 {
                    bar.with_share(slice.value / total * 100.0)
                } else {
                    bar
                }
            })
            .collect();

        Ok(ChartView::new(self.name(), "Money Mind", ChartKind::Pie, domain).with_bars(bars))
    }

    fn name(&self) -> &str {
        "money_mind_shares"
    }

    fn description(&self) -> &str {
        "Money-mind archetypes of the segment"
    }
}
