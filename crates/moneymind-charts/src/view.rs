//! Renderer-agnostic view models of the dashboard charts.

use crate::domain::AxisDomain;
use crate::sentiment::{format_sentiment, SentimentTier};
use moneymind_common::SegmentSummary;
use serde::Serialize;

/// Shape of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    /// Vertical bars, one group per category.
    GroupedBar,
    /// Horizontal bars, one per category.
    Bar,
    /// Pie slices.
    Pie,
}

/// One bar or slice.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    /// Category label.
    pub label: String,
    /// Plotted value.
    pub value: f64,
    /// Fill color, `#RRGGBB` optionally followed by a hex alpha.
    pub fill: String,
    /// Tooltip text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Sentiment tier of `value`, for sentiment bars.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier: Option<SentimentTier>,
    /// Percentage of the chart total, for pie slices.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub share: Option<f64>,
}

impl Bar {
    /// Creates a bar.
    pub fn new(label: impl Into<String>, value: f64, fill: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value,
            fill: fill.into(),
            description: None,
            tier: None,
            share: None,
        }
    }

    /// Sets the tooltip text.
    #[must_use]
    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    /// Sets the sentiment tier.
    #[must_use]
    pub const fn with_tier(mut self, tier: SentimentTier) -> Self {
        self.tier = Some(tier);
        self
    }

    /// Sets the share of the total.
    #[must_use]
    pub const fn with_share(mut self, share: f64) -> Self {
        self.share = Some(share);
        self
    }
}

/// Bars sharing one category of a grouped chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarGroup {
    /// Category label.
    pub label: String,
    /// One bar per series.
    pub bars: Vec<Bar>,
}

/// Headline sentiment of a segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SentimentSummary {
    /// Three-question average, if every question was found.
    pub average: Option<i64>,
    /// Headline text, e.g. `+18%`.
    pub display: String,
    /// Whether the headline reads as favorable.
    pub favorable: bool,
    /// Tier of the average.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier: Option<SentimentTier>,
    /// Average stated in the segment summary, which may disagree with the
    /// computed one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published: Option<i64>,
}

impl SentimentSummary {
    /// Summary of a computed average.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn new(average: Option<i64>, published: Option<i64>) -> Self {
        Self {
            average,
            display: average.map_or_else(|| "n/a".to_string(), format_sentiment),
            favorable: average.is_some_and(|avg| avg > 0),
            tier: average.map(|avg| SentimentTier::classify(avg as f64)),
            published,
        }
    }

    /// Whether a published figure exists and differs from the computed one.
    #[must_use]
    pub fn is_inconsistent(&self) -> bool {
        matches!((self.average, self.published), (Some(a), Some(p)) if a != p)
    }
}

/// View model of one chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartView {
    /// Builder identifier.
    pub name: String,
    /// Chart title.
    pub title: String,
    /// Chart shape.
    pub kind: ChartKind,
    /// Value axis domain.
    pub domain: AxisDomain,
    /// Bars in display order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub bars: Vec<Bar>,
    /// Bar groups in display order, for grouped charts.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<BarGroup>,
    /// Headline sentiment, for sentiment charts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<SentimentSummary>,
}

impl ChartView {
    /// Creates an empty chart view.
    pub fn new(
        name: impl Into<String>,
        title: impl Into<String>,
        kind: ChartKind,
        domain: AxisDomain,
    ) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            kind,
            domain,
            bars: Vec::new(),
            groups: Vec::new(),
            sentiment: None,
        }
    }

    /// Sets the bars.
    #[must_use]
    pub fn with_bars(mut self, bars: Vec<Bar>) -> Self {
        self.bars = bars;
        self
    }

    /// Sets the bar groups.
    #[must_use]
    pub fn with_groups(mut self, groups: Vec<BarGroup>) -> Self {
        self.groups = groups;
        self
    }

    /// Sets the headline sentiment.
    #[must_use]
    pub fn with_sentiment(mut self, sentiment: SentimentSummary) -> Self {
        self.sentiment = Some(sentiment);
        self
    }
}

/// One dashboard tab.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TabView {
    /// Tab key, `overview` or a segment key.
    pub key: String,
    /// Tab title.
    pub title: String,
    /// Headline figures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<SegmentSummary>,
    /// Charts in display order.
    pub charts: Vec<ChartView>,
    /// Free-text findings.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub insights: Vec<String>,
}

impl TabView {
    /// Chart with the given builder name.
    #[must_use]
    pub fn chart(&self, name: &str) -> Option<&ChartView> {
        self.charts.iter().find(|chart| chart.name == name)
    }

    /// Headline sentiment of this tab, if it has a sentiment chart.
    #[must_use]
    pub fn sentiment(&self) -> Option<&SentimentSummary> {
        self.charts.iter().find_map(|chart| chart.sentiment.as_ref())
    }
}

/// The whole dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    /// Executive summary tab.
    pub overview: TabView,
    /// Segment tabs in order.
    pub segments: Vec<TabView>,
}

impl DashboardView {
    /// Tab with the given key.
    #[must_use]
    pub fn tab(&self, key: &str) -> Option<&TabView> {
        std::iter::once(&self.overview)
            .chain(&self.segments)
            .find(|tab| tab.key == key)
    }

    /// All tabs, overview first.
    pub fn tabs(&self) -> impl Iterator<Item = &TabView> {
        std::iter::once(&self.overview).chain(&self.segments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentiment_summary() {
        let summary = SentimentSummary::new(Some(18), Some(18));
        assert_eq!(summary.display, "+18%");
        assert!(summary.favorable);
        assert_eq!(summary.tier, Some(SentimentTier::Neutral));
        assert!(!summary.is_inconsistent());

        let summary = SentimentSummary::new(Some(5), Some(-12));
        assert!(summary.is_inconsistent());

        let summary = SentimentSummary::new(None, None);
        assert_eq!(summary.display, "n/a");
        assert!(!summary.favorable);
        assert!(summary.tier.is_none());
    }

    #[test]
    fn test_chart_view_serialization_skips_empty_parts() {
        let view = ChartView::new("tools_ranking", "Tools", ChartKind::Bar, AxisDomain::new(0, 100))
            .with_bars(vec![Bar::new("Mobile Banking", 85.0, "#FFBF3Fff")]);

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["kind"], "bar");
        assert_eq!(json["domain"]["max"], 100);
        assert_eq!(json["bars"][0]["fill"], "#FFBF3Fff");
        assert!(json.get("groups").is_none());
        assert!(json.get("sentiment").is_none());
        assert!(json["bars"][0].get("tier").is_none());
    }
}
