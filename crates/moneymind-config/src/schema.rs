//! Configuration schema definitions using serde.

use moneymind_common::{
    LoggingConfig, MetricRecord, ProductRecord, QuestionRecord, SegmentKey, SegmentSummary,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Root configuration: logging, chart styling and the survey dataset.
///
/// Every section is optional in a configuration file; missing sections fall
/// back to their defaults, and a missing `dataset` means the built-in survey
/// results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Logging configuration.
    pub logging: LoggingConfig,
    /// Chart styling configuration.
    pub styling: StylingConfig,
    /// Survey results to chart.
    pub dataset: SurveyDataset,
}

/// Chart styling configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StylingConfig {
    /// Base color of the overview strategies ranking.
    pub strategies_color: String,
    /// Base color of the overview tools ranking.
    pub tools_color: String,
    /// Base color of the overview pain points ranking.
    pub pain_points_color: String,
    /// Accent color for segments without an entry in `segment_colors`.
    pub default_segment_color: String,
    /// Accent color per segment key.
    pub segment_colors: BTreeMap<String, String>,
    /// Bar groups of the overview money-mind chart, in display order.
    pub overview_series: Vec<SeriesStyle>,
    /// Two-digit hex alpha appended to overview series colors.
    pub series_alpha: String,
    /// Sentiment tier colors.
    pub sentiment: SentimentColors,
    /// Money-mind slice colors.
    pub money_mind: MoneyMindColors,
    /// Axis domain settings.
    pub domain: DomainStyle,
}

impl StylingConfig {
    /// Accent color for a segment.
    #[must_use]
    pub fn segment_color(&self, key: &SegmentKey) -> &str {
        self.segment_colors
            .get(key.as_str())
            .map_or(self.default_segment_color.as_str(), String::as_str)
    }
}

/// One bar group of the overview money-mind chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesStyle {
    /// Column name in `MetricRecord::series`.
    pub key: String,
    /// Legend label.
    pub label: String,
    /// Base color.
    pub color: String,
}

/// Colors of the three sentiment tiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SentimentColors {
    /// Scores above 20.
    pub positive: String,
    /// Scores from 0 to 20.
    pub neutral: String,
    /// Scores below 0.
    pub negative: String,
}

/// Colors of the four money-mind archetypes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MoneyMindColors {
    /// "Growth" slices.
    pub growth: String,
    /// "Security" slices.
    pub security: String,
    /// "Control" slices.
    pub control: String,
    /// Every other slice.
    pub daily: String,
}

/// Axis domain settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomainStyle {
    /// Fraction of the data range added on both sides of an axis.
    pub padding_ratio: f64,
}

/// The survey results shown by the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyDataset {
    /// Cross-segment executive summary.
    #[serde(default)]
    pub overview: OverviewData,
    /// One entry per segment tab, in tab order.
    #[serde(default)]
    pub segments: Vec<SegmentData>,
}

impl SurveyDataset {
    /// Looks up a segment by key.
    #[must_use]
    pub fn segment(&self, key: &str) -> Option<&SegmentData> {
        self.segments.iter().find(|s| s.key.as_str() == key)
    }
}

/// Executive summary tables.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverviewData {
    /// Money-mind archetype shares; `value` is the cross-segment average
    /// and each segment's share is a `series` column.
    pub money_mind: Vec<MetricRecord>,
    /// Money management strategies by adoption.
    pub strategies: Vec<MetricRecord>,
    /// Most requested digital tools.
    pub tools: Vec<MetricRecord>,
    /// Most cited pain points.
    pub pain_points: Vec<MetricRecord>,
}

/// Survey results for one demographic segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentData {
    /// Stable key, e.g. `millennials`.
    pub key: SegmentKey,
    /// Tab title.
    pub display_name: String,
    /// Headline figures.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<SegmentSummary>,
    /// Money-mind archetype shares.
    #[serde(default)]
    pub money_mind: Vec<MetricRecord>,
    /// Answers to the three sentiment questions.
    #[serde(default)]
    pub strategies: Vec<QuestionRecord>,
    /// Products ranked by relevance.
    #[serde(default)]
    pub relevant_products: Vec<ProductRecord>,
    /// Free-text findings.
    #[serde(default)]
    pub key_insights: Vec<String>,
}
