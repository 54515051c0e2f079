//! Dashboard manager for building every tab's chart views.

use crate::money_mind_distribution::MoneyMindDistributionChart;
use crate::product_relevance::RelevanceChart;
use crate::question_sentiment::SentimentChart;
use crate::ranked_metrics::RankedMetricChart;
use crate::segment_shares::SegmentShareChart;
use crate::traits::ChartBuilder;
use crate::view::{ChartView, DashboardView, TabView};
use moneymind_common::{MoneyMindError, Result};
use moneymind_config::{DashboardConfig, OverviewData, SegmentData, StylingConfig, SurveyDataset};
use tracing::{debug, info, instrument, warn};

/// Key of the executive summary tab.
pub const OVERVIEW_KEY: &str = "overview";

/// Builds dashboard views from survey data with one styling.
#[derive(Debug, Clone, Default)]
pub struct DashboardManager {
    styling: StylingConfig,
}

impl DashboardManager {
    /// Creates a manager with the given styling.
    #[must_use]
    pub const fn new(styling: StylingConfig) -> Self {
        Self { styling }
    }

    /// Creates a manager with the styling of `config`.
    #[must_use]
    pub fn from_config(config: &DashboardConfig) -> Self {
        Self::new(config.styling.clone())
    }

    /// Styling in use.
    #[must_use]
    pub const fn styling(&self) -> &StylingConfig {
        &self.styling
    }

    /// Builds the executive summary tab.
    ///
    /// # Errors
    ///
    /// Returns a chart error wrapping the first failing chart's error.
    #[instrument(skip_all)]
    pub fn build_overview(&self, overview: &OverviewData) -> Result<TabView> {
        let charts = vec![
            self.run(&MoneyMindDistributionChart::new(), overview.money_mind.as_slice())?,
            self.run(&RankedMetricChart::strategies(), overview.strategies.as_slice())?,
            self.run(&RankedMetricChart::tools(), overview.tools.as_slice())?,
            self.run(&RankedMetricChart::pain_points(), overview.pain_points.as_slice())?,
        ];

        Ok(TabView {
            key: OVERVIEW_KEY.to_string(),
            title: "Executive Summary".to_string(),
            summary: None,
            charts,
            insights: Vec::new(),
        })
    }

    /// Builds one segment tab.
    ///
    /// # Errors
    ///
    /// Returns a chart error wrapping the first failing chart's error.
    #[instrument(skip_all, fields(segment = %segment.key))]
    pub fn build_segment(&self, segment: &SegmentData) -> Result<TabView> {
        let charts = vec![
            self.run(&SegmentShareChart::new(), segment)?,
            self.run(&SentimentChart::new(), segment)?,
            self.run(&RelevanceChart::new(), segment)?,
        ];

        let tab = TabView {
            key: segment.key.to_string(),
            title: segment.display_name.clone(),
            summary: segment.summary.clone(),
            charts,
            insights: segment.key_insights.clone(),
        };

        if let Some(sentiment) = tab.sentiment() {
            if sentiment.is_inconsistent() {
                warn!(
                    computed = ?sentiment.average,
                    published = ?sentiment.published,
                    "Published average sentiment differs from the three-question average"
                );
            }
        }

        Ok(tab)
    }

    /// Builds the whole dashboard.
    ///
    /// # Errors
    ///
    /// Returns the first tab's error.
    pub fn build_dashboard(&self, dataset: &SurveyDataset) -> Result<DashboardView> {
        let overview = self.build_overview(&dataset.overview)?;
        let segments = dataset
            .segments
            .iter()
            .map(|segment| self.build_segment(segment))
            .collect::<Result<Vec<_>>>()?;

        info!(segments = segments.len(), "Dashboard built");
        Ok(DashboardView { overview, segments })
    }

    /// Builds only the tab with the given key.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an unknown key, or the tab's error.
    pub fn build_tab(&self, dataset: &SurveyDataset, key: &str) -> Result<TabView> {
        if key == OVERVIEW_KEY {
            return self.build_overview(&dataset.overview);
        }

        let segment = dataset.segment(key).ok_or_else(|| {
            MoneyMindError::validation_field(format!("unknown segment '{key}'"), "segment")
        })?;
        self.build_segment(segment)
    }

    fn run<B: ChartBuilder>(&self, builder: &B, data: &B::Data) -> Result<ChartView> {
        debug!(chart = builder.name(), "Building chart");
        let view = builder
            .build(data, &self.styling)
            .map_err(|e| MoneyMindError::chart_with_source(builder.name(), e))?;
        debug!(
            chart = builder.name(),
            domain = %view.domain,
            bars = view.bars.len(),
            groups = view.groups.len(),
            "Chart built"
        );
        Ok(view)
    }
}
