//! Report output as JSON or a plain-text table.

use crate::error::AppResult;
use chrono::{DateTime, Utc};
use moneymind_charts::{ChartView, SentimentSummary, TabView};
use moneymind_common::{format_timestamp, truncate_string};
use serde::Serialize;
use std::fmt;

/// Widest label printed in text output.
const LABEL_WIDTH: usize = 36;

/// Output format of the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON.
    Json,
    /// Plain-text tables.
    Text,
}

/// Built dashboard tabs with their build time.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// When the report was built.
    pub generated_at: DateTime<Utc>,
    /// Tabs in display order.
    pub tabs: Vec<TabView>,
}

impl Report {
    /// Renders the report in `format`.
    ///
    /// # Errors
    ///
    /// Fails if JSON serialization fails.
    pub fn render(&self, format: OutputFormat) -> AppResult<String> {
        match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
            OutputFormat::Text => Ok(self.to_string()),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "MoneyMind dashboard, generated {}", format_timestamp(self.generated_at))?;
        for tab in &self.tabs {
            writeln!(f)?;
            write_tab(f, tab)?;
        }
        Ok(())
    }
}

fn write_tab(f: &mut fmt::Formatter<'_>, tab: &TabView) -> fmt::Result {
    writeln!(f, "== {} ==", tab.title)?;

    if let Some(summary) = &tab.summary {
        if let Some(age) = summary.avg_age {
            writeln!(f, "Average age: {age}")?;
        }
        if let Some(concern) = &summary.top_concern {
            writeln!(f, "Top concern: {concern}")?;
        }
    }
    if let Some(sentiment) = tab.sentiment() {
        write_sentiment(f, sentiment)?;
    }

    for chart in &tab.charts {
        write_chart(f, chart)?;
    }

    if !tab.insights.is_empty() {
        writeln!(f, "Key insights:")?;
        for insight in &tab.insights {
            writeln!(f, "  - {insight}")?;
        }
    }
    Ok(())
}

fn write_sentiment(f: &mut fmt::Formatter<'_>, sentiment: &SentimentSummary) -> fmt::Result {
    write!(f, "Average sentiment: {}", sentiment.display)?;
    if let Some(tier) = sentiment.tier {
        write!(f, " ({tier})")?;
    }
    if sentiment.is_inconsistent() {
        if let Some(published) = sentiment.published {
            write!(f, ", published figure {published}%")?;
        }
    }
    writeln!(f)
}

fn write_chart(f: &mut fmt::Formatter<'_>, chart: &ChartView) -> fmt::Result {
    writeln!(f, "-- {} {} --", chart.title, chart.domain)?;

    for group in &chart.groups {
        let shares: Vec<String> = group
            .bars
            .iter()
            .map(|bar| format!("{} {}%", bar.label, bar.value))
            .collect();
        writeln!(
            f,
            "  {:<width$} {}",
            truncate_string(&group.label, LABEL_WIDTH),
            shares.join(", "),
            width = LABEL_WIDTH
        )?;
    }

    for bar in &chart.bars {
        write!(
            f,
            "  {:<width$} {:>6}",
            truncate_string(&bar.label, LABEL_WIDTH),
            bar.value,
            width = LABEL_WIDTH
        )?;
        if let Some(share) = bar.share {
            write!(f, " ({share:.1}%)")?;
        }
        writeln!(f, "  {}", bar.fill)?;
    }
    Ok(())
}
