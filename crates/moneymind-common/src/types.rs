//! Survey record types shared by the chart and configuration crates.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Identifies a survey segment such as `millennials` or `genZ`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SegmentKey(pub String);

impl SegmentKey {
    /// Creates a segment key.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Borrows the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SegmentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SegmentKey {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}

/// One labeled, scalar-valued observation used for charting.
///
/// Extra numeric columns in the source document (for instance the
/// per-segment shares of the overview money-mind table) are collected
/// into [`MetricRecord::series`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricRecord {
    /// Category name, e.g. "Mobile Banking".
    #[serde(alias = "name")]
    pub label: String,
    /// Observed metric, usually a percentage. Overview tables name it
    /// `average`.
    #[serde(alias = "average")]
    pub value: f64,
    /// Free-text explanation shown next to the chart.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Survey prompt the metric was derived from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub factor: Option<String>,
    /// Additional named numeric columns.
    #[serde(flatten)]
    pub series: BTreeMap<String, f64>,
}

impl MetricRecord {
    /// Creates a record with no metadata and no extra series.
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
            description: None,
            factor: None,
            series: BTreeMap::new(),
        }
    }

    /// Attaches a description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Adds a named numeric column.
    #[must_use]
    pub fn with_series(mut self, key: impl Into<String>, value: f64) -> Self {
        self.series.insert(key.into(), value);
        self
    }
}

/// One of the three sentiment questions asked of every segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionRecord {
    /// Question token, conventionally `Q(1)`, `Q(2)` or `Q(3)`.
    #[serde(default, alias = "name", skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    /// Prompt text, used as a fallback match key.
    #[serde(default, alias = "factor", skip_serializing_if = "Option::is_none")]
    pub prompt_fragment: Option<String>,
    /// Signed sentiment score.
    pub sentiment: f64,
    /// Free-text explanation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl QuestionRecord {
    /// Creates a question tagged with an identifier token.
    pub fn tagged(identifier: impl Into<String>, sentiment: f64) -> Self {
        Self {
            identifier: Some(identifier.into()),
            prompt_fragment: None,
            sentiment,
            description: None,
        }
    }

    /// Creates a question known only by its prompt text.
    pub fn prompted(prompt: impl Into<String>, sentiment: f64) -> Self {
        Self {
            identifier: None,
            prompt_fragment: Some(prompt.into()),
            sentiment,
            description: None,
        }
    }

    /// Sets the prompt text on an existing question.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt_fragment = Some(prompt.into());
        self
    }

    /// Attaches a description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A product ranked by how relevant a segment finds it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Product name.
    #[serde(alias = "name")]
    pub label: String,
    /// Relevance score, 0 to 100.
    pub relevance: f64,
    /// Free-text explanation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ProductRecord {
    /// Creates a product record.
    pub fn new(label: impl Into<String>, relevance: f64, description: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            relevance,
            description: Some(description.into()),
        }
    }
}

/// Headline figures for a segment tab.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentSummary {
    /// Average respondent age.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_age: Option<u32>,
    /// Average sentiment as published in the survey write-up.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_sentiment: Option<i64>,
    /// Main concern voiced by the segment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_concern: Option<String>,
    /// Number of respondents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub respondents: Option<u32>,
}
