//! Test utilities and shared fixtures for the MoneyMind workspace.
//!
//! Enabled for this crate's own tests and, through the `testing` feature,
//! for the integration tests of the other crates.

use crate::types::{MetricRecord, ProductRecord, QuestionRecord};
use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize test logging once per test run.
static INIT: Once = Once::new();

/// Initialize logging for tests with a sensible default configuration.
/// This function is safe to call multiple times and will only initialize once.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        let _ = fmt().with_test_writer().with_env_filter(filter).try_init();
    });
}

/// Create a temporary directory for tests that automatically cleans up.
#[cfg(feature = "tempfile")]
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Survey record fixtures mirroring the published dashboard figures.
pub mod survey_fixtures {
    use super::*;

    /// Prompt of the first sentiment question.
    pub const Q1_PROMPT: &str = "What does money mean to you?";
    /// Prompt of the second sentiment question.
    pub const Q2_PROMPT: &str = "What makes managing your money easier?";
    /// Prompt of the third sentiment question.
    pub const Q3_PROMPT: &str = "What tricks help you make your money last?";

    /// Overview money-mind shares, `value` holding the millennial share.
    pub fn money_mind_records() -> Vec<MetricRecord> {
        vec![
            MetricRecord::new("Security Focused", 30.0),
            MetricRecord::new("Growth Oriented", 45.0),
            MetricRecord::new("Control Seekers", 35.0),
            MetricRecord::new("Day-to-Day Focused", 40.0),
        ]
    }

    /// Three tagged questions with the given sentiments.
    pub fn tagged_questions(q1: f64, q2: f64, q3: f64) -> Vec<QuestionRecord> {
        vec![
            QuestionRecord::tagged("Q(1)", q1).with_prompt(Q1_PROMPT),
            QuestionRecord::tagged("Q(2)", q2).with_prompt(Q2_PROMPT),
            QuestionRecord::tagged("Q(3)", q3).with_prompt(Q3_PROMPT),
        ]
    }

    /// Three questions identified only by prompt text.
    pub fn prompted_questions(q1: f64, q2: f64, q3: f64) -> Vec<QuestionRecord> {
        vec![
            QuestionRecord::prompted(Q1_PROMPT, q1),
            QuestionRecord::prompted(Q2_PROMPT, q2),
            QuestionRecord::prompted(Q3_PROMPT, q3),
        ]
    }

    /// Millennial product relevance rankings.
    pub fn product_records() -> Vec<ProductRecord> {
        vec![
            ProductRecord::new("Goal-based savings tools", 85.0, "Visualize progress toward goals"),
            ProductRecord::new("Automated investing", 78.0, "Low-cost entry to investing"),
            ProductRecord::new("Subscription management", 72.0, "Track recurring expenses"),
            ProductRecord::new("Debt optimization", 68.0, "Manage and reduce debts"),
        ]
    }
}

/// Property-based generators for record collections.
#[cfg(feature = "proptest")]
pub mod strategies {
    use super::*;
    use proptest::prelude::*;

    /// A non-empty list of metric records with finite values in `range`.
    pub fn metric_records(
        range: std::ops::Range<f64>,
        max_len: usize,
    ) -> impl Strategy<Value = Vec<MetricRecord>> {
        prop::collection::vec(range, 1..max_len.max(2)).prop_map(|values| {
            values
                .into_iter()
                .enumerate()
                .map(|(i, value)| MetricRecord::new(format!("metric-{i}"), value))
                .collect()
        })
    }
}
