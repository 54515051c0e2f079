//! # MoneyMind Charts
//!
//! Axis domains, sentiment averaging and chart view models for the MoneyMind
//! dashboard.
//!
//! The two computational helpers, [`compute_axis_domain`] and
//! [`average_three_question_sentiment`], are pure and safe to call from any
//! thread. The chart builders combine them with the configured styling into
//! renderer-agnostic [`ChartView`]s, and [`DashboardManager`] assembles those
//! into tabs.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod domain;
pub mod manager;
pub mod palette;
pub mod sentiment;
pub mod traits;
pub mod view;

// Chart builders
pub mod money_mind_distribution;
pub mod product_relevance;
pub mod question_sentiment;
pub mod ranked_metrics;
pub mod segment_shares;

pub use domain::*;
pub use manager::*;
pub use money_mind_distribution::MoneyMindDistributionChart;
pub use palette::*;
pub use product_relevance::RelevanceChart;
pub use question_sentiment::SentimentChart;
pub use ranked_metrics::{RankedMetricChart, RankedSeries};
pub use segment_shares::SegmentShareChart;
pub use sentiment::*;
pub use traits::*;
pub use view::*;
