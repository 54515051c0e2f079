//! Runtime validation of styling and survey data.

use crate::loader::ConfigError;
use crate::schema::{DashboardConfig, StylingConfig, SurveyDataset};
use moneymind_common::MetricRecord;
use std::collections::HashSet;
use tracing::warn;

/// Configuration validator.
///
/// Collects every problem instead of stopping at the first one, so a broken
/// file can be fixed in one pass.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] listing every problem found.
    pub fn validate(config: &DashboardConfig) -> Result<(), ConfigError> {
        let mut issues = Vec::new();

        if config.logging.level.trim().is_empty() {
            issues.push("logging.level cannot be empty".to_string());
        }
        Self::check_styling(&config.styling, &mut issues);
        Self::check_dataset(&config.dataset, &mut issues);

        if issues.is_empty() {
            Ok(())
        } else {
            for issue in &issues {
                warn!(%issue, "Invalid configuration");
            }
            Err(ConfigError::Validation(issues))
        }
    }

    fn check_styling(styling: &StylingConfig, issues: &mut Vec<String>) {
        let mut colors: Vec<(String, &str)> = vec![
            ("styling.strategies_color".into(), styling.strategies_color.as_str()),
            ("styling.tools_color".into(), styling.tools_color.as_str()),
            ("styling.pain_points_color".into(), styling.pain_points_color.as_str()),
            ("styling.default_segment_color".into(), styling.default_segment_color.as_str()),
            ("styling.sentiment.positive".into(), styling.sentiment.positive.as_str()),
            ("styling.sentiment.neutral".into(), styling.sentiment.neutral.as_str()),
            ("styling.sentiment.negative".into(), styling.sentiment.negative.as_str()),
            ("styling.money_mind.growth".into(), styling.money_mind.growth.as_str()),
            ("styling.money_mind.security".into(), styling.money_mind.security.as_str()),
            ("styling.money_mind.control".into(), styling.money_mind.control.as_str()),
            ("styling.money_mind.daily".into(), styling.money_mind.daily.as_str()),
        ];
        for (key, color) in &styling.segment_colors {
            colors.push((format!("styling.segment_colors.{key}"), color.as_str()));
        }
        for series in &styling.overview_series {
            colors.push((format!("styling.overview_series.{}", series.key), series.color.as_str()));
        }

        for (field, color) in colors {
            if !is_hex_color(color) {
                issues.push(format!("{field}: '{color}' is not a #RRGGBB color"));
            }
        }

        if styling.series_alpha.len() != 2
            || !styling.series_alpha.chars().all(|c| c.is_ascii_hexdigit())
        {
            issues.push(format!(
                "styling.series_alpha: '{}' is not a two-digit hex alpha",
                styling.series_alpha
            ));
        }

        let ratio = styling.domain.padding_ratio;
        if !ratio.is_finite() || ratio < 0.0 {
            issues.push(format!(
                "styling.domain.padding_ratio: {ratio} must be a finite, non-negative number"
            ));
        }
    }

    fn check_dataset(dataset: &SurveyDataset, issues: &mut Vec<String>) {
        let overview = &dataset.overview;
        check_metrics("dataset.overview.money_mind", &overview.money_mind, issues);
        check_metrics("dataset.overview.strategies", &overview.strategies, issues);
        check_metrics("dataset.overview.tools", &overview.tools, issues);
        check_metrics("dataset.overview.pain_points", &overview.pain_points, issues);

        let mut seen = HashSet::new();
        for (i, segment) in dataset.segments.iter().enumerate() {
            let path = format!("dataset.segments[{i}]");
            if segment.key.as_str().trim().is_empty() {
                issues.push(format!("{path}.key cannot be empty"));
            } else if !seen.insert(segment.key.as_str()) {
                issues.push(format!("{path}.key '{}' is duplicated", segment.key));
            }
            if segment.display_name.trim().is_empty() {
                issues.push(format!("{path}.display_name cannot be empty"));
            }

            check_metrics(&format!("{path}.money_mind"), &segment.money_mind, issues);

            for (j, question) in segment.strategies.iter().enumerate() {
                if !question.sentiment.is_finite() {
                    issues.push(format!("{path}.strategies[{j}].sentiment must be finite"));
                }
                if question.identifier.is_none() && question.prompt_fragment.is_none() {
                    issues.push(format!(
                        "{path}.strategies[{j}] needs an identifier or a prompt_fragment"
                    ));
                }
            }

            for (j, product) in segment.relevant_products.iter().enumerate() {
                if product.label.trim().is_empty() {
                    issues.push(format!("{path}.relevant_products[{j}].label cannot be empty"));
                }
                if !product.relevance.is_finite() {
                    issues.push(format!(
                        "{path}.relevant_products[{j}].relevance must be finite"
                    ));
                }
            }
        }
    }
}

fn check_metrics(path: &str, records: &[MetricRecord], issues: &mut Vec<String>) {
    for (i, record) in records.iter().enumerate() {
        if record.label.trim().is_empty() {
            issues.push(format!("{path}[{i}].label cannot be empty"));
        }
        if !record.value.is_finite() {
            issues.push(format!("{path}[{i}].value must be finite"));
        }
        for (key, value) in &record.series {
            if !value.is_finite() {
                issues.push(format!("{path}[{i}].{key} must be finite"));
            }
        }
    }
}

/// Whether `color` is a `#RRGGBB` hex color.
#[must_use]
pub fn is_hex_color(color: &str) -> bool {
    color.len() == 7
        && color.starts_with('#')
        && color[1..].chars().all(|c| c.is_ascii_hexdigit())
}
