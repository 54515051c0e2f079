//! Tests for the survey record types in moneymind-common.
//!
//! This test suite covers:
//! - Newtype wrappers implementing expected traits
//! - Source-document field names (`name`, `factor`) accepted as aliases
//! - Extra numeric columns collected into `MetricRecord::series`

use std::collections::HashMap;
use moneymind_common::types::*;

#[cfg(test)]
mod newtype_trait_tests {
    use super::*;

    #[test]
    fn test_segment_key_implements_expected_traits() {
        let key = SegmentKey::new("millennials");

        assert_eq!(format!("{key}"), "millennials");
        assert_eq!(key.as_str(), "millennials");
        assert_eq!(key, SegmentKey::from("millennials"));
        assert_ne!(key, SegmentKey::from("genZ"));

        let mut map = HashMap::new();
        map.insert(key.clone(), 500);
        assert_eq!(map.get(&key), Some(&500));
    }

    #[test]
    fn test_segment_key_serializes_transparently() {
        let key = SegmentKey::new("hispanics");
        let serialized = serde_json::to_string(&key).unwrap();
        assert_eq!(serialized, "\"hispanics\"");

        let deserialized: SegmentKey = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, key);
    }
}

#[cfg(test)]
mod record_serde_tests {
    use super::*;

    #[test]
    fn test_metric_record_accepts_name_alias() {
        let record: MetricRecord = serde_json::from_str(
            r#"{"name": "Budget Management", "value": 76, "description": "Creating and sticking to budgets"}"#,
        )
        .unwrap();

        assert_eq!(record.label, "Budget Management");
        assert!((record.value - 76.0).abs() < f64::EPSILON);
        assert_eq!(
            record.description.as_deref(),
            Some("Creating and sticking to budgets")
        );
        assert!(record.factor.is_none());
        assert!(record.series.is_empty());
    }

    #[test]
    fn test_metric_record_collects_extra_columns() {
        let yaml = r"
name: Security Focused
value: 34
millennials: 30
genZ: 25
hispanic: 40
";
        let record: MetricRecord = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(record.label, "Security Focused");
        assert_eq!(record.series.len(), 3);
        assert_eq!(record.series.get("genZ"), Some(&25.0));
        assert_eq!(record.series.get("hispanic"), Some(&40.0));
    }

    #[test]
    fn test_metric_record_accepts_average_column() {
        let yaml = r"
name: Growth Oriented
average: 41
millennials: 45
genZ: 38
";
        let record: MetricRecord = serde_yaml::from_str(yaml).unwrap();

        assert!((record.value - 41.0).abs() < f64::EPSILON);
        assert!(!record.series.contains_key("average"));
        assert_eq!(record.series.len(), 2);
        assert_eq!(record.series.get("millennials"), Some(&45.0));
    }

    #[test]
    fn test_metric_record_serializes_series_inline() {
        let record = MetricRecord::new("Growth Oriented", 41.0).with_series("millennials", 45.0);
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["label"], "Growth Oriented");
        assert_eq!(value["millennials"], 45.0);
        assert!(value.get("description").is_none());
    }

    #[test]
    fn test_question_record_aliases() {
        let record: QuestionRecord = serde_json::from_str(
            r#"{"name": "Q(2)", "factor": "What makes managing your money easier?", "sentiment": 28}"#,
        )
        .unwrap();

        assert_eq!(record.identifier.as_deref(), Some("Q(2)"));
        assert_eq!(
            record.prompt_fragment.as_deref(),
            Some("What makes managing your money easier?")
        );
        assert!((record.sentiment - 28.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_question_record_identifier_is_optional() {
        let record: QuestionRecord =
            serde_json::from_str(r#"{"prompt_fragment": "money mean to you", "sentiment": -4}"#)
                .unwrap();

        assert!(record.identifier.is_none());
        assert!((record.sentiment + 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_product_record_round_trip_keeps_description() {
        let record = ProductRecord::new("Micro-investing tools", 92.0, "Start with $1-5");
        let json = serde_json::to_string(&record).unwrap();
        let back: ProductRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_segment_summary_fields_are_optional() {
        let summary: SegmentSummary =
            serde_json::from_str(r#"{"avg_age": 21, "avg_sentiment": -12}"#).unwrap();

        assert_eq!(summary.avg_age, Some(21));
        assert_eq!(summary.avg_sentiment, Some(-12));
        assert!(summary.top_concern.is_none());
        assert!(summary.respondents.is_none());
    }
}
