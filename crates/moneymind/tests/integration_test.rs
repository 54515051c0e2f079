//! Integration tests for the moneymind crate.
//!
//! These tests load configuration files from disk and check the reports
//! built from them.

use moneymind::{AppError, MoneyMindApp, OutputFormat};
use moneymind_common::test_utils::{create_temp_dir, init_test_logging};
use moneymind_common::MoneyMindError;
use moneymind_config::{ConfigError, ConfigLoader};

const SEGMENT_CONFIG: &str = r##"
styling:
  segment_colors:
    retirees: "#336699"
dataset:
  segments:
    - key: retirees
      display_name: Retirees
      summary:
        avg_age: 68
        avg_sentiment: 30
      money_mind:
        - name: Security
          value: 60
        - name: Growth
          value: 15
      strategies:
        - name: Q(1)
          sentiment: 25
        - factor: What makes managing your money easier?
          sentiment: 35
        - name: Q(3)
          sentiment: 30
      relevant_products:
        - name: Income planning
          relevance: 70
        - name: Estate tools
          relevance: 90
"##;

#[tokio::test]
async fn test_report_from_yaml_file() {
    init_test_logging();
    let dir = create_temp_dir();
    let path = dir.path().join("moneymind.yaml");
    tokio::fs::write(&path, SEGMENT_CONFIG).await.unwrap();

    let app = MoneyMindApp::load(&ConfigLoader::new(&path)).await.unwrap();
    let report = app.report(Some("retirees")).unwrap();
    let tab = &report.tabs[0];

    assert_eq!(tab.title, "Retirees");
    let sentiment = tab.sentiment().unwrap();
    assert_eq!(sentiment.average, Some(30));
    assert!(!sentiment.is_inconsistent());

    let products = tab.chart("product_relevance").unwrap();
    assert_eq!(products.bars[0].label, "Estate tools");
    assert_eq!(products.bars[0].fill, "#336699ff");
    assert_eq!(products.bars[1].fill, "#336699d9");

    // no overview tables in the file, so the overview charts are empty
    let overview = app.report(Some("overview")).unwrap();
    assert!(overview.tabs[0].charts.iter().all(|c| c.bars.is_empty() && c.groups.is_empty()));
}

#[tokio::test]
async fn test_text_and_json_rendering() {
    let app = MoneyMindApp::default();
    let report = app.report(None).unwrap();

    let text = report.render(OutputFormat::Text).unwrap();
    for title in ["Executive Summary", "Millennials", "Gen Z", "Hispanic", "Small Business"] {
        assert!(text.contains(&format!("== {title} ==")), "missing tab {title}");
    }

    let json: serde_json::Value =
        serde_json::from_str(&report.render(OutputFormat::Json).unwrap()).unwrap();
    assert_eq!(json["tabs"].as_array().unwrap().len(), 6);
    assert!(json["generated_at"].is_string());
}

#[tokio::test]
async fn test_invalid_file_is_rejected() {
    let dir = create_temp_dir();
    let path = dir.path().join("moneymind.json");
    tokio::fs::write(&path, r#"{"styling": {"tools_color": "gold"}}"#)
        .await
        .unwrap();

    let err = MoneyMindApp::load(&ConfigLoader::new(&path))
        .await
        .err()
        .unwrap();
    assert!(matches!(err, AppError::Config(ConfigError::Validation(_))));
}

#[test]
fn test_unknown_tab() {
    let err = MoneyMindApp::default().report(Some("boomers")).unwrap_err();
    match err {
        AppError::Dashboard(MoneyMindError::Validation { message, .. }) => {
            assert!(message.contains("boomers"));
        }
        other => panic!("expected validation error, got {other}"),
    }
}
