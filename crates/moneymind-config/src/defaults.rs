//! Default styling values and the built-in survey dataset.

use crate::schema::*;
use moneymind_common::{MetricRecord, ProductRecord, QuestionRecord, SegmentKey, SegmentSummary};
use once_cell::sync::Lazy;
use std::collections::BTreeMap;

/// Fraction of the data range added on both sides of an axis.
pub const DEFAULT_PADDING_RATIO: f64 = 0.15;

const Q1_PROMPT: &str = "What does money mean to you?";
const Q2_PROMPT: &str = "What makes managing your money easier?";
const Q3_PROMPT: &str = "What tricks help you make your money last?";

static BUILTIN_DATASET: Lazy<SurveyDataset> = Lazy::new(build_builtin_dataset);

/// The published survey results, shared by every caller.
pub fn builtin_dataset() -> &'static SurveyDataset {
    &BUILTIN_DATASET
}

impl Default for SurveyDataset {
    fn default() -> Self {
        builtin_dataset().clone()
    }
}

impl Default for StylingConfig {
    fn default() -> Self {
        let segment_colors = [
            ("millennials", "#0088FE"),
            ("genZ", "#00C49F"),
            ("hispanics", "#FFBB28"),
            ("smallbusiness", "#FF8042"),
            ("emergingaffluent", "#8884d8"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect::<BTreeMap<_, _>>();

        let overview_series = [
            ("millennials", "Millennials", "#0088FE"),
            ("genZ", "Gen Z", "#00C49F"),
            ("hispanic", "Hispanic", "#FFBB28"),
            ("smallBusiness", "Small Business", "#FF8042"),
            ("emergingAffluent", "Emerging Affluent", "#8884d8"),
        ]
        .into_iter()
        .map(|(key, label, color)| SeriesStyle {
            key: key.to_string(),
            label: label.to_string(),
            color: color.to_string(),
        })
        .collect();

        Self {
            strategies_color: "#20B2AA".to_string(),
            tools_color: "#FFBF3F".to_string(),
            pain_points_color: "#D71E28".to_string(),
            default_segment_color: "#0088FE".to_string(),
            segment_colors,
            overview_series,
            series_alpha: "dd".to_string(),
            sentiment: SentimentColors::default(),
            money_mind: MoneyMindColors::default(),
            domain: DomainStyle::default(),
        }
    }
}

impl Default for SentimentColors {
    fn default() -> Self {
        Self {
            positive: "#548235".to_string(),
            neutral: "#FFBF3F".to_string(),
            negative: "#00C49F".to_string(),
        }
    }
}

impl Default for MoneyMindColors {
    fn default() -> Self {
        Self {
            growth: "#FFBB28".to_string(),
            security: "#D71E28".to_string(),
            control: "#548235".to_string(),
            daily: "#999999".to_string(),
        }
    }
}

impl Default for DomainStyle {
    fn default() -> Self {
        Self {
            padding_ratio: DEFAULT_PADDING_RATIO,
        }
    }
}

fn metric(label: &str, value: f64, description: &str) -> MetricRecord {
    let record = MetricRecord::new(label, value);
    if description.is_empty() {
        record
    } else {
        record.with_description(description)
    }
}

fn money_mind_row(label: &str, shares: [f64; 5], average: f64) -> MetricRecord {
    ["millennials", "genZ", "hispanic", "smallBusiness", "emergingAffluent"]
        .into_iter()
        .zip(shares)
        .fold(MetricRecord::new(label, average), |row, (key, share)| {
            row.with_series(key, share)
        })
}

fn archetypes(growth: f64, security: f64, control: f64, daily: f64) -> Vec<MetricRecord> {
    vec![
        MetricRecord::new("Growth", growth),
        MetricRecord::new("Security", security),
        MetricRecord::new("Control", control),
        MetricRecord::new("Daily Focus", daily),
    ]
}

/// Questions carrying both the token and the prompt.
fn questions(sentiments: [f64; 3], descriptions: [&str; 3]) -> Vec<QuestionRecord> {
    [("Q(1)", Q1_PROMPT), ("Q(2)", Q2_PROMPT), ("Q(3)", Q3_PROMPT)]
        .into_iter()
        .zip(sentiments.into_iter().zip(descriptions))
        .map(|((token, prompt), (sentiment, description))| {
            QuestionRecord::tagged(token, sentiment)
                .with_prompt(prompt)
                .with_description(description)
        })
        .collect()
}

/// Questions carrying only the token; the prompt lives in the description.
fn bare_questions(sentiments: [f64; 3]) -> Vec<QuestionRecord> {
    [("Q(1)", Q1_PROMPT), ("Q(2)", Q2_PROMPT), ("Q(3)", Q3_PROMPT)]
        .into_iter()
        .zip(sentiments)
        .map(|((token, prompt), sentiment)| {
            QuestionRecord::tagged(token, sentiment).with_description(prompt)
        })
        .collect()
}

fn insights(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|s| (*s).to_string()).collect()
}

#[allow(clippy::too_many_lines)]
fn build_builtin_dataset() -> SurveyDataset {
    let overview = OverviewData {
        money_mind: vec![
            money_mind_row("Security Focused", [30.0, 25.0, 40.0, 45.0, 28.0], 34.0),
            money_mind_row("Growth Oriented", [45.0, 50.0, 30.0, 40.0, 40.0], 41.0),
            money_mind_row("Control Seekers", [35.0, 30.0, 45.0, 55.0, 22.0], 37.0),
            money_mind_row("Day-to-Day Focused", [40.0, 45.0, 35.0, 30.0, 10.0], 32.0),
        ],
        strategies: vec![
            metric("Budget Management", 76.0, "Creating and sticking to budgets"),
            metric("Expense Tracking", 68.0, "Actively monitoring where money goes"),
            metric("Goal Setting", 52.0, "Setting specific financial targets"),
            metric("Automated Savings", 47.0, "Using automation to save consistently"),
            metric("Subscription Management", 34.0, "Regularly auditing subscriptions"),
        ],
        tools: vec![
            metric("Mobile Banking", 85.0, ""),
            metric("Goal Tracking", 62.0, ""),
            metric("Subscription Management", 58.0, ""),
            metric("Investment Tools", 45.0, ""),
            metric("Financial Education", 42.0, ""),
        ],
        pain_points: vec![
            metric("Invisible Spending", 72.0, ""),
            metric("Investing Complexity", 68.0, ""),
            metric("Goal Tracking", 54.0, ""),
            metric("Card Security", 48.0, ""),
            metric("Financial Guidance", 62.0, ""),
        ],
    };

    let millennials = SegmentData {
        key: SegmentKey::new("millennials"),
        display_name: "Millennials".to_string(),
        summary: Some(SegmentSummary {
            avg_age: Some(32),
            avg_sentiment: Some(18),
            top_concern: Some("Managing student debt while saving".to_string()),
            respondents: Some(500),
        }),
        money_mind: vec![
            MetricRecord::new("Security", 30.0),
            MetricRecord::new("Growth", 45.0),
            MetricRecord::new("Control", 35.0),
            MetricRecord::new("Daily Focus", 40.0),
        ],
        strategies: questions(
            [15.0, 28.0, 10.0],
            [
                "Money is seen as a tool for experiences rather than possessions",
                "Digital tools and automation are preferred management methods",
                "Struggle to balance current lifestyle with future saving goals",
            ],
        ),
        relevant_products: vec![
            ProductRecord::new("Goal-based savings tools", 85.0, "Tools that visualize progress toward specific goals"),
            ProductRecord::new("Automated investing", 78.0, "Simple, low-cost entry to investing markets"),
            ProductRecord::new("Subscription management", 72.0, "Tools to track and manage recurring expenses"),
            ProductRecord::new("Debt optimization", 68.0, "Strategies to manage and reduce various debts"),
        ],
        key_insights: insights(&[
            "Millennials show strong interest in goal-tracking tools that help balance current enjoyment with future security",
            "They value transparency in banking and want to understand fee structures clearly",
            "Digital-first approach is essential, with 92% preferring to handle finances via mobile app",
            "Investment tools with educational components address their desire to grow wealth while learning",
        ]),
    };

    let gen_z = SegmentData {
        key: SegmentKey::new("genZ"),
        display_name: "Gen Z".to_string(),
        summary: Some(SegmentSummary {
            avg_age: Some(21),
            avg_sentiment: Some(-12),
            top_concern: Some("Building credit history and saving".to_string()),
            respondents: Some(392),
        }),
        money_mind: vec![
            MetricRecord::new("Growth", 35.0),
            MetricRecord::new("Security", 20.0),
            MetricRecord::new("Control", 20.0),
            MetricRecord::new("Daily Focus", 25.0),
        ],
        strategies: questions(
            [12.0, 8.0, -5.0],
            [
                "Money represents freedom and future options",
                "Highly digital approach, often using multiple apps",
                "Micro-saving and occasional side hustles",
            ],
        ),
        relevant_products: vec![
            ProductRecord::new("Micro-investing tools", 92.0, "Allows Gen Z to start building investment portfolios with as little as $1-5, reducing the psychological barrier to investing"),
            ProductRecord::new("Credit building products", 85.0, "Addresses the \"credit catch-22\" where they need credit history to get credit but can't build history without credit"),
            ProductRecord::new("Financial education", 76.0, "Fills critical knowledge gaps in a generation that received minimal formal financial education"),
            ProductRecord::new("Digital wallet integration", 70.0, "Connects with their preference for cashless, contactless payments and peer-to-peer money transfers"),
        ],
        key_insights: insights(&[
            "Gen Z shows higher anxiety about financial futures than any other generation, with 68% expressing concern about long-term economic stability",
            "They're highly receptive to gamified elements in financial tools that provide learning through experience rather than traditional education",
            "Authenticity is crucial - transparent fee structures and ethical banking practices matter more to Gen Z than previous generations",
            "Strong preference for digital tools with instant feedback and visual progress indicators, with 94% preferring mobile-first solutions",
            "Social influence plays a significant role in financial decisions, with 72% consulting online communities before making major financial choices",
            "They show the highest interest in cryptocurrency and alternative investments, with 58% expressing interest in including these in their portfolios",
            "Short-term video content is their preferred financial education format, with 3-5 minute tutorials being most effective for engagement",
        ]),
    };

    let hispanics = SegmentData {
        key: SegmentKey::new("hispanics"),
        display_name: "Hispanic".to_string(),
        summary: Some(SegmentSummary {
            avg_age: Some(36),
            avg_sentiment: Some(15),
            top_concern: Some("Family financial coordination".to_string()),
            respondents: Some(110),
        }),
        money_mind: archetypes(35.0, 45.0, 20.0, 25.0),
        strategies: questions(
            [22.0, 12.0, 8.0],
            [
                "Security and family stability",
                "Digital tools and family coordination",
                "Family budgeting and shared resources",
            ],
        ),
        relevant_products: vec![
            ProductRecord::new("Family banking tools", 88.0, "Tools that facilitate shared financial management and coordination between family members"),
            ProductRecord::new("Bilingual services", 82.0, "Financial services and support available in both English and Spanish"),
            ProductRecord::new("Educational resources", 75.0, "Resources to help families learn about financial management together"),
            ProductRecord::new("Multi-account management", 70.0, "Solutions for managing multiple accounts across family members"),
        ],
        key_insights: insights(&[
            "Hispanic customers often balance individual needs with extended family financial responsibilities",
            "Strong desire for face-to-face relationships with bankers who understand cultural context",
            "Multi-generational household considerations influence financial decisions",
            "Prefer banking tools that facilitate family financial coordination and education",
        ]),
    };

    let small_business = SegmentData {
        key: SegmentKey::new("smallbusiness"),
        display_name: "Small Business".to_string(),
        summary: None,
        money_mind: archetypes(24.0, 26.0, 32.0, 18.0),
        strategies: bare_questions([15.0, 18.0, 25.0]),
        relevant_products: vec![
            ProductRecord::new("Cash flow management", 85.0, "Streamlined tools for tracking and forecasting business cash flow"),
            ProductRecord::new("Business credit building", 75.0, "Products that help establish and grow business credit separate from personal"),
            ProductRecord::new("Payment processing", 65.0, "Efficient transaction processing with lower fees and faster settlement"),
            ProductRecord::new("Business planning tools", 60.0, "Digital resources for financial planning and business growth"),
        ],
        key_insights: insights(&[
            "Small business owners show the highest desire for control in their financial picture",
            "Strong need for tools that distinguish between personal and business finances",
            "Value specialized expertise that understands their specific industry challenges",
            "Appreciate both digital efficiency and relationship-based service options",
        ]),
    };

    let emerging_affluent = SegmentData {
        key: SegmentKey::new("emergingaffluent"),
        display_name: "Emerging Affluent".to_string(),
        summary: None,
        money_mind: archetypes(40.0, 28.0, 22.0, 10.0),
        strategies: bare_questions([22.0, 28.0, 18.0]),
        relevant_products: vec![
            ProductRecord::new("Investment products", 92.0, "Accessible investment platforms with educational resources"),
            ProductRecord::new("Wealth management", 85.0, "Entry-level advisory services with growth-focused strategies"),
            ProductRecord::new("Premium digital banking", 78.0, "Enhanced digital tools with financial insights and budgeting"),
            ProductRecord::new("Rewards credit cards", 70.0, "Cards optimized for lifestyle spending with investment features"),
        ],
        key_insights: insights(&[
            "Strong focus on wealth building while balancing current lifestyle needs",
            "Seeking accessible entry points to wealth management without high minimums",
            "Digital-first approach with preference for self-directed tools with expert guidance",
            "Value status and lifestyle benefits that recognize their growing affluence",
        ]),
    };

    SurveyDataset {
        overview,
        segments: vec![millennials, gen_z, hispanics, small_business, emerging_affluent],
    }
}
