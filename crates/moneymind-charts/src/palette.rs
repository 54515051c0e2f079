//! Color helpers for ranked bars and money-mind slices.

use moneymind_common::round_half_up;
use moneymind_config::MoneyMindColors;

/// Opacity lost per rank, in percent.
pub const RANK_OPACITY_STEP: f64 = 15.0;

/// Alpha of the bar at `index` in a ranking: fully opaque first, then 15
/// percentage points less per rank, never below transparent.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn ranked_alpha(index: usize) -> u8 {
    let opacity = (100.0 - index as f64 * RANK_OPACITY_STEP) / 100.0;
    round_half_up(opacity * 255.0).clamp(0, 255) as u8
}

/// `color` followed by a two-digit lowercase hex alpha.
#[must_use]
pub fn with_alpha(color: &str, alpha: u8) -> String {
    format!("{color}{alpha:02x}")
}

/// Fill of the bar at `index` in a ranking of `color` bars.
#[must_use]
pub fn ranked_fill(color: &str, index: usize) -> String {
    with_alpha(color, ranked_alpha(index))
}

/// Slice color of a money-mind archetype, keyed by its first word.
#[must_use]
pub fn money_mind_color<'c>(label: &str, colors: &'c MoneyMindColors) -> &'c str {
    match label.split_whitespace().next() {
        Some("Growth") => &colors.growth,
        Some("Security") => &colors.security,
        Some("Control") => &colors.control,
        _ => &colors.daily,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranked_alpha() {
        let alphas: Vec<String> = (0..8).map(|i| format!("{:02x}", ranked_alpha(i))).collect();
        assert_eq!(alphas, ["ff", "d9", "b3", "8c", "66", "40", "1a", "00"]);
        assert_eq!(ranked_alpha(usize::MAX), 0);
    }

    #[test]
    fn test_ranked_fill() {
        assert_eq!(ranked_fill("#FFBF3F", 0), "#FFBF3Fff");
        assert_eq!(ranked_fill("#D71E28", 2), "#D71E28b3");
        assert_eq!(with_alpha("#0088FE", 0xdd), "#0088FEdd");
        assert_eq!(with_alpha("#0088FE", 0x0a), "#0088FE0a");
    }

    #[test]
    fn test_money_mind_colors() {
        let colors = MoneyMindColors::default();
        assert_eq!(money_mind_color("Growth Oriented", &colors), "#FFBB28");
        assert_eq!(money_mind_color("Security Focused", &colors), "#D71E28");
        assert_eq!(money_mind_color("Control Seekers", &colors), "#548235");
        assert_eq!(money_mind_color("Day-to-Day Focused", &colors), "#999999");
        assert_eq!(money_mind_color("", &colors), "#999999");
    }
}
