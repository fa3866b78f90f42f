//! Report formatting utilities for terminal output
//!
//! Provides formatting helpers shared by the text reports and the TUI.

use crate::models::{Money, Trend, TrendDirection};

/// Format a percentage with one decimal place, e.g. "28.7%"
pub fn format_percentage(pct: f64) -> String {
    format!("{:.1}%", pct)
}

/// Format a variance with an explicit sign, e.g. "+9.6%"
pub fn format_trend(trend: &Trend) -> String {
    match trend.direction {
        TrendDirection::Up => format!("+{:.1}%", trend.magnitude()),
        TrendDirection::Down => format!("-{:.1}%", trend.magnitude()),
        TrendDirection::Flat => "0.0%".to_string(),
    }
}

/// Arrow glyph for a trend direction
pub fn trend_arrow(direction: TrendDirection) -> &'static str {
    match direction {
        TrendDirection::Up => "▲",
        TrendDirection::Down => "▼",
        TrendDirection::Flat => "■",
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Short thousands label for chart bars, e.g. "15k" or "-8k"
pub fn format_compact(amount: Money) -> String {
    let euros = amount.euros();
    if euros.abs() >= 1_000 {
        format!("{}k", euros / 1_000)
    } else {
        euros.to_string()
    }
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Format a double separator line
pub fn double_separator(width: usize) -> String {
    "═".repeat(width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(28.676), "28.7%");
        assert_eq!(format_percentage(47.4), "47.4%");
        assert_eq!(format_percentage(5.0), "5.0%");
    }

    #[test]
    fn test_format_trend() {
        assert_eq!(format_trend(&Trend::from_percentage(9.6)), "+9.6%");
        assert_eq!(format_trend(&Trend::from_percentage(-3.24)), "-3.2%");
        assert_eq!(format_trend(&Trend::from_percentage(0.01)), "0.0%");
    }

    #[test]
    fn test_format_bar() {
        let bar = format_bar(50.0, 100.0, 10);
        assert_eq!(bar.chars().filter(|c| *c == '█').count(), 5);
        assert_eq!(format_bar(-1.0, 100.0, 4), "    ");
    }

    #[test]
    fn test_format_compact() {
        assert_eq!(format_compact(Money::from_euros(15_000)), "15k");
        assert_eq!(format_compact(Money::from_euros(-32_500)), "-32k");
        assert_eq!(format_compact(Money::from_euros(750)), "750");
    }
}
