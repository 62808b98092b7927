//! Sentiment colors and score geometry shared by the panels and charts.

/// Series names in display order
pub const SERIES_NAMES: [&str; 3] = ["Positive", "Neutral", "Negative"];

/// Series colors in display order
pub const SERIES_COLORS: [&str; 3] = ["#4CAF50", "#2196F3", "#F44336"];

/// Fallback for unrecognized labels
pub const UNKNOWN_COLOR: &str = "#9E9E9E";

/// Badge color for a sentiment label
pub fn sentiment_color(sentiment: &str) -> &'static str {
    match sentiment {
        "positive" => SERIES_COLORS[0],
        "neutral" => SERIES_COLORS[1],
        "negative" => SERIES_COLORS[2],
        _ => UNKNOWN_COLOR,
    }
}

/// Share of each value in the total, as fractions of 1.
///
/// All zeros when the total is zero.
pub fn shares(values: [f64; 3]) -> [f64; 3] {
    let total: f64 = values.iter().sum();
    if total > 0.0 {
        values.map(|v| v / total)
    } else {
        [0.0; 3]
    }
}

/// Pie slice label such as "Positive: 70.0%"
pub fn slice_label(name: &str, share: f64) -> String {
    format!("{}: {:.1}%", name, share * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_sentiments() {
        assert_eq!(sentiment_color("positive"), "#4CAF50");
        assert_eq!(sentiment_color("neutral"), "#2196F3");
        assert_eq!(sentiment_color("negative"), "#F44336");
    }

    #[test]
    fn test_unknown_sentiment_is_gray() {
        assert_eq!(sentiment_color("mixed"), UNKNOWN_COLOR);
        assert_eq!(sentiment_color("Positive"), UNKNOWN_COLOR);
    }

    #[test]
    fn test_shares_normalize() {
        let s = shares([0.5, 0.25, 0.25]);
        assert!((s[0] - 0.5).abs() < 1e-9);

        let s = shares([0.7, 0.7, 0.6]);
        assert!((s.iter().sum::<f64>() - 1.0).abs() < 1e-9);
        assert!((s[0] - 0.35).abs() < 1e-9);
    }

    #[test]
    fn test_zero_scores_have_no_share() {
        assert_eq!(shares([0.0; 3]), [0.0; 3]);
    }

    #[test]
    fn test_slice_label() {
        assert_eq!(slice_label("Positive", 0.7), "Positive: 70.0%");
        assert_eq!(slice_label("Negative", 0.0), "Negative: 0.0%");
    }
}
