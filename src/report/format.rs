//! Number formatting for headline metrics

use crate::summary::SummaryStats;
use serde::Serialize;

/// A labelled, display-ready metric
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeadlineMetric {
    pub label: &'static str,
    pub value: String,
}

/// `1234567.4` -> `$1,234,567`
pub fn format_currency(amount: f64) -> String {
    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{}${}", sign, group_thousands(rounded.abs() as u64))
}

/// `230.04` -> `230.0%`
pub fn format_percent(pct: f64) -> String {
    format!("{:.1}%", pct)
}

/// `0.06148` -> `6.15% per year`
pub fn format_cagr(cagr: f64) -> String {
    format!("{:.2}% per year", cagr * 100.0)
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Start price, latest price, total growth and CAGR
pub fn headline_metrics(stats: &SummaryStats) -> Vec<HeadlineMetric> {
    vec![
        HeadlineMetric {
            label: "Start price",
            value: format_currency(stats.start_price),
        },
        HeadlineMetric {
            label: "Latest price",
            value: format_currency(stats.latest_price),
        },
        HeadlineMetric {
            label: "Total growth",
            value: format_percent(stats.total_growth_pct),
        },
        HeadlineMetric {
            label: "CAGR",
            value: format_cagr(stats.cagr),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_currency() {
        assert_eq!(format_currency(300_000.0), "$300,000");
        assert_eq!(format_currency(990_000.4), "$990,000");
        assert_eq!(format_currency(1_234_567.5), "$1,234,568");
        assert_eq!(format_currency(999.0), "$999");
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(-1500.0), "-$1,500");
    }

    #[test]
    fn test_percentages() {
        assert_eq!(format_percent(230.0), "230.0%");
        assert_eq!(format_percent(-4.26), "-4.3%");
        assert_eq!(format_cagr(0.061476), "6.15% per year");
    }

    #[test]
    fn test_headline_metrics() {
        let stats = SummaryStats {
            start_date: NaiveDate::from_ymd_opt(2004, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            start_price: 300_000.0,
            latest_price: 990_000.0,
            total_growth_pct: 230.0,
            years_elapsed: 20.0,
            cagr: 0.0615,
        };

        let metrics = headline_metrics(&stats);
        let labels: Vec<_> = metrics.iter().map(|m| m.label).collect();
        assert_eq!(labels, vec!["Start price", "Latest price", "Total growth", "CAGR"]);
        assert_eq!(metrics[1].value, "$990,000");
        assert_eq!(metrics[3].value, "6.15% per year");
    }
}
