use jiff::Span;
use jiff::civil::Date;

/// Format a currency value in compact form (e.g., $2.1M, $450K, $50)
pub fn format_compact_currency(value: f64) -> String {
    let abs_value = value.abs();
    let sign = if value < 0.0 { "-" } else { "" };

    if abs_value >= 1_000_000.0 {
        format!("{sign}${:.1}M", abs_value / 1_000_000.0)
    } else if abs_value >= 1_000.0 {
        format!("{sign}${:.0}K", abs_value / 1_000.0)
    } else {
        format!("{sign}${abs_value:.0}")
    }
}

pub fn format_percentage(value: f64) -> String {
    format!("{:.2}%", value * 100.0)
}

/// A month count as years and months, e.g. `1y 2m`
pub fn format_months(months: u32) -> String {
    match (months / 12, months % 12) {
        (0, m) => format!("{m}m"),
        (y, 0) => format!("{y}y"),
        (y, m) => format!("{y}y {m}m"),
    }
}

/// Label for a simulation step: the calendar month when a start date is
/// known, otherwise the elapsed time
pub fn format_step(step: u32, start: Option<Date>) -> String {
    start
        .and_then(|date| date.checked_add(Span::new().months(i64::from(step))).ok())
        .map(|date| date.strftime("%b %Y").to_string())
        .unwrap_or_else(|| format_months(step))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_compact_currency() {
        assert_eq!(format_compact_currency(2_100_000.0), "$2.1M");
        assert_eq!(format_compact_currency(450_000.0), "$450K");
        assert_eq!(format_compact_currency(50.0), "$50");
        assert_eq!(format_compact_currency(-2_400.0), "-$2K");
        assert_eq!(format_compact_currency(0.0), "$0");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(0.05), "5.00%");
    }

    #[test]
    fn test_format_months() {
        assert_eq!(format_months(0), "0m");
        assert_eq!(format_months(5), "5m");
        assert_eq!(format_months(12), "1y");
        assert_eq!(format_months(14), "1y 2m");
    }

    #[test]
    fn test_format_step_with_start_date() {
        let start = jiff::civil::date(2025, 11, 1);
        assert_eq!(format_step(0, Some(start)), "Nov 2025");
        assert_eq!(format_step(3, Some(start)), "Feb 2026");
        assert_eq!(format_step(14, None), "1y 2m");
    }
}
