//! Display formatting helpers

use chrono::{Datelike, NaiveDate, Utc};

/// `Sep 15, 2023`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Machine-readable `2023-09-15`, for `<time datetime=..>` and structured data
pub fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Cut `text` to at most `max_chars` characters, appending `...` when shortened
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max_chars).collect();
    out.push_str("...");
    out
}

/// Up to two uppercase initials: `Maria Chen` -> `MC`
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}

/// `© 2025 Sampling Labs`
pub fn copyright_notice(year: i32, owner: &str) -> String {
    format!("© {} {}", year, owner)
}

/// Copyright line for the current calendar year (UTC)
pub fn current_copyright(owner: &str) -> String {
    copyright_notice(Utc::now().year(), owner)
}

/// Thousands separators: `12847` -> `12,847`
pub fn format_number(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2023, 9, 5).unwrap();
        assert_eq!(format_date(date), "Sep 5, 2023");
        assert_eq!(iso_date(date), "2023-09-05");
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("exactly", 7), "exactly");
        assert_eq!(truncate_text("a longer sentence", 8), "a longer...");
        assert_eq!(truncate_text("héllo wörld", 4), "héll...");
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("Maria Chen"), "MC");
        assert_eq!(initials("alex"), "A");
        assert_eq!(initials("Robert James Williams"), "RJ");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn test_copyright_notice() {
        assert_eq!(copyright_notice(2025, "Sampling Labs"), "© 2025 Sampling Labs");
    }

    #[test]
    fn test_current_copyright_uses_this_year() {
        let year = Utc::now().year();
        assert_eq!(
            current_copyright("Sampling Labs"),
            format!("© {} Sampling Labs", year)
        );
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(12847), "12,847");
        assert_eq!(format_number(1234567), "1,234,567");
    }
}
