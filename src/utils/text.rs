//! Text helpers for display components

/// Up to two uppercase initials from a free-text name.
///
/// Words are split on spaces; an empty or blank name yields `"?"`.
#[must_use]
pub fn get_initials(name: &str) -> String {
    let initials: String = name
        .split(' ')
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect();
    if initials.is_empty() {
        "?".to_string()
    } else {
        initials
    }
}

/// English ordinal: 1st, 2nd, 3rd, 4th, 11th, 21st, 112th
#[must_use]
pub fn ordinal(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

/// Integer with comma thousands separators: 1234567 -> "1,234,567"
#[must_use]
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

/// Fraction in `0.0..=1.0` as a percentage with one decimal: 0.6543 -> "65.4%"
#[must_use]
pub fn format_percentage(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}

/// Dollar amount with cents: 25.0 -> "$25.00"
#[must_use]
pub fn format_currency(amount: f64) -> String {
    format!("${amount:.2}")
}

/// Signed point spread: "+3.5", "-7", "0"
#[must_use]
pub fn format_spread(spread: f64) -> String {
    if spread > 0.0 {
        format!("+{spread}")
    } else {
        format!("{spread}")
    }
}

/// "1 participant", "3 participants"
#[must_use]
pub fn pluralize(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}

/// Cut `text` to at most `width` characters, marking the cut with "…"
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut cut: String = text.chars().take(width - 1).collect();
    cut.push('…');
    cut
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials() {
        assert_eq!(get_initials("John Doe"), "JD");
        assert_eq!(get_initials("Cher"), "C");
        assert_eq!(get_initials("mary jane watson"), "MJ");
        assert_eq!(get_initials(""), "?");
        assert_eq!(get_initials("   "), "?");
    }

    #[test]
    fn test_ordinals() {
        assert_eq!(ordinal(1), "1st");
        assert_eq!(ordinal(2), "2nd");
        assert_eq!(ordinal(3), "3rd");
        assert_eq!(ordinal(4), "4th");
        assert_eq!(ordinal(11), "11th");
        assert_eq!(ordinal(12), "12th");
        assert_eq!(ordinal(13), "13th");
        assert_eq!(ordinal(21), "21st");
        assert_eq!(ordinal(102), "102nd");
        assert_eq!(ordinal(111), "111th");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
        assert_eq!(group_thousands(-45210), "-45,210");
    }

    #[test]
    fn test_number_formats() {
        assert_eq!(format_percentage(0.6543), "65.4%");
        assert_eq!(format_percentage(1.0), "100.0%");
        assert_eq!(format_currency(25.0), "$25.00");
        assert_eq!(format_spread(3.5), "+3.5");
        assert_eq!(format_spread(-7.0), "-7");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Chiefs", 10), "Chiefs");
        assert_eq!(truncate("Kansas City", 6), "Kansa…");
    }
}
