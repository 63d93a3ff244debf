//! Text helpers shared by the template phrasebooks and the remote post-processing.
//! All lengths are counted in characters, never bytes.

use crate::models::Language;

const ELLIPSIS: &str = "...";

/// Truncates `text` to at most `max_chars` characters, ellipsis included.
///
/// Cuts at the last space when that space lies within the final 20% of the
/// allowance; otherwise hard-cuts mid-word.
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let budget = max_chars.saturating_sub(ELLIPSIS.len());
    let head: String = text.chars().take(budget).collect();

    let cut = match head.rfind(' ') {
        Some(byte_idx) if head[..byte_idx].chars().count() * 5 > budget * 4 => {
            head[..byte_idx].trim_end().to_string()
        }
        _ => head,
    };

    format!("{cut}{ELLIPSIS}")
}

/// Euro price with no decimals: `€650,000` (en) or `€650.000` (pt, es).
pub fn format_price(price: f64, language: Language) -> String {
    let separator = match language {
        Language::En => ',',
        Language::Pt | Language::Es => '.',
    };
    let price = if price > 0.0 { price } else { 0.0 };
    format!("€{}", group_thousands(&format!("{price:.0}"), separator))
}

fn group_thousands(digits: &str, separator: char) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}

/// Floor phrase for the description, or `None` for ground/basement floors.
pub fn floor_label(floor: Option<i32>, language: Language) -> Option<String> {
    let floor = floor.filter(|f| *f > 0)?;
    Some(match language {
        Language::En => format!("{}{} floor", floor, english_ordinal_suffix(floor)),
        Language::Pt => format!("{floor}º andar"),
        Language::Es => format!("planta {floor}"),
    })
}

fn english_ordinal_suffix(n: i32) -> &'static str {
    match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

/// Whole square metres, as listings usually print them.
pub fn format_area(area_sqm: f64) -> String {
    format!("{:.0}", area_sqm)
}

/// Replaces line breaks and other control characters with spaces so a fragment
/// always occupies exactly one output line.
pub fn strip_control_chars(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}

/// Keeps attribute values from terminating their enclosing double quotes.
pub fn sanitize_attribute(text: &str) -> String {
    text.replace('"', "'")
}

/// Joins phrases as "a", "a and b", "a, b and c" with a language conjunction.
pub fn join_natural(items: &[&str], conjunction: &str) -> String {
    match items {
        [] => String::new(),
        [only] => only.to_string(),
        [init @ .., last] => format!("{} {} {}", init.join(", "), conjunction, last),
    }
}
