/// Lowercase a free-text choice and drop separators so "Private Engineering",
/// "private_engineering" and "PrivateEngineering" compare equal.
pub(crate) fn choice_key(value: &str) -> String {
    value
        .replace(['\u{feff}', '\u{200b}'], "")
        .chars()
        .filter(|ch| !matches!(ch, ' ' | '_' | '-' | '.'))
        .collect::<String>()
        .to_ascii_lowercase()
}

/// Collapse whitespace and lowercase for substring search.
pub(crate) fn search_key(value: &str) -> String {
    value
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_ascii_lowercase()
}

/// Read a currency amount by keeping only its digits ("₹1,20,000 / yr" -> 120000).
pub(crate) fn digits_amount(value: &str) -> Option<u64> {
    let digits: String = value.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

/// Split a `;` separated CSV cell into trimmed, non-empty entries.
pub(crate) fn split_list(value: &str) -> Vec<String> {
    value
        .split(';')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}
