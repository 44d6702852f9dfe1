use chrono::NaiveDate;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Upper-cases the first character and leaves the rest untouched.
pub fn capitalize_category(category: &str) -> String {
    let mut chars = category.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Drops `_` digit separators (`1_000` -> `1000`). Returns `None` when an
/// underscore is not between two digits.
pub fn strip_digit_separators(input: &str) -> Option<String> {
    let chars = input.chars().collect::<Vec<char>>();
    let mut digits = String::with_capacity(input.len());
    for (index, &current) in chars.iter().enumerate() {
        if current != '_' {
            digits.push(current);
            continue;
        }
        let before = index
            .checked_sub(1)
            .and_then(|previous| chars.get(previous))
            .is_some_and(char::is_ascii_digit);
        let after = chars.get(index + 1).is_some_and(char::is_ascii_digit);
        if !(before && after) {
            return None;
        }
    }
    Some(digits)
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
