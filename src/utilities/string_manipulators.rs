/// Strips everything but ASCII letters and digits, the way shell tokens are
/// sanitized before they are used as set codes or collector numbers.
pub fn clean_token(input: &str) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
}

/// Removes line breaks and collapses every run of whitespace into a single space.
pub fn collapse_whitespace(input: &str) -> String {
    input
        .replace('\n', "")
        .split_whitespace()
        .collect::<Vec<&str>>()
        .join(" ")
}
