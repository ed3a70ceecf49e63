/// Case-insensitive substring test: does `haystack` contain `needle`?
#[inline]
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// True if either string contains the other, ignoring case.
/// Empty strings never match.
#[inline]
pub fn mutual_contains_ignore_case(a: &str, b: &str) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }

    let a = a.to_lowercase();
    let b = b.to_lowercase();
    a.contains(&b) || b.contains(&a)
}

/// Lowercased whitespace-delimited words
pub fn words(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_lowercase).collect()
}

/// True if the two texts share at least one whitespace-delimited word, ignoring case
pub fn shares_word(a: &str, b: &str) -> bool {
    let left = words(a);
    if left.is_empty() {
        return false;
    }
    words(b).iter().any(|w| left.contains(w))
}
