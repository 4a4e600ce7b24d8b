use std::collections::HashSet;

/// Case-folded whitespace tokens. Punctuation stays attached, so "Pizza,"
/// yields "pizza," rather than "pizza".
pub fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split_whitespace().map(str::to_lowercase)
}

/// Distinct tokens of `text`, deduplicated after case folding.
pub fn distinct_tokens(text: &str) -> HashSet<String> {
    tokenize(text).collect()
}

/// Normalize a filter keyword the same way content is tokenized.
pub fn normalize_keyword(keyword: &str) -> String {
    keyword.to_lowercase()
}
