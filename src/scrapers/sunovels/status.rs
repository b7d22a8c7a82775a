//! Status vocabulary of the site.

use crate::scrapers::NovelStatus;

/// Recognized status words and the canonical status each one maps to.
const STATUS_TABLE: &[(&str, NovelStatus)] = &[
    ("جديد", NovelStatus::Ongoing),
    ("مكتمل", NovelStatus::Completed),
    ("مستمر", NovelStatus::Ongoing),
];

/// Returns true if `token` is a known status word.
pub fn is_status_word(token: &str) -> bool {
    STATUS_TABLE.iter().any(|(word, _)| *word == token)
}

/// Keeps the tokens that are status words, in input order.
pub fn recognized_tokens<I, S>(tokens: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .filter(|token| is_status_word(token.as_ref()))
        .map(|token| token.as_ref().to_string())
        .collect()
}

/// Maps recognized status tokens to a canonical status.
///
/// Several tokens are joined with `,` before the lookup, so they never match
/// and fall through to `Unknown`, like an empty set.
pub fn normalize(tokens: &[String]) -> NovelStatus {
    let key = tokens.join(",");
    STATUS_TABLE
        .iter()
        .find(|(word, _)| *word == key)
        .map_or(NovelStatus::Unknown, |(_, status)| *status)
}
