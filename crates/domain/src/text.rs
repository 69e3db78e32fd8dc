//! Small text helpers shared by renderers.

use std::borrow::Cow;

/// Pluralize `word` with a trailing `s` unless `count` is exactly one.
#[must_use]
pub fn pluralize(word: &str, count: usize) -> Cow<'_, str> {
    if count == 1 {
        Cow::Borrowed(word)
    } else {
        Cow::Owned(format!("{word}s"))
    }
}
