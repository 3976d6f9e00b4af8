use super::*;

/// Counts the space-separated words of `text` after folding line breaks and
/// tabs into spaces and collapsing runs of spaces.
///
/// Splitting is literal: an empty string counts as one word, and a leading or
/// trailing space contributes an empty segment of its own.
#[must_use]
pub fn word_count(text: &str) -> usize {
  let spaced = re::LINE_BREAKS_AND_TABS.replace_all(text, " ");
  re::SPACE_RUNS.replace_all(&spaced, " ").split(' ').count()
}
