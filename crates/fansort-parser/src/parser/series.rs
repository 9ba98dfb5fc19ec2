//! Series-title extraction strategies.

use winnow::Parser;

use crate::grammar;
use crate::parser::episode;

/// Extract the series title from the tag- and version-stripped name.
///
/// Mirrors the episode strategies: a trailing integer token marks where the
/// title ends. When no strategy finds one, the stripped text itself is the
/// title — partial information beats total failure.
pub(crate) fn extract(stripped: &str) -> String {
    if let Some(series) = from_dash_tokens(stripped) {
        return series;
    }

    if let Some(series) = from_space_tokens(stripped) {
        return series;
    }

    stripped.trim().to_string()
}

/// Join all tokens before the trailing integer with single dashes.
///
/// Interior dashes round-trip: each token keeps its own surrounding text,
/// so rejoining restores the title's own dashes.
fn from_dash_tokens(stripped: &str) -> Option<String> {
    let mut cursor = stripped;
    let tokens = grammar::dash_tokens.parse_next(&mut cursor).ok()?;
    let (last, title) = tokens.split_last()?;
    episode::ordinal(last)?;
    Some(title.join("-").trim().to_string())
}

fn from_space_tokens(stripped: &str) -> Option<String> {
    let trimmed = stripped.trim();
    let tokens: Vec<&str> = trimmed.split(' ').collect();
    let (last, title) = tokens.split_last()?;
    episode::ordinal(last)?;
    Some(title.join(" ").trim().to_string())
}
