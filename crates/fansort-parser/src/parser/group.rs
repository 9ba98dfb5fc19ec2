//! Leading release-group tag extraction.

use winnow::Parser;

use crate::grammar;

/// Extract the release-group tag from the front of a normalized name.
///
/// A bracket group wins over a parenthesized one; a name starting with
/// neither yields the empty string. The rest of the name is not consulted.
pub(crate) fn extract(name: &str) -> String {
    let mut cursor = name;
    if let Ok(inner) = grammar::bracket_inner.parse_next(&mut cursor) {
        return inner.to_string();
    }

    let mut cursor = name;
    if let Ok(inner) = grammar::paren_inner.parse_next(&mut cursor) {
        return inner.to_string();
    }

    String::new()
}
