//! Removal of tags, version suffixes, and extensions from a working name.
//!
//! Removal is textual: each matched span is deleted by searching for its
//! exact text again, first occurrence only, in the order the spans were
//! found. The segmentation heuristics downstream depend on that ordering.

use winnow::combinator::{alt, opt, repeat};
use winnow::token::take_till;
use winnow::{PResult, Parser};

use crate::grammar;

/// Trailing `.` + alphanumeric run of `name`, dot included; empty when the
/// name carries no such suffix.
pub(crate) fn trailing_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(at)
            if at + 1 < name.len() && name[at + 1..].chars().all(char::is_alphanumeric) =>
        {
            &name[at..]
        }
        _ => "",
    }
}

/// `name` without its trailing extension, if any.
pub(crate) fn strip_extension(name: &str) -> &str {
    let ext = trailing_extension(name);
    &name[..name.len() - ext.len()]
}

/// Remove the leading group tag, delimiters included, if one is present.
fn remove_group_tag(name: &str) -> String {
    let mut cursor = name;
    if let Ok(span) = grammar::bracket_span.parse_next(&mut cursor) {
        return name.replacen(span, "", 1);
    }

    let mut cursor = name;
    if let Ok(span) = grammar::paren_span.parse_next(&mut cursor) {
        return name.replacen(span, "", 1);
    }

    name.to_string()
}

/// Consecutive annotation tags after the free-text body of the name.
///
/// A still-present leading bracket tag is skipped, then the body runs to the
/// first enclosure delimiter; from there, only whitespace-separated
/// enclosures count. The scan stops at the first position that is neither.
fn annotation_tags<'s>(input: &mut &'s str) -> PResult<Vec<&'s str>> {
    let _ = opt(grammar::bracket_inner).parse_next(input)?;
    let _ = take_till(0.., ['[', '(']).parse_next(input)?;
    repeat(0.., alt((grammar::bracket_span, grammar::paren_span))).parse_next(input)
}

/// Delete every trailing annotation tag found by a single scan.
fn remove_annotation_tags(name: &str) -> String {
    let mut cursor = name;
    let Ok(tags) = annotation_tags.parse_next(&mut cursor) else {
        return name.to_string();
    };

    let mut result = name.to_string();
    for tag in tags {
        result = result.replacen(tag, "", 1);
    }
    result
}

/// Extension, leading group tag, and trailing annotation tags removed.
pub(crate) fn remove_tags(name: &str) -> String {
    let bare = strip_extension(name);
    let untagged = remove_group_tag(bare);
    remove_annotation_tags(&untagged).trim().to_string()
}

/// Remove a `v<digits>` revision marker anchored at the end of the
/// extension-stripped name.
///
/// There need not be a space between the episode number and the marker, so
/// the name is reversed and the marker looked for at the head of the
/// reversed text: digits then `v` there correspond to `v<digits>` at the
/// true end of the name, with no backtracking search.
pub(crate) fn remove_version_suffix(name: &str) -> String {
    let reversed: String = strip_extension(name).chars().rev().collect();

    let mut cursor = reversed.as_str();
    let parsed: PResult<(&str, char)> =
        (winnow::ascii::digit1, winnow::token::one_of(['v', 'V'])).parse_next(&mut cursor);
    let Ok((digits, marker)) = parsed else {
        return name.to_string();
    };

    let digits: String = digits.chars().rev().collect();
    let suffix = format!("{marker}{digits}");
    name.replacen(&suffix, "", 1)
}
