//! Heuristic decomposition of fansub release file names.
//!
//! The strict canonical `Series (Episode).ext` grammar is attempted first;
//! every other name goes through the ordered heuristics: normalize
//! separators, read the group tag, strip tags and the version suffix, then
//! segment for the episode number and series title. At every step the first
//! strategy to succeed wins.

mod canonical;
mod episode;
mod group;
mod series;
mod strip;

use crate::model::{ParseError, ParsedRelease};

pub(crate) fn parse(name: &str) -> Result<ParsedRelease, ParseError> {
    if name.trim().is_empty() {
        return Err(ParseError::EmptyFileName);
    }

    if let Some(release) = canonical::parse(name) {
        return Ok(release);
    }

    // Underscores and spaces are interchangeable word separators in the
    // conventions this parser targets.
    let normalized = name.replace('_', " ");

    let group = group::extract(&normalized);
    let stripped = strip::remove_version_suffix(&strip::remove_tags(&normalized));
    let episode = episode::extract(&stripped);
    let series = series::extract(&stripped);
    let extension = strip::trailing_extension(name);

    Ok(ParsedRelease::new(group, series, episode, extension))
}
