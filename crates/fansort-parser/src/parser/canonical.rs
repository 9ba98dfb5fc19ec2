//! Fast path for names already in the canonical `Series (Episode).ext` form.

use winnow::ascii::digit1;
use winnow::combinator::delimited;
use winnow::token::{take_till, take_while};
use winnow::{PResult, Parser};

use crate::model::ParsedRelease;

/// Trailing `.ext` with an alphanumeric extension, dot included.
fn extension<'s>(input: &mut &'s str) -> PResult<&'s str> {
    ('.', take_while(1.., |c: char| c.is_alphanumeric()))
        .take()
        .parse_next(input)
}

fn release(input: &mut &str) -> PResult<ParsedRelease> {
    let series = take_till(1.., '(').parse_next(input)?;
    let episode = delimited('(', digit1.parse_to::<i32>(), ')').parse_next(input)?;
    let ext = extension.parse_next(input)?;
    Ok(ParsedRelease::new("", series, episode, ext))
}

/// Attempt the strict canonical grammar against the whole input.
///
/// Succeeds only when the entire name matches `<series>(<digits>).<ext>`,
/// which lets already-normalized files bypass the heuristics entirely.
pub(crate) fn parse(name: &str) -> Option<ParsedRelease> {
    release.parse(name).ok()
}
