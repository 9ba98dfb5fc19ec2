//! Composable text-matching rules for release file names.
//!
//! Every rule is a plain [`winnow`] parser: a pure function from a string
//! cursor to either a matched span plus the advanced cursor, or a normal
//! `Err` value. Absence of a pattern is an expected outcome, never a panic.
//! Callers hand each rule its own copy of the cursor, so a failed match
//! leaves the caller's view of the input untouched.
//!
//! Separator characters group into runs: `--` is one dash separator, not
//! two, and the scan-until rules consume the whole run.

use winnow::ascii::{digit1, multispace0};
use winnow::combinator::{alt, delimited, repeat, terminated};
use winnow::error::ContextError;
use winnow::token::{take_till, take_while};
use winnow::{PResult, Parser};

/// One-or-more letters.
pub fn letters<'s>(input: &mut &'s str) -> PResult<&'s str> {
    take_while(1.., char::is_alphabetic).parse_next(input)
}

/// One-or-more underscores.
pub fn underscores<'s>(input: &mut &'s str) -> PResult<&'s str> {
    take_while(1.., '_').parse_next(input)
}

/// One-or-more dashes.
pub fn dashes<'s>(input: &mut &'s str) -> PResult<&'s str> {
    take_while(1.., '-').parse_next(input)
}

/// The entire non-empty remainder of the input.
pub fn line<'s>(input: &mut &'s str) -> PResult<&'s str> {
    take_while(1.., |_: char| true).parse_next(input)
}

fn padded<'s, O>(
    inner: impl Parser<&'s str, O, ContextError>,
) -> impl Parser<&'s str, O, ContextError> {
    delimited(multispace0, inner, multispace0)
}

/// Inner text of a `[...]` group, tolerating surrounding whitespace.
///
/// The inner text may be empty and is yielded verbatim, delimiters dropped.
pub fn bracket_inner<'s>(input: &mut &'s str) -> PResult<&'s str> {
    padded(delimited('[', take_till(0.., ']'), ']')).parse_next(input)
}

/// A whole `[...]` group including the brackets.
///
/// The with-delimiters variant exists so a matched tag can later be deleted
/// from the name, brackets and all.
pub fn bracket_span<'s>(input: &mut &'s str) -> PResult<&'s str> {
    padded(delimited('[', take_till(0.., ']'), ']').take()).parse_next(input)
}

/// Inner text of a `(...)` group, tolerating surrounding whitespace.
pub fn paren_inner<'s>(input: &mut &'s str) -> PResult<&'s str> {
    padded(delimited('(', take_till(0.., ')'), ')')).parse_next(input)
}

/// A whole `(...)` group including the parentheses.
pub fn paren_span<'s>(input: &mut &'s str) -> PResult<&'s str> {
    padded(delimited('(', take_till(0.., ')'), ')').take()).parse_next(input)
}

/// Everything before the next dash run; the run itself is consumed.
///
/// Fails when the input holds no dash at all.
pub fn until_dashes<'s>(input: &mut &'s str) -> PResult<&'s str> {
    terminated(take_till(0.., '-'), dashes).parse_next(input)
}

/// Everything before the next underscore run; the run itself is consumed.
pub fn until_underscores<'s>(input: &mut &'s str) -> PResult<&'s str> {
    terminated(take_till(0.., '_'), underscores).parse_next(input)
}

/// Everything before the next digit run; the digits are consumed.
pub fn until_digits<'s>(input: &mut &'s str) -> PResult<&'s str> {
    terminated(take_till(0.., |c: char| c.is_ascii_digit()), digit1).parse_next(input)
}

/// Everything before the next `[`; the bracket is consumed.
pub fn until_bracket<'s>(input: &mut &'s str) -> PResult<&'s str> {
    terminated(take_till(0.., '['), '[').parse_next(input)
}

/// Everything before the next `(`; the parenthesis is consumed.
pub fn until_paren<'s>(input: &mut &'s str) -> PResult<&'s str> {
    terminated(take_till(0.., '('), '(').parse_next(input)
}

/// Everything before the next enclosure delimiter of either kind.
pub fn until_enclosure<'s>(input: &mut &'s str) -> PResult<&'s str> {
    alt((until_bracket, until_paren)).parse_next(input)
}

/// [`until_dashes`], or the whole remainder when no dash occurs.
pub fn until_dashes_or_line<'s>(input: &mut &'s str) -> PResult<&'s str> {
    alt((until_dashes, line)).parse_next(input)
}

/// [`until_underscores`], or the whole remainder when no underscore occurs.
pub fn until_underscores_or_line<'s>(input: &mut &'s str) -> PResult<&'s str> {
    alt((until_underscores, line)).parse_next(input)
}

/// [`until_digits`], or the whole remainder when no digit occurs.
pub fn until_digits_or_line<'s>(input: &mut &'s str) -> PResult<&'s str> {
    alt((until_digits, line)).parse_next(input)
}

/// A letter run, tolerating surrounding whitespace.
pub fn word<'s>(input: &mut &'s str) -> PResult<&'s str> {
    padded(letters).parse_next(input)
}

/// Letters before an underscore run; the run itself is consumed.
///
/// The letter run may be empty, so a leading separator yields an empty
/// token rather than a failure.
pub fn word_until_underscores<'s>(input: &mut &'s str) -> PResult<&'s str> {
    terminated(take_while(0.., char::is_alphabetic), underscores).parse_next(input)
}

/// Letters before a dash run; the run itself is consumed.
pub fn word_until_dashes<'s>(input: &mut &'s str) -> PResult<&'s str> {
    terminated(take_while(0.., char::is_alphabetic), dashes).parse_next(input)
}

/// Split the whole input at each dash run.
///
/// Tokens cover the input in order with no gaps or overlaps, separators
/// excluded. An input without any dash degenerates to a single whole-input
/// token; empty input yields no tokens.
pub fn dash_tokens<'s>(input: &mut &'s str) -> PResult<Vec<&'s str>> {
    repeat(0.., until_dashes_or_line).parse_next(input)
}

/// Split the whole input at each underscore run.
pub fn underscore_tokens<'s>(input: &mut &'s str) -> PResult<Vec<&'s str>> {
    repeat(0.., until_underscores_or_line).parse_next(input)
}

/// Letter runs between dash runs, whitespace skipped.
pub fn word_dash_tokens<'s>(input: &mut &'s str) -> PResult<Vec<&'s str>> {
    repeat(0.., alt((word_until_dashes, word))).parse_next(input)
}

/// Letter runs between underscore runs, whitespace skipped.
pub fn word_underscore_tokens<'s>(input: &mut &'s str) -> PResult<Vec<&'s str>> {
    repeat(0.., alt((word_until_underscores, word))).parse_next(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_runs() {
        let mut input = "hello_world";
        assert_eq!(letters.parse_next(&mut input), Ok("hello"));
        assert_eq!(input, "_world");

        assert!(letters(&mut "").is_err());
        assert!(letters(&mut "42").is_err());
    }

    #[test]
    fn separator_runs() {
        let mut input = "__a";
        assert_eq!(underscores.parse_next(&mut input), Ok("__"));
        assert_eq!(input, "a");

        let mut input = "--a";
        assert_eq!(dashes.parse_next(&mut input), Ok("--"));
        assert_eq!(input, "a");

        assert!(underscores(&mut "a").is_err());
        assert!(dashes(&mut "a").is_err());
    }

    #[test]
    fn line_takes_everything() {
        let mut input = " hello world ";
        assert_eq!(line.parse_next(&mut input), Ok(" hello world "));
        assert_eq!(input, "");

        assert!(line(&mut "").is_err());
    }

    #[test]
    fn bracket_groups() {
        let mut input = "[Aho-Taku] rest";
        assert_eq!(bracket_inner.parse_next(&mut input), Ok("Aho-Taku"));
        assert_eq!(input, "rest");

        let mut input = "[Aho-Taku] rest";
        assert_eq!(bracket_span.parse_next(&mut input), Ok("[Aho-Taku]"));
        assert_eq!(input, "rest");

        // leading whitespace is tolerated, an empty group is fine
        assert_eq!(bracket_inner(&mut " [gg] x"), Ok("gg"));
        assert_eq!(bracket_inner(&mut "[]"), Ok(""));

        // not anchored at a bracket, or never closed
        assert!(bracket_inner(&mut "x [gg]").is_err());
        assert!(bracket_inner(&mut "[gg").is_err());
    }

    #[test]
    fn paren_groups() {
        let mut input = "(B-A)Devilman";
        assert_eq!(paren_inner.parse_next(&mut input), Ok("B-A"));
        assert_eq!(input, "Devilman");

        assert_eq!(paren_span(&mut "(B-A)Devilman"), Ok("(B-A)"));
        assert!(paren_inner(&mut "Devilman (B-A)").is_err());
    }

    #[test]
    fn scan_until_dashes() {
        let mut input = "hello-world";
        assert_eq!(until_dashes.parse_next(&mut input), Ok("hello"));
        assert_eq!(input, "world");

        // a leading separator yields an empty span
        let mut input = "-hello";
        assert_eq!(until_dashes.parse_next(&mut input), Ok(""));
        assert_eq!(input, "hello");

        // a run is one separator
        let mut input = "a--b";
        assert_eq!(until_dashes.parse_next(&mut input), Ok("a"));
        assert_eq!(input, "b");

        assert!(until_dashes(&mut "no separator").is_err());
    }

    #[test]
    fn scan_until_underscores() {
        let mut input = "hello_world";
        assert_eq!(until_underscores.parse_next(&mut input), Ok("hello"));
        assert_eq!(input, "world");

        assert!(until_underscores(&mut "hello world").is_err());
    }

    #[test]
    fn scan_until_digits() {
        let mut input = "hello4world";
        assert_eq!(until_digits.parse_next(&mut input), Ok("hello"));
        assert_eq!(input, "world");

        // the digit run is consumed with the scan
        let mut input = "hello world42";
        assert_eq!(until_digits.parse_next(&mut input), Ok("hello world"));
        assert_eq!(input, "");

        assert!(until_digits(&mut "hello").is_err());
    }

    #[test]
    fn scan_until_enclosure() {
        let mut input = "hello[world";
        assert_eq!(until_bracket.parse_next(&mut input), Ok("hello"));
        assert_eq!(input, "world");

        assert_eq!(until_paren(&mut "hello(world"), Ok("hello"));

        // the bracket rule is tried first, even past a parenthesis
        assert_eq!(until_enclosure(&mut "a(b[c"), Ok("a(b"));
        assert_eq!(until_enclosure(&mut "a(b"), Ok("a"));
        assert!(until_enclosure(&mut "abc").is_err());
    }

    #[test]
    fn scan_until_or_line_fallback() {
        assert_eq!(until_dashes_or_line(&mut "hello world"), Ok("hello world"));
        assert_eq!(until_dashes_or_line(&mut "hello-world"), Ok("hello"));
        assert_eq!(
            until_underscores_or_line(&mut "hello world"),
            Ok("hello world")
        );
        assert_eq!(until_digits_or_line(&mut "hello world "), Ok("hello world "));
    }

    #[test]
    fn word_tolerates_whitespace() {
        let mut input = " hello  k";
        assert_eq!(word.parse_next(&mut input), Ok("hello"));
        assert_eq!(input, "k");
    }

    #[test]
    fn word_until_separators() {
        let mut input = "hello_world";
        assert_eq!(word_until_underscores.parse_next(&mut input), Ok("hello"));
        assert_eq!(input, "world");

        assert_eq!(word_until_underscores(&mut "_hello"), Ok(""));
        assert!(word_until_underscores(&mut "hello world").is_err());

        assert_eq!(word_until_dashes(&mut "hello-world"), Ok("hello"));
        assert_eq!(word_until_dashes(&mut "-hello"), Ok(""));
    }

    #[test]
    fn dash_tokenization() {
        assert_eq!(dash_tokens(&mut "hello-world"), Ok(vec!["hello", "world"]));

        // tokens keep their own surrounding whitespace
        assert_eq!(
            dash_tokens(&mut " hello - world"),
            Ok(vec![" hello ", " world"])
        );

        // a leading separator yields a leading empty token
        assert_eq!(
            dash_tokens(&mut "-hello-world"),
            Ok(vec!["", "hello", "world"])
        );

        // no separator degenerates to one whole-input token
        assert_eq!(dash_tokens(&mut "hello world"), Ok(vec!["hello world"]));

        // a trailing separator is consumed without an extra token
        assert_eq!(dash_tokens(&mut "hello-"), Ok(vec!["hello"]));

        assert_eq!(dash_tokens(&mut ""), Ok(vec![]));
    }

    #[test]
    fn underscore_tokenization() {
        assert_eq!(
            underscore_tokens(&mut "hello_world"),
            Ok(vec!["hello", "world"])
        );
        assert_eq!(
            underscore_tokens(&mut " hello _ world"),
            Ok(vec![" hello ", " world"])
        );
        assert_eq!(underscore_tokens(&mut "hello world"), Ok(vec!["hello world"]));
    }

    #[test]
    fn word_tokenization() {
        assert_eq!(
            word_dash_tokens(&mut "hello-world"),
            Ok(vec!["hello", "world"])
        );

        // whitespace around separators is skipped; the separator itself
        // still yields its (empty) leading token
        assert_eq!(
            word_dash_tokens(&mut " hello - world"),
            Ok(vec!["hello", "", "world"])
        );

        assert_eq!(
            word_underscore_tokens(&mut "hello_world"),
            Ok(vec!["hello", "world"])
        );
        assert_eq!(
            word_underscore_tokens(&mut "hello world"),
            Ok(vec!["hello", "world"])
        );
    }

    #[test]
    fn failure_leaves_fresh_cursors_usable() {
        // a failed rule is a value, not a state change: re-running a
        // different rule on a fresh cursor of the same input works
        let input = "hello world";
        let mut cursor = input;
        assert!(until_dashes.parse_next(&mut cursor).is_err());

        let mut cursor = input;
        assert_eq!(line.parse_next(&mut cursor), Ok("hello world"));
    }
}
