//! # fansort-parser
//!
//! A heuristic parser for fansub release file names.
//!
//! Fansub naming is folk convention rather than a specification, so this
//! crate layers a fixed, ordered set of extraction strategies over a small
//! combinator grammar: a strict fast path for canonical
//! `Series (Episode).ext` names, and dash-before-space segmentation
//! heuristics for everything else.
//!
//! ## Quick Start
//!
//! ```
//! use fansort_parser::parse;
//!
//! let release =
//!     parse("[Aho-Taku] Sakurasou no Pet na Kanojo - 18 [720p-Hi10P][1D8F695D].mkv")
//!         .expect("non-blank name");
//!
//! assert_eq!(release.group, "Aho-Taku");
//! assert_eq!(release.series, "Sakurasou no Pet na Kanojo");
//! assert_eq!(release.episode, 18);
//! assert_eq!(release.extension, ".mkv");
//! ```
//!
//! Missing pieces are partial results, not errors: a name without a group
//! tag parses with an empty `group`, and a name without a readable episode
//! number carries [`ParsedRelease::EPISODE_UNKNOWN`]. Only an empty or
//! whitespace-only name refuses to parse:
//!
//! ```
//! use fansort_parser::{parse, ParseError};
//!
//! assert_eq!(parse("   "), Err(ParseError::EmptyFileName));
//! ```

pub mod grammar;
pub mod model;

mod parser;

pub use model::{ParseError, ParsedRelease};

/// Parse a release file name into structured metadata.
///
/// The name is expected without any directory components, though none are
/// rejected. Parsing is pure and deterministic: equal inputs yield equal
/// results, no state is shared between calls, and callers may parse from
/// any number of threads concurrently.
///
/// # Errors
///
/// [`ParseError::EmptyFileName`] when `name` is empty or whitespace-only.
/// Every other input produces a release record, however partial.
pub fn parse(name: &str) -> Result<ParsedRelease, ParseError> {
    parser::parse(name)
}
