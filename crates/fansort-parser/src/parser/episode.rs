//! Episode-number extraction strategies.

use winnow::Parser;

use crate::grammar;
use crate::model::ParsedRelease;

/// Parse a token as an episode ordinal.
///
/// Tokens keep whatever whitespace tokenization left on them, so they are
/// trimmed first. Negative ordinals are rejected: the sentinel is the only
/// negative value the pipeline ever emits.
pub(crate) fn ordinal(token: &str) -> Option<i32> {
    token.trim().parse::<i32>().ok().filter(|n| *n >= 0)
}

/// Extract the episode number from the tag- and version-stripped name.
///
/// Dash segmentation is tried before space segmentation — the dash is the
/// dominant convention separator and segments with higher precision when
/// present. With neither yielding a trailing integer, the sentinel is
/// returned.
pub(crate) fn extract(stripped: &str) -> i32 {
    from_dash_tokens(stripped)
        .or_else(|| from_space_tokens(stripped))
        .unwrap_or(ParsedRelease::EPISODE_UNKNOWN)
}

fn from_dash_tokens(stripped: &str) -> Option<i32> {
    let mut cursor = stripped;
    let tokens = grammar::dash_tokens.parse_next(&mut cursor).ok()?;
    ordinal(tokens.last()?)
}

fn from_space_tokens(stripped: &str) -> Option<i32> {
    ordinal(stripped.trim().split(' ').next_back()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinal_trims_and_rejects_negatives() {
        assert_eq!(ordinal(" 01"), Some(1));
        assert_eq!(ordinal("00"), Some(0));
        assert_eq!(ordinal("18 "), Some(18));
        assert_eq!(ordinal("-5"), None);
        assert_eq!(ordinal("SP01"), None);
        assert_eq!(ordinal(""), None);
    }

    #[test]
    fn dash_delimited_episode() {
        assert_eq!(extract("Sakurasou no Pet na Kanojo - 18"), 18);
        assert_eq!(extract("GJ-bu - 06"), 6);
    }

    #[test]
    fn space_delimited_episode() {
        assert_eq!(extract("Sankarea 00"), 0);
    }

    #[test]
    fn dash_wins_over_space() {
        // both segmentations end in an integer; the dash one is used
        assert_eq!(extract("Show 12 - 5"), 5);
    }

    #[test]
    fn no_trailing_integer_yields_the_sentinel() {
        assert_eq!(
            extract("Highschool DxD - SP01"),
            ParsedRelease::EPISODE_UNKNOWN
        );
        assert_eq!(extract("Just A Title"), ParsedRelease::EPISODE_UNKNOWN);
        assert_eq!(extract(""), ParsedRelease::EPISODE_UNKNOWN);
    }
}
