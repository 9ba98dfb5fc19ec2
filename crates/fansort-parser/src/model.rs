//! Output types for parsed release file names.

/// Structured metadata recovered from a fansub release file name.
///
/// Values are built once by the parser and never mutated. Two releases
/// compare equal iff all four fields are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParsedRelease {
    /// Release-group tag, without its delimiters. Empty when none was found.
    pub group: String,
    /// Series title, trimmed of surrounding whitespace.
    pub series: String,
    /// Episode ordinal, or [`ParsedRelease::EPISODE_UNKNOWN`].
    pub episode: i32,
    /// File extension including the leading dot. Empty when none was found.
    pub extension: String,
}

impl ParsedRelease {
    /// Sentinel meaning "no episode number was recovered".
    ///
    /// Recovered ordinals are never negative, so the sentinel cannot collide
    /// with a real episode number.
    pub const EPISODE_UNKNOWN: i32 = i32::MIN;

    /// Build a release record.
    ///
    /// The series name is trimmed here, so the invariant holds no matter
    /// which extraction strategy produced it.
    pub fn new(
        group: impl Into<String>,
        series: impl Into<String>,
        episode: i32,
        extension: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            series: series.into().trim().to_string(),
            episode,
            extension: extension.into(),
        }
    }

    /// Whether an episode number was recovered.
    pub fn has_episode(&self) -> bool {
        self.episode != Self::EPISODE_UNKNOWN
    }
}

/// Error returned when a file name cannot be parsed at all.
///
/// Partial recovery (no group tag, no episode number) is not an error; this
/// is reserved for input the pipeline refuses outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The file name was empty or contained only whitespace.
    #[error("file name is empty or whitespace-only")]
    EmptyFileName,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_is_structural() {
        let a = ParsedRelease::new("gg", "Sasami-san@Ganbaranai", 5, ".mkv");
        let b = ParsedRelease::new("gg", "Sasami-san@Ganbaranai", 5, ".mkv");
        assert_eq!(a, b);

        let c = ParsedRelease::new("gg", "Sasami-san@Ganbaranai", 6, ".mkv");
        assert_ne!(a, c);
    }

    #[test]
    fn series_is_trimmed_on_construction() {
        let release = ParsedRelease::new("", "  Mayo Chiki  ", 10, ".mkv");
        assert_eq!(release.series, "Mayo Chiki");
    }

    #[test]
    fn episode_sentinel() {
        let known = ParsedRelease::new("", "Bleach", 5, ".avi");
        assert!(known.has_episode());

        let unknown =
            ParsedRelease::new("", "Bleach", ParsedRelease::EPISODE_UNKNOWN, ".avi");
        assert!(!unknown.has_episode());
    }

    #[test]
    fn error_display() {
        assert_eq!(
            ParseError::EmptyFileName.to_string(),
            "file name is empty or whitespace-only"
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip() {
        let release = ParsedRelease::new("WhyNot", "Mayo Chiki", 10, ".mkv");
        let json = serde_json::to_string(&release).unwrap();
        let back: ParsedRelease = serde_json::from_str(&json).unwrap();
        assert_eq!(release, back);
    }
}
