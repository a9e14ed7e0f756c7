//! Owner/repo identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::{Error, Result};

/// Separator between the owner and repository segments.
pub const SEPARATOR: char = '/';

/// Identifier shown when nothing else is configured.
pub const DEFAULT_USERNAME: &str = "ryanmcgrath";
pub const DEFAULT_REPO: &str = "twython";

/// A compound `owner/repo` identifier.
///
/// This is the whole of the Shell's view state. It is only ever replaced as a
/// single value, so an observer never sees a new `username` paired with an
/// old `repo`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identifier {
    /// Account or namespace that owns the repository.
    pub username: String,
    /// Repository name within that account.
    pub repo: String,
}

impl Identifier {
    /// Build an identifier from already separated parts.
    #[must_use]
    pub fn new(username: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            repo: repo.into(),
        }
    }

    /// Parse raw input text.
    ///
    /// The text is split on every `/`; exactly two segments are required.
    /// Segments may be empty, so `"/repo"` and `"owner/"` both parse.
    pub fn parse(raw: &str) -> Result<Self> {
        let segments: Vec<&str> = raw.split(SEPARATOR).collect();
        match segments.as_slice() {
            [username, repo] => Ok(Self::new(*username, *repo)),
            _ => Err(Error::MalformedIdentifier {
                input: raw.to_string(),
                segments: segments.len(),
            }),
        }
    }
}

impl Default for Identifier {
    fn default() -> Self {
        Self::new(DEFAULT_USERNAME, DEFAULT_REPO)
    }
}

impl FromStr for Identifier {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{SEPARATOR}{}", self.username, self.repo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_owner_and_repo() {
        let id = Identifier::parse("facebook/react").unwrap();
        assert_eq!(id.username, "facebook");
        assert_eq!(id.repo, "react");
    }

    #[test]
    fn rejects_missing_separator() {
        let err = Identifier::parse("badvalue").unwrap_err();
        assert!(matches!(
            err,
            Error::MalformedIdentifier { segments: 1, .. }
        ));
    }

    #[test]
    fn rejects_extra_separators() {
        let err = Identifier::parse("a/b/c").unwrap_err();
        assert!(matches!(
            err,
            Error::MalformedIdentifier { segments: 3, .. }
        ));
    }

    #[test]
    fn empty_text_is_one_segment() {
        let err = Identifier::parse("").unwrap_err();
        assert!(matches!(
            err,
            Error::MalformedIdentifier { segments: 1, .. }
        ));
    }

    #[test]
    fn accepts_empty_segments() {
        assert_eq!(Identifier::parse("/b").unwrap(), Identifier::new("", "b"));
        assert_eq!(Identifier::parse("a/").unwrap(), Identifier::new("a", ""));
        assert_eq!(Identifier::parse("/").unwrap(), Identifier::new("", ""));
    }

    #[test]
    fn keeps_whitespace_verbatim() {
        let id = Identifier::parse(" a / b ").unwrap();
        assert_eq!(id, Identifier::new(" a ", " b "));
    }

    #[test]
    fn default_is_twython() {
        assert_eq!(Identifier::default().to_string(), "ryanmcgrath/twython");
    }

    #[test]
    fn from_str_matches_parse() {
        let id: Identifier = "rust-lang/rust".parse().unwrap();
        assert_eq!(id, Identifier::new("rust-lang", "rust"));
    }

    #[test]
    fn error_message_names_input() {
        let err = Identifier::parse("x/y/z").unwrap_err();
        assert_eq!(
            err.to_string(),
            "malformed identifier `x/y/z`: expected owner/repo, found 3 segment(s)"
        );
    }
}
