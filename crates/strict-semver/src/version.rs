//! Version value type, rendering and successors

use lazy_static::lazy_static;
use regex::Regex;
use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::comparator;
use crate::parser::{self, ParseError};

lazy_static! {
    static ref IDENTIFIER_RE: Regex = Regex::new(r"^[0-9A-Za-z-]+$").unwrap();
}

/// A single pre-release or build element.
///
/// The text is kept verbatim. Whether it compares numerically or lexically is
/// decided when comparing, see [`Identifier::is_numeric`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier(String);

impl Identifier {
    /// Create an identifier, checking it is non-empty and drawn from `[0-9A-Za-z-]`
    pub fn new(text: impl Into<String>) -> Result<Self, ParseError> {
        let text = text.into();
        if !IDENTIFIER_RE.is_match(&text) {
            return Err(ParseError::InvalidIdentifier(text));
        }
        Ok(Identifier(text))
    }

    /// Lexer output is already known to match the alphabet.
    pub(crate) fn from_lexed(text: &str) -> Self {
        Identifier(text.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when every character is an ASCII digit
    pub fn is_numeric(&self) -> bool {
        !self.0.is_empty() && self.0.bytes().all(|b| b.is_ascii_digit())
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialOrd for Identifier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Identifier {
    fn cmp(&self, other: &Self) -> Ordering {
        comparator::compare_identifiers(self, other)
    }
}

impl FromStr for Identifier {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Identifier::new(s)
    }
}

/// A Semantic Version: `major.minor.patch[-pre.release][+build.metadata]`
///
/// Ordering follows version precedence; build metadata only breaks ties
/// between versions that are otherwise equal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub pre_release: Vec<Identifier>,
    pub build: Vec<Identifier>,
}

impl Version {
    /// Create a normal release version without pre-release or build metadata
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
            pre_release: Vec::new(),
            build: Vec::new(),
        }
    }

    /// Parse a version string
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        parser::parse(input)
    }

    /// Return a copy carrying the given pre-release identifiers.
    ///
    /// All-digit identifiers must not have leading zeroes.
    pub fn with_pre_release<I, S>(&self, identifiers: I) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let pre_release = identifiers
            .into_iter()
            .map(|s| {
                let id = Identifier::new(s)?;
                if id.is_numeric() && id.as_str().len() > 1 && id.as_str().starts_with('0') {
                    return Err(ParseError::LeadingZeroIdentifier(id.0));
                }
                Ok(id)
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Version {
            pre_release,
            ..self.clone()
        })
    }

    /// Return a copy carrying the given build identifiers
    pub fn with_build<I, S>(&self, identifiers: I) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let build = identifiers
            .into_iter()
            .map(Identifier::new)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Version {
            build,
            ..self.clone()
        })
    }

    pub fn is_prerelease(&self) -> bool {
        !self.pre_release.is_empty()
    }

    /// Returns the next major Version, or `None` if major is already `u64::MAX`.
    pub fn next_major(&self) -> Option<Version> {
        Some(Version::new(self.major.checked_add(1)?, 0, 0))
    }

    /// Returns the next minor Version, or `None` on overflow.
    pub fn next_minor(&self) -> Option<Version> {
        Some(Version::new(self.major, self.minor.checked_add(1)?, 0))
    }

    /// Returns the next patch Version, or `None` on overflow.
    pub fn next_patch(&self) -> Option<Version> {
        Some(Version::new(self.major, self.minor, self.patch.checked_add(1)?))
    }
}

fn write_identifiers(f: &mut fmt::Formatter<'_>, lead: char, ids: &[Identifier]) -> fmt::Result {
    for (i, id) in ids.iter().enumerate() {
        let sep = if i == 0 { lead } else { '.' };
        write!(f, "{}{}", sep, id)?;
    }
    Ok(())
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        write_identifiers(f, '-', &self.pre_release)?;
        write_identifiers(f, '+', &self.build)
    }
}

impl FromStr for Version {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parser::parse(s)
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        comparator::compare(self, other)
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        parser::parse(&text).map_err(de::Error::custom)
    }
}
