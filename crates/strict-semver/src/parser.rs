//! Recursive-descent parser over the lexer's items

use thiserror::Error;

use crate::lexer::{Item, ItemKind, Lexer};
use crate::version::{Identifier, Version};

/// Error type for version parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unexpected end of input")]
    UnexpectedEof,
    #[error("invalid character {character:?} at offset {position}")]
    InvalidCharacter { character: String, position: usize },
    #[error("unexpected {found} at offset {position}, expected number")]
    ExpectedNumber { found: String, position: usize },
    #[error("unexpected {found} at offset {position}, expected dot")]
    ExpectedDot { found: String, position: usize },
    #[error("unexpected {found} at offset {position}, expected dash, plus or end of input")]
    ExpectedDashPlusOrEof { found: String, position: usize },
    #[error("unexpected {found} at offset {position}, expected dot or end of input")]
    ExpectedDotOrEof { found: String, position: usize },
    #[error("unexpected {found} at offset {position}, expected dot, plus or end of input")]
    ExpectedDotPlusOrEof { found: String, position: usize },
    #[error("unexpected {found} at offset {position}, expected identifier")]
    ExpectedIdentifier { found: String, position: usize },
    #[error("numeric identifier \"{text}\" at offset {position} has a leading zero")]
    LeadingZero { text: String, position: usize },
    #[error("numeric identifier \"{0}\" has a leading zero")]
    LeadingZeroIdentifier(String),
    #[error("number \"{text}\" at offset {position} is out of range")]
    NumberOutOfRange { text: String, position: usize },
    #[error("invalid identifier \"{0}\"")]
    InvalidIdentifier(String),
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum ListContext {
    PreRelease,
    Build,
}

/// Parse a version string into a [`Version`].
///
/// Parsing is all-or-nothing: a malformed string yields exactly one error.
pub fn parse(input: &str) -> Result<Version, ParseError> {
    let result = Parser::new(input).parse_version();
    if let Err(err) = &result {
        log::trace!("failed to parse {:?}: {}", input, err);
    }
    result
}

struct Parser<'a> {
    lexer: Lexer<'a>,
    eof_position: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Parser {
            lexer: Lexer::new(input),
            eof_position: input.len(),
        }
    }

    /// Pull the next item. The lexer always ends on `Eof` or `Invalid`, both
    /// of which stop the parse, so running dry never happens in practice.
    fn next_item(&mut self) -> Item<'a> {
        self.lexer.next().unwrap_or(Item {
            kind: ItemKind::Eof,
            text: "",
            position: self.eof_position,
        })
    }

    fn parse_version(mut self) -> Result<Version, ParseError> {
        let major = self.parse_number()?;
        self.parse_dot()?;
        let minor = self.parse_number()?;
        self.parse_dot()?;
        let patch = self.parse_number()?;
        let (pre_release, build) = self.parse_tail()?;

        Ok(Version {
            major,
            minor,
            patch,
            pre_release,
            build,
        })
    }

    fn parse_number(&mut self) -> Result<u64, ParseError> {
        let item = self.next_item();
        match item.kind {
            ItemKind::Number => {
                reject_leading_zero(&item)?;
                item.text.parse::<u64>().map_err(|_| ParseError::NumberOutOfRange {
                    text: item.text.to_string(),
                    position: item.position,
                })
            }
            _ => Err(unexpected(&item, |found, position| {
                ParseError::ExpectedNumber { found, position }
            })),
        }
    }

    fn parse_dot(&mut self) -> Result<(), ParseError> {
        let item = self.next_item();
        match item.kind {
            ItemKind::Dot => Ok(()),
            _ => Err(unexpected(&item, |found, position| {
                ParseError::ExpectedDot { found, position }
            })),
        }
    }

    fn parse_tail(&mut self) -> Result<(Vec<Identifier>, Vec<Identifier>), ParseError> {
        let item = self.next_item();
        match item.kind {
            ItemKind::Eof => Ok((Vec::new(), Vec::new())),
            ItemKind::Dash => {
                let mut pre_release = Vec::new();
                let has_build = self.parse_identifiers(ListContext::PreRelease, &mut pre_release)?;
                let mut build = Vec::new();
                if has_build {
                    self.parse_identifiers(ListContext::Build, &mut build)?;
                }
                Ok((pre_release, build))
            }
            ItemKind::Plus => {
                let mut build = Vec::new();
                self.parse_identifiers(ListContext::Build, &mut build)?;
                Ok((Vec::new(), build))
            }
            _ => Err(unexpected(&item, |found, position| ParseError::ExpectedDashPlusOrEof {
                found,
                position,
            })),
        }
    }

    /// Parse `identifier ( '.' identifier )*` into `out`.
    ///
    /// Returns true when the pre-release list ended on `+`, meaning a build
    /// list follows.
    fn parse_identifiers(
        &mut self,
        context: ListContext,
        out: &mut Vec<Identifier>,
    ) -> Result<bool, ParseError> {
        loop {
            out.push(self.parse_identifier(context)?);

            let item = self.next_item();
            match (item.kind, context) {
                (ItemKind::Eof, _) => return Ok(false),
                (ItemKind::Dot, _) => continue,
                (ItemKind::Plus, ListContext::PreRelease) => return Ok(true),
                (_, ListContext::PreRelease) => {
                    return Err(unexpected(&item, |found, position| {
                        ParseError::ExpectedDotPlusOrEof { found, position }
                    }));
                }
                (_, ListContext::Build) => {
                    return Err(unexpected(&item, |found, position| {
                        ParseError::ExpectedDotOrEof { found, position }
                    }));
                }
            }
        }
    }

    fn parse_identifier(&mut self, context: ListContext) -> Result<Identifier, ParseError> {
        let item = self.next_item();
        match item.kind {
            // an all-digit identifier is still an identifier
            ItemKind::Identifier | ItemKind::Number => {
                let numeric = item.text.bytes().all(|b| b.is_ascii_digit());
                if context == ListContext::PreRelease && numeric {
                    reject_leading_zero(&item)?;
                }
                Ok(Identifier::from_lexed(item.text))
            }
            _ => Err(unexpected(&item, |found, position| {
                ParseError::ExpectedIdentifier { found, position }
            })),
        }
    }
}

fn reject_leading_zero(item: &Item<'_>) -> Result<(), ParseError> {
    if item.text.len() > 1 && item.text.starts_with('0') {
        return Err(ParseError::LeadingZero {
            text: item.text.to_string(),
            position: item.position,
        });
    }
    Ok(())
}

/// Map an item that doesn't fit the grammar position to an error.
///
/// End of input and invalid characters have their own kinds regardless of
/// what was expected.
fn unexpected<F>(item: &Item<'_>, expected: F) -> ParseError
where
    F: FnOnce(String, usize) -> ParseError,
{
    match item.kind {
        ItemKind::Eof => ParseError::UnexpectedEof,
        ItemKind::Invalid => ParseError::InvalidCharacter {
            character: item.text.to_string(),
            position: item.position,
        },
        _ => expected(item.to_string(), item.position),
    }
}
