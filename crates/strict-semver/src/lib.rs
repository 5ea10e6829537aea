//! Semantic Versioning 2.0.0 parsing, rendering and precedence
//!
//! This crate parses version strings into [`Version`] values through a
//! pull-based [`Lexer`] and a recursive-descent parser, renders them back to
//! canonical text and orders them by SemVer precedence.

pub mod comparator;
pub mod lexer;
mod operator;
mod parser;
mod semver;
mod version;

pub use comparator::{less, Comparator};
pub use lexer::{Item, ItemKind, Lexer};
pub use operator::{InvalidOperatorError, Operator};
pub use parser::{parse, ParseError};
pub use semver::Semver;
pub use version::{Identifier, Version};

/// Render a version in canonical form
pub fn to_string(version: &Version) -> String {
    version.to_string()
}

/// Next major version, dropping pre-release and build metadata.
/// `None` when the incremented component would overflow `u64`.
pub fn next_major(version: &Version) -> Option<Version> {
    version.next_major()
}

/// Next minor version, dropping pre-release and build metadata.
/// `None` when the incremented component would overflow `u64`.
pub fn next_minor(version: &Version) -> Option<Version> {
    version.next_minor()
}

/// Next patch version, dropping pre-release and build metadata.
/// `None` when the incremented component would overflow `u64`.
pub fn next_patch(version: &Version) -> Option<Version> {
    version.next_patch()
}
