//! Pull-based tokenizer for version strings
//!
//! The scan is split in two regions. Before the first `-` or `+` only digits
//! and dots are legal. After it, identifiers made of `[0-9A-Za-z-]` separated
//! by `.` and `+` are accepted.

use std::fmt;

/// Kind of a lexical item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    /// A byte that fits no legal transition; scanning stops after it
    Invalid,
    /// End of input; always the last item of a successful scan
    Eof,
    /// Version part separator (`.`)
    Dot,
    /// Pre-release separator (`-`)
    Dash,
    /// Build separator (`+`)
    Plus,
    /// `[0-9]+` in the `major.minor.patch` region
    Number,
    /// `[0-9A-Za-z-]+`
    Identifier,
}

impl ItemKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Invalid => "invalid character",
            ItemKind::Eof => "end of input",
            ItemKind::Dot => "dot",
            ItemKind::Dash => "dash",
            ItemKind::Plus => "plus",
            ItemKind::Number => "number",
            ItemKind::Identifier => "identifier",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A classified span of the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item<'a> {
    pub kind: ItemKind,
    pub text: &'a str,
    /// Byte offset of `text` in the input
    pub position: usize,
}

impl fmt::Display for Item<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ItemKind::Number | ItemKind::Identifier => write!(f, "{} \"{}\"", self.kind, self.text),
            ItemKind::Invalid => write!(f, "invalid character {:?}", self.text),
            _ => write!(f, "{}", self.kind),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    FirstPart,
    SecondPart,
    Number,
    Identifier,
    Done,
}

/// Tokenizer over a single input.
///
/// Items are produced one at a time as the consumer pulls them. After the
/// `Eof` or `Invalid` item the iterator is exhausted and stays exhausted.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    input: &'a str,
    start: usize,
    pos: usize,
    state: State,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input,
            start: 0,
            pos: 0,
            state: State::FirstPart,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    fn emit(&mut self, kind: ItemKind) -> Item<'a> {
        let item = Item {
            kind,
            text: &self.input[self.start..self.pos],
            position: self.start,
        };
        self.start = self.pos;
        item
    }

    /// Consume the byte at `pos` as a one-byte separator item.
    fn separator(&mut self, kind: ItemKind, next: State) -> Item<'a> {
        self.pos += 1;
        self.state = next;
        self.emit(kind)
    }

    /// Emit the character at `pos` as invalid and stop scanning.
    fn invalid(&mut self) -> Item<'a> {
        self.start = self.pos;
        let width = self.input[self.pos..]
            .chars()
            .next()
            .map_or(1, char::len_utf8);
        self.pos += width;
        self.state = State::Done;
        self.emit(ItemKind::Invalid)
    }

    fn eof(&mut self) -> Item<'a> {
        self.state = State::Done;
        self.emit(ItemKind::Eof)
    }
}

fn is_identifier_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-'
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Item<'a>;

    fn next(&mut self) -> Option<Item<'a>> {
        loop {
            match self.state {
                State::Done => return None,
                State::FirstPart => {
                    return Some(match self.peek() {
                        None => self.eof(),
                        Some(b'.') => self.separator(ItemKind::Dot, State::FirstPart),
                        Some(b'-') => self.separator(ItemKind::Dash, State::SecondPart),
                        Some(b'+') => self.separator(ItemKind::Plus, State::SecondPart),
                        Some(b) if b.is_ascii_digit() => {
                            self.pos += 1;
                            self.state = State::Number;
                            continue;
                        }
                        Some(_) => self.invalid(),
                    });
                }
                State::SecondPart => {
                    return Some(match self.peek() {
                        None => self.eof(),
                        Some(b'.') => self.separator(ItemKind::Dot, State::SecondPart),
                        Some(b'+') => self.separator(ItemKind::Plus, State::SecondPart),
                        Some(b) if is_identifier_byte(b) => {
                            self.pos += 1;
                            self.state = State::Identifier;
                            continue;
                        }
                        Some(_) => self.invalid(),
                    });
                }
                State::Number => match self.peek() {
                    Some(b) if b.is_ascii_digit() => self.pos += 1,
                    // it's not a number after all
                    Some(b) if b.is_ascii_alphabetic() => {
                        self.pos += 1;
                        self.state = State::Identifier;
                    }
                    None | Some(b'.') | Some(b'-') | Some(b'+') => {
                        self.state = State::FirstPart;
                        return Some(self.emit(ItemKind::Number));
                    }
                    Some(_) => return Some(self.invalid()),
                },
                State::Identifier => match self.peek() {
                    Some(b) if is_identifier_byte(b) => self.pos += 1,
                    None | Some(b'.') | Some(b'+') => {
                        self.state = State::SecondPart;
                        return Some(self.emit(ItemKind::Identifier));
                    }
                    Some(_) => return Some(self.invalid()),
                },
            }
        }
    }
}

impl std::iter::FusedIterator for Lexer<'_> {}
