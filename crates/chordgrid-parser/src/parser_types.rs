//! Syntax tree of the chord notation.
//!
//! The parser only splits lines into a keyword and its raw arguments;
//! interpreting the arguments is left to elaboration so every bad value can
//! be reported with its own span.

use std::fmt;

use crate::span::{Span, Spanned};

/// A statement keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Name,
    Start,
    Mute,
    Dot,
    Barre,
}

impl Keyword {
    /// Looks up a keyword by its exact lowercase spelling.
    pub fn from_word(word: &str) -> Option<Self> {
        match word {
            "name" => Some(Self::Name),
            "start" => Some(Self::Start),
            "mute" => Some(Self::Mute),
            "dot" => Some(Self::Dot),
            "barre" => Some(Self::Barre),
            _ => None,
        }
    }

    /// Returns the keyword spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Start => "start",
            Self::Mute => "mute",
            Self::Dot => "dot",
            Self::Barre => "barre",
        }
    }

    /// Returns a usage example for help messages.
    pub fn usage(&self) -> &'static str {
        match self {
            Self::Name => "name \"C major\"",
            Self::Start => "start 3",
            Self::Mute => "mute E B",
            Self::Dot => "dot A 3",
            Self::Barre => "barre 1 E..B",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A raw statement argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Argument<'a> {
    /// A whitespace-delimited word such as `3`, `E` or `E..B`.
    Word(&'a str),
    /// The contents of a double-quoted string, without the quotes.
    Quoted(&'a str),
}

/// One line of notation.
#[derive(Debug, Clone)]
pub struct Statement<'a> {
    pub keyword: Spanned<Keyword>,
    pub args: Vec<Spanned<Argument<'a>>>,
    /// Covers the keyword and all arguments.
    pub span: Span,
}
