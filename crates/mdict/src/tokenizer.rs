//! Splitting path strings into key tokens.

use std::iter::Peekable;
use std::str::Chars;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default delimiter between path tokens.
pub const DEFAULT_DELIMITER: char = '.';

/// Default escape character.
pub const DEFAULT_ESCAPE: char = '\\';

/// Splits path strings on a delimiter, honoring escaped delimiters.
///
/// A delimiter preceded by the escape character belongs to the current token
/// and the escape character is dropped. An escape character before anything
/// else is kept as is. Empty segments are kept as empty tokens.
///
/// # Example
///
/// ```rust
/// use datakit_mdict::Tokenizer;
///
/// let tokenizer = Tokenizer::new('/');
/// assert_eq!(tokenizer.tokenize(r"a/b\/c//d"), vec!["a", "b/c", "", "d"]);
/// assert_eq!(tokenizer.join(["a", "b/c"]), r"a/b\/c");
/// ```
///
/// Tokens containing the escape character do not always survive a
/// `join`/`tokenize` round trip: a token ending with `\` joined before a
/// delimiter reads back as an escaped delimiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Tokenizer {
    delimiter: char,
    escape: char,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            escape: DEFAULT_ESCAPE,
        }
    }
}

impl Tokenizer {
    /// Create a tokenizer splitting on `delimiter`, escaping with `\`.
    #[must_use]
    pub fn new(delimiter: char) -> Self {
        Self {
            delimiter,
            escape: DEFAULT_ESCAPE,
        }
    }

    /// Use `escape` as the escape character.
    #[must_use]
    pub fn with_escape(mut self, escape: char) -> Self {
        self.escape = escape;
        self
    }

    /// The delimiter character.
    #[must_use]
    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    /// The escape character.
    #[must_use]
    pub fn escape(&self) -> char {
        self.escape
    }

    /// Iterate over the tokens of `path`.
    ///
    /// Always yields at least one token: the empty string yields `""`.
    #[must_use]
    pub fn tokens<'a>(&self, path: &'a str) -> Tokens<'a> {
        Tokens {
            chars: path.chars().peekable(),
            delimiter: self.delimiter,
            escape: self.escape,
            done: false,
        }
    }

    /// Split `path` into its tokens.
    #[must_use]
    pub fn tokenize(&self, path: &str) -> Vec<String> {
        self.tokens(path).collect()
    }

    /// Join tokens into a path, escaping delimiters inside tokens.
    #[must_use]
    pub fn join<I, S>(&self, tokens: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut path = String::new();
        for (idx, token) in tokens.into_iter().enumerate() {
            if idx > 0 {
                path.push(self.delimiter);
            }
            for c in token.as_ref().chars() {
                if c == self.delimiter {
                    path.push(self.escape);
                }
                path.push(c);
            }
        }
        path
    }
}

/// Iterator over the tokens of a path. Created by [`Tokenizer::tokens`].
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    chars: Peekable<Chars<'a>>,
    delimiter: char,
    escape: char,
    done: bool,
}

impl Iterator for Tokens<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.done {
            return None;
        }

        let mut token = String::new();
        while let Some(c) = self.chars.next() {
            if c == self.escape && self.chars.peek() == Some(&self.delimiter) {
                token.push(self.delimiter);
                self.chars.next();
            } else if c == self.delimiter {
                return Some(token);
            } else {
                token.push(c);
            }
        }

        self.done = true;
        Some(token)
    }
}

/// Split `path` on `delimiter`. See [`Tokenizer::tokenize`].
#[must_use]
pub fn tokenize(path: &str, delimiter: char) -> Vec<String> {
    Tokenizer::new(delimiter).tokenize(path)
}

/// Join `tokens` with `delimiter`. See [`Tokenizer::join`].
#[must_use]
pub fn join<I, S>(tokens: I, delimiter: char) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Tokenizer::new(delimiter).join(tokens)
}
