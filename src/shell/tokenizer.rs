//! Argument splitting with double quotes and backslash escapes.

use thiserror::Error;

/// Errors that can occur while splitting a command line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenizeError {
    /// A quote opened mid-word or closed without a following space.
    #[error("malformed quote at position {position}")]
    MalformedQuote { position: usize },
}

impl TokenizeError {
    /// One past the codepoint index of the offending quote.
    pub fn position(&self) -> usize {
        match self {
            TokenizeError::MalformedQuote { position } => *position,
        }
    }
}

/// Scanner state between two characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Outside quotes.
    Bare,
    /// Inside a double-quoted span.
    Quoted,
    /// A backslash was seen; the next character is taken literally.
    Escaped { quoted: bool },
    /// A quote was just closed; the next character is dropped.
    AfterQuote,
}

struct Scanner {
    mode: Mode,
    last: char,
    current: usize,
    slots: Vec<Option<String>>,
}

impl Scanner {
    fn new() -> Self {
        Self {
            mode: Mode::Bare,
            last: ' ',
            current: 0,
            slots: Vec::new(),
        }
    }

    /// Create the current slot as empty if it does not exist yet.
    fn touch(&mut self) -> &mut String {
        if self.slots.len() <= self.current {
            self.slots.resize(self.current + 1, None);
        }
        self.slots[self.current].get_or_insert_with(String::new)
    }

    fn push(&mut self, c: char) {
        self.touch().push(c);
    }

    fn step(&mut self, pos: usize, c: char, next: Option<char>) -> Result<(), TokenizeError> {
        match self.mode {
            Mode::AfterQuote => {
                self.mode = Mode::Bare;
            }
            Mode::Escaped { quoted } => {
                self.push(c);
                self.mode = if quoted { Mode::Quoted } else { Mode::Bare };
            }
            Mode::Bare | Mode::Quoted if c == '\\' => {
                self.mode = Mode::Escaped {
                    quoted: self.mode == Mode::Quoted,
                };
            }
            Mode::Bare if c == '"' => {
                // Quotes may only open a word
                if self.last != ' ' {
                    return Err(TokenizeError::MalformedQuote { position: pos + 1 });
                }
                self.mode = Mode::Quoted;
            }
            Mode::Quoted if c == '"' => {
                if next.is_some_and(|n| n != ' ') {
                    return Err(TokenizeError::MalformedQuote { position: pos + 1 });
                }
                self.touch();
                self.current += 1;
                self.mode = Mode::AfterQuote;
            }
            Mode::Bare if c == ' ' => {
                if self.last != ' ' {
                    self.current += 1;
                }
            }
            Mode::Bare | Mode::Quoted => self.push(c),
        }
        self.last = c;
        Ok(())
    }

    fn finish(self) -> Vec<String> {
        self.slots.into_iter().flatten().collect()
    }
}

/// Split a command line into arguments.
///
/// Words are separated by runs of spaces. A double-quoted span groups
/// spaces into one argument and must start a word and be followed by a
/// space or the end of input. A backslash makes the next character literal.
/// An unterminated quote is not an error; whatever was collected is kept.
pub fn tokenize(input: &str) -> Result<Vec<String>, TokenizeError> {
    let mut scanner = Scanner::new();
    let mut chars = input.chars().enumerate().peekable();

    while let Some((pos, c)) = chars.next() {
        let next = chars.peek().map(|&(_, n)| n);
        scanner.step(pos, c, next)?;
    }

    Ok(scanner.finish())
}
