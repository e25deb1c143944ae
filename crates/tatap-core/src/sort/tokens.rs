//! Stem tokenizer: maximal runs of ASCII digits and non-digits.
//!
//! Tokens borrow from the stem. An exhausted tokenizer stands for the
//! "empty" token, which sorts before any real token.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TokenKind {
    Digit,
    NonDigit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
}

/// Iterator over the tokens of a stem.
pub(crate) struct Tokens<'a> {
    rest: &'a str,
}

impl<'a> Tokens<'a> {
    pub fn new(stem: &'a str) -> Self {
        Self { rest: stem }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let bytes = self.rest.as_bytes();
        let first = *bytes.first()?;
        let is_digit = first.is_ascii_digit();
        let run = bytes
            .iter()
            .position(|b| b.is_ascii_digit() != is_digit)
            .unwrap_or(bytes.len());

        // Run boundaries sit next to an ASCII digit, so they are always
        // char boundaries.
        let (text, rest) = self.rest.split_at(run);
        self.rest = rest;

        Some(Token {
            kind: if is_digit {
                TokenKind::Digit
            } else {
                TokenKind::NonDigit
            },
            text,
        })
    }
}
