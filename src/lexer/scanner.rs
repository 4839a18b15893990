//! Scanner for KAY source code tokenization.

use super::source::{CharSource, SourceError};
use super::token::{classify_word, Token, TokenKind};
use std::path::Path;

/// Pull-based token producer over one character source.
///
/// Each `next_token` call consumes any leading whitespace and comments
/// plus exactly one lexeme, leaving the cursor on the character after it.
/// Malformed input is classified as `TokenKind::Other`, never raised; the
/// only fatal error this type knows is failing to open its source.
pub struct TokenStream {
    source: CharSource,
}

impl TokenStream {
    pub fn new(source: CharSource) -> Self {
        Self { source }
    }

    /// Scan a file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        Ok(Self::new(CharSource::open(path)?))
    }

    /// Scan an in-memory buffer.
    pub fn from_str(src: &str) -> Self {
        Self::new(CharSource::from_str(src))
    }

    /// Produce the next token. Returns `EndOfStream` at end-of-input and
    /// keeps returning it on every call after that.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        // Comments and whitespace may alternate any number of times
        // before the next real token. A '/' starting neither comment form
        // ends the loop as the division operator.
        while self.source.current() == Some('/') {
            self.source.advance();
            match self.source.current() {
                Some('/') => self.skip_line_comment(),
                Some('*') => {
                    self.source.advance();
                    self.skip_block_comment();
                }
                _ => return Token::new(TokenKind::Operator, "/"),
            }
            self.skip_whitespace();
        }

        let c = match self.source.current() {
            None => return Token::end_of_stream(),
            Some(c) => c,
        };

        if is_word_start(c) {
            return self.scan_word();
        }
        if c.is_ascii_digit() {
            return self.scan_number();
        }

        match c {
            ':' => self.match_pair(c, '=', TokenKind::Other),
            '&' => self.match_pair(c, '&', TokenKind::Other),
            '|' => self.match_pair(c, '|', TokenKind::Other),

            // lone '!' is logical NOT, so the fallback stays an operator
            '!' => self.match_pair(c, '=', TokenKind::Operator),
            '<' | '>' | '=' => self.match_pair(c, '=', TokenKind::Operator),

            '+' | '-' | '*' | '%' => self.single(TokenKind::Operator, c),

            '(' | ')' | '{' | '}' | ';' | ',' => self.single(TokenKind::Separator, c),

            _ => self.single(TokenKind::Other, c),
        }
    }

    /// Drain the stream, sentinel included.
    pub fn tokens(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token();
            let done = token.is_end_of_stream();
            tokens.push(token);

            if done {
                break;
            }
        }

        tokens
    }

    fn skip_whitespace(&mut self) {
        while self.source.current().map_or(false, char::is_whitespace) {
            self.source.advance();
        }
    }

    /// Cursor sits on the second '/'; the newline is left for the
    /// whitespace pass.
    fn skip_line_comment(&mut self) {
        while let Some(c) = self.source.current() {
            if c == '\n' || c == '\r' {
                break;
            }
            self.source.advance();
        }
    }

    /// Cursor sits on the first character inside the comment. Runs to the
    /// closing `*/`; end-of-input inside the comment is absorbed silently.
    fn skip_block_comment(&mut self) {
        while let Some(c) = self.source.current() {
            self.source.advance();
            if c == '*' && self.source.current() == Some('/') {
                self.source.advance();
                break;
            }
        }
    }

    /// Maximal run of letters, digits, and '_', classified by spelling.
    fn scan_word(&mut self) -> Token {
        let mut lexeme = String::new();

        while let Some(c) = self.source.current() {
            if !is_word_continue(c) {
                break;
            }
            lexeme.push(c);
            self.source.advance();
        }

        let kind = classify_word(&lexeme);
        Token::new(kind, lexeme)
    }

    /// Maximal digit run. A letter or '_' immediately after the digits
    /// turns the whole identifier-shaped run into a malformed numeral,
    /// e.g. `3a`.
    fn scan_number(&mut self) -> Token {
        let mut lexeme = String::new();

        while let Some(c) = self.source.current() {
            if !c.is_ascii_digit() {
                break;
            }
            lexeme.push(c);
            self.source.advance();
        }

        match self.source.current() {
            Some(c) if is_word_start(c) || c == '_' => {
                while let Some(c) = self.source.current() {
                    if !is_word_continue(c) {
                        break;
                    }
                    lexeme.push(c);
                    self.source.advance();
                }
                Token::new(TokenKind::Other, lexeme)
            }
            _ => Token::new(TokenKind::Literal, lexeme),
        }
    }

    /// Two-character operator when `second` follows `first`, else the
    /// single character with the fallback kind.
    fn match_pair(&mut self, first: char, second: char, fallback: TokenKind) -> Token {
        self.source.advance();
        if self.source.current() == Some(second) {
            self.source.advance();
            Token::new(TokenKind::Operator, String::from_iter([first, second]))
        } else {
            Token::new(fallback, first.to_string())
        }
    }

    fn single(&mut self, kind: TokenKind, c: char) -> Token {
        self.source.advance();
        Token::new(kind, c.to_string())
    }
}

fn is_word_start(c: char) -> bool {
    unicode_xid::UnicodeXID::is_xid_start(c)
}

fn is_word_continue(c: char) -> bool {
    c == '_' || unicode_xid::UnicodeXID::is_xid_continue(c)
}
