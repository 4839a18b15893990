//! Token definitions for the KAY lexer.

use std::fmt;

/// A token with its kind and the exact source text it was matched from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
        }
    }

    /// The sentinel token that terminates every scan.
    pub fn end_of_stream() -> Self {
        Self::new(TokenKind::EndOfStream, "EOF")
    }

    pub fn is_end_of_stream(&self) -> bool {
        self.kind == TokenKind::EndOfStream
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}('{}')", self.kind, self.lexeme)
    }
}

/// All token kinds in KAY
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `main`, `integer`, `bool`, `if`, `else`, `while`
    Keyword,
    Identifier,
    /// Integer literals and the boolean spellings `True`/`False`
    Literal,
    Operator,
    Separator,
    /// Input that matches no valid lexeme shape: malformed numerals such
    /// as `3a`, stray punctuation such as a lone `:`, or characters
    /// outside the KAY alphabet. Emitted as data, never raised.
    Other,
    EndOfStream,
}

/// Classify a letter-initial run: boolean literals win over keywords,
/// keywords over identifiers.
pub fn classify_word(lexeme: &str) -> TokenKind {
    match lexeme {
        "True" | "False" => TokenKind::Literal,

        "main" | "integer" | "bool" | "if" | "else" | "while" => TokenKind::Keyword,

        _ => TokenKind::Identifier,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boolean_spellings_are_literals() {
        assert_eq!(classify_word("True"), TokenKind::Literal);
        assert_eq!(classify_word("False"), TokenKind::Literal);
    }

    #[test]
    fn boolean_spellings_are_case_sensitive() {
        assert_eq!(classify_word("true"), TokenKind::Identifier);
        assert_eq!(classify_word("FALSE"), TokenKind::Identifier);
    }

    #[test]
    fn keywords_classify_as_keywords() {
        for kw in ["main", "integer", "bool", "if", "else", "while"] {
            assert_eq!(classify_word(kw), TokenKind::Keyword, "keyword {}", kw);
        }
    }

    #[test]
    fn other_words_are_identifiers() {
        assert_eq!(classify_word("x"), TokenKind::Identifier);
        assert_eq!(classify_word("mainline"), TokenKind::Identifier);
        assert_eq!(classify_word("count_2"), TokenKind::Identifier);
    }

    #[test]
    fn display_shows_kind_and_lexeme() {
        let token = Token::new(TokenKind::Keyword, "main");
        assert_eq!(token.to_string(), "Keyword('main')");
    }

    #[test]
    fn end_of_stream_sentinel() {
        let token = Token::end_of_stream();
        assert!(token.is_end_of_stream());
        assert_eq!(token.lexeme, "EOF");
    }
}
