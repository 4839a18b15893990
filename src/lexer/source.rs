//! Character-level input for the scanner.

use std::path::Path;

/// Failure to acquire the character source. Construction-time only: once
/// a `CharSource` exists, reads cannot fail.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("cannot open source file '{path}': {source}")]
    Unreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Advance-only cursor over the characters of one KAY source.
///
/// The cursor exposes exactly one character of visibility: `current` is
/// the next unconsumed character, `None` the end-of-input marker.
#[derive(Debug)]
pub struct CharSource {
    chars: std::vec::IntoIter<char>,
    current: Option<char>,
}

impl CharSource {
    /// Build a source over an in-memory buffer. The cursor starts on the
    /// first character.
    pub fn from_str(src: &str) -> Self {
        let mut chars = src.chars().collect::<Vec<_>>().into_iter();
        let current = chars.next();
        Self { chars, current }
    }

    /// Read `path` and build a source over its contents. The file handle
    /// is drained and released before this returns, on the failure path
    /// as well.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| SourceError::Unreadable {
            path: path.display().to_string(),
            source: e,
        })?;
        Ok(Self::from_str(&text))
    }

    /// The next unconsumed character, or `None` at end-of-input.
    pub fn current(&self) -> Option<char> {
        self.current
    }

    /// Step past the current character. A no-op once end-of-input has
    /// been reached.
    pub fn advance(&mut self) {
        self.current = self.chars.next();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_walks_the_input() {
        let mut source = CharSource::from_str("ab");
        assert_eq!(source.current(), Some('a'));
        source.advance();
        assert_eq!(source.current(), Some('b'));
        source.advance();
        assert_eq!(source.current(), None);
    }

    #[test]
    fn advance_is_idempotent_at_end_of_input() {
        let mut source = CharSource::from_str("x");
        source.advance();
        assert_eq!(source.current(), None);
        source.advance();
        assert_eq!(source.current(), None);
    }

    #[test]
    fn empty_input_starts_at_end_of_input() {
        let source = CharSource::from_str("");
        assert_eq!(source.current(), None);
    }

    #[test]
    fn non_ascii_input_is_read_per_character() {
        let mut source = CharSource::from_str("λx");
        assert_eq!(source.current(), Some('λ'));
        source.advance();
        assert_eq!(source.current(), Some('x'));
    }

    #[test]
    fn open_missing_file_is_an_error() {
        let err = CharSource::open("no/such/file.kay").unwrap_err();
        let SourceError::Unreadable { path, .. } = err;
        assert_eq!(path, "no/such/file.kay");
    }
}
