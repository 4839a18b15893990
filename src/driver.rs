//! Driver that runs the scanner over one source file.

use crate::lexer::{SourceError, Token, TokenKind, TokenStream};

/// The scanning driver
pub struct Driver {
    file: String,
}

impl Driver {
    pub fn new(file: String) -> Self {
        Self { file }
    }

    /// Run a full scan of the file. Failing to open it is the only error;
    /// the scan itself always finishes, with malformed input riding along
    /// as `Other` tokens in the report.
    pub fn scan(&self) -> Result<ScanReport, SourceError> {
        let mut stream = TokenStream::open(&self.file)?;
        Ok(ScanReport {
            file: self.file.clone(),
            tokens: stream.tokens(),
        })
    }
}

/// Everything one scan produced
pub struct ScanReport {
    file: String,
    tokens: Vec<Token>,
}

impl ScanReport {
    pub fn file(&self) -> &str {
        &self.file
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Number of `Other` tokens in the scan. Whether these make the
    /// source erroneous is the caller's call.
    pub fn anomaly_count(&self) -> usize {
        self.tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Other)
            .count()
    }

    /// The numbered token listing, one line per token, sentinel excluded.
    pub fn listing(&self) -> String {
        let mut out = String::new();

        for (i, token) in self
            .tokens
            .iter()
            .filter(|t| !t.is_end_of_stream())
            .enumerate()
        {
            out.push_str(&format!("Token {} - {}\n", i + 1, token));
        }

        out
    }
}
