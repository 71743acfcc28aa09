use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CsvError {
    #[error("content is not valid base64: {0}")]
    InvalidBase64(#[from] base64::DecodeError),

    #[error("content is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    #[error("header row is missing or empty")]
    EmptyHeader,

    #[error("unterminated quoted field starting on line {line}")]
    UnterminatedQuote { line: usize },

    #[error("row on line {line} has {found} fields; expected {expected}")]
    ColumnCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("row has {found} cells; expected {expected}")]
    RowWidth { expected: usize, found: usize },
}
