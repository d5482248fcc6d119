//! Error types for table loading and word parsing.

/// Result type defaulting to [`WordsError`].
pub type Result<T, E = WordsError> = std::result::Result<T, E>;

/// Errors surfaced by the library.
///
/// An unmatched token is not an error; it yields an empty
/// [`ParseResult`](crate::types::ParseResult).
#[derive(Debug, thiserror::Error)]
pub enum WordsError {
    /// The token is empty or contains non-alphabetic characters.
    #[error("invalid input {token:?}: text to be parsed must be a single Latin word")]
    InvalidInput { token: String },

    /// The lexicon tables are inconsistent.
    #[error("invalid table {table}: {msg}")]
    InvalidTable { table: &'static str, msg: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl WordsError {
    pub(crate) fn invalid_input<S>(token: S) -> Self
    where
        S: Into<String>,
    {
        Self::InvalidInput {
            token: token.into(),
        }
    }

    pub(crate) fn invalid_table<S>(table: &'static str, msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::InvalidTable {
            table,
            msg: msg.into(),
        }
    }
}
