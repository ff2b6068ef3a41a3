//! Error types for the board library.

use std::path::PathBuf;

use thiserror::Error;

use crate::models::ColumnKind;

/// Comprehensive error type for all board operations.
#[derive(Error, Debug)]
pub enum BoardError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Card not found for the given ID
    #[error("Card with ID {id} not found")]
    CardNotFound { id: u64 },
    /// Board not found for the given ID
    #[error("Board with ID {id} not found")]
    BoardNotFound { id: u64 },
    /// Column not found for the given ID
    #[error("Column with ID {id} not found")]
    ColumnNotFound { id: u64 },
    /// The card's current column is absent from the supplied column list,
    /// which means the caller passed the columns of a different board
    #[error("Card {card_id} belongs to column {column_id}, which is not on the supplied board")]
    ColumnMismatch { card_id: u64, column_id: u64 },
    /// No column follows the current one in the board's ordering
    #[error("No column with order {order} follows the current column")]
    NoNextColumn { order: u32 },
    /// Card is blocked and cannot be moved
    #[error("Card {id} is blocked and must be unblocked before moving")]
    CardBlocked { id: u64 },
    /// Card is already blocked
    #[error("Card {id} is already blocked")]
    AlreadyBlocked { id: u64 },
    /// Card is not blocked
    #[error("Card {id} is not blocked")]
    NotBlocked { id: u64 },
    /// Card already reached the final column
    #[error("Card {id} has already been finished")]
    CardFinished { id: u64 },
    /// Card sits in a terminal column and cannot change state
    #[error("Card {id} is in a {kind} column and cannot change state")]
    TerminalColumn { id: u64, kind: ColumnKind },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> BoardError {
        BoardError::Database {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> BoardError {
        BoardError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl BoardError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a new database error with additional context.
    pub fn database_error(message: &str, source: rusqlite::Error) -> Self {
        Self::database(message).with_source(source)
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| BoardError::database(message).with_source(e))
    }
}

/// Result type alias for board operations
pub type Result<T> = std::result::Result<T, BoardError>;
