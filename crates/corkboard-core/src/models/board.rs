//! Board model definition.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::BoardColumn;

/// Represents a board with its ordered columns.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Board {
    /// Unique identifier for the board
    pub id: u64,

    /// Display name of the board
    pub name: String,

    /// Timestamp when the board was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the board was last modified (UTC)
    pub updated_at: Timestamp,

    /// Columns of the board, sorted by `order`
    #[serde(default)]
    pub columns: Vec<BoardColumn>,
}
