//! Parameter structures for Corkboard operations
//!
//! Shared parameter structures that can be used across different interfaces
//! without framework-specific derives. Interface layers (a future HTTP or MCP
//! surface) wrap these with their own derives and convert via `.into()`.
//!
//! Column lists travel inside the card-movement parameters because the
//! lifecycle engine never loads columns itself: the caller fetches the
//! board's column snapshot (see `Database::board_columns`) and passes it
//! with every move, cancel, or block request.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::models::{ColumnInfo, ColumnKind};

/// Generic parameters for operations requiring just an ID.
///
/// Used for operations like get_board, delete_board, get_card.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Id {
    /// The ID of the resource to operate on
    pub id: u64,
}

/// A column to create as part of a new board.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ColumnSpec {
    /// Display name of the column
    pub name: String,
    /// 0-based position of the column, unique per board
    pub order: u32,
    /// Kind of the column
    pub kind: ColumnKind,
}

/// Parameters for creating a new board with its columns.
///
/// A board must be created with at least one column. Keeping exactly one
/// `final` column (and one `cancel` column when cancellation is used) is the
/// caller's responsibility.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CreateBoard {
    /// Name of the board (required)
    pub name: String,
    /// Columns of the board
    #[serde(default)]
    pub columns: Vec<ColumnSpec>,
}

/// Parameters for creating a new card.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CreateCard {
    /// Title of the card (required)
    pub title: String,
    /// Optional detailed description of the card
    pub description: Option<String>,
    /// Column the card is created in
    pub column_id: u64,
}

/// Parameters for moving a card to the next column.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct MoveCard {
    /// ID of the card to move
    pub card_id: u64,
    /// Complete column snapshot of the card's board
    #[serde(default)]
    pub columns: Vec<ColumnInfo>,
}

/// Parameters for cancelling a card.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CancelCard {
    /// ID of the card to cancel
    pub card_id: u64,
    /// Column receiving the cancelled card
    pub cancel_column_id: u64,
    /// Complete column snapshot of the card's board
    #[serde(default)]
    pub columns: Vec<ColumnInfo>,
}

/// Parameters for blocking a card.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct BlockCard {
    /// ID of the card to block
    pub card_id: u64,
    /// Reason for blocking (required, non-empty)
    pub reason: String,
    /// Complete column snapshot of the card's board
    #[serde(default)]
    pub columns: Vec<ColumnInfo>,
}

/// Parameters for unblocking a card.
///
/// The reason is validated and logged as the unblock justification, but the
/// card itself only records the flag flip.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct UnblockCard {
    /// ID of the card to unblock
    pub card_id: u64,
    /// Reason for unblocking (required, non-empty)
    pub reason: String,
}
