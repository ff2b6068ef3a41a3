//! Card model definition.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Represents a card on a board.
///
/// The owning column is referenced by id only; resolving it against the
/// board's columns is the job of the lifecycle engine, which receives the
/// column list from the caller on every operation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Card {
    /// Unique identifier for the card
    pub id: u64,

    /// Title of the card
    pub title: String,

    /// Detailed description of the card
    pub description: Option<String>,

    /// Column the card currently sits in
    pub column_id: u64,

    /// Whether the card is blocked
    pub blocked: bool,

    /// Reason given when the card was blocked; present iff `blocked`
    pub block_reason: Option<String>,

    /// Timestamp when the card was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the card was last modified (UTC)
    pub updated_at: Timestamp,
}
