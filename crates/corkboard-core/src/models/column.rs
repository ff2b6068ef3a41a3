//! Column model and the per-call column snapshot.

use serde::{Deserialize, Serialize};

use super::ColumnKind;

/// A column as persisted on a board.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BoardColumn {
    /// Unique identifier for the column
    pub id: u64,

    /// Board the column belongs to
    pub board_id: u64,

    /// Display name of the column
    pub name: String,

    /// 0-based position of the column, unique per board
    pub order: u32,

    /// Kind deciding how the lifecycle engine treats cards in this column
    pub kind: ColumnKind,
}

impl BoardColumn {
    /// The snapshot tuple passed to lifecycle operations.
    pub fn info(&self) -> ColumnInfo {
        ColumnInfo {
            id: self.id,
            order: self.order,
            kind: self.kind,
        }
    }
}

/// Read-only column snapshot supplied by the caller per lifecycle operation.
///
/// The engine looks columns up by `id` and walks them by `order`; it never
/// assumes the slice is sorted and never caches it across calls.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct ColumnInfo {
    /// Column identifier
    pub id: u64,

    /// 0-based position within the board
    pub order: u32,

    /// Column kind
    pub kind: ColumnKind,
}

impl From<&BoardColumn> for ColumnInfo {
    fn from(column: &BoardColumn) -> Self {
        column.info()
    }
}
