//! Column kind enumeration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of column kinds.
///
/// The kind decides how the lifecycle engine treats cards sitting in the
/// column: cards in `Final` or `Cancel` columns are terminal and accept no
/// further transitions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub enum ColumnKind {
    /// First column of a board, where new cards are created
    Initial,

    /// Intermediate column a card passes through
    Pending,

    /// Last regular column; cards here are finished
    Final,

    /// Column receiving cancelled cards
    Cancel,
}

impl FromStr for ColumnKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "initial" => Ok(ColumnKind::Initial),
            "pending" => Ok(ColumnKind::Pending),
            "final" => Ok(ColumnKind::Final),
            "cancel" => Ok(ColumnKind::Cancel),
            _ => Err(format!("Invalid column kind: {s}")),
        }
    }
}

impl ColumnKind {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnKind::Initial => "initial",
            ColumnKind::Pending => "pending",
            ColumnKind::Final => "final",
            ColumnKind::Cancel => "cancel",
        }
    }

    /// Whether cards in a column of this kind have reached a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, ColumnKind::Final | ColumnKind::Cancel)
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
