//! Data models for boards, columns, and cards.
//!
//! The models mirror the persisted rows: a [`Board`] owns an ordered set of
//! [`BoardColumn`]s, and a [`Card`] references its column by id only. The
//! lifecycle engine never receives live column objects; it works on
//! [`ColumnInfo`] snapshots supplied by the caller per operation, which keeps
//! the card state machine free of back references into the board graph.

pub mod board;
pub mod card;
pub mod column;
pub mod kind;


// Re-export all public types at the models level
pub use board::Board;
pub use card::Card;
pub use column::{BoardColumn, ColumnInfo};
pub use kind::ColumnKind;
