//! Core library for the Corkboard kanban application.
//!
//! This crate provides the business logic for managing boards, columns, and
//! cards, including database operations, data models, and error handling.
//!
//! # Card Lifecycle
//!
//! The heart of the crate is the [`lifecycle`] module: a small state machine
//! deciding where a card may go. Cards are created in a column, move forward
//! one column at a time following the columns' `order`, may be blocked and
//! unblocked while active, and may be cancelled into the board's cancel
//! column. Once a card sits in a `final` or `cancel` column it is terminal
//! and rejects every further transition.
//!
//! Column lists are supplied by the caller on every operation; the engine
//! never loads or caches them. Each operation runs in a single SQLite
//! transaction that commits at the end or rolls back on any error.
//!
//! # Quick Start
//!
//! ```rust
//! use corkboard_core::{KanbanBuilder, models::ColumnKind};
//! use corkboard_core::params::{ColumnSpec, CreateBoard, CreateCard, Id, MoveCard};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let kanban = KanbanBuilder::new()
//!     .with_database_path(Some("board.db"))
//!     .build()
//!     .await?;
//!
//! // Create a board with an initial, a final, and a cancel column
//! let board = kanban
//!     .create_board(&CreateBoard {
//!         name: "Sprint 12".to_string(),
//!         columns: vec![
//!             ColumnSpec { name: "To Do".into(), order: 0, kind: ColumnKind::Initial },
//!             ColumnSpec { name: "Done".into(), order: 1, kind: ColumnKind::Final },
//!             ColumnSpec { name: "Dropped".into(), order: 2, kind: ColumnKind::Cancel },
//!         ],
//!     })
//!     .await?;
//!
//! // Create a card and move it forward
//! let columns = kanban.board_columns(&Id { id: board.id }).await?;
//! let card = kanban
//!     .create_card(&CreateCard {
//!         title: "Write release notes".to_string(),
//!         description: None,
//!         column_id: columns[0].id,
//!     })
//!     .await?;
//! let card = kanban.move_card(&MoveCard { card_id: card.id, columns }).await?;
//! println!("Card {} is now in column {}", card.id, card.column_id);
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod error;
pub mod kanban;
pub mod lifecycle;
pub mod models;
pub mod params;

// Re-export commonly used types
pub use db::Database;
pub use error::{BoardError, Result};
pub use kanban::{Kanban, KanbanBuilder};
pub use lifecycle::CardStore;
pub use models::{Board, BoardColumn, Card, ColumnInfo, ColumnKind};
pub use params::{
    BlockCard, CancelCard, ColumnSpec, CreateBoard, CreateCard, Id, MoveCard, UnblockCard,
};
