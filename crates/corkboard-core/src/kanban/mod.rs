//! High-level async API for managing boards and cards.
//!
//! This module provides the main [`Kanban`] interface. It coordinates
//! between callers and the database, running every blocking database
//! operation on the tokio blocking pool.
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`Kanban`] instances with configuration
//! - [`board_ops`]: Board operations (create, get, columns, delete)
//! - [`card_ops`]: Card lifecycle operations (create, move, cancel, block, unblock)
//!
//! Card-movement methods take the board's column snapshot inside their
//! parameter structs; fetch it per call via [`Kanban::board_columns`]. The
//! snapshot is never cached between calls.

use std::path::PathBuf;

// Module declarations
pub mod board_ops;
pub mod builder;
pub mod card_ops;


// Re-export the main types
pub use builder::KanbanBuilder;

/// Main interface for managing boards and cards.
pub struct Kanban {
    pub(crate) db_path: PathBuf,
}

impl Kanban {
    /// Creates a new instance with the specified database path.
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }
}
