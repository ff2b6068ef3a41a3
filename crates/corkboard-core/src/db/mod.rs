//! Database operations and SQLite management for boards and cards.
//!
//! This module provides the persistence layer of Corkboard. It handles the
//! SQLite connection and schema, implements the lifecycle engine's
//! [`CardStore`](crate::lifecycle::CardStore) contract on top of rusqlite
//! transactions, and exposes one public method per board or card operation.
//! Each mutating method runs inside a single transaction: it commits at the
//! end, and every error path drops the transaction, which rolls all writes
//! back.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod board_queries;
pub mod card_queries;
pub mod schema;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
