//! Card persistence and transactional lifecycle entry points.
//!
//! The [`CardStore`] contract is implemented directly on
//! [`rusqlite::Transaction`], so the lifecycle engine runs inside whatever
//! transaction the public `Database` method opened. Dropping the transaction
//! on an error path rolls back every write of the operation.

use jiff::Timestamp;
use log::debug;
use rusqlite::{params, types::Type, OptionalExtension, Transaction};

use crate::{
    error::{BoardError, DatabaseResultExt, Result},
    lifecycle::{self, CardStore},
    models::{Card, ColumnInfo},
};

// Optimized SQL queries as const strings for compile-time optimization
const CHECK_COLUMN_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM board_columns WHERE id = ?1)";
const SELECT_CARD_SQL: &str = "SELECT id, title, description, board_column_id, blocked, block_reason, created_at, updated_at FROM cards WHERE id = ?1";
const INSERT_CARD_SQL: &str = "INSERT INTO cards (title, description, board_column_id, blocked, block_reason, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";
const UPDATE_CARD_SQL: &str = "UPDATE cards SET title = ?1, description = ?2, board_column_id = ?3, blocked = ?4, block_reason = ?5, updated_at = ?6 WHERE id = ?7";

/// Helper function to construct a Card from a database row
fn build_card_from_row(row: &rusqlite::Row) -> rusqlite::Result<Card> {
    Ok(Card {
        id: row.get::<_, i64>(0)? as u64,
        title: row.get(1)?,
        description: row.get(2)?,
        column_id: row.get::<_, i64>(3)? as u64,
        blocked: row.get(4)?,
        block_reason: row.get(5)?,
        created_at: row
            .get::<_, String>(6)?
            .parse::<Timestamp>()
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(6, Type::Text, Box::new(e)))?,
        updated_at: row
            .get::<_, String>(7)?
            .parse::<Timestamp>()
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(7, Type::Text, Box::new(e)))?,
    })
}

impl CardStore for Transaction<'_> {
    fn find_by_id(&mut self, card_id: u64) -> Result<Option<Card>> {
        self.query_row(SELECT_CARD_SQL, params![card_id as i64], build_card_from_row)
            .optional()
            .map_err(|e| BoardError::database_error("Failed to query card", e))
    }

    fn insert(&mut self, mut card: Card) -> Result<Card> {
        self.execute(
            INSERT_CARD_SQL,
            params![
                &card.title,
                &card.description,
                card.column_id as i64,
                card.blocked,
                &card.block_reason,
                card.created_at.to_string(),
                card.updated_at.to_string(),
            ],
        )
        .map_err(|e| BoardError::database_error("Failed to insert card", e))?;

        card.id = self.last_insert_rowid() as u64;
        debug!("Inserted card row with ID {}", card.id);
        Ok(card)
    }

    fn update(&mut self, card: &Card) -> Result<()> {
        self.execute(
            UPDATE_CARD_SQL,
            params![
                &card.title,
                &card.description,
                card.column_id as i64,
                card.blocked,
                &card.block_reason,
                card.updated_at.to_string(),
                card.id as i64,
            ],
        )
        .map_err(|e| BoardError::database_error("Failed to update card", e))?;
        Ok(())
    }
}

impl super::Database {
    /// Creates a new card in the given column.
    pub fn create_card(
        &mut self,
        title: &str,
        description: Option<&str>,
        column_id: u64,
    ) -> Result<Card> {
        let mut tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        // The target column must resolve before the card is persisted.
        let column_exists: bool = tx
            .query_row(CHECK_COLUMN_EXISTS_SQL, params![column_id as i64], |row| {
                row.get(0)
            })
            .map_err(|e| BoardError::database_error("Failed to check column existence", e))?;

        if !column_exists {
            return Err(BoardError::invalid_input("column_id")
                .with_reason(format!("Column {column_id} does not exist")));
        }

        let card = lifecycle::create(&mut tx, title, description, column_id)?;

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(card)
    }

    /// Moves a card to the next column of its board.
    ///
    /// `columns` must be the complete column snapshot of the card's board,
    /// fetched by the caller (see [`board_columns`](Self::board_columns)).
    pub fn move_card(&mut self, card_id: u64, columns: &[ColumnInfo]) -> Result<Card> {
        let mut tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let card = lifecycle::move_to_next_column(&mut tx, card_id, columns)?;

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(card)
    }

    /// Moves a card directly into the cancel column.
    pub fn cancel_card(
        &mut self,
        card_id: u64,
        cancel_column_id: u64,
        columns: &[ColumnInfo],
    ) -> Result<Card> {
        let mut tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let card = lifecycle::cancel(&mut tx, card_id, cancel_column_id, columns)?;

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(card)
    }

    /// Blocks a card with the given reason.
    pub fn block_card(
        &mut self,
        card_id: u64,
        reason: &str,
        columns: &[ColumnInfo],
    ) -> Result<Card> {
        let mut tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let card = lifecycle::block(&mut tx, card_id, reason, columns)?;

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(card)
    }

    /// Unblocks a card.
    pub fn unblock_card(&mut self, card_id: u64, reason: &str) -> Result<Card> {
        let mut tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let card = lifecycle::unblock(&mut tx, card_id, reason)?;

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(card)
    }

    /// Retrieves a single card by its ID.
    pub fn get_card(&self, card_id: u64) -> Result<Option<Card>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_CARD_SQL)
            .map_err(|e| BoardError::database_error("Failed to prepare query", e))?;

        let card = stmt
            .query_row(params![card_id as i64], build_card_from_row)
            .optional()
            .map_err(|e| BoardError::database_error("Failed to get card", e))?;

        Ok(card)
    }
}
