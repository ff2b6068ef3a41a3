//! Board and column CRUD operations and queries.

use jiff::Timestamp;
use log::{debug, info};
use rusqlite::{params, types::Type, OptionalExtension};

use crate::{
    error::{BoardError, DatabaseResultExt, Result},
    models::{Board, BoardColumn, ColumnInfo, ColumnKind},
    params::ColumnSpec,
};

// Optimized SQL queries as const strings for compile-time optimization
const INSERT_BOARD_SQL: &str =
    "INSERT INTO boards (name, created_at, updated_at) VALUES (?1, ?2, ?3)";
const INSERT_COLUMN_SQL: &str =
    "INSERT INTO board_columns (board_id, name, column_order, kind) VALUES (?1, ?2, ?3, ?4)";
const SELECT_BOARD_SQL: &str = "SELECT id, name, created_at, updated_at FROM boards WHERE id = ?1";
const SELECT_COLUMNS_SQL: &str = "SELECT id, board_id, name, column_order, kind FROM board_columns WHERE board_id = ?1 ORDER BY column_order";
const CHECK_BOARD_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM boards WHERE id = ?1)";
const DELETE_BOARD_SQL: &str = "DELETE FROM boards WHERE id = ?1";

/// Helper function to construct a BoardColumn from a database row
fn build_column_from_row(row: &rusqlite::Row) -> rusqlite::Result<BoardColumn> {
    let kind_str: String = row.get(4)?;
    let kind = kind_str.parse::<ColumnKind>().map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            4,
            Type::Text,
            format!("Invalid column kind: {kind_str}").into(),
        )
    })?;

    Ok(BoardColumn {
        id: row.get::<_, i64>(0)? as u64,
        board_id: row.get::<_, i64>(1)? as u64,
        name: row.get(2)?,
        order: row.get::<_, i64>(3)? as u32,
        kind,
    })
}

impl super::Database {
    /// Creates a new board together with its columns.
    ///
    /// The board and all columns are inserted in one transaction; a failing
    /// column insert leaves no board behind.
    pub fn create_board(&mut self, name: &str, columns: &[ColumnSpec]) -> Result<Board> {
        if name.trim().is_empty() {
            return Err(
                BoardError::invalid_input("name").with_reason("Board name must not be empty")
            );
        }
        if columns.is_empty() {
            return Err(BoardError::invalid_input("columns")
                .with_reason("A board must have at least one column"));
        }

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now = Timestamp::now();
        let now_str = now.to_string();

        tx.execute(INSERT_BOARD_SQL, params![name, &now_str, &now_str])
            .map_err(|e| BoardError::database_error("Failed to insert board", e))?;

        let board_id = tx.last_insert_rowid() as u64;

        let mut board_columns = Vec::with_capacity(columns.len());
        for column in columns {
            tx.execute(
                INSERT_COLUMN_SQL,
                params![
                    board_id as i64,
                    &column.name,
                    column.order as i64,
                    column.kind.as_str(),
                ],
            )
            .map_err(|e| BoardError::database_error("Failed to insert board column", e))?;

            board_columns.push(BoardColumn {
                id: tx.last_insert_rowid() as u64,
                board_id,
                name: column.name.clone(),
                order: column.order,
                kind: column.kind,
            });
        }

        tx.commit().db_context("Failed to commit transaction")?;

        info!("Created board {board_id} with {} columns", board_columns.len());
        board_columns.sort_by_key(|c| c.order);
        Ok(Board {
            id: board_id,
            name: name.into(),
            created_at: now,
            updated_at: now,
            columns: board_columns,
        })
    }

    /// Retrieves a board with its ordered columns.
    pub fn get_board(&self, board_id: u64) -> Result<Option<Board>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_BOARD_SQL)
            .map_err(|e| BoardError::database_error("Failed to prepare query", e))?;

        let mut board = stmt
            .query_row(params![board_id as i64], |row| {
                Ok(Board {
                    id: row.get::<_, i64>(0)? as u64,
                    name: row.get(1)?,
                    created_at: row.get::<_, String>(2)?.parse::<Timestamp>().map_err(|e| {
                        rusqlite::Error::FromSqlConversionFailure(2, Type::Text, Box::new(e))
                    })?,
                    updated_at: row.get::<_, String>(3)?.parse::<Timestamp>().map_err(|e| {
                        rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(e))
                    })?,
                    columns: Vec::new(),
                })
            })
            .optional()
            .map_err(|e| BoardError::database_error("Failed to query board", e))?;

        if let Some(ref mut board) = board {
            board.columns = self.get_columns(board.id)?;
        }

        Ok(board)
    }

    /// Retrieves the ordered columns of a board.
    pub fn get_columns(&self, board_id: u64) -> Result<Vec<BoardColumn>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_COLUMNS_SQL)
            .map_err(|e| BoardError::database_error("Failed to prepare query", e))?;

        let columns = stmt
            .query_map(params![board_id as i64], build_column_from_row)
            .map_err(|e| BoardError::database_error("Failed to query columns", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| BoardError::database_error("Failed to fetch columns", e))?;

        Ok(columns)
    }

    /// Returns the column snapshot callers pass to card lifecycle operations.
    ///
    /// Fails with `BoardNotFound` when the board does not exist, so an empty
    /// board is distinguishable from a missing one.
    pub fn board_columns(&self, board_id: u64) -> Result<Vec<ColumnInfo>> {
        let board_exists: bool = self
            .connection
            .query_row(CHECK_BOARD_EXISTS_SQL, params![board_id as i64], |row| {
                row.get(0)
            })
            .map_err(|e| BoardError::database_error("Failed to check board existence", e))?;

        if !board_exists {
            return Err(BoardError::BoardNotFound { id: board_id });
        }

        let columns = self.get_columns(board_id)?;
        Ok(columns.iter().map(ColumnInfo::from).collect())
    }

    /// Deletes a board with its columns and cards.
    ///
    /// Returns `false` when no board with the given ID exists.
    pub fn delete_board(&mut self, board_id: u64) -> Result<bool> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let board_exists: bool = tx
            .query_row(CHECK_BOARD_EXISTS_SQL, params![board_id as i64], |row| {
                row.get(0)
            })
            .map_err(|e| BoardError::database_error("Failed to check board existence", e))?;

        if !board_exists {
            debug!("No board with ID {board_id} to delete");
            return Ok(false);
        }

        // Columns and cards go with the board via ON DELETE CASCADE.
        tx.execute(DELETE_BOARD_SQL, params![board_id as i64])
            .map_err(|e| BoardError::database_error("Failed to delete board", e))?;

        tx.commit().db_context("Failed to commit transaction")?;

        info!("Deleted board {board_id}");
        Ok(true)
    }
}
