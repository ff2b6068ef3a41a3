//! Board operations for the Kanban interface.

use tokio::task;

use super::Kanban;
use crate::{
    db::Database,
    error::{BoardError, Result},
    models::{Board, ColumnInfo},
    params::{CreateBoard, Id},
};

impl Kanban {
    /// Creates a new board together with its columns.
    pub async fn create_board(&self, params: &CreateBoard) -> Result<Board> {
        let db_path = self.db_path.clone();
        let name = params.name.clone();
        let columns = params.columns.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.create_board(&name, &columns)
        })
        .await
        .map_err(|e| BoardError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Retrieves a board with its ordered columns.
    pub async fn get_board(&self, params: &Id) -> Result<Option<Board>> {
        let db_path = self.db_path.clone();
        let board_id = params.id;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_board(board_id)
        })
        .await
        .map_err(|e| BoardError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Returns the column snapshot to pass into card lifecycle operations.
    pub async fn board_columns(&self, params: &Id) -> Result<Vec<ColumnInfo>> {
        let db_path = self.db_path.clone();
        let board_id = params.id;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.board_columns(board_id)
        })
        .await
        .map_err(|e| BoardError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Deletes a board with its columns and cards. Returns `false` when the
    /// board does not exist.
    pub async fn delete_board(&self, params: &Id) -> Result<bool> {
        let db_path = self.db_path.clone();
        let board_id = params.id;

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.delete_board(board_id)
        })
        .await
        .map_err(|e| BoardError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
