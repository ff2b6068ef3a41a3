//! Card lifecycle operations for the Kanban interface.

use tokio::task;

use super::Kanban;
use crate::{
    db::Database,
    error::{BoardError, Result},
    models::Card,
    params::{BlockCard, CancelCard, CreateCard, Id, MoveCard, UnblockCard},
};

impl Kanban {
    /// Creates a new card in the given column.
    pub async fn create_card(&self, params: &CreateCard) -> Result<Card> {
        let db_path = self.db_path.clone();
        let title = params.title.clone();
        let description = params.description.clone();
        let column_id = params.column_id;

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.create_card(&title, description.as_deref(), column_id)
        })
        .await
        .map_err(|e| BoardError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Moves a card to the next column of its board.
    pub async fn move_card(&self, params: &MoveCard) -> Result<Card> {
        let db_path = self.db_path.clone();
        let card_id = params.card_id;
        let columns = params.columns.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.move_card(card_id, &columns)
        })
        .await
        .map_err(|e| BoardError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Moves a card directly into the cancel column.
    pub async fn cancel_card(&self, params: &CancelCard) -> Result<Card> {
        let db_path = self.db_path.clone();
        let card_id = params.card_id;
        let cancel_column_id = params.cancel_column_id;
        let columns = params.columns.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.cancel_card(card_id, cancel_column_id, &columns)
        })
        .await
        .map_err(|e| BoardError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Blocks a card with a reason.
    pub async fn block_card(&self, params: &BlockCard) -> Result<Card> {
        let db_path = self.db_path.clone();
        let card_id = params.card_id;
        let reason = params.reason.clone();
        let columns = params.columns.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.block_card(card_id, &reason, &columns)
        })
        .await
        .map_err(|e| BoardError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Unblocks a card.
    pub async fn unblock_card(&self, params: &UnblockCard) -> Result<Card> {
        let db_path = self.db_path.clone();
        let card_id = params.card_id;
        let reason = params.reason.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.unblock_card(card_id, &reason)
        })
        .await
        .map_err(|e| BoardError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Retrieves a single card by its ID.
    pub async fn get_card(&self, params: &Id) -> Result<Option<Card>> {
        let db_path = self.db_path.clone();
        let card_id = params.id;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_card(card_id)
        })
        .await
        .map_err(|e| BoardError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
