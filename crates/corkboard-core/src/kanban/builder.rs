//! Builder for creating and configuring Kanban instances.

use std::path::{Path, PathBuf};

use tokio::task;

use super::Kanban;
use crate::{
    db::Database,
    error::{BoardError, Result},
};

/// Builder for creating and configuring Kanban instances.
#[derive(Debug, Clone)]
pub struct KanbanBuilder {
    database_path: Option<PathBuf>,
}

impl KanbanBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/corkboard/corkboard.db` or
    /// `~/.local/share/corkboard/corkboard.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the configured Kanban instance.
    ///
    /// # Errors
    ///
    /// Returns `BoardError::FileSystem` if the database path is invalid
    /// Returns `BoardError::Database` if database initialization fails
    pub async fn build(self) -> Result<Kanban> {
        let db_path = if let Some(path) = self.database_path {
            path
        } else {
            Self::default_database_path()?
        };

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| BoardError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || {
            let _db = Database::new(&db_path_clone)?;
            Ok::<(), BoardError>(())
        })
        .await
        .map_err(|e| BoardError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        Ok(Kanban::new(db_path))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("corkboard")
            .place_data_file("corkboard.db")
            .map_err(|e| BoardError::XdgDirectory(e.to_string()))
    }
}

impl Default for KanbanBuilder {
    fn default() -> Self {
        Self::new()
    }
}
