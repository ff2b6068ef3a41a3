use corkboard_core::models::ColumnKind;
use corkboard_core::params::ColumnSpec;
use corkboard_core::{Kanban, KanbanBuilder};
use tempfile::TempDir;

/// Helper function to create a test Kanban instance
pub async fn create_test_kanban() -> (TempDir, Kanban) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let kanban = KanbanBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create kanban");
    (temp_dir, kanban)
}

/// The standard four-column board used across tests.
pub fn standard_columns() -> Vec<ColumnSpec> {
    vec![
        ColumnSpec {
            name: "To Do".to_string(),
            order: 0,
            kind: ColumnKind::Initial,
        },
        ColumnSpec {
            name: "Doing".to_string(),
            order: 1,
            kind: ColumnKind::Pending,
        },
        ColumnSpec {
            name: "Done".to_string(),
            order: 2,
            kind: ColumnKind::Final,
        },
        ColumnSpec {
            name: "Cancelled".to_string(),
            order: 3,
            kind: ColumnKind::Cancel,
        },
    ]
}
