//! Tests for the lifecycle engine against an in-memory store.

use std::collections::HashMap;

use jiff::Timestamp;

use super::*;
use crate::error::BoardError;
use crate::models::{Card, ColumnInfo, ColumnKind};

/// In-memory [`CardStore`] used to exercise the engine without a database.
#[derive(Default)]
struct MemoryStore {
    cards: HashMap<u64, Card>,
    next_id: u64,
}

impl CardStore for MemoryStore {
    fn find_by_id(&mut self, card_id: u64) -> crate::error::Result<Option<Card>> {
        Ok(self.cards.get(&card_id).cloned())
    }

    fn insert(&mut self, mut card: Card) -> crate::error::Result<Card> {
        self.next_id += 1;
        card.id = self.next_id;
        self.cards.insert(card.id, card.clone());
        Ok(card)
    }

    fn update(&mut self, card: &Card) -> crate::error::Result<()> {
        self.cards.insert(card.id, card.clone());
        Ok(())
    }
}

/// Store whose `update` always fails, standing in for a broken backend.
struct FailingStore(MemoryStore);

impl CardStore for FailingStore {
    fn find_by_id(&mut self, card_id: u64) -> crate::error::Result<Option<Card>> {
        self.0.find_by_id(card_id)
    }

    fn insert(&mut self, card: Card) -> crate::error::Result<Card> {
        self.0.insert(card)
    }

    fn update(&mut self, _card: &Card) -> crate::error::Result<()> {
        Err(BoardError::Configuration {
            message: "update failed".to_string(),
        })
    }
}

fn column(id: u64, order: u32, kind: ColumnKind) -> ColumnInfo {
    ColumnInfo { id, order, kind }
}

/// The three-column board from the movement examples: initial, pending,
/// final.
fn simple_board() -> Vec<ColumnInfo> {
    vec![
        column(1, 0, ColumnKind::Initial),
        column(2, 1, ColumnKind::Pending),
        column(3, 2, ColumnKind::Final),
    ]
}

fn board_with_cancel() -> Vec<ColumnInfo> {
    vec![
        column(1, 0, ColumnKind::Initial),
        column(2, 1, ColumnKind::Pending),
        column(3, 2, ColumnKind::Final),
        column(4, 3, ColumnKind::Cancel),
    ]
}

fn store_with_card(column_id: u64) -> (MemoryStore, u64) {
    let mut store = MemoryStore::default();
    let card = create(&mut store, "Test Card", None, column_id).expect("Failed to create card");
    (store, card.id)
}

fn blocked_card(store: &mut MemoryStore, card_id: u64) {
    let mut card = store.cards.get(&card_id).cloned().expect("card exists");
    card.blocked = true;
    card.block_reason = Some("waiting".to_string());
    store.cards.insert(card_id, card);
}

#[test]
fn test_create_card() {
    let mut store = MemoryStore::default();
    let card =
        create(&mut store, "New Card", Some("details"), 1).expect("Failed to create card");

    assert!(card.id > 0);
    assert_eq!(card.title, "New Card");
    assert_eq!(card.description, Some("details".to_string()));
    assert_eq!(card.column_id, 1);
    assert!(!card.blocked);
    assert_eq!(card.block_reason, None);
}

#[test]
fn test_create_card_blank_title() {
    let mut store = MemoryStore::default();

    for title in ["", "   "] {
        match create(&mut store, title, None, 1) {
            Err(BoardError::InvalidInput { field, .. }) => assert_eq!(field, "title"),
            other => panic!("Expected InvalidInput, got {other:?}"),
        }
    }
    assert!(store.cards.is_empty());
}

#[test]
fn test_move_walks_board_to_final() {
    let columns = simple_board();
    let (mut store, card_id) = store_with_card(1);

    let card = move_to_next_column(&mut store, card_id, &columns).expect("First move failed");
    assert_eq!(card.column_id, 2);

    let card = move_to_next_column(&mut store, card_id, &columns).expect("Second move failed");
    assert_eq!(card.column_id, 3);

    // Third move fails: the card reached the final column.
    match move_to_next_column(&mut store, card_id, &columns) {
        Err(BoardError::CardFinished { id }) => assert_eq!(id, card_id),
        other => panic!("Expected CardFinished, got {other:?}"),
    }
    assert_eq!(store.cards[&card_id].column_id, 3);
}

#[test]
fn test_move_uses_order_not_slice_position() {
    // Same board, shuffled slice. The engine must walk by order.
    let columns = vec![
        column(3, 2, ColumnKind::Final),
        column(1, 0, ColumnKind::Initial),
        column(2, 1, ColumnKind::Pending),
    ];
    let (mut store, card_id) = store_with_card(1);

    let card = move_to_next_column(&mut store, card_id, &columns).expect("Move failed");
    assert_eq!(card.column_id, 2);
}

#[test]
fn test_move_missing_card() {
    let mut store = MemoryStore::default();
    match move_to_next_column(&mut store, 404, &simple_board()) {
        Err(BoardError::CardNotFound { id }) => assert_eq!(id, 404),
        other => panic!("Expected CardNotFound, got {other:?}"),
    }
}

#[test]
fn test_move_blocked_card_fails_regardless_of_column() {
    let columns = simple_board();
    for column_id in [1, 2, 3] {
        let (mut store, card_id) = store_with_card(column_id);
        blocked_card(&mut store, card_id);

        match move_to_next_column(&mut store, card_id, &columns) {
            Err(BoardError::CardBlocked { id }) => assert_eq!(id, card_id),
            other => panic!("Expected CardBlocked, got {other:?}"),
        }
    }
}

#[test]
fn test_move_wrong_board_columns() {
    let (mut store, card_id) = store_with_card(1);
    // Columns of some other board: the card's column id 1 is absent.
    let other_board = vec![
        column(10, 0, ColumnKind::Initial),
        column(11, 1, ColumnKind::Final),
    ];

    match move_to_next_column(&mut store, card_id, &other_board) {
        Err(BoardError::ColumnMismatch { card_id: c, column_id }) => {
            assert_eq!(c, card_id);
            assert_eq!(column_id, 1);
        }
        other => panic!("Expected ColumnMismatch, got {other:?}"),
    }
}

#[test]
fn test_move_without_next_column() {
    // A single pending column: nothing follows order 0.
    let columns = vec![column(1, 0, ColumnKind::Pending)];
    let (mut store, card_id) = store_with_card(1);

    match move_to_next_column(&mut store, card_id, &columns) {
        Err(BoardError::NoNextColumn { order }) => assert_eq!(order, 1),
        other => panic!("Expected NoNextColumn, got {other:?}"),
    }
}

#[test]
fn test_move_out_of_cancel_column() {
    let columns = board_with_cancel();
    let (mut store, card_id) = store_with_card(4);

    match move_to_next_column(&mut store, card_id, &columns) {
        Err(BoardError::TerminalColumn { id, kind }) => {
            assert_eq!(id, card_id);
            assert_eq!(kind, ColumnKind::Cancel);
        }
        other => panic!("Expected TerminalColumn, got {other:?}"),
    }
}

#[test]
fn test_cancel_jumps_to_cancel_column() {
    let columns = board_with_cancel();
    let (mut store, card_id) = store_with_card(2);

    let card = cancel(&mut store, card_id, 4, &columns).expect("Cancel failed");
    assert_eq!(card.column_id, 4);
}

#[test]
fn test_cancel_unknown_column() {
    let columns = board_with_cancel();
    let (mut store, card_id) = store_with_card(1);

    match cancel(&mut store, card_id, 99, &columns) {
        Err(BoardError::ColumnNotFound { id }) => assert_eq!(id, 99),
        other => panic!("Expected ColumnNotFound, got {other:?}"),
    }
    assert_eq!(store.cards[&card_id].column_id, 1);
}

#[test]
fn test_cancel_finished_card() {
    let columns = board_with_cancel();
    let (mut store, card_id) = store_with_card(3);

    match cancel(&mut store, card_id, 4, &columns) {
        Err(BoardError::CardFinished { id }) => assert_eq!(id, card_id),
        other => panic!("Expected CardFinished, got {other:?}"),
    }
}

#[test]
fn test_cancel_blocked_card() {
    let columns = board_with_cancel();
    let (mut store, card_id) = store_with_card(1);
    blocked_card(&mut store, card_id);

    match cancel(&mut store, card_id, 4, &columns) {
        Err(BoardError::CardBlocked { id }) => assert_eq!(id, card_id),
        other => panic!("Expected CardBlocked, got {other:?}"),
    }
}

#[test]
fn test_cancel_requires_next_column() {
    // The card sits in the only column with no successor; cancellation is
    // only valid mid-flow.
    let columns = vec![column(1, 0, ColumnKind::Pending)];
    let (mut store, card_id) = store_with_card(1);

    match cancel(&mut store, card_id, 1, &columns) {
        Err(BoardError::NoNextColumn { order }) => assert_eq!(order, 1),
        other => panic!("Expected NoNextColumn, got {other:?}"),
    }
}

#[test]
fn test_block_and_unblock_round_trip() {
    let columns = simple_board();
    let (mut store, card_id) = store_with_card(2);

    let card = block(&mut store, card_id, "waiting on review", &columns).expect("Block failed");
    assert!(card.blocked);
    assert_eq!(card.block_reason, Some("waiting on review".to_string()));
    assert_eq!(card.column_id, 2);

    let card = unblock(&mut store, card_id, "review landed").expect("Unblock failed");
    assert!(!card.blocked);
    assert_eq!(card.block_reason, None);
    // Column assignment is untouched by the round trip.
    assert_eq!(card.column_id, 2);
}

#[test]
fn test_block_already_blocked() {
    let columns = simple_board();
    let (mut store, card_id) = store_with_card(1);
    block(&mut store, card_id, "first", &columns).expect("Block failed");

    match block(&mut store, card_id, "second", &columns) {
        Err(BoardError::AlreadyBlocked { id }) => assert_eq!(id, card_id),
        other => panic!("Expected AlreadyBlocked, got {other:?}"),
    }
    // The original reason survives.
    assert_eq!(
        store.cards[&card_id].block_reason,
        Some("first".to_string())
    );
}

#[test]
fn test_block_in_terminal_columns() {
    let columns = board_with_cancel();
    for (column_id, kind) in [(3, ColumnKind::Final), (4, ColumnKind::Cancel)] {
        let (mut store, card_id) = store_with_card(column_id);

        match block(&mut store, card_id, "too late", &columns) {
            Err(BoardError::TerminalColumn { id, kind: k }) => {
                assert_eq!(id, card_id);
                assert_eq!(k, kind);
            }
            other => panic!("Expected TerminalColumn, got {other:?}"),
        }
    }
}

#[test]
fn test_block_blank_reason() {
    let columns = simple_board();
    let (mut store, card_id) = store_with_card(1);

    match block(&mut store, card_id, "  ", &columns) {
        Err(BoardError::InvalidInput { field, .. }) => assert_eq!(field, "reason"),
        other => panic!("Expected InvalidInput, got {other:?}"),
    }
    assert!(!store.cards[&card_id].blocked);
}

#[test]
fn test_unblock_not_blocked() {
    let (mut store, card_id) = store_with_card(1);

    match unblock(&mut store, card_id, "nothing to do") {
        Err(BoardError::NotBlocked { id }) => assert_eq!(id, card_id),
        other => panic!("Expected NotBlocked, got {other:?}"),
    }
}

#[test]
fn test_unblock_blank_reason() {
    let (mut store, card_id) = store_with_card(1);
    blocked_card(&mut store, card_id);

    match unblock(&mut store, card_id, "") {
        Err(BoardError::InvalidInput { field, .. }) => assert_eq!(field, "reason"),
        other => panic!("Expected InvalidInput, got {other:?}"),
    }
    assert!(store.cards[&card_id].blocked);
}

#[test]
fn test_store_failure_propagates() {
    let columns = simple_board();
    let (inner, card_id) = store_with_card(1);
    let mut store = FailingStore(inner);

    let result = move_to_next_column(&mut store, card_id, &columns);
    assert!(result.is_err());
    // The card the failing store holds is unchanged.
    assert_eq!(store.0.cards[&card_id].column_id, 1);
}

#[test]
fn test_timestamps_advance_on_update() {
    let columns = simple_board();
    let (mut store, card_id) = store_with_card(1);
    let created: Timestamp = store.cards[&card_id].created_at;

    let card = move_to_next_column(&mut store, card_id, &columns).expect("Move failed");
    assert!(card.updated_at >= created);
    assert_eq!(card.created_at, created);
}
