//! Card lifecycle state machine.
//!
//! This module owns the rules deciding where a card may go: creation in a
//! column, forward movement one column at a time, cancellation into the
//! cancel column, and blocking/unblocking. Persistence is delegated to a
//! [`CardStore`] collaborator so the rules stay independent of SQL; the
//! database layer implements the trait on its transaction and wraps each
//! operation in a commit/rollback boundary.
//!
//! Per card the machine has two active states, in-column and blocked, and
//! becomes terminal once the card's column resolves to a `final` or `cancel`
//! kind:
//!
//! ```text
//!                 move (order + 1) / cancel (jump)
//!   ┌──────────┐ ────────────────────────────────▶ ┌──────────┐
//!   │ InColumn │                                   │ terminal │
//!   └──────────┘ ◀── unblock ── ┌─────────┐        └──────────┘
//!        │                      │ Blocked │          (no exits)
//!        └────── block ───────▶ └─────────┘
//! ```
//!
//! Every operation re-validates against current persisted state before the
//! first write, so re-invocation after a failure is safe.
//!
//! The column list is a read-only snapshot supplied by the caller on every
//! call. It may arrive unsorted: the next column is found by `order`, never
//! by slice position.

use jiff::Timestamp;
use log::{info, warn};

use crate::{
    error::{BoardError, Result},
    models::{Card, ColumnInfo, ColumnKind},
};

#[cfg(test)]
mod tests;

/// Persistence contract consumed by the lifecycle operations.
///
/// The store owns no business rules; the engine always hands it a fully
/// populated card, so `update` is a full-row overwrite.
pub trait CardStore {
    /// Looks a card up by its ID.
    fn find_by_id(&mut self, card_id: u64) -> Result<Option<Card>>;

    /// Inserts a card and returns it with its assigned ID.
    fn insert(&mut self, card: Card) -> Result<Card>;

    /// Overwrites the stored row for the given card.
    fn update(&mut self, card: &Card) -> Result<()>;
}

/// Creates a new card in the given column.
///
/// The card starts unblocked. Whether `column_id` resolves to an existing
/// column is checked by the database layer before the insert; this function
/// only validates the title.
pub fn create<S: CardStore>(
    store: &mut S,
    title: &str,
    description: Option<&str>,
    column_id: u64,
) -> Result<Card> {
    if title.trim().is_empty() {
        return Err(BoardError::invalid_input("title").with_reason("Card title must not be empty"));
    }

    let now = Timestamp::now();
    let card = store.insert(Card {
        id: 0,
        title: title.into(),
        description: description.map(String::from),
        column_id,
        blocked: false,
        block_reason: None,
        created_at: now,
        updated_at: now,
    })?;
    info!("Created card {} in column {}", card.id, card.column_id);
    Ok(card)
}

/// Moves a card to the column following its current one.
///
/// The next column is the one whose `order` equals the current column's
/// `order` plus one. Fails if the card is blocked, already sits in a
/// terminal column, or no next column exists.
pub fn move_to_next_column<S: CardStore>(
    store: &mut S,
    card_id: u64,
    columns: &[ColumnInfo],
) -> Result<Card> {
    let mut card = require_card(store, card_id)?;
    if card.blocked {
        warn!("Refusing to move blocked card {card_id}");
        return Err(BoardError::CardBlocked { id: card_id });
    }

    let current = current_column(&card, columns)?;
    check_not_terminal(&card, current)?;
    let next = next_column(current, columns)?;

    info!(
        "Moving card {card_id} from column {} to column {}",
        current.id, next.id
    );
    card.column_id = next.id;
    card.updated_at = Timestamp::now();
    store.update(&card)?;
    Ok(card)
}

/// Moves a card directly into the cancel column, bypassing the ordering.
///
/// Cancellation is only valid mid-flow: the same preconditions as a forward
/// move apply, including that a next column exists. The target column must
/// be part of the supplied snapshot.
pub fn cancel<S: CardStore>(
    store: &mut S,
    card_id: u64,
    cancel_column_id: u64,
    columns: &[ColumnInfo],
) -> Result<Card> {
    let mut card = require_card(store, card_id)?;
    if card.blocked {
        warn!("Refusing to cancel blocked card {card_id}");
        return Err(BoardError::CardBlocked { id: card_id });
    }

    let current = current_column(&card, columns)?;
    check_not_terminal(&card, current)?;
    // A card that could not move forward cannot be cancelled either.
    next_column(current, columns)?;

    let target = columns
        .iter()
        .find(|column| column.id == cancel_column_id)
        .ok_or(BoardError::ColumnNotFound {
            id: cancel_column_id,
        })?;

    info!(
        "Cancelling card {card_id}: column {} -> {}",
        current.id, target.id
    );
    card.column_id = target.id;
    card.updated_at = Timestamp::now();
    store.update(&card)?;
    Ok(card)
}

/// Blocks a card with the given reason.
///
/// Cards in terminal columns cannot be blocked; blocking an already blocked
/// card is an error rather than a reason overwrite.
pub fn block<S: CardStore>(
    store: &mut S,
    card_id: u64,
    reason: &str,
    columns: &[ColumnInfo],
) -> Result<Card> {
    if reason.trim().is_empty() {
        return Err(
            BoardError::invalid_input("reason").with_reason("Block reason must not be empty")
        );
    }

    let mut card = require_card(store, card_id)?;
    if card.blocked {
        return Err(BoardError::AlreadyBlocked { id: card_id });
    }

    let current = current_column(&card, columns)?;
    if current.kind.is_terminal() {
        return Err(BoardError::TerminalColumn {
            id: card_id,
            kind: current.kind,
        });
    }

    info!("Blocking card {card_id}: {reason}");
    card.blocked = true;
    card.block_reason = Some(reason.into());
    card.updated_at = Timestamp::now();
    store.update(&card)?;
    Ok(card)
}

/// Unblocks a card, clearing its block reason.
///
/// The unblock reason is required and logged but not persisted on the card;
/// recording it durably is an audit concern outside this engine.
pub fn unblock<S: CardStore>(store: &mut S, card_id: u64, reason: &str) -> Result<Card> {
    if reason.trim().is_empty() {
        return Err(
            BoardError::invalid_input("reason").with_reason("Unblock reason must not be empty")
        );
    }

    let mut card = require_card(store, card_id)?;
    if !card.blocked {
        return Err(BoardError::NotBlocked { id: card_id });
    }

    info!("Unblocking card {card_id}: {reason}");
    card.blocked = false;
    card.block_reason = None;
    card.updated_at = Timestamp::now();
    store.update(&card)?;
    Ok(card)
}

fn require_card<S: CardStore>(store: &mut S, card_id: u64) -> Result<Card> {
    store
        .find_by_id(card_id)?
        .ok_or(BoardError::CardNotFound { id: card_id })
}

/// Resolves the card's current column within the supplied snapshot.
///
/// A miss means the caller passed the columns of a different board.
fn current_column<'a>(card: &Card, columns: &'a [ColumnInfo]) -> Result<&'a ColumnInfo> {
    columns
        .iter()
        .find(|column| column.id == card.column_id)
        .ok_or(BoardError::ColumnMismatch {
            card_id: card.id,
            column_id: card.column_id,
        })
}

/// Finds the column whose order follows the current one.
fn next_column<'a>(current: &ColumnInfo, columns: &'a [ColumnInfo]) -> Result<&'a ColumnInfo> {
    let wanted = current.order + 1;
    columns
        .iter()
        .find(|column| column.order == wanted)
        .ok_or(BoardError::NoNextColumn { order: wanted })
}

fn check_not_terminal(card: &Card, current: &ColumnInfo) -> Result<()> {
    match current.kind {
        ColumnKind::Final => {
            warn!("Card {} has already been finished", card.id);
            Err(BoardError::CardFinished { id: card.id })
        }
        ColumnKind::Cancel => Err(BoardError::TerminalColumn {
            id: card.id,
            kind: current.kind,
        }),
        ColumnKind::Initial | ColumnKind::Pending => Ok(()),
    }
}
