//! Reorder engine
//!
//! Pure transitions from `(Board, DragSession, DragEvent)` to a new
//! `(Board, DragSession)`. Items move live while hovering; columns only
//! move when dropped. Stale or malformed references degrade to no-ops.

use tracing::{debug, trace};

use crate::domain::Board;
use crate::drag::event::{DragEnd, DragEvent, DragOver, DragRef};
use crate::drag::session::DragSession;

/// Applies one drag event.
///
/// Over and end events are only honoured for the entity held in `session`;
/// anything else is stale. A hover repeating the previous target is
/// ignored, so a burst of identical over events settles after the first.
/// Any end event leaves the session cleared.
pub fn reduce(board: Board, session: DragSession, event: &DragEvent) -> (Board, DragSession) {
    match event {
        DragEvent::Start { active } => {
            let session = DragSession::capture(&board, *active);
            if session.is_dragging() {
                debug!(active = %active, kind = %active.kind(), "drag started");
            } else {
                debug!(active = %active, "drag start for unknown entity ignored");
            }
            (board, session)
        }
        DragEvent::Over(over) => {
            if session.active() != Some(over.active) {
                trace!(active = %over.active, "drag over for entity not being dragged");
                return (board, session);
            }
            if over.over.is_some() && session.hovering() == over.over {
                trace!(active = %over.active, "repeated hover ignored");
                return (board, session);
            }
            let board = drag_over(board, over);
            let session = session.refreshed(&board).hovered(over.over);
            (board, session)
        }
        DragEvent::End(end) => {
            if !session.is_dragging() {
                trace!("drag end while idle ignored");
            } else if end.active != session.active() {
                debug!(active = ?end.active, "drop for entity not being dragged, nothing committed");
            } else {
                return (drag_end(board, end), DragSession::NoDrag);
            }
            (board, DragSession::NoDrag)
        }
    }
}

/// Handles the pointer hovering a candidate target.
///
/// Only item drags react here. Hovering another item adopts that item's
/// column and takes its slot; hovering a column adopts the column without
/// changing position.
pub fn drag_over(mut board: Board, event: &DragOver) -> Board {
    let Some(over) = event.over else {
        return board;
    };
    if event.active == over {
        trace!(active = %over, "drag over self");
        return board;
    }
    let DragRef::Item(active_id) = event.active else {
        return board;
    };
    let Some(from) = board.item_index(active_id) else {
        trace!(active = %active_id, "drag over with stale active item");
        return board;
    };

    match over {
        DragRef::Item(over_id) => {
            let Some(to) = board.item_index(over_id) else {
                trace!(over = %over_id, "drag over stale item");
                return board;
            };
            let items = board.items_mut();
            let target_column = items[to].column_id();
            let crosses_column = !items[from].belongs_to(target_column);
            items[from].reassign(target_column);

            // Entering a column from above lands in front of the hovered item.
            let to = if crosses_column && from < to { to - 1 } else { to };
            move_within(items, from, to);
            trace!(
                item = %active_id,
                column = %target_column,
                from,
                to,
                "moved item over item"
            );
        }
        DragRef::Column(column_id) => {
            if !board.has_column(column_id) {
                trace!(column = %column_id, "drag over stale column");
                return board;
            }
            board.items_mut()[from].reassign(column_id);
            trace!(item = %active_id, column = %column_id, "moved item over column");
        }
    }

    board
}

/// Handles the drop. Only column-on-column drops commit a move; item
/// positions were already settled while hovering.
pub fn drag_end(mut board: Board, event: &DragEnd) -> Board {
    match (event.active, event.over) {
        (_, None) => {
            debug!("drag cancelled without a target");
        }
        (Some(DragRef::Column(active)), Some(DragRef::Column(over))) => {
            let (Some(from), Some(to)) = (board.column_index(active), board.column_index(over))
            else {
                debug!(active = %active, over = %over, "drop with stale column ignored");
                return board;
            };
            if from != to {
                move_within(board.columns_mut(), from, to);
                debug!(column = %active, from, to, "reordered column");
            }
        }
        (active, Some(over)) => {
            trace!(active = ?active, over = %over, "drop without positional commit");
        }
    }
    board
}

/// Removes the element at `from` and reinserts it at `to`, shifting the
/// elements in between by one.
fn move_within<T>(slice: &mut [T], from: usize, to: usize) {
    if from < to {
        slice[from..=to].rotate_left(1);
    } else if from > to {
        slice[to..=from].rotate_right(1);
    }
}
