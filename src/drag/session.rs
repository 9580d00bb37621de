use serde::Serialize;

use crate::domain::{Board, Column, Item};
use crate::drag::event::{DragKind, DragRef};

/// What is currently being dragged, if anything
///
/// Holds an owned snapshot taken at drag start, never a reference into the
/// board, so live edits and the preview cannot alias.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DragSession {
    #[default]
    NoDrag,
    Column {
        column: Column,
    },
    Item {
        item: Item,
        /// Target of the most recent hover, if any
        #[serde(skip)]
        hovering: Option<DragRef>,
    },
}

/// What the floating overlay should render
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DragPreview {
    Column { column: Column, items: Vec<Item> },
    Item { item: Item },
}

impl DragSession {
    pub fn begin_column(column: Column) -> Self {
        Self::Column { column }
    }

    pub fn begin_item(item: Item) -> Self {
        Self::Item {
            item,
            hovering: None,
        }
    }

    /// Snapshots `target` from the board. Unknown targets yield `NoDrag`.
    pub fn capture(board: &Board, target: DragRef) -> Self {
        match target {
            DragRef::Column(id) => board
                .column(id)
                .cloned()
                .map(Self::begin_column)
                .unwrap_or_default(),
            DragRef::Item(id) => board
                .item(id)
                .cloned()
                .map(Self::begin_item)
                .unwrap_or_default(),
        }
    }

    pub fn clear(&mut self) {
        *self = Self::NoDrag;
    }

    pub fn is_dragging(&self) -> bool {
        !matches!(self, Self::NoDrag)
    }

    pub fn kind(&self) -> Option<DragKind> {
        self.active().map(|active| active.kind())
    }

    pub fn active(&self) -> Option<DragRef> {
        match self {
            Self::NoDrag => None,
            Self::Column { column } => Some(DragRef::Column(column.id)),
            Self::Item { item, .. } => Some(DragRef::Item(item.id)),
        }
    }

    /// The target the dragged item was last hovered over
    pub fn hovering(&self) -> Option<DragRef> {
        match self {
            Self::Item { hovering, .. } => *hovering,
            _ => None,
        }
    }

    pub(crate) fn hovered(self, target: Option<DragRef>) -> Self {
        match self {
            Self::Item { item, .. } => Self::Item {
                item,
                hovering: target,
            },
            other => other,
        }
    }

    /// Replaces the snapshot with the live board entry, when it still exists.
    pub(crate) fn refreshed(self, board: &Board) -> Self {
        let live = match &self {
            Self::NoDrag => None,
            Self::Column { column } => board.column(column.id).cloned().map(Self::begin_column),
            Self::Item { item, hovering } => board.item(item.id).cloned().map(|item| Self::Item {
                item,
                hovering: *hovering,
            }),
        };
        live.unwrap_or(self)
    }

    /// Resolves the overlay contents, preferring live board state over the
    /// snapshot.
    pub fn preview(&self, board: &Board) -> Option<DragPreview> {
        match self {
            Self::NoDrag => None,
            Self::Column { column } => {
                let column = board.column(column.id).unwrap_or(column).clone();
                let items = board.items_of(column.id).cloned().collect();
                Some(DragPreview::Column { column, items })
            }
            Self::Item { item, .. } => Some(DragPreview::Item {
                item: board.item(item.id).unwrap_or(item).clone(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ColumnId, ItemId};

    #[test]
    fn test_default_is_no_drag() {
        let session = DragSession::default();
        assert!(!session.is_dragging());
        assert_eq!(session.kind(), None);
        assert_eq!(session.active(), None);
    }

    #[test]
    fn test_capture_and_clear() {
        let mut board = Board::default();
        let column = board.add_column(None);
        let item = board.add_item(column.id).unwrap();

        let mut session = DragSession::capture(&board, DragRef::Item(item.id));
        assert!(session.is_dragging());
        assert_eq!(session.kind(), Some(DragKind::Item));
        assert_eq!(session.active(), Some(DragRef::Item(item.id)));

        session.clear();
        assert_eq!(session, DragSession::NoDrag);
    }

    #[test]
    fn test_capture_unknown_target_is_no_drag() {
        let board = Board::default();
        assert_eq!(
            DragSession::capture(&board, DragRef::Column(ColumnId::new(4))),
            DragSession::NoDrag
        );
        assert_eq!(
            DragSession::capture(&board, DragRef::Item(ItemId::new(4))),
            DragSession::NoDrag
        );
    }

    #[test]
    fn test_snapshot_does_not_alias_board() {
        let mut board = Board::default();
        let column = board.add_column(None);
        let session = DragSession::capture(&board, DragRef::Column(column.id));

        board
            .rename_column(column.id, "Renamed".to_string())
            .unwrap();

        match &session {
            DragSession::Column { column } => assert_eq!(column.title, "Column 1"),
            other => panic!("unexpected session {:?}", other),
        }
        match session.refreshed(&board) {
            DragSession::Column { column } => assert_eq!(column.title, "Renamed"),
            other => panic!("unexpected session {:?}", other),
        }
    }

    #[test]
    fn test_hovering_survives_refresh() {
        let mut board = Board::default();
        let column = board.add_column(None);
        let item = board.add_item(column.id).unwrap();
        let target = Some(DragRef::Column(column.id));

        let session = DragSession::capture(&board, DragRef::Item(item.id)).hovered(target);
        assert_eq!(session.hovering(), target);
        assert_eq!(session.refreshed(&board).hovering(), target);

        let column_drag = DragSession::capture(&board, DragRef::Column(column.id)).hovered(target);
        assert_eq!(column_drag.hovering(), None);
    }

    #[test]
    fn test_column_preview_includes_items() {
        let mut board = Board::default();
        let column = board.add_column(None);
        let other = board.add_column(None);
        board.add_item(column.id).unwrap();
        board.add_item(other.id).unwrap();
        board.add_item(column.id).unwrap();

        let session = DragSession::capture(&board, DragRef::Column(column.id));
        match session.preview(&board) {
            Some(DragPreview::Column { column: c, items }) => {
                assert_eq!(c.id, column.id);
                assert_eq!(items.len(), 2);
            }
            other => panic!("unexpected preview {:?}", other),
        }
    }

    #[test]
    fn test_item_preview_falls_back_to_snapshot() {
        let mut board = Board::default();
        let column = board.add_column(None);
        let item = board.add_item(column.id).unwrap();

        let session = DragSession::capture(&board, DragRef::Item(item.id));
        board.delete_item(item.id);

        assert_eq!(
            session.preview(&board),
            Some(DragPreview::Item { item: item.clone() })
        );
        assert_eq!(DragSession::NoDrag.preview(&board), None);
    }
}
