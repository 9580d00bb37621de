use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::id::{ColumnId, ItemId};

/// What kind of entity a drag handle belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DragKind {
    Column,
    Item,
}

impl fmt::Display for DragKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Column => write!(f, "column"),
            Self::Item => write!(f, "item"),
        }
    }
}

/// A draggable or droppable entity, tagged with its kind
///
/// Column and item ids never compare equal to each other, even when the
/// underlying numbers match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "lowercase")]
pub enum DragRef {
    Column(ColumnId),
    Item(ItemId),
}

impl DragRef {
    pub fn kind(&self) -> DragKind {
        match self {
            Self::Column(_) => DragKind::Column,
            Self::Item(_) => DragKind::Item,
        }
    }
}

impl fmt::Display for DragRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Column(id) => write!(f, "{}", id),
            Self::Item(id) => write!(f, "{}", id),
        }
    }
}

impl From<ColumnId> for DragRef {
    fn from(id: ColumnId) -> Self {
        Self::Column(id)
    }
}

impl From<ItemId> for DragRef {
    fn from(id: ItemId) -> Self {
        Self::Item(id)
    }
}

/// Pointer hovering a candidate target while dragging `active`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragOver {
    pub active: DragRef,
    pub over: Option<DragRef>,
}

impl DragOver {
    pub fn new(active: impl Into<DragRef>, over: Option<DragRef>) -> Self {
        Self {
            active: active.into(),
            over,
        }
    }
}

/// Terminal drop signal. `over` is `None` when released outside any target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragEnd {
    pub active: Option<DragRef>,
    pub over: Option<DragRef>,
}

impl DragEnd {
    pub fn new(active: Option<DragRef>, over: Option<DragRef>) -> Self {
        Self { active, over }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DragEvent {
    Start { active: DragRef },
    Over(DragOver),
    End(DragEnd),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_ref_kind() {
        assert_eq!(DragRef::Column(ColumnId::new(1)).kind(), DragKind::Column);
        assert_eq!(DragRef::Item(ItemId::new(1)).kind(), DragKind::Item);
    }

    #[test]
    fn test_column_and_item_refs_never_equal() {
        assert_ne!(
            DragRef::Column(ColumnId::new(5)),
            DragRef::Item(ItemId::new(5))
        );
    }

    #[test]
    fn test_drag_event_json_shape() {
        let json = r#"{ "type": "over", "active": { "kind": "item", "id": 3 }, "over": { "kind": "column", "id": 1 } }"#;
        let event: DragEvent = serde_json::from_str(json).unwrap();

        assert_eq!(
            event,
            DragEvent::Over(DragOver::new(
                ItemId::new(3),
                Some(DragRef::Column(ColumnId::new(1)))
            ))
        );
    }

    #[test]
    fn test_drag_end_without_target() {
        let json = r#"{ "type": "end", "active": { "kind": "item", "id": 3 }, "over": null }"#;
        let event: DragEvent = serde_json::from_str(json).unwrap();

        assert_eq!(
            event,
            DragEvent::End(DragEnd::new(Some(DragRef::Item(ItemId::new(3))), None))
        );
    }
}
