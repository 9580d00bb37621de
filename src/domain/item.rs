use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::id::{ColumnId, ItemId};

/// A unit of work owned by exactly one column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub title: String,
    pub description: String,
    column_id: ColumnId,
    pub created_at: DateTime<Utc>,
}

impl Item {
    /// Creates a new item owned by `column_id`
    pub fn new(id: ItemId, column_id: ColumnId, title: String, description: String) -> Self {
        Self {
            id,
            title,
            description,
            column_id,
            created_at: Utc::now(),
        }
    }

    /// The column this item currently belongs to
    pub fn column_id(&self) -> ColumnId {
        self.column_id
    }

    pub fn belongs_to(&self, column_id: ColumnId) -> bool {
        self.column_id == column_id
    }

    /// Updates title and description together
    pub fn edit(&mut self, title: String, description: String) {
        self.title = title;
        self.description = description;
    }

    // Ownership only changes while an item is being dragged.
    pub(crate) fn reassign(&mut self, column_id: ColumnId) {
        self.column_id = column_id;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item() -> Item {
        Item::new(
            ItemId::new(2),
            ColumnId::new(1),
            "Task 1".to_string(),
            "Task Description".to_string(),
        )
    }

    #[test]
    fn test_item_creation() {
        let item = item();
        assert_eq!(item.column_id(), ColumnId::new(1));
        assert!(item.belongs_to(ColumnId::new(1)));
        assert!(!item.belongs_to(ColumnId::new(3)));
    }

    #[test]
    fn test_item_edit() {
        let mut item = item();
        item.edit("Write docs".to_string(), "README first".to_string());

        assert_eq!(item.title, "Write docs");
        assert_eq!(item.description, "README first");
        assert_eq!(item.column_id(), ColumnId::new(1));
    }

    #[test]
    fn test_item_reassign() {
        let mut item = item();
        item.reassign(ColumnId::new(7));
        assert_eq!(item.column_id(), ColumnId::new(7));
    }

    #[test]
    fn test_item_serialization() {
        let item = item();
        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains("\"column_id\":1"));

        let back: Item = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);
    }
}
