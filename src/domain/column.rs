use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::id::ColumnId;

/// A named lane on the board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    pub created_at: DateTime<Utc>,
}

impl Column {
    /// Creates a new column with the given ID and title
    pub fn new(id: ColumnId, title: String) -> Self {
        Self {
            id,
            title,
            created_at: Utc::now(),
        }
    }

    /// Replaces the title. Length is checked by the caller.
    pub fn rename(&mut self, title: String) {
        self.title = title;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_rename() {
        let mut column = Column::new(ColumnId::new(1), "Column 1".to_string());
        column.rename("Backlog".to_string());
        assert_eq!(column.title, "Backlog");
    }

    #[test]
    fn test_column_serialization() {
        let column = Column::new(ColumnId::new(4), "Doing".to_string());
        let json = serde_json::to_string(&column).unwrap();
        assert!(json.contains("\"id\":4"));

        let back: Column = serde_json::from_str(&json).unwrap();
        assert_eq!(back, column);
    }
}
