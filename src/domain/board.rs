use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{
    column::Column,
    id::{ColumnId, IdGenerator, ItemId},
    item::Item,
};
use crate::error::{BoardError, Result};

/// Board configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub max_column_title_len: usize,
    pub column_title_prefix: String,
    pub item_title_prefix: String,
    pub default_item_description: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            max_column_title_len: 50,
            column_title_prefix: "Column".to_string(),
            item_title_prefix: "Task".to_string(),
            default_item_description: "Task Description".to_string(),
        }
    }
}

impl BoardConfig {
    /// Loads a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: BoardConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_column_title_len == 0 {
            return Err(BoardError::ConfigError(
                "max_column_title_len must be at least 1".to_string(),
            ));
        }
        let sample = self.default_column_title(1);
        if sample.chars().count() > self.max_column_title_len {
            return Err(BoardError::ConfigError(format!(
                "default column title '{}' exceeds {} characters",
                sample, self.max_column_title_len
            )));
        }
        Ok(())
    }

    /// Rejects column titles longer than the configured cap.
    ///
    /// Length is counted in characters so multi-byte titles are not
    /// penalised.
    pub fn validate_column_title(&self, title: &str) -> Result<()> {
        let actual = title.chars().count();
        if actual > self.max_column_title_len {
            return Err(BoardError::TitleTooLong {
                max: self.max_column_title_len,
                actual,
            });
        }
        Ok(())
    }

    pub fn default_column_title(&self, number: usize) -> String {
        format!("{} {}", self.column_title_prefix, number)
    }

    pub fn default_item_title(&self, number: usize) -> String {
        format!("{} {}", self.item_title_prefix, number)
    }
}

/// A column together with its items, in display order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnView {
    #[serde(flatten)]
    pub column: Column,
    pub items: Vec<Item>,
}

/// Render-ready snapshot of the whole board
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoardView {
    pub columns: Vec<ColumnView>,
}

/// Kanban board state
///
/// Items live in one flat sequence; a column's items are the entries whose
/// `column_id` matches, in their relative order.
#[derive(Debug, Clone)]
pub struct Board {
    config: BoardConfig,
    columns: Vec<Column>,
    items: Vec<Item>,
    ids: IdGenerator,
}

impl Board {
    pub fn new(config: BoardConfig) -> Self {
        Self {
            config,
            columns: Vec::new(),
            items: Vec::new(),
            ids: IdGenerator::new(),
        }
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Every item on the board, in flattened display order
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn column(&self, id: ColumnId) -> Option<&Column> {
        self.columns.iter().find(|column| column.id == id)
    }

    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn column_index(&self, id: ColumnId) -> Option<usize> {
        self.columns.iter().position(|column| column.id == id)
    }

    pub fn item_index(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    pub fn has_column(&self, id: ColumnId) -> bool {
        self.column_index(id).is_some()
    }

    /// Items owned by `column_id`, in display order. Empty for unknown columns.
    pub fn items_of(&self, column_id: ColumnId) -> impl Iterator<Item = &Item> + '_ {
        self.items
            .iter()
            .filter(move |item| item.belongs_to(column_id))
    }

    pub fn item_count(&self, column_id: ColumnId) -> usize {
        self.items_of(column_id).count()
    }

    /// Title the next column gets when none is supplied
    pub fn next_default_column_title(&self) -> String {
        self.config.default_column_title(self.columns.len() + 1)
    }

    /// Appends a column, using the default `"Column N"` title when none is given
    pub fn add_column(&mut self, title: Option<String>) -> Column {
        let title = title.unwrap_or_else(|| self.next_default_column_title());
        let column = Column::new(self.ids.next_column_id(), title);
        debug!(column = %column.id, title = %column.title, "added column");
        self.columns.push(column.clone());
        column
    }

    /// Appends an item to the end of `column_id`
    pub fn add_item(&mut self, column_id: ColumnId) -> Result<Item> {
        if !self.has_column(column_id) {
            return Err(BoardError::UnknownColumn(column_id));
        }

        let item = Item::new(
            self.ids.next_item_id(),
            column_id,
            self.config.default_item_title(self.items.len() + 1),
            self.config.default_item_description.clone(),
        );
        debug!(item = %item.id, column = %column_id, "added item");
        self.items.push(item.clone());
        Ok(item)
    }

    /// Removes a column and every item it owns. Returns false if the column
    /// did not exist.
    pub fn delete_column(&mut self, id: ColumnId) -> bool {
        let Some(index) = self.column_index(id) else {
            return false;
        };

        self.columns.remove(index);
        let before = self.items.len();
        self.items.retain(|item| !item.belongs_to(id));
        debug!(
            column = %id,
            removed_items = before - self.items.len(),
            "deleted column"
        );
        true
    }

    /// Removes an item. Returns false if it did not exist.
    pub fn delete_item(&mut self, id: ItemId) -> bool {
        match self.item_index(id) {
            Some(index) => {
                self.items.remove(index);
                debug!(item = %id, "deleted item");
                true
            }
            None => false,
        }
    }

    pub fn rename_column(&mut self, id: ColumnId, title: String) -> Result<()> {
        let column = self
            .columns
            .iter_mut()
            .find(|column| column.id == id)
            .ok_or(BoardError::UnknownColumn(id))?;
        column.rename(title);
        debug!(column = %id, "renamed column");
        Ok(())
    }

    pub fn edit_item(&mut self, id: ItemId, title: String, description: String) -> Result<()> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(BoardError::UnknownItem(id))?;
        item.edit(title, description);
        debug!(item = %id, "edited item");
        Ok(())
    }

    /// Items whose owning column no longer exists
    pub fn orphaned_items(&self) -> Vec<&Item> {
        self.items
            .iter()
            .filter(|item| !self.has_column(item.column_id()))
            .collect()
    }

    pub fn view(&self) -> BoardView {
        BoardView {
            columns: self
                .columns
                .iter()
                .map(|column| ColumnView {
                    column: column.clone(),
                    items: self.items_of(column.id).cloned().collect(),
                })
                .collect(),
        }
    }

    pub(crate) fn columns_mut(&mut self) -> &mut [Column] {
        &mut self.columns
    }

    pub(crate) fn items_mut(&mut self) -> &mut [Item] {
        &mut self.items
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BoardConfig::default())
    }
}
