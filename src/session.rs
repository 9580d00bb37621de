use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::domain::{Board, BoardConfig, BoardView, Column, ColumnId, Item, ItemId};
use crate::drag::{self, DragEnd, DragEvent, DragOver, DragPreview, DragRef, DragSession};
use crate::error::Result;

/// A user intent emitted by the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Intent {
    AddColumn {
        #[serde(default)]
        title: Option<String>,
    },
    AddItem {
        column_id: ColumnId,
    },
    DeleteColumn {
        column_id: ColumnId,
    },
    DeleteItem {
        item_id: ItemId,
    },
    RenameColumn {
        column_id: ColumnId,
        title: String,
    },
    EditItem {
        item_id: ItemId,
        title: String,
        description: String,
    },
    DragStart {
        active: DragRef,
    },
    DragOver(DragOver),
    DragEnd(DragEnd),
}

/// Result of applying an intent
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    ColumnAdded { column: Column },
    ItemAdded { item: Item },
    Applied,
}

/// One interactive board: the model plus the drag in progress.
///
/// Intents are applied strictly in the order they are delivered.
#[derive(Debug, Clone, Default)]
pub struct BoardSession {
    board: Board,
    drag: DragSession,
}

impl BoardSession {
    pub fn new(config: BoardConfig) -> Self {
        Self::from_board(Board::new(config))
    }

    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            drag: DragSession::NoDrag,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn drag_session(&self) -> &DragSession {
        &self.drag
    }

    pub fn view(&self) -> BoardView {
        self.board.view()
    }

    pub fn preview(&self) -> Option<DragPreview> {
        self.drag.preview(&self.board)
    }

    /// Dispatches a single intent. Errors leave the board unchanged.
    pub fn apply(&mut self, intent: Intent) -> Result<Outcome> {
        let result = match intent {
            Intent::AddColumn { title } => self
                .add_column(title)
                .map(|column| Outcome::ColumnAdded { column }),
            Intent::AddItem { column_id } => self
                .add_item(column_id)
                .map(|item| Outcome::ItemAdded { item }),
            Intent::DeleteColumn { column_id } => {
                self.delete_column(column_id);
                Ok(Outcome::Applied)
            }
            Intent::DeleteItem { item_id } => {
                self.delete_item(item_id);
                Ok(Outcome::Applied)
            }
            Intent::RenameColumn { column_id, title } => self
                .rename_column(column_id, title)
                .map(|_| Outcome::Applied),
            Intent::EditItem {
                item_id,
                title,
                description,
            } => self
                .edit_item(item_id, title, description)
                .map(|_| Outcome::Applied),
            Intent::DragStart { active } => {
                self.drag_start(active);
                Ok(Outcome::Applied)
            }
            Intent::DragOver(event) => {
                self.drag_over(event);
                Ok(Outcome::Applied)
            }
            Intent::DragEnd(event) => {
                self.drag_end(event);
                Ok(Outcome::Applied)
            }
        };

        if let Err(err) = &result {
            warn!(error = %err, "intent rejected");
        }
        result
    }

    /// Appends a column. Generated default titles are held to the same cap
    /// as supplied ones, since `"Column N"` grows with N.
    pub fn add_column(&mut self, title: Option<String>) -> Result<Column> {
        let title = title.unwrap_or_else(|| self.board.next_default_column_title());
        self.board.config().validate_column_title(&title)?;
        Ok(self.board.add_column(Some(title)))
    }

    pub fn add_item(&mut self, column_id: ColumnId) -> Result<Item> {
        self.board.add_item(column_id)
    }

    pub fn delete_column(&mut self, column_id: ColumnId) {
        if self.board.delete_column(column_id) {
            self.drop_stale_drag();
        }
    }

    pub fn delete_item(&mut self, item_id: ItemId) {
        if self.board.delete_item(item_id) {
            self.drop_stale_drag();
        }
    }

    pub fn rename_column(&mut self, column_id: ColumnId, title: String) -> Result<()> {
        self.board.config().validate_column_title(&title)?;
        self.board.rename_column(column_id, title)
    }

    pub fn edit_item(&mut self, item_id: ItemId, title: String, description: String) -> Result<()> {
        self.board.edit_item(item_id, title, description)
    }

    pub fn drag_start(&mut self, active: DragRef) {
        self.dispatch(DragEvent::Start { active });
    }

    pub fn drag_over(&mut self, event: DragOver) {
        self.dispatch(DragEvent::Over(event));
    }

    pub fn drag_end(&mut self, event: DragEnd) {
        self.dispatch(DragEvent::End(event));
    }

    fn dispatch(&mut self, event: DragEvent) {
        let board = std::mem::take(&mut self.board);
        let session = std::mem::take(&mut self.drag);
        let (board, session) = drag::reduce(board, session, &event);
        self.board = board;
        self.drag = session;
    }

    // A deleted entity can no longer be dropped anywhere.
    fn drop_stale_drag(&mut self) {
        let still_present = match self.drag.active() {
            None => return,
            Some(DragRef::Column(id)) => self.board.has_column(id),
            Some(DragRef::Item(id)) => self.board.item(id).is_some(),
        };
        if !still_present {
            debug!("dragged entity deleted, clearing drag session");
            self.drag.clear();
        }
    }
}
