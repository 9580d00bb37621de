pub mod board;
pub mod column;
pub mod id;
pub mod item;

pub use board::{Board, BoardConfig, BoardView, ColumnView};
pub use column::Column;
pub use id::{ColumnId, IdGenerator, ItemId};
pub use item::Item;
