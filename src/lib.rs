//! # Kanban Core
//!
//! Board model and drag-and-drop reorder engine for kanban boards.
//!
//! This crate owns the ordering and membership of columns and items while
//! a user drags them around. Rendering lives elsewhere: a presentation
//! layer feeds [`Intent`]s into a [`BoardSession`] and re-renders from
//! [`BoardSession::view`] and [`BoardSession::preview`].

pub mod domain;
pub mod drag;
pub mod error;
pub mod session;

// Re-export commonly used types
pub use domain::{
    board::{Board, BoardConfig, BoardView, ColumnView},
    column::Column,
    id::{ColumnId, IdGenerator, ItemId},
    item::Item,
};
pub use drag::{DragEnd, DragEvent, DragKind, DragOver, DragPreview, DragRef, DragSession};
pub use error::{BoardError, Result};
pub use session::{BoardSession, Intent, Outcome};
