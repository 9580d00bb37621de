pub mod engine;
pub mod event;
pub mod session;

pub use engine::{drag_end, drag_over, reduce};
pub use event::{DragEnd, DragEvent, DragKind, DragOver, DragRef};
pub use session::{DragPreview, DragSession};
