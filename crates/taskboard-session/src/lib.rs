pub mod autoscroll;
pub mod session;

pub use autoscroll::{AutoScroller, DragMotion, Rect, ScrollDirection, ScrollSurface};
pub use session::BoardSession;
