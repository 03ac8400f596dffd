//! Auto-scroll during an active drag.
//!
//! When the dragged card nears a horizontal edge of the overflowing
//! column container, the container scrolls toward the pointer on a fixed
//! interval until the card leaves the threshold zone or the drag ends.
//! This is purely presentational: it touches only the collaborating
//! surface's scroll offset, never board state. The timer is bound to the
//! drag gesture's lifetime — recomputing the direction cancels the
//! previous timer, and both `stop()` and dropping the controller abort
//! any timer still running.

use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Horizontal extent of an element, in container coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub right: f64,
}

impl Rect {
    pub fn new(left: f64, right: f64) -> Self {
        Self { left, right }
    }
}

/// Intermediate drag-update event from the gesture library. Consumed only
/// here; drag updates never mutate board state.
#[derive(Debug, Clone)]
pub struct DragMotion {
    pub dragged_id: String,
    pub dragged_rect: Rect,
}

/// The view container being scrolled. Offsets are clamped to
/// `[0, content_width - viewport_width]`.
#[cfg_attr(test, mockall::automock)]
pub trait ScrollSurface: Send + Sync {
    /// Container bounds in the same coordinate space as drag rects.
    fn bounds(&self) -> Rect;
    fn scroll_offset(&self) -> f64;
    fn set_scroll_offset(&self, offset: f64);
    fn content_width(&self) -> f64;
    fn viewport_width(&self) -> f64;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Left,
    Right,
}

/// Distance from a container edge at which scrolling kicks in.
pub const SCROLL_THRESHOLD: f64 = 200.0;
/// Offset change per tick.
pub const SCROLL_SPEED: f64 = 15.0;
/// Tick interval for the repeating scroll task.
pub const SCROLL_TICK: Duration = Duration::from_millis(16);

impl ScrollDirection {
    /// Direction to scroll for a dragged element, or `None` when it sits
    /// outside both threshold zones. The left edge wins when the
    /// container is narrow enough for the zones to overlap.
    pub fn compute(container: Rect, dragged: Rect) -> Option<Self> {
        if dragged.left - container.left < SCROLL_THRESHOLD {
            Some(ScrollDirection::Left)
        } else if container.right - dragged.right < SCROLL_THRESHOLD {
            Some(ScrollDirection::Right)
        } else {
            None
        }
    }
}

fn scroll_step<S: ScrollSurface + ?Sized>(surface: &S, direction: ScrollDirection) {
    let offset = surface.scroll_offset();
    let next = match direction {
        ScrollDirection::Left => offset - SCROLL_SPEED,
        ScrollDirection::Right => offset + SCROLL_SPEED,
    };
    let max = (surface.content_width() - surface.viewport_width()).max(0.0);
    // A step that would cross the boundary is skipped, matching the
    // stop-at-edge behavior of the container.
    if (0.0..=max).contains(&next) {
        surface.set_scroll_offset(next);
    }
}

pub struct AutoScroller<S: ScrollSurface + 'static> {
    surface: Arc<S>,
    timer: Option<JoinHandle<()>>,
    direction: Option<ScrollDirection>,
}

impl<S: ScrollSurface + 'static> AutoScroller<S> {
    pub fn new(surface: Arc<S>) -> Self {
        Self {
            surface,
            timer: None,
            direction: None,
        }
    }

    /// Handle a drag-update event: recompute the direction, cancel the
    /// running timer, and start a new one if the card is in a threshold
    /// zone.
    pub fn on_drag_update(&mut self, motion: &DragMotion) {
        let direction = ScrollDirection::compute(self.surface.bounds(), motion.dragged_rect);
        self.cancel_timer();
        self.direction = direction;

        if let Some(direction) = direction {
            let surface = Arc::clone(&self.surface);
            self.timer = Some(tokio::spawn(async move {
                let mut interval = tokio::time::interval(SCROLL_TICK);
                // The first tick fires immediately; skip it so each
                // subsequent tick maps to one step.
                interval.tick().await;
                loop {
                    interval.tick().await;
                    scroll_step(surface.as_ref(), direction);
                }
            }));
        }
    }

    /// Called at drag end. Guarantees no timer outlives the gesture.
    pub fn stop(&mut self) {
        self.cancel_timer();
        self.direction = None;
    }

    pub fn direction(&self) -> Option<ScrollDirection> {
        self.direction
    }

    pub fn is_scrolling(&self) -> bool {
        self.timer.is_some()
    }

    fn cancel_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

impl<S: ScrollSurface + 'static> Drop for AutoScroller<S> {
    fn drop(&mut self) {
        self.cancel_timer();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicI64, Ordering};

    /// Surface with a 1000px viewport over 3000px of content, offset
    /// tracked in whole pixels.
    struct StubSurface {
        offset: AtomicI64,
    }

    impl StubSurface {
        fn new(offset: f64) -> Self {
            Self {
                offset: AtomicI64::new(offset as i64),
            }
        }
    }

    impl ScrollSurface for StubSurface {
        fn bounds(&self) -> Rect {
            Rect::new(0.0, 1000.0)
        }
        fn scroll_offset(&self) -> f64 {
            self.offset.load(Ordering::SeqCst) as f64
        }
        fn set_scroll_offset(&self, offset: f64) {
            self.offset.store(offset as i64, Ordering::SeqCst);
        }
        fn content_width(&self) -> f64 {
            3000.0
        }
        fn viewport_width(&self) -> f64 {
            1000.0
        }
    }

    fn motion(left: f64, right: f64) -> DragMotion {
        DragMotion {
            dragged_id: "task-1".to_string(),
            dragged_rect: Rect::new(left, right),
        }
    }

    #[test]
    fn test_direction_near_left_edge() {
        let container = Rect::new(0.0, 1000.0);
        assert_eq!(
            ScrollDirection::compute(container, Rect::new(50.0, 150.0)),
            Some(ScrollDirection::Left)
        );
    }

    #[test]
    fn test_direction_near_right_edge() {
        let container = Rect::new(0.0, 1000.0);
        assert_eq!(
            ScrollDirection::compute(container, Rect::new(850.0, 950.0)),
            Some(ScrollDirection::Right)
        );
    }

    #[test]
    fn test_direction_in_the_middle() {
        let container = Rect::new(0.0, 1000.0);
        assert_eq!(
            ScrollDirection::compute(container, Rect::new(400.0, 500.0)),
            None
        );
    }

    #[test]
    fn test_step_clamps_at_boundaries() {
        let surface = StubSurface::new(5.0);
        // 5 - 15 would go negative: skipped.
        scroll_step(&surface, ScrollDirection::Left);
        assert_eq!(surface.scroll_offset(), 5.0);

        let surface = StubSurface::new(1995.0);
        // 1995 + 15 exceeds max 2000: skipped.
        scroll_step(&surface, ScrollDirection::Right);
        assert_eq!(surface.scroll_offset(), 1995.0);

        let surface = StubSurface::new(500.0);
        scroll_step(&surface, ScrollDirection::Right);
        assert_eq!(surface.scroll_offset(), 515.0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_timer_scrolls_while_in_threshold_zone() {
        let surface = Arc::new(StubSurface::new(500.0));
        let mut scroller = AutoScroller::new(Arc::clone(&surface));

        scroller.on_drag_update(&motion(900.0, 980.0));
        assert!(scroller.is_scrolling());
        assert_eq!(scroller.direction(), Some(ScrollDirection::Right));

        tokio::time::sleep(Duration::from_millis(50)).await;
        tokio::task::yield_now().await;
        assert!(surface.scroll_offset() > 500.0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_cancels_the_timer() {
        let surface = Arc::new(StubSurface::new(500.0));
        let mut scroller = AutoScroller::new(Arc::clone(&surface));

        scroller.on_drag_update(&motion(10.0, 90.0));
        assert!(scroller.is_scrolling());

        scroller.stop();
        assert!(!scroller.is_scrolling());
        assert_eq!(scroller.direction(), None);

        let frozen = surface.scroll_offset();
        tokio::time::sleep(Duration::from_millis(100)).await;
        tokio::task::yield_now().await;
        assert_eq!(surface.scroll_offset(), frozen);
    }

    #[tokio::test(start_paused = true)]
    async fn test_leaving_the_zone_stops_scrolling() {
        let surface = Arc::new(StubSurface::new(500.0));
        let mut scroller = AutoScroller::new(Arc::clone(&surface));

        scroller.on_drag_update(&motion(900.0, 980.0));
        assert!(scroller.is_scrolling());

        scroller.on_drag_update(&motion(400.0, 500.0));
        assert!(!scroller.is_scrolling());
    }

    #[tokio::test]
    async fn test_no_surface_writes_outside_threshold_zone() {
        let mut mock = MockScrollSurface::new();
        mock.expect_bounds().return_const(Rect::new(0.0, 1000.0));
        mock.expect_set_scroll_offset().times(0);

        let mut scroller = AutoScroller::new(Arc::new(mock));
        scroller.on_drag_update(&motion(400.0, 500.0));
        assert!(!scroller.is_scrolling());
        scroller.stop();
    }
}
