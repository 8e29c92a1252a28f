//! Leptos Swipe Utilities
//!
//! Horizontal swipe detection for Leptos using keyboard and touch events.
//! Uses a displacement threshold to distinguish a tap from a swipe.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Horizontal swipe direction
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SwipeDirection {
    Left,
    Right,
}

impl SwipeDirection {
    /// -1 for left, +1 for right
    pub fn sign(self) -> i32 {
        match self {
            SwipeDirection::Left => -1,
            SwipeDirection::Right => 1,
        }
    }
}

/// Minimum horizontal displacement in pixels for a touch to count as a swipe
pub const TOUCH_THRESHOLD_PX: i32 = 50;

/// Map a `KeyboardEvent::key()` value to a direction
pub fn direction_for_key(key: &str) -> Option<SwipeDirection> {
    match key {
        "ArrowLeft" => Some(SwipeDirection::Left),
        "ArrowRight" => Some(SwipeDirection::Right),
        _ => None,
    }
}

/// Classify a touch by its start/end `screenX`.
/// Displacements with absolute value below `threshold` are not swipes.
pub fn direction_for_touch(start_x: i32, end_x: i32, threshold: i32) -> Option<SwipeDirection> {
    let distance = end_x - start_x;
    if distance.abs() < threshold {
        return None;
    }
    if distance > 0 {
        Some(SwipeDirection::Right)
    } else {
        Some(SwipeDirection::Left)
    }
}

/// Start point of the touch in progress.
///
/// A touch that starts while input is locked is never armed, so it cannot
/// be measured against an earlier touch's start point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TouchTracker {
    start: Option<i32>,
}

impl TouchTracker {
    pub fn start(&mut self, x: i32, locked: bool) {
        self.start = if locked { None } else { Some(x) };
    }

    /// Classify the finished touch and disarm
    pub fn end(&mut self, x: i32, locked: bool) -> Option<SwipeDirection> {
        let start = self.start.take()?;
        if locked {
            return None;
        }
        direction_for_touch(start, x, TOUCH_THRESHOLD_PX)
    }
}

/// Touch tracking signals
#[derive(Clone, Copy)]
pub struct SwipeSignals {
    pub tracker_read: ReadSignal<TouchTracker>,
    pub tracker_write: WriteSignal<TouchTracker>,
}

pub fn create_swipe_signals() -> SwipeSignals {
    let (tracker_read, tracker_write) = signal(TouchTracker::default());
    SwipeSignals {
        tracker_read,
        tracker_write,
    }
}

fn first_changed_touch_x(ev: &web_sys::TouchEvent) -> Option<i32> {
    ev.changed_touches().get(0).map(|touch| touch.screen_x())
}

fn add_document_listener(event: &str, callback: &js_sys::Function) {
    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback(event, callback);
        }
    }
}

/// Bind a document-level keydown handler for ArrowLeft/ArrowRight.
///
/// `on_swipe` returns whether the gesture was accepted; accepted key presses
/// have their default action (page scroll) prevented.
pub fn bind_global_keydown<F>(on_swipe: F)
where
    F: Fn(SwipeDirection) -> bool + 'static,
{
    let on_keydown = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(move |ev: web_sys::KeyboardEvent| {
        if let Some(direction) = direction_for_key(&ev.key()) {
            if on_swipe(direction) {
                ev.prevent_default();
            }
        }
    });
    add_document_listener("keydown", on_keydown.as_ref().unchecked_ref());
    // Listeners live for the page lifetime
    on_keydown.forget();
}

/// Bind document-level touchstart/touchend handlers.
///
/// A touch only counts when it both starts and ends while `is_locked`
/// returns false.
pub fn bind_global_touch<L, F>(swipe: SwipeSignals, is_locked: L, on_swipe: F)
where
    L: Fn() -> bool + Clone + 'static,
    F: Fn(SwipeDirection) -> bool + 'static,
{
    let locked_on_start = is_locked.clone();
    let on_touchstart = Closure::<dyn FnMut(web_sys::TouchEvent)>::new(move |ev: web_sys::TouchEvent| {
        if let Some(x) = first_changed_touch_x(&ev) {
            let locked = locked_on_start();
            swipe.tracker_write.update(|t| t.start(x, locked));
        }
    });
    add_document_listener("touchstart", on_touchstart.as_ref().unchecked_ref());
    on_touchstart.forget();

    let on_touchend = Closure::<dyn FnMut(web_sys::TouchEvent)>::new(move |ev: web_sys::TouchEvent| {
        let Some(end_x) = first_changed_touch_x(&ev) else { return; };
        let locked = is_locked();
        let direction = swipe
            .tracker_write
            .try_update(|t| t.end(end_x, locked))
            .flatten();
        if let Some(direction) = direction {
            on_swipe(direction);
        }
    });
    add_document_listener("touchend", on_touchend.as_ref().unchecked_ref());
    on_touchend.forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_keys_map_to_directions() {
        assert_eq!(direction_for_key("ArrowLeft"), Some(SwipeDirection::Left));
        assert_eq!(direction_for_key("ArrowRight"), Some(SwipeDirection::Right));
        assert_eq!(direction_for_key("ArrowUp"), None);
        assert_eq!(direction_for_key("Enter"), None);
    }

    #[test]
    fn test_short_touch_is_not_a_swipe() {
        assert_eq!(direction_for_touch(100, 149, TOUCH_THRESHOLD_PX), None);
        assert_eq!(direction_for_touch(100, 51, TOUCH_THRESHOLD_PX), None);
        assert_eq!(direction_for_touch(100, 100, TOUCH_THRESHOLD_PX), None);
    }

    #[test]
    fn test_touch_at_threshold_is_a_swipe() {
        assert_eq!(direction_for_touch(100, 150, TOUCH_THRESHOLD_PX), Some(SwipeDirection::Right));
        assert_eq!(direction_for_touch(100, 50, TOUCH_THRESHOLD_PX), Some(SwipeDirection::Left));
    }

    #[test]
    fn test_long_touch_direction() {
        assert_eq!(direction_for_touch(300, 20, TOUCH_THRESHOLD_PX), Some(SwipeDirection::Left));
        assert_eq!(direction_for_touch(20, 300, TOUCH_THRESHOLD_PX), Some(SwipeDirection::Right));
    }

    #[test]
    fn test_touch_started_while_locked_is_ignored() {
        let mut tracker = TouchTracker::default();
        tracker.start(300, false);
        assert_eq!(tracker.end(20, false), Some(SwipeDirection::Left));

        // Tap begins during the animation and ends after release
        tracker.start(200, true);
        assert_eq!(tracker.end(200, false), None);
        assert_eq!(tracker.end(20, false), None);
    }

    #[test]
    fn test_touch_ending_while_locked_disarms() {
        let mut tracker = TouchTracker::default();
        tracker.start(20, false);
        assert_eq!(tracker.end(300, true), None);
        assert_eq!(tracker.end(300, false), None);
    }

    #[test]
    fn test_end_without_start_is_not_a_swipe() {
        let mut tracker = TouchTracker::default();
        assert_eq!(tracker.end(400, false), None);
    }

    #[test]
    fn test_each_touch_uses_its_own_start() {
        let mut tracker = TouchTracker::default();
        tracker.start(20, false);
        assert_eq!(tracker.end(300, false), Some(SwipeDirection::Right));
        tracker.start(200, false);
        assert_eq!(tracker.end(210, false), None);
    }

    #[test]
    fn test_sign() {
        assert_eq!(SwipeDirection::Left.sign(), -1);
        assert_eq!(SwipeDirection::Right.sign(), 1);
    }
}
