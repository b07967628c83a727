//! Translate raw wheel, keyboard and touch readings into a step direction.
//!
//! These are pure functions so the browser glue stays thin; none of them
//! touch carousel state.

use crate::constants::SWIPE_THRESHOLD_PX;
use crate::model::Direction;

/// Scroll down or left moves forward, up or right moves back.
#[inline]
pub fn wheel_direction(delta_x: f64, delta_y: f64) -> Option<Direction> {
    if delta_y > 0.0 || delta_x < 0.0 {
        Some(Direction::Forward)
    } else if delta_y < 0.0 || delta_x > 0.0 {
        Some(Direction::Backward)
    } else {
        None
    }
}

#[inline]
pub fn key_direction(key: &str) -> Option<Direction> {
    match key {
        "ArrowRight" | "ArrowDown" => Some(Direction::Forward),
        "ArrowLeft" | "ArrowUp" => Some(Direction::Backward),
        _ => None,
    }
}

/// Horizontal swipe decision on release. A left swipe (negative `dx`) moves forward.
#[inline]
pub fn swipe_direction(dx: f64, dy: f64, threshold: f64) -> Option<Direction> {
    if dx.abs() >= threshold && dy.abs() < threshold {
        if dx < 0.0 {
            Some(Direction::Forward)
        } else {
            Some(Direction::Backward)
        }
    } else {
        None
    }
}

#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct TouchPoint {
    pub x: f64,
    pub y: f64,
}

/// Single-finger swipe tracker fed by touchstart/touchmove/touchend.
#[derive(Clone, Copy, Debug)]
pub struct SwipeTracker {
    threshold: f64,
    start: TouchPoint,
    current: TouchPoint,
    dragging: bool,
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new(SWIPE_THRESHOLD_PX)
    }
}

impl SwipeTracker {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            start: TouchPoint::default(),
            current: TouchPoint::default(),
            dragging: false,
        }
    }

    pub fn begin(&mut self, x: f64, y: f64) {
        self.start = TouchPoint { x, y };
        self.current = self.start;
        self.dragging = true;
    }

    pub fn moved(&mut self, x: f64, y: f64) {
        if !self.dragging {
            return;
        }
        self.current = TouchPoint { x, y };
    }

    /// Finish the gesture and reset. Short or mostly vertical swipes yield `None`.
    pub fn release(&mut self) -> Option<Direction> {
        let dx = self.current.x - self.start.x;
        let dy = self.current.y - self.start.y;
        let dir = swipe_direction(dx, dy, self.threshold);
        *self = Self::new(self.threshold);
        dir
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }
}
