//! Generic input event types for cross-backend compatibility.

/// Raw pointer (mouse or stylus) event in device/page coordinates.
///
/// Backend integrations map their native events to these generic values;
/// the [`InputRouter`](super::InputRouter) turns them into [`StrokeOp`]s.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Primary button pressed at the given page position
    Down { x: f64, y: f64 },
    /// Pointer moved to the given page position (button state not implied)
    Move { x: f64, y: f64 },
    /// Primary button released
    Up,
    /// Pointer left the surface area
    Leave,
}

/// Raw touch event in device/page coordinates.
///
/// `contacts` carries all active contact points; only the first one drives
/// drawing (single-finger model, additional fingers are ignored).
#[derive(Debug, Clone, PartialEq)]
pub enum TouchEvent {
    /// One or more contacts went down
    Start { contacts: Vec<(f64, f64)> },
    /// Active contacts moved
    Move { contacts: Vec<(f64, f64)> },
    /// All tracked contacts lifted
    End,
    /// Gesture cancelled by the system
    Cancel,
}

/// Logical stroke operation in surface-local coordinates.
///
/// This is the closed operation set the router emits and the session
/// consumes; gesture normalization never leaks past it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeOp {
    /// Open a stroke session at the given point
    Begin { x: i32, y: i32 },
    /// Extend the active stroke to the given point
    Extend { x: i32, y: i32 },
    /// Close the stroke session (idempotent)
    End,
}
