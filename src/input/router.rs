//! Normalizes raw pointer and touch events into stroke operations.

use super::events::{PointerEvent, StrokeOp, TouchEvent};
use log::trace;

/// Converts device/page coordinates into surface-local stroke operations.
///
/// The router owns the surface's origin offset in page coordinates and
/// subtracts it from every event position. It performs no bounds checking:
/// out-of-bounds coordinates are passed through uninterpreted and the
/// surface clips them naturally.
///
/// Pointer moves are forwarded unconditionally; the session itself ignores
/// `Extend` while no stroke is active, so hover motion is harmless.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputRouter {
    origin_x: f64,
    origin_y: f64,
}

impl InputRouter {
    /// Creates a router for a surface whose top-left corner sits at the
    /// given page coordinates.
    pub fn new(origin_x: f64, origin_y: f64) -> Self {
        Self { origin_x, origin_y }
    }

    /// Updates the surface origin (e.g. after the surface moved or resized).
    pub fn set_origin(&mut self, origin_x: f64, origin_y: f64) {
        self.origin_x = origin_x;
        self.origin_y = origin_y;
    }

    /// Translates a raw pointer event into a stroke operation.
    ///
    /// Leaving the surface mid-stroke is treated identically to releasing
    /// the button: the stroke ends normally.
    pub fn route_pointer(&self, event: PointerEvent) -> StrokeOp {
        let op = match event {
            PointerEvent::Down { x, y } => {
                let (x, y) = self.to_local(x, y);
                StrokeOp::Begin { x, y }
            }
            PointerEvent::Move { x, y } => {
                let (x, y) = self.to_local(x, y);
                StrokeOp::Extend { x, y }
            }
            PointerEvent::Up | PointerEvent::Leave => StrokeOp::End,
        };
        trace!("Routed {:?} -> {:?}", event, op);
        op
    }

    /// Translates a raw touch event into a stroke operation.
    ///
    /// Only the first active contact point drives the stroke. A start or
    /// move event with no contacts carries no position and ends the stroke,
    /// matching the cancel path.
    pub fn route_touch(&self, event: &TouchEvent) -> StrokeOp {
        let op = match event {
            TouchEvent::Start { contacts } => match contacts.first() {
                Some(&(x, y)) => {
                    let (x, y) = self.to_local(x, y);
                    StrokeOp::Begin { x, y }
                }
                None => StrokeOp::End,
            },
            TouchEvent::Move { contacts } => match contacts.first() {
                Some(&(x, y)) => {
                    let (x, y) = self.to_local(x, y);
                    StrokeOp::Extend { x, y }
                }
                None => StrokeOp::End,
            },
            TouchEvent::End | TouchEvent::Cancel => StrokeOp::End,
        };
        trace!("Routed {:?} -> {:?}", event, op);
        op
    }

    fn to_local(&self, x: f64, y: f64) -> (i32, i32) {
        (
            (x - self.origin_x).round() as i32,
            (y - self.origin_y).round() as i32,
        )
    }
}
