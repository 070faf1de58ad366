//! Slice detection
//!
//! Plain bounding-box overlap between the hand and each object. Corners of
//! round fruit count as hits; that is accepted.

use glam::Vec2;

use super::geometry::{Rect, WorldSpace};
use super::state::{FallingObject, ObjectKind};

/// One object cut by the hand
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliceEvent {
    pub id: u32,
    pub kind: ObjectKind,
    /// Where the object was when it was cut
    pub pos: Vec2,
    pub score_delta: i64,
}

/// Test one object against the hand and mark it sliced on overlap.
///
/// Already-sliced objects and ticks without a hand never produce a slice.
pub fn try_slice(
    hand: Option<&Rect<WorldSpace>>,
    object: &mut FallingObject,
) -> Option<SliceEvent> {
    let hand = hand?;
    if object.sliced || !object.bounds().intersects(hand) {
        return None;
    }
    object.sliced = true;
    Some(SliceEvent {
        id: object.id,
        kind: object.kind,
        pos: object.pos,
        score_delta: object.kind.score_delta(),
    })
}
