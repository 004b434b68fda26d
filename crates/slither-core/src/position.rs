//! Integer grid coordinates with toroidal wrap-around.

use std::fmt;

use crate::Direction;

/// A cell on the board, addressed by column (`x`) and row (`y`).
///
/// Positions compare and hash by value. Board code always normalizes
/// positions into `[0, width) × [0, height)` via [`Position::wrapped`]
/// after a move, so a stored position is never out of bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Column, increasing to the right.
    pub x: i32,
    /// Row, increasing downward (screen coordinates).
    pub y: i32,
}

impl Position {
    /// Create a position from raw coordinates.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one step in `direction`, un-wrapped.
    ///
    /// The result may lie outside the board; callers wrap it with
    /// [`Position::wrapped`] against the board dimensions.
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.offset();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Normalize into `[0, width) × [0, height)` (toroidal topology).
    ///
    /// Uses Euclidean-style wrap so that stepping off the left edge of a
    /// `width`-wide board lands on `width - 1`, not on a negative cell.
    pub fn wrapped(self, width: i32, height: i32) -> Self {
        Self {
            x: (self.x % width + width) % width,
            y: (self.y % height + height) % height,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ── Wrap-around ─────────────────────────────────────────────

    #[test]
    fn wraps_off_right_edge() {
        let p = Position::new(9, 5).step(Direction::Right).wrapped(10, 10);
        assert_eq!(p, Position::new(0, 5));
    }

    #[test]
    fn wraps_off_left_edge() {
        let p = Position::new(0, 3).step(Direction::Left).wrapped(10, 10);
        assert_eq!(p, Position::new(9, 3));
    }

    #[test]
    fn wraps_off_bottom_edge() {
        let p = Position::new(5, 9).step(Direction::Down).wrapped(10, 10);
        assert_eq!(p, Position::new(5, 0));
    }

    #[test]
    fn wraps_off_top_edge() {
        let p = Position::new(5, 0).step(Direction::Up).wrapped(10, 10);
        assert_eq!(p, Position::new(5, 9));
    }

    #[test]
    fn interior_step_does_not_wrap() {
        let p = Position::new(4, 4).step(Direction::Right).wrapped(10, 10);
        assert_eq!(p, Position::new(5, 4));
    }

    // ── Property tests ──────────────────────────────────────────

    fn arb_direction() -> impl Strategy<Value = Direction> {
        prop_oneof![
            Just(Direction::Up),
            Just(Direction::Down),
            Just(Direction::Left),
            Just(Direction::Right),
        ]
    }

    proptest! {
        #[test]
        fn wrapped_is_always_in_bounds(
            x in -100i32..100,
            y in -100i32..100,
            width in 1i32..50,
            height in 1i32..50,
        ) {
            let p = Position::new(x, y).wrapped(width, height);
            prop_assert!(p.x >= 0 && p.x < width);
            prop_assert!(p.y >= 0 && p.y < height);
        }

        #[test]
        fn step_then_opposite_round_trips(
            x in 0i32..50,
            y in 0i32..50,
            width in 2i32..50,
            height in 2i32..50,
            dir in arb_direction(),
        ) {
            let x = x % width;
            let y = y % height;
            let start = Position::new(x, y);
            let there = start.step(dir).wrapped(width, height);
            let back = there.step(dir.opposite()).wrapped(width, height);
            prop_assert_eq!(back, start);
        }

        #[test]
        fn wrapped_is_idempotent(
            x in -100i32..100,
            y in -100i32..100,
            width in 1i32..50,
            height in 1i32..50,
        ) {
            let once = Position::new(x, y).wrapped(width, height);
            prop_assert_eq!(once.wrapped(width, height), once);
        }
    }
}
