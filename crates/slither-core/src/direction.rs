//! The four unit movement directions.

/// Direction of travel on the grid, in screen coordinates
/// (`Up` decreases `y`, `Down` increases it).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward row 0.
    Up,
    /// Toward the bottom row.
    Down,
    /// Toward column 0.
    Left,
    /// Toward the rightmost column.
    Right,
}

impl Direction {
    /// All four directions, for random-turn sampling.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The `(dx, dy)` unit vector for this direction.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// The reversal of this direction.
    ///
    /// Turning a snake to the opposite of its current heading is a
    /// no-op (it would fold the body back onto itself).
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}
