//! Strongly-typed snake identifiers.

use std::fmt;

/// Identifies a snake within a race.
///
/// Snakes are created at race setup and assigned sequential IDs.
/// `SnakeId(n)` corresponds to the n-th snake in the race configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SnakeId(pub u32);

impl fmt::Display for SnakeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for SnakeId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}
