//! Board configuration and validation.

use crate::BoardError;

/// Configuration for building a [`Board`](crate::Board).
///
/// Item counts are small constants by default; the mice count is also the
/// target the board replenishes to after each consumption.
#[derive(Clone, Debug)]
pub struct BoardConfig {
    /// Board width in cells. Must be positive. Default: 35.
    pub width: i32,
    /// Board height in cells. Must be positive. Default: 28.
    pub height: i32,
    /// Number of static obstacle cells. Default: 6.
    pub obstacles: usize,
    /// Target mice count, restored after each consumption. Default: 6.
    pub mice: usize,
    /// Number of turbo items. Consumed without replenishment. Default: 4.
    pub turbo: usize,
    /// Number of teleporter pairs. Each pair contributes two directional
    /// map entries, so the teleporter map always has an even, constant
    /// size. Default: 2.
    pub teleport_pairs: usize,
    /// Seed for item placement and replacement-mouse spawning.
    pub seed: u64,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            width: 35,
            height: 28,
            obstacles: 6,
            mice: 6,
            turbo: 4,
            teleport_pairs: 2,
            seed: 0,
        }
    }
}

impl BoardConfig {
    /// Check structural invariants: positive dimensions and populations
    /// that fit on the grid with at least one cell to spare (replacement
    /// mice need somewhere to land).
    pub fn validate(&self) -> Result<(), BoardError> {
        if self.width <= 0 || self.height <= 0 {
            return Err(BoardError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        let cells = (self.width as usize) * (self.height as usize);
        let occupied = self.obstacles + self.mice + self.turbo + 2 * self.teleport_pairs;
        if occupied >= cells {
            return Err(BoardError::Overcrowded { occupied, cells });
        }
        Ok(())
    }
}
