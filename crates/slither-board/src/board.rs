//! The shared board: grid dimensions, item collections, and `step`.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

use dashmap::DashSet;
use indexmap::IndexMap;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use slither_core::{Position, Snake};

use crate::{BoardConfig, BoardError};

/// Outcome of advancing one snake by one cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveResult {
    /// Plain move onto an empty cell.
    Moved,
    /// Consumed a mouse; the snake grew and a replacement was spawned.
    AteMouse,
    /// Consumed a turbo item; the snake grew. Turbo is not replenished.
    AteTurbo,
    /// Entered a teleporter and came out at the paired exit.
    Teleported,
    /// The target cell holds an obstacle; the snake did not move.
    /// The caller is expected to register the death — the board never
    /// touches the ranking ledger.
    HitObstacle,
}

/// The authoritative shared grid state.
///
/// Obstacles and teleporters are fixed for the session; mice and turbo
/// are concurrent sets whose atomic check-and-remove is what guarantees
/// a contested item has exactly one winner. Many runner threads may call
/// [`Board::step`] concurrently — steps on disjoint cells never contend.
pub struct Board {
    width: i32,
    height: i32,
    mice_target: usize,
    obstacles: HashSet<Position>,
    /// Directional entry → exit map. Pairs are laid down in both
    /// directions, so the map size is even and constant.
    teleports: IndexMap<Position, Position>,
    mice: DashSet<Position>,
    turbo: DashSet<Position>,
    /// Placement RNG for replacement mice.
    rng: Mutex<ChaCha8Rng>,
}

impl Board {
    /// Build a board from `config`, placing every item population on
    /// distinct random cells (no two kinds share a cell at setup).
    pub fn new(config: BoardConfig) -> Result<Self, BoardError> {
        config.validate()?;
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let mut taken: HashSet<Position> = HashSet::new();

        let obstacles: HashSet<Position> =
            Self::place_distinct(&mut rng, &mut taken, config.obstacles, &config)
                .into_iter()
                .collect();
        let mice: DashSet<Position> = DashSet::new();
        for p in Self::place_distinct(&mut rng, &mut taken, config.mice, &config) {
            mice.insert(p);
        }
        let turbo: DashSet<Position> = DashSet::new();
        for p in Self::place_distinct(&mut rng, &mut taken, config.turbo, &config) {
            turbo.insert(p);
        }
        let mut teleports = IndexMap::new();
        let endpoints =
            Self::place_distinct(&mut rng, &mut taken, 2 * config.teleport_pairs, &config);
        for pair in endpoints.chunks(2) {
            teleports.insert(pair[0], pair[1]);
            teleports.insert(pair[1], pair[0]);
        }

        Ok(Self {
            width: config.width,
            height: config.height,
            mice_target: config.mice,
            obstacles,
            teleports,
            mice,
            turbo,
            rng: Mutex::new(rng),
        })
    }

    /// Board width in cells.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Board height in cells.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// The mice count the board replenishes to.
    pub fn mice_target(&self) -> usize {
        self.mice_target
    }

    /// Advance `snake` one cell in its current heading.
    ///
    /// Calling this on a dead snake is a defensive no-op reporting
    /// [`MoveResult::Moved`]; runners check aliveness first.
    ///
    /// Classification of the target cell, in fixed precedence order:
    /// obstacle, teleporter entry, mouse, turbo, empty. Mouse and turbo
    /// membership is decided by the atomic removal itself — a concurrent
    /// caller racing for the same item loses the removal and falls
    /// through to the next classification.
    pub fn step(&self, snake: &Snake) -> MoveResult {
        if !snake.is_alive() {
            return MoveResult::Moved;
        }
        let target = snake
            .head()
            .step(snake.direction())
            .wrapped(self.width, self.height);

        if self.obstacles.contains(&target) {
            return MoveResult::HitObstacle;
        }
        if let Some(&exit) = self.teleports.get(&target) {
            snake.advance(exit, false);
            return MoveResult::Teleported;
        }
        if self.mice.remove(&target).is_some() {
            snake.advance(target, true);
            self.spawn_mouse(target);
            return MoveResult::AteMouse;
        }
        if self.turbo.remove(&target).is_some() {
            snake.advance(target, true);
            return MoveResult::AteTurbo;
        }
        snake.advance(target, false);
        MoveResult::Moved
    }

    /// Obstacle cells (defensive copy).
    pub fn obstacles(&self) -> HashSet<Position> {
        self.obstacles.clone()
    }

    /// Current mice cells (defensive copy).
    pub fn mice(&self) -> HashSet<Position> {
        self.mice.iter().map(|p| *p).collect()
    }

    /// Remaining turbo cells (defensive copy).
    pub fn turbo(&self) -> HashSet<Position> {
        self.turbo.iter().map(|p| *p).collect()
    }

    /// The teleporter entry → exit map (defensive copy).
    pub fn teleports(&self) -> IndexMap<Position, Position> {
        self.teleports.clone()
    }

    /// Spawn a replacement mouse on a random free cell, restoring the
    /// mice count to its target.
    ///
    /// `consumed` is the cell the eater's head now occupies; the
    /// replacement never lands there.
    fn spawn_mouse(&self, consumed: Position) {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        // Rejection sampling terminates: config validation guarantees the
        // populations leave free cells even with `consumed` excluded.
        loop {
            let p = Position::new(rng.gen_range(0..self.width), rng.gen_range(0..self.height));
            if p == consumed
                || self.obstacles.contains(&p)
                || self.teleports.contains_key(&p)
                || self.turbo.contains(&p)
            {
                continue;
            }
            // Insert is the occupancy check against other mice.
            if self.mice.insert(p) {
                return;
            }
        }
    }

    /// Sample `count` cells not present in `taken`, marking them taken.
    fn place_distinct(
        rng: &mut ChaCha8Rng,
        taken: &mut HashSet<Position>,
        count: usize,
        config: &BoardConfig,
    ) -> Vec<Position> {
        let mut out = Vec::with_capacity(count);
        while out.len() < count {
            let p = Position::new(
                rng.gen_range(0..config.width),
                rng.gen_range(0..config.height),
            );
            if taken.insert(p) {
                out.push(p);
            }
        }
        out
    }
}
