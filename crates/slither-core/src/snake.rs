//! The snake entity: a single-writer state machine with external readers.
//!
//! Each snake is mutated by exactly one runner thread (`advance`), but its
//! fields are read — and its direction written — from other threads: the
//! display layer reads positions, the input layer calls [`Snake::turn`].
//! The geometric state lives behind a `Mutex`; the alive flag and death
//! rank are atomics so that [`Snake::mark_dead`] stays idempotent under
//! concurrent callers without taking the lock.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::{Direction, Position, SnakeId};

/// Growth capacity a freshly created snake starts with.
///
/// A young snake lengthens on every advance (growing or not) until its
/// body reaches this capacity; after that, only eating extends it.
const INITIAL_MAX_LEN: usize = 5;

/// Geometric state guarded by the snake's mutex.
struct SnakeState {
    /// Body cells, head at the front, oldest segment at the back.
    body: VecDeque<Position>,
    direction: Direction,
    /// Length the body may grow to before the tail is trimmed.
    max_len: usize,
}

/// A single racing snake.
///
/// Created alive with length 1. Transitions one-way to dead via
/// [`Snake::mark_dead`]; after that, `turn` and `advance` are no-ops.
pub struct Snake {
    id: SnakeId,
    state: Mutex<SnakeState>,
    alive: AtomicBool,
    /// Death rank; 0 is the "not dead" sentinel, assigned ranks are ≥ 1.
    death_rank: AtomicU64,
}

impl Snake {
    /// Create a live snake of length 1 at `position`, heading `direction`.
    pub fn new(id: SnakeId, position: Position, direction: Direction) -> Self {
        let mut body = VecDeque::with_capacity(INITIAL_MAX_LEN);
        body.push_front(position);
        Self {
            id,
            state: Mutex::new(SnakeState {
                body,
                direction,
                max_len: INITIAL_MAX_LEN,
            }),
            alive: AtomicBool::new(true),
            death_rank: AtomicU64::new(0),
        }
    }

    /// This snake's identifier.
    pub fn id(&self) -> SnakeId {
        self.id
    }

    /// Set the heading. No-op when dead or when `direction` is the exact
    /// opposite of the current heading (instant reversal would fold the
    /// body onto itself).
    ///
    /// Safe to call from an input thread concurrently with the owning
    /// runner; last writer wins.
    pub fn turn(&self, direction: Direction) {
        if !self.is_alive() {
            return;
        }
        let mut state = self.lock_state();
        if direction != state.direction.opposite() {
            state.direction = direction;
        }
    }

    /// Push `new_head` onto the front of the body. No-op when dead.
    ///
    /// When `grew` is true the growth capacity increases by one; the
    /// tail is then trimmed so the body never exceeds capacity. A
    /// non-growing move still shifts the body by one cell once the
    /// capacity is reached.
    pub fn advance(&self, new_head: Position, grew: bool) {
        if !self.is_alive() {
            return;
        }
        let mut state = self.lock_state();
        state.body.push_front(new_head);
        if grew {
            state.max_len += 1;
        }
        while state.body.len() > state.max_len {
            state.body.pop_back();
        }
    }

    /// Record this snake's death at `rank` (must be ≥ 1).
    ///
    /// Idempotent under concurrent callers: only the first caller's rank
    /// is retained, later calls are no-ops. The rank is published before
    /// the alive flag flips so a reader that observes `is_alive() ==
    /// false` also observes the rank.
    pub fn mark_dead(&self, rank: u64) {
        debug_assert!(rank >= 1, "death rank must be ≥ 1");
        if self
            .death_rank
            .compare_exchange(0, rank, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
        {
            self.alive.store(false, Ordering::Release);
        }
    }

    /// Whether this snake is still racing.
    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Acquire)
    }

    /// The rank at which this snake died (1 = first death), or `None`
    /// while it is alive.
    pub fn death_rank(&self) -> Option<u64> {
        match self.death_rank.load(Ordering::Acquire) {
            0 => None,
            rank => Some(rank),
        }
    }

    /// Current head cell.
    pub fn head(&self) -> Position {
        let state = self.lock_state();
        // Invariant: the body never empties (length ≥ 1 from creation).
        state.body[0]
    }

    /// Current heading.
    pub fn direction(&self) -> Direction {
        self.lock_state().direction
    }

    /// Current body length (≥ 1).
    pub fn length(&self) -> usize {
        self.lock_state().body.len()
    }

    /// An owned, head-first copy of the body, safe to iterate while the
    /// snake keeps moving.
    pub fn body(&self) -> Vec<Position> {
        self.lock_state().body.iter().copied().collect()
    }

    /// Lock the geometric state, recovering from poisoning.
    ///
    /// A poisoned mutex here means some thread panicked mid-update, but
    /// every update below leaves the state internally consistent, so the
    /// inner value is still safe to use.
    fn lock_state(&self) -> MutexGuard<'_, SnakeState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
