//! The race orchestrator: spawning, pause/resume, snapshot, shutdown.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock};
use std::thread::{self, JoinHandle};

use slither_board::Board;
use slither_core::{Direction, Position, Snake, SnakeId};

use crate::{DeathLedger, RaceConfig, RaceError, RaceSnapshot, SnakeRunner};

/// A full simulation: one board, N snakes, one runner thread each.
///
/// The pause protocol is two-phase: [`Race::pause`] first raises the
/// shared flag (runners stop entering new step cycles within one poll
/// quantum), then takes the board lock exclusively, which blocks until
/// every in-flight read holder has finished its current step. Snapshot
/// state assembled under that lock is therefore never torn.
pub struct Race {
    board: Arc<Board>,
    snakes: Vec<Arc<Snake>>,
    ledger: Arc<DeathLedger>,
    lock: Arc<RwLock<()>>,
    paused: Arc<AtomicBool>,
    stop: Arc<AtomicBool>,
    runners: Vec<JoinHandle<()>>,
    config: RaceConfig,
}

impl Race {
    /// Build a race from `config`. Snakes start on a staggered grid
    /// (`x = 2 + 3i`, `y = 2 + 2i`, wrapped) cycling through the four
    /// headings, so they spread out before the first contested cell.
    pub fn new(config: RaceConfig) -> Result<Self, RaceError> {
        config.validate()?;
        let board = Arc::new(Board::new(config.board.clone()).map_err(RaceError::Board)?);

        let snakes: Vec<Arc<Snake>> = (0..config.snakes)
            .map(|i| {
                let position = Position::new(2 + (i as i32) * 3, 2 + (i as i32) * 2)
                    .wrapped(board.width(), board.height());
                let direction = Direction::ALL[i % Direction::ALL.len()];
                Arc::new(Snake::new(SnakeId(i as u32), position, direction))
            })
            .collect();

        Ok(Self {
            board,
            snakes,
            ledger: Arc::new(DeathLedger::new()),
            lock: Arc::new(RwLock::new(())),
            paused: Arc::new(AtomicBool::new(false)),
            stop: Arc::new(AtomicBool::new(false)),
            runners: Vec::new(),
            config,
        })
    }

    /// Spawn one named runner thread per snake. Calling `start` twice
    /// is a no-op.
    pub fn start(&mut self) {
        if !self.runners.is_empty() {
            return;
        }
        self.runners = self
            .snakes
            .iter()
            .map(|snake| {
                let runner = SnakeRunner::new(
                    Arc::clone(snake),
                    Arc::clone(&self.board),
                    Arc::clone(&self.ledger),
                    Arc::clone(&self.lock),
                    Arc::clone(&self.paused),
                    Arc::clone(&self.stop),
                    self.config.runner.clone(),
                    self.config.seed,
                );
                thread::Builder::new()
                    .name(format!("slither-runner-{}", snake.id()))
                    .spawn(move || runner.run())
                    .expect("failed to spawn runner thread")
            })
            .collect();
    }

    /// Freeze the world and capture a consistent snapshot.
    ///
    /// Phase 1 raises the pause flag; phase 2 acquires the board lock
    /// exclusively and assembles the snapshot with no runner mid-step.
    /// Runners stay parked until [`Race::resume`].
    pub fn pause(&self) -> RaceSnapshot {
        self.paused.store(true, Ordering::Release);
        self.capture()
    }

    /// Let the runners re-enter their loops.
    pub fn resume(&self) {
        self.paused.store(false, Ordering::Release);
    }

    /// Capture a snapshot without toggling the pause flag. Typically
    /// called while already paused; safe at any time (the write lock
    /// alone guarantees no snake is observed mid-step).
    pub fn snapshot(&self) -> RaceSnapshot {
        self.capture()
    }

    /// Whether the pause flag is currently raised.
    pub fn is_paused(&self) -> bool {
        self.paused.load(Ordering::Acquire)
    }

    /// Turn a snake from the outside (input layer). Returns `false` for
    /// an unknown id. The opposite-direction guard applies as usual.
    pub fn steer(&self, id: SnakeId, direction: Direction) -> bool {
        match self.snakes.iter().find(|s| s.id() == id) {
            Some(snake) => {
                snake.turn(direction);
                true
            }
            None => false,
        }
    }

    /// The shared board.
    pub fn board(&self) -> &Arc<Board> {
        &self.board
    }

    /// Every snake in the race, in creation order.
    pub fn snakes(&self) -> &[Arc<Snake>] {
        &self.snakes
    }

    /// The death ledger.
    pub fn ledger(&self) -> &Arc<DeathLedger> {
        &self.ledger
    }

    /// Stop every runner and join their threads. Idempotent; every wait
    /// inside a runner is a short sleep or a bounded lock hold, so join
    /// completes promptly. The snakes' final state stays readable.
    pub fn shutdown(&mut self) {
        self.stop.store(true, Ordering::Release);
        for handle in self.runners.drain(..) {
            let _ = handle.join();
        }
    }

    fn capture(&self) -> RaceSnapshot {
        let _exclusive = self.lock.write().unwrap_or_else(PoisonError::into_inner);
        RaceSnapshot::capture(&self.snakes, self.ledger.worst())
    }
}

impl Drop for Race {
    fn drop(&mut self) {
        self.shutdown();
    }
}
