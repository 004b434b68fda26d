//! The per-snake scheduling loop.
//!
//! One `SnakeRunner` runs on its own OS thread and is the only mutator
//! of its snake's body. Each iteration: poll the pause flag, take the
//! board lock in read mode, maybe turn, step the board, release, sleep
//! a pacing interval. The loop exits on death or when the stop flag is
//! raised; both are observed within one sleep quantum.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock};
use std::thread;

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use slither_board::{Board, MoveResult};
use slither_core::{Direction, Snake};

use crate::{DeathLedger, RunnerConfig};

/// Drives one snake until it dies or the race is stopped.
pub struct SnakeRunner {
    snake: Arc<Snake>,
    board: Arc<Board>,
    ledger: Arc<DeathLedger>,
    /// Shared/exclusive lock coordinating steps with snapshot capture.
    /// Runners hold it in read mode for one turn+step sequence.
    lock: Arc<RwLock<()>>,
    paused: Arc<AtomicBool>,
    stop: Arc<AtomicBool>,
    config: RunnerConfig,
    /// Remaining boosted iterations from the last turbo item.
    turbo_ticks: u32,
    rng: ChaCha8Rng,
}

impl SnakeRunner {
    /// Create a runner for `snake`. The RNG is seeded from `seed` mixed
    /// with the snake id so runners of the same race stay decorrelated.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        snake: Arc<Snake>,
        board: Arc<Board>,
        ledger: Arc<DeathLedger>,
        lock: Arc<RwLock<()>>,
        paused: Arc<AtomicBool>,
        stop: Arc<AtomicBool>,
        config: RunnerConfig,
        seed: u64,
    ) -> Self {
        let rng = ChaCha8Rng::seed_from_u64(seed ^ u64::from(snake.id().0).wrapping_mul(0x9e37));
        Self {
            snake,
            board,
            ledger,
            lock,
            paused,
            stop,
            config,
            turbo_ticks: 0,
            rng,
        }
    }

    /// Run the loop to completion. Consumes the runner; the snake's
    /// final state stays readable through the shared `Arc`.
    pub fn run(mut self) {
        while !self.stop.load(Ordering::Acquire) && self.snake.is_alive() {
            // Cooperative pause: finish nothing mid-iteration, just park
            // between iterations until the flag clears.
            while self.paused.load(Ordering::Acquire) {
                if self.stop.load(Ordering::Acquire) {
                    return;
                }
                thread::sleep(self.config.pause_poll);
            }

            {
                let lock = Arc::clone(&self.lock);
                let _shared = lock.read().unwrap_or_else(PoisonError::into_inner);
                self.maybe_turn();
                match self.board.step(&self.snake) {
                    MoveResult::HitObstacle => {
                        let rank = self.ledger.register(&self.snake);
                        self.snake.mark_dead(rank);
                        return;
                    }
                    MoveResult::AteTurbo => self.turbo_ticks = self.config.turbo_window,
                    _ => {}
                }
            }

            let pace = if self.turbo_ticks > 0 {
                self.turbo_ticks -= 1;
                self.config.turbo_pace
            } else {
                self.config.base_pace
            };
            thread::sleep(pace);
        }
    }

    /// Occasionally pick a random heading; boosted snakes turn less.
    fn maybe_turn(&mut self) {
        let chance = if self.turbo_ticks > 0 {
            self.config.turbo_turn_chance
        } else {
            self.config.turn_chance
        };
        if self.rng.gen::<f64>() < chance {
            let dir = Direction::ALL[self.rng.gen_range(0..Direction::ALL.len())];
            self.snake.turn(dir);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slither_board::BoardConfig;
    use slither_core::{Position, SnakeId};
    use std::time::Duration;

    fn fast_config() -> RunnerConfig {
        RunnerConfig {
            base_pace: Duration::from_millis(1),
            turbo_pace: Duration::from_millis(1),
            pause_poll: Duration::from_millis(1),
            // Keep headings deterministic in targeted tests.
            turn_chance: 0.0,
            turbo_turn_chance: 0.0,
            ..RunnerConfig::default()
        }
    }

    struct Fixture {
        board: Arc<Board>,
        ledger: Arc<DeathLedger>,
        lock: Arc<RwLock<()>>,
        paused: Arc<AtomicBool>,
        stop: Arc<AtomicBool>,
    }

    fn fixture(config: BoardConfig) -> Fixture {
        Fixture {
            board: Arc::new(Board::new(config).unwrap()),
            ledger: Arc::new(DeathLedger::new()),
            lock: Arc::new(RwLock::new(())),
            paused: Arc::new(AtomicBool::new(false)),
            stop: Arc::new(AtomicBool::new(false)),
        }
    }

    fn spawn_runner(fx: &Fixture, snake: &Arc<Snake>) -> thread::JoinHandle<()> {
        let runner = SnakeRunner::new(
            Arc::clone(snake),
            Arc::clone(&fx.board),
            Arc::clone(&fx.ledger),
            Arc::clone(&fx.lock),
            Arc::clone(&fx.paused),
            Arc::clone(&fx.stop),
            fast_config(),
            42,
        );
        thread::spawn(move || runner.run())
    }

    fn empty_board_10x10() -> BoardConfig {
        BoardConfig {
            width: 10,
            height: 10,
            obstacles: 0,
            mice: 0,
            turbo: 0,
            teleport_pairs: 0,
            seed: 1,
        }
    }

    // ── Movement and stop ───────────────────────────────────────

    #[test]
    fn runner_moves_its_snake() {
        let fx = fixture(empty_board_10x10());
        let snake = Arc::new(Snake::new(SnakeId(0), Position::new(0, 0), Direction::Right));
        let start = snake.head();

        let handle = spawn_runner(&fx, &snake);
        thread::sleep(Duration::from_millis(50));
        fx.stop.store(true, Ordering::Release);
        handle.join().unwrap();

        assert_ne!(snake.head(), start, "snake should have moved");
        assert!(snake.is_alive());
    }

    #[test]
    fn stop_is_honored_while_paused() {
        let fx = fixture(empty_board_10x10());
        fx.paused.store(true, Ordering::Release);
        let snake = Arc::new(Snake::new(SnakeId(0), Position::new(0, 0), Direction::Right));

        let handle = spawn_runner(&fx, &snake);
        thread::sleep(Duration::from_millis(20));
        fx.stop.store(true, Ordering::Release);
        handle.join().unwrap();

        assert_eq!(snake.head(), Position::new(0, 0), "paused snake never moved");
    }

    #[test]
    fn pause_freezes_movement_until_resume() {
        let fx = fixture(empty_board_10x10());
        fx.paused.store(true, Ordering::Release);
        let snake = Arc::new(Snake::new(SnakeId(0), Position::new(0, 0), Direction::Right));

        let handle = spawn_runner(&fx, &snake);
        thread::sleep(Duration::from_millis(30));
        assert_eq!(snake.head(), Position::new(0, 0));

        fx.paused.store(false, Ordering::Release);
        thread::sleep(Duration::from_millis(50));
        assert_ne!(snake.head(), Position::new(0, 0), "resumed snake moves");

        fx.stop.store(true, Ordering::Release);
        handle.join().unwrap();
    }

    // ── Death ───────────────────────────────────────────────────

    #[test]
    fn obstacle_death_registers_in_the_ledger() {
        let config = BoardConfig {
            obstacles: 1,
            ..empty_board_10x10()
        };
        let fx = fixture(config);
        let obstacle = *fx.board.obstacles().iter().next().unwrap();
        // Aim straight at the obstacle from the neighbouring cell.
        let start = Position::new(obstacle.x - 1, obstacle.y).wrapped(10, 10);
        let snake = Arc::new(Snake::new(SnakeId(0), start, Direction::Right));

        let handle = spawn_runner(&fx, &snake);
        handle.join().unwrap();

        assert!(!snake.is_alive());
        assert_eq!(snake.death_rank(), Some(1));
        assert_eq!(fx.ledger.death_count(), 1);
        assert_eq!(snake.head(), start, "head never entered the obstacle");
    }
}
