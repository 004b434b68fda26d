//! Concurrency layer for the Slither simulation.
//!
//! One [`SnakeRunner`] thread drives each snake; the [`Race`] orchestrator
//! owns the shared board, the pause flag, and the reader–writer lock that
//! makes [`RaceSnapshot`] construction torn-free. The [`DeathLedger`]
//! records a strict, gap-free ordering of death events under concurrent
//! writers.
//!
//! # Architecture
//!
//! ```text
//! Runner Threads (1 per snake)         Control Thread
//!     |                                    |
//!     | poll paused flag (10ms quantum)    |--pause(): paused = true
//!     | lock.read()                        |  lock.write()   <- blocks
//!     |   maybe_turn()                     |    longest_alive()
//!     |   board.step(snake)                |    ledger.worst()
//!     |   on HitObstacle:                  |    RaceSnapshot { .. }
//!     |     ledger.register(snake)         |  unlock
//!     |     snake.mark_dead(rank)          |--resume(): paused = false
//!     | unlock                             |
//!     | sleep(pace)  [40ms turbo / 80ms]   |--shutdown(): stop = true,
//!     |                                    |  join all runners
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod clock;
mod config;
mod ledger;
mod race;
mod runner;
mod snapshot;

pub use clock::RaceClock;
pub use config::{RaceConfig, RaceError, RunnerConfig};
pub use ledger::DeathLedger;
pub use race::Race;
pub use runner::SnakeRunner;
pub use snapshot::RaceSnapshot;
