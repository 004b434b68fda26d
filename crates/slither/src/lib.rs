//! Slither: a concurrent snake-race simulation.
//!
//! Dozens of snakes race on a shared toroidal board, each driven by its
//! own thread, competing for mice, turbo boosts, and teleporters. The
//! engineering core is the concurrency contract: atomic single-winner
//! item consumption, a two-phase pause protocol that freezes the world
//! for torn-free snapshots, and a gap-free death-ranking ledger.
//!
//! This is the top-level facade crate that re-exports the public API
//! from all Slither sub-crates. For most users, adding `slither` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use slither::prelude::*;
//! use std::time::Duration;
//!
//! let mut race = Race::new(RaceConfig {
//!     board: BoardConfig { width: 20, height: 20, ..Default::default() },
//!     snakes: 8,
//!     ..Default::default()
//! })
//! .unwrap();
//!
//! race.start();
//! std::thread::sleep(Duration::from_millis(50));
//!
//! // Freeze the world and inspect a consistent snapshot.
//! let snapshot = race.pause();
//! assert_eq!(snapshot.snakes.len(), 8);
//! if let Some(longest) = &snapshot.longest_alive {
//!     println!("longest alive: snake {} at {}", longest.id(), longest.length());
//! }
//!
//! race.resume();
//! race.shutdown();
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `slither-core` | `Position`, `Direction`, `SnakeId`, `Snake` |
//! | [`board`] | `slither-board` | `Board`, `BoardConfig`, `MoveResult` |
//! | [`engine`] | `slither-engine` | `Race`, runners, ledger, snapshot, clock |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core value types and the snake entity (`slither-core`).
pub use slither_core as types;

/// The shared board and its step protocol (`slither-board`).
pub use slither_board as board;

/// Runner threads, pause protocol, and death ledger (`slither-engine`).
pub use slither_engine as engine;

/// The types most callers need, re-exported flat.
pub mod prelude {
    pub use slither_board::{Board, BoardConfig, BoardError, MoveResult};
    pub use slither_core::{Direction, Position, Snake, SnakeId};
    pub use slither_engine::{
        DeathLedger, Race, RaceClock, RaceConfig, RaceError, RaceSnapshot, RunnerConfig,
        SnakeRunner,
    };
}
