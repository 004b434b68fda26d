//! Shared board state and the step mutation protocol for Slither.
//!
//! The [`Board`] is the one piece of state every runner thread touches.
//! Its design is two-tier: item consumption (mice, turbo) is made safe
//! with atomic check-and-remove on concurrent sets, so concurrent
//! [`Board::step`] calls on disjoint cells never contend; the coarser
//! reader–writer lock that makes whole-world snapshots consistent lives
//! in the engine crate, not here.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod board;
mod config;
mod error;

pub use board::{Board, MoveResult};
pub use config::BoardConfig;
pub use error::BoardError;
