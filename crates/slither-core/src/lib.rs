//! Core types and shared entity state for the Slither simulation.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the grid value types ([`Position`], [`Direction`]), the strongly-typed
//! [`SnakeId`], and the [`Snake`] entity whose state is shared between
//! its owning runner thread and external readers.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod direction;
mod id;
mod position;
mod snake;

pub use direction::Direction;
pub use id::SnakeId;
pub use position::Position;
pub use snake::Snake;
