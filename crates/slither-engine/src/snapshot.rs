//! Point-in-time race state captured under the exclusive lock.

use std::sync::Arc;

use slither_core::Snake;

/// An immutable bundle of race state, built only while every runner is
/// outside its step critical section (the pause protocol's write lock).
///
/// The snapshot holds references to the live snake objects, not deep
/// copies; consistency comes from capture-under-exclusion, and remains
/// meaningful for display because runners stay paused while it is read.
pub struct RaceSnapshot {
    /// Every snake in the race, dead or alive, in creation order.
    pub snakes: Vec<Arc<Snake>>,
    /// The longest currently-alive snake (first encountered wins ties),
    /// or `None` when no snake is alive.
    pub longest_alive: Option<Arc<Snake>>,
    /// The first snake to die ("worst"), or `None` when none has.
    pub worst: Option<Arc<Snake>>,
}

impl RaceSnapshot {
    /// Build a snapshot from the full snake roster and the ledger's
    /// worst entry. Called with the board write lock held.
    pub(crate) fn capture(snakes: &[Arc<Snake>], worst: Option<Arc<Snake>>) -> Self {
        // First encountered wins ties, so replace only on strictly longer.
        let mut longest_alive: Option<Arc<Snake>> = None;
        for s in snakes.iter().filter(|s| s.is_alive()) {
            let longer = longest_alive
                .as_ref()
                .map_or(true, |best| s.length() > best.length());
            if longer {
                longest_alive = Some(Arc::clone(s));
            }
        }
        Self {
            snakes: snakes.to_vec(),
            longest_alive,
            worst,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slither_core::{Direction, Position, SnakeId};

    fn snake(id: u32, len: usize) -> Arc<Snake> {
        let s = Snake::new(SnakeId(id), Position::new(0, id as i32), Direction::Right);
        for i in 1..len {
            s.advance(Position::new(i as i32, id as i32), true);
        }
        Arc::new(s)
    }

    #[test]
    fn longest_alive_picks_the_maximum_length() {
        let snakes = vec![snake(0, 2), snake(1, 5), snake(2, 3)];
        let snap = RaceSnapshot::capture(&snakes, None);
        assert_eq!(snap.longest_alive.as_ref().map(|s| s.id()), Some(SnakeId(1)));
        assert_eq!(snap.snakes.len(), 3);
        assert!(snap.worst.is_none());
    }

    #[test]
    fn ties_go_to_the_first_encountered() {
        let snakes = vec![snake(0, 4), snake(1, 4), snake(2, 2)];
        let snap = RaceSnapshot::capture(&snakes, None);
        assert_eq!(snap.longest_alive.as_ref().map(|s| s.id()), Some(SnakeId(0)));
    }

    #[test]
    fn dead_snakes_are_listed_but_never_longest() {
        let snakes = vec![snake(0, 6), snake(1, 2)];
        snakes[0].mark_dead(1);
        let snap = RaceSnapshot::capture(&snakes, Some(Arc::clone(&snakes[0])));
        assert_eq!(snap.longest_alive.as_ref().map(|s| s.id()), Some(SnakeId(1)));
        assert_eq!(snap.worst.as_ref().map(|s| s.id()), Some(SnakeId(0)));
        assert_eq!(snap.snakes.len(), 2);
    }

    #[test]
    fn all_dead_means_no_longest() {
        let snakes = vec![snake(0, 2)];
        snakes[0].mark_dead(1);
        let snap = RaceSnapshot::capture(&snakes, Some(Arc::clone(&snakes[0])));
        assert!(snap.longest_alive.is_none());
    }
}
