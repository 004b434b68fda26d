//! The death ledger: a concurrent, monotonic ranking of death events.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use dashmap::DashMap;

use slither_core::{Snake, SnakeId};

/// Ranks deaths in strict arrival order under concurrent writers.
///
/// Rank 1 is the first death — the "worst" snake, a tie-break the
/// display layer depends on. Each runner registers its own snake
/// exactly once, immediately before calling `mark_dead` with the
/// returned rank.
#[derive(Default)]
pub struct DeathLedger {
    counter: AtomicU64,
    deaths: DashMap<SnakeId, (u64, Arc<Snake>)>,
}

impl DeathLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `snake`'s death and return its rank.
    ///
    /// Registration is idempotent per snake: a repeated call returns the
    /// originally stored rank. The counter itself still advances on
    /// every call, so misuse (double registration) leaves a gap in the
    /// sequence rather than reassigning a rank.
    pub fn register(&self, snake: &Arc<Snake>) -> u64 {
        let rank = self.counter.fetch_add(1, Ordering::AcqRel) + 1;
        let entry = self
            .deaths
            .entry(snake.id())
            .or_insert_with(|| (rank, Arc::clone(snake)));
        entry.0
    }

    /// The snake holding the minimum rank (first to die), or `None` when
    /// no deaths have been recorded.
    ///
    /// Tolerates registrations happening concurrently with the scan; the
    /// result reflects some subset of them.
    pub fn worst(&self) -> Option<Arc<Snake>> {
        self.deaths
            .iter()
            .min_by_key(|entry| entry.value().0)
            .map(|entry| Arc::clone(&entry.value().1))
    }

    /// Number of distinct snakes registered so far.
    pub fn death_count(&self) -> usize {
        self.deaths.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slither_core::{Direction, Position};
    use std::thread;

    fn snake(id: u32) -> Arc<Snake> {
        Arc::new(Snake::new(
            SnakeId(id),
            Position::new(0, 0),
            Direction::Right,
        ))
    }

    // ── Sequential semantics ────────────────────────────────────

    #[test]
    fn ranks_are_assigned_in_arrival_order() {
        let ledger = DeathLedger::new();
        assert_eq!(ledger.register(&snake(0)), 1);
        assert_eq!(ledger.register(&snake(1)), 2);
        assert_eq!(ledger.register(&snake(2)), 3);
        assert_eq!(ledger.death_count(), 3);
    }

    #[test]
    fn re_registration_returns_the_original_rank() {
        let ledger = DeathLedger::new();
        let s = snake(0);
        let first = ledger.register(&s);
        s.mark_dead(first);
        assert_eq!(ledger.register(&s), first);
        assert_eq!(ledger.death_count(), 1);
    }

    #[test]
    fn worst_is_the_first_death() {
        let ledger = DeathLedger::new();
        let first = snake(4);
        ledger.register(&first);
        ledger.register(&snake(1));
        ledger.register(&snake(2));

        let worst = ledger.worst().expect("deaths were recorded");
        assert_eq!(worst.id(), SnakeId(4));
    }

    #[test]
    fn worst_is_none_without_deaths() {
        assert!(DeathLedger::new().worst().is_none());
    }

    // ── Concurrency ─────────────────────────────────────────────

    #[test]
    fn concurrent_registration_yields_unique_ranks() {
        let ledger = Arc::new(DeathLedger::new());
        let handles: Vec<_> = (0..16u32)
            .map(|i| {
                let ledger = Arc::clone(&ledger);
                thread::spawn(move || {
                    let s = snake(i);
                    let rank = ledger.register(&s);
                    s.mark_dead(rank);
                    rank
                })
            })
            .collect();

        let mut ranks: Vec<u64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        ranks.sort_unstable();
        ranks.dedup();
        assert_eq!(ranks.len(), 16, "every death got a distinct rank");
        assert_eq!(*ranks.first().unwrap(), 1);
        assert_eq!(*ranks.last().unwrap(), 16);

        let worst = ledger.worst().expect("deaths were recorded");
        assert_eq!(worst.death_rank(), Some(1));
    }
}
