//! Fixed-size transposition table keyed by Zobrist hash.
//!
//! Direct indexing with depth-preferred replacement. The table is private to
//! one search instance and cleared at the start of every root search, so no
//! entry outlives the search that produced it.

use crate::move_generation::move_generator::Action;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Exact,
    Lower,
    Upper,
}

#[derive(Debug, Clone, Copy)]
pub struct TTEntry {
    pub key: u64,
    pub depth: u8,
    pub score: i32,
    pub bound: Bound,
    pub best_action: Option<Action>,
}

impl TTEntry {
    /// The stored score when it is usable for a `depth`-ply search with window
    /// `(alpha, beta)`: the entry must be at least as deep, and its bound must
    /// settle the window.
    #[inline]
    pub fn usable_score(&self, depth: u8, alpha: i32, beta: i32) -> Option<i32> {
        if self.depth < depth {
            return None;
        }
        match self.bound {
            Bound::Exact => Some(self.score),
            Bound::Lower if self.score >= beta => Some(self.score),
            Bound::Upper if self.score <= alpha => Some(self.score),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TTStats {
    pub probes: u64,
    pub hits: u64,
    pub stores: u64,
}

#[derive(Debug, Clone)]
pub struct TranspositionTable {
    entries: Vec<Option<TTEntry>>,
    stats: TTStats,
}

impl TranspositionTable {
    pub fn new_with_mb(size_mb: usize) -> Self {
        let bytes = size_mb.max(1) * 1024 * 1024;
        let entry_size = std::mem::size_of::<Option<TTEntry>>().max(1);
        let count = (bytes / entry_size).max(1);
        Self {
            entries: vec![None; count],
            stats: TTStats::default(),
        }
    }

    #[inline]
    pub fn clear(&mut self) {
        self.entries.fill(None);
        self.stats = TTStats::default();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn stats(&self) -> TTStats {
        self.stats
    }

    #[inline]
    fn idx(&self, key: u64) -> usize {
        (key % self.entries.len() as u64) as usize
    }

    pub fn probe(&mut self, key: u64) -> Option<TTEntry> {
        self.stats.probes += 1;
        let idx = self.idx(key);
        let hit = self.entries[idx].filter(|e| e.key == key);
        if hit.is_some() {
            self.stats.hits += 1;
        }
        hit
    }

    /// Store `entry`, keeping a deeper result for the same position and
    /// otherwise letting the newer entry win the slot.
    pub fn store(&mut self, entry: TTEntry) {
        self.stats.stores += 1;
        let idx = self.idx(entry.key);
        let replace = match self.entries[idx] {
            None => true,
            Some(existing) if existing.key == entry.key => entry.depth >= existing.depth,
            Some(_) => true,
        };
        if replace {
            self.entries[idx] = Some(entry);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Bound, TTEntry, TranspositionTable};

    fn entry(key: u64, depth: u8, score: i32, bound: Bound) -> TTEntry {
        TTEntry {
            key,
            depth,
            score,
            bound,
            best_action: None,
        }
    }

    #[test]
    fn store_and_probe() {
        let mut tt = TranspositionTable::new_with_mb(1);
        tt.store(entry(123, 3, 42, Bound::Exact));
        let got = tt.probe(123).expect("entry should exist");
        assert_eq!(got.depth, 3);
        assert_eq!(got.score, 42);
        assert!(tt.probe(124).is_none());
        assert_eq!(tt.stats().probes, 2);
        assert_eq!(tt.stats().hits, 1);
    }

    #[test]
    fn depth_preferred_replacement() {
        let mut tt = TranspositionTable::new_with_mb(1);
        let key = 555;
        tt.store(entry(key, 2, 1, Bound::Upper));
        tt.store(entry(key, 1, 9, Bound::Exact));
        assert_eq!(tt.probe(key).expect("exists").score, 1);
        tt.store(entry(key, 4, 3, Bound::Lower));
        let got = tt.probe(key).expect("exists");
        assert_eq!(got.depth, 4);
        assert_eq!(got.score, 3);
    }

    #[test]
    fn shallower_entries_are_never_used() {
        let e = entry(1, 1, 50, Bound::Exact);
        assert_eq!(e.usable_score(1, -100, 100), Some(50));
        assert_eq!(e.usable_score(2, -100, 100), None);
    }

    #[test]
    fn bounds_must_settle_the_window() {
        let lower = entry(1, 3, 80, Bound::Lower);
        assert_eq!(lower.usable_score(2, 0, 60), Some(80));
        assert_eq!(lower.usable_score(2, 0, 100), None);

        let upper = entry(1, 3, -20, Bound::Upper);
        assert_eq!(upper.usable_score(2, 0, 60), Some(-20));
        assert_eq!(upper.usable_score(2, -50, 60), None);
    }

    #[test]
    fn clear_empties_table_and_stats() {
        let mut tt = TranspositionTable::new_with_mb(1);
        tt.store(entry(9, 1, 1, Bound::Exact));
        tt.clear();
        assert!(tt.probe(9).is_none());
        assert_eq!(tt.stats().stores, 0);
    }
}
