//! Single-entry caches for derived views.

use log::trace;

/// Counters reported by [`crate::DataTable::memo_stats`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemoStats {
    pub hits: u64,
    pub misses: u64,
}

/// Keeps the last computed value and recomputes only when the key changes.
#[derive(Debug)]
pub(crate) struct Memo<K, V> {
    name: &'static str,
    entry: Option<(K, V)>,
    stats: MemoStats,
}

impl<K: PartialEq, V: Clone> Memo<K, V> {
    pub(crate) fn new(name: &'static str) -> Self {
        Self {
            name,
            entry: None,
            stats: MemoStats::default(),
        }
    }

    pub(crate) fn get_or_compute(&mut self, key: K, compute: impl FnOnce() -> V) -> V {
        if let Some((cached_key, value)) = &self.entry
            && *cached_key == key
        {
            self.stats.hits += 1;
            trace!("memo '{}' hit", self.name);
            return value.clone();
        }
        self.stats.misses += 1;
        trace!("memo '{}' miss", self.name);
        let value = compute();
        self.entry = Some((key, value.clone()));
        value
    }

    pub(crate) fn stats(&self) -> MemoStats {
        self.stats
    }
}
