//! Concurrent Sharded Map (§4.B): a fixed-shard accumulator of `f64`
//! relevance values keyed by document id, used by the scorer's parallel
//! plus-phase to avoid serialising the hot accumulation loop behind one lock.
//!
//! Shard selection is `key % shard_count`; each shard is independently
//! lockable, so writers touching different shards never contend. This is
//! the same sharding idea the storage engine's text index uses for posting
//! segments (`shard_idx << 24 | term_id` in `text_fts.rs`), applied here to
//! an accumulator instead of a posting list.

use std::collections::BTreeMap;
use std::ops::{Deref, DerefMut};

use parking_lot::{Mutex, MutexGuard};

pub(crate) struct ShardedAccumulator {
    shards: Vec<Mutex<BTreeMap<i32, f64>>>,
}

impl ShardedAccumulator {
    pub(crate) fn new(shard_count: usize) -> Self {
        let shard_count = shard_count.max(1);
        Self {
            shards: (0..shard_count).map(|_| Mutex::new(BTreeMap::new())).collect(),
        }
    }

    fn shard_for(&self, key: i32) -> &Mutex<BTreeMap<i32, f64>> {
        let index = (key as i64).rem_euclid(self.shards.len() as i64) as usize;
        &self.shards[index]
    }

    /// Returns a scoped handle to `key`'s accumulator slot, creating it
    /// with value `0.0` if absent, and holding the shard's lock for the
    /// handle's lifetime.
    pub(crate) fn get_ref(&self, key: i32) -> AccumulatorRef<'_> {
        let guard = self.shard_for(key).lock();
        AccumulatorRef::new(guard, key)
    }

    /// Merges all shards into one ascending-ordered map. Intended to run
    /// after every writer handle from `get_ref` has been dropped.
    pub(crate) fn build_ordinary_map(&self) -> BTreeMap<i32, f64> {
        let mut merged = BTreeMap::new();
        for shard in &self.shards {
            merged.extend(shard.lock().iter());
        }
        merged
    }
}

pub(crate) struct AccumulatorRef<'a> {
    guard: MutexGuard<'a, BTreeMap<i32, f64>>,
    key: i32,
}

impl<'a> AccumulatorRef<'a> {
    fn new(mut guard: MutexGuard<'a, BTreeMap<i32, f64>>, key: i32) -> Self {
        guard.entry(key).or_insert(0.0);
        Self { guard, key }
    }

    pub(crate) fn add(&mut self, delta: f64) {
        *self.guard.get_mut(&self.key).expect("slot created in new()") += delta;
    }
}

impl<'a> Deref for AccumulatorRef<'a> {
    type Target = f64;
    fn deref(&self) -> &f64 {
        self.guard.get(&self.key).expect("slot created in new()")
    }
}

impl<'a> DerefMut for AccumulatorRef<'a> {
    fn deref_mut(&mut self) -> &mut f64 {
        self.guard.get_mut(&self.key).expect("slot created in new()")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rayon::prelude::*;

    #[test]
    fn accumulates_across_shards() {
        let acc = ShardedAccumulator::new(4);
        acc.get_ref(1).add(1.0);
        acc.get_ref(1).add(2.0);
        acc.get_ref(5).add(10.0);
        let merged = acc.build_ordinary_map();
        assert_eq!(merged.get(&1), Some(&3.0));
        assert_eq!(merged.get(&5), Some(&10.0));
    }

    #[test]
    fn survives_concurrent_writers_to_the_same_key() {
        let acc = ShardedAccumulator::new(16);
        (0..1000).into_par_iter().for_each(|_| {
            acc.get_ref(7).add(1.0);
        });
        let merged = acc.build_ordinary_map();
        assert_eq!(merged.get(&7), Some(&1000.0));
    }

    #[test]
    fn get_ref_creates_zero_slot_even_without_add() {
        let acc = ShardedAccumulator::new(4);
        let _ = acc.get_ref(42);
        let merged = acc.build_ordinary_map();
        assert_eq!(merged.get(&42), Some(&0.0));
    }
}
