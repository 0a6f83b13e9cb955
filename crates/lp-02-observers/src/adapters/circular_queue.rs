//! # Circular Queue Pool
//!
//! Per-shard rotating observer lists behind a single mutex.
//!
//! Each call snapshots `list[cursor..] ++ list[..cursor]` and advances the
//! cursor by one, so over any full rotation every replica of a shard leads
//! the returned list exactly once. The cursor read, snapshot copy, and cursor
//! advance happen inside one critical section; the multiset of observers
//! returned over a full rotation always equals the configured multiset.

use crate::domain::ObserverError;
use crate::ports::NodesProvider;
use parking_lot::Mutex;
use shared_types::{NodeData, ShardId};
use std::collections::HashMap;
use tracing::debug;

/// Rotating pool over a configured observer fleet.
#[derive(Debug)]
pub struct CircularQueuePool {
    state: Mutex<PoolState>,
}

#[derive(Debug)]
struct PoolState {
    by_shard: HashMap<ShardId, RotatingList>,
    all: RotatingList,
}

#[derive(Debug)]
struct RotatingList {
    nodes: Vec<NodeData>,
    cursor: usize,
}

impl RotatingList {
    fn new(nodes: Vec<NodeData>) -> Self {
        Self { nodes, cursor: 0 }
    }

    /// Snapshot the list starting at the cursor, then advance it.
    fn next_rotation(&mut self) -> Vec<NodeData> {
        let mut snapshot = Vec::with_capacity(self.nodes.len());
        snapshot.extend_from_slice(&self.nodes[self.cursor..]);
        snapshot.extend_from_slice(&self.nodes[..self.cursor]);

        self.cursor = (self.cursor + 1) % self.nodes.len();
        snapshot
    }
}

impl CircularQueuePool {
    /// Build a pool from the configured observer list.
    ///
    /// The configured order is preserved as the rotation base order, both per
    /// shard and for the flattened fleet.
    pub fn new(observers: Vec<NodeData>) -> Result<Self, ObserverError> {
        if observers.is_empty() {
            return Err(ObserverError::EmptyObserversList);
        }

        let mut by_shard: HashMap<ShardId, Vec<NodeData>> = HashMap::new();
        for node in &observers {
            by_shard.entry(node.shard_id).or_default().push(node.clone());
        }

        debug!(
            observers = observers.len(),
            shards = by_shard.len(),
            "[lp-02] observer pool created"
        );

        Ok(Self {
            state: Mutex::new(PoolState {
                by_shard: by_shard
                    .into_iter()
                    .map(|(shard, nodes)| (shard, RotatingList::new(nodes)))
                    .collect(),
                all: RotatingList::new(observers),
            }),
        })
    }
}

impl NodesProvider for CircularQueuePool {
    fn get_by_shard(&self, shard_id: ShardId) -> Result<Vec<NodeData>, ObserverError> {
        let mut state = self.state.lock();
        let list = state
            .by_shard
            .get_mut(&shard_id)
            .ok_or(ObserverError::ShardNotAvailable(shard_id))?;

        Ok(list.next_rotation())
    }

    fn get_all(&self) -> Result<Vec<NodeData>, ObserverError> {
        Ok(self.state.lock().all.next_rotation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn nodes(addresses: &[&str], shard_id: ShardId) -> Vec<NodeData> {
        addresses
            .iter()
            .map(|a| NodeData::new(*a, shard_id))
            .collect()
    }

    fn addresses(observers: &[NodeData]) -> Vec<&str> {
        observers.iter().map(|o| o.address.as_str()).collect()
    }

    #[test]
    fn test_new_empty_list_should_err() {
        let err = CircularQueuePool::new(Vec::new()).unwrap_err();
        assert_eq!(err, ObserverError::EmptyObserversList);
    }

    #[test]
    fn test_get_by_shard_unknown_shard_should_err() {
        let pool = CircularQueuePool::new(nodes(&["addr1"], 0)).unwrap();
        let err = pool.get_by_shard(37).unwrap_err();
        assert_eq!(err, ObserverError::ShardNotAvailable(37));
    }

    #[test]
    fn test_get_by_shard_should_work() {
        let mut fleet = nodes(&["dummy1"], 0);
        fleet.extend(nodes(&["dummy2"], 1));
        let pool = CircularQueuePool::new(fleet).unwrap();

        let observers = pool.get_by_shard(0).unwrap();
        assert_eq!(addresses(&observers), vec!["dummy1"]);
    }

    #[test]
    fn test_get_by_shard_balances_observers() {
        let pool = CircularQueuePool::new(nodes(&["addr1", "addr2", "addr3"], 0)).unwrap();

        let res1 = pool.get_by_shard(0).unwrap();
        let res2 = pool.get_by_shard(0).unwrap();
        let res3 = pool.get_by_shard(0).unwrap();
        let res4 = pool.get_by_shard(0).unwrap();

        assert_eq!(addresses(&res1), vec!["addr1", "addr2", "addr3"]);
        assert_eq!(addresses(&res2), vec!["addr2", "addr3", "addr1"]);
        assert_eq!(addresses(&res3), vec!["addr3", "addr1", "addr2"]);
        // After a full rotation the queue is back where it started.
        assert_eq!(res1, res4);
    }

    #[test]
    fn test_get_all_should_work() {
        let mut fleet = nodes(&["dummy1"], 0);
        fleet.extend(nodes(&["dummy2"], 1));
        let pool = CircularQueuePool::new(fleet).unwrap();

        let observers = pool.get_all().unwrap();
        assert_eq!(observers.len(), 2);
    }

    #[test]
    fn test_get_all_balances_observers() {
        let pool = CircularQueuePool::new(nodes(&["addr1", "addr2", "addr3"], 0)).unwrap();

        let res1 = pool.get_all().unwrap();
        let res2 = pool.get_all().unwrap();
        assert_ne!(res1, res2);

        let _ = pool.get_all().unwrap();
        let res4 = pool.get_all().unwrap();
        assert_eq!(res1, res4);
    }

    #[test]
    fn test_returned_snapshot_is_independent() {
        let pool = CircularQueuePool::new(nodes(&["addr1", "addr2"], 0)).unwrap();

        let mut observers = pool.get_by_shard(0).unwrap();
        observers.sort_by(|a, b| b.address.cmp(&a.address));
        observers.pop();

        // Mutating the snapshot must not disturb the rotation cycle.
        let _ = pool.get_by_shard(0).unwrap();
        let res3 = pool.get_by_shard(0).unwrap();
        assert_eq!(addresses(&res3), vec!["addr1", "addr2"]);
    }

    #[test]
    fn test_concurrent_get_all_spreads_leaders_evenly() {
        let fleet = nodes(&["addr1", "addr2", "addr3", "addr4", "addr5"], 0);
        let total = fleet.len();
        let pool = Arc::new(CircularQueuePool::new(fleet).unwrap());

        let threads = 10;
        let calls_per_thread = 8;
        let counts = Arc::new(Mutex::new(HashMap::<String, usize>::new()));

        let handles: Vec<_> = (0..threads)
            .map(|_| {
                let pool = Arc::clone(&pool);
                let counts = Arc::clone(&counts);
                std::thread::spawn(move || {
                    for _ in 0..calls_per_thread {
                        let observers = pool.get_all().unwrap();
                        *counts
                            .lock()
                            .entry(observers[0].address.clone())
                            .or_default() += 1;
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        // 80 calls over 5 observers: every observer led exactly 16 times.
        let expected = threads * calls_per_thread / total;
        let counts = counts.lock();
        assert_eq!(counts.len(), total);
        for count in counts.values() {
            assert_eq!(*count, expected);
        }
    }
}
