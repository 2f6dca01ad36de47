//! Test fixtures and helpers.
//!
//! [`Replica`] keeps a plain multiset next to its incrementally maintained
//! setsum so tests can compare the running checksum against a from-scratch
//! recomputation.

use std::collections::BTreeMap;

use setsum_core::Setsum;

/// Checksum of `items` inserted into an empty setsum.
pub fn setsum_of<I>(items: I) -> Setsum
where
    I: IntoIterator,
    I::Item: AsRef<[u8]>,
{
    items.into_iter().collect()
}

/// A multiset with a setsum maintained alongside it.
#[derive(Debug, Clone, Default)]
pub struct Replica {
    counts: BTreeMap<Vec<u8>, u64>,
    setsum: Setsum,
}

impl Replica {
    /// Create an empty replica.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert one copy of `item`.
    pub fn insert(&mut self, item: &[u8]) {
        *self.counts.entry(item.to_vec()).or_insert(0) += 1;
        self.setsum.insert(item);
    }

    /// Remove one copy of `item` if present. Returns whether it was present.
    pub fn remove(&mut self, item: &[u8]) -> bool {
        match self.counts.get_mut(item) {
            Some(count) => {
                *count -= 1;
                if *count == 0 {
                    self.counts.remove(item);
                }
                self.setsum.remove(item);
                true
            }
            None => false,
        }
    }

    /// The incrementally maintained checksum.
    pub fn setsum(&self) -> Setsum {
        self.setsum
    }

    /// Number of elements, counting duplicates.
    pub fn len(&self) -> u64 {
        self.counts.values().sum()
    }

    /// True if the replica holds no elements.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Recompute the checksum from the stored multiset, in sorted order.
    pub fn recompute(&self) -> Setsum {
        let mut setsum = Setsum::default();
        for (item, count) in &self.counts {
            for _ in 0..*count {
                setsum.insert(item);
            }
        }
        setsum
    }

    /// Elements present here but not in `other`, with multiplicity.
    pub fn difference(&self, other: &Replica) -> Vec<Vec<u8>> {
        let mut out = Vec::new();
        for (item, &count) in &self.counts {
            let theirs = other.counts.get(item).copied().unwrap_or(0);
            for _ in theirs..count {
                out.push(item.clone());
            }
        }
        out
    }
}
