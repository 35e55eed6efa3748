//! Cumulative weight buckets: the per-distance distribution a grant samples from.

use crate::error::{SampleError, WeightError};
use crate::item::ItemCatalog;

/// One weighted grant: `count` copies of `kind`.
///
/// Raw entries carry their own weight; inside a built [`DistanceBucket`] the
/// weight is cumulative and is the exclusive upper bound of the random range
/// the entry owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeightedPowerup<T> {
    pub weight: u64,
    pub count: u32,
    pub kind: T,
}

impl<T: Copy> WeightedPowerup<T> {
    pub const fn new(weight: u64, count: u32, kind: T) -> Self {
        Self {
            weight,
            count,
            kind,
        }
    }

    /// Stack this entry on top of `previous`, keeping kind and count.
    ///
    /// Returns `None` if the cumulative weight would overflow.
    pub fn merge(&self, previous: &Self) -> Option<Self> {
        Some(Self {
            weight: self.weight.checked_add(previous.weight)?,
            ..*self
        })
    }
}

/// All grants available to karts at or beyond `distance` behind the leader.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceBucket<T> {
    distance: f32,
    entries: Vec<WeightedPowerup<T>>,
    total: u64,
}

impl<T: ItemCatalog> DistanceBucket<T> {
    /// Filter and merge raw entries into a strictly ascending cumulative sequence.
    ///
    /// Entries with a weight below 1 or with the sentinel kind are dropped.
    /// Order matters: raw entries are merged in the order given.
    ///
    /// # Errors
    /// [`WeightError::WeightOverflow`] if the running sum exceeds `u64`.
    ///
    /// # Complexity
    /// O(n) time / O(n) space.
    pub fn build<I>(distance: f32, raw: I) -> Result<Self, WeightError>
    where
        I: IntoIterator<Item = WeightedPowerup<T>>,
    {
        let mut entries: Vec<WeightedPowerup<T>> = Vec::new();
        for powerup in raw {
            if powerup.weight < 1 || powerup.kind.is_none() {
                continue;
            }
            let merged = match entries.last() {
                None => powerup,
                Some(previous) => powerup
                    .merge(previous)
                    .ok_or(WeightError::WeightOverflow { distance })?,
            };
            entries.push(merged);
        }

        let total = entries.last().map_or(0, |last| last.weight);
        Ok(Self {
            distance,
            entries,
            total,
        })
    }
}

impl<T: Copy> DistanceBucket<T> {
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Surviving entries, ascending by cumulative weight.
    pub fn entries(&self) -> &[WeightedPowerup<T>] {
        &self.entries
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    /// Whether any weight survived filtering.
    pub fn is_samplable(&self) -> bool {
        self.total > 0
    }

    /// Pick the entry owning `random % total`.
    ///
    /// Entry `i` owns `[entries[i-1].weight, entries[i].weight)`, so walking
    /// every value in `0..total` reproduces the raw weights exactly.
    ///
    /// # Errors
    /// [`SampleError::EmptyBucket`] if every weight was filtered out.
    ///
    /// # Complexity
    /// O(log n).
    pub fn random_item(&self, random: u64) -> Result<&WeightedPowerup<T>, SampleError> {
        if self.total == 0 {
            return Err(SampleError::EmptyBucket {
                distance: self.distance,
            });
        }
        let reduced = random % self.total;
        let index = self.entries.partition_point(|e| e.weight <= reduced);
        // reduced < total == last weight, so some entry always qualifies
        Ok(&self.entries[index])
    }
}
