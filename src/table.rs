use log::{debug, trace, warn};

use crate::PowerupSampler;
use crate::error::{SampleError, WeightError};
use crate::item::ItemCatalog;
use crate::weights::{DistanceBucket, WeightedPowerup};

/// What a kart receives from an item box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Powerup<T> {
    pub kind: T,
    pub count: u32,
}

impl<T: Copy> From<&WeightedPowerup<T>> for Powerup<T> {
    fn from(entry: &WeightedPowerup<T>) -> Self {
        Self {
            kind: entry.kind,
            count: entry.count,
        }
    }
}

/// Distance buckets for one mode class, ascending by threshold.
///
/// Immutable once assembled; share it behind an `Arc` for concurrent readers.
#[derive(Debug, Clone, PartialEq)]
pub struct ModeTable<T> {
    buckets: Vec<DistanceBucket<T>>,
}

impl<T: ItemCatalog> ModeTable<T> {
    /// Build one bucket per `(distance, raw entries)` pair, in the order given.
    ///
    /// Buckets are not re-sorted; out-of-order thresholds are rejected instead.
    ///
    /// # Errors
    /// * [`WeightError::EmptyTable`] if there are no buckets.
    /// * [`WeightError::UnorderedDistances`] if a threshold is NaN or lower
    ///   than the one before it.
    /// * [`WeightError::WeightOverflow`] from [`DistanceBucket::build`].
    pub fn assemble<I, R>(raw: I) -> Result<Self, WeightError>
    where
        I: IntoIterator<Item = (f32, R)>,
        R: IntoIterator<Item = WeightedPowerup<T>>,
    {
        let mut buckets: Vec<DistanceBucket<T>> = Vec::new();
        for (distance, entries) in raw {
            let previous = buckets.last().map_or(f32::NEG_INFINITY, |b| b.distance());
            if distance.is_nan() || distance < previous {
                return Err(WeightError::UnorderedDistances { previous, distance });
            }
            if distance == previous {
                warn!("Bucket at distance {distance} shadows an earlier one.");
            }

            let bucket = DistanceBucket::build(distance, entries)?;
            if !bucket.is_samplable() {
                warn!("Bucket at distance {distance} has no positive weights.");
            }
            buckets.push(bucket);
        }

        if buckets.is_empty() {
            return Err(WeightError::EmptyTable);
        }
        debug!("Assembled weight table with {} buckets", buckets.len());
        Ok(Self { buckets })
    }
}

impl<T: Copy> ModeTable<T> {
    pub fn buckets(&self) -> &[DistanceBucket<T>] {
        &self.buckets
    }

    /// The bucket with the greatest threshold not above `distance`.
    pub fn bucket_for(&self, distance: f32) -> Option<&DistanceBucket<T>> {
        self.buckets
            .iter()
            .rev()
            .find(|bucket| distance >= bucket.distance())
    }
}

impl<T: Copy> PowerupSampler<T> for ModeTable<T> {
    fn random_powerup(&self, distance: f32, random: u64) -> Result<Powerup<T>, SampleError> {
        let bucket = self
            .bucket_for(distance)
            .ok_or(SampleError::NoBucket { distance })?;
        let entry = bucket.random_item(random)?;
        trace!(
            "Granted {}x item at distance {distance} (bucket {}), random {random} -> {}",
            entry.count,
            bucket.distance(),
            random % bucket.total(),
        );
        Ok(entry.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::tests::Abc;
    use crate::row::parse_bucket_rows;

    fn table(rows: &[(f32, &str, &str)]) -> Result<ModeTable<Abc>, WeightError> {
        ModeTable::assemble(rows.iter().map(|&(distance, single, multi)| {
            let parsed = parse_bucket_rows::<Abc>("test", single, multi).unwrap();
            (distance, parsed.entries)
        }))
    }

    fn tiers() -> ModeTable<Abc> {
        table(&[
            (0.0, "1 0 0", "0 0 0"),
            (10.0, "0 1 0", "0 0 0"),
            (20.0, "0 0 0", "0 0 1"),
        ])
        .unwrap()
    }

    #[test]
    fn threshold_is_inclusive() {
        let t = tiers();
        assert_eq!(t.bucket_for(10.0).unwrap().distance(), 10.0);
        assert_eq!(t.random_powerup(10.0, 0).unwrap().kind, Abc::B);
    }

    #[test]
    fn picks_nearest_tier_below() {
        let t = tiers();
        assert_eq!(t.random_powerup(0.0, 5).unwrap(), Powerup { kind: Abc::A, count: 1 });
        assert_eq!(t.random_powerup(9.99, 5).unwrap().kind, Abc::A);
        assert_eq!(t.random_powerup(19.0, 5).unwrap().kind, Abc::B);
        assert_eq!(
            t.random_powerup(500.0, 5).unwrap(),
            Powerup { kind: Abc::C, count: 3 }
        );
    }

    #[test]
    fn distance_below_every_threshold_is_an_error() {
        let t = tiers();
        assert_eq!(
            t.random_powerup(-1.0, 0),
            Err(SampleError::NoBucket { distance: -1.0 })
        );
        assert!(t.random_powerup(f32::NAN, 0).is_err());
    }

    #[test]
    fn sampling_is_deterministic() {
        let t = tiers();
        let again = tiers();
        for r in [0u64, 1, 7, 1 << 40, u64::MAX] {
            for d in [0.0f32, 10.0, 15.5, 30.0] {
                assert_eq!(t.random_powerup(d, r), again.random_powerup(d, r));
            }
        }
    }

    #[test]
    fn unsamplable_bucket_fails_only_when_queried() {
        let t = table(&[(0.0, "1 0 0", "0 0 0"), (10.0, "0 0 0", "0 0 0")]).unwrap();
        assert!(t.random_powerup(5.0, 3).is_ok());
        assert_eq!(
            t.random_powerup(12.0, 3),
            Err(SampleError::EmptyBucket { distance: 10.0 })
        );
    }

    #[test]
    fn rejects_out_of_order_and_empty_tables() {
        assert_eq!(
            table(&[(10.0, "1 1 1", "1 1 1"), (0.0, "1 1 1", "1 1 1")]),
            Err(WeightError::UnorderedDistances {
                previous: 10.0,
                distance: 0.0
            })
        );
        assert!(table(&[(f32::NAN, "1 1 1", "1 1 1")]).is_err());
        assert_eq!(table(&[]), Err(WeightError::EmptyTable));
    }

    #[test]
    fn equal_thresholds_resolve_to_the_later_bucket() {
        let t = table(&[(0.0, "1 0 0", "0 0 0"), (0.0, "0 0 1", "0 0 0")]).unwrap();
        assert_eq!(t.random_powerup(0.0, 0).unwrap().kind, Abc::C);
    }
}
