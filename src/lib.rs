//! # powerups
//!
//! Deterministic item-box rolls for kart races.
//!
//! Each game mode has a weight table split into distance buckets. A kart that
//! is `distance` behind the leader draws from the bucket with the greatest
//! threshold not above that distance. Inside a bucket, per-item integer
//! weights are folded into a cumulative sequence and sampled with a binary
//! search in O(log n).
//!
//! The sampler never generates randomness. Callers hand in a `u64`, so every
//! network peer replaying the same values grants the same items.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use powerups::{ActiveWeights, MinorMode, PowerupSampler, PowerupType, PowerupWeights};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let json = std::fs::read_to_string("assets/powerup.json")?;
//! let weights = PowerupWeights::<PowerupType>::from_json_str(&json)?;
//!
//! let mut active = ActiveWeights::new();
//! active.select(&weights, MinorMode::NormalRace)?;
//!
//! let powerup = active.random_powerup(42.0, 0x5eed)?;
//! println!("got {}x {}", powerup.count, powerup.kind.name());
//! # Ok(()) }
//! ```
//!
//! ## Custom catalogs
//!
//! Everything is generic over [`ItemCatalog`], derived for any fieldless enum:
//!
//! ```rust,ignore
//! #[derive(Copy, Clone, Debug, PartialEq, Eq, powerups::ItemCatalog)]
//! enum Loot {
//!     #[item(none)] Nothing,
//!     Shell,
//!     #[item(name = "star")] Invincibility,
//! }
//! ```
//!
//! ## Gotchas
//! * Weight rows are positional: token `i` is `KINDS[i]`.
//! * A bucket whose weights are all zero loads fine but fails when sampled.
//! * Keep a bucket at distance `0.0` (or below) so every kart has a match.

extern crate self as powerups;

mod config;
mod error;
mod item;
mod mode;
mod registry;
mod row;
mod sampler;
mod table;
mod weights;

pub use config::{BucketConfig, ItemConfig, PowerupConfig};
pub use error::{SampleError, WeightError};
pub use item::{ItemCatalog, PowerupType};
pub use mode::{MinorMode, ModeClass};
pub use registry::PowerupWeights;
pub use row::{MULTI_COUNT, ParsedRows, RowShape, SINGLE_COUNT, parse_bucket_rows, parse_row};
pub use sampler::ActiveWeights;
pub use table::{ModeTable, Powerup};
pub use weights::{DistanceBucket, WeightedPowerup};

/// Derive macro imported from `powerups_macros`.
/// See the crate-level example for usage.
pub use powerups_macros::ItemCatalog;

use rand::Rng;

/// Anything that can grant a powerup for a kart's distance behind the leader.
/// Implemented by [`ModeTable`] and [`ActiveWeights`].
pub trait PowerupSampler<T> {
    /// Pure function of `(self, distance, random)`.
    fn random_powerup(&self, distance: f32, random: u64) -> Result<Powerup<T>, SampleError>;

    /// Draw the random value from the caller's generator, then sample.
    fn random_powerup_with<R: Rng + ?Sized>(
        &self,
        distance: f32,
        rng: &mut R,
    ) -> Result<Powerup<T>, SampleError> {
        self.random_powerup(distance, rng.random::<u64>())
    }
}
