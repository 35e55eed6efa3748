use std::sync::Arc;

use log::debug;

use crate::PowerupSampler;
use crate::error::{SampleError, WeightError};
use crate::mode::MinorMode;
use crate::registry::PowerupWeights;
use crate::table::{ModeTable, Powerup};

/// The table in effect for one running race.
///
/// Passed explicitly through the race instead of living in a global. Switching
/// tables swaps the whole `Arc`, so clones held by readers stay consistent.
#[derive(Debug, Clone)]
pub struct ActiveWeights<T> {
    mode: Option<MinorMode>,
    table: Option<Arc<ModeTable<T>>>,
}

impl<T> Default for ActiveWeights<T> {
    fn default() -> Self {
        Self {
            mode: None,
            table: None,
        }
    }
}

impl<T> ActiveWeights<T> {
    /// An unset handle; sampling fails until a mode is selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the table for `mode`, replacing any previous one.
    ///
    /// On error the previous selection is left untouched.
    pub fn select(&mut self, weights: &PowerupWeights<T>, mode: MinorMode) -> Result<(), WeightError> {
        let table = weights.table_for_mode(mode)?;
        debug!("Selected powerup weights for mode {mode}");
        self.mode = Some(mode);
        self.table = Some(table);
        Ok(())
    }

    /// Called at race teardown.
    pub fn clear(&mut self) {
        self.mode = None;
        self.table = None;
    }

    pub fn mode(&self) -> Option<MinorMode> {
        self.mode
    }

    pub fn table(&self) -> Option<&Arc<ModeTable<T>>> {
        self.table.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.table.is_some()
    }
}

impl<T: Copy> PowerupSampler<T> for ActiveWeights<T> {
    #[inline]
    fn random_powerup(&self, distance: f32, random: u64) -> Result<Powerup<T>, SampleError> {
        self.table
            .as_deref()
            .ok_or(SampleError::NoActiveTable)?
            .random_powerup(distance, random)
    }
}
