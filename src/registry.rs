use std::collections::HashMap;
use std::sync::Arc;

use log::debug;

use crate::config::PowerupConfig;
use crate::error::WeightError;
use crate::item::ItemCatalog;
use crate::mode::{MinorMode, ModeClass};
use crate::row::RowShape;
use crate::table::ModeTable;

/// Every mode table loaded from one weight document.
///
/// Built once at load time and never mutated; a reload builds a fresh value.
#[derive(Debug, Clone)]
pub struct PowerupWeights<T> {
    tables: HashMap<ModeClass, Arc<ModeTable<T>>>,
}

impl<T: ItemCatalog> PowerupWeights<T> {
    /// Load and validate all mode tables.
    ///
    /// # Errors
    /// Any configuration shape problem is fatal: unknown item names, a
    /// missing required list, a short weight row, bad tokens or bucket order.
    /// Rows that are too long are logged and kept.
    pub fn from_config(config: &PowerupConfig) -> Result<Self, WeightError> {
        config.validate_items::<T>()?;

        let mut tables = HashMap::new();
        for class in ModeClass::ALL {
            if config.buckets(class).is_none() && !class.is_required() {
                continue;
            }
            let table = Self::load_table(config, class)?;
            tables.insert(class, Arc::new(table));
        }
        Ok(Self { tables })
    }

    pub fn from_json_str(json: &str) -> Result<Self, WeightError> {
        Self::from_config(&PowerupConfig::from_json_str(json)?)
    }

    /// Build the table for a single class.
    pub fn load_table(config: &PowerupConfig, class: ModeClass) -> Result<ModeTable<T>, WeightError> {
        let parsed = config.parse_buckets::<T>(class)?;
        let mut raw = Vec::with_capacity(parsed.len());
        for (i, (distance, rows)) in parsed.into_iter().enumerate() {
            if let RowShape::Short { missing } = rows.shape {
                return Err(WeightError::NotEnoughEntries {
                    label: format!("{}[{i}]", class.list_name()),
                    expected: T::expected_entries(),
                    got: T::expected_entries() - missing,
                });
            }
            raw.push((distance, rows.entries));
        }
        let table = ModeTable::assemble(raw)?;
        debug!("Loaded '{}' with {} buckets", class.list_name(), table.buckets().len());
        Ok(table)
    }
}

impl<T> PowerupWeights<T> {
    /// Shared handle to the table for `class`.
    pub fn table(&self, class: ModeClass) -> Result<Arc<ModeTable<T>>, WeightError> {
        self.tables
            .get(&class)
            .cloned()
            .ok_or(WeightError::MissingTable {
                name: class.list_name(),
            })
    }

    /// The table a race in `mode` draws from.
    pub fn table_for_mode(&self, mode: MinorMode) -> Result<Arc<ModeTable<T>>, WeightError> {
        self.table(ModeClass::from(mode))
    }

    pub fn has_table(&self, class: ModeClass) -> bool {
        self.tables.contains_key(&class)
    }
}
