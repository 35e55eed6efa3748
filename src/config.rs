//! The weight document: item declarations plus one weight list per mode class.
//!
//! ```json
//! {
//!   "items": [{ "name": "bowling", "icon": "bowling-icon.png", "model": "bowling.spm" }],
//!   "weight-lists": {
//!     "race-weight-list": [
//!       { "distance": 0.0, "single": "30 0 20 0 0 0 0 0 0 0", "multi": "0 0 0 0 0 0 0 0 0 0" }
//!     ]
//!   }
//! }
//! ```

use std::collections::BTreeMap;
use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::error::WeightError;
use crate::item::ItemCatalog;
use crate::mode::ModeClass;
use crate::row::{ParsedRows, parse_bucket_rows};

/// An item declaration. Asset fields are carried for the renderer, not read here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ItemConfig {
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
}

/// One distance bucket as written in the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct BucketConfig {
    pub distance: f32,
    #[serde(default)]
    pub single: String,
    #[serde(default)]
    pub multi: String,
}

/// Container for the whole weight document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub struct PowerupConfig {
    #[serde(default)]
    pub items: Vec<ItemConfig>,
    #[serde(default)]
    pub weight_lists: BTreeMap<String, Vec<BucketConfig>>,
}

impl PowerupConfig {
    pub fn from_json_str(json: &str) -> Result<Self, WeightError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, WeightError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Every declared item must name a concrete kind of `T`.
    pub fn validate_items<T: ItemCatalog>(&self) -> Result<(), WeightError> {
        match self
            .items
            .iter()
            .find(|item| T::from_name(&item.name).is_none())
        {
            Some(item) => Err(WeightError::UnknownItem {
                name: item.name.clone(),
            }),
            None => Ok(()),
        }
    }

    /// Buckets listed for `class`, or `None` if the document has no such list.
    pub fn buckets(&self, class: ModeClass) -> Option<&[BucketConfig]> {
        self.weight_lists.get(class.list_name()).map(Vec::as_slice)
    }

    /// Parse every bucket of `class` into raw entries, in document order.
    pub fn parse_buckets<T: ItemCatalog>(
        &self,
        class: ModeClass,
    ) -> Result<Vec<(f32, ParsedRows<T>)>, WeightError> {
        let buckets = self.buckets(class).ok_or(WeightError::MissingTable {
            name: class.list_name(),
        })?;
        buckets
            .iter()
            .enumerate()
            .map(|(i, bucket)| {
                let label = format!("{}[{i}]", class.list_name());
                let rows = parse_bucket_rows::<T>(&label, &bucket.single, &bucket.multi)?;
                Ok((bucket.distance, rows))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::PowerupType;
    use crate::row::RowShape;

    const DOC: &str = r#"{
        "items": [
            { "name": "bubblegum", "icon": "gum-icon.png", "model": "bubblegum.spm" },
            { "name": "rubber-ball" }
        ],
        "weight-lists": {
            "race-weight-list": [
                { "distance": 0.0, "single": "1 2 3 4 5 6 7 8 9 10", "multi": "0 0 0 0 0 0 0 0 0 1" },
                { "distance": 50.5, "single": "1 2", "multi": "" }
            ]
        }
    }"#;

    #[test]
    fn parses_document() {
        let config = PowerupConfig::from_json_str(DOC).unwrap();
        assert_eq!(config.items.len(), 2);
        assert_eq!(config.items[0].icon.as_deref(), Some("gum-icon.png"));
        assert_eq!(config.items[1].model, None);
        assert_eq!(config.buckets(ModeClass::Race).unwrap().len(), 2);
        assert!(config.buckets(ModeClass::Battle).is_none());
        config.validate_items::<PowerupType>().unwrap();
    }

    #[test]
    fn reports_row_shapes_per_bucket() {
        let config = PowerupConfig::from_json_str(DOC).unwrap();
        let parsed = config.parse_buckets::<PowerupType>(ModeClass::Race).unwrap();
        assert_eq!(parsed[0].0, 0.0);
        assert_eq!(parsed[0].1.shape, RowShape::Exact);
        assert_eq!(parsed[1].0, 50.5);
        assert_eq!(parsed[1].1.shape, RowShape::Short { missing: 18 });
    }

    #[test]
    fn missing_list_and_unknown_items() {
        let mut config = PowerupConfig::from_json_str(DOC).unwrap();
        assert_eq!(
            config.parse_buckets::<PowerupType>(ModeClass::Soccer),
            Err(WeightError::MissingTable {
                name: "soccer-weight-list"
            })
        );

        config.items.push(ItemConfig {
            name: "banana".into(),
            ..Default::default()
        });
        assert_eq!(
            config.validate_items::<PowerupType>(),
            Err(WeightError::UnknownItem {
                name: "banana".into()
            })
        );
    }

    #[test]
    fn malformed_json_is_a_document_error() {
        assert!(matches!(
            PowerupConfig::from_json_str("{ \"weight-lists\": 3 }"),
            Err(WeightError::Document(_))
        ));
    }
}
