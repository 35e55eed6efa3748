//! Parsing of the `single` / `multi` weight rows of one distance bucket.

use log::error;

use crate::error::WeightError;
use crate::item::ItemCatalog;
use crate::weights::WeightedPowerup;

/// Copies granted by an entry from the `single` row.
pub const SINGLE_COUNT: u32 = 1;
/// Copies granted by an entry from the `multi` row.
pub const MULTI_COUNT: u32 = 3;

/// How a bucket's row length compared with the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowShape {
    Exact,
    /// Padded with zero-weight sentinel entries.
    Short { missing: usize },
    /// Extra entries kept as-is.
    Long { extra: usize },
}

/// Raw entries for one bucket, single row first, then multi.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedRows<T> {
    pub entries: Vec<WeightedPowerup<T>>,
    pub shape: RowShape,
}

/// Turn a whitespace separated weight list into entries tagged with `count`.
///
/// Token `i` maps to `T::KINDS[i]`; tokens past the end of the catalog map to
/// the sentinel and are filtered out when the bucket is built.
pub fn parse_row<T: ItemCatalog>(
    text: &str,
    count: u32,
) -> Result<Vec<WeightedPowerup<T>>, WeightError> {
    text.split_whitespace()
        .enumerate()
        .map(|(i, token)| {
            let weight = token
                .parse::<u64>()
                .map_err(|_| WeightError::InvalidWeight {
                    token: token.to_owned(),
                })?;
            Ok(WeightedPowerup::new(weight, count, T::from_row_index(i)))
        })
        .collect()
}

/// Parse both rows of a bucket and check the combined length.
///
/// A short bucket is padded with `(0, 0, NONE)` so building never fails on
/// it; a long one is kept untouched. Both are logged against `label`.
pub fn parse_bucket_rows<T: ItemCatalog>(
    label: &str,
    single: &str,
    multi: &str,
) -> Result<ParsedRows<T>, WeightError> {
    let mut entries = parse_row::<T>(single, SINGLE_COUNT)?;
    entries.extend(parse_row::<T>(multi, MULTI_COUNT)?);

    let expected = T::expected_entries();
    let shape = if entries.len() < expected {
        error!("Not enough entries for '{label}' in weight list.");
        let missing = expected - entries.len();
        entries.resize(expected, WeightedPowerup::new(0, 0, T::NONE));
        RowShape::Short { missing }
    } else if entries.len() > expected {
        error!("Too many entries for '{label}' in weight list.");
        RowShape::Long {
            extra: entries.len() - expected,
        }
    } else {
        RowShape::Exact
    };

    Ok(ParsedRows { entries, shape })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::tests::Abc;
    use crate::weights::DistanceBucket;

    #[test]
    fn maps_tokens_in_catalog_order() {
        let row = parse_row::<Abc>("  10\t0  5 ", MULTI_COUNT).unwrap();
        assert_eq!(
            row,
            vec![
                WeightedPowerup::new(10, 3, Abc::A),
                WeightedPowerup::new(0, 3, Abc::B),
                WeightedPowerup::new(5, 3, Abc::C),
            ]
        );
    }

    #[test]
    fn empty_row_yields_nothing() {
        assert!(parse_row::<Abc>("   ", SINGLE_COUNT).unwrap().is_empty());
    }

    #[test]
    fn rejects_non_numeric_tokens() {
        assert_eq!(
            parse_row::<Abc>("1 -2 3", SINGLE_COUNT),
            Err(WeightError::InvalidWeight { token: "-2".into() })
        );
        assert!(parse_row::<Abc>("1 x 3", SINGLE_COUNT).is_err());
    }

    #[test]
    fn exact_rows() {
        let parsed = parse_bucket_rows::<Abc>("race", "10 0 5", "0 0 0").unwrap();
        assert_eq!(parsed.shape, RowShape::Exact);
        assert_eq!(parsed.entries.len(), 6);
        assert!(parsed.entries[..3].iter().all(|e| e.count == SINGLE_COUNT));
        assert!(parsed.entries[3..].iter().all(|e| e.count == MULTI_COUNT));
    }

    #[test]
    fn short_rows_are_padded_with_sentinels() {
        let parsed = parse_bucket_rows::<Abc>("race", "4 2", "1").unwrap();
        assert_eq!(parsed.shape, RowShape::Short { missing: 3 });
        assert_eq!(parsed.entries.len(), 6);
        assert!(
            parsed.entries[3..]
                .iter()
                .all(|e| *e == WeightedPowerup::new(0, 0, Abc::None))
        );

        let bucket = DistanceBucket::build(0.0, parsed.entries).unwrap();
        assert_eq!(bucket.total(), 7);
        assert!(bucket.entries().iter().all(|e| !e.kind.is_none()));
    }

    #[test]
    fn long_rows_are_kept() {
        let parsed = parse_bucket_rows::<Abc>("battle", "1 1 1 9", "2 2 2").unwrap();
        assert_eq!(parsed.shape, RowShape::Long { extra: 1 });
        assert_eq!(parsed.entries.len(), 7);
        // The overflow token lands on the sentinel in the single row.
        assert_eq!(parsed.entries[3], WeightedPowerup::new(9, 1, Abc::None));
    }
}
