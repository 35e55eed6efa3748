use std::fmt::Debug;

/// A fixed catalog of item kinds with a `NONE` sentinel.
///
/// Usually derived with `#[derive(ItemCatalog)]`. Weight rows address kinds by
/// position in [`ItemCatalog::KINDS`], so declaration order is part of the
/// configuration format.
pub trait ItemCatalog: Copy + Eq + Debug + 'static {
    /// The sentinel. Never a valid grant.
    const NONE: Self;

    /// Concrete kinds in catalog order (sentinel excluded).
    const KINDS: &'static [Self];

    /// Lookup name used in configuration documents. Empty for the sentinel.
    fn name(&self) -> &'static str;

    /// Reverse name lookup; [`ItemCatalog::NONE`] when nothing matches.
    fn from_name(name: &str) -> Self {
        Self::KINDS
            .iter()
            .copied()
            .find(|kind| kind.name() == name)
            .unwrap_or(Self::NONE)
    }

    /// Kind at `index` of a weight row, or the sentinel past the end.
    fn from_row_index(index: usize) -> Self {
        Self::KINDS.get(index).copied().unwrap_or(Self::NONE)
    }

    fn is_none(&self) -> bool {
        *self == Self::NONE
    }

    fn num_kinds() -> usize {
        Self::KINDS.len()
    }

    /// Entries a bucket must carry: one single and one multi weight per kind.
    fn expected_entries() -> usize {
        2 * Self::KINDS.len()
    }
}

/// The powerups a kart can pick up from an item box.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, crate::ItemCatalog)]
pub enum PowerupType {
    #[item(none)]
    Nothing,
    Bubblegum,
    Cake,
    Bowling,
    Zipper,
    Plunger,
    Switch,
    Swatter,
    RubberBall,
    Parachute,
    Anchor,
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// The four-entry catalog used throughout the unit tests.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, crate::ItemCatalog)]
    pub(crate) enum Abc {
        #[item(none)]
        None,
        A,
        B,
        #[item(name = "see")]
        C,
    }

    #[test]
    fn catalog_order_skips_sentinel() {
        assert_eq!(PowerupType::num_kinds(), 10);
        assert_eq!(PowerupType::KINDS[0], PowerupType::Bubblegum);
        assert_eq!(PowerupType::KINDS[9], PowerupType::Anchor);
        assert!(!PowerupType::KINDS.contains(&PowerupType::Nothing));
        assert_eq!(PowerupType::expected_entries(), 20);
    }

    #[test]
    fn names_round_trip() {
        for &kind in PowerupType::KINDS {
            assert_eq!(PowerupType::from_name(kind.name()), kind);
        }
        assert_eq!(PowerupType::RubberBall.name(), "rubber-ball");
        assert_eq!(PowerupType::from_name("bowling"), PowerupType::Bowling);
    }

    #[test]
    fn unknown_names_map_to_sentinel() {
        assert_eq!(PowerupType::from_name("banana"), PowerupType::Nothing);
        // The sentinel's own (empty) name is not a lookup key.
        assert_eq!(PowerupType::from_name(""), PowerupType::Nothing);
        assert!(PowerupType::Nothing.is_none());
    }

    #[test]
    fn row_index_maps_past_end_to_sentinel() {
        assert_eq!(Abc::from_row_index(0), Abc::A);
        assert_eq!(Abc::from_row_index(2), Abc::C);
        assert_eq!(Abc::from_row_index(3), Abc::None);
        assert_eq!(Abc::from_name("see"), Abc::C);
    }
}
