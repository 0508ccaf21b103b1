#[cfg(feature = "serde-serialize")]
use super::brick_type::BrickTypeData;
use super::{BrickColor, BrickType, CatalogError};
use crate::math::Vector;

/// A brick type together with its remaining supply.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct CatalogEntry {
    /// The brick type.
    pub brick: BrickType,
    /// How many bricks of this type are still available.
    pub supply: u32,
}

/// An ordered inventory of brick types with their remaining supply.
///
/// Entries keep the order in which they were supplied. This order is the tie-breaker
/// of [`BrickCatalog::packing_order`], so two runs over the same inventory always
/// pack identically.
///
/// The catalog handed to [`pack`](crate::packing::pack) is never modified: the packer
/// works on its own copy and returns it as the residual inventory.
///
/// With the `serde-serialize` feature, a catalog can be loaded from a configuration
/// file. Deserialization runs the same checks as [`BrickCatalog::with_display_table`].
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use brickpack3d::catalog::{BrickCatalog, BrickColor, CatalogError};
/// use nalgebra::Vector3;
///
/// let catalog = BrickCatalog::with_display_table(
///     &[(Vector3::new(1, 1, 1), 1000), (Vector3::new(2, 4, 1), 20)],
///     &[(Vector3::new(2, 4, 1), BrickColor::rgb(200, 30, 30))],
/// )
/// .unwrap();
///
/// // Larger bricks are tried first.
/// assert_eq!(catalog.packing_order(), vec![1, 0]);
/// assert_eq!(catalog.remaining(&Vector3::new(2, 4, 1)), Some(20));
///
/// // Zero-sized bricks are configuration errors.
/// assert!(matches!(
///     BrickCatalog::new(&[(Vector3::new(0, 1, 1), 1)]),
///     Err(CatalogError::InvalidBrickType { entry: 0, .. })
/// ));
/// # }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde-serialize",
    derive(Serialize, Deserialize),
    serde(try_from = "CatalogData", into = "CatalogData")
)]
pub struct BrickCatalog {
    entries: Vec<CatalogEntry>,
}

impl BrickCatalog {
    /// Builds a catalog from an inventory of `(dimensions, initial supply)` pairs.
    ///
    /// Every brick type gets the default [`BrickColor`].
    pub fn new(inventory: &[(Vector<i32>, u32)]) -> Result<Self, CatalogError> {
        Self::with_display_table(inventory, &[])
    }

    /// Builds a catalog from an inventory and a display table keyed by dimensions.
    ///
    /// Brick types missing from `display_table` get the default [`BrickColor`].
    /// Display entries matching no inventory entry are ignored.
    pub fn with_display_table(
        inventory: &[(Vector<i32>, u32)],
        display_table: &[(Vector<i32>, BrickColor)],
    ) -> Result<Self, CatalogError> {
        let mut entries: Vec<CatalogEntry> = Vec::with_capacity(inventory.len());

        for (id, (dims, supply)) in inventory.iter().enumerate() {
            let brick = BrickType::new(*dims).ok_or(CatalogError::InvalidBrickType {
                entry: id,
                dims: [dims.x, dims.y, dims.z],
            })?;

            if let Some(first) = entries.iter().position(|e| e.brick == brick) {
                let dims = brick.dims();
                return Err(CatalogError::DuplicateBrickType {
                    first,
                    second: id,
                    dims: [dims.x, dims.y, dims.z],
                });
            }

            let color = display_table
                .iter()
                .find(|(key, _)| key == dims)
                .map(|(_, color)| *color)
                .unwrap_or_default();

            entries.push(CatalogEntry {
                brick: brick.with_color(color),
                supply: *supply,
            });
        }

        for (key, _) in display_table {
            if !inventory.iter().any(|(dims, _)| dims == key) {
                log::warn!(
                    "Display table entry {:?} matches no brick type of the inventory.",
                    [key.x, key.y, key.z]
                );
            }
        }

        Ok(Self { entries })
    }

    /// The entries of this catalog, in inventory order.
    #[inline]
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// The number of brick types in this catalog.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Does this catalog contain no brick type?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Indices of the entries in the order the packer tries them.
    ///
    /// Entries are sorted by decreasing brick volume. Entries with equal volume keep
    /// their inventory order.
    pub fn packing_order(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.entries.len()).collect();
        // NOTE: `sort_by_key` is stable, which provides the tie-breaking.
        order.sort_by_key(|id| core::cmp::Reverse(self.entries[*id].brick.volume()));
        order
    }

    /// The entry for the brick type with the given dimensions.
    pub fn entry(&self, dims: &Vector<u32>) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.brick.dims() == *dims)
    }

    /// The remaining supply of the brick type with the given dimensions.
    pub fn remaining(&self, dims: &Vector<u32>) -> Option<u32> {
        self.entry(dims).map(|e| e.supply)
    }

    /// The total number of bricks available, all types included.
    pub fn total_supply(&self) -> u64 {
        self.entries.iter().map(|e| e.supply as u64).sum()
    }

    /// The largest dimension of any brick type, along each axis.
    pub fn max_extent(&self) -> Vector<u32> {
        self.entries
            .iter()
            .fold(Vector::zeros(), |acc, e| acc.sup(&e.brick.dims()))
    }

    /// Takes one brick out of the supply of the `entry_id`-th entry.
    pub(crate) fn consume(&mut self, entry_id: usize) -> BrickType {
        let entry = &mut self.entries[entry_id];
        assert!(entry.supply > 0, "cannot consume an exhausted brick type");
        entry.supply -= 1;
        entry.brick
    }
}

#[cfg(feature = "serde-serialize")]
#[derive(Clone, Debug, Serialize, Deserialize)]
struct CatalogEntryData {
    brick: BrickTypeData,
    supply: u32,
}

/// The serialized form of a [`BrickCatalog`]. Brick types are checked by the catalog
/// itself, so errors carry the position of the offending entry.
#[cfg(feature = "serde-serialize")]
#[derive(Clone, Debug, Serialize, Deserialize)]
struct CatalogData {
    entries: Vec<CatalogEntryData>,
}

#[cfg(feature = "serde-serialize")]
impl From<BrickCatalog> for CatalogData {
    fn from(catalog: BrickCatalog) -> Self {
        Self {
            entries: catalog
                .entries
                .into_iter()
                .map(|e| CatalogEntryData {
                    brick: e.brick.into(),
                    supply: e.supply,
                })
                .collect(),
        }
    }
}

#[cfg(feature = "serde-serialize")]
impl TryFrom<CatalogData> for BrickCatalog {
    type Error = CatalogError;

    fn try_from(data: CatalogData) -> Result<Self, CatalogError> {
        let inventory: Vec<_> = data
            .entries
            .iter()
            .map(|e| (e.brick.dims, e.supply))
            .collect();
        let display_table: Vec<_> = data
            .entries
            .iter()
            .map(|e| (e.brick.dims, e.brick.color))
            .collect();
        Self::with_display_table(&inventory, &display_table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ties_keep_inventory_order() {
        let catalog = BrickCatalog::new(&[
            (Vector::new(1, 1, 1), 10),
            (Vector::new(2, 1, 1), 1),
            (Vector::new(1, 2, 1), 1),
            (Vector::new(2, 2, 2), 1),
            (Vector::new(1, 1, 2), 1),
        ])
        .unwrap();
        assert_eq!(catalog.packing_order(), vec![3, 1, 2, 4, 0]);
    }

    #[test]
    fn duplicates_are_rejected() {
        let err = BrickCatalog::new(&[
            (Vector::new(2, 1, 1), 1),
            (Vector::new(1, 1, 1), 1),
            (Vector::new(2, 1, 1), 3),
        ]);
        assert_eq!(
            err,
            Err(CatalogError::DuplicateBrickType {
                first: 0,
                second: 2,
                dims: [2, 1, 1]
            })
        );
    }

    #[test]
    fn invalid_brick_fails_before_anything_else() {
        let err = BrickCatalog::new(&[(Vector::new(1, 1, 1), 1), (Vector::new(1, -1, 1), 1)]);
        assert_eq!(
            err,
            Err(CatalogError::InvalidBrickType {
                entry: 1,
                dims: [1, -1, 1]
            })
        );
    }

    #[test]
    fn display_table_colors_entries() {
        let red = BrickColor::rgb(255, 0, 0);
        let catalog = BrickCatalog::with_display_table(
            &[(Vector::new(1, 1, 1), 1), (Vector::new(2, 1, 1), 1)],
            &[(Vector::new(2, 1, 1), red), (Vector::new(3, 1, 1), red)],
        )
        .unwrap();
        assert_eq!(catalog.entries()[0].brick.color(), BrickColor::default());
        assert_eq!(catalog.entries()[1].brick.color(), red);
    }

    #[test]
    fn summary_queries() {
        let catalog =
            BrickCatalog::new(&[(Vector::new(1, 4, 1), 3), (Vector::new(2, 1, 3), 5)]).unwrap();
        assert_eq!(catalog.total_supply(), 8);
        assert_eq!(catalog.max_extent(), Vector::new(2, 4, 3));
        assert_eq!(catalog.remaining(&Vector::new(9, 9, 9)), None);
    }
}
