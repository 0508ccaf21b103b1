/// Errors raised while building a [`BrickCatalog`](super::BrickCatalog).
///
/// These are configuration errors: they are reported before any packing starts, and
/// no partial catalog is produced.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum CatalogError {
    /// A brick type has a zero or negative dimension along at least one axis.
    #[error("the brick type {dims:?} (inventory entry {entry}) must have strictly positive dimensions")]
    InvalidBrickType {
        /// The position of the offending entry in the inventory.
        entry: usize,
        /// The dimensions of the offending brick type.
        dims: [i32; 3],
    },
    /// A brick type read on its own, outside of any inventory, has a zero or negative
    /// dimension.
    #[error("the brick type {dims:?} must have strictly positive dimensions")]
    InvalidDimensions {
        /// The dimensions of the offending brick type.
        dims: [i32; 3],
    },
    /// The same brick dimensions are listed more than once in an inventory.
    #[error("the brick type {dims:?} is listed twice in the inventory (entries {first} and {second})")]
    DuplicateBrickType {
        /// The position of the first entry with these dimensions.
        first: usize,
        /// The position of the repeated entry.
        second: usize,
        /// The repeated dimensions.
        dims: [u32; 3],
    },
}
