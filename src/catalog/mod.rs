//! Brick types and the inventories they are drawn from.

pub use self::brick_catalog::{BrickCatalog, CatalogEntry};
pub use self::brick_type::{BrickColor, BrickType};
pub use self::catalog_error::CatalogError;

mod brick_catalog;
mod brick_type;
mod catalog_error;
