#[cfg(feature = "serde-serialize")]
use super::CatalogError;
use crate::math::Vector;
use core::hash::{Hash, Hasher};

/// An opaque RGBA display tag attached to a brick type.
///
/// The packer never looks at it: it is carried along placements and outline
/// segments for the renderer's benefit.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct BrickColor(pub [u8; 4]);

impl Default for BrickColor {
    fn default() -> Self {
        Self::GRAY
    }
}

impl BrickColor {
    /// Opaque mid gray, used for bricks without an entry in the display table.
    pub const GRAY: BrickColor = BrickColor::rgb(128, 128, 128);
    /// Opaque black.
    pub const BLACK: BrickColor = BrickColor::rgb(0, 0, 0);

    /// An opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b, 255])
    }
}

/// A brick footprint, in grid cells along each grid axis.
///
/// Two brick types are equal if they have the same dimensions, regardless of their
/// color. Rotated footprints (e.g. `2x4x1` and `4x2x1`) are distinct types.
///
/// Deserialization goes through [`BrickType::new`]: zero or negative dimensions are
/// rejected.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(
    feature = "serde-serialize",
    derive(Serialize, Deserialize),
    serde(try_from = "BrickTypeData", into = "BrickTypeData")
)]
pub struct BrickType {
    dims: Vector<u32>,
    color: BrickColor,
}

impl PartialEq for BrickType {
    fn eq(&self, other: &Self) -> bool {
        self.dims == other.dims
    }
}

impl Eq for BrickType {}

impl Hash for BrickType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.dims.hash(state)
    }
}

impl BrickType {
    /// Creates a brick type spanning `dims` cells.
    ///
    /// Returns `None` if any dimension isn’t strictly positive.
    pub fn new(dims: Vector<i32>) -> Option<Self> {
        if dims.iter().all(|e| *e > 0) {
            Some(Self {
                dims: dims.map(|e| e as u32),
                color: BrickColor::default(),
            })
        } else {
            None
        }
    }

    /// The unit `1x1x1` brick.
    pub fn unit() -> Self {
        Self {
            dims: Vector::repeat(1),
            color: BrickColor::default(),
        }
    }

    /// Returns this brick type with the given display color.
    #[must_use]
    pub fn with_color(mut self, color: BrickColor) -> Self {
        self.color = color;
        self
    }

    /// The number of cells spanned along each grid axis.
    #[inline]
    pub fn dims(&self) -> Vector<u32> {
        self.dims
    }

    /// The display color of this brick type.
    #[inline]
    pub fn color(&self) -> BrickColor {
        self.color
    }

    /// The number of cells covered by one brick of this type.
    #[inline]
    pub fn volume(&self) -> u64 {
        self.dims.x as u64 * self.dims.y as u64 * self.dims.z as u64
    }
}

/// The serialized form of a [`BrickType`], checked on conversion.
#[cfg(feature = "serde-serialize")]
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
pub(crate) struct BrickTypeData {
    pub dims: Vector<i32>,
    #[serde(default)]
    pub color: BrickColor,
}

#[cfg(feature = "serde-serialize")]
impl From<BrickType> for BrickTypeData {
    fn from(brick: BrickType) -> Self {
        Self {
            // Dimensions always come from an `i32` vector.
            dims: brick.dims.map(|e| e as i32),
            color: brick.color,
        }
    }
}

#[cfg(feature = "serde-serialize")]
impl TryFrom<BrickTypeData> for BrickType {
    type Error = CatalogError;

    fn try_from(data: BrickTypeData) -> Result<Self, CatalogError> {
        BrickType::new(data.dims)
            .map(|brick| brick.with_color(data.color))
            .ok_or(CatalogError::InvalidDimensions {
                dims: [data.dims.x, data.dims.y, data.dims.z],
            })
    }
}
