use super::{FaceMask, GridAxis};
use crate::math::{Point, Vector, DIM};

/// A half-open, axis-aligned box of grid cells.
///
/// The box covers every index `p` with `mins[k] <= p[k] < maxs[k]` along each grid
/// axis `k`. Boxes with `mins[k] == maxs[k]` along some axis are empty.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use brickpack3d::grid::CellBox;
/// use nalgebra::{Point3, Vector3};
///
/// let cells = CellBox::from_origin_and_dims(Point3::new(1, 0, 0), &Vector3::new(2, 1, 3)).unwrap();
/// assert_eq!(cells.volume(), 6);
/// assert!(cells.contains(&Point3::new(2, 0, 2)));
/// assert!(!cells.contains(&Point3::new(3, 0, 0)));
/// # }
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct CellBox {
    /// The smallest index covered by this box.
    pub mins: Point<u32>,
    /// One past the largest index covered by this box, along each axis.
    pub maxs: Point<u32>,
}

impl CellBox {
    /// Creates a box from its (inclusive) minimum and (exclusive) maximum indices.
    #[inline]
    pub fn new(mins: Point<u32>, maxs: Point<u32>) -> Self {
        debug_assert!(mins.x <= maxs.x && mins.y <= maxs.y && mins.z <= maxs.z);
        Self { mins, maxs }
    }

    /// Creates the box anchored at `origin` and spanning `dims` cells along each axis.
    ///
    /// Returns `None` if the box’s maximum index doesn’t fit in an `u32`.
    pub fn from_origin_and_dims(origin: Point<u32>, dims: &Vector<u32>) -> Option<Self> {
        Some(Self {
            mins: origin,
            maxs: Point::new(
                origin.x.checked_add(dims.x)?,
                origin.y.checked_add(dims.y)?,
                origin.z.checked_add(dims.z)?,
            ),
        })
    }

    /// The number of cells along each axis.
    #[inline]
    pub fn extents(&self) -> Vector<u32> {
        self.maxs - self.mins
    }

    /// The number of cells covered by this box.
    #[inline]
    pub fn volume(&self) -> u64 {
        let extents = self.extents();
        extents.x as u64 * extents.y as u64 * extents.z as u64
    }

    /// Does this box cover zero cells?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.volume() == 0
    }

    /// Does this box cover the cell `index`?
    #[inline]
    pub fn contains(&self, index: &Point<u32>) -> bool {
        (0..DIM).all(|k| self.mins[k] <= index[k] && index[k] < self.maxs[k])
    }

    /// Is `other` entirely inside of `self`?
    #[inline]
    pub fn contains_box(&self, other: &CellBox) -> bool {
        (0..DIM).all(|k| self.mins[k] <= other.mins[k] && other.maxs[k] <= self.maxs[k])
    }

    /// Do `self` and `other` share at least one cell?
    #[inline]
    pub fn intersects(&self, other: &CellBox) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && (0..DIM).all(|k| self.mins[k] < other.maxs[k] && other.mins[k] < self.maxs[k])
    }

    /// Iterates through all the cells of this box.
    ///
    /// Cells are yielded lexicographically by `(x, y, z)`, with `x` varying slowest.
    pub fn cells(&self) -> impl Iterator<Item = Point<u32>> {
        let (mins, maxs) = (self.mins, self.maxs);
        (mins.x..maxs.x).flat_map(move |x| {
            (mins.y..maxs.y).flat_map(move |y| (mins.z..maxs.z).map(move |z| Point::new(x, y, z)))
        })
    }

    /// The one-cell-thick slab of cells lying just outside of `face`.
    ///
    /// The slab spans the full extent of the face. Returns `None` if the slab would
    /// lie outside of the index space (e.g. the `-x` face of a box with `mins.x == 0`),
    /// in which case no cell can be adjacent to that face.
    pub fn face_neighbors(&self, face: FaceMask) -> Option<CellBox> {
        let k = face.normal_axis().index();
        let mut mins = self.mins;
        let mut maxs = self.maxs;

        if face.is_positive() {
            mins[k] = self.maxs[k];
            maxs[k] = self.maxs[k].checked_add(1)?;
        } else {
            mins[k] = self.mins[k].checked_sub(1)?;
            maxs[k] = self.mins[k];
        }

        Some(CellBox { mins, maxs })
    }

    /// The four corners of `face`, in grid index space.
    ///
    /// The corners are given in order around the face boundary so that consecutive
    /// corners (and the last and first one) form its four edges.
    pub fn face_corners(&self, face: FaceMask) -> [Point<u32>; 4] {
        let axis = face.normal_axis();
        let [u, v] = GridAxis::tangents(axis).map(GridAxis::index);
        let k = axis.index();

        let mut base = self.mins;
        base[k] = if face.is_positive() {
            self.maxs[k]
        } else {
            self.mins[k]
        };

        let mut corners = [base; 4];
        corners[1][u] = self.maxs[u];
        corners[2][u] = self.maxs[u];
        corners[2][v] = self.maxs[v];
        corners[3][v] = self.maxs[v];
        corners
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell_box(mins: [u32; 3], maxs: [u32; 3]) -> CellBox {
        CellBox::new(mins.into(), maxs.into())
    }

    #[test]
    fn cells_follow_scan_order() {
        let cells: Vec<_> = cell_box([0, 0, 0], [2, 1, 2]).cells().collect();
        assert_eq!(
            cells,
            vec![
                Point::new(0, 0, 0),
                Point::new(0, 0, 1),
                Point::new(1, 0, 0),
                Point::new(1, 0, 1),
            ]
        );
    }

    #[test]
    fn touching_boxes_do_not_intersect() {
        let a = cell_box([0, 0, 0], [2, 2, 2]);
        let b = cell_box([2, 0, 0], [3, 2, 2]);
        let c = cell_box([1, 1, 1], [3, 3, 3]);
        assert!(!a.intersects(&b));
        assert!(a.intersects(&c));
        assert!(b.intersects(&c));
    }

    #[test]
    fn face_neighbors_span_the_face() {
        let cells = cell_box([1, 2, 3], [3, 5, 4]);
        assert_eq!(
            cells.face_neighbors(FaceMask::X_POS),
            Some(cell_box([3, 2, 3], [4, 5, 4]))
        );
        assert_eq!(
            cells.face_neighbors(FaceMask::Z_NEG),
            Some(cell_box([1, 2, 2], [3, 5, 3]))
        );
        assert_eq!(cell_box([0, 0, 0], [1, 1, 1]).face_neighbors(FaceMask::Y_NEG), None);
    }

    #[test]
    fn face_corners_lie_on_the_face_plane() {
        let cells = cell_box([0, 0, 0], [2, 3, 4]);
        let corners = cells.face_corners(FaceMask::Y_POS);
        assert!(corners.iter().all(|c| c.y == 3));
        assert_eq!(corners[0], Point::new(0, 3, 0));
        assert_eq!(corners[2], Point::new(2, 3, 4));
    }

    #[test]
    fn overflowing_box_is_rejected() {
        assert!(CellBox::from_origin_and_dims(Point::new(u32::MAX, 0, 0), &Vector::new(1, 1, 1)).is_none());
    }
}
