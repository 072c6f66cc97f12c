//! Hexahedral elements.

use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of corner nodes in a trilinear hexahedron.
pub const HEX_CORNERS: usize = 8;

/// An 8-node trilinear hexahedron (the solver's C3D8).
///
/// # Corner Order
///
/// The four corners of the bottom face counter-clockwise, then the four
/// corners of the top face in the same circumferential/radial pattern:
///
/// ```text
/// bottom: (i, r)  (i+1, r)  (i+1, r+1)  (i, r+1)
/// top:    (i, r)  (i+1, r)  (i+1, r+1)  (i, r+1)
/// ```
///
/// Under this order a well-formed cell has strictly positive volume; see
/// [`hex_volume`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HexElement {
    /// 1-based element id, assigned after all nodes.
    pub id: u32,

    /// Corner node ids in the fixed order above.
    pub nodes: [u32; HEX_CORNERS],
}

impl HexElement {
    /// Create an element from an id and its corner node ids.
    ///
    /// # Example
    ///
    /// ```
    /// use bolt_types::HexElement;
    ///
    /// let e = HexElement::new(1, [1, 2, 3, 4, 5, 6, 7, 8]);
    /// assert_eq!(e.nodes[0], 1);
    /// ```
    #[inline]
    #[must_use]
    pub const fn new(id: u32, nodes: [u32; HEX_CORNERS]) -> Self {
        Self { id, nodes }
    }

    /// Returns true if the element references the given node id.
    #[inline]
    #[must_use]
    pub fn references(&self, node_id: u32) -> bool {
        self.nodes.contains(&node_id)
    }
}

/// Signed volume of a hexahedron from its corner positions.
///
/// Corners must follow the [`HexElement`] order. The cell is decomposed
/// into five tetrahedra whose signed volumes are summed, so a cell wound
/// the wrong way reports a negative volume and a collapsed cell reports
/// zero. Wedge cells (a face edge collapsed onto the bolt axis) still
/// report their true positive volume.
///
/// # Example
///
/// ```
/// use bolt_types::{hex_volume, Point3};
///
/// // Unit cube, bottom face CCW then top face.
/// let corners = [
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(1.0, 1.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
///     Point3::new(0.0, 0.0, 1.0),
///     Point3::new(1.0, 0.0, 1.0),
///     Point3::new(1.0, 1.0, 1.0),
///     Point3::new(0.0, 1.0, 1.0),
/// ];
/// assert!((hex_volume(&corners) - 1.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn hex_volume(corners: &[Point3<f64>; HEX_CORNERS]) -> f64 {
    // Five-tetrahedron decomposition of a hex with bottom face 0-1-2-3
    // and top face 4-5-6-7 (corner 4 above corner 0).
    const TETS: [[usize; 4]; 5] = [
        [0, 1, 3, 4],
        [1, 2, 3, 6],
        [1, 3, 4, 6],
        [1, 4, 5, 6],
        [3, 4, 6, 7],
    ];

    TETS.iter()
        .map(|t| {
            let a = corners[t[1]] - corners[t[0]];
            let b = corners[t[2]] - corners[t[0]];
            let c = corners[t[3]] - corners[t[0]];
            a.dot(&b.cross(&c)) / 6.0
        })
        .sum()
}
