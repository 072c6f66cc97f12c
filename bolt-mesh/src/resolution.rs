//! Discretization resolution derived from the geometry parameters.

// Division counts are bounded by the node budget long before an f64->u32
// cast can truncate meaningfully.
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

use std::f64::consts::PI;

use crate::params::BoltParams;

/// Minimum circumferential division count.
pub const MIN_CIRCUMFERENTIAL: u32 = 8;

/// Integer division counts for one build.
///
/// Derived once per build from [`BoltParams`] and constant thereafter.
/// Layer and circumferential counts are clamped to their minimum floors;
/// ring counts may legitimately be zero, in which case the region
/// degenerates to a single ring of nodes on its boundary radius.
///
/// # Examples
///
/// ```
/// use bolt_mesh::{BoltParams, Resolution};
///
/// let res = Resolution::derive(&BoltParams::default());
/// assert_eq!(res.circumferential, 31);
/// assert_eq!(res.head_layers, 4);
/// assert_eq!(res.shank_layers, 20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    /// Circumferential divisions around the axis, at least
    /// [`MIN_CIRCUMFERENTIAL`].
    pub circumferential: u32,

    /// Axial divisions through the head, at least 1.
    pub head_layers: u32,

    /// Axial divisions through the shank, at least 1.
    pub shank_layers: u32,

    /// Radial divisions in the head; zero when the element size exceeds
    /// the head radius.
    pub head_rings: u32,

    /// Radial divisions in the shank; zero when the element size exceeds
    /// the shank radius.
    pub shank_rings: u32,
}

impl Resolution {
    /// Derives the division counts for the given parameters.
    ///
    /// The circumference is divided by the larger of the two diameters so
    /// head and shank share one angular grid; each count then floors the
    /// ratio of its extent to the element size, clamped to the stated
    /// minimum.
    #[must_use]
    pub fn derive(params: &BoltParams) -> Self {
        let element = params.element_size;
        let widest = params.head_diameter.max(params.shank_diameter);

        let circumferential = (((PI * widest) / element).floor() as u32).max(MIN_CIRCUMFERENTIAL);
        let head_layers = ((params.head_thickness / element).floor() as u32).max(1);
        let shank_layers = ((params.shank_length / element).floor() as u32).max(1);
        let head_rings = (params.head_radius() / element).floor() as u32;
        let shank_rings = (params.shank_radius() / element).floor() as u32;

        Self {
            circumferential,
            head_layers,
            shank_layers,
            head_rings,
            shank_rings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bolt_counts() {
        // 20x8 head, 12x40 shank, 2 mm elements.
        let res = Resolution::derive(&BoltParams::default());
        assert_eq!(res.circumferential, 31);
        assert_eq!(res.head_layers, 4);
        assert_eq!(res.shank_layers, 20);
        assert_eq!(res.head_rings, 5);
        assert_eq!(res.shank_rings, 3);
    }

    #[test]
    fn test_circumferential_floor() {
        // Tiny bolt with huge elements: every count at its minimum.
        let params = BoltParams::default().with_element_size(100.0);
        let res = Resolution::derive(&params);
        assert_eq!(res.circumferential, MIN_CIRCUMFERENTIAL);
        assert_eq!(res.head_layers, 1);
        assert_eq!(res.shank_layers, 1);
        assert_eq!(res.head_rings, 0);
        assert_eq!(res.shank_rings, 0);
    }

    #[test]
    fn test_widest_diameter_drives_circumference() {
        // Shank wider than head: the shank diameter sets the count.
        let params = BoltParams::default()
            .with_head_diameter(10.0)
            .with_shank_diameter(20.0);
        let res = Resolution::derive(&params);
        assert_eq!(res.circumferential, 31);
    }

    #[test]
    fn test_rings_floor_to_zero_independently() {
        // Element size between the two radii: head keeps interior rings,
        // shank degenerates to its boundary ring.
        let params = BoltParams::default().with_element_size(7.0);
        let res = Resolution::derive(&params);
        assert_eq!(res.head_rings, 1);
        assert_eq!(res.shank_rings, 0);
    }

    #[test]
    fn test_counts_grow_as_elements_shrink() {
        let coarse = Resolution::derive(&BoltParams::default().with_element_size(4.0));
        let fine = Resolution::derive(&BoltParams::default().with_element_size(1.0));
        assert!(fine.circumferential > coarse.circumferential);
        assert!(fine.head_layers > coarse.head_layers);
        assert!(fine.shank_layers > coarse.shank_layers);
        assert!(fine.head_rings > coarse.head_rings);
        assert!(fine.shank_rings > coarse.shank_rings);
    }
}
