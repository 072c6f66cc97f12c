//! The two geometric zones of the bolt.

use crate::params::BoltParams;
use crate::resolution::Resolution;

/// One of the two regions of the bolt lattice.
///
/// Head and shank are meshed by the same loops; the variants differ only
/// in what they report here: axial span, boundary radius, and division
/// counts. The head occupies `z` from its thickness down to `0`, the shank
/// hangs from `0` down to the negative shank length, so the two regions
/// meet at `z = 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoltRegion {
    /// The bolt head: a disk with a full radial interior.
    Head,

    /// The cylindrical shank below the head.
    Shank,
}

impl BoltRegion {
    /// Returns the name of this region.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Head => "head",
            Self::Shank => "shank",
        }
    }

    /// Boundary radius of this region in mm.
    #[must_use]
    pub fn radius(self, params: &BoltParams) -> f64 {
        match self {
            Self::Head => params.head_radius(),
            Self::Shank => params.shank_radius(),
        }
    }

    /// Axial extent of this region in mm.
    #[must_use]
    pub fn axial_extent(self, params: &BoltParams) -> f64 {
        match self {
            Self::Head => params.head_thickness,
            Self::Shank => params.shank_length,
        }
    }

    /// Z coordinate of this region's topmost layer.
    #[must_use]
    pub fn top_z(self, params: &BoltParams) -> f64 {
        match self {
            Self::Head => params.head_thickness,
            Self::Shank => 0.0,
        }
    }

    /// Number of axial divisions in this region.
    #[must_use]
    pub const fn layer_count(self, resolution: &Resolution) -> u32 {
        match self {
            Self::Head => resolution.head_layers,
            Self::Shank => resolution.shank_layers,
        }
    }

    /// Number of radial divisions in this region.
    #[must_use]
    pub const fn ring_count(self, resolution: &Resolution) -> u32 {
        match self {
            Self::Head => resolution.head_rings,
            Self::Shank => resolution.shank_rings,
        }
    }

    /// Whether this region has node rings between the axis and the
    /// boundary.
    ///
    /// False when the element size exceeds the region radius; the region
    /// then degenerates to a single ring of nodes on its boundary and
    /// contributes no elements of its own.
    #[must_use]
    pub const fn has_interior_rings(self, resolution: &Resolution) -> bool {
        self.ring_count(resolution) > 0
    }

    /// Z coordinate of an axial layer.
    ///
    /// Layer 0 is the top of the region; heights interpolate linearly
    /// down the full extent, so the last layer lands exactly on the
    /// region's bottom. Evaluated as `top - fraction * extent` so the
    /// shank's top layer is exactly `0.0` (not `-0.0`), keeping seam
    /// coordinates bit-identical with the head's bottom layer.
    #[must_use]
    pub fn layer_z(self, layer: u32, params: &BoltParams, resolution: &Resolution) -> f64 {
        let fraction = f64::from(layer) / f64::from(self.layer_count(resolution));
        self.top_z(params) - fraction * self.axial_extent(params)
    }

    /// Radius of a node ring.
    ///
    /// Ring `r` sits at `r * element_size`, except the outermost ring,
    /// which is pinned to the exact boundary radius regardless of how the
    /// element size divides it.
    #[must_use]
    pub fn ring_radius(self, ring: u32, params: &BoltParams, resolution: &Resolution) -> f64 {
        if ring >= self.ring_count(resolution) {
            self.radius(params)
        } else {
            f64::from(ring) * params.element_size
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn default_setup() -> (BoltParams, Resolution) {
        let params = BoltParams::default();
        let resolution = Resolution::derive(&params);
        (params, resolution)
    }

    #[test]
    fn test_region_names() {
        assert_eq!(BoltRegion::Head.name(), "head");
        assert_eq!(BoltRegion::Shank.name(), "shank");
    }

    #[test]
    fn test_head_spans_thickness() {
        let (params, res) = default_setup();
        let top = BoltRegion::Head.layer_z(0, &params, &res);
        let bottom = BoltRegion::Head.layer_z(res.head_layers, &params, &res);
        assert_abs_diff_eq!(top, 8.0);
        assert_eq!(bottom, 0.0);
    }

    #[test]
    fn test_shank_hangs_below_head() {
        let (params, res) = default_setup();
        let top = BoltRegion::Shank.layer_z(0, &params, &res);
        let bottom = BoltRegion::Shank.layer_z(res.shank_layers, &params, &res);
        assert_eq!(top, 0.0);
        assert!(top.is_sign_positive());
        assert_abs_diff_eq!(bottom, -40.0);
    }

    #[test]
    fn test_seam_layers_coincide_exactly() {
        let (params, res) = default_setup();
        let head_bottom = BoltRegion::Head.layer_z(res.head_layers, &params, &res);
        let shank_top = BoltRegion::Shank.layer_z(0, &params, &res);
        assert_eq!(head_bottom.to_bits(), shank_top.to_bits());
    }

    #[test]
    fn test_ring_radii_step_by_element_size() {
        let (params, res) = default_setup();
        let radii: Vec<f64> = (0..=res.head_rings)
            .map(|r| BoltRegion::Head.ring_radius(r, &params, &res))
            .collect();
        assert_eq!(radii.len(), 6);
        assert_abs_diff_eq!(radii[0], 0.0);
        assert_abs_diff_eq!(radii[1], 2.0);
        assert_abs_diff_eq!(radii[5], 10.0);
    }

    #[test]
    fn test_outer_ring_pinned_to_boundary() {
        // 7 mm elements on a 10 mm head radius: the outer ring must land
        // on 10.0 exactly, not 7.0.
        let params = BoltParams::default().with_element_size(7.0);
        let res = Resolution::derive(&params);
        assert_eq!(res.head_rings, 1);
        let outer = BoltRegion::Head.ring_radius(res.head_rings, &params, &res);
        assert_eq!(outer, 10.0);
    }

    #[test]
    fn test_degenerate_region_keeps_boundary_ring() {
        // Element size above the shank radius: the single remaining ring
        // sits on the exact boundary.
        let params = BoltParams::default().with_element_size(7.0);
        let res = Resolution::derive(&params);
        assert!(!BoltRegion::Shank.has_interior_rings(&res));
        let only = BoltRegion::Shank.ring_radius(0, &params, &res);
        assert_eq!(only, 6.0);
    }

    #[test]
    fn test_interior_ring_capability() {
        let (_, res) = default_setup();
        assert!(BoltRegion::Head.has_interior_rings(&res));
        assert!(BoltRegion::Shank.has_interior_rings(&res));
    }
}
