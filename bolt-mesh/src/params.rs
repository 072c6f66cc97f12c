//! Bolt geometry parameters.

use crate::error::MeshError;

/// Geometric parameters for one bolt build.
///
/// All dimensions are millimeters and must be positive. Use the builder
/// methods to adjust a preset, or start from [`BoltParams::default`],
/// which matches a common M12-class test bolt.
///
/// # Examples
///
/// ```
/// use bolt_mesh::BoltParams;
///
/// // Default test bolt, 2 mm elements
/// let params = BoltParams::default();
///
/// // Coarser mesh of the same bolt
/// let params = BoltParams::default().with_element_size(4.0);
/// ```
#[derive(Debug, Clone)]
pub struct BoltParams {
    /// Head diameter in mm.
    pub head_diameter: f64,

    /// Head thickness (height of the head along the axis) in mm.
    pub head_thickness: f64,

    /// Shank diameter in mm.
    pub shank_diameter: f64,

    /// Shank length below the head in mm.
    pub shank_length: f64,

    /// Target element edge size in mm.
    ///
    /// Drives every division count. Values larger than a dimension clamp
    /// that dimension's count to its minimum rather than failing.
    pub element_size: f64,

    /// Threaded length at the shank tip in mm.
    ///
    /// Informational only: it is carried for visualization layers and
    /// never feeds resolution, node placement, or connectivity.
    pub thread_length: Option<f64>,

    /// Upper bound on the total node count of one build.
    ///
    /// When set, a build that would exceed it fails before emitting any
    /// node. This is the safeguard against pathologically small
    /// `element_size` values on large bolts.
    pub node_budget: Option<usize>,
}

impl Default for BoltParams {
    fn default() -> Self {
        Self {
            head_diameter: 20.0,
            head_thickness: 8.0,
            shank_diameter: 12.0,
            shank_length: 40.0,
            element_size: 2.0,
            thread_length: None,
            node_budget: None,
        }
    }
}

impl BoltParams {
    /// Creates a new `BoltParams` with default values.
    ///
    /// # Examples
    ///
    /// ```
    /// use bolt_mesh::BoltParams;
    ///
    /// let params = BoltParams::new();
    /// assert_eq!(params.head_diameter, 20.0);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates parameters for an M8-class bolt.
    ///
    /// # Examples
    ///
    /// ```
    /// use bolt_mesh::BoltParams;
    ///
    /// let params = BoltParams::m8();
    /// assert_eq!(params.shank_diameter, 8.0);
    /// ```
    #[must_use]
    pub const fn m8() -> Self {
        Self {
            head_diameter: 13.0,
            head_thickness: 5.3,
            shank_diameter: 8.0,
            shank_length: 30.0,
            element_size: 1.0,
            thread_length: None,
            node_budget: None,
        }
    }

    /// Creates parameters for an M16-class bolt.
    #[must_use]
    pub const fn m16() -> Self {
        Self {
            head_diameter: 24.0,
            head_thickness: 10.0,
            shank_diameter: 16.0,
            shank_length: 60.0,
            element_size: 2.0,
            thread_length: None,
            node_budget: None,
        }
    }

    /// Sets the head diameter.
    #[must_use]
    pub const fn with_head_diameter(mut self, diameter: f64) -> Self {
        self.head_diameter = diameter;
        self
    }

    /// Sets the head thickness.
    #[must_use]
    pub const fn with_head_thickness(mut self, thickness: f64) -> Self {
        self.head_thickness = thickness;
        self
    }

    /// Sets the shank diameter.
    #[must_use]
    pub const fn with_shank_diameter(mut self, diameter: f64) -> Self {
        self.shank_diameter = diameter;
        self
    }

    /// Sets the shank length.
    #[must_use]
    pub const fn with_shank_length(mut self, length: f64) -> Self {
        self.shank_length = length;
        self
    }

    /// Sets the target element size.
    ///
    /// # Examples
    ///
    /// ```
    /// use bolt_mesh::BoltParams;
    ///
    /// let params = BoltParams::default().with_element_size(0.5);
    /// assert_eq!(params.element_size, 0.5);
    /// ```
    #[must_use]
    pub const fn with_element_size(mut self, size: f64) -> Self {
        self.element_size = size;
        self
    }

    /// Sets the informational thread length.
    #[must_use]
    pub const fn with_thread_length(mut self, length: f64) -> Self {
        self.thread_length = Some(length);
        self
    }

    /// Sets the node budget.
    ///
    /// # Examples
    ///
    /// ```
    /// use bolt_mesh::BoltParams;
    ///
    /// let params = BoltParams::default().with_node_budget(500_000);
    /// assert_eq!(params.node_budget, Some(500_000));
    /// ```
    #[must_use]
    pub const fn with_node_budget(mut self, budget: usize) -> Self {
        self.node_budget = Some(budget);
        self
    }

    /// Head radius in mm.
    #[inline]
    #[must_use]
    pub fn head_radius(&self) -> f64 {
        self.head_diameter / 2.0
    }

    /// Shank radius in mm.
    #[inline]
    #[must_use]
    pub fn shank_radius(&self) -> f64 {
        self.shank_diameter / 2.0
    }

    /// Total bolt length (head thickness plus shank length) in mm.
    ///
    /// # Examples
    ///
    /// ```
    /// use bolt_mesh::BoltParams;
    ///
    /// assert_eq!(BoltParams::default().total_length(), 48.0);
    /// ```
    #[inline]
    #[must_use]
    pub fn total_length(&self) -> f64 {
        self.head_thickness + self.shank_length
    }

    /// Validates the parameters.
    ///
    /// Rejects any required dimension that is zero, negative, or
    /// non-finite, and a negative thread length. Everything else,
    /// however extreme, is handled by clamping during resolution
    /// derivation.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError`] describing the first invalid parameter found.
    pub fn validate(&self) -> Result<(), MeshError> {
        let dimensions = [
            ("head diameter", self.head_diameter),
            ("head thickness", self.head_thickness),
            ("shank diameter", self.shank_diameter),
            ("shank length", self.shank_length),
            ("element size", self.element_size),
        ];

        for (name, value) in dimensions {
            if value <= 0.0 || !value.is_finite() {
                return Err(MeshError::NonPositiveDimension { name, value });
            }
        }

        if let Some(thread) = self.thread_length {
            if thread < 0.0 || !thread.is_finite() {
                return Err(MeshError::InvalidThreadLength(thread));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params() {
        let params = BoltParams::default();
        assert!((params.head_diameter - 20.0).abs() < f64::EPSILON);
        assert!((params.head_thickness - 8.0).abs() < f64::EPSILON);
        assert!((params.shank_diameter - 12.0).abs() < f64::EPSILON);
        assert!((params.shank_length - 40.0).abs() < f64::EPSILON);
        assert!((params.element_size - 2.0).abs() < f64::EPSILON);
        assert!(params.thread_length.is_none());
        assert!(params.node_budget.is_none());
    }

    #[test]
    fn test_presets() {
        let m8 = BoltParams::m8();
        assert!((m8.shank_diameter - 8.0).abs() < f64::EPSILON);
        assert!(m8.validate().is_ok());

        let m16 = BoltParams::m16();
        assert!((m16.shank_diameter - 16.0).abs() < f64::EPSILON);
        assert!(m16.validate().is_ok());
    }

    #[test]
    fn test_builder_chain() {
        let params = BoltParams::default()
            .with_head_diameter(25.0)
            .with_element_size(1.5)
            .with_thread_length(12.0)
            .with_node_budget(10_000);

        assert!((params.head_diameter - 25.0).abs() < f64::EPSILON);
        assert!((params.element_size - 1.5).abs() < f64::EPSILON);
        assert_eq!(params.thread_length, Some(12.0));
        assert_eq!(params.node_budget, Some(10_000));
    }

    #[test]
    fn test_radii() {
        let params = BoltParams::default();
        assert!((params.head_radius() - 10.0).abs() < f64::EPSILON);
        assert!((params.shank_radius() - 6.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_validate_rejects_non_positive_dimensions() {
        let params = BoltParams::default().with_shank_length(0.0);
        assert!(matches!(
            params.validate(),
            Err(MeshError::NonPositiveDimension {
                name: "shank length",
                ..
            })
        ));

        let params = BoltParams::default().with_element_size(-1.0);
        assert!(matches!(
            params.validate(),
            Err(MeshError::NonPositiveDimension {
                name: "element size",
                ..
            })
        ));
    }

    #[test]
    fn test_validate_rejects_nan() {
        let params = BoltParams::default().with_head_diameter(f64::NAN);
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_negative_thread_length() {
        let params = BoltParams::default().with_thread_length(-1.0);
        assert!(matches!(
            params.validate(),
            Err(MeshError::InvalidThreadLength(_))
        ));
    }

    #[test]
    fn test_validate_accepts_extreme_but_positive_sizes() {
        // Oversized elements clamp during derivation, never fail here.
        let params = BoltParams::default().with_element_size(500.0);
        assert!(params.validate().is_ok());
    }
}
