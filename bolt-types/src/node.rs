//! Finite-element nodes.

use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A numbered point of the finite-element lattice.
///
/// Node ids are 1-based and unique within a mesh, assigned in creation
/// order. The solver input deck references nodes solely by id, so ids are
/// never reordered after assignment.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Node {
    /// 1-based node id.
    pub id: u32,

    /// Position in millimeters.
    pub position: Point3<f64>,
}

impl Node {
    /// Create a node from an id and a position.
    ///
    /// # Example
    ///
    /// ```
    /// use bolt_types::{Node, Point3};
    ///
    /// let n = Node::new(1, Point3::new(10.0, 0.0, 8.0));
    /// assert_eq!(n.id, 1);
    /// ```
    #[inline]
    #[must_use]
    pub const fn new(id: u32, position: Point3<f64>) -> Self {
        Self { id, position }
    }

    /// Create a node from an id and raw coordinates.
    ///
    /// # Example
    ///
    /// ```
    /// use bolt_types::Node;
    ///
    /// let n = Node::from_coords(3, 1.0, 2.0, 3.0);
    /// assert!((n.position.y - 2.0).abs() < f64::EPSILON);
    /// ```
    #[inline]
    #[must_use]
    pub fn from_coords(id: u32, x: f64, y: f64, z: f64) -> Self {
        Self {
            id,
            position: Point3::new(x, y, z),
        }
    }

    /// Distance from the bolt axis (the Z axis).
    ///
    /// # Example
    ///
    /// ```
    /// use bolt_types::Node;
    ///
    /// let n = Node::from_coords(1, 3.0, 4.0, -7.0);
    /// assert!((n.axis_distance() - 5.0).abs() < 1e-12);
    /// ```
    #[inline]
    #[must_use]
    pub fn axis_distance(&self) -> f64 {
        self.position.x.hypot(self.position.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_keeps_position() {
        let n = Node::new(7, Point3::new(1.0, -2.0, 0.5));
        assert_eq!(n.id, 7);
        assert!((n.position.x - 1.0).abs() < f64::EPSILON);
        assert!((n.position.y + 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_axis_distance_on_axis() {
        let n = Node::from_coords(1, 0.0, 0.0, 40.0);
        assert!(n.axis_distance().abs() < f64::EPSILON);
    }

    #[test]
    fn test_axis_distance_ignores_z() {
        let a = Node::from_coords(1, 6.0, 0.0, 0.0);
        let b = Node::from_coords(2, 6.0, 0.0, -40.0);
        assert!((a.axis_distance() - b.axis_distance()).abs() < f64::EPSILON);
    }
}
