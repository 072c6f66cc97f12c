//! The mesh container produced by one build.

use nalgebra::Point3;

use crate::{HexElement, Node, HEX_CORNERS};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A structured hexahedral bolt mesh.
///
/// Holds the node table and element table of one build. A mesh is
/// constructed fresh for every build request, consumed by the serializer
/// and the renderer, then discarded; it is never mutated after
/// construction and keeps no reference to the parameters that built it.
///
/// # Id Contract
///
/// Node ids are the contiguous range `1..=node_count()` in table order.
/// Element ids are the contiguous range `1..=element_count()`, assigned
/// after all nodes.
///
/// # Example
///
/// ```
/// use bolt_types::{BoltMesh, Node};
///
/// let mut mesh = BoltMesh::new();
/// mesh.nodes.push(Node::from_coords(1, 10.0, 0.0, 8.0));
///
/// assert_eq!(mesh.node_count(), 1);
/// assert!(mesh.node(1).is_some());
/// assert!(mesh.node(2).is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoltMesh {
    /// Node table in id order.
    pub nodes: Vec<Node>,

    /// Element table in id order.
    pub elements: Vec<HexElement>,
}

impl BoltMesh {
    /// Create a new empty mesh.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            nodes: Vec::new(),
            elements: Vec::new(),
        }
    }

    /// Create a mesh with pre-allocated capacity.
    ///
    /// # Arguments
    ///
    /// * `node_count` - Expected number of nodes
    /// * `element_count` - Expected number of elements
    #[inline]
    #[must_use]
    pub fn with_capacity(node_count: usize, element_count: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(node_count),
            elements: Vec::with_capacity(element_count),
        }
    }

    /// Create a mesh from already-built tables.
    #[inline]
    #[must_use]
    pub const fn from_parts(nodes: Vec<Node>, elements: Vec<HexElement>) -> Self {
        Self { nodes, elements }
    }

    /// Number of nodes in the mesh.
    #[inline]
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of elements in the mesh.
    #[inline]
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Returns true if the mesh has no nodes.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Look up a node by id.
    ///
    /// Relies on the id contract (contiguous 1-based ids in table order)
    /// for O(1) access, but verifies the stored id before returning so a
    /// violated contract yields `None` instead of a wrong node.
    #[must_use]
    pub fn node(&self, id: u32) -> Option<&Node> {
        let index = (id as usize).checked_sub(1)?;
        self.nodes.get(index).filter(|n| n.id == id)
    }

    /// Corner positions of an element, in corner order.
    ///
    /// Returns `None` if any corner id is missing from the node table.
    #[must_use]
    pub fn element_corners(&self, element: &HexElement) -> Option<[Point3<f64>; HEX_CORNERS]> {
        let mut corners = [Point3::origin(); HEX_CORNERS];
        for (corner, &id) in corners.iter_mut().zip(element.nodes.iter()) {
            *corner = self.node(id)?.position;
        }
        Some(corners)
    }

    /// Node positions in id order.
    ///
    /// This is the point cloud handed to an external renderer for visual
    /// inspection; order and values match the node table exactly.
    ///
    /// # Example
    ///
    /// ```
    /// use bolt_types::{BoltMesh, Node};
    ///
    /// let mut mesh = BoltMesh::new();
    /// mesh.nodes.push(Node::from_coords(1, 10.0, 0.0, 8.0));
    /// mesh.nodes.push(Node::from_coords(2, 8.0, 0.0, 8.0));
    ///
    /// let cloud: Vec<_> = mesh.positions().collect();
    /// assert_eq!(cloud.len(), 2);
    /// assert!((cloud[0].x - 10.0).abs() < f64::EPSILON);
    /// ```
    pub fn positions(&self) -> impl Iterator<Item = Point3<f64>> + '_ {
        self.nodes.iter().map(|n| n.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_node_mesh() -> BoltMesh {
        BoltMesh::from_parts(
            vec![
                Node::from_coords(1, 0.0, 0.0, 0.0),
                Node::from_coords(2, 1.0, 0.0, 0.0),
            ],
            Vec::new(),
        )
    }

    #[test]
    fn test_empty_mesh() {
        let mesh = BoltMesh::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.node_count(), 0);
        assert_eq!(mesh.element_count(), 0);
    }

    #[test]
    fn test_node_lookup() {
        let mesh = two_node_mesh();
        assert_eq!(mesh.node(1).map(|n| n.id), Some(1));
        assert_eq!(mesh.node(2).map(|n| n.id), Some(2));
        assert!(mesh.node(0).is_none());
        assert!(mesh.node(3).is_none());
    }

    #[test]
    fn test_node_lookup_rejects_broken_contract() {
        // Table order disagrees with ids: lookup must not return a wrong node.
        let mesh = BoltMesh::from_parts(
            vec![
                Node::from_coords(2, 0.0, 0.0, 0.0),
                Node::from_coords(1, 1.0, 0.0, 0.0),
            ],
            Vec::new(),
        );
        assert!(mesh.node(1).is_none());
        assert!(mesh.node(2).is_none());
    }

    #[test]
    fn test_element_corners() {
        let nodes = (1..=8)
            .map(|id| Node::from_coords(id, f64::from(id), 0.0, 0.0))
            .collect();
        let element = HexElement::new(1, [1, 2, 3, 4, 5, 6, 7, 8]);
        let mesh = BoltMesh::from_parts(nodes, vec![element]);

        let corners = mesh.element_corners(&mesh.elements[0]);
        assert!(corners.is_some());
        if let Some(corners) = corners {
            assert!((corners[7].x - 8.0).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_element_corners_missing_node() {
        let mesh = two_node_mesh();
        let dangling = HexElement::new(1, [1, 2, 3, 4, 5, 6, 7, 8]);
        assert!(mesh.element_corners(&dangling).is_none());
    }

    #[test]
    fn test_positions_follow_id_order() {
        let mesh = two_node_mesh();
        let cloud: Vec<_> = mesh.positions().collect();
        assert!((cloud[0].x).abs() < f64::EPSILON);
        assert!((cloud[1].x - 1.0).abs() < f64::EPSILON);
    }
}
