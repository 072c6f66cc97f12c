//! Core types for structured bolt meshing.
//!
//! This crate provides the foundational types shared by the mesh builder
//! and the input-deck serializer:
//!
//! - [`Node`] - A numbered point of the finite-element lattice
//! - [`HexElement`] - An 8-node trilinear hexahedron (C3D8)
//! - [`BoltMesh`] - The node table and element table of one build
//!
//! # Layer 0 Crate
//!
//! This crate has no UI, logging, or I/O dependencies. It can be used in:
//! - CLI tools
//! - Web applications (WASM)
//! - Servers
//! - Test harnesses
//!
//! # Units
//!
//! All coordinates are `f64` millimeters.
//!
//! # Coordinate System
//!
//! Right-handed, with the bolt axis along Z. The head occupies positive Z
//! up to its thickness, the shank hangs below, and the two regions meet at
//! `z = 0`.
//!
//! # Example
//!
//! ```
//! use bolt_types::{BoltMesh, HexElement, Node, Point3};
//!
//! let mut mesh = BoltMesh::new();
//! for id in 1..=8u32 {
//!     mesh.nodes.push(Node::from_coords(id, 0.0, 0.0, 0.0));
//! }
//! mesh.elements.push(HexElement::new(1, [1, 2, 3, 4, 5, 6, 7, 8]));
//!
//! assert_eq!(mesh.node_count(), 8);
//! assert_eq!(mesh.element_count(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod element;
mod mesh;
mod node;

// Re-export core types
pub use element::{hex_volume, HexElement, HEX_CORNERS};
pub use mesh::BoltMesh;
pub use node::Node;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
