//! Structured hexahedral mesh generation for bolt geometry.
//!
//! Builds a deterministic C3D8 lattice over the two cylindrical regions
//! of a bolt (the head and the shank) from a handful of dimensions and
//! a target element size. The output is a [`bolt_types::BoltMesh`]: a
//! 1-based node table in emission order plus a hexahedral element table,
//! ready for input-deck serialization or point-cloud preview.
//!
//! # Quick Start
//!
//! ```
//! use bolt_mesh::{generate_bolt_mesh, BoltParams};
//!
//! let params = BoltParams::default().with_element_size(2.0);
//! let mesh = generate_bolt_mesh(&params).unwrap();
//! println!("{} nodes, {} elements", mesh.node_count(), mesh.element_count());
//! ```
//!
//! # Determinism
//!
//! Identical parameters produce identical meshes, node for node. Emission
//! order (axial layer, then wrap index, then ring index from the boundary
//! inward) is part of the public contract because downstream decks number
//! nodes in exactly that sequence.
//!
//! # Degenerate Inputs
//!
//! Extreme-but-positive inputs never fail: an element size larger than a
//! dimension clamps that dimension's division count to its floor, and a
//! region whose radius is smaller than the element size collapses to a
//! single ring of nodes on its exact boundary. Only non-positive
//! dimensions (and an exceeded node budget) are rejected, before any node
//! is emitted.

mod error;
mod generate;
mod grid;
mod params;
mod region;
mod resolution;

pub use error::MeshError;
pub use generate::generate_bolt_mesh;
pub use params::BoltParams;
pub use region::BoltRegion;
pub use resolution::{Resolution, MIN_CIRCUMFERENTIAL};

// Re-export the mesh types the generator produces.
pub use bolt_types::{BoltMesh, HexElement, Node};
