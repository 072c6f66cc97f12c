//! Bolt mesh generation.
//!
//! Node emission and connectivity follow one fixed traversal: axial layer,
//! then wrap index, then ring index from the boundary in toward the axis.
//! The traversal is an externally observable contract: the input deck
//! numbers nodes in exactly this sequence.

// Id casts are guarded by the u32 id-space check before emission starts.
#![allow(clippy::cast_possible_truncation)]

use bolt_types::{BoltMesh, HexElement, Node, Point3};
use tracing::{debug, info};

use crate::error::MeshError;
use crate::grid::NodeGrid;
use crate::params::BoltParams;
use crate::region::BoltRegion;
use crate::resolution::Resolution;

/// Generates a structured hexahedral mesh of a bolt.
///
/// Builds the head (a solid disk of hex cells) and the shank (a solid
/// cylinder hanging below it), stitched together at `z = 0`: the shank's
/// top layer reuses the head's bottom-layer node ids wherever the two
/// grids coincide, so the regions share the seam instead of duplicating
/// it.
///
/// Never fails for extreme-but-positive inputs; division counts clamp to
/// their minimum floors instead. A build either fully succeeds or fails
/// before the first node is emitted.
///
/// # Errors
///
/// Returns [`MeshError`] if:
/// - Any required dimension is zero, negative, or non-finite
/// - The optional thread length is negative
/// - The node budget (when set) would be exceeded
/// - The node count would overflow the 32-bit id space
///
/// # Examples
///
/// ```
/// use bolt_mesh::{generate_bolt_mesh, BoltParams};
///
/// let mesh = generate_bolt_mesh(&BoltParams::default()).unwrap();
/// assert!(mesh.node_count() > 0);
/// assert_eq!(mesh.nodes[0].id, 1);
/// ```
pub fn generate_bolt_mesh(params: &BoltParams) -> Result<BoltMesh, MeshError> {
    params.validate()?;
    let resolution = Resolution::derive(params);

    let node_total = predicted_node_count(params, &resolution);
    let element_total = predicted_element_count(&resolution);

    if node_total > u32::MAX as usize {
        return Err(MeshError::MeshTooLarge {
            required: node_total,
        });
    }
    if let Some(budget) = params.node_budget {
        if node_total > budget {
            return Err(MeshError::NodeBudgetExceeded {
                budget,
                required: node_total,
            });
        }
    }

    info!(
        head_diameter = params.head_diameter,
        shank_diameter = params.shank_diameter,
        total_length = params.total_length(),
        element_size = params.element_size,
        "Starting bolt mesh build"
    );
    debug!(
        circumferential = resolution.circumferential,
        head_layers = resolution.head_layers,
        shank_layers = resolution.shank_layers,
        head_rings = resolution.head_rings,
        shank_rings = resolution.shank_rings,
        "Derived resolution"
    );

    let mut mesh = BoltMesh::with_capacity(node_total, element_total);

    let head = emit_head_nodes(&mut mesh, params, &resolution);
    let shank = emit_shank_nodes(&mut mesh, params, &resolution, &head);
    debug_assert_eq!(mesh.node_count(), node_total);

    connect_region(&mut mesh, BoltRegion::Head, &head, &resolution);
    connect_region(&mut mesh, BoltRegion::Shank, &shank, &resolution);
    debug_assert_eq!(mesh.element_count(), element_total);

    info!(
        nodes = mesh.node_count(),
        elements = mesh.element_count(),
        "Bolt mesh build complete"
    );

    Ok(mesh)
}

/// Angle of a wrap index. The last index lands back on 0° but still gets
/// its own nodes (wrap-seam redundancy keeps connectivity indexing
/// uniform).
fn wrap_angle(wrap: u32, wraps: u32) -> f64 {
    f64::from(wrap) / f64::from(wraps) * 2.0 * std::f64::consts::PI
}

/// Append one node at polar coordinates, returning its id.
fn emit_node(mesh: &mut BoltMesh, radius: f64, theta: f64, z: f64) -> u32 {
    let id = mesh.node_count() as u32 + 1;
    let x = radius * theta.cos();
    let y = radius * theta.sin();
    mesh.nodes.push(Node::new(id, Point3::new(x, y, z)));
    id
}

/// Emit every head node and record its id in the head grid.
fn emit_head_nodes(mesh: &mut BoltMesh, params: &BoltParams, resolution: &Resolution) -> NodeGrid {
    let region = BoltRegion::Head;
    let layers = region.layer_count(resolution);
    let wraps = resolution.circumferential;
    let rings = region.ring_count(resolution);
    let mut grid = NodeGrid::new(layers, wraps, rings);

    for layer in 0..=layers {
        let z = region.layer_z(layer, params, resolution);
        for wrap in 0..=wraps {
            let theta = wrap_angle(wrap, wraps);
            for ring in (0..=rings).rev() {
                let radius = region.ring_radius(ring, params, resolution);
                let id = emit_node(mesh, radius, theta, z);
                grid.set(layer, wrap, ring, id);
            }
        }
    }

    grid
}

/// Emit shank nodes, stitching the top layer onto the head's bottom
/// layer wherever the two grids place a node at the identical radius.
fn emit_shank_nodes(
    mesh: &mut BoltMesh,
    params: &BoltParams,
    resolution: &Resolution,
    head: &NodeGrid,
) -> NodeGrid {
    let region = BoltRegion::Shank;
    let layers = region.layer_count(resolution);
    let wraps = resolution.circumferential;
    let rings = region.ring_count(resolution);
    let mut grid = NodeGrid::new(layers, wraps, rings);
    let head_bottom = resolution.head_layers;

    for layer in 0..=layers {
        let z = region.layer_z(layer, params, resolution);
        for wrap in 0..=wraps {
            let theta = wrap_angle(wrap, wraps);
            for ring in (0..=rings).rev() {
                let id = if layer == 0 && seam_ring_shared(ring, params, resolution) {
                    head.get(head_bottom, wrap, ring)
                } else {
                    let radius = region.ring_radius(ring, params, resolution);
                    emit_node(mesh, radius, theta, z)
                };
                grid.set(layer, wrap, ring, id);
            }
        }
    }

    grid
}

/// True when the head's bottom layer already has a node at this seam
/// ring: the ring must exist in the head grid and sit at the identical
/// radius in both regions. Exact comparison is intended; both sides are
/// derived by the same ring-radius rule, and only bit-identical stations
/// may share a node id.
#[allow(clippy::float_cmp)]
fn seam_ring_shared(ring: u32, params: &BoltParams, resolution: &Resolution) -> bool {
    ring <= resolution.head_rings
        && BoltRegion::Head.ring_radius(ring, params, resolution)
            == BoltRegion::Shank.ring_radius(ring, params, resolution)
}

/// Emit one hexahedron per grid cell of a region.
///
/// Corner order: bottom-layer face counter-clockwise, then the top-layer
/// face in the same wrap/ring pattern. Cells are visited in the node
/// traversal order (rings boundary-first), head before shank, so element
/// ids mirror node ids.
fn connect_region(
    mesh: &mut BoltMesh,
    region: BoltRegion,
    grid: &NodeGrid,
    resolution: &Resolution,
) {
    let layers = region.layer_count(resolution);
    let wraps = resolution.circumferential;
    let rings = region.ring_count(resolution);

    for layer in 0..layers {
        for wrap in 0..wraps {
            for ring in (0..rings).rev() {
                let id = mesh.element_count() as u32 + 1;
                let nodes = [
                    grid.get(layer, wrap, ring),
                    grid.get(layer, wrap + 1, ring),
                    grid.get(layer, wrap + 1, ring + 1),
                    grid.get(layer, wrap, ring + 1),
                    grid.get(layer + 1, wrap, ring),
                    grid.get(layer + 1, wrap + 1, ring),
                    grid.get(layer + 1, wrap + 1, ring + 1),
                    grid.get(layer + 1, wrap, ring + 1),
                ];
                mesh.elements.push(HexElement::new(id, nodes));
            }
        }
    }
}

/// Exact node count the build will produce, stitching included.
///
/// Saturating arithmetic: a count that saturates is far beyond the id
/// space and budget checks anyway.
fn predicted_node_count(params: &BoltParams, resolution: &Resolution) -> usize {
    let wrap_stations = resolution.circumferential as usize + 1;
    let head = (resolution.head_layers as usize + 1)
        .saturating_mul(wrap_stations)
        .saturating_mul(resolution.head_rings as usize + 1);
    let shank = (resolution.shank_layers as usize + 1)
        .saturating_mul(wrap_stations)
        .saturating_mul(resolution.shank_rings as usize + 1);

    let shared_rings = (0..=resolution.shank_rings)
        .filter(|&ring| seam_ring_shared(ring, params, resolution))
        .count();

    head.saturating_add(shank)
        .saturating_sub(shared_rings.saturating_mul(wrap_stations))
}

/// Exact element count the build will produce.
fn predicted_element_count(resolution: &Resolution) -> usize {
    let wraps = resolution.circumferential as usize;
    let head = (resolution.head_layers as usize).saturating_mul(resolution.head_rings as usize);
    let shank = (resolution.shank_layers as usize).saturating_mul(resolution.shank_rings as usize);
    wraps.saturating_mul(head.saturating_add(shank))
}
