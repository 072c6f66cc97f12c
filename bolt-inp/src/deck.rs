//! Abaqus input-deck assembly.
//!
//! The deck layout is a byte-level compatibility contract with the
//! downstream solver: block order, 3-decimal coordinates, and the absence
//! of a trailing newline after `*End Step` are all fixed. Only the node
//! and element tables vary between meshes; every other block is static
//! text.

use std::fmt::Write as _;
use std::fs::File;
use std::io::{BufWriter, Write as _};
use std::path::Path;

use bolt_types::BoltMesh;

use crate::error::{DeckError, DeckResult};

/// Suggested filename for a downloaded deck.
pub const DECK_FILENAME: &str = "bolt_model.inp";

/// Heading block and part opening, up to the start of the node table.
const HEADER_BLOCK: &str =
    "** Abaqus Input File for 3D Bolt Model\n*Heading\n3D Bolt Model\n\n*Part, name=Bolt\n*Node\n";

/// Element table marker.
const ELEMENT_BLOCK: &str = "*Element, type=C3D8\n";

/// Part closing line.
const PART_CLOSE: &str = "*End Part\n";

/// Fixed linear-elastic steel material and its section assignment.
const MATERIAL_BLOCK: &str =
    "*Material, name=Steel\n*Elastic\n210000, 0.3\n*Solid Section, elset=ALL_ELEMENTS, material=Steel\n";

/// Assembly wrapper instancing the single part.
const ASSEMBLY_BLOCK: &str =
    "*Assembly, name=Assembly\n*Instance, part=Bolt\n*End Instance\n*End Assembly\n";

/// Single static analysis step. Deliberately not newline-terminated.
const STEP_BLOCK: &str = "*Step, name=StaticStep\n*Static\n1.0, 1.0\n*End Step";

/// Serialize a mesh to input-deck text.
///
/// Pure function of the mesh: identical meshes produce byte-identical
/// decks. Nodes and elements are written in table (id) order, one line
/// each, coordinates fixed at 3 decimal places.
///
/// # Errors
///
/// Returns [`DeckError`] if the mesh violates the builder contract:
/// non-contiguous node ids or an element referencing a node that is not
/// in the table. These indicate a generator defect; serialization fails
/// before any text is produced.
///
/// # Example
///
/// ```
/// use bolt_types::BoltMesh;
/// use bolt_inp::serialize_deck;
///
/// let deck = serialize_deck(&BoltMesh::new()).unwrap();
/// assert!(deck.starts_with("** Abaqus Input File for 3D Bolt Model"));
/// assert!(deck.ends_with("*End Step"));
/// ```
pub fn serialize_deck(mesh: &BoltMesh) -> DeckResult<String> {
    validate_mesh(mesh)?;

    // Rough per-line sizes; avoids rehashing the allocation in the hot loop.
    let capacity = HEADER_BLOCK.len() + 96 + mesh.node_count() * 32 + mesh.element_count() * 56;
    let mut deck = String::with_capacity(capacity);

    deck.push_str(HEADER_BLOCK);
    for node in &mesh.nodes {
        let _ = writeln!(
            deck,
            "{}, {:.3}, {:.3}, {:.3}",
            node.id, node.position.x, node.position.y, node.position.z
        );
    }

    deck.push_str(ELEMENT_BLOCK);
    for element in &mesh.elements {
        let _ = write!(deck, "{}", element.id);
        for corner in element.nodes {
            let _ = write!(deck, ", {corner}");
        }
        deck.push('\n');
    }

    deck.push_str(PART_CLOSE);
    deck.push_str(MATERIAL_BLOCK);
    deck.push_str(ASSEMBLY_BLOCK);
    deck.push_str(STEP_BLOCK);

    Ok(deck)
}

/// Serialize a mesh to the downloadable byte stream.
///
/// Byte-identical to [`serialize_deck`] after UTF-8 encoding; pair it
/// with [`DECK_FILENAME`] for the download suggestion.
///
/// # Errors
///
/// Same conditions as [`serialize_deck`].
pub fn deck_bytes(mesh: &BoltMesh) -> DeckResult<Vec<u8>> {
    Ok(serialize_deck(mesh)?.into_bytes())
}

/// Serialize a mesh and write the deck to a file.
///
/// # Errors
///
/// Returns [`DeckError`] on a malformed mesh or a failed write.
///
/// # Example
///
/// ```no_run
/// use bolt_inp::{save_deck, DECK_FILENAME};
/// use bolt_types::BoltMesh;
///
/// let mesh = BoltMesh::new();
/// save_deck(&mesh, DECK_FILENAME).unwrap();
/// ```
pub fn save_deck<P: AsRef<Path>>(mesh: &BoltMesh, path: P) -> DeckResult<()> {
    let deck = serialize_deck(mesh)?;
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(deck.as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Fail fast on a mesh that violates the builder contract.
fn validate_mesh(mesh: &BoltMesh) -> DeckResult<()> {
    for (index, node) in mesh.nodes.iter().enumerate() {
        if node.id as usize != index + 1 {
            return Err(DeckError::NonContiguousNodeIds {
                index,
                id: node.id,
            });
        }
    }

    for element in &mesh.elements {
        for &corner in &element.nodes {
            if mesh.node(corner).is_none() {
                return Err(DeckError::MissingNode {
                    element: element.id,
                    node: corner,
                });
            }
        }
    }

    Ok(())
}
