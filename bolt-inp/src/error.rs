//! Error types for deck serialization.

use thiserror::Error;

/// Result type for deck serialization.
pub type DeckResult<T> = Result<T, DeckError>;

/// Errors that can occur while serializing or saving an input deck.
///
/// The mesh-shape variants indicate a violated builder contract, not a
/// user-facing condition: a well-formed [`bolt_types::BoltMesh`] can
/// always be serialized.
#[derive(Debug, Error)]
pub enum DeckError {
    /// The node table violates the contiguous 1-based id contract.
    #[error("node table not contiguous: index {index} holds id {id}")]
    NonContiguousNodeIds {
        /// Zero-based position in the node table.
        index: usize,
        /// The id found there (expected `index + 1`).
        id: u32,
    },

    /// An element references a node id absent from the node table.
    #[error("element {element} references missing node {node}")]
    MissingNode {
        /// Id of the offending element.
        element: u32,
        /// The dangling node id.
        node: u32,
    },

    /// I/O error while writing a deck file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
