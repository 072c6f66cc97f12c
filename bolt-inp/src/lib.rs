//! Abaqus input-deck serialization for bolt meshes.
//!
//! Walks the node and element tables of a [`bolt_types::BoltMesh`] and
//! emits them, plus the fixed material/section/assembly/step boilerplate,
//! as the text input deck the downstream solver consumes. Output is
//! deterministic byte for byte; the only variability between decks is the
//! geometry-derived tables themselves.
//!
//! # Quick Start
//!
//! ```
//! use bolt_mesh::{generate_bolt_mesh, BoltParams};
//! use bolt_inp::serialize_deck;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mesh = generate_bolt_mesh(&BoltParams::default())?;
//! let deck = serialize_deck(&mesh)?;
//! assert!(deck.starts_with("** Abaqus Input File for 3D Bolt Model"));
//! # Ok(())
//! # }
//! ```
//!
//! For downloads, [`deck_bytes`] yields the identical content as bytes
//! and [`DECK_FILENAME`] carries the suggested filename; [`save_deck`]
//! writes straight to disk.

mod deck;
mod error;

pub use deck::{deck_bytes, save_deck, serialize_deck, DECK_FILENAME};
pub use error::{DeckError, DeckResult};
