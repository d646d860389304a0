//! Alembic Data -- recipe definition documents and the parser that applies them.
//!
//! Documents may be RON, TOML, or JSON; the format is picked from the file
//! extension. See [`schema`] for the document shape and [`parser`] for how
//! each machine's elements are resolved into registry changes.

pub mod loader;
pub mod manifest;
pub mod materials;
pub mod parser;
pub mod schema;

pub use loader::{DataLoadError, Format};
pub use manifest::{LoadedPack, PackManifest, load_pack};
pub use materials::load_materials;
pub use parser::{LoadSummary, apply_document, apply_str, load_recipes};
