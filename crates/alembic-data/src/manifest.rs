//! Recipe pack configuration.
//!
//! A pack directory holds a `pack.{ron,toml,json}` manifest naming the
//! materials file and the recipe documents to apply, in order. Later
//! documents see the recipes added by earlier ones, so a pack can ship base
//! recipes and then remove or override some of them.

use std::path::{Path, PathBuf};

use alembic_core::registry::RecipeRegistry;
use alembic_core::resolver::MaterialTable;
use serde::Deserialize;
use tracing::{info, warn};

use crate::loader::{DataLoadError, deserialize_file, require_data_file};
use crate::materials::load_materials;
use crate::parser::{LoadSummary, load_recipes};

fn default_materials() -> String {
    "materials".to_string()
}

/// The `pack` manifest.
#[derive(Debug, Clone, Deserialize)]
pub struct PackManifest {
    /// Base name (no extension) of the materials file.
    #[serde(default = "default_materials")]
    pub materials: String,
    /// Recipe documents, relative to the pack directory, applied in order.
    #[serde(default)]
    pub recipes: Vec<PathBuf>,
}

/// Everything a pack produced.
#[derive(Debug)]
pub struct LoadedPack {
    pub materials: MaterialTable,
    pub registry: RecipeRegistry,
    pub summary: LoadSummary,
    /// Recipe documents that could not be read or parsed.
    pub failed: Vec<PathBuf>,
}

/// Load the pack manifest from `dir`.
pub fn load_manifest(dir: &Path) -> Result<PackManifest, DataLoadError> {
    let path = require_data_file(dir, "pack")?;
    deserialize_file(&path)
}

/// Load a whole pack into a fresh registry.
///
/// A missing manifest or materials file is an error. A recipe document that
/// fails to load is recorded in [`LoadedPack::failed`] and the remaining
/// documents still apply.
pub fn load_pack(dir: &Path) -> Result<LoadedPack, DataLoadError> {
    let manifest = load_manifest(dir)?;
    let materials = load_materials(&require_data_file(dir, &manifest.materials)?)?;

    let mut registry = RecipeRegistry::new();
    let mut summary = LoadSummary::default();
    let mut failed = Vec::new();

    for relative in &manifest.recipes {
        let path = dir.join(relative);
        match load_recipes(&path, &materials, &mut registry) {
            Ok(s) => summary += s,
            Err(e) => {
                warn!(file = %path.display(), "skipping recipe document: {e}");
                failed.push(path);
            }
        }
    }

    info!(
        dir = %dir.display(),
        recipes = registry.len(),
        failed = failed.len(),
        "loaded recipe pack"
    );

    Ok(LoadedPack {
        materials,
        registry,
        summary,
        failed,
    })
}
