//! Loading and holding the seven source collections.
//!
//! The catalog is read once at startup from the directory layout the crawler
//! writes and then treated as immutable for the process lifetime. Nothing in
//! the search pipeline performs I/O after this point.

use crate::error::{CatalogError, Result};
use crate::model::{DataFile, GameEvent, LuaClass, LuaConstant, LuaEnum, LuaFunction, UiEnum, UiEvent};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// Relative paths of the seven collection files within the data directory.
const CLASSES_FILE: &str = "luaapi/classes_cn.json";
const FUNCTIONS_FILE: &str = "luaapi/functions_cn.json";
const ENUMS_FILE: &str = "luaapi/enums_cn.json";
const CONSTANTS_FILE: &str = "luaapi/constants.json";
const GAME_EVENTS_FILE: &str = "gameevents/events_cn.json";
const UI_ENUMS_FILE: &str = "panoramaapi/enums.json";
const UI_EVENTS_FILE: &str = "panoramaevents/events.json";

/// The full set of parsed source collections.
///
/// Built once from the static data files and never mutated afterwards; the
/// search index is derived from it and shares its lifecycle.
#[derive(Debug, Default)]
pub struct ApiCatalog {
    pub classes: Vec<LuaClass>,
    pub functions: Vec<LuaFunction>,
    pub enums: Vec<LuaEnum>,
    pub constants: Vec<LuaConstant>,
    pub game_events: Vec<GameEvent>,
    pub ui_enums: Vec<UiEnum>,
    pub ui_events: Vec<UiEvent>,
}

impl ApiCatalog {
    /// Load all seven collections from `data_dir`.
    ///
    /// Fails only when a file is missing or unparseable as a whole; sparse
    /// records inside a file degrade field-by-field instead (see `model`).
    pub fn load(data_dir: impl AsRef<Path>) -> Result<Self> {
        let dir = data_dir.as_ref();

        let catalog = Self {
            classes: load_collection(dir, CLASSES_FILE)?,
            functions: load_collection(dir, FUNCTIONS_FILE)?,
            enums: load_collection(dir, ENUMS_FILE)?,
            constants: load_collection(dir, CONSTANTS_FILE)?,
            game_events: load_collection(dir, GAME_EVENTS_FILE)?,
            ui_enums: load_collection(dir, UI_ENUMS_FILE)?,
            ui_events: load_collection(dir, UI_EVENTS_FILE)?,
        };

        tracing::info!(
            "Loaded API catalog from {}: {} classes, {} functions, {} enums, {} constants, {} game events, {} UI enums, {} UI events",
            dir.display(),
            catalog.classes.len(),
            catalog.functions.len(),
            catalog.enums.len(),
            catalog.constants.len(),
            catalog.game_events.len(),
            catalog.ui_enums.len(),
            catalog.ui_events.len(),
        );

        Ok(catalog)
    }

    /// Total number of source records across all collections (before
    /// flattening into search records).
    pub fn source_count(&self) -> usize {
        self.classes.len()
            + self.functions.len()
            + self.enums.len()
            + self.constants.len()
            + self.game_events.len()
            + self.ui_enums.len()
            + self.ui_events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.source_count() == 0
    }
}

/// Read and parse one collection file, tolerating metadata drift.
fn load_collection<T: DeserializeOwned>(
    dir: &Path,
    relative: &str,
) -> std::result::Result<Vec<T>, CatalogError> {
    let path = dir.join(relative);

    let content = fs::read_to_string(&path).map_err(|source| CatalogError::Read {
        path: path.clone(),
        source,
    })?;

    let file: DataFile<T> =
        serde_json::from_str(&content).map_err(|source| CatalogError::Parse {
            path: path.clone(),
            source,
        })?;

    // The header count is advisory; the items list is authoritative.
    if file.metadata.count != 0 && file.metadata.count != file.items.len() {
        tracing::warn!(
            "Item count mismatch in {}: header says {}, file contains {}",
            path.display(),
            file.metadata.count,
            file.items.len()
        );
    }

    tracing::debug!("Loaded {} items from {}", file.items.len(), path.display());
    Ok(file.items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;

    #[test]
    fn missing_file_reports_path() {
        let result = load_collection::<LuaClass>(Path::new("/nonexistent"), CLASSES_FILE);
        let error = result.unwrap_err();
        check!(error.to_string().contains("classes_cn.json"));
    }

    #[test]
    fn empty_catalog_counts_zero() {
        let catalog = ApiCatalog::default();
        check!(catalog.source_count() == 0);
        check!(catalog.is_empty());
    }
}
