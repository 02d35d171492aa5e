// src/store.rs
use std::{fs, path::{Path, PathBuf}};

use serde::{Deserialize, Serialize};

use crate::config::consts::{ACTORS_FILE, APPEARANCES_FILE, CHARACTERS_FILE, EPISODES_FILE};
use crate::config::PipelineOptions;
use crate::error::Result;
use crate::file::{ensure_directory, write_json};
use crate::model::{Actor, Appearance, Character, Episode, TableRow};

/// Rows as located by the HTML collaborator. `options` may override defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceTables {
    #[serde(default)]
    pub options: PipelineOptions,
    pub characters: Vec<TableRow>,
    /// Falls back to `characters` when absent; the page uses one table for both.
    #[serde(default)]
    pub appearances: Option<Vec<TableRow>>,
}

impl SourceTables {
    pub fn appearance_rows(&self) -> &[TableRow] {
        self.appearances.as_deref().unwrap_or(&self.characters)
    }
}

/// The four record sets handed to persistence.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    pub characters: Vec<Character>,
    pub actors: Vec<Actor>,
    pub episodes: Vec<Episode>,
    pub appearances: Vec<Appearance>,
}

pub fn load_tables(path: &Path) -> Result<SourceTables> {
    let text = fs::read_to_string(path)?;
    let tables = serde_json::from_str(&text)?;
    Ok(tables)
}

/// Write one JSON file per record set into `dir`. Returns the paths written.
pub fn write_dataset(dir: &Path, ds: &Dataset) -> Result<Vec<PathBuf>> {
    ensure_directory(dir)?;

    let files = [
        (CHARACTERS_FILE, serde_json::to_value(&ds.characters)?),
        (ACTORS_FILE, serde_json::to_value(&ds.actors)?),
        (EPISODES_FILE, serde_json::to_value(&ds.episodes)?),
        (APPEARANCES_FILE, serde_json::to_value(&ds.appearances)?),
    ];

    let mut written = Vec::with_capacity(files.len());
    for (name, value) in &files {
        let path = dir.join(name);
        write_json(&path, value)?;
        logd!("Store: wrote {}", path.display());
        written.push(path);
    }
    Ok(written)
}
