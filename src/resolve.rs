// src/resolve.rs
use std::collections::{HashMap, HashSet};

use crate::config::PipelineOptions;
use crate::core::sanitize::normalize_ws;
use crate::error::ResolveError;
use crate::model::{Actor, Character, TableRow};

/// Read-only name → id lookup over the registered characters.
/// Built once, before any appearance row is looked at.
#[derive(Clone, Debug, Default)]
pub struct CharacterIndex {
    by_name: HashMap<String, i64>,
}

impl CharacterIndex {
    pub fn new(characters: &[Character]) -> Self {
        let mut by_name = HashMap::with_capacity(characters.len());
        for c in characters {
            // first registration wins
            by_name.entry(c.name.clone()).or_insert(c.id);
        }
        Self { by_name }
    }

    /// Exact, case-sensitive match on the trimmed name. No fuzzing.
    pub fn resolve(&self, name: &str) -> Result<i64, ResolveError> {
        let key = name.trim();
        self.by_name
            .get(key)
            .copied()
            .ok_or_else(|| ResolveError::UnknownCharacter(s!(key)))
    }

    pub fn len(&self) -> usize { self.by_name.len() }
    pub fn is_empty(&self) -> bool { self.by_name.is_empty() }
}

/// Insertion-ordered set of actor names. Ids follow first-seen order.
#[derive(Clone, Debug, Default)]
pub struct ActorRoster {
    names: Vec<String>,
    seen: HashSet<String>,
}

impl ActorRoster {
    pub fn new() -> Self { Self::default() }

    /// Start from the names that must keep the lowest ids.
    pub fn seeded<S: AsRef<str>>(names: &[S]) -> Self {
        let mut roster = Self::new();
        for n in names { roster.insert(n.as_ref()); }
        roster
    }

    /// Returns false for blanks and names already present.
    pub fn insert(&mut self, name: &str) -> bool {
        let name = normalize_ws(name);
        if name.is_empty() || self.seen.contains(&name) {
            return false;
        }
        self.seen.insert(name.clone());
        self.names.push(name);
        true
    }

    pub fn len(&self) -> usize { self.names.len() }
    pub fn is_empty(&self) -> bool { self.names.is_empty() }

    pub fn into_actors(self, base: i64) -> Vec<Actor> {
        self.names
            .into_iter()
            .enumerate()
            .map(|(i, name)| Actor { id: base + i as i64, name })
            .collect()
    }
}

/// Collect actor names from each row's actor cell: every link text, or the
/// plain cell text when the cell has no links.
pub fn harvest_actors(rows: &[TableRow], opts: &PipelineOptions) -> Vec<Actor> {
    let mut roster = ActorRoster::seeded(&opts.seeded_actors);
    let seeded = roster.len();

    for row in rows.iter().skip(opts.character_header_rows) {
        let Some(cell) = row.cells.get(opts.actor_column) else { continue };
        if cell.links.is_empty() {
            roster.insert(&cell.text);
        } else {
            for link in &cell.links {
                roster.insert(link);
            }
        }
    }

    logd!("Actors: {} seeded, {} discovered", seeded, roster.len() - seeded);
    roster.into_actors(opts.actor_id_base)
}
