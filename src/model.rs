// src/model.rs
//
// Record shapes shared by the parser, the pipeline and the JSON store.
// Field names on the output side match the files the scraper has always written.

use serde::{Deserialize, Serialize};

use crate::core::sanitize::normalize_ws;

/* ---------------- Input side ---------------- */

/// One `<td>` as handed over by the HTML collaborator.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub text: String,
    #[serde(default)]
    pub links: Vec<String>,
}

impl Cell {
    pub fn text(text: impl Into<String>) -> Self {
        Self { text: text.into(), links: Vec::new() }
    }

    pub fn linked(text: impl Into<String>, links: &[&str]) -> Self {
        Self {
            text: text.into(),
            links: links.iter().map(|l| s!(*l)).collect(),
        }
    }
}

/// One `<tr>`: the `<th>` text plus the `<td>` cells in column order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    pub header: String,
    #[serde(default)]
    pub cells: Vec<Cell>,
}

impl TableRow {
    pub fn new(header: impl Into<String>, cells: Vec<Cell>) -> Self {
        Self { header: header.into(), cells }
    }

    /// Subject + notation view of this row, if the notation column exists.
    /// The subject is whitespace-normalized the same way character names are
    /// at registration.
    pub fn appearance_row(&self, column: usize) -> Option<AppearanceRow> {
        let cell = self.cells.get(column)?;
        Some(AppearanceRow {
            subject: self.subject(),
            notation: cell.text.trim().to_string(),
        })
    }

    /// The `<th>` text as a character name.
    pub fn subject(&self) -> String {
        normalize_ws(&self.header)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppearanceRow {
    pub subject: String,
    pub notation: String,
}

impl AppearanceRow {
    pub fn new(subject: impl Into<String>, notation: impl Into<String>) -> Self {
        Self { subject: subject.into(), notation: notation.into() }
    }
}

/* ---------------- Output side ---------------- */

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    #[serde(rename = "character_id")]
    pub id: i64,
    #[serde(rename = "character_name")]
    pub name: String,
    #[serde(rename = "character_desc")]
    pub description: String,
}

impl Character {
    pub fn new(id: i64, name: &str, description: &str) -> Self {
        Self {
            id,
            name: normalize_ws(name),
            description: normalize_ws(description),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    #[serde(rename = "actor_id")]
    pub id: i64,
    #[serde(rename = "actor_name")]
    pub name: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Episode {
    #[serde(rename = "episode_id")]
    pub id: i64,
    pub season: u32,
    pub episode: u32,
}

/// "This character appears in this episode."
///
/// `annotation` carries the raw parenthetical of the token that produced the
/// pair (e.g. `"(ikke 6)"`). It is kept for review and never applied.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Appearance {
    pub character_id: i64,
    pub episode_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotation: Option<String>,
}

impl Appearance {
    pub fn new(character_id: i64, episode_id: i64) -> Self {
        Self { character_id, episode_id, annotation: None }
    }

    pub fn pair(&self) -> (i64, i64) {
        (self.character_id, self.episode_id)
    }
}
