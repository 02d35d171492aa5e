// src/config/options.rs
use serde::{Deserialize, Serialize};

use super::consts::*;

/// What to do with repeated `(character_id, episode_id)` pairs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DedupePolicy {
    /// Emit exactly what the cells say, repeats included.
    #[default]
    KeepAll,
    /// Keep the first occurrence of each pair across the whole run.
    UniquePairs,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonSpan {
    pub season: u32,
    pub episodes: u32,
}

fn default_layout() -> Vec<SeasonSpan> {
    SEASON_LAYOUT
        .iter()
        .map(|&(season, episodes)| SeasonSpan { season, episodes })
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineOptions {
    pub character_header_rows: usize,
    pub appearance_header_rows: usize,
    pub appearance_column: usize,
    pub actor_column: usize,

    pub character_id_base: i64,
    pub actor_id_base: i64,
    pub episode_id_base: i64,

    pub seasons: Vec<SeasonSpan>,
    pub seeded_actors: Vec<String>,
    pub dedupe: DedupePolicy,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            character_header_rows: CHARACTER_HEADER_ROWS,
            appearance_header_rows: APPEARANCE_HEADER_ROWS,
            appearance_column: APPEARANCE_COLUMN,
            actor_column: ACTOR_COLUMN,
            character_id_base: CHARACTER_ID_BASE,
            actor_id_base: ACTOR_ID_BASE,
            episode_id_base: EPISODE_ID_BASE,
            seasons: default_layout(),
            seeded_actors: KNOWN_MISSING_ACTORS.iter().map(|s| s!(*s)).collect(),
            dedupe: DedupePolicy::KeepAll,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let opts: PipelineOptions =
            serde_json::from_str(r#"{ "character_id_base": 1, "dedupe": "unique_pairs" }"#).unwrap();
        assert_eq!(opts.character_id_base, 1);
        assert_eq!(opts.dedupe, DedupePolicy::UniquePairs);
        assert_eq!(opts.appearance_column, APPEARANCE_COLUMN);
        assert_eq!(opts.seasons.len(), 2);
        assert_eq!(opts.seeded_actors.len(), KNOWN_MISSING_ACTORS.len());
    }
}
