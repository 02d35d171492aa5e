// src/config/consts.rs

// Source page
pub const SOURCE_PAGE: &str = "Figurer fra Casper & Mandrilaftalen";

// Table layout
pub const CHARACTER_HEADER_ROWS: usize = 1;
pub const APPEARANCE_HEADER_ROWS: usize = 2;
pub const APPEARANCE_COLUMN: usize = 2;
pub const ACTOR_COLUMN: usize = 0;

// Id bases
pub const CHARACTER_ID_BASE: i64 = 0;
pub const ACTOR_ID_BASE: i64 = 1;
pub const EPISODE_ID_BASE: i64 = 1;

// Episode catalog: (season, episode count)
pub const SEASON_LAYOUT: &[(u32, u32)] = &[(1, 48), (2, 19)];

// Actors the page never links; seeded ahead of discovered names
pub const KNOWN_MISSING_ACTORS: &[&str] = &[
    "Iben Sol Mauritson",
    "Freulein",
    "Nordine Amraoui",
];

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const CHARACTERS_FILE: &str = "characters.json";
pub const ACTORS_FILE: &str = "actors.json";
pub const EPISODES_FILE: &str = "episodes.json";
pub const APPEARANCES_FILE: &str = "appearances.json";
