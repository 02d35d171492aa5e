// src/characters.rs
use std::collections::HashSet;

use crate::config::PipelineOptions;
use crate::core::sanitize::strip_brackets;
use crate::model::{Character, TableRow};

/// Register every character in page order.
///
/// Header rows and rows without data cells are skipped. A name seen again keeps
/// the id it got the first time, so ids are dense over distinct names.
pub fn register(rows: &[TableRow], opts: &PipelineOptions) -> Vec<Character> {
    let mut out: Vec<Character> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for (i, row) in rows.iter().enumerate().skip(opts.character_header_rows) {
        let name = row.subject();
        if name.is_empty() || row.cells.is_empty() {
            logd!("Characters: skip row {} (no name or no cells)", i);
            continue;
        }
        if !seen.insert(name.clone()) {
            logw!("Characters: row {} repeats {:?}; keeping first id", i, name);
            continue;
        }

        // description lives in the last column
        let desc = row.cells.last().map(|c| strip_brackets(&c.text)).unwrap_or_default();
        let id = opts.character_id_base + out.len() as i64;
        out.push(Character::new(id, &name, &desc));
    }

    logf!("Characters: registered {}", out.len());
    out
}
