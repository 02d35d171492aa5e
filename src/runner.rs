// src/runner.rs
use crate::{
    characters,
    config::consts::SOURCE_PAGE,
    episodes::EpisodeCatalog,
    error::{Error, Result},
    model::AppearanceRow,
    pipeline::AppearancePipeline,
    progress::Progress,
    resolve::{self, CharacterIndex},
    store::{Dataset, SourceTables},
};

/// Top-level runner: reference tables first, then appearances, then validation.
/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
pub fn build_dataset(
    tables: &SourceTables,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Dataset> {
    let opts = &tables.options;
    logf!("Building dataset for {:?}", SOURCE_PAGE);

    if let Some(p) = progress.as_deref_mut() {
        p.log("Registering characters…");
    }
    let characters = characters::register(&tables.characters, opts);
    let actors = resolve::harvest_actors(&tables.characters, opts);
    let catalog = EpisodeCatalog::generate(&opts.seasons, opts.episode_id_base);
    logd!("Episodes: {} ({}..={})", catalog.len(), catalog.min_id(), catalog.max_id());

    let rows = appearance_rows(tables);
    let index = CharacterIndex::new(&characters);

    if let Some(p) = progress.as_deref_mut() {
        p.log("Parsing appearances…");
    }
    let pipeline = AppearancePipeline::new(&index, &catalog, opts);
    let run = pipeline.run_with_progress(&rows, progress);
    for r in run.annotated_rows() {
        logw!("Row {} {:?}: annotation in {:?} kept verbatim, not applied", r.row, r.subject, r.notation);
    }
    let appearances = run.into_result()?;

    catalog
        .validate(&appearances)
        .map_err(Error::InvalidEpisodeReferences)?;

    Ok(Dataset {
        characters,
        actors,
        episodes: catalog.into_episodes(),
        appearances,
    })
}

/// Skip header rows. A row without the notation column becomes an empty
/// notation, so the pipeline reports it instead of it vanishing here.
pub fn appearance_rows(tables: &SourceTables) -> Vec<AppearanceRow> {
    let opts = &tables.options;
    tables
        .appearance_rows()
        .iter()
        .skip(opts.appearance_header_rows)
        .map(|row| {
            row.appearance_row(opts.appearance_column)
                .unwrap_or_else(|| AppearanceRow::new(row.subject(), s!()))
        })
        .collect()
}
