// src/pipeline.rs
//
// Per row:  Classifying -> Parsing -> Resolving -> Emitting
// A failure aborts that row only; the run keeps going so every bad row is
// reported at once.

use std::collections::HashSet;

use crate::config::{DedupePolicy, PipelineOptions};
use crate::episodes::EpisodeCatalog;
use crate::error::{Error, RowError, RowFault, Stage};
use crate::model::{Appearance, AppearanceRow};
use crate::notation::{self, CellShape, Complexity};
use crate::progress::Progress;
use crate::resolve::CharacterIndex;

/// What one accepted row produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowOutput {
    pub shape: CellShape,
    pub appearances: Vec<Appearance>,
}

/// An accepted row whose cell held ranges or parentheticals.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComplexRow {
    pub row: usize,
    pub subject: String,
    pub notation: String,
    pub complexity: Complexity,
}

/// Everything a run produced, good rows and bad.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PipelineRun {
    pub appearances: Vec<Appearance>,
    pub failures: Vec<RowError>,
    /// Accepted rows that were not bare numbers, in row order.
    pub complex_rows: Vec<ComplexRow>,
}

impl PipelineRun {
    pub fn is_clean(&self) -> bool { self.failures.is_empty() }

    /// Rows whose parentheticals were carried along but not applied.
    pub fn annotated_rows(&self) -> impl Iterator<Item = &ComplexRow> {
        self.complex_rows
            .iter()
            .filter(|r| r.complexity == Complexity::Annotated)
    }

    /// Distinct unresolved names, in the order they were hit.
    pub fn unknown_characters(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.failures
            .iter()
            .filter_map(RowError::unknown_character)
            .filter(|n| seen.insert(*n))
            .collect()
    }

    pub fn into_result(self) -> Result<Vec<Appearance>, Error> {
        if self.failures.is_empty() {
            Ok(self.appearances)
        } else {
            Err(Error::Rows(self.failures))
        }
    }
}

pub struct AppearancePipeline<'a> {
    characters: &'a CharacterIndex,
    catalog: &'a EpisodeCatalog,
    dedupe: DedupePolicy,
}

impl<'a> AppearancePipeline<'a> {
    pub fn new(
        characters: &'a CharacterIndex,
        catalog: &'a EpisodeCatalog,
        opts: &PipelineOptions,
    ) -> Self {
        Self { characters, catalog, dedupe: opts.dedupe }
    }

    /// Run one row through all four stages. `row` is only used for error context.
    pub fn process_row(&self, row: usize, input: &AppearanceRow) -> Result<RowOutput, RowError> {
        let fail = |stage: Stage, fault: RowFault| RowError {
            row,
            subject: input.subject.clone(),
            stage,
            fault,
        };

        // Classifying
        let shape = notation::classify(&input.notation);

        // Parsing
        let cell = notation::parse_cell(&input.notation)
            .map_err(|e| fail(Stage::Parsing, e.into()))?;

        // Resolving
        let character_id = self
            .characters
            .resolve(&input.subject)
            .map_err(|e| fail(Stage::Resolving, e.into()))?;

        // Emitting
        let mut out = Vec::with_capacity(cell.tokens.iter().map(|t| t.ordinals.len()).sum());
        for token in &cell.tokens {
            for &ordinal in &token.ordinals {
                out.push(Appearance {
                    character_id,
                    episode_id: self.catalog.id_for_ordinal(ordinal),
                    annotation: token.annotation.clone(),
                });
            }
        }

        if !shape.is_simple() {
            logd!("Row {} {:?}: {:?} cell {:?} -> {} appearance(s)",
                row, input.subject, shape, input.notation, out.len());
        }
        Ok(RowOutput { shape, appearances: out })
    }

    pub fn run(&self, rows: &[AppearanceRow]) -> PipelineRun {
        self.run_with_progress(rows, None)
    }

    pub fn run_with_progress(
        &self,
        rows: &[AppearanceRow],
        mut progress: Option<&mut dyn Progress>,
    ) -> PipelineRun {
        if let Some(p) = progress.as_deref_mut() {
            p.begin(rows.len());
        }

        let mut run = PipelineRun::default();
        let mut emitted: HashSet<(i64, i64)> = HashSet::new();

        for (i, input) in rows.iter().enumerate() {
            match self.process_row(i, input) {
                Ok(RowOutput { shape, appearances: apps }) => {
                    if let CellShape::Complex(complexity) = shape {
                        run.complex_rows.push(ComplexRow {
                            row: i,
                            subject: input.subject.clone(),
                            notation: input.notation.clone(),
                            complexity,
                        });
                    }
                    match self.dedupe {
                        DedupePolicy::KeepAll => run.appearances.extend(apps),
                        DedupePolicy::UniquePairs => run
                            .appearances
                            .extend(apps.into_iter().filter(|a| emitted.insert(a.pair()))),
                    }
                    if let Some(p) = progress.as_deref_mut() {
                        p.item_done(i, &input.subject);
                    }
                }
                Err(e) => {
                    loge!("{e}");
                    if let Some(p) = progress.as_deref_mut() {
                        p.item_failed(i, &input.subject);
                    }
                    run.failures.push(e);
                }
            }
        }

        if let Some(p) = progress.as_deref_mut() {
            p.finish();
        }
        logf!("Pipeline: {} appearance(s), {} rejected row(s), {} complex row(s)",
            run.appearances.len(), run.failures.len(), run.complex_rows.len());
        run
    }
}
