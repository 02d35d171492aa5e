// src/episodes.rs
use crate::config::SeasonSpan;
use crate::error::InvalidEpisodeReference;
use crate::model::{Appearance, Episode};

/// Closed, generated list of episodes. Never scraped.
///
/// Appearance cells count episodes straight through the show, so ordinal `n`
/// is the n-th catalog entry: `id = base + n - 1`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EpisodeCatalog {
    episodes: Vec<Episode>,
    base: i64,
}

impl EpisodeCatalog {
    pub fn generate(layout: &[SeasonSpan], base: i64) -> Self {
        let mut episodes = Vec::new();
        for span in layout {
            for episode in 1..=span.episodes {
                let id = base + episodes.len() as i64;
                episodes.push(Episode { id, season: span.season, episode });
            }
        }
        Self { episodes, base }
    }

    pub fn episodes(&self) -> &[Episode] { &self.episodes }
    pub fn into_episodes(self) -> Vec<Episode> { self.episodes }
    pub fn len(&self) -> usize { self.episodes.len() }
    pub fn is_empty(&self) -> bool { self.episodes.is_empty() }

    pub fn min_id(&self) -> i64 { self.base }

    /// Last valid id; `base - 1` for an empty catalog, so nothing validates.
    pub fn max_id(&self) -> i64 { self.base + self.episodes.len() as i64 - 1 }

    pub fn contains_id(&self, id: i64) -> bool {
        (self.min_id()..=self.max_id()).contains(&id)
    }

    /// Map a page ordinal to an episode id. Out-of-range ordinals still map;
    /// `validate` is where they get caught.
    pub fn id_for_ordinal(&self, ordinal: u32) -> i64 {
        self.base + i64::from(ordinal) - 1
    }

    pub fn get(&self, id: i64) -> Option<&Episode> {
        if !self.contains_id(id) { return None; }
        self.episodes.get((id - self.base) as usize)
    }

    /// Every appearance whose episode id falls outside the catalog.
    pub fn validate(&self, appearances: &[Appearance]) -> Result<(), Vec<InvalidEpisodeReference>> {
        let bad: Vec<_> = appearances
            .iter()
            .filter(|a| !self.contains_id(a.episode_id))
            .map(|a| InvalidEpisodeReference {
                character_id: a.character_id,
                episode_id: a.episode_id,
                min_id: self.min_id(),
                max_id: self.max_id(),
            })
            .collect();
        if bad.is_empty() { Ok(()) } else { Err(bad) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PipelineOptions;

    fn show() -> EpisodeCatalog {
        let opts = PipelineOptions::default();
        EpisodeCatalog::generate(&opts.seasons, opts.episode_id_base)
    }

    #[test]
    fn default_layout_has_67_episodes() {
        let cat = show();
        assert_eq!(cat.len(), 67);
        assert_eq!(cat.min_id(), 1);
        assert_eq!(cat.max_id(), 67);

        let eps = cat.episodes();
        assert!(eps[..48].iter().enumerate().all(|(i, e)| {
            e.id == i as i64 + 1 && e.season == 1 && e.episode == i as u32 + 1
        }));
        assert!(eps[48..].iter().enumerate().all(|(i, e)| {
            e.id == i as i64 + 49 && e.season == 2 && e.episode == i as u32 + 1
        }));
        assert_eq!(cat.get(49), Some(&Episode { id: 49, season: 2, episode: 1 }));
        assert_eq!(cat.get(68), None);
    }

    #[test]
    fn zero_base_shifts_ids() {
        let cat = EpisodeCatalog::generate(&PipelineOptions::default().seasons, 0);
        assert_eq!(cat.min_id(), 0);
        assert_eq!(cat.max_id(), 66);
        assert_eq!(cat.id_for_ordinal(1), 0);
        assert_eq!(cat.get(66).map(|e| (e.season, e.episode)), Some((2, 19)));
    }

    #[test]
    fn validation_reports_every_stray_reference() {
        let cat = show();
        let apps = vec![
            Appearance::new(0, 1),
            Appearance::new(0, 0),
            Appearance::new(1, 67),
            Appearance::new(2, 68),
        ];
        let bad = cat.validate(&apps).unwrap_err();
        assert_eq!(bad.iter().map(|b| b.episode_id).collect::<Vec<_>>(), vec![0, 68]);
        assert_eq!(bad[0].min_id, 1);
        assert_eq!(bad[0].max_id, 67);
        assert!(cat.validate(&apps[..1]).is_ok());
    }
}
