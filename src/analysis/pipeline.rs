use anyhow::{Context, Result};
use tracing::info;

use super::{
    BandCleaner, CountryAnalysis, CountryStats, DecadeShares, GenreClassifier, GenreCount,
    GenreEvolution, PopularityAnalysis, RegionAnalysis, RegionStats, SpotifySummary,
    StatusAnalysis, StatusTable,
};
use crate::models::BandRecord;
use crate::source::DataSource;

/// Every aggregate computed in one run
#[derive(Debug)]
pub struct AnalysisResults {
    pub bands: Vec<BandRecord>,
    pub raw_band_count: usize,
    pub discography_count: usize,
    pub countries: Vec<CountryStats>,
    pub regions: Vec<RegionStats>,
    pub genres: Vec<GenreCount>,
    pub statuses: StatusTable,
    pub evolution: Vec<DecadeShares>,
    pub spotify: SpotifySummary,
}

/// Loads the inputs and runs every aggregation pass over them
pub struct AnalysisPipeline<'a, S: DataSource> {
    source: &'a S,
}

impl<'a, S: DataSource> AnalysisPipeline<'a, S> {
    pub fn new(source: &'a S) -> Self {
        Self { source }
    }

    /// Any input that can't be read aborts the run; bad rows inside a
    /// readable input are dropped by the individual passes.
    pub fn run(&self) -> Result<AnalysisResults> {
        let band_rows = self.source.load_bands().context("Failed to load bands")?;
        let cleaned = BandCleaner::clean(band_rows);

        let discography = self
            .source
            .load_discography()
            .context("Failed to load discography")?;
        info!("Discography: {} album entries", discography.len());

        let popularity = self
            .source
            .load_popularity()
            .context("Failed to load streaming popularity")?;
        info!("Spotify data: {} heavy bands analyzed", popularity.len());

        let bands = cleaned.records;
        Ok(AnalysisResults {
            countries: CountryAnalysis::analyze(&bands),
            regions: RegionAnalysis::analyze(&bands),
            genres: GenreClassifier::global_counts(&bands),
            statuses: StatusAnalysis::analyze(&bands),
            evolution: GenreEvolution::analyze(&bands, &discography),
            spotify: PopularityAnalysis::analyze(&popularity),
            raw_band_count: cleaned.raw_count,
            discography_count: discography.len(),
            bands,
        })
    }
}
