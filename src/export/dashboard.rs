use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use crate::analysis::utils::{percentage, round_dp, Tally};
use crate::analysis::{
    AnalysisResults, CountryAnalysis, CountryStats, GenreCount, RegionStats, SpotifySummary,
};
use crate::models::{BandRecord, GenreCategory};
use crate::reference;

/// Countries listed on the dashboard map
pub const DASHBOARD_COUNTRIES: usize = 30;
/// Countries in the genre-by-country matrix
pub const MATRIX_COUNTRIES: usize = 15;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub total_bands: usize,
    pub total_countries: usize,
    pub total_genres: usize,
    pub top_country: Option<String>,
    pub top_genre: GenreCategory,
}

/// A country row annotated with its map position
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryEntry {
    #[serde(flatten)]
    pub stats: CountryStats,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

/// The document the dashboard front end loads
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardData {
    pub summary: Summary,
    pub countries: Vec<CountryEntry>,
    pub genres: Vec<GenreCount>,
    pub regions: Vec<RegionStats>,
    pub genre_by_country: BTreeMap<String, BTreeMap<&'static str, f64>>,
    pub spotify: SpotifySummary,
}

pub struct DashboardExporter;

impl DashboardExporter {
    /// Assemble the dashboard document from a finished analysis
    pub fn build(results: &AnalysisResults) -> DashboardData {
        let bands = &results.bands;
        let countries: BTreeSet<&str> = bands.iter().map(|b| b.country.as_str()).collect();
        let categories: BTreeSet<GenreCategory> = bands.iter().map(|b| b.category).collect();

        let summary = Summary {
            total_bands: bands.len(),
            total_countries: countries.len(),
            total_genres: categories.len(),
            top_country: results.countries.first().map(|c| c.country.clone()),
            top_genre: results
                .genres
                .first()
                .map(|g| g.genre)
                .unwrap_or(GenreCategory::Unknown),
        };

        DashboardData {
            summary,
            countries: Self::country_entries(&results.countries),
            genres: results.genres.clone(),
            regions: results.regions.clone(),
            genre_by_country: Self::genre_by_country(bands, &results.countries),
            spotify: results.spotify.clone(),
        }
    }

    /// The leading countries with static coordinates, null when unknown
    pub fn country_entries(stats: &[CountryStats]) -> Vec<CountryEntry> {
        stats
            .iter()
            .take(DASHBOARD_COUNTRIES)
            .map(|s| {
                let coords = reference::coordinates(&s.country);
                CountryEntry {
                    stats: s.clone(),
                    lat: coords.map(|(lat, _)| lat),
                    lon: coords.map(|(_, lon)| lon),
                }
            })
            .collect()
    }

    /// Percentage of each category within each of the top countries.
    /// Every row carries every category seen among those countries,
    /// with 0.0 where a country has none.
    pub fn genre_by_country(
        bands: &[BandRecord],
        stats: &[CountryStats],
    ) -> BTreeMap<String, BTreeMap<&'static str, f64>> {
        let top = CountryAnalysis::top_countries(stats, MATRIX_COUNTRIES);

        let mut tallies: HashMap<&str, Tally<GenreCategory>> = HashMap::new();
        let mut columns: BTreeSet<&'static str> = BTreeSet::new();
        for band in bands.iter().filter(|b| top.contains(&b.country.as_str())) {
            tallies.entry(&band.country).or_default().add(band.category);
            columns.insert(band.category.as_str());
        }

        tallies
            .into_iter()
            .map(|(country, tally)| {
                let total = tally.total();
                let mut row: BTreeMap<&'static str, f64> =
                    columns.iter().map(|column| (*column, 0.0)).collect();
                for (category, count) in tally.ranked() {
                    row.insert(category.as_str(), round_dp(percentage(count, total), 1));
                }
                (country.to_string(), row)
            })
            .collect()
    }

    /// Write the document as pretty-printed JSON, replacing any old file
    pub fn write(data: &DashboardData, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(data).context("Failed to serialize dashboard data")?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write dashboard data to {}", path.display()))?;
        info!("Exported {}", path.display());
        Ok(())
    }
}
