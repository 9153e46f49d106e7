use serde::Serialize;

use super::utils::{percentage, round_dp, serialize_pairs, Tally};
use crate::models::{BandRecord, GenreCategory};
use crate::reference::REGIONS;

/// How many categories a region's distribution keeps
pub const REGION_DISTRIBUTION_SIZE: usize = 5;

/// Genre preferences within one geographic region
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionStats {
    #[serde(rename = "Region")]
    pub region: String,
    #[serde(rename = "Total_Bands")]
    pub total_bands: usize,
    #[serde(rename = "Top_Genre")]
    pub top_genre: GenreCategory,
    #[serde(rename = "Top_Genre_Pct")]
    pub top_genre_pct: f64,
    #[serde(rename = "Genre_Distribution", serialize_with = "serialize_pairs")]
    pub genre_distribution: Vec<(GenreCategory, usize)>,
}

/// Per-region aggregation over the fixed region table
pub struct RegionAnalysis;

impl RegionAnalysis {
    /// One entry per region with at least one band, in table order
    pub fn analyze(bands: &[BandRecord]) -> Vec<RegionStats> {
        REGIONS
            .iter()
            .filter_map(|(region, countries)| Self::analyze_region(region, countries, bands))
            .collect()
    }

    fn analyze_region(region: &str, countries: &[&str], bands: &[BandRecord]) -> Option<RegionStats> {
        let genres: Tally<GenreCategory> = bands
            .iter()
            .filter(|band| countries.contains(&band.country.as_str()))
            .map(|band| band.category)
            .collect();

        let mut ranked = genres.ranked();
        let (top_genre, top_count) = *ranked.first()?;
        let total_bands = genres.total();
        ranked.truncate(REGION_DISTRIBUTION_SIZE);

        Some(RegionStats {
            region: region.to_string(),
            total_bands,
            top_genre,
            top_genre_pct: round_dp(percentage(top_count, total_bands), 1),
            genre_distribution: ranked,
        })
    }
}
