use std::collections::BTreeMap;

use serde::Serialize;

use super::utils::{percentage, round_dp, Tally};
use crate::models::{BandRecord, GenreCategory};

/// Band count and dominant genre for one country
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryStats {
    #[serde(rename = "Country")]
    pub country: String,
    #[serde(rename = "Band_Count")]
    pub band_count: usize,
    #[serde(rename = "Dominant_Genre")]
    pub dominant_genre: GenreCategory,
    #[serde(rename = "Percentage")]
    pub percentage: f64, // Share of all cleaned bands, 2 decimals
}

/// Per-country aggregation
pub struct CountryAnalysis;

impl CountryAnalysis {
    /// Group bands by country, most bands first. Countries with the same
    /// count are ordered by name.
    pub fn analyze(bands: &[BandRecord]) -> Vec<CountryStats> {
        let mut groups: BTreeMap<&str, Tally<GenreCategory>> = BTreeMap::new();
        for band in bands {
            groups.entry(&band.country).or_default().add(band.category);
        }

        let total = bands.len();
        let mut stats: Vec<CountryStats> = groups
            .into_iter()
            .map(|(country, genres)| {
                let band_count = genres.total();
                CountryStats {
                    country: country.to_string(),
                    band_count,
                    dominant_genre: genres.mode().unwrap_or(GenreCategory::Unknown),
                    percentage: round_dp(percentage(band_count, total), 2),
                }
            })
            .collect();

        stats.sort_by(|a, b| b.band_count.cmp(&a.band_count));
        stats
    }

    /// Names of the `n` countries with the most bands
    pub fn top_countries(stats: &[CountryStats], n: usize) -> Vec<&str> {
        stats.iter().take(n).map(|s| s.country.as_str()).collect()
    }
}
