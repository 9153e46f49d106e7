use std::collections::{BTreeMap, HashMap};

use tracing::debug;

use super::utils::percentage;
use crate::models::{BandRecord, DiscographyRow, GenreCategory};

pub const FIRST_DECADE: i32 = 1970;
pub const LAST_DECADE: i32 = 2020;

/// Genre shares of all releases in one decade
#[derive(Debug, Clone, PartialEq)]
pub struct DecadeShares {
    pub decade: i32,
    pub releases: usize,
    /// Percent per category present that decade, summing to 100
    pub shares: BTreeMap<GenreCategory, f64>,
}

/// How the genre mix of releases shifts decade by decade
pub struct GenreEvolution;

impl GenreEvolution {
    /// Numeric year from a raw cell, or `None` for text like "unknown"
    pub fn parse_year(raw: &str) -> Option<f64> {
        raw.trim().parse::<f64>().ok().filter(|year| year.is_finite())
    }

    /// Decade of a year if it falls within the analysed range
    pub fn decade_of(year: f64) -> Option<i32> {
        let decade = (year / 10.0).floor() * 10.0;
        (f64::from(FIRST_DECADE)..=f64::from(LAST_DECADE))
            .contains(&decade)
            .then_some(decade as i32)
    }

    /// Join releases to their band's genre category and compute each
    /// decade's genre shares. Releases of unknown bands, with unparsable
    /// years, or outside the decade range are skipped.
    pub fn analyze(bands: &[BandRecord], discography: &[DiscographyRow]) -> Vec<DecadeShares> {
        let mut categories_by_band: HashMap<&str, Vec<GenreCategory>> = HashMap::new();
        for band in bands {
            categories_by_band
                .entry(band.band_id.as_str())
                .or_default()
                .push(band.category);
        }

        let mut counts: BTreeMap<i32, BTreeMap<GenreCategory, usize>> = BTreeMap::new();
        let mut skipped = 0usize;

        for entry in discography {
            let Some(categories) = categories_by_band.get(entry.band_id.trim()) else {
                continue;
            };
            let decade = entry
                .year
                .as_deref()
                .and_then(Self::parse_year)
                .and_then(Self::decade_of);
            let Some(decade) = decade else {
                skipped += 1;
                continue;
            };

            let row = counts.entry(decade).or_default();
            for category in categories {
                *row.entry(*category).or_insert(0) += 1;
            }
        }

        if skipped > 0 {
            debug!("Skipped {} releases without a usable year", skipped);
        }

        counts
            .into_iter()
            .map(|(decade, row)| {
                let releases = row.values().sum();
                let shares = row
                    .into_iter()
                    .map(|(category, count)| (category, percentage(count, releases)))
                    .collect();
                DecadeShares {
                    decade,
                    releases,
                    shares,
                }
            })
            .collect()
    }
}
