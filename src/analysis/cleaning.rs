use tracing::{debug, info};

use super::genre::GenreClassifier;
use super::utils::Tally;
use crate::models::{BandRecord, BandRow, GenreCategory};

/// How many unclassified primary genres the debug log lists
const UNCLASSIFIED_SAMPLE_SIZE: usize = 5;

/// Cleaned bands and the size of the table they came from
#[derive(Debug)]
pub struct CleanedBands {
    pub records: Vec<BandRecord>,
    pub raw_count: usize,
}

/// Turns raw band rows into records every aggregate can rely on
pub struct BandCleaner;

impl BandCleaner {
    /// Drop bands without a country, trim the country, and derive the
    /// primary genre and its category. Never fails on partial data.
    pub fn clean(rows: Vec<BandRow>) -> CleanedBands {
        let raw_count = rows.len();
        info!("Raw dataset: {} bands", raw_count);

        let records: Vec<BandRecord> = rows.into_iter().filter_map(Self::clean_row).collect();

        let missing_country = raw_count - records.len();
        if missing_country > 0 {
            debug!("Dropped {} bands without a country", missing_country);
        }
        info!("Cleaned dataset: {} bands", records.len());

        let compound = records.iter().filter(|r| r.is_compound_genre()).count();
        debug!("{} bands list more than one genre", compound);

        let unclassified = Self::unclassified_genres(&records);
        if !unclassified.is_empty() {
            let sample: Vec<String> = unclassified
                .iter()
                .take(UNCLASSIFIED_SAMPLE_SIZE)
                .map(|(genre, count)| format!("{genre} ({count})"))
                .collect();
            debug!("Most common unclassified genres: {}", sample.join(", "));
        }

        CleanedBands { records, raw_count }
    }

    /// Primary genres that fell through to `Other`, most common first
    pub fn unclassified_genres(records: &[BandRecord]) -> Vec<(String, usize)> {
        records
            .iter()
            .filter(|r| r.category == GenreCategory::Other)
            .map(|r| r.primary_genre.clone())
            .collect::<Tally<_>>()
            .ranked()
    }

    /// Clean a single row, or `None` when it has no usable country
    pub fn clean_row(row: BandRow) -> Option<BandRecord> {
        let country = row.country.as_deref().map(str::trim).filter(|c| !c.is_empty())?;

        let primary_genre = GenreClassifier::extract_primary_genre(row.genre.as_deref());
        let category = GenreClassifier::categorize(&primary_genre);

        Some(BandRecord {
            band_id: row.band_id.trim().to_string(),
            country: country.to_string(),
            genre: row.genre,
            primary_genre,
            category,
            status: row.status.filter(|s| !s.is_empty()),
        })
    }
}
