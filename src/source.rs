use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::SourceError;
use crate::models::{ArtistPopularity, BandRow, DiscographyRow};

/// Access to the three input tables
#[cfg_attr(test, mockall::automock)]
pub trait DataSource {
    fn load_bands(&self) -> Result<Vec<BandRow>, SourceError>;
    fn load_discography(&self) -> Result<Vec<DiscographyRow>, SourceError>;
    fn load_popularity(&self) -> Result<Vec<ArtistPopularity>, SourceError>;
}

/// Reads the tables from delimited files with a header row
pub struct CsvDataSource {
    bands_path: PathBuf,
    discography_path: PathBuf,
    spotify_path: PathBuf,
}

impl CsvDataSource {
    pub fn new(config: &Config) -> Self {
        Self {
            bands_path: config.bands_path.clone(),
            discography_path: config.discography_path.clone(),
            spotify_path: config.spotify_path.clone(),
        }
    }

    /// Deserialize every record of a table. Header names are trimmed so
    /// that `" Country "` and `"Country"` address the same column, and
    /// columns the record type doesn't name are ignored. A record that
    /// doesn't deserialize is logged and skipped; only I/O failures abort.
    pub fn read_table<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, SourceError> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::Headers)
            .flexible(true)
            .from_path(path)
            .map_err(|source| SourceError::Open {
                path: path.to_path_buf(),
                source,
            })?;

        let mut rows = Vec::new();
        let mut skipped = 0usize;
        for (index, result) in reader.deserialize::<T>().enumerate() {
            match result {
                Ok(row) => rows.push(row),
                Err(source) if source.is_io_error() => {
                    return Err(SourceError::Open {
                        path: path.to_path_buf(),
                        source,
                    });
                }
                Err(source) => {
                    let err = SourceError::Row {
                        path: path.to_path_buf(),
                        record: index + 1,
                        source,
                    };
                    warn!("Skipping {err}: {}", err.cause());
                    skipped += 1;
                }
            }
        }

        if skipped > 0 {
            warn!("Skipped {} malformed records in {}", skipped, path.display());
        }
        debug!("Read {} records from {}", rows.len(), path.display());
        Ok(rows)
    }
}

impl DataSource for CsvDataSource {
    fn load_bands(&self) -> Result<Vec<BandRow>, SourceError> {
        Self::read_table(&self.bands_path)
    }

    fn load_discography(&self) -> Result<Vec<DiscographyRow>, SourceError> {
        Self::read_table(&self.discography_path)
    }

    fn load_popularity(&self) -> Result<Vec<ArtistPopularity>, SourceError> {
        Self::read_table(&self.spotify_path)
    }
}
