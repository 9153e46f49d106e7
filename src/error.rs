use std::path::PathBuf;

/// Failures while reading one of the input tables
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("failed to read {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("malformed record {record} in {}", path.display())]
    Row {
        path: PathBuf,
        record: usize,
        #[source]
        source: csv::Error,
    },
}

impl SourceError {
    /// The underlying csv failure
    pub fn cause(&self) -> &csv::Error {
        match self {
            SourceError::Open { source, .. } | SourceError::Row { source, .. } => source,
        }
    }
}
