use std::collections::{BTreeMap, BTreeSet};

use super::utils::{percentage, round_dp};
use crate::models::BandRecord;

pub const ACTIVE_STATUS: &str = "Active";

/// Band status counts for one country
#[derive(Debug, Clone, PartialEq)]
pub struct StatusRow {
    pub country: String,
    pub counts: BTreeMap<String, usize>,
    pub total: usize,
    /// Present whenever any band in the dataset is active
    pub active_rate: Option<f64>,
}

impl StatusRow {
    pub fn count(&self, status: &str) -> usize {
        self.counts.get(status).copied().unwrap_or(0)
    }
}

/// Country by status pivot
#[derive(Debug, Clone, PartialEq)]
pub struct StatusTable {
    /// Every status seen, in name order
    pub statuses: Vec<String>,
    /// Countries with most bands first
    pub rows: Vec<StatusRow>,
}

pub struct StatusAnalysis;

impl StatusAnalysis {
    /// Pivot bands into country x status counts. Bands without a
    /// status don't take part.
    pub fn analyze(bands: &[BandRecord]) -> StatusTable {
        let mut pivot: BTreeMap<&str, BTreeMap<String, usize>> = BTreeMap::new();
        let mut statuses = BTreeSet::new();

        for band in bands {
            let Some(status) = band.status.as_deref() else {
                continue;
            };
            statuses.insert(status.to_string());
            *pivot
                .entry(&band.country)
                .or_default()
                .entry(status.to_string())
                .or_insert(0) += 1;
        }

        let has_active = statuses.contains(ACTIVE_STATUS);
        let mut rows: Vec<StatusRow> = pivot
            .into_iter()
            .map(|(country, counts)| {
                let total = counts.values().sum();
                let active = counts.get(ACTIVE_STATUS).copied().unwrap_or(0);
                StatusRow {
                    country: country.to_string(),
                    counts,
                    total,
                    active_rate: has_active.then(|| round_dp(percentage(active, total), 1)),
                }
            })
            .collect();

        rows.sort_by(|a, b| b.total.cmp(&a.total));

        StatusTable {
            statuses: statuses.into_iter().collect(),
            rows,
        }
    }
}
