use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use super::utils::round_dp;
use crate::models::ArtistPopularity;

pub const LEADERBOARD_SIZE: usize = 25;
pub const TOP_TRACKS_SIZE: usize = 10;

/// The popularity dataset has no per-track data, so every "top track"
/// is the artist's placeholder entry.
pub const PLACEHOLDER_TRACK_TITLE: &str = "Top Track";
pub const PLACEHOLDER_TRACK_YEAR: u32 = 2024;

/// Popularity band an artist falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum PopularityTier {
    Underground,
    Cult,
    Mainstream,
    #[serde(rename = "Top Tier")]
    TopTier,
}

impl PopularityTier {
    /// Bands are [0, 45), [45, 55), [55, 65) and [65, 100]. Scores
    /// outside 0..=100 have no tier.
    pub fn from_score(score: f64) -> Option<Self> {
        match score {
            s if !(0.0..=100.0).contains(&s) => None,
            s if s < 45.0 => Some(PopularityTier::Underground),
            s if s < 55.0 => Some(PopularityTier::Cult),
            s if s < 65.0 => Some(PopularityTier::Mainstream),
            _ => Some(PopularityTier::TopTier),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PopularityTier::Underground => "Underground",
            PopularityTier::Cult => "Cult",
            PopularityTier::Mainstream => "Mainstream",
            PopularityTier::TopTier => "Top Tier",
        }
    }
}

impl fmt::Display for PopularityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopTrack {
    #[serde(rename = "Track")]
    pub track: String,
    #[serde(rename = "Artist")]
    pub artist: String,
    #[serde(rename = "Album")]
    pub album: String,
    #[serde(rename = "Year")]
    pub year: u32,
    #[serde(rename = "Popularity")]
    pub popularity: f64,
    #[serde(rename = "Monthly_Listeners")]
    pub monthly_listeners: u64,
    #[serde(rename = "Genre")]
    pub genre: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TierStats {
    #[serde(rename = "Popularity_Tier")]
    pub tier: PopularityTier,
    #[serde(rename = "Avg_Listeners")]
    pub avg_listeners: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenreBreakdown {
    #[serde(rename = "Genre")]
    pub genre: String,
    #[serde(rename = "Popularity")]
    pub popularity: Option<f64>, // Mean of finite scores, 1 decimal
    #[serde(rename = "Band_Count")]
    pub band_count: usize,
    #[serde(rename = "Monthly_Listeners")]
    pub monthly_listeners: u64,
}

/// Everything the dashboard shows about streaming popularity
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpotifySummary {
    pub top_artists: Vec<ArtistPopularity>,
    pub top_tracks: Vec<TopTrack>,
    pub tier_stats: Vec<TierStats>,
    pub genre_breakdown: Vec<GenreBreakdown>,
    pub total_tracks: usize,
    pub total_artists: usize,
}

/// Streaming popularity analysis
pub struct PopularityAnalysis;

impl PopularityAnalysis {
    pub fn analyze(artists: &[ArtistPopularity]) -> SpotifySummary {
        let ranked = Self::rank(artists);

        SpotifySummary {
            top_artists: ranked.iter().take(LEADERBOARD_SIZE).map(|a| (*a).clone()).collect(),
            top_tracks: ranked.iter().take(TOP_TRACKS_SIZE).map(|a| Self::placeholder_track(a)).collect(),
            tier_stats: Self::tier_stats(artists),
            genre_breakdown: Self::genre_breakdown(artists),
            total_tracks: artists.len(),
            total_artists: artists.len(),
        }
    }

    /// Artists by descending popularity; equal scores keep input order.
    /// Artists without a finite score go last.
    pub fn rank(artists: &[ArtistPopularity]) -> Vec<&ArtistPopularity> {
        let mut ranked: Vec<&ArtistPopularity> = artists.iter().collect();
        ranked.sort_by(|a, b| {
            match (a.popularity.is_finite(), b.popularity.is_finite()) {
                (true, true) => b.popularity.total_cmp(&a.popularity),
                (false, false) => Ordering::Equal,
                (finite_a, finite_b) => finite_b.cmp(&finite_a),
            }
        });
        ranked
    }

    fn placeholder_track(artist: &ArtistPopularity) -> TopTrack {
        TopTrack {
            track: PLACEHOLDER_TRACK_TITLE.to_string(),
            artist: artist.artist.clone(),
            album: artist.subgenre.clone(),
            year: PLACEHOLDER_TRACK_YEAR,
            popularity: artist.popularity,
            monthly_listeners: artist.monthly_listeners,
            genre: artist.genre.clone(),
        }
    }

    /// Mean monthly listeners per tier, for tiers with at least one artist
    pub fn tier_stats(artists: &[ArtistPopularity]) -> Vec<TierStats> {
        let mut sums: BTreeMap<PopularityTier, (u64, usize)> = BTreeMap::new();
        for artist in artists {
            if let Some(tier) = PopularityTier::from_score(artist.popularity) {
                let entry = sums.entry(tier).or_insert((0, 0));
                entry.0 += artist.monthly_listeners;
                entry.1 += 1;
            }
        }

        sums.into_iter()
            .map(|(tier, (listeners, count))| TierStats {
                tier,
                avg_listeners: (listeners as f64 / count as f64).round_ties_even() as u64,
            })
            .collect()
    }

    /// Per-genre mean popularity, artist count and total listeners
    pub fn genre_breakdown(artists: &[ArtistPopularity]) -> Vec<GenreBreakdown> {
        let mut groups: BTreeMap<&str, Vec<&ArtistPopularity>> = BTreeMap::new();
        for artist in artists {
            groups.entry(&artist.genre).or_default().push(artist);
        }

        groups
            .into_iter()
            .map(|(genre, members)| {
                let scores: Vec<f64> = members
                    .iter()
                    .map(|a| a.popularity)
                    .filter(|p| p.is_finite())
                    .collect();
                let popularity = (!scores.is_empty())
                    .then(|| round_dp(scores.iter().sum::<f64>() / scores.len() as f64, 1));
                GenreBreakdown {
                    genre: genre.to_string(),
                    popularity,
                    band_count: members.len(),
                    monthly_listeners: members.iter().map(|a| a.monthly_listeners).sum(),
                }
            })
            .collect()
    }
}
