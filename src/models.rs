use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// One row of the bands table as it appears on disk
#[derive(Debug, Clone, Deserialize)]
pub struct BandRow {
    #[serde(rename = "Band ID")]
    pub band_id: String,
    #[serde(rename = "Country")]
    pub country: Option<String>,
    #[serde(rename = "Genre")]
    pub genre: Option<String>,
    #[serde(rename = "Status")]
    pub status: Option<String>,
}

/// One row of the discography table. The year is kept raw because the
/// source mixes numeric years with free text.
#[derive(Debug, Clone, Deserialize)]
pub struct DiscographyRow {
    #[serde(rename = "Band ID")]
    pub band_id: String,
    #[serde(rename = "Year")]
    pub year: Option<String>,
}

/// Streaming popularity for a single artist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtistPopularity {
    #[serde(rename = "Artist")]
    pub artist: String,
    #[serde(rename = "Genre")]
    pub genre: String,
    #[serde(rename = "Subgenre")]
    pub subgenre: String,
    #[serde(rename = "Popularity")]
    pub popularity: f64,
    #[serde(rename = "Monthly_Listeners", deserialize_with = "listener_count")]
    pub monthly_listeners: u64,
}

/// Listener counts are sometimes exported as floats (`2500000.0`).
fn listener_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    if !value.is_finite() || value < 0.0 {
        return Err(serde::de::Error::custom(format!(
            "invalid listener count {value}"
        )));
    }
    Ok(value.round() as u64)
}

/// Coarse genre buckets used by every aggregate.
///
/// The classifier only ever produces the first fourteen variants;
/// `Unknown` stands in when there is nothing to take a mode over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum GenreCategory {
    #[serde(rename = "Black Metal")]
    BlackMetal,
    #[serde(rename = "Death Metal")]
    DeathMetal,
    #[serde(rename = "Thrash Metal")]
    ThrashMetal,
    #[serde(rename = "Doom/Stoner")]
    DoomStoner,
    #[serde(rename = "Power/Symphonic")]
    PowerSymphonic,
    #[serde(rename = "Progressive")]
    Progressive,
    #[serde(rename = "Heavy Metal")]
    HeavyMetal,
    #[serde(rename = "Grindcore")]
    Grindcore,
    #[serde(rename = "Core")]
    Core,
    #[serde(rename = "Folk/Viking")]
    FolkViking,
    #[serde(rename = "Industrial")]
    Industrial,
    #[serde(rename = "Groove Metal")]
    GrooveMetal,
    #[serde(rename = "Speed Metal")]
    SpeedMetal,
    #[serde(rename = "Other")]
    Other,
    #[serde(rename = "Unknown")]
    Unknown,
}

impl GenreCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            GenreCategory::BlackMetal => "Black Metal",
            GenreCategory::DeathMetal => "Death Metal",
            GenreCategory::ThrashMetal => "Thrash Metal",
            GenreCategory::DoomStoner => "Doom/Stoner",
            GenreCategory::PowerSymphonic => "Power/Symphonic",
            GenreCategory::Progressive => "Progressive",
            GenreCategory::HeavyMetal => "Heavy Metal",
            GenreCategory::Grindcore => "Grindcore",
            GenreCategory::Core => "Core",
            GenreCategory::FolkViking => "Folk/Viking",
            GenreCategory::Industrial => "Industrial",
            GenreCategory::GrooveMetal => "Groove Metal",
            GenreCategory::SpeedMetal => "Speed Metal",
            GenreCategory::Other => "Other",
            GenreCategory::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for GenreCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A band that survived cleaning, with its derived genre fields
#[derive(Debug, Clone)]
pub struct BandRecord {
    pub band_id: String,
    pub country: String, // Always non-empty and trimmed
    pub genre: Option<String>,
    pub primary_genre: String,
    pub category: GenreCategory,
    pub status: Option<String>,
}

impl BandRecord {
    /// True when the raw genre lists more than the primary one,
    /// e.g. `"Death Metal/Grindcore"`.
    pub fn is_compound_genre(&self) -> bool {
        self.genre
            .as_deref()
            .map(str::trim)
            .is_some_and(|raw| !raw.is_empty() && raw != self.primary_genre)
    }
}
