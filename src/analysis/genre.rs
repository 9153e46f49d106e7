use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use super::utils::Tally;
use crate::models::{BandRecord, GenreCategory};

/// Separators between the genres of a multi-genre description,
/// e.g. "Death Metal/Thrash Metal" or "Doom Metal with Folk influences"
static GENRE_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[/,]|\swith\s").expect("genre separator pattern is valid"));

/// Keyword rules checked in order; the first rule with a keyword
/// contained in the lowercased genre decides the category.
const CATEGORY_RULES: &[(&[&str], GenreCategory)] = &[
    (&["black", "atmospheric black"], GenreCategory::BlackMetal),
    (&["death", "brutal", "technical death"], GenreCategory::DeathMetal),
    (&["thrash", "crossover"], GenreCategory::ThrashMetal),
    (&["doom", "stoner", "sludge"], GenreCategory::DoomStoner),
    (&["power", "symphonic"], GenreCategory::PowerSymphonic),
    (&["progressive", "prog"], GenreCategory::Progressive),
    (&["heavy metal", "traditional", "nwobhm"], GenreCategory::HeavyMetal),
    (&["grind", "gore"], GenreCategory::Grindcore),
    (&["metalcore", "deathcore", "hardcore"], GenreCategory::Core),
    (&["folk", "viking", "pagan"], GenreCategory::FolkViking),
    (&["industrial", "electronic"], GenreCategory::Industrial),
    (&["groove"], GenreCategory::GrooveMetal),
    (&["speed"], GenreCategory::SpeedMetal),
];

/// Band count for one category across the whole dataset
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenreCount {
    pub genre: GenreCategory,
    pub count: usize,
}

/// Genre normalization and classification
pub struct GenreClassifier;

impl GenreClassifier {
    /// First genre of a possibly compound description, trimmed.
    /// A missing or blank description yields "Unknown".
    pub fn extract_primary_genre(genre: Option<&str>) -> String {
        let Some(genre) = genre.filter(|g| !g.trim().is_empty()) else {
            return "Unknown".to_string();
        };

        GENRE_SEPARATOR
            .split(genre)
            .next()
            .unwrap_or(genre)
            .trim()
            .to_string()
    }

    /// Map a genre onto its coarse category; never fails
    pub fn categorize(genre: &str) -> GenreCategory {
        let genre_lower = genre.to_lowercase();

        CATEGORY_RULES
            .iter()
            .find(|(keywords, _)| keywords.iter().any(|k| genre_lower.contains(k)))
            .map(|(_, category)| *category)
            .unwrap_or(GenreCategory::Other)
    }

    /// Global band count per category, most common first
    pub fn global_counts(bands: &[BandRecord]) -> Vec<GenreCount> {
        bands
            .iter()
            .map(|band| band.category)
            .collect::<Tally<_>>()
            .ranked()
            .into_iter()
            .map(|(genre, count)| GenreCount { genre, count })
            .collect()
    }
}
