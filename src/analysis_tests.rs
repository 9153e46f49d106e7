// Tests for band cleaning and genre classification

use crate::analysis::{BandCleaner, GenreClassifier};
use crate::models::{BandRow, GenreCategory};

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_row(id: &str, country: Option<&str>, genre: Option<&str>) -> BandRow {
        BandRow {
            band_id: id.to_string(),
            country: country.map(|c| c.to_string()),
            genre: genre.map(|g| g.to_string()),
            status: Some("Active".to_string()),
        }
    }

    #[test]
    fn test_primary_genre_splits_on_separators() {
        assert_eq!(
            GenreClassifier::extract_primary_genre(Some("Technical Death Metal/Groove")),
            "Technical Death Metal"
        );
        assert_eq!(
            GenreClassifier::extract_primary_genre(Some("Heavy Metal, Hard Rock")),
            "Heavy Metal"
        );
        assert_eq!(
            GenreClassifier::extract_primary_genre(Some("Doom Metal with Folk influences")),
            "Doom Metal"
        );
        assert_eq!(
            GenreClassifier::extract_primary_genre(Some("  Thrash Metal  ")),
            "Thrash Metal"
        );
    }

    #[test]
    fn test_primary_genre_keeps_with_inside_words() {
        // "with" only separates when it stands alone
        assert_eq!(
            GenreClassifier::extract_primary_genre(Some("Withered Black Metal")),
            "Withered Black Metal"
        );
    }

    #[test]
    fn test_missing_genre_is_unknown() {
        assert_eq!(GenreClassifier::extract_primary_genre(None), "Unknown");
        assert_eq!(GenreClassifier::extract_primary_genre(Some("   ")), "Unknown");
        assert_eq!(GenreClassifier::categorize("Unknown"), GenreCategory::Other);
    }

    #[test]
    fn test_categorize_follows_rule_order() {
        let cases = [
            ("Atmospheric Black Metal", GenreCategory::BlackMetal),
            ("Blackened Death Metal", GenreCategory::BlackMetal),
            ("Technical Death Metal", GenreCategory::DeathMetal),
            ("Brutal Deathcore", GenreCategory::DeathMetal),
            ("Crossover Thrash", GenreCategory::ThrashMetal),
            ("Sludge Metal", GenreCategory::DoomStoner),
            ("Symphonic Power Metal", GenreCategory::PowerSymphonic),
            ("Prog Metal", GenreCategory::Progressive),
            ("NWOBHM", GenreCategory::HeavyMetal),
            ("Goregrind", GenreCategory::Grindcore),
            ("Metalcore", GenreCategory::Core),
            ("Pagan Metal", GenreCategory::FolkViking),
            ("Industrial Metal", GenreCategory::Industrial),
            ("Groove Metal", GenreCategory::GrooveMetal),
            ("Speed Metal", GenreCategory::SpeedMetal),
            ("Gothic Metal", GenreCategory::Other),
        ];

        for (genre, expected) in cases {
            assert_eq!(GenreClassifier::categorize(genre), expected, "genre: {genre}");
        }
    }

    #[test]
    fn test_categorize_is_case_insensitive() {
        assert_eq!(GenreClassifier::categorize("DOOM METAL"), GenreCategory::DoomStoner);
        assert_eq!(GenreClassifier::categorize("heavy metal"), GenreCategory::HeavyMetal);
    }

    #[test]
    fn test_technical_death_with_groove_scenario() {
        let primary = GenreClassifier::extract_primary_genre(Some("Technical Death Metal/Groove"));
        assert_eq!(GenreClassifier::categorize(&primary), GenreCategory::DeathMetal);
    }

    #[test]
    fn test_cleaning_drops_rows_without_country() {
        let rows = vec![
            create_test_row("1", Some("Sweden"), Some("Black Metal")),
            create_test_row("2", None, Some("Death Metal")),
            create_test_row("3", Some("   "), Some("Thrash Metal")),
            create_test_row("4", Some("  Norway "), None),
        ];

        let cleaned = BandCleaner::clean(rows);

        assert_eq!(cleaned.raw_count, 4);
        assert_eq!(cleaned.records.len(), 2);
        for record in &cleaned.records {
            assert!(!record.country.is_empty());
            assert_eq!(record.country, record.country.trim());
        }
        assert_eq!(cleaned.records[1].country, "Norway");
        assert_eq!(cleaned.records[1].primary_genre, "Unknown");
        assert_eq!(cleaned.records[1].category, GenreCategory::Other);
    }

    #[test]
    fn test_cleaned_records_never_unknown_category() {
        let rows = vec![
            create_test_row("1", Some("Finland"), Some("Melodic Death Metal")),
            create_test_row("2", Some("Finland"), None),
            create_test_row("3", Some("Finland"), Some("Avant-garde")),
        ];

        let cleaned = BandCleaner::clean(rows);
        assert!(cleaned
            .records
            .iter()
            .all(|r| r.category != GenreCategory::Unknown));
    }

    #[test]
    fn test_compound_genre_detection() {
        let clean = |genre: Option<&str>| {
            BandCleaner::clean_row(create_test_row("1", Some("Sweden"), genre)).unwrap()
        };
        let compound = clean(Some("Death Metal/Grindcore"));
        let single = clean(Some(" Death Metal "));
        let missing = clean(None);

        assert!(compound.is_compound_genre());
        assert!(!single.is_compound_genre());
        assert!(!missing.is_compound_genre());
    }

    #[test]
    fn test_unclassified_genres_ranked_by_count() {
        let rows = vec![
            create_test_row("1", Some("France"), Some("Avant-garde")),
            create_test_row("2", Some("France"), Some("Drone/Ambient")),
            create_test_row("3", Some("France"), Some("Drone")),
            create_test_row("4", Some("France"), Some("Black Metal")),
            create_test_row("5", Some("France"), None),
        ];

        let cleaned = BandCleaner::clean(rows);
        let unclassified = BandCleaner::unclassified_genres(&cleaned.records);
        assert_eq!(
            unclassified,
            vec![
                ("Drone".to_string(), 2),
                ("Avant-garde".to_string(), 1),
                ("Unknown".to_string(), 1),
            ]
        );
    }
}
