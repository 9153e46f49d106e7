use crate::analysis::utils::percentage;
use crate::analysis::{AnalysisResults, ACTIVE_STATUS};
use crate::export::DashboardData;

const SECTION_WIDTH: usize = 40;

/// Console tables printed while the pipeline runs
pub struct ConsoleReport;

impl ConsoleReport {
    fn section(title: &str) {
        println!();
        println!("{}", "-".repeat(SECTION_WIDTH));
        println!("{title}");
        println!("{}", "-".repeat(SECTION_WIDTH));
    }

    pub fn print_analysis(results: &AnalysisResults) {
        println!(
            "Bands: {} raw, {} with a country | Discography: {} album entries",
            results.raw_band_count,
            results.bands.len(),
            results.discography_count
        );

        Self::section("TOP 15 COUNTRIES BY METAL BANDS");
        println!("{:<24} {:>10} {:<18} {:>10}", "Country", "Bands", "Dominant Genre", "Share");
        for country in results.countries.iter().take(15) {
            println!(
                "{:<24} {:>10} {:<18} {:>9.2}%",
                country.country,
                country.band_count,
                country.dominant_genre.as_str(),
                country.percentage
            );
        }

        Self::section("GENRE PREFERENCES BY REGION");
        for region in &results.regions {
            let distribution: Vec<String> = region
                .genre_distribution
                .iter()
                .map(|(genre, count)| format!("{genre} ({count})"))
                .collect();
            println!(
                "{:<16} {:>8} bands | top: {} ({:.1}%)",
                region.region, region.total_bands, region.top_genre, region.top_genre_pct
            );
            println!("   {}", distribution.join(", "));
        }

        Self::section("GLOBAL GENRE DISTRIBUTION");
        let total = results.bands.len();
        for genre in &results.genres {
            println!(
                "{:20} {:>8} ({:>5.1}%)",
                genre.genre.as_str(),
                genre.count,
                percentage(genre.count, total)
            );
        }

        Self::section("BAND STATUS (Top 10 Countries)");
        println!("Statuses seen: {}", results.statuses.statuses.join(", "));
        println!("{:<24} {:>8} {:>9} {:>12}", "Country", "Active", "Split-up", "Active_Rate");
        for row in results.statuses.rows.iter().take(10) {
            let rate = row
                .active_rate
                .map(|r| format!("{r:.1}"))
                .unwrap_or_else(|| "-".to_string());
            println!(
                "{:<24} {:>8} {:>9} {:>12}",
                row.country,
                row.count(ACTIVE_STATUS),
                row.count("Split-up"),
                rate
            );
        }

        Self::section("GENRE EVOLUTION BY DECADE");
        for decade in &results.evolution {
            let mut shares: Vec<_> = decade.shares.iter().collect();
            shares.sort_by(|a, b| b.1.total_cmp(a.1));
            let top: Vec<String> = shares
                .iter()
                .take(3)
                .map(|(genre, pct)| format!("{genre} {pct:.1}%"))
                .collect();
            println!("{}s ({} releases): {}", decade.decade, decade.releases, top.join(", "));
        }

        Self::section("SPOTIFY POPULARITY ANALYSIS");
        println!("TOP 10 MOST POPULAR METAL ARTISTS:");
        for (i, artist) in results.spotify.top_artists.iter().take(10).enumerate() {
            println!(
                "{:2}. {:30} Popularity: {:.0}",
                i + 1,
                artist.artist,
                artist.popularity
            );
        }
    }

    pub fn print_summary(data: &DashboardData) {
        let summary = &data.summary;
        println!();
        println!("{}", "=".repeat(60));
        println!("Analysis complete!");
        println!(
            "Summary: {} bands across {} countries in {} genre categories",
            summary.total_bands, summary.total_countries, summary.total_genres
        );
        println!(
            "Top country: {} | Top genre: {}",
            summary.top_country.as_deref().unwrap_or("n/a"),
            summary.top_genre
        );
        println!(
            "Spotify: {} artists, {} tracks",
            data.spotify.total_artists, data.spotify.total_tracks
        );
        println!("{}", "=".repeat(60));
    }
}
