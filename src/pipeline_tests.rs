// End-to-end runs of the pipeline over mocked and on-disk inputs

use crate::analysis::AnalysisPipeline;
use crate::config::{Config, DEFAULT_BANDS_PATH, DEFAULT_OUTPUT_PATH};
use crate::error::SourceError;
use crate::export::DashboardExporter;
use crate::models::{ArtistPopularity, BandRow, DiscographyRow, GenreCategory};
use crate::source::{CsvDataSource, DataSource, MockDataSource};

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::{Path, PathBuf};

    fn band_row(id: &str, country: Option<&str>, genre: &str, status: &str) -> BandRow {
        BandRow {
            band_id: id.to_string(),
            country: country.map(|c| c.to_string()),
            genre: Some(genre.to_string()),
            status: Some(status.to_string()),
        }
    }

    fn mock_source() -> MockDataSource {
        let mut source = MockDataSource::new();
        source.expect_load_bands().times(1).returning(|| {
            Ok(vec![
                band_row("1", Some("Sweden"), "Melodic Death Metal", "Active"),
                band_row("2", Some(" Sweden "), "Black Metal", "Split-up"),
                band_row("3", None, "Thrash Metal", "Active"),
                band_row("4", Some("Brazil"), "Thrash Metal/Death Metal", "Active"),
            ])
        });
        source.expect_load_discography().times(1).returning(|| {
            Ok(vec![
                DiscographyRow {
                    band_id: "1".to_string(),
                    year: Some("1995".to_string()),
                },
                DiscographyRow {
                    band_id: "2".to_string(),
                    year: Some("unknown".to_string()),
                },
                DiscographyRow {
                    band_id: "4".to_string(),
                    year: Some("1986".to_string()),
                },
            ])
        });
        source.expect_load_popularity().times(1).returning(|| {
            Ok(vec![ArtistPopularity {
                artist: "Sepultura".to_string(),
                genre: "Thrash".to_string(),
                subgenre: "Groove Thrash".to_string(),
                popularity: 45.0,
                monthly_listeners: 2_000_000,
            }])
        });
        source
    }

    fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_pipeline_over_mocked_source() {
        let source = mock_source();
        let results = AnalysisPipeline::new(&source).run().unwrap();

        assert_eq!(results.raw_band_count, 4);
        assert_eq!(results.bands.len(), 3);
        assert_eq!(results.discography_count, 3);

        assert_eq!(results.countries[0].country, "Sweden");
        assert_eq!(results.countries[0].band_count, 2);
        assert_eq!(results.countries[1].country, "Brazil");
        assert_eq!(results.countries[1].dominant_genre, GenreCategory::ThrashMetal);

        let decades: Vec<i32> = results.evolution.iter().map(|d| d.decade).collect();
        assert_eq!(decades, vec![1980, 1990]);

        assert_eq!(results.spotify.tier_stats[0].avg_listeners, 2_000_000);

        let dashboard = DashboardExporter::build(&results);
        assert_eq!(dashboard.summary.total_bands, results.bands.len());
    }

    #[test]
    fn test_pipeline_aborts_when_an_input_is_unreadable() {
        let mut source = MockDataSource::new();
        source.expect_load_bands().returning(|| {
            Err(SourceError::Open {
                path: PathBuf::from("missing.csv"),
                source: csv::Error::from(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "not found",
                )),
            })
        });
        source.expect_load_discography().never();
        source.expect_load_popularity().never();

        let err = AnalysisPipeline::new(&source).run().unwrap_err();
        assert!(format!("{err:#}").contains("missing.csv"));
    }

    #[test]
    fn test_csv_source_trims_headers_and_ignores_extra_columns() {
        let dir = tempfile::tempdir().unwrap();
        let bands = write_file(
            dir.path(),
            "bands.csv",
            "Band ID, Band Name ,Country , Genre,Status\n\
             1,Bathory,Sweden,Black Metal/Viking Metal,Split-up\n\
             2,Nameless,,Death Metal,Active\n\
             3,Sepultura,  Brazil ,Thrash Metal,Active\n",
        );
        let discography = write_file(
            dir.path(),
            "discography.csv",
            "Band ID,Album,Year\n1,Blood Fire Death,1988\n3,Arise,1991\n3,Demo,unknown\n",
        );
        let spotify = write_file(
            dir.path(),
            "spotify.csv",
            "Artist,Genre,Subgenre,Popularity,Monthly_Listeners\nSepultura,Thrash,Groove Thrash,61,2500000\n",
        );

        let config = Config::default().with_overrides(
            Some(bands),
            Some(discography),
            Some(spotify),
            Some(dir.path().join("out.json")),
        );
        let source = CsvDataSource::new(&config);

        let rows = source.load_bands().unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].genre.as_deref(), Some("Black Metal/Viking Metal"));
        assert_eq!(rows[1].country, None);

        let results = AnalysisPipeline::new(&source).run().unwrap();
        assert_eq!(results.bands.len(), 2);
        assert_eq!(results.bands[1].country, "Brazil");
        assert_eq!(results.bands[0].primary_genre, "Black Metal");
        assert_eq!(results.evolution.len(), 2);

        let dashboard = DashboardExporter::build(&results);
        DashboardExporter::write(&dashboard, &config.output_path).unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&config.output_path).unwrap()).unwrap();
        assert_eq!(json["summary"]["total_bands"], results.bands.len());
    }

    #[test]
    fn test_csv_source_missing_file_is_an_open_error() {
        let config = Config::default().with_overrides(
            Some(PathBuf::from("/nonexistent/metal_bands.csv")),
            None,
            None,
            None,
        );
        let source = CsvDataSource::new(&config);

        match source.load_bands() {
            Err(SourceError::Open { path, .. }) => {
                assert_eq!(path, PathBuf::from("/nonexistent/metal_bands.csv"))
            }
            other => panic!("expected an open error, got {other:?}"),
        }
    }

    #[test]
    fn test_csv_source_skips_malformed_popularity_rows() {
        let dir = tempfile::tempdir().unwrap();
        let bands = write_file(
            dir.path(),
            "bands.csv",
            "Band ID,Country,Genre,Status\n1,Brazil,Thrash Metal,Active\n",
        );
        let discography = write_file(dir.path(), "discography.csv", "Band ID,Year\n1,1986\n");
        let spotify = write_file(
            dir.path(),
            "spotify.csv",
            "Artist,Genre,Subgenre,Popularity,Monthly_Listeners\n\
             A,Thrash,X,61,2500000.0\n\
             B,Death,Y,,100\n\
             C,Death,Z,high,10\n\
             D,Doom,W,40,-5\n",
        );

        let rows = CsvDataSource::read_table::<ArtistPopularity>(&spotify).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].artist, "A");
        assert_eq!(rows[0].monthly_listeners, 2_500_000);

        let config =
            Config::default().with_overrides(Some(bands), Some(discography), Some(spotify), None);
        let source = CsvDataSource::new(&config);
        let results = AnalysisPipeline::new(&source).run().unwrap();
        assert_eq!(results.spotify.total_artists, 1);
        assert_eq!(results.spotify.top_artists[0].artist, "A");
    }

    #[test]
    fn test_source_error_message_names_the_record_once() {
        let data = "Artist,Genre,Subgenre,Popularity,Monthly_Listeners\nA,B,C,high,10\n";
        let mut reader = csv::Reader::from_reader(data.as_bytes());
        let source = reader.deserialize::<ArtistPopularity>().next().unwrap().unwrap_err();
        let cause = source.to_string();
        let err = SourceError::Row {
            path: PathBuf::from("spotify.csv"),
            record: 1,
            source,
        };

        assert_eq!(err.to_string(), "malformed record 1 in spotify.csv");
        let chained = format!("{:#}", anyhow::Error::new(err));
        assert_eq!(chained.matches(&cause).count(), 1);
    }

    #[test]
    fn test_config_defaults_and_overrides() {
        let config = Config::default();
        assert_eq!(config.bands_path, PathBuf::from(DEFAULT_BANDS_PATH));
        assert_eq!(config.output_path, PathBuf::from(DEFAULT_OUTPUT_PATH));

        let overridden = config
            .clone()
            .with_overrides(None, None, None, Some(PathBuf::from("out/dash.json")));
        assert_eq!(overridden.output_path, PathBuf::from("out/dash.json"));
        assert_eq!(overridden.bands_path, config.bands_path);
        assert_eq!(overridden.inputs().len(), 3);
    }
}
