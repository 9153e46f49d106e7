use std::path::PathBuf;

pub const DEFAULT_BANDS_PATH: &str = "data/metal_bands.csv";
pub const DEFAULT_DISCOGRAPHY_PATH: &str = "data/all_bands_discography.csv";
pub const DEFAULT_SPOTIFY_PATH: &str = "data/heavy_bands_spotify.csv";
pub const DEFAULT_OUTPUT_PATH: &str = "dashboard_data.json";

/// Input and output locations for a run
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub bands_path: PathBuf,
    pub discography_path: PathBuf,
    pub spotify_path: PathBuf,
    pub output_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bands_path: PathBuf::from(DEFAULT_BANDS_PATH),
            discography_path: PathBuf::from(DEFAULT_DISCOGRAPHY_PATH),
            spotify_path: PathBuf::from(DEFAULT_SPOTIFY_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

impl Config {
    /// Replace any path given explicitly on the command line
    pub fn with_overrides(
        mut self,
        bands: Option<PathBuf>,
        discography: Option<PathBuf>,
        spotify: Option<PathBuf>,
        output: Option<PathBuf>,
    ) -> Self {
        if let Some(path) = bands {
            self.bands_path = path;
        }
        if let Some(path) = discography {
            self.discography_path = path;
        }
        if let Some(path) = spotify {
            self.spotify_path = path;
        }
        if let Some(path) = output {
            self.output_path = path;
        }
        self
    }

    /// All input files, labelled for error messages
    pub fn inputs(&self) -> [(&'static str, &PathBuf); 3] {
        [
            ("bands", &self.bands_path),
            ("discography", &self.discography_path),
            ("spotify", &self.spotify_path),
        ]
    }
}

/// Load configuration from `.env` and environment, falling back to the
/// fixed default paths
pub fn load_config() -> Config {
    // Load `.env` file if present
    dotenv::dotenv().ok();
    Config {
        bands_path: env_path("METAL_BANDS_CSV", DEFAULT_BANDS_PATH),
        discography_path: env_path("METAL_DISCOGRAPHY_CSV", DEFAULT_DISCOGRAPHY_PATH),
        spotify_path: env_path("METAL_SPOTIFY_CSV", DEFAULT_SPOTIFY_PATH),
        output_path: env_path("DASHBOARD_OUTPUT", DEFAULT_OUTPUT_PATH),
    }
}

fn env_path(key: &str, default: &str) -> PathBuf {
    std::env::var_os(key)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(default))
}
