//! Fixed reference tables shipped with the binary

/// Country groupings used by the regional breakdown, in report order
pub const REGIONS: &[(&str, &[&str])] = &[
    (
        "Scandinavia",
        &["Sweden", "Norway", "Finland", "Denmark", "Iceland"],
    ),
    (
        "Western Europe",
        &[
            "Germany",
            "United Kingdom",
            "France",
            "Netherlands",
            "Belgium",
            "Austria",
            "Switzerland",
        ],
    ),
    ("Southern Europe", &["Italy", "Spain", "Portugal", "Greece"]),
    (
        "Eastern Europe",
        &[
            "Poland",
            "Russia",
            "Czech Republic",
            "Ukraine",
            "Hungary",
            "Romania",
        ],
    ),
    ("North America", &["United States", "Canada"]),
    (
        "South America",
        &["Brazil", "Argentina", "Chile", "Colombia", "Mexico"],
    ),
    (
        "Asia",
        &["Japan", "China", "Indonesia", "India", "Philippines"],
    ),
    ("Oceania", &["Australia", "New Zealand"]),
];

/// Approximate centroid (lat, lon) for the countries the map plots
const COUNTRY_COORDINATES: &[(&str, f64, f64)] = &[
    ("United States", 39.8, -98.5),
    ("Germany", 51.2, 10.4),
    ("Brazil", -14.2, -51.9),
    ("Italy", 41.9, 12.6),
    ("United Kingdom", 55.4, -3.4),
    ("France", 46.2, 2.2),
    ("Sweden", 60.1, 18.6),
    ("Finland", 61.9, 25.7),
    ("Russia", 61.5, 105.3),
    ("Poland", 51.9, 19.1),
    ("Spain", 40.5, -3.7),
    ("Canada", 56.1, -106.3),
    ("Netherlands", 52.1, 5.3),
    ("Australia", -25.3, 133.8),
    ("Japan", 36.2, 138.3),
    ("Argentina", -38.4, -63.6),
    ("Mexico", 23.6, -102.6),
    ("Norway", 60.5, 8.5),
    ("Greece", 39.1, 21.8),
    ("Chile", -35.7, -71.5),
    ("Austria", 47.5, 14.6),
    ("Belgium", 50.5, 4.5),
    ("Czech Republic", 49.8, 15.5),
    ("Portugal", 39.4, -8.2),
    ("Ukraine", 48.4, 31.2),
    ("Denmark", 56.3, 9.5),
    ("Switzerland", 46.8, 8.2),
    ("Colombia", 4.6, -74.3),
    ("Indonesia", -0.8, 113.9),
    ("Hungary", 47.2, 19.5),
];

/// Look up the map position of a country, if it's one we plot
pub fn coordinates(country: &str) -> Option<(f64, f64)> {
    COUNTRY_COORDINATES
        .iter()
        .find(|(name, _, _)| *name == country)
        .map(|(_, lat, lon)| (*lat, *lon))
}
