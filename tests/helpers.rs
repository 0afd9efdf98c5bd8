// Shared test helpers for writing input documents and gazetteers.

use std::path::{Path, PathBuf};

/// Header of the offline gazetteer CSV.
pub const GAZETTEER_HEADER: &str = "lat,lon,name,admin1,admin2,cc";

/// Wraps Placemark markup in a KML document and writes it to `dir`.
#[allow(dead_code)] // Used by other test files
pub fn write_kml(dir: &Path, name: &str, placemarks: &str) -> PathBuf {
    let path = dir.join(name);
    let body = format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<kml xmlns="http://www.opengis.net/kml/2.2" xmlns:gx="http://www.google.com/kml/ext/2.2">
  <Document>
    {placemarks}
  </Document>
</kml>
"#
    );
    std::fs::write(&path, body).expect("Failed to write KML");
    path
}

/// Writes a small French gazetteer (Paris, Lyon, Marseille) to `dir`.
#[allow(dead_code)] // Used by other test files
pub fn write_gazetteer(dir: &Path) -> PathBuf {
    let path = dir.join("cities.csv");
    let rows = [
        GAZETTEER_HEADER,
        "48.85341,2.3488,Paris,Île-de-France,Paris,FR",
        "45.74846,4.84671,Lyon,Auvergne-Rhône-Alpes,Rhône,FR",
        "43.29695,5.38107,Marseille,Provence-Alpes-Côte d'Azur,Bouches-du-Rhône,FR",
    ];
    std::fs::write(&path, rows.join("\n") + "\n").expect("Failed to write gazetteer");
    path
}

/// One labelless Placemark whose three vertices are in Paris, Paris, Lyon.
#[allow(dead_code)] // Used by other test files
pub const PARIS_PARIS_LYON: &str = r#"<Placemark>
  <LineString>
    <coordinates>
      2.3522,48.8566,0 2.3600,48.8600,0 4.8357,45.7640,0
    </coordinates>
  </LineString>
</Placemark>"#;
