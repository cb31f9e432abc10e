//! Laden des Länder-Katalogs aus einer GeoJSON-Quelle (Natural-Earth-Stil).

use crate::core::{CountryCatalog, CountryRecord, DuplicateIdError};
use geo::MultiPolygon;
use geojson::GeoJson;
use std::path::Path;

/// Attribut-Schlüssel für die Länder-Kennung (erster Treffer gewinnt).
const ID_KEYS: [&str; 2] = ["BRK_A3", "ISO_A3"];
/// Attribut-Schlüssel für den Anzeigenamen.
const NAME_KEYS: [&str; 3] = ["NAME_LONG", "ADMIN", "NAME"];

/// Fehler beim Laden der Geometrie-Quelle.
///
/// Am Session-Start fatal: der Datensatz ist statisch, eine Wiederholung
/// hilft nicht.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Datei nicht lesbar
    #[error("Geometrie-Quelle nicht lesbar: {0}")]
    Io(#[from] std::io::Error),
    /// GeoJSON nicht parsebar oder Geometrie nicht konvertierbar
    #[error("GeoJSON fehlerhaft: {0}")]
    Json(#[from] geojson::Error),
    /// Wurzel-Element ist keine FeatureCollection
    #[error("GeoJSON enthält keine FeatureCollection")]
    NotAFeatureCollection,
    /// Pflicht-Attribut eines Features fehlt
    #[error("Feature {index}: Pflicht-Attribut fehlt ({key})")]
    MissingAttribute {
        /// Position des Features in der Collection
        index: usize,
        /// Erster der akzeptierten Attribut-Schlüssel
        key: &'static str,
    },
    /// Geometrie fehlt oder ist kein (Multi-)Polygon
    #[error("Feature {index}: Geometrie fehlt oder ist kein (Multi-)Polygon")]
    UnsupportedGeometry {
        /// Position des Features in der Collection
        index: usize,
    },
    /// Mehrere Features mit derselben Kennung
    #[error(transparent)]
    DuplicateId(#[from] DuplicateIdError),
}

/// Lädt den Länder-Katalog aus einer GeoJSON-Datei.
pub fn load_country_catalog(path: &Path) -> Result<CountryCatalog, CatalogError> {
    let text = std::fs::read_to_string(path)?;
    parse_country_catalog(&text)
}

/// Parst eine GeoJSON-FeatureCollection zu einem Katalog.
///
/// Pro Feature: Kennung aus `BRK_A3` (Fallback `ISO_A3`), Anzeigename aus
/// `NAME_LONG` (Fallbacks `ADMIN`, `NAME`), Geometrie Polygon oder
/// MultiPolygon. Alles andere ist ein Ladefehler.
pub fn parse_country_catalog(text: &str) -> Result<CountryCatalog, CatalogError> {
    let geojson: GeoJson = text.parse()?;
    let GeoJson::FeatureCollection(collection) = geojson else {
        return Err(CatalogError::NotAFeatureCollection);
    };

    let mut records = Vec::with_capacity(collection.features.len());
    for (index, feature) in collection.features.into_iter().enumerate() {
        let id = string_property(&feature, &ID_KEYS).ok_or(CatalogError::MissingAttribute {
            index,
            key: ID_KEYS[0],
        })?;
        let display_name =
            string_property(&feature, &NAME_KEYS).ok_or(CatalogError::MissingAttribute {
                index,
                key: NAME_KEYS[0],
            })?;

        let geometry = feature
            .geometry
            .ok_or(CatalogError::UnsupportedGeometry { index })?;
        let geometry: geo::Geometry<f64> = geometry.value.try_into()?;
        let multi = match geometry {
            geo::Geometry::Polygon(polygon) => MultiPolygon(vec![polygon]),
            geo::Geometry::MultiPolygon(multi) => multi,
            _ => return Err(CatalogError::UnsupportedGeometry { index }),
        };

        records.push(CountryRecord::new(id, display_name, multi));
    }

    Ok(CountryCatalog::from_records(records)?)
}

/// Liest das erste vorhandene String-Property aus der Schlüssel-Liste.
fn string_property(feature: &geojson::Feature, keys: &[&str]) -> Option<String> {
    let properties = feature.properties.as_ref()?;
    keys.iter().find_map(|key| {
        properties
            .get(*key)
            .and_then(|value| value.as_str())
            .map(str::to_string)
    })
}
