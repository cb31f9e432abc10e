//! Land-Layer: die renderbare Geometrie des aktuell unmarkierten Landes.

use super::{CountryCatalog, CountryRecord};
use geo::{Area, BooleanOps, MultiPolygon};

/// Richtung einer Land-Neuberechnung.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LandEdit {
    /// Markieren: Flächen der Delta-Länder aus dem Land herausschneiden
    Carve,
    /// Demarkieren: Roh-Geometrien der Delta-Länder als separate Polygone anhängen
    Append,
}

/// Polygon-Menge des nicht markierten Landes.
///
/// Abgeleiteter Zustand ohne eigene Identität: wird bei jeder
/// Auswahländerung neu berechnet, nie persistiert.
#[derive(Debug, Clone, Default)]
pub struct LandLayer {
    polygons: Vec<MultiPolygon<f64>>,
}

impl LandLayer {
    /// Erstellt einen Land-Layer aus einer Polygon-Menge.
    pub fn new(polygons: Vec<MultiPolygon<f64>>) -> Self {
        Self { polygons }
    }

    /// Volles Land: ein Eintrag pro Katalog-Land.
    pub fn from_catalog(catalog: &CountryCatalog) -> Self {
        Self {
            polygons: catalog.iter().map(|c| c.geometry.clone()).collect(),
        }
    }

    /// Berechnet einen neuen Land-Layer aus dem aktuellen Stand und den
    /// Delta-Ländern. Reine Funktion: `self` bleibt unverändert, ein leeres
    /// Delta liefert eine unveränderte Kopie.
    ///
    /// `Carve` subtrahiert jede Delta-Geometrie aus jedem Land-Polygon
    /// (geometrische Differenz statt Löschen ganzer Einträge — ein
    /// Land-Polygon kann eine Landmasse über mehrere Länder abdecken).
    /// Vollständig geleerte Einträge entfallen.
    ///
    /// `Append` hängt die Roh-Geometrien als eigenständige Polygone an,
    /// ohne sie mit Nachbar-Polygonen zu verschmelzen. Die Asymmetrie zu
    /// `Carve` ist beabsichtigt: ein Verschmelzen müsste die komplette
    /// Katalog-Geometrie der betroffenen Landmasse erneut herleiten.
    pub fn recompute(&self, delta: &[&CountryRecord], mode: LandEdit) -> LandLayer {
        if delta.is_empty() {
            return self.clone();
        }

        match mode {
            LandEdit::Carve => {
                let polygons = self
                    .polygons
                    .iter()
                    .map(|land| {
                        let mut remaining = land.clone();
                        for country in delta {
                            remaining = remaining.difference(&country.geometry);
                        }
                        remaining
                    })
                    .filter(|multi| !multi.0.is_empty())
                    .collect();
                LandLayer { polygons }
            }
            LandEdit::Append => {
                let mut polygons = self.polygons.clone();
                polygons.extend(delta.iter().map(|country| country.geometry.clone()));
                LandLayer { polygons }
            }
        }
    }

    /// Read-only Sicht auf die Polygon-Menge.
    pub fn polygons(&self) -> &[MultiPolygon<f64>] {
        &self.polygons
    }

    /// Gibt die Anzahl der Einträge zurück.
    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    /// Gibt `true` zurück, wenn kein Land übrig ist.
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    /// Summe der vorzeichenlosen Flächen aller Einträge.
    pub fn total_area(&self) -> f64 {
        self.polygons
            .iter()
            .map(|multi| multi.unsigned_area())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CountryRecord;
    use approx::assert_relative_eq;
    use geo::{polygon, MultiPolygon};

    fn square(x0: f64, y0: f64, size: f64) -> MultiPolygon<f64> {
        MultiPolygon(vec![polygon![
            (x: x0, y: y0),
            (x: x0 + size, y: y0),
            (x: x0 + size, y: y0 + size),
            (x: x0, y: y0 + size),
        ]])
    }

    fn country(id: &str, geometry: MultiPolygon<f64>) -> CountryRecord {
        CountryRecord::new(id, format!("Land {id}"), geometry)
    }

    #[test]
    fn test_recompute_empty_delta_returns_unchanged_copy() {
        let land = LandLayer::new(vec![square(0.0, 0.0, 10.0)]);
        let next = land.recompute(&[], LandEdit::Carve);
        assert_eq!(next.len(), 1);
        assert_relative_eq!(next.total_area(), land.total_area());
    }

    #[test]
    fn test_carve_subtracts_locally_not_whole_polygon() {
        // Eine Landmasse (20x10) umfasst zwei Länder — Carve eines Landes
        // darf nur dessen Hälfte entfernen
        let land = LandLayer::new(vec![square(0.0, 0.0, 10.0).union(&square(10.0, 0.0, 10.0))]);
        let west = country("WST", square(0.0, 0.0, 10.0));

        let next = land.recompute(&[&west], LandEdit::Carve);

        assert_eq!(next.len(), 1);
        assert_relative_eq!(next.total_area(), 100.0, max_relative = 1e-9);
    }

    #[test]
    fn test_carve_drops_fully_emptied_entries() {
        let land = LandLayer::new(vec![square(0.0, 0.0, 10.0), square(30.0, 0.0, 10.0)]);
        let whole = country("WHL", square(0.0, 0.0, 10.0));

        let next = land.recompute(&[&whole], LandEdit::Carve);

        assert_eq!(next.len(), 1);
        assert_relative_eq!(next.total_area(), 100.0, max_relative = 1e-9);
    }

    #[test]
    fn test_carve_with_multiple_delta_countries() {
        let land = LandLayer::new(vec![square(0.0, 0.0, 30.0)]);
        let a = country("AAA", square(0.0, 0.0, 10.0));
        let b = country("BBB", square(20.0, 20.0, 10.0));

        let next = land.recompute(&[&a, &b], LandEdit::Carve);

        assert_relative_eq!(next.total_area(), 700.0, max_relative = 1e-9);
    }

    #[test]
    fn test_append_adds_separate_polygons_without_fusing() {
        let land = LandLayer::new(vec![square(10.0, 0.0, 10.0)]);
        let west = country("WST", square(0.0, 0.0, 10.0));

        let next = land.recompute(&[&west], LandEdit::Append);

        // Zwei getrennte Einträge, auch wenn die Flächen aneinandergrenzen
        assert_eq!(next.len(), 2);
        assert_relative_eq!(next.total_area(), 200.0, max_relative = 1e-9);
    }

    #[test]
    fn test_carve_then_append_round_trips_total_area() {
        let land = LandLayer::new(vec![
            square(0.0, 0.0, 10.0).union(&square(10.0, 0.0, 10.0)),
            square(40.0, 0.0, 5.0),
        ]);
        let before = land.total_area();
        let target = country("TGT", square(10.0, 0.0, 10.0));

        let carved = land.recompute(&[&target], LandEdit::Carve);
        assert!(carved.total_area() < before);

        let restored = carved.recompute(&[&target], LandEdit::Append);
        // Flächen-Roundtrip innerhalb Float-Toleranz; die Topologie darf
        // abweichen (Append verschmilzt nicht)
        assert_relative_eq!(restored.total_area(), before, max_relative = 1e-9);
    }

    #[test]
    fn test_recompute_is_pure() {
        let land = LandLayer::new(vec![square(0.0, 0.0, 10.0)]);
        let target = country("TGT", square(0.0, 0.0, 5.0));

        let _ = land.recompute(&[&target], LandEdit::Carve);

        assert_eq!(land.len(), 1);
        assert_relative_eq!(land.total_area(), 100.0);
    }
}
