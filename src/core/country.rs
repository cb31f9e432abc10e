//! Länder-Datensatz aus der Geometrie-Quelle.

use geo::{Intersects, MultiPolygon, Point};

/// Unveränderlicher Datensatz eines Landes.
///
/// Wird einmal beim Katalog-Laden erzeugt und danach nie mutiert.
#[derive(Debug, Clone)]
pub struct CountryRecord {
    /// Kurzer alphabetischer Code, kanonischer Selektions-Schlüssel
    pub id: String,
    /// Anzeigename, nur für UI-Feedback (Hover-Label)
    pub display_name: String,
    /// Umriss in geographischen Koordinaten (Lon/Lat)
    pub geometry: MultiPolygon<f64>,
}

impl CountryRecord {
    /// Erstellt einen neuen Länder-Datensatz.
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        geometry: MultiPolygon<f64>,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            geometry,
        }
    }

    /// Prüft ob der Punkt die Landesgeometrie trifft (inklusive Rand).
    pub fn hit_test(&self, point: Point<f64>) -> bool {
        self.geometry.intersects(&point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{polygon, Point};

    fn square() -> MultiPolygon<f64> {
        MultiPolygon(vec![polygon![
            (x: 0.0, y: 0.0),
            (x: 10.0, y: 0.0),
            (x: 10.0, y: 10.0),
            (x: 0.0, y: 10.0),
        ]])
    }

    #[test]
    fn test_hit_test_inside_and_outside() {
        let record = CountryRecord::new("TST", "Testland", square());
        assert!(record.hit_test(Point::new(5.0, 5.0)));
        assert!(!record.hit_test(Point::new(20.0, 5.0)));
    }

    #[test]
    fn test_hit_test_on_boundary() {
        let record = CountryRecord::new("TST", "Testland", square());
        // intersects schließt den Rand ein
        assert!(record.hit_test(Point::new(0.0, 5.0)));
    }
}
