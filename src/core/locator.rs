//! Punkt- und ID-Auflösung gegen den Länder-Katalog.

use super::{CountryCatalog, CountryRecord};
use geo::Point;
use indexmap::IndexSet;

/// Findet das erste Land (in Katalog-Reihenfolge), dessen Geometrie den
/// Punkt trifft.
///
/// Kein Treffer (z.B. Ozean-Klick) ist kein Fehler, sondern `None`.
pub fn locate_by_point(catalog: &CountryCatalog, x: f64, y: f64) -> Option<&CountryRecord> {
    let point = Point::new(x, y);
    catalog.iter().find(|country| country.hit_test(point))
}

/// Filtert den Katalog lazy auf die Datensätze, deren `id` in `ids` enthalten ist.
///
/// Unbekannte (veraltete) IDs aus der Persistenz werden stillschweigend
/// übersprungen. Der Katalog wird dabei weder mutiert noch erschöpft.
pub fn locate_by_ids<'a>(
    catalog: &'a CountryCatalog,
    ids: &'a IndexSet<String>,
) -> impl Iterator<Item = &'a CountryRecord> + 'a {
    catalog.iter().filter(|country| ids.contains(&country.id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CountryRecord;
    use geo::{polygon, MultiPolygon};

    fn square(x0: f64, y0: f64, size: f64) -> MultiPolygon<f64> {
        MultiPolygon(vec![polygon![
            (x: x0, y: y0),
            (x: x0 + size, y: y0),
            (x: x0 + size, y: y0 + size),
            (x: x0, y: y0 + size),
        ]])
    }

    fn catalog() -> CountryCatalog {
        CountryCatalog::from_records(vec![
            CountryRecord::new("AAA", "Alpha", square(0.0, 0.0, 10.0)),
            CountryRecord::new("BBB", "Beta", square(10.0, 0.0, 10.0)),
            // Überlappt AAA absichtlich, steht aber später im Katalog
            CountryRecord::new("CCC", "Gamma", square(5.0, 0.0, 10.0)),
        ])
        .unwrap()
    }

    #[test]
    fn test_locate_by_point_returns_first_match_in_catalog_order() {
        let catalog = catalog();
        // (7, 5) liegt in AAA und CCC — AAA kommt zuerst
        let hit = locate_by_point(&catalog, 7.0, 5.0).expect("Treffer erwartet");
        assert_eq!(hit.id, "AAA");
    }

    #[test]
    fn test_locate_by_point_none_for_open_water() {
        let catalog = catalog();
        assert!(locate_by_point(&catalog, -50.0, -50.0).is_none());
    }

    #[test]
    fn test_locate_by_point_does_not_exhaust_catalog() {
        let catalog = catalog();
        assert!(locate_by_point(&catalog, 12.0, 5.0).is_some());
        // Wiederholte Anfragen sehen weiterhin alle Datensätze
        assert!(locate_by_point(&catalog, 2.0, 5.0).is_some());
        assert_eq!(catalog.iter().count(), 3);
    }

    #[test]
    fn test_locate_by_ids_drops_stale_entries() {
        let catalog = catalog();
        let ids: IndexSet<String> = ["BBB".to_string(), "XXX".to_string()]
            .into_iter()
            .collect();
        let resolved: Vec<&str> = locate_by_ids(&catalog, &ids)
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(resolved, vec!["BBB"]);
    }

    #[test]
    fn test_locate_by_ids_preserves_catalog_order() {
        let catalog = catalog();
        // Reihenfolge in der Menge ist CCC vor AAA — Ergebnis folgt dem Katalog
        let ids: IndexSet<String> = ["CCC".to_string(), "AAA".to_string()]
            .into_iter()
            .collect();
        let resolved: Vec<&str> = locate_by_ids(&catalog, &ids)
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(resolved, vec!["AAA", "CCC"]);
    }
}
