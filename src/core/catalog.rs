//! Der statische Länder-Katalog: einmal geladen, beliebig oft unabhängig iterierbar.

use super::{CountryRecord, MapExtent};
use geo::BoundingRect;
use std::collections::HashMap;

/// Doppelte Länder-Kennung beim Katalog-Aufbau.
#[derive(Debug, thiserror::Error)]
#[error("Doppelte Länder-Kennung im Katalog: {id}")]
pub struct DuplicateIdError {
    /// Die mehrfach vorkommende Kennung
    pub id: String,
}

/// Geordnete, unveränderliche Sammlung aller Länder-Datensätze.
///
/// Invariante: jede `id` kommt genau einmal vor (beim Aufbau geprüft).
/// Jeder Konsument iteriert mit eigenem Cursor über dieselben Daten;
/// es gibt keinen geteilten Iterationszustand und keine Mutations-API.
#[derive(Debug, Clone, Default)]
pub struct CountryCatalog {
    records: Vec<CountryRecord>,
    index_by_id: HashMap<String, usize>,
}

impl CountryCatalog {
    /// Baut den Katalog aus den geladenen Datensätzen auf.
    /// Schlägt fehl wenn eine `id` mehrfach vorkommt.
    pub fn from_records(records: Vec<CountryRecord>) -> Result<Self, DuplicateIdError> {
        let mut index_by_id = HashMap::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            if index_by_id.insert(record.id.clone(), index).is_some() {
                return Err(DuplicateIdError {
                    id: record.id.clone(),
                });
            }
        }
        Ok(Self {
            records,
            index_by_id,
        })
    }

    /// Frischer, unabhängiger Durchlauf über alle Datensätze in Katalog-Reihenfolge.
    ///
    /// Jeder Aufruf liefert einen eigenen Cursor; der Katalog selbst wird
    /// weder mutiert noch erschöpft.
    pub fn iter(&self) -> impl Iterator<Item = &CountryRecord> + '_ {
        self.records.iter()
    }

    /// Findet einen Datensatz über seine Kennung — O(1).
    pub fn get(&self, id: &str) -> Option<&CountryRecord> {
        self.index_by_id.get(id).map(|&index| &self.records[index])
    }

    /// Gibt die Anzahl der Länder zurück.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Gibt `true` zurück, wenn der Katalog leer ist.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Bounding Box über alle Landesgeometrien (None bei leerem Katalog).
    pub fn bounds(&self) -> Option<MapExtent> {
        let mut merged: Option<MapExtent> = None;
        for record in &self.records {
            let Some(rect) = record.geometry.bounding_rect() else {
                continue;
            };
            let extent = MapExtent {
                x_min: rect.min().x,
                x_max: rect.max().x,
                y_min: rect.min().y,
                y_max: rect.max().y,
            };
            merged = Some(match merged {
                Some(m) => m.union(&extent),
                None => extent,
            });
        }
        merged
    }
}
