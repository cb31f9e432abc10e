//! Core-Domänentypen: Länder-Katalog, Locator, Land-Layer, Kamera.

pub mod camera;
/// Katalog und Datensätze
///
/// Dieses Modul definiert die Haupt-Datenstrukturen:
/// - CountryCatalog: geordnete, unveränderliche Sammlung aller Länder
/// - CountryRecord: einzelnes Land mit Kennung, Name und Geometrie
/// - LandLayer: abgeleitete Polygon-Menge des unmarkierten Landes
pub mod catalog;
pub mod country;
pub mod land;
pub mod locator;

pub use camera::{Camera2D, MapExtent};
pub use catalog::{CountryCatalog, DuplicateIdError};
pub use country::CountryRecord;
pub use land::{LandEdit, LandLayer};
pub use locator::{locate_by_ids, locate_by_point};
