//! Render-Szene als expliziter Übergabevertrag zwischen App und Zeichenebene.
//!
//! Lebt im shared-Modul, da `app` sie baut und `ui::map_view` sie konsumiert.

use super::options::MapOptions;
use crate::core::{CountryCatalog, LandLayer, MapExtent};
use std::sync::Arc;

/// Read-only Daten für einen Render-Frame.
///
/// Die Zeichenreihenfolge der Ebenen ist fest: Ozean-Hintergrund, dann
/// Land-Füllung, dann Grenzen und Küstenlinie obenauf.
#[derive(Clone)]
pub struct RenderScene {
    /// Sichtbarer Kartenausschnitt dieses Frames
    pub extent: MapExtent,
    /// Viewport-Größe in Pixeln [Breite, Höhe]
    pub viewport_size: [f32; 2],
    /// Aktueller Land-Layer (Arc für O(1)-Clone pro Frame)
    pub land: Arc<LandLayer>,
    /// Katalog für Grenz- und Küstenlinien (None = noch nicht geladen)
    pub catalog: Option<Arc<CountryCatalog>>,
    /// Laufzeit-Optionen für Farben und Linienstärken
    pub options: MapOptions,
}

impl RenderScene {
    /// Gibt zurück, ob ein Katalog für das Rendering vorhanden ist.
    pub fn has_catalog(&self) -> bool {
        self.catalog.is_some()
    }
}
