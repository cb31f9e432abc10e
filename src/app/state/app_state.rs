use crate::app::CommandLog;
use crate::core::{CountryCatalog, LandLayer};
use crate::shared::MapOptions;
use std::sync::Arc;

use super::{SelectionState, UiState, ViewState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Geladener Länder-Katalog (None = noch nicht geladen)
    pub catalog: Option<Arc<CountryCatalog>>,
    /// Aktueller Land-Layer: Katalog minus besuchte Länder
    pub land: Arc<LandLayer>,
    /// Auswahl-State (besuchte Länder)
    pub selection: SelectionState,
    /// View-State
    pub view: ViewState,
    /// UI-State
    pub ui: UiState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Pfade, Farben, Zoom)
    pub options: MapOptions,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State
    pub fn new() -> Self {
        Self {
            catalog: None,
            land: Arc::new(LandLayer::default()),
            selection: SelectionState::new(),
            view: ViewState::new(),
            ui: UiState::new(),
            command_log: CommandLog::new(),
            options: MapOptions::default(),
            should_exit: false,
        }
    }

    /// Gibt die Anzahl der Katalog-Länder zurück (für UI-Anzeige)
    pub fn country_count(&self) -> usize {
        self.catalog.as_ref().map_or(0, |catalog| catalog.len())
    }

    /// Gibt die Anzahl der besuchten Länder zurück (für UI-Anzeige)
    pub fn visited_count(&self) -> usize {
        self.selection.len()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
