/// Flüchtiger UI-Zustand (Hover-Label, Statusmeldung)
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Anzeigename des Landes unter dem Mauszeiger (Cursor-Readout)
    pub hover_country: Option<String>,
    /// Nicht-fatale Statusmeldung (z.B. fehlgeschlagene Persistenz)
    pub status_message: Option<String>,
}

impl UiState {
    /// Erstellt einen leeren UI-Zustand.
    pub fn new() -> Self {
        Self::default()
    }
}
