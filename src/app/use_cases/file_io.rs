//! Use-Case-Funktionen für Laden und Persistenz.
//! Alle Dateisystem-Operationen (I/O) sind hier zentralisiert.

use crate::app::AppState;
use crate::core::{locate_by_ids, CountryRecord, LandEdit, LandLayer};
use anyhow::Context;
use std::path::Path;
use std::sync::Arc;

/// Lädt Katalog und Besucht-Liste und baut den initialen Land-Layer.
///
/// Eine unlesbare Geometrie-Quelle ist fatal (statischer Datensatz, ein
/// Retry hilft nicht) und wird an den Aufrufer durchgereicht. Eine
/// fehlende Besucht-Liste ist kein Fehler: die Session startet leer.
/// Persistierte Kennungen ohne Katalog-Eintrag werden beim Auflösen
/// stillschweigend übergangen.
pub fn reload_dataset(state: &mut AppState) -> anyhow::Result<()> {
    let countries_file = state.options.countries_file.clone();
    let catalog = crate::geodata::load_country_catalog(Path::new(&countries_file))
        .with_context(|| format!("Länder-Katalog {countries_file} konnte nicht geladen werden"))?;
    log::info!(
        "Katalog geladen: {} Länder aus {}",
        catalog.len(),
        countries_file
    );

    let visited_file = state.options.visited_file.clone();
    let visited = match std::fs::read_to_string(&visited_file) {
        Ok(text) => crate::listfile::parse_visited_list(&text),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            log::info!("Keine Besucht-Liste unter {visited_file}, starte leer");
            Vec::new()
        }
        Err(e) => {
            log::warn!("Besucht-Liste {visited_file} nicht lesbar ({e}), starte leer");
            Vec::new()
        }
    };
    state.selection.restore(visited);

    // Initiale Carve: persistierte Auswahl vor dem ersten Rendern aus dem
    // vollen Land herausschneiden
    let initial: Vec<&CountryRecord> = locate_by_ids(&catalog, state.selection.ids()).collect();
    if initial.len() < state.selection.len() {
        log::warn!(
            "{} persistierte Kennungen ohne Katalog-Eintrag werden ignoriert",
            state.selection.len() - initial.len()
        );
    }
    let land = LandLayer::from_catalog(&catalog).recompute(&initial, LandEdit::Carve);
    log::info!(
        "Land-Layer aufgebaut: {} Einträge, {} besuchte Länder ausgespart",
        land.len(),
        initial.len()
    );
    state.land = Arc::new(land);
    super::camera::center_on_catalog(state, &catalog);
    state.catalog = Some(Arc::new(catalog));
    Ok(())
}

/// Schreibt die Besucht-Liste vollständig neu (Overwrite, kein Append).
///
/// Ein Schreibfehler ist nicht fatal: die In-Memory-Auswahl bleibt für
/// den Rest der Session maßgeblich, der Fehler landet als Warnung im Log
/// und in der Status-Leiste.
pub fn persist_visited(state: &mut AppState) {
    let content = crate::listfile::format_visited_list(state.selection.snapshot());
    let visited_file = state.options.visited_file.clone();

    match std::fs::write(&visited_file, content) {
        Ok(()) => {
            log::debug!(
                "Besucht-Liste geschrieben: {} Einträge nach {}",
                state.selection.len(),
                visited_file
            );
            state.ui.status_message = None;
        }
        Err(e) => {
            log::warn!("Besucht-Liste konnte nicht nach {visited_file} geschrieben werden: {e}");
            state.ui.status_message = Some(format!("Speichern fehlgeschlagen: {e}"));
        }
    }
}
