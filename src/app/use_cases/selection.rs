//! Use-Case-Funktionen für das Markieren und Demarkieren von Ländern.

use crate::app::AppState;
use crate::core::{locate_by_point, LandEdit};
use glam::DVec2;
use std::sync::Arc;

/// Markiert das Land unter `world_pos` als besucht.
///
/// Kein Treffer (z.B. Ozean-Klick) ist ein No-Op: weder Land-Layer noch
/// Auswahl noch Persistenz werden angefasst. Die Kamera bleibt in jedem
/// Fall unberührt, der Viewport-Ausschnitt überlebt das Neuzeichnen.
pub fn visit_country_at(state: &mut AppState, world_pos: DVec2) {
    let Some(catalog) = state.catalog.clone() else {
        return;
    };
    let Some(country) = locate_by_point(&catalog, world_pos.x, world_pos.y) else {
        log::debug!(
            "Klick auf ({:.2}, {:.2}) trifft kein Land",
            world_pos.x,
            world_pos.y
        );
        return;
    };

    state.land = Arc::new(state.land.recompute(&[country], LandEdit::Carve));
    state.selection.add([country.id.clone()]);
    log::info!(
        "Als besucht markiert: {} ({})",
        country.display_name,
        country.id
    );

    super::file_io::persist_visited(state);
}

/// Hebt die Besucht-Markierung des Landes unter `world_pos` auf.
///
/// Die Roh-Geometrie des Landes wird dem Land-Layer als separates Polygon
/// wieder angehängt; das Entfernen einer nicht markierten Kennung wird
/// stillschweigend ignoriert.
pub fn unvisit_country_at(state: &mut AppState, world_pos: DVec2) {
    let Some(catalog) = state.catalog.clone() else {
        return;
    };
    let Some(country) = locate_by_point(&catalog, world_pos.x, world_pos.y) else {
        return;
    };

    state.land = Arc::new(state.land.recompute(&[country], LandEdit::Append));
    state.selection.remove([country.id.as_str()]);
    log::info!(
        "Markierung aufgehoben: {} ({})",
        country.display_name,
        country.id
    );

    super::file_io::persist_visited(state);
}

/// Aktualisiert das Hover-Label für das Land unter dem Mauszeiger.
///
/// Rein beobachtend: außer dem flüchtigen UI-Label wird nichts mutiert.
pub fn update_hover_label(state: &mut AppState, world_pos: DVec2) {
    let Some(catalog) = state.catalog.clone() else {
        state.ui.hover_country = None;
        return;
    };
    state.ui.hover_country = locate_by_point(&catalog, world_pos.x, world_pos.y)
        .map(|country| country.display_name.clone());
}
