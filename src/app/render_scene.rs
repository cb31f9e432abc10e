//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::RenderScene;

/// Baut eine RenderScene aus dem aktuellen AppState.
///
/// Der Extent wird aus der Kamera gelesen; Auswahl-Mutationen fassen die
/// Kamera nie an, daher überlebt der Ausschnitt jede klick-ausgelöste
/// Neuberechnung.
pub fn build(state: &AppState, viewport_size: [f32; 2]) -> RenderScene {
    RenderScene {
        extent: state.view.camera.extent(viewport_size),
        viewport_size,
        land: state.land.clone(),
        catalog: state.catalog.clone(),
        options: state.options.clone(),
    }
}
