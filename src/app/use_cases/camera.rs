//! Use-Case-Funktionen für Kamera-Steuerung.

use crate::app::AppState;
use crate::core::{Camera2D, CountryCatalog};
use glam::DVec2;

/// Setzt die Kamera auf die Katalog-Bounds zurück (oder auf Default,
/// wenn kein Katalog geladen ist).
pub fn reset_camera(state: &mut AppState) {
    let Some(catalog) = state.catalog.clone() else {
        state.view.camera = Default::default();
        return;
    };
    center_on_catalog(state, &catalog);
}

/// Zoomt die Kamera stufenweise hinein.
pub fn zoom_in(state: &mut AppState) {
    state.view.camera.zoom_by_clamped(
        state.options.camera_zoom_step,
        state.options.camera_zoom_min,
        state.options.camera_zoom_max,
    );
}

/// Zoomt die Kamera stufenweise heraus.
pub fn zoom_out(state: &mut AppState) {
    state.view.camera.zoom_by_clamped(
        1.0 / state.options.camera_zoom_step,
        state.options.camera_zoom_min,
        state.options.camera_zoom_max,
    );
}

/// Verschiebt die Kamera basierend auf einem Delta.
pub fn pan(state: &mut AppState, delta: DVec2) {
    state.view.camera.pan(delta);
}

/// Zoomt auf einen optionalen Fokuspunkt (Mausposition) hin.
///
/// Falls `focus_world` angegeben ist, bleibt der Welt-Punkt unter
/// der Maus nach dem Zoom stabil an derselben Bildschirmposition.
pub fn zoom_towards(state: &mut AppState, factor: f64, focus_world: Option<DVec2>) {
    if let Some(focus) = focus_world {
        let old_zoom = state.view.camera.zoom;
        state.view.camera.zoom_by_clamped(
            factor,
            state.options.camera_zoom_min,
            state.options.camera_zoom_max,
        );
        let new_zoom = state.view.camera.zoom;
        // Kamera-Position korrigieren, damit focus_world an gleicher Stelle bleibt
        let scale = old_zoom / new_zoom;
        state.view.camera.position = focus + (state.view.camera.position - focus) * scale;
    } else {
        state.view.camera.zoom_by_clamped(
            factor,
            state.options.camera_zoom_min,
            state.options.camera_zoom_max,
        );
    }
}

/// Zentriert die Kamera auf die Bounding Box des Katalogs.
///
/// Berechnet Mittelpunkt und wählt einen Zoom-Level, bei dem die gesamte
/// Box sichtbar ist. Keine Operation wenn der Katalog leer ist.
pub fn center_on_catalog(state: &mut AppState, catalog: &CountryCatalog) {
    let Some(bounds) = catalog.bounds() else {
        return;
    };

    state.view.camera.look_at(bounds.center());

    let half_height = (bounds.height() / 2.0).max(1e-9);
    state.view.camera.zoom = (Camera2D::BASE_WORLD_EXTENT / half_height).clamp(
        state.options.camera_zoom_min,
        state.options.camera_zoom_max,
    );

    log::info!(
        "Katalog-Bounds: ({:.1}, {:.1}) bis ({:.1}, {:.1}), Zentrum: ({:.1}, {:.1}), Zoom: {:.2}",
        bounds.x_min,
        bounds.y_min,
        bounds.x_max,
        bounds.y_max,
        bounds.center().x,
        bounds.center().y,
        state.view.camera.zoom
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CountryCatalog, CountryRecord};
    use geo::{polygon, MultiPolygon};
    use std::sync::Arc;

    fn catalog() -> CountryCatalog {
        CountryCatalog::from_records(vec![CountryRecord::new(
            "AAA",
            "Alpha",
            MultiPolygon(vec![polygon![
                (x: 0.0, y: 0.0),
                (x: 20.0, y: 0.0),
                (x: 20.0, y: 10.0),
                (x: 0.0, y: 10.0),
            ]]),
        )])
        .unwrap()
    }

    #[test]
    fn test_zoom_in_increases_zoom() {
        let mut state = AppState::new();
        let before = state.view.camera.zoom;

        zoom_in(&mut state);

        assert!(state.view.camera.zoom > before);
    }

    #[test]
    fn test_zoom_in_then_out_returns_to_original() {
        let mut state = AppState::new();
        let original = state.view.camera.zoom;

        zoom_in(&mut state);
        zoom_out(&mut state);

        assert!((state.view.camera.zoom - original).abs() < 1e-9);
    }

    #[test]
    fn test_pan_moves_camera_position() {
        let mut state = AppState::new();

        pan(&mut state, DVec2::new(10.0, -5.0));

        assert_eq!(state.view.camera.position, DVec2::new(10.0, -5.0));
    }

    #[test]
    fn test_zoom_towards_point_moves_camera_towards_focus() {
        let mut state = AppState::new();
        let focus = DVec2::new(100.0, 50.0);

        zoom_towards(&mut state, 2.0, Some(focus));

        // Nach Zoom: Kamera muss sich zum Fokuspunkt hin bewegt haben
        assert!(state.view.camera.position.x > 0.0);
        assert!(state.view.camera.position.y > 0.0);
        assert!((state.view.camera.zoom - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_center_on_catalog_centers_bounds() {
        let mut state = AppState::new();

        center_on_catalog(&mut state, &catalog());

        assert_eq!(state.view.camera.position, DVec2::new(10.0, 5.0));
        assert!(state.view.camera.zoom > 1.0);
    }

    #[test]
    fn test_reset_camera_without_catalog_restores_default() {
        let mut state = AppState::new();
        state.view.camera.pan(DVec2::new(50.0, 50.0));
        state.view.camera.zoom = 7.0;

        reset_camera(&mut state);

        assert_eq!(state.view.camera.position, DVec2::ZERO);
        assert!((state.view.camera.zoom - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_reset_camera_with_catalog_centers_on_bounds() {
        let mut state = AppState::new();
        state.catalog = Some(Arc::new(catalog()));
        state.view.camera.pan(DVec2::new(500.0, 500.0));

        reset_camera(&mut state);

        assert_eq!(state.view.camera.position, DVec2::new(10.0, 5.0));
    }
}
