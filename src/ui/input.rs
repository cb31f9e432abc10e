//! Viewport-Input-Handling: Maus-Events, Pan, Scroll → AppIntent.

use crate::app::AppIntent;
use crate::core::Camera2D;
use crate::shared::MapOptions;
use glam::DVec2;

/// Verwaltet den Input-Zustand für das Karten-Viewport.
#[derive(Default)]
pub struct InputState;

impl InputState {
    /// Erstellt einen neuen Input-Zustand.
    pub fn new() -> Self {
        Self
    }

    /// Sammelt Viewport-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// Diese Methode ist der zentrale UI→Intent-Einstieg: Primär-Klick
    /// markiert ein Land, Sekundär-Klick hebt die Markierung auf, Drag
    /// (primär oder Mitte) verschiebt die Kamera, Scroll zoomt auf die
    /// Mausposition, Zeiger-Bewegung aktualisiert das Hover-Label.
    pub fn collect_viewport_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        viewport_size: [f32; 2],
        camera: &Camera2D,
        options: &MapOptions,
    ) -> Vec<AppIntent> {
        let mut events = Vec::new();

        events.push(AppIntent::ViewportResized {
            size: viewport_size,
        });

        self.handle_clicks(response, viewport_size, camera, &mut events);
        self.handle_hover(response, viewport_size, camera, &mut events);
        self.handle_pointer_delta(ui, response, viewport_size, camera, &mut events);
        self.handle_scroll_zoom(ui, response, viewport_size, camera, options, &mut events);

        events
    }

    /// Verarbeitet Einfach-Klicks im Viewport.
    fn handle_clicks(
        &mut self,
        response: &egui::Response,
        viewport_size: [f32; 2],
        camera: &Camera2D,
        events: &mut Vec<AppIntent>,
    ) {
        if response.clicked_by(egui::PointerButton::Primary) {
            if let Some(pointer_pos) = response.interact_pointer_pos() {
                let world_pos = screen_pos_to_world(pointer_pos, response, viewport_size, camera);
                events.push(AppIntent::CountryVisitRequested { world_pos });
            }
        }

        if response.clicked_by(egui::PointerButton::Secondary) {
            if let Some(pointer_pos) = response.interact_pointer_pos() {
                let world_pos = screen_pos_to_world(pointer_pos, response, viewport_size, camera);
                events.push(AppIntent::CountryUnvisitRequested { world_pos });
            }
        }
    }

    /// Aktualisiert das Hover-Label bei Zeiger-Bewegung.
    fn handle_hover(
        &mut self,
        response: &egui::Response,
        viewport_size: [f32; 2],
        camera: &Camera2D,
        events: &mut Vec<AppIntent>,
    ) {
        if let Some(pointer_pos) = response.hover_pos() {
            let world_pos = screen_pos_to_world(pointer_pos, response, viewport_size, camera);
            events.push(AppIntent::HoverMoved { world_pos });
        }
    }

    /// Verarbeitet Maus-Bewegungs-Deltas für Kamera-Pan.
    fn handle_pointer_delta(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        viewport_size: [f32; 2],
        camera: &Camera2D,
        events: &mut Vec<AppIntent>,
    ) {
        let pointer_delta = ui.input(|i| i.pointer.delta());
        if pointer_delta == egui::Vec2::ZERO {
            return;
        }

        if response.dragged_by(egui::PointerButton::Primary)
            || response.dragged_by(egui::PointerButton::Middle)
        {
            let wpp = camera.world_per_pixel(viewport_size[1]);
            // Y-Flip: Screen-Y wächst nach unten, die Breite nach oben
            events.push(AppIntent::CameraPan {
                delta: DVec2::new(
                    -pointer_delta.x as f64 * wpp,
                    pointer_delta.y as f64 * wpp,
                ),
            });
        }
    }

    /// Verarbeitet Scroll-Zoom auf die aktuelle Mausposition.
    fn handle_scroll_zoom(
        &self,
        ui: &egui::Ui,
        response: &egui::Response,
        viewport_size: [f32; 2],
        camera: &Camera2D,
        options: &MapOptions,
        events: &mut Vec<AppIntent>,
    ) {
        let scroll = ui.input(|i| i.smooth_scroll_delta.y);
        if scroll == 0.0 {
            return;
        }

        let step = options.camera_scroll_zoom_step;
        let factor = if scroll > 0.0 { step } else { 1.0 / step };
        let focus_world = response
            .hover_pos()
            .map(|pos| screen_pos_to_world(pos, response, viewport_size, camera));
        events.push(AppIntent::CameraZoom {
            factor,
            focus_world,
        });
    }
}

/// Rechnet eine Bildschirmposition in Weltkoordinaten um.
pub(crate) fn screen_pos_to_world(
    pointer_pos: egui::Pos2,
    response: &egui::Response,
    viewport_size: [f32; 2],
    camera: &Camera2D,
) -> DVec2 {
    let local = pointer_pos - response.rect.min;
    camera.screen_to_world([local.x, local.y], viewport_size)
}
