//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if state.catalog.is_some() {
                ui.label(format!(
                    "Countries: {} | Visited: {}",
                    state.country_count(),
                    state.visited_count()
                ));
            } else {
                ui.label("No dataset loaded");
            }

            ui.separator();

            // Cursor-Readout: Land unter dem Mauszeiger
            match &state.ui.hover_country {
                Some(name) => ui.label(format!("Country: {}", name)),
                None => ui.label("Country: —"),
            };

            ui.separator();

            ui.label(format!(
                "Zoom: {:.2}x | Position: ({:.1}, {:.1})",
                state.view.camera.zoom, state.view.camera.position.x, state.view.camera.position.y
            ));

            // Statusnachricht (z.B. fehlgeschlagene Persistenz)
            if let Some(message) = &state.ui.status_message {
                ui.separator();
                ui.label(egui::RichText::new(format!("⚠ {}", message)).color(egui::Color32::YELLOW));
            }

            // FPS-Anzeige (rechts)
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("FPS: {:.0}", ctx.input(|i| 1.0 / i.stable_dt)));
            });
        });
    });
}
