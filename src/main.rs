//! World Visited Map.
//!
//! Interaktive Weltkarte auf egui-Basis: Länder per Klick als besucht
//! markieren, Auswahl wird als flache Textdatei persistiert.

use eframe::egui;
use world_visited_map::{ui, AppController, AppIntent, AppState, MapOptions};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!(
            "World Visited Map v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 720.0])
                .with_title("World Visited Map"),
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "World Visited Map",
            options,
            Box::new(|_cc| {
                let app = MapApp::new()?;
                Ok(Box::new(app))
            }),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct MapApp {
    state: AppState,
    controller: AppController,
    input: ui::InputState,
}

impl MapApp {
    /// Erstellt die Anwendung und lädt den Datensatz.
    ///
    /// Eine unlesbare Geometrie-Quelle ist hier fatal und bricht den
    /// Start ab — der Datensatz ist statisch, ein Retry hilft nicht.
    fn new() -> anyhow::Result<Self> {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = MapOptions::config_path();
        let map_options = MapOptions::load_from_file(&config_path);

        let mut state = AppState::new();
        state.options = map_options;

        let mut controller = AppController::new();
        controller.handle_intent(&mut state, AppIntent::ReloadRequested)?;

        Ok(Self {
            state,
            controller,
            input: ui::InputState::new(),
        })
    }
}

impl eframe::App for MapApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let events = self.collect_ui_events(ctx);

        let has_meaningful_events = events
            .iter()
            .any(|e| !matches!(e, AppIntent::ViewportResized { .. } | AppIntent::HoverMoved { .. }));

        self.process_events(events);

        self.maybe_request_repaint(ctx, has_meaningful_events);
    }
}

impl MapApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_menu(ctx, &self.state));

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                let viewport_size = [rect.width(), rect.height()];

                events.extend(self.input.collect_viewport_events(
                    ui,
                    &response,
                    viewport_size,
                    &self.state.view.camera,
                    &self.state.options,
                ));

                let scene = self.controller.build_render_scene(&self.state, viewport_size);
                ui::paint_scene(ui.painter(), rect, &scene);

                if self.state.catalog.is_none() {
                    ui.painter().text(
                        rect.center(),
                        egui::Align2::CENTER_CENTER,
                        "No dataset loaded. Use File → Reload Dataset",
                        egui::FontId::proportional(20.0),
                        egui::Color32::WHITE,
                    );
                }
            });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
                self.state.ui.status_message = Some(format!("{:#}", e));
            }
        }
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context, has_meaningful_events: bool) {
        if has_meaningful_events || ctx.input(|i| i.pointer.is_moving()) {
            ctx.request_repaint();
        }
    }
}
