//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::use_cases;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an die Use-Cases in `use_cases/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(command.clone());

        match command {
            // === Auswahl & Hover ===
            AppCommand::VisitCountryAtPoint { world_pos } => {
                use_cases::selection::visit_country_at(state, world_pos)
            }
            AppCommand::UnvisitCountryAtPoint { world_pos } => {
                use_cases::selection::unvisit_country_at(state, world_pos)
            }
            AppCommand::UpdateHoverLabel { world_pos } => {
                use_cases::selection::update_hover_label(state, world_pos)
            }

            // === Kamera & Viewport ===
            AppCommand::PanCamera { delta } => use_cases::camera::pan(state, delta),
            AppCommand::ZoomCamera {
                factor,
                focus_world,
            } => use_cases::camera::zoom_towards(state, factor, focus_world),
            AppCommand::ZoomIn => use_cases::camera::zoom_in(state),
            AppCommand::ZoomOut => use_cases::camera::zoom_out(state),
            AppCommand::ResetCamera => use_cases::camera::reset_camera(state),
            AppCommand::SetViewportSize { size } => state.view.viewport_size = size,

            // === Datei-I/O & Anwendungssteuerung ===
            AppCommand::ReloadDataset => use_cases::file_io::reload_dataset(state)?,
            AppCommand::RequestExit => state.should_exit = true,
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState, viewport_size: [f32; 2]) -> RenderScene {
        render_scene::build(state, viewport_size)
    }
}
