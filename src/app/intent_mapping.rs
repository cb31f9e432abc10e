//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
///
/// Klick- und Hover-Intents werden verworfen, solange kein Katalog
/// geladen ist — es gibt dann nichts aufzulösen.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::CountryVisitRequested { world_pos } => {
            if state.catalog.is_some() {
                vec![AppCommand::VisitCountryAtPoint { world_pos }]
            } else {
                Vec::new()
            }
        }
        AppIntent::CountryUnvisitRequested { world_pos } => {
            if state.catalog.is_some() {
                vec![AppCommand::UnvisitCountryAtPoint { world_pos }]
            } else {
                Vec::new()
            }
        }
        AppIntent::HoverMoved { world_pos } => {
            if state.catalog.is_some() {
                vec![AppCommand::UpdateHoverLabel { world_pos }]
            } else {
                Vec::new()
            }
        }
        AppIntent::CameraPan { delta } => vec![AppCommand::PanCamera { delta }],
        AppIntent::CameraZoom {
            factor,
            focus_world,
        } => vec![AppCommand::ZoomCamera {
            factor,
            focus_world,
        }],
        AppIntent::ZoomInRequested => vec![AppCommand::ZoomIn],
        AppIntent::ZoomOutRequested => vec![AppCommand::ZoomOut],
        AppIntent::ResetCameraRequested => vec![AppCommand::ResetCamera],
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::ReloadRequested => vec![AppCommand::ReloadDataset],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}
