use glam::DVec2;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Land am Punkt als besucht markieren (Carve + Persistenz)
    VisitCountryAtPoint { world_pos: DVec2 },
    /// Besucht-Markierung am Punkt aufheben (Append + Persistenz)
    UnvisitCountryAtPoint { world_pos: DVec2 },
    /// Hover-Label für den Punkt aktualisieren
    UpdateHoverLabel { world_pos: DVec2 },
    /// Kamera um Delta verschieben
    PanCamera { delta: DVec2 },
    /// Kamera zoomen (optional auf Fokuspunkt)
    ZoomCamera {
        factor: f64,
        focus_world: Option<DVec2>,
    },
    /// Stufenweise hineinzoomen
    ZoomIn,
    /// Stufenweise herauszoomen
    ZoomOut,
    /// Kamera auf die Katalog-Bounds zurücksetzen
    ResetCamera,
    /// Viewport-Größe setzen
    SetViewportSize { size: [f32; 2] },
    /// Katalog und Besucht-Liste laden
    ReloadDataset,
    /// Anwendung beenden
    RequestExit,
}
