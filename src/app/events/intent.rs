use glam::DVec2;

/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Primär-Klick: Land unter dem Punkt als besucht markieren
    CountryVisitRequested {
        /// Klickposition in Weltkoordinaten (Lon/Lat)
        world_pos: DVec2,
    },
    /// Sekundär-Klick: Besucht-Markierung des Landes unter dem Punkt aufheben
    CountryUnvisitRequested {
        /// Klickposition in Weltkoordinaten (Lon/Lat)
        world_pos: DVec2,
    },
    /// Mauszeiger bewegt: Hover-Label aktualisieren (rein beobachtend)
    HoverMoved {
        /// Zeigerposition in Weltkoordinaten (Lon/Lat)
        world_pos: DVec2,
    },
    /// Kamera um Delta verschieben (Welt-Einheiten)
    CameraPan { delta: DVec2 },
    /// Kamera zoomen (optional auf einen Fokuspunkt)
    CameraZoom {
        factor: f64,
        focus_world: Option<DVec2>,
    },
    /// Stufenweise hineinzoomen
    ZoomInRequested,
    /// Stufenweise herauszoomen
    ZoomOutRequested,
    /// Kamera auf die Katalog-Bounds zurücksetzen
    ResetCameraRequested,
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Katalog und Besucht-Liste (neu) laden
    ReloadRequested,
    /// Anwendung beenden
    ExitRequested,
}
