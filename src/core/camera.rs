//! 2D-Kamera über geographischen Koordinaten (Pan, Zoom, Extent).

use glam::DVec2;

/// Sichtbarer Kartenausschnitt als Koordinaten-Grenzen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapExtent {
    /// Westliche Grenze (Länge)
    pub x_min: f64,
    /// Östliche Grenze (Länge)
    pub x_max: f64,
    /// Südliche Grenze (Breite)
    pub y_min: f64,
    /// Nördliche Grenze (Breite)
    pub y_max: f64,
}

impl MapExtent {
    /// Breite des Ausschnitts in Grad.
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    /// Höhe des Ausschnitts in Grad.
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Mittelpunkt des Ausschnitts.
    pub fn center(&self) -> DVec2 {
        DVec2::new(
            (self.x_min + self.x_max) / 2.0,
            (self.y_min + self.y_max) / 2.0,
        )
    }

    /// Vereinigung zweier Ausschnitte (umschließende Box).
    pub fn union(&self, other: &MapExtent) -> MapExtent {
        MapExtent {
            x_min: self.x_min.min(other.x_min),
            x_max: self.x_max.max(other.x_max),
            y_min: self.y_min.min(other.y_min),
            y_max: self.y_max.max(other.y_max),
        }
    }
}

/// 2D-Kamera mit Pan und Zoom über der Kartenebene.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera2D {
    /// Blickpunkt in Weltkoordinaten (Lon/Lat)
    pub position: DVec2,
    /// Zoom-Faktor (1.0 = ganze Welthöhe sichtbar)
    pub zoom: f64,
}

impl Camera2D {
    /// Sichtbare Welt-Halbhöhe in Grad bei Zoom 1.0.
    pub const BASE_WORLD_EXTENT: f64 = 90.0;
    /// Minimaler Zoom-Faktor.
    pub const ZOOM_MIN: f64 = 0.5;
    /// Maximaler Zoom-Faktor.
    pub const ZOOM_MAX: f64 = 500.0;

    /// Erstellt eine neue Kamera auf dem Welt-Ursprung.
    pub fn new() -> Self {
        Self {
            position: DVec2::ZERO,
            zoom: 1.0,
        }
    }

    /// Zentriert die Kamera auf einen Punkt.
    pub fn look_at(&mut self, target: DVec2) {
        self.position = target;
    }

    /// Verschiebt die Kamera (Pan).
    pub fn pan(&mut self, delta: DVec2) {
        self.position += delta;
    }

    /// Ändert den Zoom-Level (geklemmt auf die Konstanten-Grenzen).
    pub fn zoom_by(&mut self, factor: f64) {
        self.zoom_by_clamped(factor, Self::ZOOM_MIN, Self::ZOOM_MAX);
    }

    /// Ändert den Zoom-Level mit konfigurierbaren Grenzen.
    pub fn zoom_by_clamped(&mut self, factor: f64, min: f64, max: f64) {
        self.zoom = (self.zoom * factor).clamp(min, max);
    }

    /// Sichtbarer Extent für die gegebene Viewport-Größe (Pixel).
    ///
    /// Die Halbhöhe ist `BASE_WORLD_EXTENT / zoom`, die Halbbreite folgt
    /// dem Seitenverhältnis des Viewports.
    pub fn extent(&self, viewport_size: [f32; 2]) -> MapExtent {
        let aspect = (viewport_size[0].max(1.0) / viewport_size[1].max(1.0)) as f64;
        let half_y = Self::BASE_WORLD_EXTENT / self.zoom;
        let half_x = half_y * aspect;
        MapExtent {
            x_min: self.position.x - half_x,
            x_max: self.position.x + half_x,
            y_min: self.position.y - half_y,
            y_max: self.position.y + half_y,
        }
    }

    /// Konvertiert Screen-Koordinaten (Pixel, Ursprung oben links) zu
    /// Weltkoordinaten. Die Y-Achse wird gespiegelt: Screen-Y wächst nach
    /// unten, die geographische Breite nach oben.
    pub fn screen_to_world(&self, screen_pos: [f32; 2], viewport_size: [f32; 2]) -> DVec2 {
        let extent = self.extent(viewport_size);
        let fx = (screen_pos[0] / viewport_size[0].max(1.0)) as f64;
        let fy = (screen_pos[1] / viewport_size[1].max(1.0)) as f64;
        DVec2::new(
            extent.x_min + fx * extent.width(),
            extent.y_max - fy * extent.height(),
        )
    }

    /// Umrechnungsfaktor von Screen-Pixeln zu Welt-Einheiten (Grad).
    pub fn world_per_pixel(&self, viewport_height: f32) -> f64 {
        2.0 * Self::BASE_WORLD_EXTENT / (self.zoom * viewport_height.max(1.0) as f64)
    }
}

impl Default for Camera2D {
    fn default() -> Self {
        Self::new()
    }
}
