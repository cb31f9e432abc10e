//! Zentrale Konfiguration für die Besucht-Karte.
//!
//! `MapOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Datenquellen ────────────────────────────────────────────────────

/// Standard-Pfad zur GeoJSON-Länderdatei (Natural-Earth-Stil).
pub const COUNTRIES_FILE: &str = "data/countries.geojson";
/// Standard-Pfad zur persistierten Besucht-Liste.
pub const VISITED_FILE: &str = "data/visited.txt";

// ── Kamera ──────────────────────────────────────────────────────────

/// Minimaler Zoom-Faktor.
pub const CAMERA_ZOOM_MIN: f64 = 0.5;
/// Maximaler Zoom-Faktor.
pub const CAMERA_ZOOM_MAX: f64 = 500.0;
/// Zoom-Schritt bei stufenweisem Zoom (Menü-Buttons / Shortcuts).
pub const CAMERA_ZOOM_STEP: f64 = 1.2;
/// Zoom-Schritt bei Mausrad-Scroll.
pub const CAMERA_SCROLL_ZOOM_STEP: f64 = 1.1;

// ── Karten-Rendering ────────────────────────────────────────────────

/// Füllfarbe des Ozean-Hintergrunds (RGBA).
pub const OCEAN_COLOR: [f32; 4] = [0.60, 0.73, 0.86, 1.0];
/// Füllfarbe des unmarkierten Landes (RGBA).
pub const LAND_COLOR: [f32; 4] = [0.94, 0.92, 0.84, 1.0];
/// Linienfarbe der Ländergrenzen (RGBA).
pub const BORDER_COLOR: [f32; 4] = [0.45, 0.45, 0.45, 1.0];
/// Linienfarbe der Küstenlinie (RGBA).
pub const COASTLINE_COLOR: [f32; 4] = [0.15, 0.15, 0.15, 1.0];
/// Linienstärke der Ländergrenzen in Screen-Pixeln.
pub const BORDER_WIDTH_PX: f32 = 0.6;
/// Linienstärke der Küstenlinie in Screen-Pixeln.
pub const COASTLINE_WIDTH_PX: f32 = 1.0;

/// Alle zur Laufzeit änderbaren Karten-Optionen.
/// Wird als `world_visited_map.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MapOptions {
    // ── Datenquellen ────────────────────────────────────────────
    /// Pfad zur GeoJSON-Länderdatei
    pub countries_file: String,
    /// Pfad zur persistierten Besucht-Liste
    pub visited_file: String,

    // ── Farben ──────────────────────────────────────────────────
    /// Füllfarbe des Ozean-Hintergrunds (RGBA)
    pub ocean_color: [f32; 4],
    /// Füllfarbe des unmarkierten Landes
    pub land_color: [f32; 4],
    /// Linienfarbe der Ländergrenzen
    pub border_color: [f32; 4],
    /// Linienfarbe der Küstenlinie
    pub coastline_color: [f32; 4],

    // ── Linienstärken ───────────────────────────────────────────
    /// Linienstärke der Ländergrenzen in Screen-Pixeln
    pub border_width_px: f32,
    /// Linienstärke der Küstenlinie in Screen-Pixeln
    pub coastline_width_px: f32,

    // ── Kamera ──────────────────────────────────────────────────
    /// Minimaler Zoom-Faktor (konfigurierbar)
    pub camera_zoom_min: f64,
    /// Maximaler Zoom-Faktor (konfigurierbar)
    pub camera_zoom_max: f64,
    /// Zoom-Schritt bei Menü-Buttons / Shortcuts
    pub camera_zoom_step: f64,
    /// Zoom-Schritt bei Mausrad-Scroll
    pub camera_scroll_zoom_step: f64,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            countries_file: COUNTRIES_FILE.to_string(),
            visited_file: VISITED_FILE.to_string(),

            ocean_color: OCEAN_COLOR,
            land_color: LAND_COLOR,
            border_color: BORDER_COLOR,
            coastline_color: COASTLINE_COLOR,

            border_width_px: BORDER_WIDTH_PX,
            coastline_width_px: COASTLINE_WIDTH_PX,

            camera_zoom_min: CAMERA_ZOOM_MIN,
            camera_zoom_max: CAMERA_ZOOM_MAX,
            camera_zoom_step: CAMERA_ZOOM_STEP,
            camera_scroll_zoom_step: CAMERA_SCROLL_ZOOM_STEP,
        }
    }
}

impl MapOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(options) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    options
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("world_visited_map"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("world_visited_map.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toml_round_trip() {
        let mut options = MapOptions::default();
        options.visited_file = "elsewhere/visited.txt".to_string();
        options.camera_zoom_step = 1.5;

        let text = toml::to_string_pretty(&options).expect("Serialisierung erwartet");
        let parsed: MapOptions = toml::from_str(&text).expect("Deserialisierung erwartet");

        assert_eq!(parsed, options);
    }

    #[test]
    fn test_load_missing_file_falls_back_to_defaults() {
        let options = MapOptions::load_from_file(std::path::Path::new("/nonexistent/options.toml"));
        assert_eq!(options, MapOptions::default());
    }
}
