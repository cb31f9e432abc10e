//! Zeichnet die Render-Szene in das egui-Viewport.
//!
//! Dünne Zeichenschicht ohne eigene Logik: projiziert Weltkoordinaten
//! über den Szenen-Extent in den Viewport und malt die Ebenen in fester
//! Z-Reihenfolge (Ozean, Land, Grenzen, Küstenlinie).

use crate::core::MapExtent;
use crate::shared::RenderScene;
use geo::LineString;

/// Zeichnet die komplette Szene in das gegebene Rechteck.
pub fn paint_scene(painter: &egui::Painter, rect: egui::Rect, scene: &RenderScene) {
    let project = projector(rect, scene.extent);

    // Ozean-Hintergrund
    painter.rect_filled(rect, 0.0, color32(scene.options.ocean_color));

    // Land-Füllung; Innenringe (Seen) werden mit der Ozean-Farbe übermalt
    let land_fill = color32(scene.options.land_color);
    let hole_fill = color32(scene.options.ocean_color);
    for multi in scene.land.polygons() {
        for polygon in &multi.0 {
            fill_ring(painter, polygon.exterior(), land_fill, &project);
            for interior in polygon.interiors() {
                fill_ring(painter, interior, hole_fill, &project);
            }
        }
    }

    let Some(catalog) = &scene.catalog else {
        return;
    };

    // Ländergrenzen (alle Ringe)
    let border = egui::Stroke::new(
        scene.options.border_width_px,
        color32(scene.options.border_color),
    );
    for country in catalog.iter() {
        for polygon in &country.geometry.0 {
            stroke_ring(painter, polygon.exterior(), border, &project);
            for interior in polygon.interiors() {
                stroke_ring(painter, interior, border, &project);
            }
        }
    }

    // Küstenlinie (nur Außenringe, obenauf)
    let coastline = egui::Stroke::new(
        scene.options.coastline_width_px,
        color32(scene.options.coastline_color),
    );
    for country in catalog.iter() {
        for polygon in &country.geometry.0 {
            stroke_ring(painter, polygon.exterior(), coastline, &project);
        }
    }
}

/// Projektion Welt → Screen über den sichtbaren Extent (Y gespiegelt).
fn projector(rect: egui::Rect, extent: MapExtent) -> impl Fn(f64, f64) -> egui::Pos2 {
    let width = extent.width().max(1e-12);
    let height = extent.height().max(1e-12);
    move |x, y| {
        let fx = ((x - extent.x_min) / width) as f32;
        let fy = ((extent.y_max - y) / height) as f32;
        egui::pos2(
            rect.min.x + fx * rect.width(),
            rect.min.y + fy * rect.height(),
        )
    }
}

/// Ring-Koordinaten projizieren; der doppelte Schlusspunkt entfällt.
fn ring_points(
    ring: &LineString<f64>,
    project: &impl Fn(f64, f64) -> egui::Pos2,
) -> Vec<egui::Pos2> {
    let coords = &ring.0;
    let len = if ring.is_closed() && coords.len() > 1 {
        coords.len() - 1
    } else {
        coords.len()
    };
    coords[..len]
        .iter()
        .map(|coord| project(coord.x, coord.y))
        .collect()
}

fn fill_ring(
    painter: &egui::Painter,
    ring: &LineString<f64>,
    fill: egui::Color32,
    project: &impl Fn(f64, f64) -> egui::Pos2,
) {
    let points = ring_points(ring, project);
    if points.len() < 3 {
        return;
    }
    painter.add(egui::Shape::Path(egui::epaint::PathShape {
        points,
        closed: true,
        fill,
        stroke: egui::Stroke::NONE.into(),
    }));
}

fn stroke_ring(
    painter: &egui::Painter,
    ring: &LineString<f64>,
    stroke: egui::Stroke,
    project: &impl Fn(f64, f64) -> egui::Pos2,
) {
    let points = ring_points(ring, project);
    if points.len() < 2 {
        return;
    }
    painter.add(egui::Shape::closed_line(points, stroke));
}

fn color32(rgba: [f32; 4]) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(
        (rgba[0] * 255.0) as u8,
        (rgba[1] * 255.0) as u8,
        (rgba[2] * 255.0) as u8,
        (rgba[3] * 255.0) as u8,
    )
}
