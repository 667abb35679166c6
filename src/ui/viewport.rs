//! Viewport-Darstellung: Kurven-Polyline, Handle-Linien, Punkt-Kreise
//! mit Hover-Animation und die Einfüge-Vorschau.

use crate::app::AppState;
use crate::shared::EditorOptions;
use glam::Vec2;

/// Zeichnet die aktive Kurve und hält die Hover-Animation der Punkte.
#[derive(Debug, Default)]
pub struct CurveOverlay {
    /// Aktueller Darstellungs-Radius pro Punkt (animiert)
    point_radii: Vec<f32>,
    /// Punkt unter dem Cursor (pro Frame neu bestimmt)
    hover_point: Option<usize>,
}

impl CurveOverlay {
    /// Erstellt ein leeres Overlay.
    pub fn new() -> Self {
        Self::default()
    }

    /// True solange eine Hover-Animation läuft (Radius über Basiswert).
    pub fn is_animating(&self, options: &EditorOptions) -> bool {
        self.point_radii
            .iter()
            .any(|&r| r > options.point_radius)
    }

    /// Hover-Animation: der Punkt unter dem Cursor wächst pro Frame an,
    /// alle anderen schrumpfen zurück auf den Basis-Radius.
    pub fn hover_animation(
        &mut self,
        points: &[Vec2],
        cursor: Option<Vec2>,
        options: &EditorOptions,
    ) {
        self.point_radii.resize(points.len(), options.point_radius);
        self.hover_point = None;

        for (i, point) in points.iter().enumerate() {
            let hovered = cursor
                .map(|c| c.distance(*point) <= options.point_radius)
                .unwrap_or(false);

            if hovered {
                self.point_radii[i] += options.hover_growth_rate;
                self.hover_point = Some(i);
            } else {
                self.point_radii[i] -= options.hover_growth_rate;
            }

            self.point_radii[i] = self.point_radii[i].clamp(
                options.point_radius,
                options.point_radius + options.hover_radius,
            );
        }
    }

    /// Zeichnet Kurve, Handles, Einfüge-Vorschau und Punkte.
    pub fn paint(
        &self,
        painter: &egui::Painter,
        rect: egui::Rect,
        state: &AppState,
        cursor: Option<Vec2>,
        show_insert_preview: bool,
    ) {
        let session = state.active_session();
        let line_color = color32(state.options.line_color);

        // Kurven-Polyline
        let samples = session.engine.curve_points();
        if state.stroke_as_line {
            if samples.len() >= 2 {
                let line: Vec<egui::Pos2> =
                    samples.iter().map(|p| to_screen(rect, *p)).collect();
                painter.add(egui::Shape::line(line, egui::Stroke::new(2.0, line_color)));
            }
        } else {
            for sample in samples {
                painter.circle_filled(to_screen(rect, *sample), 1.0, line_color);
            }
        }

        if state.show_points {
            // Handle-Linien: je zwei aufeinanderfolgende Punkte ein Segment
            for pair in session.engine.handle_points().chunks_exact(2) {
                painter.line_segment(
                    [to_screen(rect, pair[0]), to_screen(rect, pair[1])],
                    egui::Stroke::new(1.0, line_color),
                );
            }

            if show_insert_preview {
                if let Some(cursor) = cursor {
                    self.paint_insert_preview(painter, rect, state, cursor);
                }
            }

            self.paint_points(painter, rect, state);
        }
    }

    /// Einfüge-Vorschau: projizierter Kurvenpunkt als Kreis, unterdrückt
    /// in der Nähe der beiden begrenzenden Anker.
    fn paint_insert_preview(
        &self,
        painter: &egui::Painter,
        rect: egui::Rect,
        state: &AppState,
        cursor: Vec2,
    ) {
        let session = state.active_session();
        let Some(hit) = session.engine.intersection_on_curve(
            &session.data,
            cursor,
            state.options.intersect_radius,
        ) else {
            return;
        };

        let ty = session.data.curve_type();
        let anchor = ty.closest_anchor(hit.insert_index);
        let next_anchor = anchor + ty.stride();
        let points = &session.data.points;
        let (Some(&anchor_pos), Some(&next_pos)) = (points.get(anchor), points.get(next_anchor))
        else {
            return;
        };

        let radius = state.options.point_radius;
        if cursor.distance(anchor_pos) - radius >= radius
            && cursor.distance(next_pos) - radius >= radius
        {
            let center = to_screen(rect, hit.position);
            painter.circle(
                center,
                radius,
                color32(state.options.intersect_color),
                egui::Stroke::new(
                    state.options.outline_thickness,
                    color32(state.options.outline_color),
                ),
            );
        }
    }

    /// Punkt-Kreise mit Hover-/Selektions-Färbung.
    fn paint_points(&self, painter: &egui::Painter, rect: egui::Rect, state: &AppState) {
        let options = &state.options;
        let points = &state.active_session().data.points;

        for (i, point) in points.iter().enumerate() {
            let hovered = self.hover_point == Some(i);
            let selected = state.selected_point == Some(i);

            let (fill, outline) = if selected && hovered {
                (options.hover_color, options.selected_color)
            } else if selected {
                (options.selected_color, options.outline_color)
            } else if hovered {
                (options.hover_color, options.outline_color)
            } else {
                (options.unselected_color, options.outline_color)
            };

            let radius = self
                .point_radii
                .get(i)
                .copied()
                .unwrap_or(options.point_radius);

            painter.circle(
                to_screen(rect, *point),
                radius,
                color32(fill),
                egui::Stroke::new(options.outline_thickness, color32(outline)),
            );
        }
    }
}

/// Viewport-Koordinaten → Screen-Position.
fn to_screen(rect: egui::Rect, p: Vec2) -> egui::Pos2 {
    egui::pos2(rect.min.x + p.x, rect.min.y + p.y)
}

/// RGBA-Float-Farbe → egui-Farbe.
fn color32(rgba: [f32; 4]) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(
        (rgba[0] * 255.0) as u8,
        (rgba[1] * 255.0) as u8,
        (rgba[2] * 255.0) as u8,
        (rgba[3] * 255.0) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hover_animation_grows_and_clamps() {
        let mut overlay = CurveOverlay::new();
        let options = EditorOptions::default();
        let points = vec![Vec2::new(100.0, 100.0)];

        // Cursor direkt auf dem Punkt: Radius wächst bis zum Maximum
        for _ in 0..20 {
            overlay.hover_animation(&points, Some(Vec2::new(100.0, 100.0)), &options);
        }
        assert_eq!(overlay.hover_point, Some(0));
        assert_eq!(
            overlay.point_radii[0],
            options.point_radius + options.hover_radius
        );
        assert!(overlay.is_animating(&options));

        // Cursor weg: Radius schrumpft zurück auf den Basiswert
        for _ in 0..20 {
            overlay.hover_animation(&points, None, &options);
        }
        assert_eq!(overlay.hover_point, None);
        assert_eq!(overlay.point_radii[0], options.point_radius);
        assert!(!overlay.is_animating(&options));
    }

    #[test]
    fn test_hover_animation_tracks_point_count() {
        let mut overlay = CurveOverlay::new();
        let options = EditorOptions::default();

        overlay.hover_animation(&[Vec2::ZERO, Vec2::ONE, Vec2::NEG_ONE], None, &options);
        assert_eq!(overlay.point_radii.len(), 3);

        // Anker gelöscht → Radien-Liste schrumpft mit
        overlay.hover_animation(&[Vec2::ZERO], None, &options);
        assert_eq!(overlay.point_radii.len(), 1);
    }
}
