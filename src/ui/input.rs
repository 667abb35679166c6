//! Viewport-Eingaben: Maus-Selektion/Drag und Keyboard-Shortcuts.
//!
//! Mappt rohe egui-Events auf `AppIntent`s — hier entsteht keine
//! Mutationslogik, die liegt vollständig im Controller.

use crate::app::{AppIntent, AppState};
use crate::core::{AnchorPlacement, ControlMode};
use glam::Vec2;

/// Laufender Drag eines Punkts.
#[derive(Debug, Clone, Copy)]
struct DragState {
    /// Index des gezogenen Punkts in der Roh-Punktliste
    index: usize,
    /// Cursor-Position beim Druckbeginn (Viewport-Koordinaten)
    press_pos: Vec2,
    /// Punkt-Position beim Druckbeginn
    point_start: Vec2,
}

/// Eingabe-Zustand über Frames hinweg.
#[derive(Debug, Default)]
pub struct InputState {
    drag: Option<DragState>,
}

impl InputState {
    /// Erstellt einen leeren Eingabe-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sammelt Maus- und Keyboard-Intents für den Viewport.
    ///
    /// Maus-Belegung:
    /// - Klick auf einen Punkt: selektieren und Drag starten
    ///   (Drag verschiebt; Shift = Free, sonst Alignment)
    /// - Ctrl+Klick ins Leere: Anker am Ende anhängen
    /// - Ctrl+Alt+Klick: Anker am Anfang einfügen
    /// - Ctrl+Shift+Klick: Anker am projizierten Kurvenpunkt einfügen
    pub fn collect_viewport_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        rect: egui::Rect,
        state: &AppState,
    ) -> Vec<AppIntent> {
        let mut events = collect_keyboard_intents(ui);
        let modifiers = ui.input(|i| i.modifiers);

        let pointer = response
            .interact_pointer_pos()
            .map(|p| Vec2::new(p.x - rect.min.x, p.y - rect.min.y));

        let pressed = response.drag_started_by(egui::PointerButton::Primary)
            || response.clicked_by(egui::PointerButton::Primary);

        if pressed {
            if let Some(cursor) = pointer {
                let points = &state.active_session().data.points;
                match hit_test(points, cursor, state.options.point_radius) {
                    Some(index) => {
                        events.push(AppIntent::PointSelected { index });
                        self.drag = Some(DragState {
                            index,
                            press_pos: cursor,
                            point_start: points[index],
                        });
                    }
                    None => {
                        if modifiers.command && modifiers.alt {
                            events.push(AppIntent::AddAnchorRequested {
                                position: cursor,
                                placement: AnchorPlacement::Begin,
                            });
                        } else if modifiers.command && modifiers.shift {
                            events.push(AppIntent::InsertAnchorRequested { position: cursor });
                        } else if modifiers.command {
                            events.push(AppIntent::AddAnchorRequested {
                                position: cursor,
                                placement: AnchorPlacement::End,
                            });
                        }
                        events.push(AppIntent::SelectionCleared);
                    }
                }
            }
        } else if response.dragged_by(egui::PointerButton::Primary) {
            if let (Some(drag), Some(cursor)) = (self.drag, pointer) {
                let mode = if modifiers.shift {
                    ControlMode::Free
                } else {
                    ControlMode::Alignment
                };
                events.push(AppIntent::MovePointRequested {
                    index: drag.index,
                    position: drag.point_start + (cursor - drag.press_pos),
                    mode,
                });
            }
        }

        if response.drag_stopped_by(egui::PointerButton::Primary) {
            self.drag = None;
        }

        events
    }
}

/// Punktsuche unter dem Cursor: komponentenweiser Box-Test mit dem
/// Punkt-Radius, der letzte Treffer gewinnt.
fn hit_test(points: &[Vec2], cursor: Vec2, radius: f32) -> Option<usize> {
    let mut found = None;
    for (i, point) in points.iter().enumerate() {
        if (cursor.x - point.x).abs() < radius && (cursor.y - point.y).abs() < radius {
            found = Some(i);
        }
    }
    found
}

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
fn collect_keyboard_intents(ui: &egui::Ui) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let (key_d, key_h, key_c, key_m, key_b, key_plus, key_minus, key_escape) = ui.input(|i| {
        (
            i.key_pressed(egui::Key::D),
            i.key_pressed(egui::Key::H),
            i.key_pressed(egui::Key::C),
            i.key_pressed(egui::Key::M),
            i.key_pressed(egui::Key::B),
            i.key_pressed(egui::Key::Plus),
            i.key_pressed(egui::Key::Minus),
            i.key_pressed(egui::Key::Escape),
        )
    });

    if key_d {
        events.push(AppIntent::RemoveAnchorRequested);
    }
    if key_h {
        events.push(AppIntent::PointVisibilityToggled);
    }
    if key_c {
        events.push(AppIntent::CloseLoopToggled);
    }
    if key_m {
        events.push(AppIntent::CurveTypeCycled);
    }
    if key_b {
        events.push(AppIntent::PrimitiveToggled);
    }
    if key_plus {
        events.push(AppIntent::SmoothFactorStepped { delta: 1.0 });
    }
    if key_minus {
        events.push(AppIntent::SmoothFactorStepped { delta: -1.0 });
    }
    if key_escape {
        events.push(AppIntent::ExitRequested);
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_test_box_check() {
        let points = vec![Vec2::new(100.0, 100.0), Vec2::new(200.0, 100.0)];

        // Innerhalb der Box, aber außerhalb des euklidischen Radius —
        // der Box-Test trifft trotzdem
        assert_eq!(hit_test(&points, Vec2::new(108.0, 108.0), 10.0), Some(0));
        assert_eq!(hit_test(&points, Vec2::new(195.0, 95.0), 10.0), Some(1));
        assert_eq!(hit_test(&points, Vec2::new(150.0, 100.0), 10.0), None);
    }

    #[test]
    fn test_hit_test_last_match_wins() {
        let points = vec![Vec2::new(100.0, 100.0), Vec2::new(104.0, 100.0)];
        assert_eq!(hit_test(&points, Vec2::new(102.0, 100.0), 10.0), Some(1));
    }

    #[test]
    fn test_hit_test_empty_list() {
        assert_eq!(hit_test(&[], Vec2::ZERO, 10.0), None);
    }
}
