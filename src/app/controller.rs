//! Der App-Controller setzt `AppIntent`s in Engine-Operationen um.
//!
//! Engine-seitige Ablehnungen (ungültiger Index, zu wenige Punkte)
//! sind bereits dort geloggt und werden hier als No-op durchgereicht;
//! nur System-Fehler (z.B. Optionen speichern) laufen als `Err` hoch.

use super::events::AppIntent;
use super::state::AppState;
use crate::shared::{EditorOptions, SMOOTH_FACTOR_MAX, SMOOTH_FACTOR_MIN};

/// Verteilt Intents auf Zustand und Kurven-Engine.
#[derive(Debug, Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen einzelnen Intent.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        match intent {
            AppIntent::AddAnchorRequested {
                position,
                placement,
            } => {
                let session = state.active_session_mut();
                session.engine.add_anchor(&mut session.data, position, placement);
            }

            AppIntent::InsertAnchorRequested { position } => {
                let radius = state.options.intersect_radius;
                let session = state.active_session_mut();
                if let Some(hit) = session
                    .engine
                    .intersection_on_curve(&session.data, position, radius)
                {
                    session
                        .engine
                        .insert_anchor(&mut session.data, hit.position, hit.insert_index);
                } else {
                    log::warn!("Kein Schnittpunkt an ({:.1}, {:.1})", position.x, position.y);
                }
            }

            AppIntent::RemoveAnchorRequested => {
                if let Some(index) = state.selected_point.take() {
                    let session = state.active_session_mut();
                    session.engine.remove_anchor(&mut session.data, index);
                }
            }

            AppIntent::PointSelected { index } => {
                if index < state.active_session().data.point_count() {
                    state.selected_point = Some(index);
                } else {
                    log::warn!("Selektion auf Index {} außerhalb der Punktliste", index);
                    state.selected_point = None;
                }
            }

            AppIntent::SelectionCleared => {
                state.selected_point = None;
            }

            AppIntent::MovePointRequested {
                index,
                position,
                mode,
            } => {
                let session = state.active_session_mut();
                session
                    .engine
                    .update_point(&mut session.data, index, position, mode);
            }

            AppIntent::CloseLoopToggled => {
                let session = state.active_session_mut();
                let close = !session.data.is_closed_loop;
                session.engine.close_loop(&mut session.data, close);
            }

            AppIntent::CurveTypeCycled => {
                state.cycle_curve_type();
            }

            AppIntent::PointVisibilityToggled => {
                state.show_points = !state.show_points;
                // Ausgeblendete Handles werden auch nicht mehr erzeugt
                let show = state.show_points;
                let session = state.active_session_mut();
                session.data.handles_generated = show;
                session.refresh();
            }

            AppIntent::PrimitiveToggled => {
                state.stroke_as_line = !state.stroke_as_line;
            }

            AppIntent::SmoothFactorStepped { delta } => {
                let session = state.active_session_mut();
                session.data.smooth_factor = (session.data.smooth_factor + delta)
                    .clamp(SMOOTH_FACTOR_MIN, SMOOTH_FACTOR_MAX);
                session.refresh();
            }

            AppIntent::ExitRequested => {
                state.options.save_to_file(&EditorOptions::config_path())?;
                state.should_exit = true;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{AnchorPlacement, ControlMode, CurveType};
    use glam::Vec2;

    fn dispatch(controller: &mut AppController, state: &mut AppState, intent: AppIntent) {
        controller
            .handle_intent(state, intent)
            .expect("Intent-Verarbeitung erwartet");
    }

    /// Zustand mit aktiver kubischer Session und zwei Ankern.
    fn cubic_state_with_two_anchors() -> (AppController, AppState) {
        let mut controller = AppController::new();
        let mut state = AppState::new();
        dispatch(&mut controller, &mut state, AppIntent::CurveTypeCycled);
        dispatch(&mut controller, &mut state, AppIntent::CurveTypeCycled);
        assert_eq!(state.active_curve_type(), CurveType::Cubic);

        for x in [100.0, 300.0] {
            dispatch(
                &mut controller,
                &mut state,
                AppIntent::AddAnchorRequested {
                    position: Vec2::new(x, 100.0),
                    placement: AnchorPlacement::End,
                },
            );
        }
        (controller, state)
    }

    #[test]
    fn test_add_anchor_flow() {
        let (_, state) = cubic_state_with_two_anchors();

        let session = state.active_session();
        assert_eq!(session.data.point_count(), 6);
        assert!(!session.engine.curve_points().is_empty());
    }

    #[test]
    fn test_select_and_move_flow() {
        let (mut controller, mut state) = cubic_state_with_two_anchors();

        dispatch(&mut controller, &mut state, AppIntent::PointSelected { index: 1 });
        assert_eq!(state.selected_point, Some(1));

        dispatch(
            &mut controller,
            &mut state,
            AppIntent::MovePointRequested {
                index: 1,
                position: Vec2::new(120.0, 150.0),
                mode: ControlMode::Alignment,
            },
        );

        let session = state.active_session();
        assert_eq!(session.data.points[1], Vec2::new(120.0, 150.0));
        // Anker-Verschiebung nimmt die Handles starr mit
        assert_eq!(session.data.points[0], Vec2::new(70.0, 150.0));
    }

    #[test]
    fn test_remove_anchor_clears_selection() {
        let (mut controller, mut state) = cubic_state_with_two_anchors();

        dispatch(&mut controller, &mut state, AppIntent::PointSelected { index: 4 });
        dispatch(&mut controller, &mut state, AppIntent::RemoveAnchorRequested);

        assert!(state.selected_point.is_none());
        assert_eq!(state.active_session().data.point_count(), 3);
    }

    #[test]
    fn test_remove_without_selection_is_noop() {
        let (mut controller, mut state) = cubic_state_with_two_anchors();

        dispatch(&mut controller, &mut state, AppIntent::RemoveAnchorRequested);
        assert_eq!(state.active_session().data.point_count(), 6);
    }

    #[test]
    fn test_insert_anchor_via_projection() {
        let (mut controller, mut state) = cubic_state_with_two_anchors();

        dispatch(
            &mut controller,
            &mut state,
            AppIntent::InsertAnchorRequested {
                position: Vec2::new(200.0, 100.0),
            },
        );
        assert_eq!(state.active_session().data.point_count(), 9);

        // Weit entfernt: kein Treffer, keine Mutation
        dispatch(
            &mut controller,
            &mut state,
            AppIntent::InsertAnchorRequested {
                position: Vec2::new(5000.0, 5000.0),
            },
        );
        assert_eq!(state.active_session().data.point_count(), 9);
    }

    #[test]
    fn test_selection_out_of_bounds_is_rejected() {
        let (mut controller, mut state) = cubic_state_with_two_anchors();

        dispatch(&mut controller, &mut state, AppIntent::PointSelected { index: 99 });
        assert!(state.selected_point.is_none());
    }

    #[test]
    fn test_close_loop_toggle() {
        let (mut controller, mut state) = cubic_state_with_two_anchors();

        dispatch(&mut controller, &mut state, AppIntent::CloseLoopToggled);
        assert!(state.active_session().data.is_closed_loop);
        dispatch(&mut controller, &mut state, AppIntent::CloseLoopToggled);
        assert!(!state.active_session().data.is_closed_loop);
    }

    #[test]
    fn test_point_visibility_also_disables_handle_generation() {
        let (mut controller, mut state) = cubic_state_with_two_anchors();
        assert!(!state.active_session().engine.handle_points().is_empty());

        dispatch(&mut controller, &mut state, AppIntent::PointVisibilityToggled);
        assert!(!state.show_points);
        assert!(state.active_session().engine.handle_points().is_empty());

        dispatch(&mut controller, &mut state, AppIntent::PointVisibilityToggled);
        assert!(!state.active_session().engine.handle_points().is_empty());
    }

    #[test]
    fn test_smooth_factor_clamps() {
        let (mut controller, mut state) = cubic_state_with_two_anchors();

        dispatch(
            &mut controller,
            &mut state,
            AppIntent::SmoothFactorStepped { delta: 1000.0 },
        );
        assert_eq!(state.active_session().data.smooth_factor, SMOOTH_FACTOR_MAX);

        dispatch(
            &mut controller,
            &mut state,
            AppIntent::SmoothFactorStepped { delta: -1000.0 },
        );
        assert_eq!(state.active_session().data.smooth_factor, SMOOTH_FACTOR_MIN);
    }
}
