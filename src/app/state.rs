//! App-Zustand: eine unabhängige Kurven-Session pro Kurventyp plus
//! Selektions- und Anzeige-Flags.

use crate::core::{CurveData, CurveEngine, CurveType};
use crate::shared::EditorOptions;

/// Eine Kurven-Session: Punktliste plus Engine mit ihren Caches.
///
/// Die `CurveData` gehört der Session; die Engine bekommt sie pro
/// Operation geliehen und hält selbst nur die abgeleiteten Caches.
pub struct CurveSession {
    /// Punktliste und Sampling-Parameter
    pub data: CurveData,
    /// Kurven-Motor mit Polyline- und Handle-Cache
    pub engine: CurveEngine,
}

impl CurveSession {
    /// Erstellt eine leere Session für den Kurventyp.
    pub fn new(curve_type: CurveType) -> Self {
        Self {
            data: CurveData::new(curve_type),
            engine: CurveEngine::new(),
        }
    }

    /// Resampelt die Kurve aus dem aktuellen Datenstand.
    pub fn refresh(&mut self) {
        self.engine.interpolate_points(&self.data);
    }
}

/// Reihenfolge der Sessions — zugleich die Zyklus-Reihenfolge der Taste M.
const CURVE_TYPE_ORDER: [CurveType; 3] =
    [CurveType::Linear, CurveType::Quadratic, CurveType::Cubic];

/// Gesamter App-Zustand des Editors.
pub struct AppState {
    /// Eine Session pro Kurventyp — Typwechsel verliert keine Punktlisten
    pub sessions: [CurveSession; 3],
    /// Index der aktiven Session in `sessions`
    active: usize,
    /// Selektierter Punkt (Index in der Roh-Punktliste der aktiven Kurve)
    pub selected_point: Option<usize>,
    /// Punkte und Handle-Linien anzeigen?
    pub show_points: bool,
    /// Kurve als Linienzug zeichnen (sonst als Einzelpunkte)
    pub stroke_as_line: bool,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
    /// Beenden angefordert
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt den Startzustand: drei leere Sessions, Linear aktiv.
    pub fn new() -> Self {
        Self {
            sessions: CURVE_TYPE_ORDER.map(CurveSession::new),
            active: 0,
            selected_point: None,
            show_points: true,
            stroke_as_line: true,
            options: EditorOptions::default(),
            should_exit: false,
        }
    }

    /// Die aktive Kurven-Session.
    pub fn active_session(&self) -> &CurveSession {
        &self.sessions[self.active]
    }

    /// Die aktive Kurven-Session (veränderbar).
    pub fn active_session_mut(&mut self) -> &mut CurveSession {
        &mut self.sessions[self.active]
    }

    /// Der Kurventyp der aktiven Session.
    pub fn active_curve_type(&self) -> CurveType {
        self.active_session().data.curve_type()
    }

    /// Schaltet zur nächsten Session weiter (Linear → Quadratisch →
    /// Kubisch → Linear), hebt die Selektion auf und resampelt.
    pub fn cycle_curve_type(&mut self) {
        self.active = (self.active + 1) % self.sessions.len();
        self.selected_point = None;
        self.active_session_mut().refresh();
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = AppState::new();
        assert_eq!(state.active_curve_type(), CurveType::Linear);
        assert!(state.selected_point.is_none());
        assert!(state.show_points);
        assert!(state.stroke_as_line);
        assert!(!state.should_exit);
    }

    #[test]
    fn test_cycle_order() {
        let mut state = AppState::new();
        state.cycle_curve_type();
        assert_eq!(state.active_curve_type(), CurveType::Quadratic);
        state.cycle_curve_type();
        assert_eq!(state.active_curve_type(), CurveType::Cubic);
        state.cycle_curve_type();
        assert_eq!(state.active_curve_type(), CurveType::Linear);
    }

    #[test]
    fn test_cycle_clears_selection_but_keeps_points() {
        use crate::core::AnchorPlacement;
        use glam::Vec2;

        let mut state = AppState::new();
        let session = state.active_session_mut();
        session
            .engine
            .add_anchor(&mut session.data, Vec2::new(10.0, 10.0), AnchorPlacement::End);
        state.selected_point = Some(0);

        state.cycle_curve_type();
        assert!(state.selected_point.is_none());

        // Zurück zur linearen Session: Punktliste ist erhalten
        state.cycle_curve_type();
        state.cycle_curve_type();
        assert_eq!(state.active_curve_type(), CurveType::Linear);
        assert_eq!(state.active_session().data.point_count(), 1);
    }
}
