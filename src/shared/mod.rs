//! Geteilte Konstanten und Optionen für layer-übergreifende Verträge.
//!
//! Enthält Werte, die zwischen `core`, `app` und `ui` geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

pub mod options;

pub use options::EditorOptions;
pub use options::{
    INITIAL_CONTROL_OFFSET, INTERSECT_RADIUS, POINT_RADIUS, SMOOTH_FACTOR_CURVED,
    SMOOTH_FACTOR_LINEAR, SMOOTH_FACTOR_MAX, SMOOTH_FACTOR_MIN,
};
