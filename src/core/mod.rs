//! Core-Domänentypen: Kurven-Daten, Geometrie-Kern und Kurven-Motor.

pub mod curve_data;
pub mod engine;
pub mod geometry;

pub use curve_data::{AnchorPlacement, ControlMode, CurveData, CurveType};
pub use engine::{CurveEngine, CurveHit};
pub use geometry::{cubic_point, linear_point, quadratic_point};
