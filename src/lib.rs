//! Bézier-Kurven-Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;
pub mod ui;

pub use app::{AppController, AppIntent, AppState, CurveSession};
pub use core::{
    AnchorPlacement, ControlMode, CurveData, CurveEngine, CurveHit, CurveType,
};
pub use shared::EditorOptions;
