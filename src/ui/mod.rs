//! UI-Schicht: Eingabe-Mapping, Viewport-Darstellung und Status-Bar.

pub mod input;
pub mod status;
pub mod viewport;

pub use input::InputState;
pub use status::render_status_bar;
pub use viewport::CurveOverlay;
