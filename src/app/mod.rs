//! App-Schicht: Zustand, Intents und Controller.

pub mod controller;
pub mod events;
pub mod state;

pub use controller::AppController;
pub use events::AppIntent;
pub use state::{AppState, CurveSession};
