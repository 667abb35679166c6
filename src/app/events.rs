//! App-Intent-Events.
//!
//! Intents sind Eingaben aus UI/System ohne direkte Mutationslogik —
//! der `AppController` setzt sie in Engine-Operationen um.

use crate::core::{AnchorPlacement, ControlMode};
use glam::Vec2;

/// Diskrete Edit-Kommandos und UI-Eingaben.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Neuen Anker anhängen (Ctrl+Klick = End, Ctrl+Alt+Klick = Begin)
    AddAnchorRequested {
        position: Vec2,
        placement: AnchorPlacement,
    },
    /// Anker am projizierten Kurvenpunkt einfügen (Ctrl+Shift+Klick)
    InsertAnchorRequested { position: Vec2 },
    /// Selektierten Anker samt Steuerpunkten entfernen (Taste D)
    RemoveAnchorRequested,
    /// Punkt angeklickt — Index in der Roh-Punktliste der aktiven Kurve
    PointSelected { index: usize },
    /// Klick ins Leere — Selektion aufheben
    SelectionCleared,
    /// Selektierten Punkt per Drag verschieben (Shift = Free, sonst Alignment)
    MovePointRequested {
        index: usize,
        position: Vec2,
        mode: ControlMode,
    },
    /// Geschlossene Schleife umschalten (Taste C)
    CloseLoopToggled,
    /// Kurventyp weiterschalten (Taste M): Linear → Quadratisch → Kubisch
    CurveTypeCycled,
    /// Punkt- und Handle-Anzeige umschalten (Taste H)
    PointVisibilityToggled,
    /// Kurven-Primitiv umschalten (Taste B): Linienzug ↔ Punkte
    PrimitiveToggled,
    /// Sampledichte der aktiven Kurve ändern (Tasten + / −)
    SmoothFactorStepped { delta: f32 },
    /// Anwendung beenden (Escape)
    ExitRequested,
}
