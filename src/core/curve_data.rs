//! Die zentrale Kurven-Datenstruktur: Punktliste, Typ und Sampling-Parameter.

use crate::shared::{SMOOTH_FACTOR_CURVED, SMOOTH_FACTOR_LINEAR};
use glam::Vec2;

/// Grad der Bézier-Kurve — bestimmt die Aufteilung der Punktliste in Segmente.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveType {
    /// Jeder Punkt ist Anker, keine Steuerpunkte
    Linear,
    /// Ein geteilter Steuerpunkt pro Segment
    Quadratic,
    /// Zwei Steuerpunkte pro Segment
    Cubic,
}

impl CurveType {
    /// Punkte pro Segment-Schritt (1 linear, 2 quadratisch, 3 kubisch).
    pub fn stride(self) -> usize {
        match self {
            CurveType::Linear => 1,
            CurveType::Quadratic => 2,
            CurveType::Cubic => 3,
        }
    }

    /// Minimale Punktanzahl für ein abtastbares Segment.
    pub fn min_points(self) -> usize {
        match self {
            CurveType::Linear => 2,
            CurveType::Quadratic | CurveType::Cubic => 4,
        }
    }

    /// Schwelle für das Schließ-Segment: gesampelt nur wenn
    /// `len > min_points_closed()`.
    pub fn min_points_closed(self) -> usize {
        match self {
            CurveType::Linear => 2,
            CurveType::Quadratic => 4,
            CurveType::Cubic => 6,
        }
    }

    /// Schwelle für die Projektion: Suche nur wenn
    /// `len > min_points_projection()`.
    pub fn min_points_projection(self) -> usize {
        match self {
            CurveType::Linear => 1,
            CurveType::Quadratic => 3,
            CurveType::Cubic => 5,
        }
    }

    /// Hat dieser Kurventyp eigenständige Steuerpunkte?
    pub fn has_control_points(self) -> bool {
        !matches!(self, CurveType::Linear)
    }

    /// Standard-Sampledichte pro Segment.
    pub fn default_smooth_factor(self) -> f32 {
        match self {
            CurveType::Linear => SMOOTH_FACTOR_LINEAR,
            CurveType::Quadratic | CurveType::Cubic => SMOOTH_FACTOR_CURVED,
        }
    }

    /// Anzahl expliziter Segmente für eine Liste von `len` Punkten.
    pub fn segment_count(self, len: usize) -> usize {
        match self {
            CurveType::Linear => len.saturating_sub(1),
            CurveType::Quadratic => (len / 2).saturating_sub(1),
            CurveType::Cubic => (len / 3).saturating_sub(1),
        }
    }

    /// Prüft ob der Index ein Ankerpunkt ist (die Kurve läuft durch ihn).
    ///
    /// Kubisch: Anker bei Index 1, 4, 7, … — die Liste beginnt mit dem
    /// linken Steuerpunkt des ersten Ankers. Quadratisch: Anker auf den
    /// geraden Indizes. Linear: jeder Punkt ist Anker.
    pub fn is_anchor(self, index: usize) -> bool {
        match self {
            CurveType::Linear => true,
            CurveType::Quadratic => index % 2 == 0,
            CurveType::Cubic => index % 3 == 1,
        }
    }

    /// Liefert den Index des nächstgelegenen Ankerpunkts.
    ///
    /// Kubisch: der rechte Steuerpunkt (Index ≡ 2 mod 3) gehört zum Anker
    /// davor, der linke (Index ≡ 0 mod 3) zum Anker danach. Keine
    /// Bereichsprüfung — der Aufrufer validiert gegen die Listenlänge.
    pub fn closest_anchor(self, index: usize) -> usize {
        match self {
            CurveType::Linear => index,
            CurveType::Quadratic => {
                if index % 2 == 0 {
                    index
                } else {
                    index - 1
                }
            }
            CurveType::Cubic => match index % 3 {
                1 => index,
                2 => index - 1,
                _ => index + 1,
            },
        }
    }
}

/// Modus beim Verschieben eines Steuerpunkts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlMode {
    /// Nur der angefasste Steuerpunkt bewegt sich (Handles dürfen asymmetrisch werden)
    Free,
    /// Der gegenüberliegende Steuerpunkt wird am Anker gespiegelt (C¹-Stetigkeit)
    Alignment,
}

/// Einfüge-Seite beim Anhängen eines neuen Ankers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorPlacement {
    /// Vor dem ersten Anker einfügen
    Begin,
    /// Hinter dem letzten Anker anhängen
    End,
}

/// Punktliste einer Kurve samt Sampling-Parametern.
///
/// Gehört exklusiv einer Editor-Session; die Engine bekommt sie pro
/// Operation als geliehenen Parameter und besitzt sie nie selbst.
#[derive(Debug, Clone)]
pub struct CurveData {
    /// Rohe Punktliste — die Reihenfolge definiert die Segment-Topologie
    pub points: Vec<Vec2>,
    /// Geschlossene Schleife: implizites Segment vom Ende zurück zum Anfang
    pub is_closed_loop: bool,
    /// Handle-Liniensegmente beim Resampling miterzeugen?
    pub handles_generated: bool,
    /// Sampledichte: Anzahl Interpolationsschritte pro Segment
    pub smooth_factor: f32,
    /// Kurventyp — fest ab Konstruktion
    curve_type: CurveType,
}

impl CurveData {
    /// Erstellt eine leere Kurve mit typ-spezifischer Standard-Sampledichte.
    pub fn new(curve_type: CurveType) -> Self {
        Self {
            points: Vec::new(),
            is_closed_loop: false,
            handles_generated: true,
            smooth_factor: curve_type.default_smooth_factor(),
            curve_type,
        }
    }

    /// Der Kurventyp (unveränderlich seit Konstruktion).
    pub fn curve_type(&self) -> CurveType {
        self.curve_type
    }

    /// Anzahl der Punkte in der Liste.
    pub fn point_count(&self) -> usize {
        self.points.len()
    }
}
