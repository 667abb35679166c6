//! Zentrale Konfiguration für den Bézier-Kurven-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Kurven-Engine ───────────────────────────────────────────────────

/// Abstand (Screen-Pixel) der synthetischen Steuerpunkte beim ersten
/// Anker einer noch leeren Kurve.
pub const INITIAL_CONTROL_OFFSET: f32 = 50.0;
/// Suchradius (Screen-Pixel, euklidisch) der Kurven-Projektion.
pub const INTERSECT_RADIUS: f32 = 10.0;
/// Standard-Sampledichte pro Segment für kubische und quadratische Kurven.
pub const SMOOTH_FACTOR_CURVED: f32 = 50.0;
/// Standard-Sampledichte pro Segment für lineare Kurven.
pub const SMOOTH_FACTOR_LINEAR: f32 = 5.0;
/// Minimale einstellbare Sampledichte.
pub const SMOOTH_FACTOR_MIN: f32 = 1.0;
/// Maximale einstellbare Sampledichte.
pub const SMOOTH_FACTOR_MAX: f32 = 100.0;

// ── Punkt-Darstellung ───────────────────────────────────────────────

/// Basis-Radius der Punkt-Kreise in Screen-Pixeln (zugleich Pick-Radius).
pub const POINT_RADIUS: f32 = 10.0;
/// Zusätzlicher Radius beim Hover-Aufwachsen.
pub const HOVER_RADIUS: f32 = 5.0;
/// Radius-Zuwachs der Hover-Animation pro Frame (Pixel).
pub const HOVER_GROWTH_RATE: f32 = 0.875;
/// Outline-Stärke der Punkt-Kreise.
pub const OUTLINE_THICKNESS: f32 = 2.0;

// ── Farben (RGBA) ───────────────────────────────────────────────────

/// Farbe für Punkte unter dem Cursor (Himmelblau).
pub const HOVER_COLOR: [f32; 4] = [0.118, 0.612, 0.937, 1.0];
/// Farbe für den selektierten Punkt (mattes Rot).
pub const SELECTED_COLOR: [f32; 4] = [0.843, 0.373, 0.451, 1.0];
/// Farbe des Einfüge-Vorschaukreises (mattes Grün).
pub const INTERSECT_COLOR: [f32; 4] = [0.231, 0.647, 0.361, 1.0];
/// Füllfarbe nicht selektierter Punkte (Schwarz).
pub const UNSELECTED_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
/// Outline-Farbe der Punkte (Weiß).
pub const OUTLINE_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
/// Farbe der Kurven-Polyline und der Handle-Linien (Weiß).
pub const LINE_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `bezier_curve_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorOptions {
    // ── Punkte ──────────────────────────────────────────────────
    /// Basis-Radius der Punkt-Kreise (Screen-Pixel, zugleich Pick-Radius)
    pub point_radius: f32,
    /// Zusätzlicher Radius beim Hover-Aufwachsen
    pub hover_radius: f32,
    /// Radius-Zuwachs der Hover-Animation pro Frame (Pixel)
    pub hover_growth_rate: f32,
    /// Outline-Stärke der Punkt-Kreise
    pub outline_thickness: f32,

    // ── Engine ──────────────────────────────────────────────────
    /// Suchradius der Kurven-Projektion (Screen-Pixel)
    pub intersect_radius: f32,
    /// Steuerpunkt-Abstand beim ersten Anker (Screen-Pixel)
    #[serde(default = "default_initial_control_offset")]
    pub initial_control_offset: f32,

    // ── Farben ──────────────────────────────────────────────────
    /// Farbe für Punkte unter dem Cursor
    pub hover_color: [f32; 4],
    /// Farbe für den selektierten Punkt
    pub selected_color: [f32; 4],
    /// Farbe des Einfüge-Vorschaukreises
    pub intersect_color: [f32; 4],
    /// Füllfarbe nicht selektierter Punkte
    pub unselected_color: [f32; 4],
    /// Outline-Farbe der Punkte
    pub outline_color: [f32; 4],
    /// Farbe der Kurven- und Handle-Linien
    pub line_color: [f32; 4],
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            point_radius: POINT_RADIUS,
            hover_radius: HOVER_RADIUS,
            hover_growth_rate: HOVER_GROWTH_RATE,
            outline_thickness: OUTLINE_THICKNESS,

            intersect_radius: INTERSECT_RADIUS,
            initial_control_offset: INITIAL_CONTROL_OFFSET,

            hover_color: HOVER_COLOR,
            selected_color: SELECTED_COLOR,
            intersect_color: INTERSECT_COLOR,
            unselected_color: UNSELECTED_COLOR,
            outline_color: OUTLINE_COLOR,
            line_color: LINE_COLOR,
        }
    }
}

/// Serde-Default für `initial_control_offset` (Abwärtskompatibilität
/// bestehender TOML-Dateien).
fn default_initial_control_offset() -> f32 {
    INITIAL_CONTROL_OFFSET
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("bezier_curve_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("bezier_curve_editor.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_match_constants() {
        let opts = EditorOptions::default();
        assert_eq!(opts.point_radius, POINT_RADIUS);
        assert_eq!(opts.intersect_radius, INTERSECT_RADIUS);
        assert_eq!(opts.initial_control_offset, INITIAL_CONTROL_OFFSET);
        assert_eq!(opts.hover_color, HOVER_COLOR);
    }

    #[test]
    fn test_options_toml_roundtrip() {
        let mut opts = EditorOptions::default();
        opts.point_radius = 14.0;
        opts.intersect_radius = 20.0;

        let toml_str = toml::to_string_pretty(&opts).expect("Serialisierung erwartet");
        let restored: EditorOptions = toml::from_str(&toml_str).expect("Parsen erwartet");

        assert_eq!(restored.point_radius, 14.0);
        assert_eq!(restored.intersect_radius, 20.0);
        assert_eq!(restored.hover_color, opts.hover_color);
    }

    #[test]
    fn test_options_missing_field_falls_back() {
        // TOML ohne `initial_control_offset` → Serde-Default greift
        let opts = EditorOptions::default();
        let toml_str = toml::to_string_pretty(&opts).expect("Serialisierung erwartet");
        let stripped = toml_str
            .lines()
            .filter(|l| !l.starts_with("initial_control_offset"))
            .collect::<Vec<_>>()
            .join("\n");

        let restored: EditorOptions = toml::from_str(&stripped).expect("Parsen erwartet");
        assert_eq!(restored.initial_control_offset, INITIAL_CONTROL_OFFSET);
    }
}
