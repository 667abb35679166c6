//! Der Kurven-Motor: Mutationen auf der Punktliste, Resampling der
//! Polyline und Projektion von Cursor-Positionen auf die Kurve.
//!
//! Die Engine besitzt ausschließlich die beiden abgeleiteten Caches
//! (Polyline + Handle-Liste). Die `CurveData` selbst wird jeder
//! Operation als geliehener Parameter übergeben — so kann die Engine
//! die Daten weder besitzen noch überleben.

use glam::Vec2;

use super::curve_data::{AnchorPlacement, ControlMode, CurveData, CurveType};
use super::geometry::{cubic_point, linear_point, quadratic_point};
use crate::shared::INITIAL_CONTROL_OFFSET;

/// Schrittweiten-Epsilon: fängt Gleitkomma-Drift ab, wenn die
/// aufsummierte Schrittweite 1.0 nicht exakt erreicht.
const T_EPSILON: f32 = 1e-4;

/// Treffer einer Kurven-Projektion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveHit {
    /// Erster Kurven-Sample innerhalb des Suchradius
    pub position: Vec2,
    /// Index des ersten Steuerpunkts des getroffenen Segments
    /// (von `insert_anchor` als Einfüge-Anker verwendet)
    pub insert_index: usize,
}

/// Kurven-Motor mit den beiden abgeleiteten Caches.
#[derive(Debug, Default)]
pub struct CurveEngine {
    /// Abgetastete Polyline in Segment-Reihenfolge (Cache)
    curve: Vec<Vec2>,
    /// Handle-Liniensegmente als flache Endpunkt-Paare (Cache)
    handles: Vec<Vec2>,
}

impl CurveEngine {
    /// Erstellt eine Engine mit leeren Caches.
    pub fn new() -> Self {
        Self::default()
    }

    /// Die abgetastete Polyline (konsistent zum letzten Resampling).
    pub fn curve_points(&self) -> &[Vec2] {
        &self.curve
    }

    /// Handle-Linien als flache Endpunkt-Paare: je zwei aufeinander
    /// folgende Punkte bilden ein Liniensegment Anker ↔ Steuerpunkt.
    pub fn handle_points(&self) -> &[Vec2] {
        &self.handles
    }

    // ── Roh-Operationen ─────────────────────────────────────────────

    /// Hängt einen rohen Punkt an. Kein Resampling — Anker-Operationen
    /// fügen mehrere Punkte am Stück ein und resampeln einmal am Ende.
    pub fn add_point(&mut self, data: &mut CurveData, point: Vec2) {
        data.points.push(point);
    }

    /// Fügt einen rohen Punkt bei `index` ein (`0..=len`).
    pub fn insert_point(&mut self, data: &mut CurveData, point: Vec2, index: usize) -> bool {
        if index > data.points.len() {
            log::warn!(
                "insert_point: Index {} außerhalb von 0..={}",
                index,
                data.points.len()
            );
            return false;
        }
        data.points.insert(index, point);
        true
    }

    /// Entfernt den rohen Punkt bei `index` (`0..len`).
    pub fn delete_point(&mut self, data: &mut CurveData, index: usize) -> bool {
        if index >= data.points.len() {
            log::warn!(
                "delete_point: Index {} außerhalb von 0..{}",
                index,
                data.points.len()
            );
            return false;
        }
        data.points.remove(index);
        true
    }

    // ── Punkt-Mutation ──────────────────────────────────────────────

    /// Verschiebt einen bestehenden Punkt.
    ///
    /// - Anker: die beiden benachbarten Steuerpunkte werden starr um
    ///   dasselbe Delta mitbewegt (die Handle-Form bleibt erhalten).
    /// - Steuerpunkt, `Free`: nur der angefasste Punkt bewegt sich.
    /// - Steuerpunkt, `Alignment`: der gegenüberliegende Steuerpunkt
    ///   wird auf die Spiegelung durch den Anker gesetzt (`A − d` für
    ///   den bewegten Punkt bei `A + d`).
    pub fn update_point(
        &mut self,
        data: &mut CurveData,
        index: usize,
        position: Vec2,
        mode: ControlMode,
    ) -> bool {
        let len = data.points.len();
        if index >= len {
            log::warn!("update_point: Index {} außerhalb von 0..{}", index, len);
            return false;
        }

        let ty = data.curve_type();
        if ty.is_anchor(index) {
            let delta = position - data.points[index];
            if ty.has_control_points() {
                if index > 0 {
                    data.points[index - 1] += delta;
                }
                if index + 1 < len {
                    data.points[index + 1] += delta;
                }
            }
            data.points[index] = position;
        } else {
            match mode {
                ControlMode::Free => {
                    data.points[index] = position;
                }
                ControlMode::Alignment => {
                    let anchor = ty.closest_anchor(index);
                    if anchor >= len {
                        log::warn!(
                            "update_point: Anker {} zu Steuerpunkt {} existiert nicht",
                            anchor,
                            index
                        );
                        return false;
                    }
                    let delta = position - data.points[anchor];
                    data.points[index] = position;

                    let opposite = if index + 1 == anchor {
                        Some(anchor + 1)
                    } else {
                        anchor.checked_sub(1)
                    };
                    if let Some(opposite) = opposite.filter(|&o| o < len) {
                        data.points[opposite] = data.points[anchor] - delta;
                    }
                }
            }
        }

        self.interpolate_points(data);
        true
    }

    // ── Anker-Operationen ───────────────────────────────────────────

    /// Fügt einen vollständigen Anker samt synthetischer Steuerpunkte
    /// am Anfang oder Ende der Kurve hinzu.
    ///
    /// Unterhalb eines vollen Segments entstehen die Steuerpunkte im
    /// festen Abstand links/rechts entlang der x-Achse. Danach werden
    /// die Steuerpunkt-Offsets des nächstgelegenen bestehenden Ankers
    /// übernommen — das neue Segment erbt die lokale Tangenten-Form.
    pub fn add_anchor(&mut self, data: &mut CurveData, point: Vec2, placement: AnchorPlacement) {
        match data.curve_type() {
            CurveType::Linear => match placement {
                AnchorPlacement::End => data.points.push(point),
                AnchorPlacement::Begin => data.points.insert(0, point),
            },
            CurveType::Quadratic => add_anchor_quadratic(data, point, placement),
            CurveType::Cubic => add_anchor_cubic(data, point, placement),
        }

        self.interpolate_points(data);
    }

    /// Fügt einen neuen Anker mitten in der Kurve ein — `index` ist der
    /// von `intersection_on_curve` gelieferte Einfüge-Anker.
    ///
    /// Die synthetischen Steuerpunkt-Offsets halbieren den Abstand zum
    /// jeweiligen Nachbar-Steuerpunkt, so entsteht eine glättende
    /// Einfügung statt einer scharfen Ecke.
    pub fn insert_anchor(&mut self, data: &mut CurveData, point: Vec2, index: usize) -> bool {
        if index <= 1 {
            log::warn!(
                "insert_anchor: Index {} liegt vor dem ersten vollen Anker",
                index
            );
            return false;
        }

        let len = data.points.len();
        match data.curve_type() {
            CurveType::Cubic => {
                let anchor = CurveType::Cubic.closest_anchor(index);
                if anchor + 2 >= len {
                    log::warn!(
                        "insert_anchor: Segment hinter Index {} ist unvollständig",
                        index
                    );
                    return false;
                }
                let offset_l = (point - data.points[anchor + 2]) / 2.0;
                let offset_r = (point - data.points[anchor + 1]) / 2.0;
                data.points.insert(index + 1, point + offset_r);
                data.points.insert(index + 1, point);
                data.points.insert(index + 1, point + offset_l);
            }
            CurveType::Quadratic => {
                if index >= len {
                    log::warn!("insert_anchor: Index {} außerhalb von 0..{}", index, len);
                    return false;
                }
                // `index` ist der geteilte Steuerpunkt des getroffenen Segments
                let offset = (point - data.points[index]) / 2.0;
                data.points.insert(index + 1, point + offset);
                data.points.insert(index + 1, point);
            }
            CurveType::Linear => {
                if index > len {
                    log::warn!("insert_anchor: Index {} außerhalb von 0..={}", index, len);
                    return false;
                }
                data.points.insert(index, point);
            }
        }

        self.interpolate_points(data);
        true
    }

    /// Entfernt den Anker am nächstgelegenen Anker-Index samt seiner
    /// Steuerpunkte (kubisch: drei aufeinanderfolgende Punkte).
    pub fn remove_anchor(&mut self, data: &mut CurveData, index: usize) -> bool {
        let ty = data.curve_type();
        let len = data.points.len();
        if index >= len {
            log::warn!("remove_anchor: Index {} außerhalb von 0..{}", index, len);
            return false;
        }

        match ty {
            CurveType::Cubic => {
                if len < 3 {
                    log::warn!("remove_anchor: Punktliste zu kurz für einen Anker-Drilling");
                    return false;
                }
                let anchor = ty.closest_anchor(index);
                if anchor == 0 || anchor + 1 >= len {
                    log::warn!("remove_anchor: Anker {} hat keine vollständigen Handles", anchor);
                    return false;
                }
                data.points.drain(anchor - 1..=anchor + 1);
            }
            CurveType::Quadratic => {
                let anchor = ty.closest_anchor(index);
                let end = (anchor + 2).min(len);
                data.points.drain(anchor..end);
            }
            CurveType::Linear => {
                data.points.remove(index);
            }
        }

        self.interpolate_points(data);
        true
    }

    /// Setzt das Schleifen-Flag und resampelt. Das Schließ-Segment wird
    /// erst oberhalb der typ-spezifischen Mindestpunktzahl gesampelt.
    pub fn close_loop(&mut self, data: &mut CurveData, close: bool) {
        data.is_closed_loop = close;
        self.interpolate_points(data);
    }

    // ── Resampling ──────────────────────────────────────────────────

    /// Berechnet Polyline und Handle-Liste vollständig neu.
    ///
    /// Einziger Recompute-Einstiegspunkt, wird nach jeder Mutation
    /// aufgerufen. Das Ergebnis hängt nur vom aktuellen Zustand der
    /// `CurveData` ab — zweimaliges Aufrufen liefert identische Caches.
    pub fn interpolate_points(&mut self, data: &CurveData) {
        self.curve.clear();
        self.handles.clear();

        if !data.smooth_factor.is_finite() || data.smooth_factor <= 0.0 {
            log::warn!(
                "interpolate_points: ungültiger smooth_factor {}",
                data.smooth_factor
            );
            return;
        }

        match data.curve_type() {
            CurveType::Cubic => self.resample_cubic(data),
            CurveType::Quadratic => self.resample_quadratic(data),
            CurveType::Linear => self.resample_linear(data),
        }
    }

    fn resample_cubic(&mut self, data: &CurveData) {
        let points = &data.points;
        let len = points.len();
        let ty = CurveType::Cubic;

        if len >= ty.min_points() {
            for i in 0..ty.segment_count(len) {
                let (a, b, c, d) = (i * 3 + 1, i * 3 + 2, i * 3 + 3, i * 3 + 4);
                push_segment_samples(&mut self.curve, data.smooth_factor, |t| {
                    cubic_point(points[a], points[b], points[c], points[d], t)
                });

                if data.handles_generated {
                    self.handles.extend_from_slice(&[
                        points[a],
                        points[a - 1],
                        points[a],
                        points[b],
                        points[d],
                        points[c],
                        points[d],
                        points[d + 1],
                    ]);
                }
            }

            if data.is_closed_loop && len > ty.min_points_closed() {
                push_segment_samples(&mut self.curve, data.smooth_factor, |t| {
                    cubic_point(points[len - 2], points[len - 1], points[0], points[1], t)
                });
            }
        } else if len >= 3 && data.handles_generated {
            // Teil-Vorschau: Handles des ersten Ankers, Kurve noch nicht zeichenbar
            self.handles
                .extend_from_slice(&[points[1], points[0], points[1], points[2]]);
        } else {
            log::warn!("Zu wenige Punkte für ein kubisches Segment ({})", len);
        }
    }

    fn resample_quadratic(&mut self, data: &CurveData) {
        let points = &data.points;
        let len = points.len();
        let ty = CurveType::Quadratic;

        if len >= ty.min_points() {
            for i in 0..ty.segment_count(len) {
                let (a, b, d) = (i * 2, i * 2 + 1, i * 2 + 2);
                push_segment_samples(&mut self.curve, data.smooth_factor, |t| {
                    quadratic_point(points[a], points[b], points[d], t)
                });

                if data.handles_generated {
                    self.handles.extend_from_slice(&[
                        points[a],
                        points[b],
                        points[d],
                        points[b],
                        points[d],
                        points[d + 1],
                    ]);
                }
            }

            if data.is_closed_loop && len > ty.min_points_closed() {
                push_segment_samples(&mut self.curve, data.smooth_factor, |t| {
                    quadratic_point(points[len - 2], points[len - 1], points[0], t)
                });
            }
        } else if len >= 3 && data.handles_generated {
            self.handles
                .extend_from_slice(&[points[1], points[0], points[1], points[2]]);
        } else {
            log::warn!("Zu wenige Punkte für ein quadratisches Segment ({})", len);
        }
    }

    fn resample_linear(&mut self, data: &CurveData) {
        let points = &data.points;
        let len = points.len();
        let ty = CurveType::Linear;

        if len >= ty.min_points() {
            for i in 0..ty.segment_count(len) {
                push_segment_samples(&mut self.curve, data.smooth_factor, |t| {
                    linear_point(points[i], points[i + 1], t)
                });
            }

            if data.is_closed_loop && len > ty.min_points_closed() {
                push_segment_samples(&mut self.curve, data.smooth_factor, |t| {
                    linear_point(points[len - 1], points[0], t)
                });
            }
        } else {
            log::warn!("Zu wenige Punkte für ein lineares Segment ({})", len);
        }
    }

    // ── Projektion ──────────────────────────────────────────────────

    /// Projiziert eine Cursor-Position auf die Kurve.
    ///
    /// Tastet jedes Segment mit doppelter Dichte ab und liefert den
    /// ERSTEN Sample innerhalb von `radius` — Scan-Reihenfolge ist
    /// Segment aufsteigend, t aufsteigend. Das ist bewusst kein echtes
    /// Minimal-Abstand-Matching: die Einfüge-Position hängt von dieser
    /// Reihenfolge ab.
    pub fn intersection_on_curve(
        &self,
        data: &CurveData,
        query: Vec2,
        radius: f32,
    ) -> Option<CurveHit> {
        let ty = data.curve_type();
        let points = &data.points;
        let len = points.len();

        if len <= ty.min_points_projection() {
            return None;
        }
        if !data.smooth_factor.is_finite() || data.smooth_factor <= 0.0 {
            return None;
        }

        let step_size = 1.0 / (data.smooth_factor * 2.0);

        for i in 0..ty.segment_count(len) {
            let mut t = 0.0f32;
            while t <= 1.0 + T_EPSILON {
                let tc = t.min(1.0);
                let sample = match ty {
                    CurveType::Cubic => cubic_point(
                        points[i * 3 + 1],
                        points[i * 3 + 2],
                        points[i * 3 + 3],
                        points[i * 3 + 4],
                        tc,
                    ),
                    CurveType::Quadratic => quadratic_point(
                        points[i * 2],
                        points[i * 2 + 1],
                        points[i * 2 + 2],
                        tc,
                    ),
                    CurveType::Linear => linear_point(points[i], points[i + 1], tc),
                };

                if sample.distance(query) <= radius {
                    let insert_index = match ty {
                        CurveType::Cubic => i * 3 + 2,
                        CurveType::Quadratic => i * 2 + 1,
                        CurveType::Linear => i + 1,
                    };
                    return Some(CurveHit {
                        position: sample,
                        insert_index,
                    });
                }

                t += step_size;
            }
        }

        None
    }
}

/// Tastet ein Segment mit `t: 0 → 1` in Schritten von `1/smooth_factor`
/// ab. Der letzte Schritt wird exakt auf 1.0 geklemmt, damit das
/// Segment-Ende trotz Gleitkomma-Drift immer gesampelt wird.
fn push_segment_samples(curve: &mut Vec<Vec2>, smooth_factor: f32, eval: impl Fn(f32) -> Vec2) {
    let step_size = 1.0 / smooth_factor;
    let mut t = 0.0f32;
    while t <= 1.0 + T_EPSILON {
        curve.push(eval(t.min(1.0)));
        t += step_size;
    }
}

/// Kubischer Anker-Drilling `[C_links, Anker, C_rechts]`.
fn add_anchor_cubic(data: &mut CurveData, point: Vec2, placement: AnchorPlacement) {
    let points = &mut data.points;

    if points.len() < CurveType::Cubic.min_points() {
        let offset = Vec2::new(INITIAL_CONTROL_OFFSET, 0.0);
        points.push(point - offset);
        points.push(point);
        points.push(point + offset);
        return;
    }

    match placement {
        AnchorPlacement::End => {
            let anchor = points.len() - 2;
            let offset_l = points[anchor - 1] - points[anchor];
            let offset_r = points[anchor + 1] - points[anchor];
            points.push(point + offset_l);
            points.push(point);
            points.push(point + offset_r);
        }
        AnchorPlacement::Begin => {
            let anchor = CurveType::Cubic.closest_anchor(0);
            let offset_l = points[anchor - 1] - points[anchor];
            let offset_r = points[anchor + 1] - points[anchor];
            points.insert(0, point + offset_r);
            points.insert(0, point);
            points.insert(0, point + offset_l);
        }
    }
}

/// Quadratisches Anker-Paar `[Anker, C_vorwärts]`.
fn add_anchor_quadratic(data: &mut CurveData, point: Vec2, placement: AnchorPlacement) {
    let points = &mut data.points;

    if points.len() < 3 {
        points.push(point);
        points.push(point + Vec2::new(INITIAL_CONTROL_OFFSET, 0.0));
        return;
    }

    match placement {
        AnchorPlacement::End => {
            let anchor = points.len() - 2;
            let offset = points[anchor + 1] - points[anchor];
            points.push(point);
            points.push(point + offset);
        }
        AnchorPlacement::Begin => {
            let offset = points[1] - points[0];
            points.insert(0, point + offset);
            points.insert(0, point);
        }
    }
}
