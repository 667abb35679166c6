//! Reine Geometrie-Funktionen: Bézier-Auswertung per de-Casteljau-Kette.
//!
//! Layer-neutral: kann von `core`, `app` und `ui` importiert werden
//! ohne Zirkel-Abhängigkeiten zu erzeugen.

use glam::Vec2;

/// B(t) = a + t·(b − a) — lineares Segment.
pub fn linear_point(a: Vec2, b: Vec2, t: f32) -> Vec2 {
    a.lerp(b, t)
}

/// Quadratische Bézier-Auswertung als verschachtelte Lerps:
/// `lerp(lerp(a,b,t), lerp(b,c,t), t)`.
///
/// Bewusst dieselbe Formulierung für alle t ∈ [0,1] — kein Sonderfall
/// an den Endpunkten, sonst entstehen sichtbare Nahtstellen zwischen
/// Segmenten.
pub fn quadratic_point(a: Vec2, b: Vec2, c: Vec2, t: f32) -> Vec2 {
    let q0 = a.lerp(b, t);
    let q1 = b.lerp(c, t);
    q0.lerp(q1, t)
}

/// Kubische Bézier-Auswertung (de Casteljau auf 4 Kontrollpunkten):
/// `lerp(quad(a,b,c,t), quad(b,c,d,t), t)`.
pub fn cubic_point(a: Vec2, b: Vec2, c: Vec2, d: Vec2, t: f32) -> Vec2 {
    let q0 = quadratic_point(a, b, c, t);
    let q1 = quadratic_point(b, c, d, t);
    q0.lerp(q1, t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_linear_point_endpoints_and_midpoint() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(10.0, 4.0);

        assert_eq!(linear_point(a, b, 0.0), a);
        assert_eq!(linear_point(a, b, 1.0), b);
        assert_relative_eq!(linear_point(a, b, 0.5).x, 5.0);
        assert_relative_eq!(linear_point(a, b, 0.5).y, 2.0);
    }

    #[test]
    fn test_quadratic_point_endpoints() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(5.0, 10.0);
        let c = Vec2::new(10.0, 0.0);

        assert!((quadratic_point(a, b, c, 0.0) - a).length() < 1e-4);
        assert!((quadratic_point(a, b, c, 1.0) - c).length() < 1e-4);
        // B(0.5) = 0.25·a + 0.5·b + 0.25·c
        let mid = quadratic_point(a, b, c, 0.5);
        assert!((mid - Vec2::new(5.0, 5.0)).length() < 1e-4);
    }

    #[test]
    fn test_cubic_point_endpoints() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(3.0, 10.0);
        let c = Vec2::new(7.0, 10.0);
        let d = Vec2::new(10.0, 0.0);

        assert!((cubic_point(a, b, c, d, 0.0) - a).length() < 1e-4);
        assert!((cubic_point(a, b, c, d, 1.0) - d).length() < 1e-4);
    }

    #[test]
    fn test_cubic_point_midpoint_weights() {
        // B(0.5) = 0.125·P0 + 0.375·P1 + 0.375·P2 + 0.125·P3
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(0.0, 10.0);
        let c = Vec2::new(10.0, 0.0);
        let d = Vec2::new(10.0, 10.0);

        let mid = cubic_point(a, b, c, d, 0.5);
        assert!((mid - Vec2::new(5.0, 5.0)).length() < 1e-4);
    }

    #[test]
    fn test_lerp_chain_matches_bernstein_form() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(3.0, 10.0);
        let c = Vec2::new(7.0, 10.0);
        let d = Vec2::new(10.0, 0.0);

        for i in 0..=20 {
            let t = i as f32 / 20.0;
            let inv = 1.0 - t;

            // B(t) = (1-t)²·P0 + 2(1-t)t·P1 + t²·P2
            let quad_bernstein = inv * inv * a + 2.0 * inv * t * b + t * t * c;
            assert!((quadratic_point(a, b, c, t) - quad_bernstein).length() < 1e-4);

            // B(t) = (1-t)³·P0 + 3(1-t)²t·P1 + 3(1-t)t²·P2 + t³·P3
            let cubic_bernstein = inv * inv * inv * a
                + 3.0 * inv * inv * t * b
                + 3.0 * inv * t * t * c
                + t * t * t * d;
            assert!((cubic_point(a, b, c, d, t) - cubic_bernstein).length() < 1e-4);
        }
    }
}
