//! Reine Geometrie-Funktionen für die quadratische Routen-Kurve.
//!
//! Layer-neutral: wird von `ui` und Tests importiert, ohne
//! Zirkel-Abhängigkeiten zu erzeugen.

use glam::Vec2;

use super::options::{CURVE_CONTROL_OFFSET_FACTOR, CURVE_MIDPOINT_FACTOR};

/// Normalisiert einen Vektor über seine betragsgrößte Komponente.
///
/// Achtung: bewusst keine euklidische Norm. Die Form der Routen-Kurve hängt
/// von genau diesem Teiler ab, während die Versätze darunter mit der
/// euklidischen Länge skalieren — die Mischung ist als beobachtetes
/// Verhalten übernommen und möglicherweise ein latenter Defekt.
pub fn normalize_max_component(vector: Vec2) -> Vec2 {
    assert!(
        vector.x != 0.0 || vector.y != 0.0,
        "Nullvektor kann nicht normalisiert werden"
    );

    let max_abs = vector.x.abs().max(vector.y.abs());
    vector / max_abs
}

/// Kontrollpunkt der quadratischen Bezier-Kurve zwischen `from` und `to`.
///
/// Konstruktion: Zwischenpunkt bei 40 % der Streckenlänge in Richtung `to`,
/// danach senkrechter Versatz um 30 % der Streckenlänge.
/// Vorbedingung: `from != to` (Programmierfehler, kein Laufzeitfall).
pub fn quad_curve_control_point(from: Vec2, to: Vec2) -> Vec2 {
    assert!(from != to, "Kurve benötigt zwei verschiedene Punkte");

    let direction = to - from;
    let unit = normalize_max_component(direction);
    let length = direction.length();

    let midpoint = from + unit * length * CURVE_MIDPOINT_FACTOR;
    let perpendicular =
        normalize_max_component(Vec2::new(from.y - midpoint.y, midpoint.x - from.x));

    midpoint + perpendicular * length * CURVE_CONTROL_OFFSET_FACTOR
}

/// Punkt auf der quadratischen Bezier-Kurve (t ∈ [0, 1]).
pub fn quad_bezier_point(p0: Vec2, control: Vec2, p1: Vec2, t: f32) -> Vec2 {
    let inv = 1.0 - t;
    inv * inv * p0 + 2.0 * inv * t * control + t * t * p1
}

/// Dichte Punktliste entlang der Kurve: `samples` Segmente, Endpunkt inklusive.
///
/// Erster und letzter Punkt sind exakt `p0` und `p1`.
pub fn sample_quad_curve(p0: Vec2, control: Vec2, p1: Vec2, samples: usize) -> Vec<Vec2> {
    let samples = samples.max(1);
    let mut result = Vec::with_capacity(samples + 1);

    result.push(p0);
    for i in 1..samples {
        let t = i as f32 / samples as f32;
        result.push(quad_bezier_point(p0, control, p1, t));
    }
    result.push(p1);

    result
}

/// Approximierte Länge einer Polyline.
pub fn polyline_length(points: &[Vec2]) -> f32 {
    points.windows(2).map(|w| w[0].distance(w[1])).sum()
}

/// Punkt bei Bogenlängen-Anteil `fraction` (∈ [0, 1]) entlang einer Polyline.
///
/// Für konstante Geschwindigkeit des umlaufenden Punkts unabhängig von der
/// Parametrisierung der Kurve.
pub fn point_at_fraction(polyline: &[Vec2], fraction: f32) -> Vec2 {
    assert!(!polyline.is_empty(), "Polyline darf nicht leer sein");

    if polyline.len() == 1 {
        return polyline[0];
    }

    let fraction = fraction.clamp(0.0, 1.0);
    let total = polyline_length(polyline);
    if total < f32::EPSILON {
        return polyline[0];
    }

    let mut remaining = total * fraction;
    for window in polyline.windows(2) {
        let segment = window[0].distance(window[1]);
        if remaining <= segment {
            if segment < f32::EPSILON {
                return window[0];
            }
            return window[0].lerp(window[1], remaining / segment);
        }
        remaining -= segment;
    }

    *polyline.last().unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn control_point_for_horizontal_segment() {
        // d=(10,0) → u=(1,0), länge=10, M=(4,0), v=(0,1) → C=(4,3)
        let control = quad_curve_control_point(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0));
        assert_relative_eq!(control.x, 4.0);
        assert_relative_eq!(control.y, 3.0);
    }

    #[test]
    fn control_point_lies_off_segment() {
        let from = Vec2::new(2.0, 1.0);
        let to = Vec2::new(8.0, 5.0);
        let control = quad_curve_control_point(from, to);

        // Abstand des Kontrollpunkts von der Geraden from→to muss > 0 sein
        let direction = (to - from).normalize();
        let relative = control - from;
        let perpendicular = (relative - direction * relative.dot(direction)).length();
        assert!(perpendicular > 0.1);
    }

    #[test]
    #[should_panic]
    fn control_point_rejects_equal_endpoints() {
        let point = Vec2::new(3.0, 3.0);
        let _ = quad_curve_control_point(point, point);
    }

    #[test]
    fn bezier_endpoints_are_exact() {
        let p0 = Vec2::new(0.0, 0.0);
        let p1 = Vec2::new(10.0, 0.0);
        let control = quad_curve_control_point(p0, p1);

        assert_eq!(quad_bezier_point(p0, control, p1, 0.0), p0);
        assert_eq!(quad_bezier_point(p0, control, p1, 1.0), p1);
    }

    #[test]
    fn bezier_midpoint_passes_near_control() {
        let p0 = Vec2::new(0.0, 0.0);
        let p1 = Vec2::new(10.0, 0.0);
        let control = Vec2::new(4.0, 3.0);

        let mid = quad_bezier_point(p0, control, p1, 0.5);
        // B(0.5) = 0.25*p0 + 0.5*C + 0.25*p1
        assert_relative_eq!(mid.x, 4.5);
        assert_relative_eq!(mid.y, 1.5);
    }

    #[test]
    fn sampled_curve_starts_and_ends_exactly() {
        let p0 = Vec2::new(1.0, 2.0);
        let p1 = Vec2::new(-5.0, 7.0);
        let control = quad_curve_control_point(p0, p1);

        let samples = sample_quad_curve(p0, control, p1, 16);

        assert_eq!(samples.len(), 17);
        assert_eq!(samples[0], p0);
        assert_eq!(*samples.last().unwrap(), p1);
    }

    #[test]
    fn polyline_length_of_straight_line() {
        let line = [Vec2::ZERO, Vec2::new(3.0, 4.0)];
        assert_relative_eq!(polyline_length(&line), 5.0);
    }

    #[test]
    fn point_at_fraction_walks_arc_length() {
        let line = [Vec2::ZERO, Vec2::new(4.0, 0.0), Vec2::new(4.0, 4.0)];

        let quarter = point_at_fraction(&line, 0.25);
        assert_relative_eq!(quarter.x, 2.0);
        assert_relative_eq!(quarter.y, 0.0);

        let three_quarters = point_at_fraction(&line, 0.75);
        assert_relative_eq!(three_quarters.x, 4.0);
        assert_relative_eq!(three_quarters.y, 2.0);
    }

    #[test]
    fn point_at_fraction_clamps_out_of_range() {
        let line = [Vec2::ZERO, Vec2::new(1.0, 0.0)];
        assert_eq!(point_at_fraction(&line, -0.5), Vec2::ZERO);
        assert_eq!(point_at_fraction(&line, 1.5), Vec2::new(1.0, 0.0));
    }
}
