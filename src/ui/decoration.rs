//! Zwei-stufige Routen-Animation: Stroke-Reveal plus umlaufender Punkt.

use glam::Vec2;

use crate::shared::geometry::{point_at_fraction, quad_curve_control_point, sample_quad_curve};
use crate::shared::options::{CURVE_SAMPLES, PATH_COLOR, PATH_REVEAL_SECS};

/// Animierter Routen-Pfad zwischen zwei Screen-Punkten.
///
/// Stufe (a): die Kurve wird über [`PATH_REVEAL_SECS`] von 0 % auf 100 %
/// gezeichnet und bleibt danach vollständig stehen. Stufe (b): ein Punkt
/// umläuft die Kurve unbegrenzt mit derselben Rundendauer, startend
/// gleichzeitig mit (a). Gestoppt wird durch Verwerfen des Animators —
/// ohne Ausblend-Animation.
#[derive(Debug)]
pub struct PathRevealAnimator {
    start: Vec2,
    control: Vec2,
    end: Vec2,
    samples: Vec<Vec2>,
    stroke_elapsed: f32,
    lap_elapsed: f32,
}

impl PathRevealAnimator {
    /// Baut die Kurve zwischen zwei Screen-Punkten.
    /// Vorbedingung: `from != to` (Programmierfehler, kein Laufzeitfall).
    pub fn new(from: Vec2, to: Vec2) -> Self {
        assert!(from != to, "Pfad benötigt zwei verschiedene Punkte");

        let control = quad_curve_control_point(from, to);
        let samples = sample_quad_curve(from, control, to, CURVE_SAMPLES);

        Self {
            start: from,
            control,
            end: to,
            samples,
            stroke_elapsed: 0.0,
            lap_elapsed: 0.0,
        }
    }

    /// Treibt beide Stufen um `dt_secs` weiter.
    pub fn tick(&mut self, dt_secs: f32) {
        self.stroke_elapsed = (self.stroke_elapsed + dt_secs).min(PATH_REVEAL_SECS);
        self.lap_elapsed = (self.lap_elapsed + dt_secs) % PATH_REVEAL_SECS;
    }

    /// Anteil der bereits gezeichneten Kurve (0.0 bis 1.0, bleibt bei 1.0).
    pub fn stroke_progress(&self) -> f32 {
        self.stroke_elapsed / PATH_REVEAL_SECS
    }

    /// Gibt `true` zurück, sobald die Kurve vollständig gezeichnet ist.
    pub fn is_fully_drawn(&self) -> bool {
        self.stroke_elapsed >= PATH_REVEAL_SECS
    }

    /// Aktuelle Position des umlaufenden Punkts (konstante Geschwindigkeit
    /// über die Bogenlänge).
    pub fn dot_position(&self) -> Vec2 {
        point_at_fraction(&self.samples, self.lap_elapsed / PATH_REVEAL_SECS)
    }

    /// Start- und Endpunkt der Kurve (Screen-Koordinaten).
    pub fn endpoints(&self) -> (Vec2, Vec2) {
        (self.start, self.end)
    }

    /// Kontrollpunkt der Kurve.
    pub fn control_point(&self) -> Vec2 {
        self.control
    }

    /// Strichfarbe des Pfads (RGBA).
    pub fn stroke_color(&self) -> [f32; 4] {
        PATH_COLOR
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn stroke_reaches_full_and_stays() {
        let mut animator = PathRevealAnimator::new(Vec2::ZERO, Vec2::new(10.0, 0.0));
        assert_relative_eq!(animator.stroke_progress(), 0.0);

        animator.tick(0.5);
        assert_relative_eq!(animator.stroke_progress(), 0.5, epsilon = 1e-4);
        assert!(!animator.is_fully_drawn());

        animator.tick(0.5);
        assert!(animator.is_fully_drawn());

        // Weitere Frames ändern nichts mehr am Stroke
        animator.tick(1.0);
        assert_relative_eq!(animator.stroke_progress(), 1.0);
    }

    #[test]
    fn dot_starts_at_curve_start_and_loops() {
        let start = Vec2::ZERO;
        let end = Vec2::new(10.0, 0.0);
        let mut animator = PathRevealAnimator::new(start, end);

        assert_eq!(animator.dot_position(), start);

        animator.tick(0.5);
        let halfway = animator.dot_position();
        assert!(halfway != start);

        // Eine volle Runde später: der Punkt ist wieder an derselben Stelle
        animator.tick(1.0);
        let wrapped = animator.dot_position();
        assert_relative_eq!(wrapped.x, halfway.x, epsilon = 1e-3);
        assert_relative_eq!(wrapped.y, halfway.y, epsilon = 1e-3);
    }

    #[test]
    fn endpoints_are_exact() {
        let start = Vec2::new(3.0, -2.0);
        let end = Vec2::new(-7.0, 5.0);
        let animator = PathRevealAnimator::new(start, end);

        assert_eq!(animator.endpoints(), (start, end));
    }

    #[test]
    #[should_panic]
    fn equal_points_are_a_programming_error() {
        let point = Vec2::new(1.0, 1.0);
        let _ = PathRevealAnimator::new(point, point);
    }
}
