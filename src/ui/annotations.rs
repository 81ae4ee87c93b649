//! Registry der Marker-Views: Id → Marker mit abgeleiteter Screen-Position.

use glam::Vec2;
use indexmap::IndexMap;

use crate::app::MarkerId;
use crate::core::Camera2D;

/// Visueller Marker mit geographischem Anker.
///
/// Der Welt-Anker ist die Quelle der Wahrheit; die Screen-Position wird bei
/// jeder Viewport-Änderung neu berechnet und nie persistent gehalten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerView {
    /// Geographischer Anker in Welt-Koordinaten
    pub world_anchor: Vec2,
    /// Marker-Farbe (RGBA)
    pub color: [f32; 4],
    /// Abgeleitete Screen-Position (letztes Layout)
    pub screen_position: Vec2,
}

/// Verwaltet alle registrierten Marker in deterministischer Reihenfolge.
#[derive(Debug, Default)]
pub struct AnnotationRegistry {
    views: IndexMap<MarkerId, MarkerView>,
}

impl AnnotationRegistry {
    /// Erstellt eine leere Registry.
    pub fn new() -> Self {
        Self {
            views: IndexMap::new(),
        }
    }

    /// Upsert: legt den Marker beim ersten Aufruf pro Id an und aktualisiert
    /// danach nur Anker und Farbe.
    pub fn upsert(&mut self, id: MarkerId, world_anchor: Vec2, color: [f32; 4]) {
        let view = self.views.entry(id).or_insert(MarkerView {
            world_anchor,
            color,
            screen_position: Vec2::ZERO,
        });
        view.world_anchor = world_anchor;
        view.color = color;
    }

    /// Entfernt und verwirft den Marker. Unbekannte Id ist ein No-op.
    pub fn remove(&mut self, id: MarkerId) -> bool {
        self.views.shift_remove(&id).is_some()
    }

    /// Gibt den Marker zu einer Id zurück.
    pub fn get(&self, id: MarkerId) -> Option<&MarkerView> {
        self.views.get(&id)
    }

    /// Anzahl der registrierten Marker.
    pub fn len(&self) -> usize {
        self.views.len()
    }

    /// Gibt `true` zurück, wenn keine Marker registriert sind.
    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    /// Iteriert über alle Marker in Einfüge-Reihenfolge.
    pub fn iter(&self) -> impl Iterator<Item = (&MarkerId, &MarkerView)> {
        self.views.iter()
    }

    /// Berechnet die Screen-Positionen aller Marker aus ihren Welt-Ankern neu.
    pub fn layout(&mut self, camera: &Camera2D, viewport_size: [f32; 2]) {
        let screen_size = Vec2::new(viewport_size[0], viewport_size[1]);
        for view in self.views.values_mut() {
            view.screen_position = camera.world_to_screen(view.world_anchor, screen_size);
        }
    }

    /// Welt-Bounding-Box der angegebenen Marker (unbekannte Ids werden
    /// übersprungen). `None`, wenn keine der Ids registriert ist.
    pub fn world_bounds(&self, ids: &[MarkerId]) -> Option<(Vec2, Vec2)> {
        let mut bounds: Option<(Vec2, Vec2)> = None;

        for id in ids {
            if let Some(view) = self.views.get(id) {
                let anchor = view.world_anchor;
                bounds = Some(match bounds {
                    None => (anchor, anchor),
                    Some((min, max)) => (min.min(anchor), max.max(anchor)),
                });
            }
        }

        bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    const BLUE: [f32; 4] = [0.0, 0.0, 1.0, 1.0];

    #[test]
    fn upsert_creates_then_updates() {
        let mut registry = AnnotationRegistry::new();

        registry.upsert(1, Vec2::new(10.0, 20.0), RED);
        assert_eq!(registry.len(), 1);

        // Zweiter Upsert derselben Id: kein neuer Marker, Werte aktualisiert
        registry.upsert(1, Vec2::new(30.0, 40.0), BLUE);
        assert_eq!(registry.len(), 1);

        let view = registry.get(1).unwrap();
        assert_eq!(view.world_anchor, Vec2::new(30.0, 40.0));
        assert_eq!(view.color, BLUE);
    }

    #[test]
    fn remove_unknown_id_is_noop() {
        let mut registry = AnnotationRegistry::new();
        assert!(!registry.remove(99));

        registry.upsert(1, Vec2::ZERO, RED);
        assert!(registry.remove(1));
        assert!(registry.is_empty());
    }

    #[test]
    fn layout_recomputes_screen_positions() {
        let mut registry = AnnotationRegistry::new();
        registry.upsert(1, Vec2::ZERO, RED);

        let mut camera = Camera2D::new();
        registry.layout(&camera, [800.0, 600.0]);
        let centered = registry.get(1).unwrap().screen_position;
        assert!((centered - Vec2::new(400.0, 300.0)).length() < 1e-3);

        // Kamera verschieben → abgeleitete Screen-Position wandert mit
        camera.pan(Vec2::new(100.0, 0.0));
        registry.layout(&camera, [800.0, 600.0]);
        let moved = registry.get(1).unwrap().screen_position;
        assert!(moved.x < centered.x);
    }

    #[test]
    fn world_bounds_spans_requested_ids() {
        let mut registry = AnnotationRegistry::new();
        registry.upsert(1, Vec2::new(-5.0, 10.0), RED);
        registry.upsert(2, Vec2::new(15.0, -20.0), BLUE);
        registry.upsert(3, Vec2::new(100.0, 100.0), RED);

        let (min, max) = registry.world_bounds(&[1, 2]).unwrap();
        assert_eq!(min, Vec2::new(-5.0, -20.0));
        assert_eq!(max, Vec2::new(15.0, 10.0));
    }

    #[test]
    fn world_bounds_of_unknown_ids_is_none() {
        let registry = AnnotationRegistry::new();
        assert!(registry.world_bounds(&[1, 2]).is_none());
    }
}
