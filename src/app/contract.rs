//! Contract zwischen Presenter und Karten-View.

use glam::Vec2;

/// Eindeutige Kennung eines Karten-Markers (vom Presenter vergeben).
pub type MarkerId = u64;

/// View-seitige Darstellung eines ausgewählten Punkts.
///
/// Gehört nach `add_item` der View; der Presenter behält nur die Id.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerItem {
    /// Geographischer Anker in Welt-Koordinaten
    pub coordinate: Vec2,
    /// Marker-Farbe (RGBA)
    pub color: [f32; 4],
}

/// Wert-Objekt für die anzuzeigende Route.
///
/// Existiert nur für die Dauer einer Reveal-Sequenz.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteDecoration {
    /// Startpunkt der Route in Welt-Koordinaten
    pub start_coordinate: Vec2,
    /// Endpunkt der Route in Welt-Koordinaten
    pub end_coordinate: Vec2,
}

/// Callback nach Abschluss der Hide-Animation.
///
/// Erhält die View als Parameter zurück, damit Folge-Operationen ohne
/// Rück-Referenz vom View auf den Presenter auskommen. `finished` ist
/// `false`, wenn die Animation durch eine neuere ersetzt wurde.
pub type HideCompletion = Box<dyn FnOnce(&mut dyn MapViewable, bool)>;

/// Fähigkeiten, die der Presenter von der Karten-View konsumiert.
pub trait MapViewable {
    /// Upsert eines Markers. Idempotent pro Id; der Marker erscheint im
    /// nächsten Layout.
    fn add_item(&mut self, item: MarkerItem, id: MarkerId);

    /// Entfernt einen Marker aus Registry und Darstellung.
    /// Unbekannte Id ist ein No-op.
    fn remove_item(&mut self, id: MarkerId);

    /// Startet die Reveal-Sequenz: Kamera-Fahrt auf die Scroll-Ziele,
    /// Abdunkeln, verzögertes Zeichnen des Pfads.
    ///
    /// Vorbedingungen (Programmierfehler, keine Laufzeitfälle):
    /// `scroll_target_ids` nicht leer, Start- und Endkoordinate verschieden.
    fn show_decoration(&mut self, decoration: RouteDecoration, scroll_target_ids: &[MarkerId]);

    /// Bricht eine laufende Reveal-Sequenz ab, blendet die Dekoration aus
    /// und ruft `completion` genau einmal auf.
    fn hide_decoration(&mut self, completion: HideCompletion);

    /// Schaltet die Karten-Gesten wieder frei.
    fn enable_map_interaction(&mut self);

    /// Blockiert Karten-Gesten (während eine Route angezeigt wird).
    fn disable_map_interaction(&mut self);
}
