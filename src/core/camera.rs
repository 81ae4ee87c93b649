//! 2D-Kamera: Projektion zwischen Welt- und Screen-Koordinaten.

use glam::Vec2;

/// 2D-Kamera mit Pan und Zoom.
///
/// Die Kamera ist der Projektionsdienst der Karte: Welt-Koordinaten sind die
/// Quelle der Wahrheit, Screen-Positionen werden daraus abgeleitet.
#[derive(Debug, Clone)]
pub struct Camera2D {
    /// Position der Kamera in Welt-Koordinaten
    pub position: Vec2,
    /// Zoom-Level (1.0 = normal, 2.0 = doppelt so groß)
    pub zoom: f32,
}

impl Camera2D {
    /// Sichtbare Welt-Halbbreite bei Zoom 1.0.
    pub const BASE_WORLD_EXTENT: f32 = 2048.0;
    /// Minimaler Zoom-Faktor.
    pub const ZOOM_MIN: f32 = 0.1;
    /// Maximaler Zoom-Faktor.
    pub const ZOOM_MAX: f32 = 100.0;

    /// Erstellt eine neue Kamera
    pub fn new() -> Self {
        Self {
            position: Vec2::ZERO,
            zoom: 1.0,
        }
    }

    /// Zentriert die Kamera auf einen Punkt
    pub fn look_at(&mut self, target: Vec2) {
        self.position = target;
    }

    /// Verschiebt die Kamera (Pan)
    pub fn pan(&mut self, delta: Vec2) {
        self.position += delta;
    }

    /// Ändert den Zoom-Level
    pub fn zoom_by(&mut self, factor: f32) {
        self.zoom = (self.zoom * factor).clamp(Self::ZOOM_MIN, Self::ZOOM_MAX);
    }

    /// Konvertiert Screen-Koordinaten zu Welt-Koordinaten.
    /// Berücksichtigt BASE_WORLD_EXTENT, Zoom und Aspekt-Ratio.
    pub fn screen_to_world(&self, screen_pos: Vec2, screen_size: Vec2) -> Vec2 {
        // Screen-Koordinaten zentrieren (-1 bis 1)
        let ndc = (screen_pos / screen_size) * 2.0 - Vec2::ONE;
        let aspect = screen_size.x / screen_size.y;
        Vec2::new(
            ndc.x * Self::BASE_WORLD_EXTENT * aspect / self.zoom,
            ndc.y * Self::BASE_WORLD_EXTENT / self.zoom,
        ) + self.position
    }

    /// Konvertiert Welt-Koordinaten zu Screen-Koordinaten.
    /// Exakte Umkehrung von [`Self::screen_to_world`].
    pub fn world_to_screen(&self, world_pos: Vec2, screen_size: Vec2) -> Vec2 {
        let aspect = screen_size.x / screen_size.y;
        let relative = world_pos - self.position;
        let ndc = Vec2::new(
            relative.x * self.zoom / (Self::BASE_WORLD_EXTENT * aspect),
            relative.y * self.zoom / Self::BASE_WORLD_EXTENT,
        );
        (ndc + Vec2::ONE) / 2.0 * screen_size
    }

    /// Berechnet den Umrechnungsfaktor von Screen-Pixeln zu Welt-Einheiten.
    pub fn world_per_pixel(&self, viewport_height: f32) -> f32 {
        2.0 * Self::BASE_WORLD_EXTENT / (self.zoom * viewport_height)
    }

    /// Berechnet Position und Zoom, die das Welt-Rechteck `min`..`max` mit
    /// `padding_px` Rand im Viewport einrahmen.
    ///
    /// Bei ausgeartetem Rechteck (Punkt) wird auf `ZOOM_MAX` begrenzt.
    pub fn frame_bounds(min: Vec2, max: Vec2, screen_size: Vec2, padding_px: f32) -> (Vec2, f32) {
        let center = (min + max) / 2.0;
        let half_width = (max.x - min.x) / 2.0;
        let half_height = (max.y - min.y) / 2.0;

        // Pixel pro Welt-Einheit sind in x und y identisch (Aspekt kürzt sich):
        // ppw = screen_size.y * zoom / (2 * BASE_WORLD_EXTENT)
        let usable_x = (screen_size.x / 2.0 - padding_px).max(1.0);
        let usable_y = (screen_size.y / 2.0 - padding_px).max(1.0);

        let mut zoom = Self::ZOOM_MAX;
        if half_width > f32::EPSILON {
            zoom = zoom.min(usable_x * 2.0 * Self::BASE_WORLD_EXTENT / (screen_size.y * half_width));
        }
        if half_height > f32::EPSILON {
            zoom =
                zoom.min(usable_y * 2.0 * Self::BASE_WORLD_EXTENT / (screen_size.y * half_height));
        }

        (center, zoom.clamp(Self::ZOOM_MIN, Self::ZOOM_MAX))
    }
}

impl Default for Camera2D {
    fn default() -> Self {
        Self::new()
    }
}
