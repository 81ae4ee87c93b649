//! Zentrale Laufzeit-Konstanten für Animationen, Farben und Layout.

// ── Animations-Dauern ───────────────────────────────────────────────

/// Dauer des Overlay-Einblendens beim Start der Reveal-Sequenz (Sekunden).
pub const OVERLAY_FADE_IN_SECS: f32 = 0.3;
/// Dauer des Overlay-Ausblendens beim Verstecken der Dekoration (Sekunden).
pub const OVERLAY_FADE_OUT_SECS: f32 = 0.2;
/// Dauer der programmatischen Kamera-Fahrt auf die Scroll-Ziele (Sekunden).
/// Bewusst länger als das Overlay-Einblenden: der Zeichen-Schritt muss auf
/// das Settle-Signal der Kamera warten.
pub const CAMERA_SCROLL_SECS: f32 = 0.45;
/// Dauer des Stroke-Reveals und einer Punkt-Umrundung (Sekunden).
pub const PATH_REVEAL_SECS: f32 = 1.0;

// ── Kurven-Form ─────────────────────────────────────────────────────

/// Anteil der Streckenlänge bis zum Zwischenpunkt der Kontrollpunkt-Konstruktion.
pub const CURVE_MIDPOINT_FACTOR: f32 = 0.4;
/// Anteil der Streckenlänge für den senkrechten Kontrollpunkt-Versatz.
pub const CURVE_CONTROL_OFFSET_FACTOR: f32 = 0.3;
/// Anzahl der Abtast-Segmente entlang der Kurve (für Punkt-Umlauf und Länge).
pub const CURVE_SAMPLES: usize = 32;

// ── Marker & Pfad ───────────────────────────────────────────────────

/// Farbe des Start-Markers (RGBA: Rot).
pub const START_MARKER_COLOR: [f32; 4] = [0.9, 0.1, 0.1, 1.0];
/// Farbe des End-Markers (RGBA: Blau).
pub const END_MARKER_COLOR: [f32; 4] = [0.1, 0.3, 0.9, 1.0];
/// Farbe des gezeichneten Pfads (RGBA: Weiß).
pub const PATH_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

// ── Scroll-Framing ──────────────────────────────────────────────────

/// Rand in Screen-Pixeln beim Einrahmen der Scroll-Ziele.
pub const SCROLL_PADDING_PX: f32 = 24.0;
