//! AppIntent- und AppCommand-Enums für den Intent/Command-Datenfluss.

use glam::Vec2;

/// Intents: Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Tap auf die Karte (Welt-Koordinaten)
    MapTapped { world_pos: Vec2 },
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Frame-Takt: Animationen um `dt_secs` weitertreiben
    FrameAdvanced { dt_secs: f32 },
}

/// Commands: mutierende Operationen auf Presenter und View.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Tap an die Auswahl-State-Machine weiterreichen
    TapOnMap { coordinate: Vec2 },
    /// Viewport-Größe in der View aktualisieren
    SetViewportSize { size: [f32; 2] },
    /// Alle laufenden Animationen um `dt_secs` weitertreiben
    AdvanceAnimations { dt_secs: f32 },
}
