//! Map-Route-Picker Demo.
//!
//! Headless-Szenario: zwei Taps definieren eine Route, die Animationen
//! werden in Frame-Schritten getrieben, ein dritter Tap verwirft die Route.

use glam::Vec2;
use map_route_picker::{AppController, AppIntent, AppState, MapView, Selection};

/// Frame-Dauer der Demo-Schleife (~60 FPS).
const FRAME_SECS: f32 = 0.016;

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("map-route-picker v{} startet...", env!("CARGO_PKG_VERSION"));

    let mut controller = AppController::new();
    let mut state = AppState::new();
    let mut view = MapView::new([1280.0, 720.0]);

    // Zwei Punkte antippen → Reveal-Sequenz startet
    controller.handle_intent(
        &mut state,
        &mut view,
        AppIntent::MapTapped {
            world_pos: Vec2::new(120.0, 80.0),
        },
    )?;
    controller.handle_intent(
        &mut state,
        &mut view,
        AppIntent::MapTapped {
            world_pos: Vec2::new(-340.0, 210.0),
        },
    )?;

    // Animationen bis zur Ruhe treiben (Scroll, Staging, Pfad-Reveal)
    drive_frames(&mut controller, &mut state, &mut view, 150)?;

    log::info!(
        "Route sichtbar: Pfad gezeichnet = {}, Overlay-Alpha = {:.2}",
        view.drawn_path().is_some(),
        view.overlay_alpha()
    );

    // Dritter Tap verwirft die Route
    controller.handle_intent(
        &mut state,
        &mut view,
        AppIntent::MapTapped {
            world_pos: Vec2::new(0.0, 0.0),
        },
    )?;
    drive_frames(&mut controller, &mut state, &mut view, 30)?;

    log::info!(
        "Aufgeräumt: Auswahl = {:?}, Marker = {}, Gesten erlaubt = {}",
        matches!(state.presenter.selection(), Selection::Empty),
        view.annotations().len(),
        view.is_interaction_enabled()
    );

    Ok(())
}

fn drive_frames(
    controller: &mut AppController,
    state: &mut AppState,
    view: &mut MapView,
    frames: usize,
) -> anyhow::Result<()> {
    for _ in 0..frames {
        controller.handle_intent(state, view, AppIntent::FrameAdvanced { dt_secs: FRAME_SECS })?;
    }

    Ok(())
}
