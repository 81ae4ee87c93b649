//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};
use crate::ui::MapView;

/// Orchestriert UI-Events auf Presenter und View.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(
        &mut self,
        state: &mut AppState,
        view: &mut MapView,
        intent: AppIntent,
    ) -> anyhow::Result<()> {
        for command in map_intent_to_commands(intent) {
            self.handle_command(state, view, command)?;
        }

        Ok(())
    }

    /// Führt mutierende Commands auf Presenter und View aus.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        view: &mut MapView,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(command.clone());

        match command {
            AppCommand::TapOnMap { coordinate } => {
                state.presenter.on_tap(view, coordinate);
            }
            AppCommand::SetViewportSize { size } => {
                view.set_viewport_size(size);
            }
            AppCommand::AdvanceAnimations { dt_secs } => {
                view.tick(dt_secs);
            }
        }

        Ok(())
    }
}

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
fn map_intent_to_commands(intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::MapTapped { world_pos } => vec![AppCommand::TapOnMap {
            coordinate: world_pos,
        }],
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::FrameAdvanced { dt_secs } => vec![AppCommand::AdvanceAnimations { dt_secs }],
    }
}
