//! Application State — zentrale Datenhaltung.

use super::presenter::MapPresenter;
use super::CommandLog;

/// Hauptzustand der Anwendung.
///
/// Die Karten-View lebt daneben beim Einbettenden (Demo-Binary oder Test),
/// der Controller erhält beide pro Aufruf.
#[derive(Default)]
pub struct AppState {
    /// Auswahl-State-Machine
    pub presenter: MapPresenter,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State
    pub fn new() -> Self {
        Self {
            presenter: MapPresenter::new(),
            command_log: CommandLog::new(),
        }
    }
}
