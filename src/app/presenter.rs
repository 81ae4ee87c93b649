//! Presenter: Tap-getriebene Auswahl-State-Machine.
//!
//! Reagiert auf Tap-Events und kommandiert die View über den
//! [`MapViewable`]-Contract. Auswahlpunkte entstehen und vergehen
//! ausschließlich hier.

use glam::Vec2;

use super::contract::{MapViewable, MarkerId, MarkerItem, RouteDecoration};
use crate::shared::options::{END_MARKER_COLOR, START_MARKER_COLOR};

/// Rolle eines Auswahlpunkts innerhalb der Route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointRole {
    /// Erster getippter Punkt
    Start,
    /// Zweiter getippter Punkt
    End,
}

/// Vom Presenter verwalteter Auswahlpunkt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionPoint {
    /// Marker-Id des Punkts
    pub id: MarkerId,
    /// Getippte Welt-Koordinate
    pub coordinate: Vec2,
    /// Rolle des Punkts
    pub role: PointRole,
}

/// Auswahlzustand: leer, ein Punkt, oder vollständige Route.
///
/// "Endpunkt ohne Startpunkt" ist durch die Enum-Form nicht darstellbar.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Selection {
    /// Keine Auswahl
    #[default]
    Empty,
    /// Nur der Startpunkt ist gewählt
    One(SelectionPoint),
    /// Start- und Endpunkt sind gewählt, die Route wird angezeigt
    Two(SelectionPoint, SelectionPoint),
}

/// Tap-getriebene Auswahl-State-Machine.
#[derive(Debug, Default)]
pub struct MapPresenter {
    selection: Selection,
    next_id: MarkerId,
}

impl MapPresenter {
    /// Erstellt einen Presenter ohne Auswahl.
    pub fn new() -> Self {
        Self {
            selection: Selection::Empty,
            next_id: 1,
        }
    }

    /// Aktueller Auswahlzustand.
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Verarbeitet einen Tap auf die Karte.
    ///
    /// Jeder Tap ist in jedem erreichbaren Zustand gültig; die Transition
    /// und alle Seiteneffekte laufen synchron, bevor der nächste Tap
    /// betrachtet wird.
    pub fn on_tap(&mut self, view: &mut dyn MapViewable, coordinate: Vec2) {
        match self.selection {
            Selection::Empty => {
                let start = self.make_point(coordinate, PointRole::Start);
                self.selection = Selection::One(start);

                log::debug!("Startpunkt gewählt: ({:.1}, {:.1})", coordinate.x, coordinate.y);
                view.add_item(
                    MarkerItem {
                        coordinate,
                        color: START_MARKER_COLOR,
                    },
                    start.id,
                );
            }
            Selection::One(start) => {
                // Exakter Koordinaten-Vergleich, kein Epsilon:
                // Re-Tap auf denselben Punkt bedeutet Abwahl.
                if coordinate == start.coordinate {
                    self.selection = Selection::Empty;

                    log::debug!("Startpunkt abgewählt");
                    view.remove_item(start.id);
                } else {
                    let end = self.make_point(coordinate, PointRole::End);
                    self.selection = Selection::Two(start, end);

                    log::debug!("Endpunkt gewählt: ({:.1}, {:.1})", coordinate.x, coordinate.y);
                    view.add_item(
                        MarkerItem {
                            coordinate,
                            color: END_MARKER_COLOR,
                        },
                        end.id,
                    );
                    view.disable_map_interaction();
                    view.show_decoration(
                        RouteDecoration {
                            start_coordinate: start.coordinate,
                            end_coordinate: end.coordinate,
                        },
                        &[start.id, end.id],
                    );
                }
            }
            Selection::Two(start, end) => {
                // Die Koordinate des Taps wird verworfen; sie startet keine
                // neue Auswahl in derselben Geste.
                self.selection = Selection::Empty;

                log::debug!("Route verworfen");
                let (start_id, end_id) = (start.id, end.id);
                view.hide_decoration(Box::new(move |view, _finished| {
                    view.enable_map_interaction();
                    view.remove_item(start_id);
                    view.remove_item(end_id);
                }));
            }
        }
    }

    fn make_point(&mut self, coordinate: Vec2, role: PointRole) -> SelectionPoint {
        let id = self.next_id;
        self.next_id += 1;

        SelectionPoint {
            id,
            coordinate,
            role,
        }
    }
}
