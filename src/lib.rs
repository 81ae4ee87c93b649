//! Map-Route-Picker Library.
//! Tap-getriebene Routenauswahl mit animierter Pfad-Anzeige,
//! als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, HideCompletion, MapPresenter, MapViewable,
    MarkerId, MarkerItem, PointRole, RouteDecoration, Selection, SelectionPoint,
};
pub use core::{Camera2D, SettleQueue, Ticket, TicketSlot};
pub use ui::{AnnotationRegistry, MapView, MarkerView, PathRevealAnimator};
