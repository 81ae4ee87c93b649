//! Application-Layer: Presenter, Contract, Controller und Events.

pub mod command_log;
pub mod contract;
pub mod controller;
pub mod events;
pub mod presenter;
pub mod state;

pub use command_log::CommandLog;
pub use contract::{HideCompletion, MapViewable, MarkerId, MarkerItem, RouteDecoration};
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use presenter::{MapPresenter, PointRole, Selection, SelectionPoint};
pub use state::AppState;
