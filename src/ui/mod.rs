//! View-Schicht: Karten-View, Marker-Registry, Pfad-Animation.

pub mod annotations;
pub mod decoration;
pub mod map_view;

pub use annotations::{AnnotationRegistry, MarkerView};
pub use decoration::PathRevealAnimator;
pub use map_view::MapView;
