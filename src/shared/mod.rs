//! Layer-neutrale Helfer: Geometrie und Laufzeit-Konstanten.

pub mod geometry;
pub mod options;
