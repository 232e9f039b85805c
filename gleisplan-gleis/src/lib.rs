//! Geometrie der Gleis-Formen: Größe, Verbindungen und der Katalog aller verfügbaren Formen.

pub mod form;
pub mod katalog;
pub mod verbindung;
