//! Grundlegende Typen für einen Gleisplan: Skalare, Vektoren, Winkel, Längen und Farben.

pub mod farbe;
#[path = "länge.rs"]
pub mod länge;
pub mod position;
pub mod rechteck;
pub mod skalar;
pub mod vektor;
pub mod winkel;
