//! Verbindungspunkte einer [`Form`](crate::form::Form) im lokalen Koordinatensystem.

use gleisplan_typen::{vektor::Vektor, winkel::WinkelGradmaß};

/// Ein Verbindungspunkt im lokalen Koordinatensystem einer Form.
///
/// Eine `richtung` von `0°` zeigt nach oben (negative y-Achse),
/// größere Winkel drehen im Uhrzeigersinn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Verbindung {
    /// Position relativ zum lokalen Ursprung.
    pub position: Vektor,
    /// In welche Richtung zeigt die Verbindung.
    pub richtung: WinkelGradmaß,
}

impl Verbindung {
    /// Erzeuge eine neue Verbindung.
    #[must_use]
    pub const fn neu(x: f64, y: f64, richtung: f64) -> Self {
        Verbindung { position: Vektor::neu(x, y), richtung: WinkelGradmaß::neu(richtung) }
    }
}
