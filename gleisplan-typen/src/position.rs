//! Position und Ausrichtung eines Objekts auf dem Gleisplan.

use serde::{Deserialize, Serialize};

use crate::{
    vektor::Vektor,
    winkel::{Trigonometrie, Winkel, WinkelGradmaß},
};

/// Position und Ausrichtung eines Objekts auf dem Gleisplan.
///
/// `punkt` ist die Position des lokalen Ursprungs, `winkel` die Rotation des lokalen
/// Koordinatensystems im Uhrzeigersinn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Position des lokalen Ursprungs.
    pub punkt: Vektor,
    /// Rotation um den lokalen Ursprung.
    pub winkel: WinkelGradmaß,
}

impl Position {
    /// Erzeuge eine neue Position mit einem auf `[0°, 360°)` normalisierten Winkel.
    #[must_use]
    pub fn neu(punkt: Vektor, winkel: WinkelGradmaß) -> Self {
        Position { punkt, winkel: winkel.normalisiert() }
    }

    /// Die Rotation in [`Bogenmaß`](Winkel).
    #[must_use]
    pub fn rotation(&self) -> Winkel {
        Winkel::from(self.winkel)
    }

    /// Transformiere einen Punkt aus dem lokalen Koordinatensystem in globale Koordinaten.
    #[must_use]
    pub fn transformation(&self, lokal: Vektor) -> Vektor {
        // Wie f64: Schlimmstenfalls kommt es zu Genauigkeits-Problemen.
        #[allow(clippy::arithmetic_side_effects)]
        {
            self.punkt + lokal.rotiert(&self.rotation())
        }
    }

    /// Transformiere eine Richtung aus dem lokalen Koordinatensystem in eine globale Richtung.
    #[must_use]
    pub fn transformation_richtung(&self, lokal: WinkelGradmaß) -> WinkelGradmaß {
        // Wie f64: Schlimmstenfalls kommt es zu Genauigkeits-Problemen.
        #[allow(clippy::arithmetic_side_effects)]
        (self.winkel + lokal).normalisiert()
    }
}
