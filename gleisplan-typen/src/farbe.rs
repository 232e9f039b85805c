//! Farbe im RGB-Schema, z.B. für die Markierung gehaltener oder überlappender Gleise.

use serde::{Deserialize, Serialize};

/// Rote [`Farbe`].
pub const ROT: Farbe = Farbe { rot: 1., grün: 0., blau: 0. };

/// Grüne [`Farbe`].
pub const GRÜN: Farbe = Farbe { rot: 0., grün: 0.5, blau: 0. };

/// Blaue [`Farbe`].
pub const BLAU: Farbe = Farbe { rot: 0., grün: 0., blau: 1. };

/// Orange [`Farbe`].
pub const ORANGE: Farbe = Farbe { rot: 1., grün: 0.65, blau: 0. };

/// Eine Farbe im RGB-Schema, jeder Kanal im Bereich `[0, 1]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Farbe {
    /// Rot
    pub rot: f32,
    /// Grün
    pub grün: f32,
    /// Blau
    pub blau: f32,
}

impl Farbe {
    /// Hexadezimale Darstellung, z.B. `#ff0000` für [`ROT`].
    #[must_use]
    pub fn hex(&self) -> String {
        // Werte außerhalb von [0, 1] werden vorher begrenzt.
        #[allow(clippy::as_conversions, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let kanal = |wert: f32| (wert.clamp(0., 1.) * 255.).round() as u8;
        format!("#{:02x}{:02x}{:02x}", kanal(self.rot), kanal(self.grün), kanal(self.blau))
    }
}
