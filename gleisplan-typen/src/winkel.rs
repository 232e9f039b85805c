//! Winkel in Bogen- und Gradmaß.
//!
//! Positive Winkel drehen im Uhrzeigersinn, da y-Koordinaten nach unten wachsen.

use std::{
    f64::consts::TAU,
    ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign},
};

use serde::{Deserialize, Serialize};

use crate::skalar::Skalar;

/// Gemeinsame Operationen für [`Winkel`] und [`WinkelGradmaß`].
pub trait Trigonometrie {
    /// Der äquivalente Winkel innerhalb einer Umdrehung, beginnend bei `0`.
    #[must_use]
    fn normalisiert(self) -> Self;
    /// Kosinus
    #[must_use]
    fn cos(&self) -> Skalar;
    /// Sinus
    #[must_use]
    fn sin(&self) -> Skalar;
}

/// Winkel im Bogenmaß, nur für Berechnungen verwendet.
///
/// Vergleiche normalisieren NICHT.
#[derive(Debug, PartialEq, Clone, Copy, Default)]
pub struct Winkel(pub f64);

// soll direkt importiert werden
#[allow(clippy::module_name_repetitions)]
/// Winkel im Gradmaß.
///
/// Positionen und Verbindungen speichern Gradmaß, damit glatte Werte wie `90°`
/// exakt erhalten bleiben. Vergleiche normalisieren NICHT.
#[derive(Debug, PartialEq, Clone, Copy, PartialOrd, Default, Serialize, Deserialize)]
pub struct WinkelGradmaß(f64);

impl WinkelGradmaß {
    /// Konstruktor
    #[must_use]
    pub const fn neu(grad: f64) -> Self {
        WinkelGradmaß(grad)
    }

    /// Der Wert in Grad.
    #[must_use]
    pub const fn grad(&self) -> f64 {
        self.0
    }

    /// `180°`
    pub const HALBE_UMDREHUNG: WinkelGradmaß = WinkelGradmaß(180.);

    /// `360°`
    pub const GANZE_UMDREHUNG: WinkelGradmaß = WinkelGradmaß(360.);
}

impl From<WinkelGradmaß> for Winkel {
    fn from(WinkelGradmaß(grad): WinkelGradmaß) -> Winkel {
        Winkel(grad.to_radians())
    }
}

impl From<Winkel> for WinkelGradmaß {
    fn from(Winkel(bogenmaß): Winkel) -> WinkelGradmaß {
        WinkelGradmaß(bogenmaß.to_degrees())
    }
}

/// Addition, Subtraktion und Negation über den inneren [`f64`]-Wert.
macro_rules! winkel_arithmetik {
    ($typ: ident) => {
        impl AddAssign for $typ {
            fn add_assign(&mut self, rhs: $typ) {
                // Wie f64: Schlimmstenfalls kommt es zu Genauigkeits-Problemen.
                #[allow(clippy::arithmetic_side_effects)]
                {
                    self.0 += rhs.0;
                }
            }
        }

        impl Add for $typ {
            type Output = $typ;

            fn add(mut self, rhs: $typ) -> $typ {
                // Wie f64: Schlimmstenfalls kommt es zu Genauigkeits-Problemen.
                #[allow(clippy::arithmetic_side_effects)]
                {
                    self += rhs;
                }
                self
            }
        }

        impl SubAssign for $typ {
            fn sub_assign(&mut self, rhs: $typ) {
                // Wie f64: Schlimmstenfalls kommt es zu Genauigkeits-Problemen.
                #[allow(clippy::arithmetic_side_effects)]
                {
                    self.0 -= rhs.0;
                }
            }
        }

        impl Sub for $typ {
            type Output = $typ;

            fn sub(mut self, rhs: $typ) -> $typ {
                // Wie f64: Schlimmstenfalls kommt es zu Genauigkeits-Problemen.
                #[allow(clippy::arithmetic_side_effects)]
                {
                    self -= rhs;
                }
                self
            }
        }

        impl Neg for $typ {
            type Output = $typ;

            fn neg(self) -> $typ {
                $typ(-self.0)
            }
        }

        impl Mul<f64> for $typ {
            type Output = $typ;

            fn mul(self, faktor: f64) -> $typ {
                // Wie f64: Schlimmstenfalls kommt es zu Genauigkeits-Problemen.
                #[allow(clippy::arithmetic_side_effects)]
                $typ(self.0 * faktor)
            }
        }
    };
}

winkel_arithmetik!(Winkel);
winkel_arithmetik!(WinkelGradmaß);

/// Rest bei Division durch `umdrehung`, garantiert im Bereich `[0, umdrehung)`.
fn rest_einer_umdrehung(wert: f64, umdrehung: f64) -> f64 {
    let rest = wert.rem_euclid(umdrehung);
    // rem_euclid liefert für betragsmäßig winzige negative Werte genau `umdrehung`.
    if rest >= umdrehung {
        0.
    } else {
        rest
    }
}

impl Trigonometrie for Winkel {
    /// Normalisiert in den Bereich `[0, τ)`.
    fn normalisiert(self) -> Self {
        Winkel(rest_einer_umdrehung(self.0, TAU))
    }

    fn cos(&self) -> Skalar {
        Skalar(self.0.cos())
    }

    fn sin(&self) -> Skalar {
        Skalar(self.0.sin())
    }
}

impl Trigonometrie for WinkelGradmaß {
    /// Normalisiert in den Bereich `[0°, 360°)`.
    fn normalisiert(self) -> Self {
        WinkelGradmaß(rest_einer_umdrehung(self.0, WinkelGradmaß::GANZE_UMDREHUNG.0))
    }

    fn cos(&self) -> Skalar {
        Winkel::from(*self).cos()
    }

    fn sin(&self) -> Skalar {
        Winkel::from(*self).sin()
    }
}

#[cfg(test)]
mod test;
