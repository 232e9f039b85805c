//! Skalar-Werte für Koordinaten und Größen auf dem Gleisplan.

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use serde::{Deserialize, Serialize};

/// Skalar-Werte für Koordinaten und Größen auf dem Gleisplan, gemessen in Pixeln.
///
/// Es wird [`f64`] verwendet, damit gespeicherte Positionen ohne Verlust wieder geladen werden.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Skalar(pub f64);

impl Skalar {
    /// Doppelter Wert.
    #[must_use]
    pub fn doppelt(&self) -> Self {
        Skalar(2. * self.0)
    }

    /// Halber Wert.
    #[must_use]
    pub fn halbiert(&self) -> Self {
        Skalar(0.5 * self.0)
    }

    /// Absoluter Wert.
    #[must_use]
    pub fn abs(&self) -> Self {
        Skalar(self.0.abs())
    }

    /// Kopie des größeren Elements.
    #[must_use]
    pub fn max(&self, other: &Self) -> Self {
        if self > other {
            *self
        } else {
            *other
        }
    }

    /// Kopie des kleineren Elements.
    #[must_use]
    pub fn min(&self, other: &Self) -> Self {
        if self < other {
            *self
        } else {
            *other
        }
    }
}

/// Implementiere einen binären Operator und die zugehörige Zuweisung über das innere [`f64`].
macro_rules! skalar_operator {
    ($trait: ident, $methode: ident, $zuweisung_trait: ident, $zuweisung: ident, $op: tt) => {
        impl $zuweisung_trait<Skalar> for Skalar {
            fn $zuweisung(&mut self, rhs: Skalar) {
                // Wie f64: Schlimmstenfalls kommt es zu Genauigkeits-Problemen oder einem NaN-Wert.
                #[allow(clippy::arithmetic_side_effects)]
                {
                    self.0 = self.0 $op rhs.0;
                }
            }
        }

        impl $zuweisung_trait<&Skalar> for Skalar {
            fn $zuweisung(&mut self, rhs: &Skalar) {
                // Wie f64: Schlimmstenfalls kommt es zu Genauigkeits-Problemen oder einem NaN-Wert.
                #[allow(clippy::arithmetic_side_effects)]
                {
                    self.0 = self.0 $op rhs.0;
                }
            }
        }

        impl<T> $trait<T> for Skalar
        where
            Skalar: $zuweisung_trait<T>,
        {
            type Output = Skalar;

            fn $methode(mut self, rhs: T) -> Skalar {
                // Wie f64: Schlimmstenfalls kommt es zu Genauigkeits-Problemen oder einem NaN-Wert.
                #[allow(clippy::arithmetic_side_effects)]
                {
                    self.$zuweisung(rhs);
                }
                self
            }
        }
    };
}

skalar_operator!(Add, add, AddAssign, add_assign, +);
skalar_operator!(Sub, sub, SubAssign, sub_assign, -);
skalar_operator!(Mul, mul, MulAssign, mul_assign, *);
skalar_operator!(Div, div, DivAssign, div_assign, /);

impl Neg for Skalar {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Skalar(-self.0)
    }
}
