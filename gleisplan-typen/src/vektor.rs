//! Vektoren über [`Skalar`] für Positionen und Verschiebungen in der Ebene.

use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

use serde::{Deserialize, Serialize};

use crate::{
    skalar::Skalar,
    winkel::{Trigonometrie, Winkel},
};

/// Ein 2-dimensionaler Vektor.
///
/// x-Koordinaten wachsen nach rechts, y-Koordinaten wachsen nach unten.
/// Dadurch entsprechen positive Winkel einer Rotation im Uhrzeigersinn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vektor {
    /// x-Koordinate des Vektors.
    pub x: Skalar,
    /// y-Koordinate des Vektors.
    pub y: Skalar,
}

impl Vektor {
    /// Nullvektor.
    #[must_use]
    pub const fn null_vektor() -> Self {
        Vektor { x: Skalar(0.), y: Skalar(0.) }
    }

    /// Erzeuge einen Vektor aus seinen Koordinaten.
    #[must_use]
    pub const fn neu(x: f64, y: f64) -> Self {
        Vektor { x: Skalar(x), y: Skalar(y) }
    }

    /// Länge eines Vektors (euklidische Metrik).
    #[must_use]
    pub fn länge(&self) -> Skalar {
        Skalar(self.x.0.hypot(self.y.0))
    }

    /// Euklidischer Abstand zu einem anderen Punkt.
    #[must_use]
    pub fn abstand(&self, other: &Self) -> Skalar {
        // Wie f64: Schlimmstenfalls kommt es zu Genauigkeits-Problemen.
        #[allow(clippy::arithmetic_side_effects)]
        (*self - other).länge()
    }

    /// Rotiere einen Vektor um `winkel` im Uhrzeigersinn um den Ursprung.
    pub fn rotiere(&mut self, winkel: &Winkel) {
        let Vektor { x, y } = *self;
        let cos = winkel.cos();
        let sin = winkel.sin();
        // Wie f64: Schlimmstenfalls kommt es zu Genauigkeits-Problemen.
        #[allow(clippy::arithmetic_side_effects)]
        {
            self.x = cos * x - sin * y;
            self.y = sin * x + cos * y;
        }
    }

    /// Erzeuge einen Vektor, der um `winkel` im Uhrzeigersinn um den Ursprung rotiert ist.
    #[must_use]
    pub fn rotiert(mut self, winkel: &Winkel) -> Self {
        self.rotiere(winkel);
        self
    }

    /// Erzeuge einen Vektor, der um `winkel` im Uhrzeigersinn um `zentrum` rotiert ist.
    #[must_use]
    pub fn rotiert_um(self, zentrum: &Vektor, winkel: &Winkel) -> Self {
        // Wie f64: Schlimmstenfalls kommt es zu Genauigkeits-Problemen.
        #[allow(clippy::arithmetic_side_effects)]
        {
            (self - zentrum).rotiert(winkel) + zentrum
        }
    }
}

/// Implementiere Addition/Subtraktion zwischen Vektoren, jeweils komponentenweise.
macro_rules! vektor_operator {
    ($trait: ident, $methode: ident, $zuweisung_trait: ident, $zuweisung: ident) => {
        impl $zuweisung_trait<&Vektor> for Vektor {
            fn $zuweisung(&mut self, rhs: &Vektor) {
                // Wie f64: Schlimmstenfalls kommt es zu Genauigkeits-Problemen.
                #[allow(clippy::arithmetic_side_effects)]
                {
                    self.x.$zuweisung(rhs.x);
                    self.y.$zuweisung(rhs.y);
                }
            }
        }

        impl $zuweisung_trait<Vektor> for Vektor {
            fn $zuweisung(&mut self, rhs: Vektor) {
                // Wie f64: Schlimmstenfalls kommt es zu Genauigkeits-Problemen.
                #[allow(clippy::arithmetic_side_effects)]
                {
                    self.$zuweisung(&rhs);
                }
            }
        }

        impl<T> $trait<T> for Vektor
        where
            Vektor: $zuweisung_trait<T>,
        {
            type Output = Vektor;

            fn $methode(mut self, rhs: T) -> Vektor {
                // Wie f64: Schlimmstenfalls kommt es zu Genauigkeits-Problemen.
                #[allow(clippy::arithmetic_side_effects)]
                {
                    self.$zuweisung(rhs);
                }
                self
            }
        }
    };
}

vektor_operator!(Add, add, AddAssign, add_assign);
vektor_operator!(Sub, sub, SubAssign, sub_assign);

impl Mul<Skalar> for Vektor {
    type Output = Self;

    fn mul(self, faktor: Skalar) -> Self::Output {
        // Wie f64: Schlimmstenfalls kommt es zu Genauigkeits-Problemen.
        #[allow(clippy::arithmetic_side_effects)]
        Vektor { x: self.x * faktor, y: self.y * faktor }
    }
}

impl rstar::Point for Vektor {
    type Scalar = f64;

    const DIMENSIONS: usize = 2;

    fn generate(mut generator: impl FnMut(usize) -> Self::Scalar) -> Self {
        Vektor { x: Skalar(generator(0)), y: Skalar(generator(1)) }
    }

    fn nth(&self, index: usize) -> Self::Scalar {
        match index {
            0 => self.x.0,
            1 => self.y.0,
            _ => unreachable!("Vektor hat nur 2 Dimensionen."),
        }
    }

    fn nth_mut(&mut self, index: usize) -> &mut Self::Scalar {
        match index {
            0 => &mut self.x.0,
            1 => &mut self.y.0,
            _ => unreachable!("Vektor hat nur 2 Dimensionen."),
        }
    }
}
