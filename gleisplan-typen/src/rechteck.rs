//! Achsen-parallele Rechtecke, hauptsächlich als Bounding Box eines Gleises.

use crate::{skalar::Skalar, vektor::Vektor, winkel::Winkel};

/// Ein achsen-paralleles Rechteck, gegeben durch zwei gegenüberliegende Ecken.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rechteck {
    /// Eine Ecke des Rechtecks.
    pub ecke_a: Vektor,
    /// Die gegenüberliegende Ecke des Rechtecks.
    pub ecke_b: Vektor,
}

impl Rechteck {
    /// Erzeuge ein Rechteck der angegebenen Größe mit Mittelpunkt `zentrum`.
    #[must_use]
    pub fn um_zentrum(zentrum: Vektor, größe: Vektor) -> Self {
        let halb = Vektor { x: größe.x.halbiert(), y: größe.y.halbiert() };
        // Wie f64: Schlimmstenfalls kommt es zu Genauigkeits-Problemen.
        #[allow(clippy::arithmetic_side_effects)]
        Rechteck { ecke_a: zentrum - halb, ecke_b: zentrum + halb }
    }

    /// Erzeuge ein Rechteck, in dem `self` und `other` enthalten sind.
    #[must_use]
    pub fn einschließend(self, other: Self) -> Self {
        let (min, max) = [self.ecke_b, other.ecke_a, other.ecke_b]
            .into_iter()
            .fold((self.ecke_a, self.ecke_a), min_max);
        Rechteck { ecke_a: min, ecke_b: max }
    }

    /// Dehne das Rechteck aus, so dass es nach einer `winkel`-Rotation um `(0, 0)` (im Uhrzeigersinn)
    /// vollständig enthalten ist.
    #[gleisplan_macros::chain]
    pub fn respektiere_rotation(&mut self, winkel: &Winkel) {
        let Rechteck { ecke_a, ecke_b } = *self;
        let ecken = [
            ecke_a,
            ecke_b,
            Vektor { x: ecke_a.x, y: ecke_b.y },
            Vektor { x: ecke_b.x, y: ecke_a.y },
        ];
        let (min, max) = ecken
            .into_iter()
            .map(|ecke| ecke.rotiert(winkel))
            .fold((ecke_a.rotiert(winkel), ecke_a.rotiert(winkel)), min_max);
        *self = Rechteck { ecke_a: min, ecke_b: max };
    }

    /// Größe des Rechtecks.
    #[must_use]
    pub fn größe(&self) -> Vektor {
        // Wie f64: Schlimmstenfalls kommt es zu Genauigkeits-Problemen.
        #[allow(clippy::arithmetic_side_effects)]
        Vektor { x: (self.ecke_a.x - self.ecke_b.x).abs(), y: (self.ecke_a.y - self.ecke_b.y).abs() }
    }

    /// Mittelpunkt des Rechtecks.
    #[must_use]
    pub fn zentrum(&self) -> Vektor {
        // Wie f64: Schlimmstenfalls kommt es zu Genauigkeits-Problemen.
        #[allow(clippy::arithmetic_side_effects)]
        {
            (self.ecke_a + self.ecke_b) * Skalar(0.5)
        }
    }

    /// Ecke mit den minimalen Koordinaten (links oben).
    #[must_use]
    pub fn ecke_min(&self) -> Vektor {
        Vektor { x: self.ecke_a.x.min(&self.ecke_b.x), y: self.ecke_a.y.min(&self.ecke_b.y) }
    }

    /// Ecke mit den maximalen Koordinaten (rechts unten).
    #[must_use]
    pub fn ecke_max(&self) -> Vektor {
        Vektor { x: self.ecke_a.x.max(&self.ecke_b.x), y: self.ecke_a.y.max(&self.ecke_b.y) }
    }
}

/// Hilfsfunktion für [`Iterator::fold`]: Komponentenweises Minimum und Maximum.
fn min_max((min, max): (Vektor, Vektor), wert: Vektor) -> (Vektor, Vektor) {
    (
        Vektor { x: min.x.min(&wert.x), y: min.y.min(&wert.y) },
        Vektor { x: max.x.max(&wert.x), y: max.y.max(&wert.y) },
    )
}
