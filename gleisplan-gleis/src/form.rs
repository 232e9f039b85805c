//! Unveränderliche Geometrie eines Gleises oder einer einfachen Platzhalter-Form.

use gleisplan_typen::{
    länge::{Länge, Maßstab},
    skalar::Skalar,
    vektor::Vektor,
    winkel::{Trigonometrie, Winkel, WinkelGradmaß},
};

use crate::verbindung::Verbindung;

/// In welche Richtung zweigt eine [Weiche](FormArt::Weiche) ab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hand {
    /// Abzweigung nach rechts.
    Rechts,
    /// Abzweigung nach links.
    Links,
    /// Abzweigung in beide Richtungen (Dreiwege-Weiche).
    Alle,
}

/// Die Variante einer [`Form`] mit ihren spezifischen Parametern.
///
/// Alle Längen in Pixel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FormArt {
    /// Ein einfaches Rechteck ohne Verbindungen.
    Quadrat,
    /// Ein Rechteck mit einem Punkt in der Mitte.
    MittelPunkt {
        /// Durchmesser des Punktes.
        durchmesser: Skalar,
    },
    /// Ein gerades Gleis.
    Gerade {
        /// Länge des Gleises.
        länge: Skalar,
    },
    /// Ein gebogenes Gleis.
    Kurve {
        /// Radius der Kurve.
        radius: Skalar,
        /// Öffnungswinkel der Kurve.
        winkel: WinkelGradmaß,
    },
    /// Zwei sich kreuzende gerade Gleise.
    Kreuzung {
        /// Länge beider Geraden.
        länge: Skalar,
        /// Winkel zwischen beiden Geraden.
        winkel: WinkelGradmaß,
    },
    /// Ein gerades Gleis, das eine Straße kreuzt.
    Straße {
        /// Breite der Straße.
        breite: Skalar,
        /// Länge des Gleises.
        länge: Skalar,
    },
    /// Eine Weiche mit gerader Durchfahrt und gebogener Abzweigung.
    Weiche {
        /// Richtung der Abzweigung.
        hand: Hand,
        /// Länge der geraden Durchfahrt.
        länge: Skalar,
        /// Radius der Abzweigung.
        radius: Skalar,
        /// Winkel der Abzweigung.
        winkel: WinkelGradmaß,
    },
}

/// Geometrie einer Form: Name, Größe ohne Rotation und lokale Verbindungen.
///
/// Der lokale Ursprung liegt im Zentrum des umschließenden Rechtecks.
#[derive(Debug, Clone, PartialEq)]
pub struct Form {
    /// Eindeutiger Name, wird beim Speichern verwendet.
    name: String,
    /// Breite und Höhe ohne Rotation.
    größe: Vektor,
    /// Variante und ihre Parameter.
    art: FormArt,
    /// Verbindungen im lokalen Koordinatensystem.
    verbindungen: Vec<Verbindung>,
    /// Maximaler Abstand zum Einrasten an einer Verbindung.
    fangradius: Skalar,
}

/// Verbindung am oberen Ende, zeigt nach oben.
fn ende_oben(halbe_höhe: Skalar) -> Verbindung {
    // Wie f64: Schlimmstenfalls kommt es zu Genauigkeits-Problemen.
    #[allow(clippy::arithmetic_side_effects)]
    Verbindung { position: Vektor { x: Skalar(0.), y: -halbe_höhe }, richtung: WinkelGradmaß::neu(0.) }
}

/// Verbindung am unteren Ende, zeigt nach unten.
fn ende_unten(halbe_höhe: Skalar) -> Verbindung {
    Verbindung {
        position: Vektor { x: Skalar(0.), y: halbe_höhe },
        richtung: WinkelGradmaß::HALBE_UMDREHUNG,
    }
}

/// Ende einer Geraden, die um `winkel` gegenüber der Senkrechten gedreht ist.
fn ende_gedreht(halbe_länge: Skalar, winkel: WinkelGradmaß) -> Verbindung {
    let Verbindung { position, richtung } = ende_oben(halbe_länge);
    // Wie f64: Schlimmstenfalls kommt es zu Genauigkeits-Problemen.
    #[allow(clippy::arithmetic_side_effects)]
    Verbindung {
        position: position.rotiert(&Winkel::from(winkel)),
        richtung: (richtung + winkel).normalisiert(),
    }
}

impl Form {
    /// Ein Rechteck ohne Verbindungen.
    #[must_use]
    pub fn quadrat(name: impl Into<String>, breite: Skalar, höhe: Skalar) -> Self {
        Form {
            name: name.into(),
            größe: Vektor { x: breite, y: höhe },
            art: FormArt::Quadrat,
            verbindungen: Vec::new(),
            fangradius: Skalar(0.),
        }
    }

    /// Ein Rechteck ohne Verbindungen, mit einem Punkt in der Mitte.
    #[must_use]
    pub fn mittel_punkt(
        name: impl Into<String>,
        breite: Skalar,
        höhe: Skalar,
        durchmesser: Skalar,
    ) -> Self {
        Form { art: FormArt::MittelPunkt { durchmesser }, ..Form::quadrat(name, breite, höhe) }
    }

    /// Ein gerades Gleis mit Verbindungen an beiden Enden.
    #[must_use]
    pub fn gerade(name: impl Into<String>, maßstab: Maßstab, länge: Länge) -> Self {
        let länge = länge.als_pixel();
        let halbe_länge = länge.halbiert();
        Form {
            name: name.into(),
            größe: Vektor { x: maßstab.schotter_breite(), y: länge },
            art: FormArt::Gerade { länge },
            verbindungen: vec![ende_oben(halbe_länge), ende_unten(halbe_länge)],
            fangradius: maßstab.fangradius(),
        }
    }

    /// Ein gebogenes Gleis.
    ///
    /// Der lokale Ursprung ist der Mittelpunkt des Bogens, der Kreismittelpunkt liegt bei `(radius, 0)`.
    #[must_use]
    pub fn kurve(
        name: impl Into<String>,
        maßstab: Maßstab,
        radius: Länge,
        winkel: WinkelGradmaß,
    ) -> Self {
        let radius = radius.als_pixel();
        let schotter = maßstab.schotter_breite();
        // Wie f64: Schlimmstenfalls kommt es zu Genauigkeits-Problemen.
        #[allow(clippy::arithmetic_side_effects)]
        let halber_winkel = winkel * 0.5;
        // Wie f64: Schlimmstenfalls kommt es zu Genauigkeits-Problemen.
        #[allow(clippy::arithmetic_side_effects)]
        let größe = Vektor {
            x: radius.doppelt() - radius.doppelt() * halber_winkel.cos() + schotter,
            y: (radius.doppelt() + schotter) * halber_winkel.sin(),
        };
        let zentrum = Vektor { x: radius, y: Skalar(0.) };
        let ende = |drehung: WinkelGradmaß| {
            Vektor::null_vektor().rotiert_um(&zentrum, &Winkel::from(drehung))
        };
        // Wie f64: Schlimmstenfalls kommt es zu Genauigkeits-Problemen.
        #[allow(clippy::arithmetic_side_effects)]
        let verbindungen = vec![
            Verbindung { position: ende(halber_winkel), richtung: halber_winkel },
            Verbindung {
                position: ende(-halber_winkel),
                richtung: WinkelGradmaß::HALBE_UMDREHUNG - halber_winkel,
            },
        ];
        Form {
            name: name.into(),
            größe,
            art: FormArt::Kurve { radius, winkel },
            verbindungen,
            fangradius: maßstab.fangradius(),
        }
    }

    /// Zwei gerade Gleise der selben Länge, die sich in ihrer Mitte unter `winkel` kreuzen.
    #[must_use]
    pub fn kreuzung(
        name: impl Into<String>,
        maßstab: Maßstab,
        länge: Länge,
        winkel: WinkelGradmaß,
    ) -> Self {
        let länge = länge.als_pixel();
        let halbe_länge = länge.halbiert();
        // Wie f64: Schlimmstenfalls kommt es zu Genauigkeits-Problemen.
        #[allow(clippy::arithmetic_side_effects)]
        let verbindungen = vec![
            ende_oben(halbe_länge),
            ende_gedreht(halbe_länge, winkel),
            ende_unten(halbe_länge),
            ende_gedreht(halbe_länge, WinkelGradmaß::HALBE_UMDREHUNG + winkel),
        ];
        Form {
            name: name.into(),
            größe: Vektor { x: länge, y: länge },
            art: FormArt::Kreuzung { länge, winkel },
            verbindungen,
            fangradius: maßstab.fangradius(),
        }
    }

    /// Ein gerades Gleis, das eine Straße der Breite `breite` kreuzt.
    #[must_use]
    pub fn straße(name: impl Into<String>, maßstab: Maßstab, breite: Länge, länge: Länge) -> Self {
        let breite = breite.als_pixel();
        let länge = länge.als_pixel();
        let halbe_länge = länge.halbiert();
        Form {
            name: name.into(),
            größe: Vektor { x: länge, y: länge },
            art: FormArt::Straße { breite, länge },
            verbindungen: vec![ende_oben(halbe_länge), ende_unten(halbe_länge)],
            fangradius: maßstab.fangradius(),
        }
    }

    /// Eine Weiche. Die gemeinsame Verbindung liegt am unteren Ende,
    /// die gerade Durchfahrt endet am oberen Ende.
    #[must_use]
    pub fn weiche(
        name: impl Into<String>,
        maßstab: Maßstab,
        hand: Hand,
        länge: Länge,
        radius: Länge,
        winkel: WinkelGradmaß,
    ) -> Self {
        let länge = länge.als_pixel();
        let radius = radius.als_pixel();
        let halbe_länge = länge.halbiert();
        // Wie f64: Schlimmstenfalls kommt es zu Genauigkeits-Problemen.
        #[allow(clippy::arithmetic_side_effects)]
        let versatz = radius * (Skalar(1.) - winkel.cos());
        // Wie f64: Schlimmstenfalls kommt es zu Genauigkeits-Problemen.
        #[allow(clippy::arithmetic_side_effects)]
        let abzweig_y = halbe_länge - radius * winkel.sin();
        // Wie f64: Schlimmstenfalls kommt es zu Genauigkeits-Problemen.
        #[allow(clippy::arithmetic_side_effects)]
        let rechts = Verbindung { position: Vektor { x: versatz, y: abzweig_y }, richtung: winkel };
        // Wie f64: Schlimmstenfalls kommt es zu Genauigkeits-Problemen.
        #[allow(clippy::arithmetic_side_effects)]
        let links = Verbindung {
            position: Vektor { x: -versatz, y: abzweig_y },
            richtung: (WinkelGradmaß::GANZE_UMDREHUNG - winkel).normalisiert(),
        };
        let mut verbindungen = vec![ende_unten(halbe_länge), ende_oben(halbe_länge)];
        match hand {
            Hand::Rechts => verbindungen.push(rechts),
            Hand::Links => verbindungen.push(links),
            Hand::Alle => verbindungen.extend([rechts, links]),
        }
        // Wie f64: Schlimmstenfalls kommt es zu Genauigkeits-Problemen.
        #[allow(clippy::arithmetic_side_effects)]
        let breite = maßstab.schotter_breite() + versatz.doppelt();
        Form {
            name: name.into(),
            größe: Vektor { x: breite, y: länge },
            art: FormArt::Weiche { hand, länge, radius, winkel },
            verbindungen,
            fangradius: maßstab.fangradius(),
        }
    }

    /// Eindeutiger Name der Form.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Breite und Höhe ohne Rotation.
    #[must_use]
    pub const fn größe(&self) -> Vektor {
        self.größe
    }

    /// Variante der Form, z.B. zum Zeichnen.
    #[must_use]
    pub const fn art(&self) -> &FormArt {
        &self.art
    }

    /// Verbindungen im lokalen Koordinatensystem.
    #[must_use]
    pub fn verbindungen(&self) -> &[Verbindung] {
        &self.verbindungen
    }

    /// Hat die Form mindestens eine Verbindung?
    #[must_use]
    pub fn hat_verbindungen(&self) -> bool {
        !self.verbindungen.is_empty()
    }

    /// Maximaler Abstand zum Einrasten an einer Verbindung, `0` ohne Verbindungen.
    #[must_use]
    pub const fn fangradius(&self) -> Skalar {
        self.fangradius
    }
}

#[cfg(test)]
mod test;
