//! Verschiebe alle Gleise gemeinsam an einen Rand oder in die Mitte des Gleisplans.

use log::info;

use gleisplan_typen::{rechteck::Rechteck, skalar::Skalar, vektor::Vektor};

use crate::{
    zeichnen::{lösche_gleis, zeichne_gleis, Zeichner},
    Gleise,
};

/// Wohin sollen alle Gleise verschoben werden.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Ausrichtung {
    /// Linker Rand bei `x = 0`.
    Links,
    /// Rechter Rand bei `x = grenze`.
    Rechts(Skalar),
    /// Oberer Rand bei `y = 0`.
    Oben,
    /// Unterer Rand bei `y = grenze`.
    Unten(Skalar),
    /// Zentriert im Rechteck `[0, breite] x [0, höhe]`.
    Mitte {
        /// Breite des Bereichs.
        breite: Skalar,
        /// Höhe des Bereichs.
        höhe: Skalar,
    },
}

impl Ausrichtung {
    /// Die notwendige Verschiebung für Gleise innerhalb von `umfang`.
    fn verschiebung(self, umfang: &Rechteck) -> Vektor {
        let min = umfang.ecke_min();
        let max = umfang.ecke_max();
        let null = Skalar(0.);
        // Wie f64: Schlimmstenfalls kommt es zu Genauigkeits-Problemen.
        #[allow(clippy::arithmetic_side_effects)]
        match self {
            Ausrichtung::Links => Vektor { x: -min.x, y: null },
            Ausrichtung::Rechts(grenze) => Vektor { x: grenze - max.x, y: null },
            Ausrichtung::Oben => Vektor { x: null, y: -min.y },
            Ausrichtung::Unten(grenze) => Vektor { x: null, y: grenze - max.y },
            Ausrichtung::Mitte { breite, höhe } => {
                let zentrum = umfang.zentrum();
                Vektor { x: breite.halbiert() - zentrum.x, y: höhe.halbiert() - zentrum.y }
            },
        }
    }
}

impl<Z: Zeichner> Gleise<Z> {
    /// Das kleinste Rechteck, das alle Gleise umschließt.
    #[must_use]
    pub fn umfang(&self) -> Option<Rechteck> {
        self.gleise
            .iter()
            .map(|gleis| gleis.rechteck(self.katalog.form(gleis.form())))
            .reduce(Rechteck::einschließend)
    }

    /// Verschiebe alle Gleise gemeinsam entsprechend der [`Ausrichtung`].
    ///
    /// Ohne Gleise passiert nichts.
    pub fn ausrichten(&mut self, ausrichtung: Ausrichtung) {
        let Some(umfang) = self.umfang() else {
            return;
        };
        let verschiebung = ausrichtung.verschiebung(&umfang);
        for gleis in &mut self.gleise {
            lösche_gleis(&mut self.zeichner, &self.katalog, gleis);
            gleis.verschiebe(verschiebung);
        }
        for gleis in &self.gleise {
            zeichne_gleis(
                &mut self.zeichner,
                &self.katalog,
                &self.darstellung,
                gleis,
                self.darstellung.farbe(gleis.zustand()),
            );
        }
        info!("Gleise ausgerichtet ({ausrichtung:?}), verschoben um {verschiebung:?}.");
        self.verändert = true;
    }

    /// Verschiebe alle Gleise an den linken Rand.
    pub fn ausrichten_links(&mut self) {
        self.ausrichten(Ausrichtung::Links);
    }

    /// Verschiebe alle Gleise an den rechten Rand des Gleisplans.
    pub fn ausrichten_rechts(&mut self) {
        self.ausrichten(Ausrichtung::Rechts(self.größe.x));
    }

    /// Verschiebe alle Gleise an den oberen Rand.
    pub fn ausrichten_oben(&mut self) {
        self.ausrichten(Ausrichtung::Oben);
    }

    /// Verschiebe alle Gleise an den unteren Rand des Gleisplans.
    pub fn ausrichten_unten(&mut self) {
        self.ausrichten(Ausrichtung::Unten(self.größe.y));
    }

    /// Zentriere alle Gleise auf dem Gleisplan.
    pub fn zentrieren(&mut self) {
        let Vektor { x: breite, y: höhe } = self.größe;
        self.ausrichten(Ausrichtung::Mitte { breite, höhe });
    }
}

#[cfg(test)]
mod test;
