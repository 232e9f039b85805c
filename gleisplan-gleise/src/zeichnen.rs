//! Schnittstelle zum Zeichnen der Gleise auf zwei übereinanderliegenden Ebenen.

use log::trace;

use gleisplan_gleis::{form::Form, katalog::Katalog};
use gleisplan_typen::{
    farbe::{self, Farbe},
    position::Position,
    vektor::Vektor,
};

use crate::gleis::{Gleis, Zustand};

/// Auf welcher Zeichenfläche wird ein Gleis dargestellt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ebene {
    /// Abgelegte Gleise.
    Abgelegt,
    /// Gehaltene und schwebende Gleise, über den abgelegten Gleisen.
    Schwebend,
}

/// Einstellungen für das Zeichnen der Gleise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Darstellung {
    /// Farbe abgelegter Gleise.
    pub normal: Farbe,
    /// Farbe gehaltener Gleise.
    pub gehalten: Farbe,
    /// Farbe von Gleisen, die ein gehaltenes Gleis überlappt.
    pub überlappend: Farbe,
    /// Farbe von Gleisen, die ein gehaltenes Gleis knapp verdeckt.
    pub verdeckt: Farbe,
    /// Sollen Schwellen gezeichnet werden?
    pub schwellen: bool,
    /// Sollen Kurven farblich hervorgehoben werden?
    pub kurven_farbig: bool,
}

impl Default for Darstellung {
    fn default() -> Self {
        Darstellung {
            normal: farbe::GRÜN,
            gehalten: farbe::BLAU,
            überlappend: farbe::ROT,
            verdeckt: farbe::ORANGE,
            schwellen: true,
            kurven_farbig: false,
        }
    }
}

impl Darstellung {
    /// Die Farbe für ein Gleis im übergebenen [`Zustand`].
    #[must_use]
    pub const fn farbe(&self, zustand: Zustand) -> Farbe {
        match zustand {
            Zustand::Abgelegt => self.normal,
            Zustand::Gehalten => self.gehalten,
        }
    }
}

/// Zeichne Gleise auf zwei Ebenen, z.B. zwei übereinanderliegende Canvas.
///
/// Das eigentliche Aussehen einer [`Form`] bestimmt die Implementierung,
/// z.B. anhand von [`Form::art`].
pub trait Zeichner {
    /// Zeichne eine [`Form`] an `position`.
    fn zeichne(
        &mut self,
        ebene: Ebene,
        position: &Position,
        form: &Form,
        farbe: Farbe,
        darstellung: &Darstellung,
    );

    /// Lösche eine zuvor an `position` gezeichnete [`Form`].
    fn lösche(&mut self, ebene: Ebene, position: &Position, form: &Form);

    /// Lösche alles auf der Ebene und passe sie an die neue Größe an.
    fn leere(&mut self, ebene: Ebene, größe: Vektor);
}

/// Zeichne ein Gleis auf der aktuellen Ebene.
pub(crate) fn zeichne_gleis<Z: Zeichner + ?Sized>(
    zeichner: &mut Z,
    katalog: &Katalog,
    darstellung: &Darstellung,
    gleis: &Gleis,
    farbe: Farbe,
) {
    let ebene = gleis.ebene();
    trace!("Zeichne {} auf {ebene:?} in {}.", gleis.id(), farbe.hex());
    zeichner.zeichne(ebene, gleis.position(), katalog.form(gleis.form()), farbe, darstellung);
}

/// Lösche ein Gleis von der aktuellen Ebene.
pub(crate) fn lösche_gleis<Z: Zeichner + ?Sized>(zeichner: &mut Z, katalog: &Katalog, gleis: &Gleis) {
    let ebene = gleis.ebene();
    trace!("Lösche {} von {ebene:?}.", gleis.id());
    zeichner.lösche(ebene, gleis.position(), katalog.form(gleis.form()));
}
