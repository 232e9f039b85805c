//! Ein platziertes Gleis und seine Verbindungen in globalen Koordinaten.

use std::fmt::{self, Display, Formatter};

use gleisplan_gleis::{form::Form, katalog::FormId, verbindung::Verbindung};
use gleisplan_typen::{
    position::Position, rechteck::Rechteck, skalar::Skalar, vektor::Vektor,
    winkel::WinkelGradmaß,
};

use crate::zeichnen::Ebene;

/// Zusätzlicher Abstand, ab dem sich zwei Gleise [verdecken](Gleis::verdeckt) \[Pixel\].
pub const VERDECKT_ABSTAND: Skalar = Skalar(2.);

/// Eindeutige Identifikation eines Gleises innerhalb eines [`Gleise`](crate::Gleise)-Layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GleisId(pub(crate) u64);

impl Display for GleisId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Wird ein Gleis aktuell gehalten (z.B. mit der Maus verschoben)?
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Zustand {
    /// Das Gleis liegt auf dem Gleisplan.
    #[default]
    Abgelegt,
    /// Das Gleis wird gehalten und bewegt sich mit.
    Gehalten,
}

/// Eine [`Verbindung`] in globalen Koordinaten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobaleVerbindung {
    /// Globale Position.
    pub position: Vektor,
    /// Globale Richtung im Bereich `[0°, 360°)`.
    pub richtung: WinkelGradmaß,
    /// Die zugrundeliegende lokale Verbindung.
    pub lokal: Verbindung,
}

impl GlobaleVerbindung {
    /// Erzeuge eine globale Verbindung für ein Gleis an `position`.
    #[must_use]
    pub fn neu(lokal: Verbindung, position: &Position) -> Self {
        let mut verbindung =
            GlobaleVerbindung { position: lokal.position, richtung: lokal.richtung, lokal };
        verbindung.bewege_zu(position);
        verbindung
    }

    /// Berechne Position und Richtung neu, nachdem das Gleis an `position` bewegt wurde.
    pub fn bewege_zu(&mut self, position: &Position) {
        self.position = position.transformation(self.lokal.position);
        self.richtung = position.transformation_richtung(self.lokal.richtung);
    }
}

/// Ein auf dem Gleisplan platziertes Gleis.
#[derive(Debug, Clone, PartialEq)]
pub struct Gleis {
    /// Eindeutige Id.
    id: GleisId,
    /// Position des lokalen Ursprungs und Rotation.
    position: Position,
    /// Die Form im [`Katalog`](gleisplan_gleis::katalog::Katalog).
    form: FormId,
    /// Wird das Gleis gerade gehalten?
    zustand: Zustand,
    /// Wird das Gleis von einem gehaltenen Gleis verdeckt?
    verdeckt: bool,
    /// Schwebende Gleise werden immer auf der [`Ebene::Schwebend`] gezeichnet und rasten nie ein.
    schwebend: bool,
    /// Verbindungen in globalen Koordinaten.
    verbindungen: Vec<GlobaleVerbindung>,
}

impl Gleis {
    /// Erzeuge ein neues, abgelegtes Gleis.
    pub(crate) fn neu(id: GleisId, position: Position, form_id: FormId, form: &Form) -> Self {
        let verbindungen = form
            .verbindungen()
            .iter()
            .map(|verbindung| GlobaleVerbindung::neu(*verbindung, &position))
            .collect();
        Gleis {
            id,
            position,
            form: form_id,
            zustand: Zustand::Abgelegt,
            verdeckt: false,
            schwebend: false,
            verbindungen,
        }
    }

    /// Die eindeutige Id.
    #[must_use]
    pub const fn id(&self) -> GleisId {
        self.id
    }

    /// Position des lokalen Ursprungs und Rotation.
    #[must_use]
    pub const fn position(&self) -> &Position {
        &self.position
    }

    /// Die [`FormId`] im zugehörigen Katalog.
    #[must_use]
    pub const fn form(&self) -> FormId {
        self.form
    }

    /// Wird das Gleis gerade gehalten?
    #[must_use]
    pub const fn zustand(&self) -> Zustand {
        self.zustand
    }

    /// Wird das Gleis von einem gehaltenen Gleis verdeckt?
    #[must_use]
    pub const fn ist_verdeckt(&self) -> bool {
        self.verdeckt
    }

    /// Ist das Gleis schwebend?
    #[must_use]
    pub const fn ist_schwebend(&self) -> bool {
        self.schwebend
    }

    /// Ist das Gleis abgelegt und nicht schwebend?
    #[must_use]
    pub const fn ist_abgelegt(&self) -> bool {
        matches!(self.zustand, Zustand::Abgelegt) && !self.schwebend
    }

    /// Verbindungen in globalen Koordinaten.
    #[must_use]
    pub fn verbindungen(&self) -> &[GlobaleVerbindung] {
        &self.verbindungen
    }

    /// Auf welcher [`Ebene`] wird das Gleis gezeichnet?
    #[must_use]
    pub const fn ebene(&self) -> Ebene {
        if self.schwebend || matches!(self.zustand, Zustand::Gehalten) {
            Ebene::Schwebend
        } else {
            Ebene::Abgelegt
        }
    }

    /// Breite und Höhe des achsen-parallelen Rechtecks, das die rotierte [`Form`] umschließt.
    #[must_use]
    pub fn ausdehnung(&self, form: &Form) -> Vektor {
        Rechteck::um_zentrum(Vektor::null_vektor(), form.größe())
            .respektiere_rotation_chain(&self.position.rotation())
            .größe()
    }

    /// Das achsen-parallele Rechteck um das Gleis in globalen Koordinaten.
    #[must_use]
    pub fn rechteck(&self, form: &Form) -> Rechteck {
        Rechteck::um_zentrum(self.position.punkt, self.ausdehnung(form))
    }

    /// Liegt `punkt` echt innerhalb der [`Ausdehnung`](Gleis::ausdehnung)?
    #[must_use]
    pub fn enthält(&self, form: &Form, punkt: Vektor) -> bool {
        let ausdehnung = self.ausdehnung(form);
        // Wie f64: Schlimmstenfalls kommt es zu Genauigkeits-Problemen.
        #[allow(clippy::arithmetic_side_effects)]
        let abstand = punkt - self.position.punkt;
        abstand.x.abs() < ausdehnung.x.halbiert() && abstand.y.abs() < ausdehnung.y.halbiert()
    }

    /// Überschneiden sich die Ausdehnungen beider Gleise?
    #[must_use]
    pub fn überlappt(&self, form: &Form, other: &Gleis, other_form: &Form) -> bool {
        self.überlappt_mit_abstand(form, other, other_form, Skalar(0.))
    }

    /// Überschneiden sich die um [`VERDECKT_ABSTAND`] vergrößerten Ausdehnungen beider Gleise?
    ///
    /// Jedes überlappende Paar verdeckt sich auch.
    #[must_use]
    pub fn verdeckt(&self, form: &Form, other: &Gleis, other_form: &Form) -> bool {
        self.überlappt_mit_abstand(form, other, other_form, VERDECKT_ABSTAND)
    }

    /// Gemeinsame Implementierung für [`überlappt`](Gleis::überlappt)
    /// und [`verdeckt`](Gleis::verdeckt).
    fn überlappt_mit_abstand(
        &self,
        form: &Form,
        other: &Gleis,
        other_form: &Form,
        zusätzlich: Skalar,
    ) -> bool {
        let ausdehnung = self.ausdehnung(form);
        let other_ausdehnung = other.ausdehnung(other_form);
        // Wie f64: Schlimmstenfalls kommt es zu Genauigkeits-Problemen.
        #[allow(clippy::arithmetic_side_effects)]
        {
            let abstand = self.position.punkt - other.position.punkt;
            let grenze_x = (ausdehnung.x + other_ausdehnung.x + zusätzlich).halbiert();
            let grenze_y = (ausdehnung.y + other_ausdehnung.y + zusätzlich).halbiert();
            abstand.x.abs() < grenze_x && abstand.y.abs() < grenze_y
        }
    }

    /// Setze eine neue Position und berechne die globalen Verbindungen neu.
    pub(crate) fn setze_position(&mut self, position: Position) {
        self.position = position;
        for verbindung in &mut self.verbindungen {
            verbindung.bewege_zu(&self.position);
        }
    }

    /// Verschiebe das Gleis um `bewegung`.
    pub(crate) fn verschiebe(&mut self, bewegung: Vektor) {
        // Wie f64: Schlimmstenfalls kommt es zu Genauigkeits-Problemen.
        #[allow(clippy::arithmetic_side_effects)]
        let punkt = self.position.punkt + bewegung;
        self.setze_position(Position { punkt, winkel: self.position.winkel });
    }

    /// Setze den [`Zustand`].
    pub(crate) fn setze_zustand(&mut self, zustand: Zustand) {
        self.zustand = zustand;
    }

    /// Markiere das Gleis als (nicht) verdeckt.
    pub(crate) fn setze_verdeckt(&mut self, verdeckt: bool) {
        self.verdeckt = verdeckt;
    }

    /// Markiere das Gleis als (nicht) schwebend.
    pub(crate) fn setze_schwebend(&mut self, schwebend: bool) {
        self.schwebend = schwebend;
    }
}
