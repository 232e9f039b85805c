//! Verwaltung aller platzierten Gleise eines Gleisplans:
//! Hinzufügen, Entfernen, Einrasten, Bewegen, Ausrichten und Speichern.

use log::{debug, info};

use gleisplan_gleis::{
    form::Form,
    katalog::{FormId, Katalog},
};
use gleisplan_typen::{
    länge::Länge,
    position::Position,
    skalar::Skalar,
    vektor::Vektor,
    winkel::WinkelGradmaß,
};

use crate::{
    gleis::{Gleis, GleisId},
    zeichnen::{lösche_gleis, zeichne_gleis, Darstellung, Ebene, Zeichner},
};

pub mod ausrichten;
pub mod bewegen;
pub mod daten;
mod einrasten;
pub mod gleis;
pub mod zeichnen;

/// Standard-Breite eines neuen Gleisplans in Zoll.
pub const STANDARD_BREITE_ZOLL: f64 = 48.;

/// Standard-Höhe eines neuen Gleisplans in Zoll.
pub const STANDARD_HÖHE_ZOLL: f64 = 24.;

/// Ergebnis eines [Klicks](Gleise::klick).
#[derive(Debug, Clone, PartialEq)]
pub enum Klick {
    /// Ein neues Gleis wurde hinzugefügt.
    Hinzugefügt(GleisId),
    /// Das Gleis an der Klick-Position wurde entfernt.
    Entfernt(Gleis),
}

/// Alle Gleise eines Gleisplans in Zeichen-Reihenfolge.
#[derive(Debug)]
pub struct Gleise<Z> {
    /// Alle bekannten Formen.
    katalog: Katalog,
    /// Die Gleise, später hinzugefügte werden über früheren gezeichnet.
    gleise: Vec<Gleis>,
    /// Gab es Änderungen seit dem letzten Speichern?
    verändert: bool,
    /// Größe des Gleisplans \[Pixel\].
    größe: Vektor,
    /// Farben und Einstellungen beim Zeichnen.
    darstellung: Darstellung,
    /// Die nächste freie [`GleisId`].
    nächste_id: u64,
    /// Zeichnet die Gleise.
    zeichner: Z,
}

/// Die Größe eines Gleisplans mit Standard-Maßen \[Pixel\].
#[must_use]
pub fn standard_größe() -> Vektor {
    Vektor {
        x: Länge::zoll(STANDARD_BREITE_ZOLL).als_pixel(),
        y: Länge::zoll(STANDARD_HÖHE_ZOLL).als_pixel(),
    }
}

impl<Z: Zeichner> Gleise<Z> {
    /// Erzeuge einen leeren Gleisplan mit [Standard-Größe](standard_größe).
    #[must_use]
    pub fn neu(katalog: Katalog, zeichner: Z) -> Self {
        Gleise {
            katalog,
            gleise: Vec::new(),
            verändert: false,
            größe: standard_größe(),
            darstellung: Darstellung::default(),
            nächste_id: 0,
            zeichner,
        }
    }

    /// Alle bekannten Formen.
    #[must_use]
    pub const fn katalog(&self) -> &Katalog {
        &self.katalog
    }

    /// Alle Gleise in Zeichen-Reihenfolge.
    #[must_use]
    pub fn gleise(&self) -> &[Gleis] {
        &self.gleise
    }

    /// Das Gleis mit der übergebenen [`GleisId`].
    #[must_use]
    pub fn gleis(&self, id: GleisId) -> Option<&Gleis> {
        self.gleise.iter().find(|gleis| gleis.id() == id)
    }

    /// Die [`Form`] eines Gleises.
    #[must_use]
    pub fn form(&self, gleis: &Gleis) -> &Form {
        self.katalog.form(gleis.form())
    }

    /// Größe des Gleisplans \[Pixel\].
    #[must_use]
    pub const fn größe(&self) -> Vektor {
        self.größe
    }

    /// Farben und Einstellungen beim Zeichnen.
    #[must_use]
    pub const fn darstellung(&self) -> &Darstellung {
        &self.darstellung
    }

    /// Ändere die Darstellung und zeichne alle Gleise neu.
    pub fn setze_darstellung(&mut self, darstellung: Darstellung) {
        self.darstellung = darstellung;
        self.neu_zeichnen();
    }

    /// Der verwendete [`Zeichner`].
    #[must_use]
    pub const fn zeichner(&self) -> &Z {
        &self.zeichner
    }

    /// Der verwendete [`Zeichner`], veränderbar.
    pub fn zeichner_mut(&mut self) -> &mut Z {
        &mut self.zeichner
    }

    /// Index des Gleises mit der übergebenen [`GleisId`].
    fn index(&self, id: GleisId) -> Option<usize> {
        self.gleise.iter().position(|gleis| gleis.id() == id)
    }

    /// Reserviere eine neue [`GleisId`].
    fn neue_id(&mut self) -> GleisId {
        let id = GleisId(self.nächste_id);
        self.nächste_id = self.nächste_id.saturating_add(1);
        id
    }

    /// Finde das Gleis, dessen Ausdehnung `punkt` echt enthält.
    ///
    /// Gibt es mehrere, wird das Gleis mit dem nächsten Mittelpunkt zurückgegeben,
    /// bei gleichem Abstand das zuerst hinzugefügte.
    #[must_use]
    pub fn finde(&self, punkt: Vektor) -> Option<&Gleis> {
        self.gleise
            .iter()
            .filter(|gleis| gleis.enthält(self.katalog.form(gleis.form()), punkt))
            .min_by(|a, b| {
                let abstand_a = punkt.abstand(&a.position().punkt);
                let abstand_b = punkt.abstand(&b.position().punkt);
                abstand_a.0.total_cmp(&abstand_b.0)
            })
    }

    /// Überlappen sich die Ausdehnungen beider Gleise?
    /// Ist eine [`GleisId`] unbekannt wird `false` zurückgegeben.
    #[must_use]
    pub fn überlappt(&self, a: GleisId, b: GleisId) -> bool {
        match (self.gleis(a), self.gleis(b)) {
            (Some(gleis_a), Some(gleis_b)) => {
                gleis_a.überlappt(self.form(gleis_a), gleis_b, self.form(gleis_b))
            },
            _ => false,
        }
    }

    /// Verdecken sich beide Gleise (Überlappung mit zusätzlichem Abstand)?
    /// Ist eine [`GleisId`] unbekannt wird `false` zurückgegeben.
    #[must_use]
    pub fn verdeckt(&self, a: GleisId, b: GleisId) -> bool {
        match (self.gleis(a), self.gleis(b)) {
            (Some(gleis_a), Some(gleis_b)) => {
                gleis_a.verdeckt(self.form(gleis_a), gleis_b, self.form(gleis_b))
            },
            _ => false,
        }
    }

    /// Füge ein neues Gleis bei `punkt` hinzu und lasse es an benachbarten Gleisen einrasten.
    pub fn hinzufügen(&mut self, punkt: Vektor, form: FormId) -> GleisId {
        let position = Position { punkt, winkel: WinkelGradmaß::neu(0.) };
        self.hinzufügen_intern(position, form, true)
    }

    /// Füge ein neues Gleis exakt an `position` hinzu, ohne es einrasten zu lassen.
    pub fn platzieren(&mut self, position: Position, form: FormId) -> GleisId {
        self.hinzufügen_intern(position, form, false)
    }

    /// Gemeinsame Implementierung von [`hinzufügen`](Gleise::hinzufügen)
    /// und [`platzieren`](Gleise::platzieren).
    fn hinzufügen_intern(&mut self, position: Position, form: FormId, einrasten: bool) -> GleisId {
        let id = self.neue_id();
        let position = Position::neu(position.punkt, position.winkel);
        let gleis = Gleis::neu(id, position, form, self.katalog.form(form));
        self.gleise.push(gleis);
        let index = self.gleise.len().saturating_sub(1);
        if einrasten {
            if let Some(neue_position) = einrasten::einrasten(&self.katalog, &self.gleise, index) {
                if let Some(gleis) = self.gleise.get_mut(index) {
                    gleis.setze_position(neue_position);
                }
            }
        }
        if let Some(gleis) = self.gleise.get(index) {
            debug!("{id} hinzugefügt: {:?}", gleis.position());
            zeichne_gleis(
                &mut self.zeichner,
                &self.katalog,
                &self.darstellung,
                gleis,
                self.darstellung.normal,
            );
        }
        self.verändert = true;
        id
    }

    /// Entferne das Gleis mit der übergebenen [`GleisId`].
    ///
    /// Alle verbleibenden abgelegten Gleise werden neu gezeichnet.
    pub fn entfernen(&mut self, id: GleisId) -> Option<Gleis> {
        let index = self.index(id)?;
        let gleis = self.gleise.remove(index);
        lösche_gleis(&mut self.zeichner, &self.katalog, &gleis);
        for verbleibend in self.gleise.iter().filter(|gleis| gleis.ebene() == Ebene::Abgelegt) {
            zeichne_gleis(
                &mut self.zeichner,
                &self.katalog,
                &self.darstellung,
                verbleibend,
                self.darstellung.normal,
            );
        }
        self.verändert = true;
        debug!("{id} entfernt.");
        Some(gleis)
    }

    /// Entferne das Gleis bei `punkt`, oder füge ein neues hinzu, falls dort keines liegt.
    pub fn klick(&mut self, punkt: Vektor, form: FormId) -> Klick {
        match self.finde(punkt).map(Gleis::id) {
            Some(id) => match self.entfernen(id) {
                Some(gleis) => Klick::Entfernt(gleis),
                None => Klick::Hinzugefügt(self.hinzufügen(punkt, form)),
            },
            None => Klick::Hinzugefügt(self.hinzufügen(punkt, form)),
        }
    }

    /// Gab es Änderungen seit dem letzten Speichern?
    #[must_use]
    pub const fn ist_verändert(&self) -> bool {
        self.verändert
    }

    /// Markiere den aktuellen Zustand als gespeichert.
    pub fn als_gespeichert_markieren(&mut self) {
        self.verändert = false;
    }

    /// Entferne alle Gleise und setze eine neue Größe des Gleisplans.
    pub fn zurücksetzen(&mut self, breite: Skalar, höhe: Skalar) {
        self.gleise.clear();
        self.größe = Vektor { x: breite, y: höhe };
        self.zeichner.leere(Ebene::Abgelegt, self.größe);
        self.zeichner.leere(Ebene::Schwebend, self.größe);
        self.verändert = false;
        info!("Gleisplan zurückgesetzt, neue Größe {}x{}.", breite.0, höhe.0);
    }

    /// Leere beide Ebenen und zeichne alle Gleise in der Farbe ihres Zustands neu.
    pub fn neu_zeichnen(&mut self) {
        self.zeichner.leere(Ebene::Abgelegt, self.größe);
        self.zeichner.leere(Ebene::Schwebend, self.größe);
        for gleis in &self.gleise {
            zeichne_gleis(
                &mut self.zeichner,
                &self.katalog,
                &self.darstellung,
                gleis,
                self.darstellung.farbe(gleis.zustand()),
            );
        }
    }
}

#[cfg(test)]
mod test;
