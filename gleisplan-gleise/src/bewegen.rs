//! Anheben, Bewegen, Ablegen und Drehen von Gleisen.

use log::debug;

use gleisplan_typen::{
    position::Position,
    vektor::Vektor,
    winkel::{Trigonometrie, WinkelGradmaß},
};

use crate::{
    einrasten,
    gleis::{Gleis, GleisId, Zustand},
    zeichnen::{lösche_gleis, zeichne_gleis, Ebene, Zeichner},
    Gleise,
};

/// Wie liegt ein nicht gehaltenes Gleis relativ zu den gehaltenen Gleisen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lage {
    /// Überlappt ein gehaltenes Gleis.
    Überlappt,
    /// Wird knapp von einem gehaltenen Gleis verdeckt.
    Verdeckt,
    /// Kein gehaltenes Gleis in der Nähe.
    Frei,
}

impl<Z: Zeichner> Gleise<Z> {
    /// Hebe das abgelegte Gleis bei `punkt` an.
    ///
    /// Gibt die [`GleisId`] des angehobenen Gleises zurück.
    pub fn anheben(&mut self, punkt: Vektor) -> Option<GleisId> {
        let id = self
            .gleise
            .iter()
            .filter(|gleis| {
                gleis.zustand() == Zustand::Abgelegt
                    && gleis.enthält(self.katalog.form(gleis.form()), punkt)
            })
            .min_by(|a, b| {
                let abstand_a = punkt.abstand(&a.position().punkt);
                let abstand_b = punkt.abstand(&b.position().punkt);
                abstand_a.0.total_cmp(&abstand_b.0)
            })?
            .id();
        self.anheben_id(id).then_some(id)
    }

    /// Hebe das abgelegte Gleis mit der übergebenen [`GleisId`] an.
    ///
    /// Gibt `false` zurück, wenn kein solches Gleis existiert oder es bereits gehalten wird.
    pub fn anheben_id(&mut self, id: GleisId) -> bool {
        let Some(index) = self.gleise.iter().position(|gleis| gleis.id() == id) else {
            return false;
        };
        let Some(gleis) = self.gleise.get(index) else {
            return false;
        };
        if gleis.zustand() == Zustand::Gehalten {
            return false;
        }
        lösche_gleis(&mut self.zeichner, &self.katalog, gleis);
        let form = self.katalog.form(gleis.form());
        // Beim Löschen können verdeckte Gleise beschädigt werden.
        for other in self.gleise.iter().filter(|other| {
            other.id() != id
                && other.ebene() == Ebene::Abgelegt
                && gleis.verdeckt(form, other, self.katalog.form(other.form()))
        }) {
            zeichne_gleis(
                &mut self.zeichner,
                &self.katalog,
                &self.darstellung,
                other,
                self.darstellung.normal,
            );
        }
        if let Some(gleis) = self.gleise.get_mut(index) {
            gleis.setze_zustand(Zustand::Gehalten);
        }
        if let Some(gleis) = self.gleise.get(index) {
            zeichne_gleis(
                &mut self.zeichner,
                &self.katalog,
                &self.darstellung,
                gleis,
                self.darstellung.gehalten,
            );
        }
        debug!("{id} angehoben.");
        true
    }

    /// Gibt es aktuell gehaltene Gleise?
    #[must_use]
    pub fn hat_gehaltene(&self) -> bool {
        self.gleise.iter().any(|gleis| gleis.zustand() == Zustand::Gehalten)
    }

    /// Bewege alle gehaltenen Gleise um `bewegung`.
    ///
    /// Nicht gehaltene Gleise, die von einem gehaltenen Gleis überlappt oder verdeckt werden,
    /// werden entsprechend eingefärbt.
    pub fn bewegen(&mut self, bewegung: Vektor) {
        if !self.hat_gehaltene() {
            return;
        }
        // Einordnung anhand der Position vor der Bewegung.
        let lagen: Vec<Lage> = self
            .gleise
            .iter()
            .map(|other| {
                if other.zustand() == Zustand::Gehalten {
                    return Lage::Frei;
                }
                let other_form = self.katalog.form(other.form());
                let gehaltene =
                    self.gleise.iter().filter(|gleis| gleis.zustand() == Zustand::Gehalten);
                let mut lage = Lage::Frei;
                for gleis in gehaltene {
                    let form = self.katalog.form(gleis.form());
                    if gleis.überlappt(form, other, other_form) {
                        lage = Lage::Überlappt;
                        break;
                    } else if gleis.verdeckt(form, other, other_form) {
                        lage = Lage::Verdeckt;
                    }
                }
                lage
            })
            .collect();

        for gleis in self.gleise.iter().filter(|gleis| gleis.zustand() == Zustand::Gehalten) {
            lösche_gleis(&mut self.zeichner, &self.katalog, gleis);
        }
        for (gleis, lage) in self.gleise.iter_mut().zip(lagen) {
            if gleis.zustand() == Zustand::Gehalten {
                continue;
            }
            let farbe = match lage {
                Lage::Überlappt => self.darstellung.überlappend,
                Lage::Verdeckt => self.darstellung.verdeckt,
                Lage::Frei if gleis.ist_verdeckt() => {
                    lösche_gleis(&mut self.zeichner, &self.katalog, gleis);
                    zeichne_gleis(
                        &mut self.zeichner,
                        &self.katalog,
                        &self.darstellung,
                        gleis,
                        self.darstellung.normal,
                    );
                    gleis.setze_verdeckt(false);
                    continue;
                },
                Lage::Frei => continue,
            };
            zeichne_gleis(&mut self.zeichner, &self.katalog, &self.darstellung, gleis, farbe);
            gleis.setze_verdeckt(true);
        }
        for gleis in self.gleise.iter_mut().filter(|gleis| gleis.zustand() == Zustand::Gehalten) {
            gleis.verschiebe(bewegung);
            zeichne_gleis(
                &mut self.zeichner,
                &self.katalog,
                &self.darstellung,
                gleis,
                self.darstellung.gehalten,
            );
        }
        self.verändert = true;
    }

    /// Lege alle gehaltenen Gleise ab und lasse sie an abgelegten Gleisen einrasten.
    pub fn ablegen(&mut self) {
        let gehaltene: Vec<usize> = self
            .gleise
            .iter()
            .enumerate()
            .filter_map(|(index, gleis)| (gleis.zustand() == Zustand::Gehalten).then_some(index))
            .collect();
        if gehaltene.is_empty() {
            return;
        }
        // Einrasten solange alle noch gehalten sind, damit sie nicht aneinander einrasten.
        let positionen: Vec<(usize, Option<Position>)> = gehaltene
            .into_iter()
            .map(|index| (index, einrasten::einrasten(&self.katalog, &self.gleise, index)))
            .collect();
        for (index, position) in positionen {
            let Some(gleis) = self.gleise.get_mut(index) else {
                continue;
            };
            lösche_gleis(&mut self.zeichner, &self.katalog, gleis);
            gleis.setze_zustand(Zustand::Abgelegt);
            if let Some(position) = position {
                gleis.setze_position(position);
            }
            debug!("{} abgelegt: {:?}", gleis.id(), gleis.position());
            zeichne_gleis(
                &mut self.zeichner,
                &self.katalog,
                &self.darstellung,
                gleis,
                self.darstellung.normal,
            );
        }
        for gleis in self.gleise.iter_mut().filter(|gleis| gleis.ist_verdeckt()) {
            zeichne_gleis(
                &mut self.zeichner,
                &self.katalog,
                &self.darstellung,
                gleis,
                self.darstellung.normal,
            );
            gleis.setze_verdeckt(false);
        }
        self.verändert = true;
    }

    /// Drehe ein Gleis um `winkel` im Uhrzeigersinn, ohne es einrasten zu lassen.
    ///
    /// Gibt `false` zurück, wenn kein Gleis mit der [`GleisId`] existiert.
    pub fn drehen(&mut self, id: GleisId, winkel: WinkelGradmaß) -> bool {
        let Some(gleis) = self.gleise.iter_mut().find(|gleis| gleis.id() == id) else {
            return false;
        };
        lösche_gleis(&mut self.zeichner, &self.katalog, gleis);
        let Position { punkt, winkel: bisher } = *gleis.position();
        // Wie f64: Schlimmstenfalls kommt es zu Genauigkeits-Problemen.
        #[allow(clippy::arithmetic_side_effects)]
        let neuer_winkel = (bisher + winkel).normalisiert();
        gleis.setze_position(Position { punkt, winkel: neuer_winkel });
        zeichne_gleis(
            &mut self.zeichner,
            &self.katalog,
            &self.darstellung,
            gleis,
            self.darstellung.farbe(gleis.zustand()),
        );
        debug!("{id} gedreht auf {}°.", neuer_winkel.grad());
        self.verändert = true;
        true
    }

    /// Lege fest, ob ein Gleis schwebend ist. Schwebende Gleise werden auf der
    /// [`Ebene::Schwebend`] gezeichnet und rasten nie ein.
    ///
    /// Gibt `false` zurück, wenn kein Gleis mit der [`GleisId`] existiert.
    pub fn setze_schwebend(&mut self, id: GleisId, schwebend: bool) -> bool {
        let Some(gleis) = self.gleise.iter_mut().find(|gleis| gleis.id() == id) else {
            return false;
        };
        if gleis.ist_schwebend() == schwebend {
            return true;
        }
        lösche_gleis(&mut self.zeichner, &self.katalog, gleis);
        gleis.setze_schwebend(schwebend);
        zeichne_gleis(
            &mut self.zeichner,
            &self.katalog,
            &self.darstellung,
            gleis,
            self.darstellung.farbe(gleis.zustand()),
        );
        debug!("{id} schwebend: {schwebend}");
        self.verändert = true;
        true
    }

    /// Alle aktuell gehaltenen Gleise.
    pub fn gehaltene(&self) -> impl Iterator<Item = &Gleis> {
        self.gleise.iter().filter(|gleis| gleis.zustand() == Zustand::Gehalten)
    }
}
