//! Sammlung aller verfügbaren [Formen](Form), adressiert über eine [`FormId`].

use log::{debug, warn};
use nonempty::NonEmpty;

use gleisplan_typen::{
    länge::{Länge, Maßstab},
    skalar::Skalar,
    winkel::WinkelGradmaß,
};

use crate::form::{Form, Hand};

/// Name der Rückfall-Form, die in jedem [`Katalog`] vorhanden ist.
pub const RÜCKFALL: &str = "solid";

/// Index einer [`Form`] in einem [`Katalog`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FormId(usize);

/// Alle bekannten Formen. Formen werden nur hinzugefügt, nie verändert oder entfernt.
#[derive(Debug, Clone)]
pub struct Katalog {
    /// Die Rückfall-Form ist immer das erste Element.
    formen: NonEmpty<Form>,
}

impl Default for Katalog {
    fn default() -> Self {
        Katalog::neu()
    }
}

impl Katalog {
    /// Erzeuge einen Katalog, der nur die Rückfall-Form [`RÜCKFALL`] enthält.
    #[must_use]
    pub fn neu() -> Self {
        Katalog { formen: NonEmpty::new(Form::quadrat(RÜCKFALL, Skalar(30.), Skalar(30.))) }
    }

    /// Erzeuge einen Katalog mit allen Standard-Formen für den übergebenen [`Maßstab`].
    #[must_use]
    pub fn standard(maßstab: Maßstab) -> Self {
        let mut katalog = Katalog::neu();
        let zoll = Länge::zoll;
        let grad = WinkelGradmaß::neu;
        let formen = [
            Form::gerade("straight", maßstab, zoll(2.5)),
            Form::gerade("straight5", maßstab, zoll(5.)),
            Form::kurve("curve", maßstab, zoll(9.5), grad(30.)),
            Form::kurve("half-curve", maßstab, zoll(9.5), grad(15.)),
            Form::kurve("curve-11", maßstab, zoll(11.), grad(30.)),
            Form::kurve("curve-19", maßstab, zoll(19.), grad(15.)),
            Form::kreuzung("x90", maßstab, zoll(2.), grad(90.)),
            Form::kreuzung("x45", maßstab, zoll(2.), grad(45.)),
            Form::kreuzung("x15", maßstab, zoll(5.), grad(15.)),
            Form::straße("road", maßstab, zoll(1.), zoll(2.)),
            Form::weiche("right", maßstab, Hand::Rechts, zoll(5.), zoll(19.), grad(15.)),
            Form::weiche("left", maßstab, Hand::Links, zoll(5.), zoll(19.), grad(15.)),
            Form::weiche("turn", maßstab, Hand::Alle, zoll(5.), zoll(19.), grad(15.)),
            Form::mittel_punkt("middot", Skalar(30.), Skalar(30.), Skalar(4.)),
            Form::mittel_punkt("tall", Skalar(30.), Skalar(60.), Skalar(6.)),
        ];
        for form in formen {
            let _ = katalog.hinzufügen(form);
        }
        debug!("Standard-Katalog für {maßstab:?} mit {} Formen erzeugt.", katalog.formen.len());
        katalog
    }

    /// Füge eine neue Form hinzu.
    ///
    /// Existiert bereits eine Form mit dem selben Namen wird die bestehende Form
    /// nicht ersetzt und ihre [`FormId`] zurückgegeben.
    pub fn hinzufügen(&mut self, form: Form) -> FormId {
        if let Some(id) = self.suche(form.name()) {
            warn!("Form {} existiert bereits, neue Definition wird ignoriert.", form.name());
            return id;
        }
        self.formen.push(form);
        FormId(self.formen.len().saturating_sub(1))
    }

    /// Die Form zur [`FormId`].
    ///
    /// Eine [`FormId`] aus einem anderen Katalog ohne Entsprechung liefert die Rückfall-Form.
    #[must_use]
    pub fn form(&self, id: FormId) -> &Form {
        self.formen.get(id.0).unwrap_or(self.formen.first())
    }

    /// Suche eine Form über ihren Namen.
    #[must_use]
    pub fn suche(&self, name: &str) -> Option<FormId> {
        self.formen.iter().position(|form| form.name() == name).map(FormId)
    }

    /// Suche eine Form über ihren Namen, verwende die Rückfall-Form falls keine existiert.
    #[must_use]
    pub fn suche_oder_standard(&self, name: &str) -> FormId {
        self.suche(name).unwrap_or(Katalog::rückfall())
    }

    /// Die [`FormId`] der Rückfall-Form [`RÜCKFALL`].
    #[must_use]
    pub const fn rückfall() -> FormId {
        FormId(0)
    }

    /// Alle Formen mit ihrer [`FormId`], in Reihenfolge des Hinzufügens.
    pub fn iter(&self) -> impl Iterator<Item = (FormId, &Form)> {
        self.formen.iter().enumerate().map(|(index, form)| (FormId(index), form))
    }
}

#[cfg(test)]
mod test;
