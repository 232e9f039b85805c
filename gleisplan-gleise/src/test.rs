//! Tests für [`Gleise`]: Hinzufügen, Finden, Entfernen und Zurücksetzen.

use gleisplan_gleis::{
    form::Form,
    katalog::{FormId, Katalog},
};
use gleisplan_test_util::{
    expect_eq, expect_ne, expect_some, expect_true, init_test_logging, Expectation,
};
use gleisplan_typen::{
    farbe::{self, Farbe},
    länge::Maßstab,
    position::Position,
    skalar::Skalar,
    vektor::Vektor,
    winkel::WinkelGradmaß,
};

use crate::{
    gleis::GleisId,
    zeichnen::{Darstellung, Ebene, Zeichner},
    Gleise, Klick,
};

/// Ein Aufruf des [`ZählZeichner`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Aufruf {
    /// [`Zeichner::zeichne`]
    Zeichne(Ebene, Farbe),
    /// [`Zeichner::lösche`]
    Lösche(Ebene),
    /// [`Zeichner::leere`]
    Leere(Ebene),
}

/// Ein [`Zeichner`], der sich alle Aufrufe merkt.
#[derive(Debug, Default)]
pub(crate) struct ZählZeichner {
    /// Alle bisherigen Aufrufe in Reihenfolge.
    pub(crate) aufrufe: Vec<Aufruf>,
}

impl ZählZeichner {
    /// Anzahl aller [`Aufruf::Zeichne`].
    pub(crate) fn gezeichnet(&self) -> usize {
        self.aufrufe.iter().filter(|aufruf| matches!(aufruf, Aufruf::Zeichne(..))).count()
    }

    /// Anzahl aller [`Aufruf::Lösche`].
    pub(crate) fn gelöscht(&self) -> usize {
        self.aufrufe.iter().filter(|aufruf| matches!(aufruf, Aufruf::Lösche(_))).count()
    }

    /// Ebene und Farbe des letzten [`Aufruf::Zeichne`].
    pub(crate) fn zuletzt_gezeichnet(&self) -> Option<(Ebene, Farbe)> {
        self.aufrufe.iter().rev().find_map(|aufruf| match aufruf {
            Aufruf::Zeichne(ebene, farbe) => Some((*ebene, *farbe)),
            Aufruf::Lösche(_) | Aufruf::Leere(_) => None,
        })
    }

    /// Farbe des letzten [`Aufruf::Zeichne`] auf der übergebenen [`Ebene`].
    pub(crate) fn zuletzt_gezeichnet_auf(&self, gesucht: Ebene) -> Option<Farbe> {
        self.aufrufe.iter().rev().find_map(|aufruf| match aufruf {
            Aufruf::Zeichne(ebene, farbe) if *ebene == gesucht => Some(*farbe),
            Aufruf::Zeichne(..) | Aufruf::Lösche(_) | Aufruf::Leere(_) => None,
        })
    }

    /// Ebene des letzten [`Aufruf::Lösche`].
    pub(crate) fn zuletzt_gelöscht(&self) -> Option<Ebene> {
        self.aufrufe.iter().rev().find_map(|aufruf| match aufruf {
            Aufruf::Lösche(ebene) => Some(*ebene),
            Aufruf::Zeichne(..) | Aufruf::Leere(_) => None,
        })
    }
}

impl Zeichner for ZählZeichner {
    fn zeichne(
        &mut self,
        ebene: Ebene,
        _position: &Position,
        _form: &Form,
        farbe: Farbe,
        _darstellung: &Darstellung,
    ) {
        self.aufrufe.push(Aufruf::Zeichne(ebene, farbe));
    }

    fn lösche(&mut self, ebene: Ebene, _position: &Position, _form: &Form) {
        self.aufrufe.push(Aufruf::Lösche(ebene));
    }

    fn leere(&mut self, ebene: Ebene, _größe: Vektor) {
        self.aufrufe.push(Aufruf::Leere(ebene));
    }
}

/// Name der Test-Form, ein Rechteck der Größe 10x100 ohne Verbindungen.
pub(crate) const TEST_FORM: &str = "test";

/// Ein leerer Gleisplan mit Standard-Katalog und Test-Form.
pub(crate) fn test_gleise() -> (Gleise<ZählZeichner>, FormId) {
    let mut katalog = Katalog::standard(Maßstab::N);
    let form = katalog.hinzufügen(Form::quadrat(TEST_FORM, Skalar(10.), Skalar(100.)));
    (Gleise::neu(katalog, ZählZeichner::default()), form)
}

/// Position ohne Rotation.
pub(crate) fn position(x: f64, y: f64) -> Position {
    Position { punkt: Vektor::neu(x, y), winkel: WinkelGradmaß::neu(0.) }
}

#[test]
fn hinzufügen_zeichnet_abgelegt() -> Result<(), Expectation> {
    init_test_logging();

    let (mut gleise, form) = test_gleise();
    expect_true(!gleise.ist_verändert())?;
    let _id = gleise.hinzufügen(Vektor::neu(100., 100.), form);
    expect_eq(gleise.zeichner().gezeichnet(), 1)?;
    expect_eq(gleise.zeichner().zuletzt_gezeichnet(), Some((Ebene::Abgelegt, farbe::GRÜN)))?;
    expect_true(gleise.ist_verändert())?;
    expect_eq(gleise.gleise().len(), 1)?;
    Ok(())
}

#[test]
fn finde_echt_enthalten() -> Result<(), Expectation> {
    init_test_logging();

    let (mut gleise, form) = test_gleise();
    let id = gleise.hinzufügen(Vektor::neu(100., 100.), form);
    for (x, y) in [(100., 100.), (100., 120.), (100., 80.)] {
        expect_eq(gleise.finde(Vektor::neu(x, y)).map(|gleis| gleis.id()), Some(id))?;
    }
    // Rand gehört nicht dazu
    for (x, y) in [(80., 100.), (120., 100.), (105., 100.), (100., 150.)] {
        expect_eq(gleise.finde(Vektor::neu(x, y)).map(|gleis| gleis.id()), None)?;
    }
    Ok(())
}

#[test]
fn finde_nächster_mittelpunkt() -> Result<(), Expectation> {
    init_test_logging();

    let (mut gleise, form) = test_gleise();
    let erstes = gleise.platzieren(position(0., 0.), form);
    let zweites = gleise.platzieren(position(0., 30.), form);
    expect_eq(gleise.finde(Vektor::neu(0., 20.)).map(|gleis| gleis.id()), Some(zweites))?;
    // gleicher Abstand: das zuerst hinzugefügte Gleis gewinnt
    expect_eq(gleise.finde(Vektor::neu(0., 15.)).map(|gleis| gleis.id()), Some(erstes))?;
    Ok(())
}

#[test]
fn überlappt_und_verdeckt() -> Result<(), Expectation> {
    init_test_logging();

    let (mut gleise, form) = test_gleise();
    let a = gleise.platzieren(position(0., 0.), form);
    let b = gleise.platzieren(position(9., 0.), form);
    let c = gleise.platzieren(position(10.5, 0.), form);
    let d = gleise.platzieren(position(11., 0.), form);
    expect_true(gleise.überlappt(a, b))?;
    expect_true(gleise.verdeckt(a, b))?;
    expect_true(!gleise.überlappt(a, c))?;
    expect_true(gleise.verdeckt(a, c))?;
    expect_true(!gleise.überlappt(a, d))?;
    expect_true(!gleise.verdeckt(a, d))?;
    // unbekannte Ids
    expect_true(!gleise.überlappt(a, GleisId(u64::MAX)))?;
    Ok(())
}

#[test]
fn eindeutige_ids() -> Result<(), Expectation> {
    init_test_logging();

    let (mut gleise, form) = test_gleise();
    let erstes = gleise.platzieren(position(0., 0.), form);
    let zweites = gleise.platzieren(position(500., 0.), form);
    let _ = gleise.entfernen(zweites);
    let drittes = gleise.platzieren(position(500., 0.), form);
    expect_ne(erstes, zweites)?;
    expect_ne(zweites, drittes)?;
    Ok(())
}

#[test]
fn entfernen() -> Result<(), Expectation> {
    init_test_logging();

    let (mut gleise, form) = test_gleise();
    let erstes = gleise.platzieren(position(0., 0.), form);
    let zweites = gleise.platzieren(position(500., 0.), form);
    gleise.als_gespeichert_markieren();
    let entfernt = expect_some(gleise.entfernen(erstes))?;
    expect_eq(entfernt.id(), erstes)?;
    expect_eq(gleise.zeichner().gelöscht(), 1)?;
    expect_eq(gleise.zeichner().zuletzt_gelöscht(), Some(Ebene::Abgelegt))?;
    // das verbleibende Gleis wird neu gezeichnet
    expect_eq(gleise.zeichner().gezeichnet(), 3)?;
    expect_true(gleise.ist_verändert())?;
    expect_eq(gleise.gleise().iter().map(|gleis| gleis.id()).collect::<Vec<_>>(), vec![zweites])?;
    // unbekannte Id
    expect_true(gleise.entfernen(erstes).is_none())?;
    expect_eq(gleise.zeichner().gelöscht(), 1)?;
    Ok(())
}

#[test]
fn klick_wechselt() -> Result<(), Expectation> {
    init_test_logging();

    let (mut gleise, form) = test_gleise();
    let Klick::Hinzugefügt(id) = gleise.klick(Vektor::neu(100., 100.), form) else {
        return Err(gleisplan_test_util::ExpectTrue.into());
    };
    match gleise.klick(Vektor::neu(100., 110.), form) {
        Klick::Entfernt(gleis) => expect_eq(gleis.id(), id)?,
        Klick::Hinzugefügt(_) => return Err(gleisplan_test_util::ExpectTrue.into()),
    }
    expect_true(gleise.gleise().is_empty())?;
    Ok(())
}

#[test]
fn zurücksetzen() -> Result<(), Expectation> {
    init_test_logging();

    let (mut gleise, form) = test_gleise();
    let _ = gleise.hinzufügen(Vektor::neu(100., 100.), form);
    gleise.zurücksetzen(Skalar(360.), Skalar(180.));
    expect_true(gleise.gleise().is_empty())?;
    expect_true(!gleise.ist_verändert())?;
    expect_eq(gleise.größe(), Vektor::neu(360., 180.))?;
    let geleert: Vec<_> = gleise
        .zeichner()
        .aufrufe
        .iter()
        .filter(|aufruf| matches!(aufruf, Aufruf::Leere(_)))
        .copied()
        .collect();
    expect_eq(geleert, vec![Aufruf::Leere(Ebene::Abgelegt), Aufruf::Leere(Ebene::Schwebend)])?;
    Ok(())
}

#[test]
fn darstellung_zeichnet_neu() -> Result<(), Expectation> {
    init_test_logging();

    let (mut gleise, form) = test_gleise();
    let _ = gleise.platzieren(position(0., 0.), form);
    let darstellung = Darstellung { normal: farbe::ORANGE, ..Darstellung::default() };
    gleise.setze_darstellung(darstellung);
    expect_eq(gleise.zeichner().zuletzt_gezeichnet(), Some((Ebene::Abgelegt, farbe::ORANGE)))?;
    Ok(())
}
