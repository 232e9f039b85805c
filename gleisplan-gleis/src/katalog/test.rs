//! Tests für den [`Katalog`].

use gleisplan_test_util::{expect_eq, expect_ne, expect_some, init_test_logging, Expectation};
use gleisplan_typen::{länge::Maßstab, skalar::Skalar};

use crate::{
    form::{Form, FormArt},
    katalog::{Katalog, RÜCKFALL},
};

#[test]
fn rückfall_immer_vorhanden() -> Result<(), Expectation> {
    init_test_logging();

    let katalog = Katalog::neu();
    expect_eq(katalog.iter().count(), 1)?;
    expect_eq(katalog.suche(RÜCKFALL), Some(Katalog::rückfall()))?;
    expect_eq(katalog.form(Katalog::rückfall()).name().to_owned(), String::from(RÜCKFALL))?;
    expect_eq(katalog.suche("unbekannt"), None)?;
    expect_eq(katalog.suche_oder_standard("unbekannt"), Katalog::rückfall())?;
    Ok(())
}

#[test]
fn standard_formen() -> Result<(), Expectation> {
    init_test_logging();

    let katalog = Katalog::standard(Maßstab::N);
    for name in [
        "straight",
        "straight5",
        "curve",
        "half-curve",
        "curve-11",
        "curve-19",
        "x90",
        "x45",
        "x15",
        "road",
        "right",
        "left",
        "turn",
        "middot",
        "solid",
        "tall",
    ] {
        let id = expect_some(katalog.suche(name))?;
        expect_eq(katalog.form(id).name().to_owned(), name.to_owned())?;
    }
    let tall = expect_some(katalog.suche("tall"))?;
    expect_eq(*katalog.form(tall).art(), FormArt::MittelPunkt { durchmesser: Skalar(6.) })?;
    Ok(())
}

#[test]
fn doppelter_name_behält_erste_form() -> Result<(), Expectation> {
    init_test_logging();

    let mut katalog = Katalog::neu();
    let erste = katalog.hinzufügen(Form::quadrat("box", Skalar(10.), Skalar(10.)));
    expect_ne(erste, Katalog::rückfall())?;
    let zweite = katalog.hinzufügen(Form::quadrat("box", Skalar(20.), Skalar(20.)));
    expect_eq(erste, zweite)?;
    expect_eq(katalog.form(erste).größe().x, Skalar(10.))?;
    Ok(())
}
