//! Tests für das gemeinsame Ausrichten aller Gleise.

use gleisplan_test_util::{expect_eq, expect_nahe, expect_some, expect_true, init_test_logging, Expectation};
use gleisplan_typen::vektor::Vektor;

use crate::{
    gleis::GleisId,
    test::{position, test_gleise, ZählZeichner},
    Gleise,
};

/// Zwei Test-Gleise, zusammen im Rechteck `[45, 205] x [50, 350]`.
fn zwei_gleise() -> (Gleise<ZählZeichner>, GleisId, GleisId) {
    let (mut gleise, form) = test_gleise();
    let erstes = gleise.platzieren(position(50., 100.), form);
    let zweites = gleise.platzieren(position(200., 300.), form);
    gleise.als_gespeichert_markieren();
    (gleise, erstes, zweites)
}

fn expect_punkt(
    gleise: &Gleise<ZählZeichner>,
    id: GleisId,
    x: f64,
    y: f64,
) -> Result<(), Expectation> {
    let punkt = expect_some(gleise.gleis(id))?.position().punkt;
    expect_nahe(punkt.x.0, x, 1e-9)?;
    expect_nahe(punkt.y.0, y, 1e-9)?;
    Ok(())
}

#[test]
fn umfang() -> Result<(), Expectation> {
    init_test_logging();

    let (gleise, _erstes, _zweites) = zwei_gleise();
    let umfang = expect_some(gleise.umfang())?;
    expect_eq(umfang.ecke_min(), Vektor::neu(45., 50.))?;
    expect_eq(umfang.ecke_max(), Vektor::neu(205., 350.))?;
    Ok(())
}

#[test]
fn links_und_oben() -> Result<(), Expectation> {
    init_test_logging();

    let (mut gleise, erstes, zweites) = zwei_gleise();
    gleise.ausrichten_links();
    expect_punkt(&gleise, erstes, 5., 100.)?;
    expect_punkt(&gleise, zweites, 155., 300.)?;
    expect_true(gleise.ist_verändert())?;
    gleise.ausrichten_oben();
    expect_punkt(&gleise, erstes, 5., 50.)?;
    expect_punkt(&gleise, zweites, 155., 250.)?;
    Ok(())
}

#[test]
fn rechts_und_unten() -> Result<(), Expectation> {
    init_test_logging();

    // Standard-Größe: 1728x864 Pixel
    let (mut gleise, erstes, zweites) = zwei_gleise();
    gleise.ausrichten_rechts();
    expect_punkt(&gleise, erstes, 1573., 100.)?;
    expect_punkt(&gleise, zweites, 1723., 300.)?;
    gleise.ausrichten_unten();
    expect_punkt(&gleise, erstes, 1573., 614.)?;
    expect_punkt(&gleise, zweites, 1723., 814.)?;
    Ok(())
}

#[test]
fn zentrieren() -> Result<(), Expectation> {
    init_test_logging();

    let (mut gleise, erstes, zweites) = zwei_gleise();
    gleise.zentrieren();
    expect_punkt(&gleise, erstes, 789., 332.)?;
    expect_punkt(&gleise, zweites, 939., 532.)?;
    let zentrum = expect_some(gleise.umfang())?.zentrum();
    expect_nahe(zentrum.x.0, 864., 1e-9)?;
    expect_nahe(zentrum.y.0, 432., 1e-9)?;
    Ok(())
}

#[test]
fn neu_zeichnen_nach_ausrichten() -> Result<(), Expectation> {
    init_test_logging();

    let (mut gleise, _erstes, _zweites) = zwei_gleise();
    let gezeichnet = gleise.zeichner().gezeichnet();
    gleise.ausrichten_links();
    expect_eq(gleise.zeichner().gelöscht(), 2)?;
    expect_eq(gleise.zeichner().gezeichnet(), gezeichnet + 2)?;
    Ok(())
}

#[test]
fn ohne_gleise() -> Result<(), Expectation> {
    init_test_logging();

    let (mut gleise, _form) = test_gleise();
    expect_true(gleise.umfang().is_none())?;
    gleise.zentrieren();
    expect_true(gleise.zeichner().aufrufe.is_empty())?;
    expect_true(!gleise.ist_verändert())?;
    Ok(())
}
