//! Tests für die Geometrie der [`Form`]-Varianten.

use gleisplan_test_util::{expect_eq, expect_nahe, expect_true, init_test_logging, Expectation};
use gleisplan_typen::{
    länge::{Länge, Maßstab},
    skalar::Skalar,
    vektor::Vektor,
    winkel::{Trigonometrie, WinkelGradmaß},
};

use crate::{
    form::{Form, FormArt, Hand},
    verbindung::Verbindung,
};

/// Vergleiche eine Verbindung mit den erwarteten Werten.
fn expect_verbindung(
    verbindung: Option<&Verbindung>,
    x: f64,
    y: f64,
    richtung: f64,
) -> Result<(), Expectation> {
    let Some(Verbindung { position, richtung: tatsächlich }) = verbindung else {
        return Err(gleisplan_test_util::ExpectSome.into());
    };
    expect_nahe(position.x.0, x, 1e-9)?;
    expect_nahe(position.y.0, y, 1e-9)?;
    expect_nahe(tatsächlich.grad(), richtung, 1e-9)?;
    Ok(())
}

/// Richtung einer Verbindung als Einheitsvektor.
fn richtungs_vektor(richtung: WinkelGradmaß) -> Vektor {
    Vektor { x: richtung.sin(), y: -richtung.cos() }
}

#[test]
fn quadrat_ohne_verbindungen() -> Result<(), Expectation> {
    init_test_logging();

    let quadrat = Form::quadrat("solid", Skalar(30.), Skalar(60.));
    expect_eq(quadrat.größe(), Vektor::neu(30., 60.))?;
    expect_true(!quadrat.hat_verbindungen())?;
    expect_eq(quadrat.fangradius(), Skalar(0.))?;
    let mittel_punkt = Form::mittel_punkt("middot", Skalar(30.), Skalar(30.), Skalar(4.));
    expect_eq(*mittel_punkt.art(), FormArt::MittelPunkt { durchmesser: Skalar(4.) })?;
    expect_true(mittel_punkt.verbindungen().is_empty())?;
    Ok(())
}

#[test]
fn gerade() -> Result<(), Expectation> {
    init_test_logging();

    let gerade = Form::gerade("straight", Maßstab::N, Länge::zoll(2.5));
    expect_nahe(gerade.größe().x.0, Maßstab::N.schotter_breite().0, 1e-9)?;
    expect_nahe(gerade.größe().y.0, 90., 1e-9)?;
    expect_eq(gerade.verbindungen().len(), 2)?;
    expect_verbindung(gerade.verbindungen().first(), 0., -45., 0.)?;
    expect_verbindung(gerade.verbindungen().get(1), 0., 45., 180.)?;
    expect_eq(gerade.fangradius(), Maßstab::N.fangradius())?;
    Ok(())
}

#[test]
fn kurve() -> Result<(), Expectation> {
    init_test_logging();

    let radius = 9.5 * 36.;
    let kurve = Form::kurve("curve", Maßstab::N, Länge::zoll(9.5), WinkelGradmaß::neu(30.));
    let (sin, cos) = 15_f64.to_radians().sin_cos();
    let schotter = Maßstab::N.schotter_breite().0;
    expect_nahe(kurve.größe().x.0, 2. * radius * (1. - cos) + schotter, 1e-9)?;
    expect_nahe(kurve.größe().y.0, (2. * radius + schotter) * sin, 1e-9)?;
    expect_verbindung(kurve.verbindungen().first(), radius * (1. - cos), -radius * sin, 15.)?;
    expect_verbindung(kurve.verbindungen().get(1), radius * (1. - cos), radius * sin, 165.)?;
    // Die Richtung jeder Verbindung steht senkrecht auf dem Radius.
    let zentrum = Vektor::neu(radius, 0.);
    for verbindung in kurve.verbindungen() {
        let radial = verbindung.position - zentrum;
        let tangente = richtungs_vektor(verbindung.richtung);
        expect_nahe(radial.x.0 * tangente.x.0 + radial.y.0 * tangente.y.0, 0., 1e-9)?;
    }
    Ok(())
}

#[test]
fn kreuzung() -> Result<(), Expectation> {
    init_test_logging();

    let kreuzung = Form::kreuzung("x90", Maßstab::N, Länge::zoll(2.), WinkelGradmaß::neu(90.));
    expect_eq(kreuzung.größe(), Vektor::neu(72., 72.))?;
    expect_eq(kreuzung.verbindungen().len(), 4)?;
    expect_verbindung(kreuzung.verbindungen().first(), 0., -36., 0.)?;
    expect_verbindung(kreuzung.verbindungen().get(1), 36., 0., 90.)?;
    expect_verbindung(kreuzung.verbindungen().get(2), 0., 36., 180.)?;
    expect_verbindung(kreuzung.verbindungen().get(3), -36., 0., 270.)?;
    Ok(())
}

#[test]
fn straße() -> Result<(), Expectation> {
    init_test_logging();

    let straße = Form::straße("road", Maßstab::N, Länge::zoll(1.), Länge::zoll(2.));
    expect_eq(straße.größe(), Vektor::neu(72., 72.))?;
    expect_verbindung(straße.verbindungen().first(), 0., -36., 0.)?;
    expect_verbindung(straße.verbindungen().get(1), 0., 36., 180.)?;
    Ok(())
}

#[test]
fn weiche() -> Result<(), Expectation> {
    init_test_logging();

    let winkel = WinkelGradmaß::neu(15.);
    let neu = |hand| Form::weiche("turn", Maßstab::N, hand, Länge::zoll(5.), Länge::zoll(19.), winkel);
    let rechts = neu(Hand::Rechts);
    let links = neu(Hand::Links);
    let alle = neu(Hand::Alle);
    expect_eq(rechts.verbindungen().len(), 3)?;
    expect_eq(links.verbindungen().len(), 3)?;
    expect_eq(alle.verbindungen().len(), 4)?;

    let radius = 19. * 36.;
    let (sin, cos) = 15_f64.to_radians().sin_cos();
    let versatz = radius * (1. - cos);
    let abzweig_y = 90. - radius * sin;
    expect_verbindung(alle.verbindungen().first(), 0., 90., 180.)?;
    expect_verbindung(alle.verbindungen().get(1), 0., -90., 0.)?;
    expect_verbindung(rechts.verbindungen().get(2), versatz, abzweig_y, 15.)?;
    expect_verbindung(links.verbindungen().get(2), -versatz, abzweig_y, 345.)?;
    expect_verbindung(alle.verbindungen().get(3), -versatz, abzweig_y, 345.)?;
    expect_nahe(alle.größe().x.0, Maßstab::N.schotter_breite().0 + 2. * versatz, 1e-9)?;
    expect_nahe(alle.größe().y.0, 180., 1e-9)?;
    Ok(())
}
