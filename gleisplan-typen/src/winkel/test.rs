//! Tests für [`Winkel`] und [`WinkelGradmaß`].

use std::f64::consts;

use gleisplan_test_util::{expect_eq, expect_nahe, init_test_logging, Expectation};

use crate::{
    vektor::Vektor,
    winkel::{Trigonometrie, Winkel, WinkelGradmaß},
};

#[test]
fn gradmaß_normalisiert() -> Result<(), Expectation> {
    init_test_logging();

    expect_eq(WinkelGradmaß::neu(450.).normalisiert(), WinkelGradmaß::neu(90.))?;
    expect_eq(WinkelGradmaß::neu(-90.).normalisiert(), WinkelGradmaß::neu(270.))?;
    expect_eq(WinkelGradmaß::neu(360.).normalisiert(), WinkelGradmaß::neu(0.))?;
    // Ergebnis liegt immer in [0, 360)
    let winzig = WinkelGradmaß::neu(-1e-20).normalisiert();
    expect_eq(winzig.grad() < 360., true)?;
    expect_eq(winzig.grad() >= 0., true)?;
    Ok(())
}

#[test]
fn bogenmaß_normalisiert() -> Result<(), Expectation> {
    init_test_logging();

    expect_nahe(Winkel(-consts::FRAC_PI_2).normalisiert().0, 3. * consts::FRAC_PI_2, 1e-12)?;
    expect_nahe(Winkel(5. * consts::PI).normalisiert().0, consts::PI, 1e-12)?;
    expect_nahe((Winkel(consts::PI) * 0.5 - Winkel(consts::PI)).normalisiert().0, 3. * consts::FRAC_PI_2, 1e-12)?;
    Ok(())
}

#[test]
fn umrechnung() -> Result<(), Expectation> {
    init_test_logging();

    expect_nahe(Winkel::from(WinkelGradmaß::neu(180.)).0, consts::PI, 1e-12)?;
    expect_nahe(WinkelGradmaß::from(Winkel(consts::FRAC_PI_2)).grad(), 90., 1e-12)?;
    expect_nahe(WinkelGradmaß::neu(30.).sin().0, 0.5, 1e-12)?;
    Ok(())
}

#[test]
fn rotation_im_uhrzeigersinn() -> Result<(), Expectation> {
    init_test_logging();

    // y wächst nach unten, eine positive Rotation dreht die x-Achse auf die y-Achse.
    let gedreht = Vektor::neu(1., 0.).rotiert(&Winkel::from(WinkelGradmaß::neu(90.)));
    expect_nahe(gedreht.x.0, 0., 1e-12)?;
    expect_nahe(gedreht.y.0, 1., 1e-12)?;
    let oben = Vektor::neu(0., -1.).rotiert(&Winkel::from(WinkelGradmaß::neu(90.)));
    expect_nahe(oben.x.0, 1., 1e-12)?;
    expect_nahe(oben.y.0, 0., 1e-12)?;
    Ok(())
}
