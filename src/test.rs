//! Tests für das Bearbeiten eines gespeicherten Gleisplans.

use std::{
    env, fs,
    path::{Path, PathBuf},
    process,
};

use gleisplan_argumente::{Argumente, AusrichtenArgument, MaßstabArgument};
use gleisplan_gleis::katalog::Katalog;
use gleisplan_gleise::Gleise;
use gleisplan_test_util::{
    expect_eq, expect_gt, expect_nahe, expect_some, expect_true, init_test_logging, Expectation,
};
use gleisplan_typen::{länge::Maßstab, vektor::Vektor};

use crate::{bearbeiten, protokoll::ProtokollZeichner, Fehler};

fn argumente(pfad: Option<&PathBuf>, ausgabe: Option<&PathBuf>) -> Argumente {
    Argumente {
        pfad: pfad.map(|pfad| pfad.display().to_string()),
        ausgabe: ausgabe.map(|ausgabe| ausgabe.display().to_string()),
        ausrichten: AusrichtenArgument::Keine,
        maßstab: MaßstabArgument::N,
        formen: false,
        verbose: false,
        log_datei: false,
    }
}

fn temp_pfad(name: &str) -> PathBuf {
    env::temp_dir().join(format!("gleisplan-{name}-{}.bin", process::id()))
}

/// Speichere einen Gleisplan mit zwei aneinander eingerasteten Geraden.
fn speichere_gleisplan(pfad: &Path) -> Result<(), Expectation> {
    let mut gleise = Gleise::neu(Katalog::standard(Maßstab::N), ProtokollZeichner::default());
    let gerade = expect_some(gleise.katalog().suche("straight"))?;
    let _ = gleise.hinzufügen(Vektor::neu(300., 200.), gerade);
    let _ = gleise.hinzufügen(Vektor::neu(303., 275.), gerade);
    expect_true(gleise.speichern(pfad).is_ok())?;
    Ok(())
}

#[test]
fn ausrichten_und_speichern() -> Result<(), Expectation> {
    init_test_logging();

    let eingabe = temp_pfad("eingabe");
    let ausgabe = temp_pfad("ausgabe");
    speichere_gleisplan(&eingabe)?;

    let mut argumente = argumente(Some(&eingabe), Some(&ausgabe));
    argumente.ausrichten = AusrichtenArgument::Links;
    let ergebnis = bearbeiten(&argumente);
    let _ = fs::remove_file(&eingabe);
    let gleise = expect_some(ergebnis.ok())?;
    expect_eq(gleise.gleise().len(), 2)?;
    expect_nahe(expect_some(gleise.umfang())?.ecke_min().x.0, 0., 1e-9)?;
    expect_gt(gleise.zeichner().gezeichnet(), 0)?;
    expect_true(!gleise.ist_verändert())?;

    let mut geladen = Gleise::neu(Katalog::standard(Maßstab::N), ProtokollZeichner::default());
    let geladen_ergebnis = geladen.laden(&ausgabe);
    let _ = fs::remove_file(&ausgabe);
    expect_true(geladen_ergebnis.is_ok())?;
    expect_eq(geladen.serialisiere(), gleise.serialisiere())?;
    Ok(())
}

#[test]
fn unverändert_nicht_speichern() -> Result<(), Expectation> {
    init_test_logging();

    let eingabe = temp_pfad("unverändert");
    speichere_gleisplan(&eingabe)?;
    let vorher = fs::metadata(&eingabe).and_then(|metadata| metadata.modified()).ok();
    let ergebnis = bearbeiten(&argumente(Some(&eingabe), None));
    let nachher = fs::metadata(&eingabe).and_then(|metadata| metadata.modified()).ok();
    let _ = fs::remove_file(&eingabe);
    expect_true(ergebnis.is_ok())?;
    expect_eq(vorher, nachher)?;
    Ok(())
}

#[test]
fn ohne_datei() -> Result<(), Expectation> {
    init_test_logging();

    let gleise = expect_some(bearbeiten(&argumente(None, None)).ok())?;
    expect_true(gleise.gleise().is_empty())?;
    expect_eq(gleise.zeichner().gezeichnet(), 0)?;
    Ok(())
}

#[test]
fn fehlende_datei() -> Result<(), Expectation> {
    init_test_logging();

    let pfad = temp_pfad("fehlt");
    let ergebnis = bearbeiten(&argumente(Some(&pfad), None));
    expect_true(matches!(ergebnis, Err(Fehler::Daten(_))))?;
    Ok(())
}

#[test]
fn ziel() -> Result<(), Expectation> {
    init_test_logging();

    let eingabe = temp_pfad("ziel-eingabe");
    let ausgabe = temp_pfad("ziel-ausgabe");
    let mit_ausgabe = argumente(Some(&eingabe), Some(&ausgabe));
    expect_eq(mit_ausgabe.ziel().map(str::to_owned), Some(ausgabe.display().to_string()))?;
    let ohne_ausgabe = argumente(Some(&eingabe), None);
    expect_eq(ohne_ausgabe.ziel().map(str::to_owned), Some(eingabe.display().to_string()))?;
    expect_eq(argumente(None, None).ziel().map(str::to_owned), None)?;
    Ok(())
}
