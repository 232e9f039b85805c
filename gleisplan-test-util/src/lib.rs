//! Utility-Funktionen für Tests.

use std::fmt::Debug;

use flexi_logger::{LogSpecBuilder, Logger, LoggerHandle};
use log::LevelFilter;
use parking_lot::{const_mutex, Mutex};
use thiserror::Error;

/// Hilfs-Variable für [`init_test_logging`].
/// Sorgt dafür, dass nur der erste Aufruf einen Logger registriert.
static LOGGER_HANDLE: Mutex<Option<LoggerHandle>> = const_mutex(None);

/// Initialisiere `FlexiLogger` einmalig, speichere den Handle in einer globalen Variable.
///
/// Notwendig, da `cargo test` mehrere Tests parallel ausführt, aber nur ein Logger aktiv sein kann.
/// Alle gleisplan-Module loggen ab [`LevelFilter::Debug`], damit fehlschlagende Tests nachvollziehbar sind.
///
/// ## Panics
///
/// Wenn der Logger nicht initialisiert werden kann, z.B. bereits einer existiert.
pub fn init_test_logging() {
    let handle = &mut *LOGGER_HANDLE.lock();
    if handle.is_none() {
        let mut log_spec_builder = LogSpecBuilder::new();
        let _ = log_spec_builder.default(LevelFilter::Error).module("gleisplan", LevelFilter::Debug);
        let log_spec = log_spec_builder.finalize();
        *handle = Some(
            Logger::with(log_spec)
                .log_to_stderr()
                .start()
                .expect("Logging initialisieren fehlgeschlagen!"),
        );
    }
}

/// Eine fehlgeschlagene Annahme in einem Test.
#[derive(Debug, gleisplan_macros::From)]
pub enum Expectation {
    /// Es wurde `true` erwartet.
    True(ExpectTrue),
    /// Es wurde die Gleichheit zweier Werte erwartet.
    Eq(ExpectEq),
    /// Es wurde ein Unterschied zweier Werte erwartet.
    Ne(ExpectNe),
    /// Es wurde erwartet, dass der erste Wert größer ist.
    Gt(ExpectGt),
    /// Es wurde erwartet, dass zwei Gleitkomma-Werte nahe beieinander liegen.
    Nahe(ExpectNahe),
    /// Es wurde ein Wert erwartet, aber [`None`] gefunden.
    Vorhanden(ExpectSome),
}

#[derive(Debug, Clone, Copy, Error)]
/// Es wurde `true` erwartet.
#[error("`true` erwartet!")]
pub struct ExpectTrue;

#[allow(clippy::missing_errors_doc)]
/// Gebe [Ok] zurück wenn der wert [true] ist, ansonsten [`Err`].
pub fn expect_true(wert: bool) -> Result<(), ExpectTrue> {
    wert.then_some(()).ok_or(ExpectTrue)
}

#[derive(Debug, Error)]
/// Es wurde die Gleichheit zweier Werte erwartet.
#[error("{0:?} und {1:?} sollten gleich sein!")]
pub struct ExpectEq(Box<dyn Debug>, Box<dyn Debug>);

#[allow(clippy::missing_errors_doc)]
/// Gebe [Ok] zurück wenn beide Werte gleich sind, ansonsten [`Err`].
#[allow(clippy::min_ident_chars)]
pub fn expect_eq<T: 'static + Debug + PartialEq>(a: T, b: T) -> Result<(), ExpectEq> {
    if a == b {
        Ok(())
    } else {
        Err(ExpectEq(Box::new(a), Box::new(b)))
    }
}

#[derive(Debug, Error)]
/// Es wurde ein Unterschied zweier Werte erwartet.
#[error("{0:?} und {1:?} sollten verschieden sein!")]
pub struct ExpectNe(Box<dyn Debug>, Box<dyn Debug>);

#[allow(clippy::missing_errors_doc)]
/// Gebe [Ok] zurück wenn beide Werte unterschiedlich sind, ansonsten [`Err`].
#[allow(clippy::min_ident_chars)]
pub fn expect_ne<T: 'static + Debug + PartialEq>(a: T, b: T) -> Result<(), ExpectNe> {
    if a == b {
        Err(ExpectNe(Box::new(a), Box::new(b)))
    } else {
        Ok(())
    }
}

#[derive(Debug, Error)]
/// Es wurde erwartet, dass der erste Wert größer ist.
#[error("{0:?} sollte größer als {1:?} sein!")]
pub struct ExpectGt(Box<dyn Debug>, Box<dyn Debug>);

#[allow(clippy::missing_errors_doc)]
/// Gebe [Ok] zurück wenn der erste Wert größer ist, ansonsten [`Err`].
#[allow(clippy::min_ident_chars)]
pub fn expect_gt<T: 'static + Debug + PartialOrd>(a: T, b: T) -> Result<(), ExpectGt> {
    if a > b {
        Ok(())
    } else {
        Err(ExpectGt(Box::new(a), Box::new(b)))
    }
}

#[derive(Debug, Error)]
/// Es wurde erwartet, dass zwei Gleitkomma-Werte nahe beieinander liegen.
#[error("{0} und {1} sollten sich um weniger als {2} unterscheiden!")]
pub struct ExpectNahe(f64, f64, f64);

#[allow(clippy::missing_errors_doc)]
/// Gebe [Ok] zurück wenn der Abstand beider Werte kleiner als `toleranz` ist, ansonsten [`Err`].
#[allow(clippy::min_ident_chars)]
pub fn expect_nahe(a: f64, b: f64, toleranz: f64) -> Result<(), ExpectNahe> {
    if (a - b).abs() < toleranz {
        Ok(())
    } else {
        Err(ExpectNahe(a, b, toleranz))
    }
}

#[derive(Debug, Clone, Copy, Error)]
/// Es wurde ein Wert erwartet, aber [`None`] gefunden.
#[error("Wert erwartet, aber `None` erhalten!")]
pub struct ExpectSome;

#[allow(clippy::missing_errors_doc)]
/// Gebe den Wert zurück, wenn er vorhanden ist, ansonsten [`Err`].
pub fn expect_some<T>(wert: Option<T>) -> Result<T, ExpectSome> {
    wert.ok_or(ExpectSome)
}
