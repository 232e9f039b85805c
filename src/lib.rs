//! Platzieren und Einrasten von Gleisen auf einem Modelleisenbahn-Gleisplan.
//!
//! Lädt einen gespeicherten Gleisplan, richtet die Gleise auf Wunsch aus und speichert ihn wieder.

// Zu viele/große dependencies, um das wirklich zu vermeiden.
#![allow(clippy::multiple_crate_versions)]

use flexi_logger::{Duplicate, FileSpec, FlexiLoggerError, LogSpecBuilder, Logger, LoggerHandle};
use itertools::Itertools;
use log::{error, info, LevelFilter};

use gleisplan_argumente::{Argumente, AusrichtenArgument};
use gleisplan_gleis::katalog::Katalog;
use gleisplan_gleise::{daten, Gleise};

use self::protokoll::ProtokollZeichner;

pub mod protokoll;

/// Bei der [Ausführung](ausführen) potentiell auftretende Fehler.
#[derive(Debug, gleisplan_macros::From)]
pub enum Fehler {
    /// Ein Fehler beim starten des Loggers.
    FlexiLogger(FlexiLoggerError),
    /// Ein Fehler beim Laden oder Speichern des Gleisplans.
    Daten(daten::Fehler),
}

/// Parse die Kommandozeilen-Argumente und führe die Anwendung aus.
///
/// ## Errors
///
/// Fehler beim Starten des Loggers, Laden oder Speichern.
#[inline(always)]
pub fn ausführen_aus_env() -> Result<(), Fehler> {
    let argumente = Argumente::parse_aus_env_einzelnes_als_pfad();
    ausführen(&argumente)
}

/// Starte den Logger. Log-Nachrichten werden immer auf stderr ausgegeben,
/// bei `log_datei` zusätzlich im Ordner `log`.
fn start_logger(verbose: bool, log_datei: bool) -> Result<LoggerHandle, FlexiLoggerError> {
    let log_level = if verbose { LevelFilter::Debug } else { LevelFilter::Warn };
    let mut log_spec_builder = LogSpecBuilder::new();
    let _ = log_spec_builder.default(LevelFilter::Error).module("gleisplan", log_level);
    let log_spec = log_spec_builder.finalize();
    let logger_base = Logger::with(log_spec);
    let logger = if log_datei {
        logger_base
            .log_to_file(FileSpec::default().directory("log"))
            .duplicate_to_stderr(Duplicate::All)
    } else {
        logger_base.log_to_stderr()
    };
    logger.start()
}

/// Führe die Anwendung mit den übergebenen Kommandozeilen-Argumenten aus.
///
/// ## Errors
///
/// Fehler beim Starten des Loggers, Laden oder Speichern.
pub fn ausführen(argumente: &Argumente) -> Result<(), Fehler> {
    let logger_handle = start_logger(argumente.verbose, argumente.log_datei)?;

    let ergebnis = bearbeiten(argumente).map(|gleise| {
        let zeichner = gleise.zeichner();
        info!("{} Formen gezeichnet, {} gelöscht.", zeichner.gezeichnet(), zeichner.gelöscht());
    });
    if let Err(fehler) = &ergebnis {
        error!("Bearbeiten des Gleisplans fehlgeschlagen: {fehler:?}");
    }

    // explizit drop aufrufen, damit logger_handle auf jeden Fall lang genug in scope bleibt.
    drop(logger_handle);

    ergebnis
}

/// Lade, richte aus und speichere einen Gleisplan entsprechend der [`Argumente`].
///
/// In eine explizite Ausgabe-Datei wird immer gespeichert,
/// in die geladene Datei nur nach einer Veränderung.
///
/// ## Errors
///
/// Fehler beim Laden oder Speichern.
pub fn bearbeiten(argumente: &Argumente) -> Result<Gleise<ProtokollZeichner>, Fehler> {
    let katalog = Katalog::standard(argumente.maßstab.into());
    if argumente.formen {
        // Gewünschte Ausgabe, unabhängig vom Log-Level.
        #[allow(clippy::print_stdout)]
        {
            println!("{}", katalog.iter().map(|(_id, form)| form.name()).join(", "));
        }
    }
    let mut gleise = Gleise::neu(katalog, ProtokollZeichner::default());
    if let Some(pfad) = &argumente.pfad {
        gleise.laden(pfad)?;
    }
    match argumente.ausrichten {
        AusrichtenArgument::Keine => {},
        AusrichtenArgument::Links => gleise.ausrichten_links(),
        AusrichtenArgument::Rechts => gleise.ausrichten_rechts(),
        AusrichtenArgument::Oben => gleise.ausrichten_oben(),
        AusrichtenArgument::Unten => gleise.ausrichten_unten(),
        AusrichtenArgument::Mitte => gleise.zentrieren(),
    }
    if let Some(ziel) = argumente.ziel() {
        if gleise.ist_verändert() || argumente.ausgabe.is_some() {
            gleise.speichern(ziel)?;
        }
    }
    Ok(gleise)
}

#[cfg(test)]
mod test;
