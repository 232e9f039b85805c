//! Kommandozeilen-Argumente.

// Zu viele/große dependencies, um das wirklich zu vermeiden.
#![allow(clippy::multiple_crate_versions)]
// Durch derive-Macro für Parse ausgelöst.
#![allow(clippy::shadow_unrelated)]

use std::{
    env,
    fmt::{self, Debug, Display, Formatter},
    num::NonZeroI32,
};

use kommandozeilen_argumente::{EnumArgument, Parse};

use gleisplan_typen::länge::Maßstab;

#[derive(Debug, Clone, Parse)]
/// Platzieren und Einrasten von Gleisen auf einem Modelleisenbahn-Gleisplan.
#[kommandozeilen_argumente(sprache: deutsch, version, hilfe(lang: [hilfe, help], kurz: h))]
pub struct Argumente {
    /// Lade bei Programmstart die angegebene Datei.
    #[kommandozeilen_argumente(kurz, meta_var: DATEI)]
    pub pfad: Option<String>,

    /// Speichere den Gleisplan in der angegebenen Datei (Standard: geladene Datei).
    #[kommandozeilen_argumente(kurz, meta_var: DATEI)]
    pub ausgabe: Option<String>,

    /// Richte alle Gleise nach dem Laden aus.
    #[kommandozeilen_argumente(standard: AusrichtenArgument::Keine, kurz, meta_var: RAND)]
    pub ausrichten: AusrichtenArgument,

    /// Maßstab für den Katalog der Standard-Formen.
    #[kommandozeilen_argumente(standard: MaßstabArgument::N, kurz, meta_var: MASSSTAB)]
    pub maßstab: MaßstabArgument,

    /// Zeige die Namen aller bekannten Formen an.
    pub formen: bool,

    /// Zeige zusätzliche Informationen in der Konsole an.
    pub verbose: bool,

    /// Speichere Log-Nachrichten zusätzlich in einer Datei.
    #[kommandozeilen_argumente(kurz: l, invertiere_präfix: keine)]
    pub log_datei: bool,
}

impl Argumente {
    /// Parse Kommandozeilen-Argumente.
    /// Ein einzelnes Argument (das nicht mit "-" beginnt) wird als Pfad interpretiert.
    ///
    /// ## Panics
    ///
    /// Programmierfehler, wenn [`NonZeroI32::new`] [`None`] für den Exit-Code zurückgibt.
    #[must_use]
    pub fn parse_aus_env_einzelnes_als_pfad() -> Self {
        let mut args: Vec<_> = env::args_os().skip(1).collect();
        if args.len() == 1
            && !args
                .first()
                .and_then(|os_string| os_string.to_str())
                .is_some_and(|string| string.starts_with('-'))
        {
            // Einzelnes Argument, dass nicht mit '-' beginnt.
            args.insert(0, "--pfad".to_owned().into());
        }
        Argumente::parse_mit_fehlermeldung(args.into_iter(), NonZeroI32::new(1).expect("1 != 0"))
    }

    /// Die Datei, in der nach der Ausführung gespeichert wird.
    #[must_use]
    pub fn ziel(&self) -> Option<&str> {
        self.ausgabe.as_deref().or(self.pfad.as_deref())
    }
}

/// Wohin sollen die Gleise nach dem Laden verschoben werden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumArgument)]
#[kommandozeilen_argumente(case: insensitive)]
pub enum AusrichtenArgument {
    /// Gleise bleiben, wo sie sind.
    Keine,
    /// Am linken Rand.
    Links,
    /// Am rechten Rand.
    Rechts,
    /// Am oberen Rand.
    Oben,
    /// Am unteren Rand.
    Unten,
    /// In der Mitte des Gleisplans.
    Mitte,
}

impl Display for AusrichtenArgument {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(self, formatter)
    }
}

/// [`Maßstab`] für die aktuelle Session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumArgument)]
#[kommandozeilen_argumente(case: insensitive)]
pub enum MaßstabArgument {
    /// [`Maßstab::N`]
    N,
    /// [`Maßstab::H0`]
    H0,
}

impl Display for MaßstabArgument {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(self, formatter)
    }
}

impl From<MaßstabArgument> for Maßstab {
    fn from(argument: MaßstabArgument) -> Self {
        match argument {
            MaßstabArgument::N => Maßstab::N,
            MaßstabArgument::H0 => Maßstab::H0,
        }
    }
}
