//! Platzieren und Einrasten von Gleisen auf einem Modelleisenbahn-Gleisplan.

// Zu viele/große dependencies, um das wirklich zu vermeiden.
#![allow(clippy::multiple_crate_versions)]

// Abhängigkeiten der Bibliothek, die nicht direkt in der Binary verwendet werden.
use flexi_logger as _;
use gleisplan_argumente as _;
use gleisplan_gleis as _;
use gleisplan_gleise as _;
use gleisplan_macros as _;
use gleisplan_typen as _;
use itertools as _;
use log as _;

fn main() -> Result<(), gleisplan::Fehler> {
    gleisplan::ausführen_aus_env()
}
