//! Speichern und Laden eines Gleisplans.

use std::{
    fs,
    io::{self, Read},
    path::Path,
};

use bincode::Options;
use itertools::Itertools;
use log::{info, warn};
use serde::{Deserialize, Serialize};

use gleisplan_gleis::katalog::RÜCKFALL;
use gleisplan_typen::{
    länge::{Länge, PIXEL_PRO_ZOLL},
    position::Position,
    skalar::Skalar,
    vektor::Vektor,
    winkel::WinkelGradmaß,
};

use crate::{standard_größe, zeichnen::Zeichner, Gleise};

/// Serialisierbare Darstellung eines platzierten Gleises.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GleisSerialisiert {
    /// x-Koordinate des lokalen Ursprungs \[Pixel\].
    pub x: f64,
    /// y-Koordinate des lokalen Ursprungs \[Pixel\].
    pub y: f64,
    /// Rotation in Grad, `0` für nicht rotierte Gleise.
    ///
    /// Das Dateiformat enthält den Wert immer, es gibt keinen Rückfall beim Laden.
    pub winkel: f64,
    /// Name der Form im Katalog.
    pub form: String,
}

/// Serialisierbare Darstellung eines Gleisplans.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GleisplanSerialisiert {
    /// Pixel pro Zoll, mit denen die Koordinaten gespeichert wurden.
    pub dpi: f64,
    /// Breite des Gleisplans in Zoll.
    pub breite: f64,
    /// Höhe des Gleisplans in Zoll.
    pub höhe: f64,
    /// Alle Gleise in Zeichen-Reihenfolge.
    pub gleise: Vec<GleisSerialisiert>,
}

/// Fehler beim [Speichern](Gleise::speichern) oder [Laden](Gleise::laden).
#[derive(Debug, gleisplan_macros::From)]
pub enum Fehler {
    /// Fehler beim Lesen oder Schreiben der Datei.
    Io(io::Error),
    /// Fehler beim (De-)Serialisieren.
    Bincode(bincode::Error),
}

/// [`bincode`]-Optionen, bei denen überzählige Bytes abgelehnt werden.
fn bincode_optionen() -> impl Options {
    bincode::DefaultOptions::new().with_fixint_encoding().reject_trailing_bytes()
}

/// Ersetze einen nicht endlichen Wert durch `0`.
fn endlich_oder_null(wert: f64, name: &str) -> f64 {
    if wert.is_finite() {
        wert
    } else {
        warn!("Ungültiger Wert {wert} für {name}, verwende 0.");
        0.
    }
}

/// Ist der Wert endlich und echt positiv?
fn positiv(wert: f64) -> bool {
    wert.is_finite() && wert > 0.
}

impl<Z: Zeichner> Gleise<Z> {
    /// Erzeuge die serialisierbare Darstellung aller Gleise.
    #[must_use]
    pub fn serialisiere(&self) -> GleisplanSerialisiert {
        let gleise = self
            .gleise
            .iter()
            .map(|gleis| {
                let Position { punkt, winkel } = *gleis.position();
                GleisSerialisiert {
                    x: punkt.x.0,
                    y: punkt.y.0,
                    winkel: winkel.grad(),
                    form: self.katalog.form(gleis.form()).name().to_owned(),
                }
            })
            .collect();
        GleisplanSerialisiert {
            dpi: PIXEL_PRO_ZOLL,
            breite: Länge::aus_pixel(self.größe.x).als_zoll(),
            höhe: Länge::aus_pixel(self.größe.y).als_zoll(),
            gleise,
        }
    }

    /// Ersetze alle Gleise durch die übergebenen.
    ///
    /// Gleise werden exakt an ihrer gespeicherten Position platziert, ohne einzurasten.
    /// Unbekannte Formen werden durch die Rückfall-Form ersetzt,
    /// eine ungültige Größe durch die Standard-Größe und nicht endliche Koordinaten durch `0`.
    pub fn lade_serialisiert(&mut self, serialisiert: GleisplanSerialisiert) {
        let GleisplanSerialisiert { dpi, breite, höhe, gleise } = serialisiert;
        let größe = if positiv(breite) && positiv(höhe) {
            Vektor { x: Länge::zoll(breite).als_pixel(), y: Länge::zoll(höhe).als_pixel() }
        } else {
            warn!("Ungültige Größe {breite}x{höhe}, verwende Standard-Größe.");
            standard_größe()
        };
        let skalierung = if positiv(dpi) {
            // Wie f64: Schlimmstenfalls kommt es zu Genauigkeits-Problemen.
            #[allow(clippy::arithmetic_side_effects)]
            Skalar(PIXEL_PRO_ZOLL / dpi)
        } else {
            warn!("Ungültige Auflösung {dpi}, verwende {PIXEL_PRO_ZOLL}.");
            Skalar(1.)
        };
        self.zurücksetzen(größe.x, größe.y);

        let mut unbekannt = Vec::new();
        for GleisSerialisiert { x, y, winkel, form } in gleise {
            let form_id = match self.katalog.suche(&form) {
                Some(form_id) => form_id,
                None => {
                    let form_id = self.katalog.suche_oder_standard(&form);
                    unbekannt.push(form);
                    form_id
                },
            };
            // Wie f64: Schlimmstenfalls kommt es zu Genauigkeits-Problemen.
            #[allow(clippy::arithmetic_side_effects)]
            let punkt = Vektor {
                x: Skalar(endlich_oder_null(x, "x")),
                y: Skalar(endlich_oder_null(y, "y")),
            } * skalierung;
            let winkel = WinkelGradmaß::neu(endlich_oder_null(winkel, "winkel"));
            let _ = self.platzieren(Position::neu(punkt, winkel), form_id);
        }
        if !unbekannt.is_empty() {
            warn!(
                "Unbekannte Formen durch {RÜCKFALL} ersetzt: {}",
                unbekannt.iter().unique().join(", ")
            );
        }
        self.verändert = false;
        info!("{} Gleise geladen.", self.gleise.len());
    }

    /// Speichere alle Gleise in einer Datei.
    ///
    /// ## Errors
    ///
    /// Fehler beim Schreiben der Datei oder beim Serialisieren.
    pub fn speichern(&mut self, pfad: impl AsRef<Path>) -> Result<(), Fehler> {
        let serialisiert = self.serialisiere();
        let datei = fs::File::create(pfad.as_ref())?;
        bincode_optionen().serialize_into(datei, &serialisiert)?;
        self.als_gespeichert_markieren();
        info!("Gleisplan gespeichert: {}", pfad.as_ref().display());
        Ok(())
    }

    /// Lade Gleise aus einer Datei und ersetze alle bisherigen Gleise.
    ///
    /// ## Errors
    ///
    /// Fehler beim Lesen der Datei oder ein ungültiges Speicherformat.
    /// Die bisherigen Gleise bleiben in diesem Fall erhalten.
    pub fn laden(&mut self, pfad: impl AsRef<Path>) -> Result<(), Fehler> {
        let mut inhalt = Vec::new();
        let _ = fs::File::open(pfad.as_ref())?.read_to_end(&mut inhalt)?;
        let serialisiert = bincode_optionen().deserialize(inhalt.as_slice())?;
        self.lade_serialisiert(serialisiert);
        info!("Gleisplan geladen: {}", pfad.as_ref().display());
        Ok(())
    }
}
