//! Einrasten eines Gleises an benachbarten, abgelegten Gleisen.

use log::{debug, info};
use rstar::{primitives::GeomWithData, RTree};

use gleisplan_gleis::{form::Form, katalog::Katalog};
use gleisplan_typen::{
    position::Position,
    skalar::Skalar,
    vektor::Vektor,
    winkel::{Trigonometrie, Winkel, WinkelGradmaß},
};

use crate::gleis::{GlobaleVerbindung, Gleis};

/// Ein abgelegtes Gleis, das beim Einrasten berücksichtigt wird.
type Kandidat<'t> = (usize, &'t Gleis, &'t Form);

/// Eintrag im [`RTree`]: Position einer Verbindung, Index des [`Kandidat`] und der Verbindung.
type VerbindungEintrag = GeomWithData<Vektor, (usize, usize)>;

/// Berechne die Position, an der das Gleis mit Index `index` einrastet.
///
/// Berücksichtigt werden nur abgelegte, nicht schwebende Gleise, deren Ausdehnung das Gleis
/// überlappt. Haben beide Gleise Verbindungen, wird an der nächsten Verbindung eingerastet,
/// sonst neben dem Gleis mit dem nächsten Mittelpunkt.
///
/// Gibt [`None`] zurück, wenn sich die Position nicht ändert.
pub(crate) fn einrasten(katalog: &Katalog, gleise: &[Gleis], index: usize) -> Option<Position> {
    let gleis = gleise.get(index)?;
    if gleis.ist_schwebend() {
        return None;
    }
    let form = katalog.form(gleis.form());
    let kandidaten: Vec<Kandidat<'_>> = gleise
        .iter()
        .enumerate()
        .filter(|(other_index, other)| *other_index != index && other.ist_abgelegt())
        .map(|(other_index, other)| (other_index, other, katalog.form(other.form())))
        .filter(|(_, other, other_form)| gleis.überlappt(form, other, other_form))
        .collect();
    if kandidaten.is_empty() {
        return None;
    }
    if form.hat_verbindungen() {
        if let Some(position) = an_verbindung(gleis, &kandidaten) {
            info!("{} rastet an Verbindung ein: {position:?}", gleis.id());
            return Some(erneut_einrasten(katalog, gleise, index, form, position));
        }
    }
    let ohne_verbindungen = kandidaten
        .iter()
        .copied()
        .filter(|(_, _, other_form)| !form.hat_verbindungen() || !other_form.hat_verbindungen());
    let position = neben_rechteck(gleis, form, ohne_verbindungen)?;
    info!("{} rastet neben Gleis ein: {position:?}", gleis.id());
    Some(position)
}

/// Suche das Paar aus eigener und fremder Verbindung mit dem kleinsten Abstand,
/// der echt kleiner als der Fangradius des Nachbarn ist.
fn an_verbindung(gleis: &Gleis, kandidaten: &[Kandidat<'_>]) -> Option<Position> {
    let einträge: Vec<VerbindungEintrag> = kandidaten
        .iter()
        .enumerate()
        .flat_map(|(kandidat_index, (_, other, _))| {
            other.verbindungen().iter().enumerate().map(move |(verbindung_index, verbindung)| {
                GeomWithData::new(verbindung.position, (kandidat_index, verbindung_index))
            })
        })
        .collect();
    let max_fangradius = kandidaten
        .iter()
        .map(|(_, _, other_form)| other_form.fangradius())
        .fold(Skalar(0.), |acc, radius| acc.max(&radius));
    let rtree = RTree::bulk_load(einträge);
    // Wie f64: Schlimmstenfalls kommt es zu Genauigkeits-Problemen.
    #[allow(clippy::arithmetic_side_effects)]
    let max_abstand_quadrat = (max_fangradius * max_fangradius).0;

    let mut bestes: Option<(Skalar, (usize, usize), &GlobaleVerbindung, &GlobaleVerbindung)> =
        None;
    for eigene in gleis.verbindungen() {
        for eintrag in rtree.locate_within_distance(eigene.position, max_abstand_quadrat) {
            let schlüssel @ (kandidat_index, verbindung_index) = eintrag.data;
            let Some((_, other, other_form)) = kandidaten.get(kandidat_index) else {
                continue;
            };
            let Some(andere) = other.verbindungen().get(verbindung_index) else {
                continue;
            };
            let abstand = eigene.position.abstand(&andere.position);
            // locate_within_distance schließt den Rand mit ein.
            if abstand >= other_form.fangradius() {
                continue;
            }
            let besser = match &bestes {
                None => true,
                Some((bester_abstand, bester_schlüssel, _, _)) => {
                    (abstand, schlüssel) < (*bester_abstand, *bester_schlüssel)
                },
            };
            if besser {
                bestes = Some((abstand, schlüssel, eigene, andere));
            }
        }
    }

    let (abstand, _, eigene, andere) = bestes?;
    debug!("Nächstes Verbindungspaar im Abstand {}: {eigene:?} -> {andere:?}", abstand.0);
    // Wie f64: Schlimmstenfalls kommt es zu Genauigkeits-Problemen.
    #[allow(clippy::arithmetic_side_effects)]
    let winkel =
        (andere.richtung - eigene.lokal.richtung + WinkelGradmaß::HALBE_UMDREHUNG).normalisiert();
    // Wie f64: Schlimmstenfalls kommt es zu Genauigkeits-Problemen.
    #[allow(clippy::arithmetic_side_effects)]
    let punkt = andere.position - eigene.lokal.position.rotiert(&Winkel::from(winkel));
    Some(Position { punkt, winkel })
}

/// Liegt das Gleis nach dem Einrasten exakt auf dem Ursprung eines anderen Gleises,
/// wird es einmalig neben dieses Gleis gelegt.
fn erneut_einrasten(
    katalog: &Katalog,
    gleise: &[Gleis],
    index: usize,
    form: &Form,
    position: Position,
) -> Position {
    let Some(gleis) = gleise.get(index) else {
        return position;
    };
    let mut verschoben = gleis.clone();
    verschoben.setze_position(position);
    let gleicher_ursprung = gleise
        .iter()
        .enumerate()
        .filter(|(other_index, other)| {
            *other_index != index && other.ist_abgelegt() && other.position().punkt == position.punkt
        })
        .map(|(other_index, other)| (other_index, other, katalog.form(other.form())))
        .take(1);
    match neben_rechteck(&verschoben, form, gleicher_ursprung) {
        Some(neue_position) => {
            debug!("{} liegt auf einem anderen Gleis, erneutes Einrasten.", gleis.id());
            neue_position
        },
        None => position,
    }
}

/// Vorzeichen eines Abstands, `0` wird als positiv behandelt.
fn vorzeichen(wert: Skalar) -> Skalar {
    if wert.0 < 0. {
        Skalar(-1.)
    } else {
        Skalar(1.)
    }
}

/// Lege das Gleis neben den Kandidaten mit dem nächsten Mittelpunkt.
///
/// Das Gleis übernimmt die Rotation des Nachbarn und wird im Koordinatensystem des Nachbarn
/// entlang der Achse mit dem größeren Abstand direkt an ihn angelegt.
fn neben_rechteck<'t>(
    gleis: &Gleis,
    form: &Form,
    kandidaten: impl Iterator<Item = Kandidat<'t>>,
) -> Option<Position> {
    let punkt = gleis.position().punkt;
    let (_, nachbar, nachbar_form) = kandidaten.min_by(|(_, a, _), (_, b, _)| {
        punkt.abstand(&a.position().punkt).0.total_cmp(&punkt.abstand(&b.position().punkt).0)
    })?;
    let nachbar_position = nachbar.position();
    let winkel = nachbar_position.winkel;
    // Wie f64: Schlimmstenfalls kommt es zu Genauigkeits-Problemen.
    #[allow(clippy::arithmetic_side_effects)]
    let abstand = (punkt - nachbar_position.punkt).rotiert(&-nachbar_position.rotation());
    let größe = form.größe();
    let nachbar_größe = nachbar_form.größe();
    // Wie f64: Schlimmstenfalls kommt es zu Genauigkeits-Problemen.
    #[allow(clippy::arithmetic_side_effects)]
    let lokal = if abstand.x.abs() < abstand.y.abs() {
        Vektor { x: Skalar(0.), y: vorzeichen(abstand.y) * (größe.y + nachbar_größe.y).halbiert() }
    } else {
        Vektor { x: vorzeichen(abstand.x) * (größe.x + nachbar_größe.x).halbiert(), y: Skalar(0.) }
    };
    Some(Position::neu(nachbar_position.transformation(lokal), winkel))
}
