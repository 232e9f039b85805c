//! Ein [`Zeichner`] ohne Zeichenfläche, der alle Aufrufe protokolliert.

use log::trace;

use gleisplan_gleis::form::Form;
use gleisplan_gleise::zeichnen::{Darstellung, Ebene, Zeichner};
use gleisplan_typen::{farbe::Farbe, position::Position, vektor::Vektor};

/// Protokolliert alle Zeichen-Aufrufe als trace-Nachricht und zählt sie.
#[derive(Debug, Default)]
pub struct ProtokollZeichner {
    gezeichnet: usize,
    gelöscht: usize,
}

impl ProtokollZeichner {
    /// Anzahl der bisher gezeichneten Formen.
    #[must_use]
    pub const fn gezeichnet(&self) -> usize {
        self.gezeichnet
    }

    /// Anzahl der bisher gelöschten Formen.
    #[must_use]
    pub const fn gelöscht(&self) -> usize {
        self.gelöscht
    }
}

impl Zeichner for ProtokollZeichner {
    fn zeichne(
        &mut self,
        ebene: Ebene,
        position: &Position,
        form: &Form,
        farbe: Farbe,
        darstellung: &Darstellung,
    ) {
        trace!(
            "{ebene:?}: {} bei ({}, {}), {}° in {} (Schwellen: {})",
            form.name(),
            position.punkt.x.0,
            position.punkt.y.0,
            position.winkel.grad(),
            farbe.hex(),
            darstellung.schwellen,
        );
        self.gezeichnet = self.gezeichnet.saturating_add(1);
    }

    fn lösche(&mut self, ebene: Ebene, position: &Position, form: &Form) {
        trace!("{ebene:?}: lösche {} bei ({}, {})", form.name(), position.punkt.x.0, position.punkt.y.0);
        self.gelöscht = self.gelöscht.saturating_add(1);
    }

    fn leere(&mut self, ebene: Ebene, größe: Vektor) {
        trace!("{ebene:?}: leere {}x{}", größe.x.0, größe.y.0);
    }
}
