//! Physikalische Längen und ihre Umrechnung in Pixel.

use serde::{Deserialize, Serialize};

use crate::skalar::Skalar;

/// Anzahl Pixel pro Zoll auf dem Gleisplan.
pub const PIXEL_PRO_ZOLL: f64 = 36.;

/// Maßeinheit einer [`Länge`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Einheit {
    /// Zoll (inch).
    Zoll,
    /// Millimeter.
    Millimeter,
}

impl Einheit {
    /// Wie viele Einheiten ein Zoll entspricht.
    #[must_use]
    pub const fn pro_zoll(&self) -> f64 {
        match self {
            Einheit::Zoll => 1.,
            Einheit::Millimeter => 25.4,
        }
    }
}

/// Eine physikalische Länge, intern in Zoll gespeichert.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Länge {
    /// Die Länge in Zoll.
    zoll: f64,
}

impl Länge {
    /// Erzeuge eine Länge in der angegebenen [`Einheit`].
    #[must_use]
    pub fn neu(wert: f64, einheit: Einheit) -> Self {
        // Wie f64: Schlimmstenfalls kommt es zu Genauigkeits-Problemen.
        #[allow(clippy::arithmetic_side_effects)]
        Länge { zoll: wert / einheit.pro_zoll() }
    }

    /// Erzeuge eine Länge in Zoll.
    #[must_use]
    pub const fn zoll(wert: f64) -> Self {
        Länge { zoll: wert }
    }

    /// Erzeuge eine Länge in Millimeter.
    #[must_use]
    pub fn millimeter(wert: f64) -> Self {
        Länge::neu(wert, Einheit::Millimeter)
    }

    /// Die Länge in Zoll.
    #[must_use]
    pub const fn als_zoll(&self) -> f64 {
        self.zoll
    }

    /// Die Länge in der angegebenen [`Einheit`].
    #[must_use]
    pub fn als(&self, einheit: Einheit) -> f64 {
        self.zoll * einheit.pro_zoll()
    }

    /// Die Länge in Pixel auf dem Gleisplan.
    #[must_use]
    pub fn als_pixel(&self) -> Skalar {
        Skalar(self.zoll * PIXEL_PRO_ZOLL)
    }

    /// Erzeuge eine Länge aus einer Pixel-Angabe auf dem Gleisplan.
    #[must_use]
    pub fn aus_pixel(pixel: Skalar) -> Self {
        // Wie f64: Schlimmstenfalls kommt es zu Genauigkeits-Problemen.
        #[allow(clippy::arithmetic_side_effects)]
        Länge { zoll: pixel.0 / PIXEL_PRO_ZOLL }
    }
}

/// Maßstab der Modelleisenbahn. Bestimmt alle von der Spurweite abhängigen Größen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Maßstab {
    /// Spur N, Spurweite 3/8 Zoll.
    N,
    /// Spur H0, Spurweite 16,5 mm.
    H0,
}

impl Maßstab {
    /// Spurweite als physikalische Länge.
    #[must_use]
    pub fn spurweite_länge(&self) -> Länge {
        match self {
            Maßstab::N => Länge::zoll(3. / 8.),
            Maßstab::H0 => Länge::millimeter(16.5),
        }
    }

    /// Abstand beider Schienen \[Pixel\].
    #[must_use]
    pub fn spurweite(&self) -> Skalar {
        self.spurweite_länge().als_pixel()
    }

    /// Breite des Schotterbetts \[Pixel\].
    #[must_use]
    pub fn schotter_breite(&self) -> Skalar {
        // Wie f64: Schlimmstenfalls kommt es zu Genauigkeits-Problemen.
        #[allow(clippy::arithmetic_side_effects)]
        {
            self.spurweite() * Skalar(1.8)
        }
    }

    /// Länge einer Schwelle \[Pixel\].
    #[must_use]
    pub fn schwellen_länge(&self) -> Skalar {
        // Wie f64: Schlimmstenfalls kommt es zu Genauigkeits-Problemen.
        #[allow(clippy::arithmetic_side_effects)]
        {
            self.spurweite() * Skalar(1.6)
        }
    }

    /// Breite einer Schwelle \[Pixel\].
    #[must_use]
    pub fn schwellen_breite(&self) -> Skalar {
        // Wie f64: Schlimmstenfalls kommt es zu Genauigkeits-Problemen.
        #[allow(clippy::arithmetic_side_effects)]
        {
            self.spurweite() * Skalar(0.25)
        }
    }

    /// Abstand zwischen zwei Schwellen \[Pixel\].
    #[must_use]
    pub fn schwellen_abstand(&self) -> Skalar {
        self.spurweite().halbiert()
    }

    /// Breite einer Schiene \[Pixel\].
    #[must_use]
    pub fn schienen_breite(&self) -> Skalar {
        // Wie f64: Schlimmstenfalls kommt es zu Genauigkeits-Problemen.
        #[allow(clippy::arithmetic_side_effects)]
        {
            self.spurweite() * Skalar(0.1)
        }
    }

    /// Maximaler Abstand zweier Verbindungen, damit sie beim Einrasten berücksichtigt werden \[Pixel\].
    #[must_use]
    pub fn fangradius(&self) -> Skalar {
        self.spurweite().doppelt()
    }
}
