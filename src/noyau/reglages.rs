//! Réglages du noyau : garde-fous de coût et politique du mode auto.
//!
//! Les valeurs par défaut bornent le travail d’un seul appel (pas d’annulation externe).

use std::fmt;
use std::str::FromStr;

/// Plafond de chiffres décimaux d’un entier (domaine entier).
pub const MAX_CHIFFRES_ENTIER: usize = 10_000;

/// Exposant maximal accepté par `^` en domaine entier.
pub const MAX_EXPOSANT_ENTIER: u64 = 1_000_000;

/// Entrée maximale de `!` en domaine entier.
pub const MAX_FACTORIELLE_ENTIER: u64 = 50_000;

/// Contrôle de taille au moins toutes les N multiplications de la factorielle.
pub const PAS_CONTROLE_FACTORIELLE: u64 = 200;

/// 171! déborde un f64.
pub const MAX_FACTORIELLE_FLOTTANT: u64 = 170;

/// Mode demandé par l’appelant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    #[default]
    Auto,
    Entier,
    Flottant,
}

impl Mode {
    pub const TOUS: [Mode; 3] = [Mode::Auto, Mode::Entier, Mode::Flottant];
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Mode::Auto => "auto",
            Mode::Entier => "integer",
            Mode::Flottant => "float",
        };
        f.write_str(s)
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Mode::Auto),
            "integer" | "bigint" => Ok(Mode::Entier),
            "float" | "number" => Ok(Mode::Flottant),
            autre => Err(format!("unknown mode: {autre}")),
        }
    }
}

/// Ce qui fait basculer le mode auto vers le domaine flottant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PolitiqueAuto {
    /// numéral avec point décimal ou exposant
    pub decimal_ou_exposant: bool,
    /// pi, e
    pub constantes: bool,
    /// sin cos tan asin acos atan ln log exp sqrt
    pub fonctions_flottantes: bool,
    /// n’importe quel appel (abs, pow, min, max compris)
    pub tout_appel: bool,
}

impl Default for PolitiqueAuto {
    fn default() -> Self {
        Self {
            decimal_ou_exposant: true,
            constantes: true,
            fonctions_flottantes: true,
            // le domaine entier refuse tout appel de fonction
            tout_appel: true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reglages {
    pub max_chiffres_entier: usize,
    pub max_exposant_entier: u64,
    pub max_factorielle_entier: u64,
    pub pas_controle_factorielle: u64,
    pub max_factorielle_flottant: u64,
    pub politique_auto: PolitiqueAuto,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            max_chiffres_entier: MAX_CHIFFRES_ENTIER,
            max_exposant_entier: MAX_EXPOSANT_ENTIER,
            max_factorielle_entier: MAX_FACTORIELLE_ENTIER,
            pas_controle_factorielle: PAS_CONTROLE_FACTORIELLE,
            max_factorielle_flottant: MAX_FACTORIELLE_FLOTTANT,
            politique_auto: PolitiqueAuto::default(),
        }
    }
}
