//! Résultat d’une évaluation, tel que rendu à l’appelant.

use std::fmt;

use num_bigint::BigInt;

/// Domaine numérique effectivement utilisé.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Domaine {
    Entier,
    Flottant,
}

impl fmt::Display for Domaine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Domaine::Entier => f.write_str("integer"),
            Domaine::Flottant => f.write_str("float"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Valeur {
    Entier(BigInt),
    Flottant(f64),
}

impl Valeur {
    pub fn domaine(&self) -> Domaine {
        match self {
            Valeur::Entier(_) => Domaine::Entier,
            Valeur::Flottant(_) => Domaine::Flottant,
        }
    }
}

/// Avertissements non fatals, sans doublon, dans l’ordre d’apparition.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Avertissements(Vec<String>);

impl Avertissements {
    pub fn ajouter(&mut self, msg: impl Into<String>) {
        let msg = msg.into();
        if !self.0.contains(&msg) {
            self.0.push(msg);
        }
    }

    pub fn est_vide(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Resultat {
    Succes {
        domaine: Domaine,
        valeur: Valeur,
        texte: String,
        avertissements: Vec<String>,
    },
    Echec {
        message: String,
        avertissements: Vec<String>,
    },
}

impl Resultat {
    pub fn est_succes(&self) -> bool {
        matches!(self, Resultat::Succes { .. })
    }

    /// Texte affichable : la valeur formatée, ou le message d’erreur.
    pub fn texte(&self) -> &str {
        match self {
            Resultat::Succes { texte, .. } => texte,
            Resultat::Echec { message, .. } => message,
        }
    }

    pub fn domaine(&self) -> Option<Domaine> {
        match self {
            Resultat::Succes { domaine, .. } => Some(*domaine),
            Resultat::Echec { .. } => None,
        }
    }

    pub fn avertissements(&self) -> &[String] {
        match self {
            Resultat::Succes { avertissements, .. } | Resultat::Echec { avertissements, .. } => {
                avertissements
            }
        }
    }
}
