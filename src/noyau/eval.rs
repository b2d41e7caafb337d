//! Noyau : évaluation (pipeline réel)
//!
//! tokenize -> postfixe -> choix du domaine -> machine à pile -> format
//!
//! Le domaine (entier exact ou f64) est choisi une fois, sur le postfixe entier.
//! Les avertissements accumulés sont rendus même quand l’évaluation échoue.

use log::debug;

use super::entier::evaluer_entier;
use super::erreur::ErreurCalcul;
use super::flottant::evaluer_flottant;
use super::format::format_valeur;
use super::jetons::{format_tokens, tokenize};
use super::reglages::{Mode, PolitiqueAuto, Reglages};
use super::registre::{est_fonction_flottante, Operateur};
use super::resultat::{Avertissements, Domaine, Resultat, Valeur};
use super::rpn::{format_postfix, to_postfix, Postfixe};

pub const AVERT_DIVISION_ENTIERE: &str =
    "integer mode: division requires an exact quotient and errors on remainder";

/// Trace des étapes, pour le panneau « Démarche » du front.
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct DemarcheNoyau {
    pub jetons: String,
    pub rpn: String,
    pub domaine: String,
}

/// Choix du domaine selon le mode demandé.
/// En auto : entier, sauf si la politique repère une construction flottante.
pub fn choisir_domaine(rpn: &[Postfixe], mode: Mode, politique: &PolitiqueAuto) -> Domaine {
    match mode {
        Mode::Entier => Domaine::Entier,
        Mode::Flottant => Domaine::Flottant,
        Mode::Auto => {
            let flottant = rpn.iter().any(|t| match t {
                Postfixe::Num(raw) => {
                    politique.decimal_ou_exposant && raw.contains(['.', 'e', 'E'])
                }
                Postfixe::Const(_) => politique.constantes,
                Postfixe::Func { nom, .. } => {
                    politique.tout_appel
                        || (politique.fonctions_flottantes && est_fonction_flottante(nom))
                }
                Postfixe::Op(_) => false,
            });
            if flottant {
                Domaine::Flottant
            } else {
                Domaine::Entier
            }
        }
    }
}

fn pipeline(
    expr: &str,
    mode: Mode,
    reglages: &Reglages,
    avert: &mut Avertissements,
    demarche: &mut DemarcheNoyau,
) -> Result<Valeur, ErreurCalcul> {
    // 1) Jetons
    let jetons = tokenize(expr)?;
    if jetons.is_empty() {
        return Err(ErreurCalcul::Vide);
    }
    demarche.jetons = format_tokens(&jetons);
    debug!("jetons: {}", demarche.jetons);

    // 2) Postfixe
    let rpn = to_postfix(&jetons)?;
    demarche.rpn = format_postfix(&rpn);
    debug!("postfixe: {}", demarche.rpn);

    // 3) Domaine
    let domaine = choisir_domaine(&rpn, mode, &reglages.politique_auto);
    demarche.domaine = domaine.to_string();
    debug!("mode {mode} -> domaine {domaine}");

    // 4) Machine à pile
    match domaine {
        Domaine::Entier => {
            if rpn.iter().any(|t| *t == Postfixe::Op(Operateur::Div)) {
                avert.ajouter(AVERT_DIVISION_ENTIERE);
            }
            Ok(Valeur::Entier(evaluer_entier(&rpn, reglages)?))
        }
        Domaine::Flottant => Ok(Valeur::Flottant(evaluer_flottant(&rpn, reglages, avert)?)),
    }
}

/// API publique : évalue une expression avec des réglages explicites
/// et retourne aussi la démarche (jetons, postfixe, domaine).
pub fn evaluer_avec_demarche(
    expr: &str,
    mode: Mode,
    reglages: &Reglages,
) -> (Resultat, DemarcheNoyau) {
    let mut avert = Avertissements::default();
    let mut demarche = DemarcheNoyau::default();

    let resultat = match pipeline(expr, mode, reglages, &mut avert, &mut demarche) {
        Ok(valeur) => Resultat::Succes {
            domaine: valeur.domaine(),
            texte: format_valeur(&valeur),
            valeur,
            avertissements: avert.into_vec(),
        },
        Err(e) => {
            debug!("échec de {expr:?}: {e}");
            Resultat::Echec {
                message: e.to_string(),
                avertissements: avert.into_vec(),
            }
        }
    };

    (resultat, demarche)
}

/// Comme `evaluer`, avec des réglages explicites.
pub fn evaluer_avec(expr: &str, mode: Mode, reglages: &Reglages) -> Resultat {
    evaluer_avec_demarche(expr, mode, reglages).0
}

/// API publique : évalue `expr` dans le mode demandé, réglages par défaut.
pub fn evaluer(expr: &str, mode: Mode) -> Resultat {
    evaluer_avec(expr, mode, &Reglages::default())
}
