//! Noyau d’évaluation d’expressions
//!
//! Organisation interne :
//! - jetons.rs    : tokenisation (numéraux bruts, identifiants, opérateurs)
//! - registre.rs  : tables statiques (opérateurs, fonctions, constantes)
//! - rpn.rs       : shunting-yard -> postfixe (arité résolue au parse)
//! - entier.rs    : machine à pile, domaine entier exact (BigInt)
//! - flottant.rs  : machine à pile, domaine f64
//! - format.rs    : affichage du résultat selon le domaine
//! - eval.rs      : pipeline complet + choix du domaine
//! - reglages.rs  : garde-fous de coût + politique du mode auto
//! - erreur.rs    : erreurs lex / syntaxe / éval
//! - resultat.rs  : succès / échec + avertissements

pub mod entier;
pub mod erreur;
pub mod eval;
pub mod flottant;
pub mod format;
pub mod jetons;
pub mod reglages;
pub mod registre;
pub mod resultat;
pub mod rpn;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

#[cfg(test)]
mod tests_proprietes;

// API publique minimale
pub use erreur::{ErreurCalcul, ErreurEval, ErreurLex, ErreurSyntaxe};
pub use eval::{evaluer, evaluer_avec, evaluer_avec_demarche, DemarcheNoyau};
pub use reglages::{Mode, PolitiqueAuto, Reglages};
pub use resultat::{Domaine, Resultat, Valeur};
