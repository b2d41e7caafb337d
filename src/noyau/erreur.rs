//! Taxonomie des erreurs du noyau.
//!
//! Trois familles, une par étage du pipeline :
//! - `ErreurLex`     : jetons (caractère inconnu, numéral mal formé)
//! - `ErreurSyntaxe` : shunting-yard (parenthèses, identifiants, arité, virgules)
//! - `ErreurEval`    : machine à pile (zéro, bornes, domaine, pile)
//!
//! Toutes sont fatales. `ErreurCalcul` les réunit pour que `?` traverse le pipeline.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurLex {
    #[error("unrecognized character: '{0}'")]
    CaractereInconnu(char),
    #[error("invalid number: {0}")]
    NombreInvalide(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurSyntaxe {
    #[error("mismatched parentheses")]
    ParenthesesNonAppariees,
    #[error("unknown function: {0}")]
    FonctionInconnue(String),
    #[error("unknown identifier: {0}")]
    IdentifiantInconnu(String),
    #[error("function {nom} expects {min}..={max} arguments, got {recu}")]
    Arite {
        nom: String,
        min: usize,
        max: usize,
        recu: usize,
    },
    #[error("comma outside any bracket")]
    VirguleHorsParentheses,
    #[error("comma outside function arguments")]
    VirguleHorsFonction,
    #[error("incomplete function call: {0}")]
    AppelIncomplet(String),
    #[error("unsupported operator: {0}")]
    OperateurNonSupporte(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurEval {
    #[error("division by zero")]
    DivisionParZero,
    #[error("integer division has a remainder (exact quotient required)")]
    DivisionNonExacte,
    #[error("negative exponent not supported in integer mode")]
    ExposantNegatif,
    #[error("exponent too large (> {0})")]
    ExposantTropGrand(u64),
    #[error("factorial of a negative number")]
    FactorielleNegative,
    #[error("factorial requires an integer")]
    FactorielleNonEntiere,
    #[error("factorial input too large (> {0})")]
    FactorielleTropGrande(u64),
    #[error("factorial overflows a double (n > {0})")]
    FactorielleDeborde(u64),
    #[error("overflow / not finite")]
    NonFini,
    #[error("result too large (> {0} digits)")]
    ResultatTropGrand(usize),
    #[error("integer mode only supports integer literals: {0}")]
    LitteralNonEntier(String),
    #[error("invalid number: {0}")]
    NombreInvalide(String),
    #[error("constant {0} is not available in integer mode")]
    ConstanteEnModeEntier(String),
    #[error("function calls are not available in integer mode: {0}")]
    FonctionEnModeEntier(String),
    #[error("expression incomplete")]
    Incomplete,
    #[error("expression not well-formed")]
    MalFormee,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurCalcul {
    #[error("empty expression")]
    Vide,
    #[error(transparent)]
    Lex(#[from] ErreurLex),
    #[error(transparent)]
    Syntaxe(#[from] ErreurSyntaxe),
    #[error(transparent)]
    Eval(#[from] ErreurEval),
}
