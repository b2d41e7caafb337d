// src/noyau/rpn.rs
//
// Shunting-yard -> postfixe (RPN)
// Objectif:
// - Convertir une suite de Tok en postfixe, sans AST
// - Résoudre +/- unaires, compter les arguments des appels (par virgules)
// - Valider parenthèses, identifiants et arités dès le parse
//
// Règles:
// - Ident(name) suivi de '(' => fonction (marqueur sur la pile, arité résolue à ')')
// - Ident(name) sinon        => constante (pi, e), sinon erreur
// - '+'/'-' unaires : en tête, après un opérateur (sauf '!'), après '(' ou ','
//
// NOTE:
// - Les numéraux restent bruts : la conversion dépend du domaine choisi ensuite.

use super::erreur::ErreurSyntaxe;
use super::jetons::Tok;
use super::registre::{arite_fonction, valeur_constante, Assoc, Operateur};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Postfixe {
    Num(String),
    Const(String),
    Op(Operateur),
    Func { nom: String, argc: usize },
}

/// Entrée de la pile d’opérateurs.
#[derive(Clone, Debug)]
enum Pile {
    Op(Operateur),
    Fonction(String),
    // `appel` : parenthèse ouvrante d’un appel de fonction
    LPar { appel: bool },
}

fn doit_depiler(entrant: Operateur, sommet: Operateur) -> bool {
    let a = entrant.info();
    let b = sommet.info();
    match a.assoc {
        Assoc::Gauche => a.precedence <= b.precedence,
        Assoc::Droite => a.precedence < b.precedence,
    }
}

/// Vrai si un '+'/'-' arrivant après `prev` est unaire.
fn est_position_unaire(prev: Option<&Tok>) -> bool {
    match prev {
        None => true,
        Some(Tok::Op(c)) => *c != '!',
        Some(Tok::LPar) | Some(Tok::Virgule) => true,
        _ => false,
    }
}

/// Dépile les opérateurs jusqu’à la '(' la plus proche (exclue).
/// Renvoie le drapeau `appel` de cette parenthèse, ou None si la pile se vide.
fn vider_jusqu_a_lpar(
    ops: &mut Vec<Pile>,
    out: &mut Vec<Postfixe>,
) -> Result<Option<bool>, ErreurSyntaxe> {
    while let Some(top) = ops.last() {
        match top {
            Pile::LPar { appel } => return Ok(Some(*appel)),
            Pile::Op(op) => {
                out.push(Postfixe::Op(*op));
                ops.pop();
            }
            Pile::Fonction(nom) => return Err(ErreurSyntaxe::AppelIncomplet(nom.clone())),
        }
    }
    Ok(None)
}

/// Convertit une suite de jetons en postfixe.
///
/// Exemple:
///   tokens:  [Ident("max"), LPar, Num("1"), Virgule, Num("2"), RPar, Op('*'), Num("3")]
///   postfix: [Num("1"), Num("2"), Func{max, 2}, Num("3"), Op(Fois)]
pub fn to_postfix(tokens: &[Tok]) -> Result<Vec<Postfixe>, ErreurSyntaxe> {
    let mut out: Vec<Postfixe> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Pile> = Vec::new();

    // un compteur de virgules par appel de fonction ouvert
    let mut virgules: Vec<usize> = Vec::new();

    let mut prev: Option<&Tok> = None;

    for (idx, tok) in tokens.iter().enumerate() {
        match tok {
            Tok::Num(raw) => out.push(Postfixe::Num(raw.clone())),

            Tok::Ident(brut) => {
                let nom = brut.to_lowercase();
                if matches!(tokens.get(idx + 1), Some(Tok::LPar)) {
                    if arite_fonction(&nom).is_none() {
                        return Err(ErreurSyntaxe::FonctionInconnue(brut.clone()));
                    }
                    ops.push(Pile::Fonction(nom));
                } else if valeur_constante(&nom).is_some() {
                    out.push(Postfixe::Const(nom));
                } else {
                    return Err(ErreurSyntaxe::IdentifiantInconnu(brut.clone()));
                }
            }

            Tok::LPar => {
                let appel = matches!(ops.last(), Some(Pile::Fonction(_)));
                ops.push(Pile::LPar { appel });
                if appel {
                    virgules.push(0);
                }
            }

            Tok::Virgule => match vider_jusqu_a_lpar(&mut ops, &mut out)? {
                None => return Err(ErreurSyntaxe::VirguleHorsParentheses),
                Some(false) => return Err(ErreurSyntaxe::VirguleHorsFonction),
                Some(true) => {
                    if let Some(n) = virgules.last_mut() {
                        *n += 1;
                    }
                }
            },

            Tok::RPar => {
                let appel = vider_jusqu_a_lpar(&mut ops, &mut out)?
                    .ok_or(ErreurSyntaxe::ParenthesesNonAppariees)?;
                ops.pop(); // la '('

                if appel {
                    let nom = match ops.pop() {
                        Some(Pile::Fonction(nom)) => nom,
                        _ => return Err(ErreurSyntaxe::ParenthesesNonAppariees),
                    };
                    let nb_virgules = virgules.pop().unwrap_or(0);
                    // liste vide : le jeton précédent est la '(' de l’appel
                    let argc = if matches!(prev, Some(Tok::LPar)) {
                        0
                    } else {
                        nb_virgules + 1
                    };
                    let arite = arite_fonction(&nom)
                        .ok_or_else(|| ErreurSyntaxe::FonctionInconnue(nom.clone()))?;
                    if !arite.accepte(argc) {
                        return Err(ErreurSyntaxe::Arite {
                            nom,
                            min: arite.min,
                            max: arite.max,
                            recu: argc,
                        });
                    }
                    out.push(Postfixe::Func { nom, argc });
                }
            }

            Tok::Op(c) => {
                let base = Operateur::depuis_glyphe(*c)
                    .ok_or_else(|| ErreurSyntaxe::OperateurNonSupporte(c.to_string()))?;
                let op = match base.en_unaire() {
                    Some(unaire) if est_position_unaire(prev) => unaire,
                    _ => base,
                };

                while let Some(Pile::Op(top)) = ops.last() {
                    if !doit_depiler(op, *top) {
                        break;
                    }
                    out.push(Postfixe::Op(*top));
                    ops.pop();
                }
                ops.push(Pile::Op(op));
            }
        }

        prev = Some(tok);
    }

    // vide la pile ops
    while let Some(top) = ops.pop() {
        match top {
            Pile::Op(op) => out.push(Postfixe::Op(op)),
            Pile::LPar { .. } => return Err(ErreurSyntaxe::ParenthesesNonAppariees),
            Pile::Fonction(nom) => return Err(ErreurSyntaxe::AppelIncomplet(nom)),
        }
    }

    Ok(out)
}

/// Format utilitaire (démarche) : postfixe en texte.
pub fn format_postfix(rpn: &[Postfixe]) -> String {
    rpn.iter()
        .map(|t| match t {
            Postfixe::Num(raw) => raw.clone(),
            Postfixe::Const(nom) => nom.clone(),
            Postfixe::Op(op) => op.symbole().to_string(),
            Postfixe::Func { nom, argc } => format!("{nom}/{argc}"),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
