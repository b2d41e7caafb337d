//! Tests scientifiques (campagne) : propriétés observables du pipeline complet.
//!
//! But : vérifier de bout en bout (texte -> résultat) ce que voit l’appelant.
//! - choix du domaine en auto
//! - précédence / associativité
//! - bornes de coût (chiffres, exposant, factorielle)
//! - entrées mal formées : toujours un Echec, jamais de panique

use std::time::{Duration, Instant};

use num_bigint::BigInt;

use super::{evaluer, Domaine, Mode, Resultat, Valeur};

fn eval_ok(expr: &str, mode: Mode) -> (Domaine, String) {
    match evaluer(expr, mode) {
        Resultat::Succes { domaine, texte, .. } => (domaine, texte),
        Resultat::Echec { message, .. } => panic!("expr={expr:?} mode={mode} err={message}"),
    }
}

fn eval_err(expr: &str, mode: Mode) -> String {
    match evaluer(expr, mode) {
        Resultat::Echec { message, .. } => message,
        Resultat::Succes { texte, .. } => panic!("expr={expr:?} attendu Echec, obtenu {texte}"),
    }
}

fn assert_texte(expr: &str, attendu: &str) {
    let (_, texte) = eval_ok(expr, Mode::Auto);
    assert_eq!(texte, attendu, "expr={expr:?}");
}

fn assert_contient(hay: &str, needle: &str) {
    assert!(hay.contains(needle), "attendu que {hay:?} contienne {needle:?}");
}

/// Budget global anti-gel.
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Domaine en mode auto ------------------------ */

#[test]
fn sci_auto_entier_exact() {
    let (domaine, texte) = eval_ok("2^200", Mode::Auto);
    assert_eq!(domaine, Domaine::Entier);
    assert_eq!(texte, BigInt::from(2).pow(200u32).to_string());
    assert_eq!(texte.len(), 61);

    let (domaine, texte) = eval_ok("25! / 24!", Mode::Auto);
    assert_eq!(domaine, Domaine::Entier);
    assert_eq!(texte, "25");
}

#[test]
fn sci_auto_flottant() {
    for expr in ["1.5 * 2", "2e3", "pi", "E * 1", "sin(1)", "sqrt(16)", "log(10)"] {
        let (domaine, _) = eval_ok(expr, Mode::Auto);
        assert_eq!(domaine, Domaine::Flottant, "expr={expr:?}");
    }
}

#[test]
fn sci_valeur_typee() {
    match evaluer("6 * 7", Mode::Auto) {
        Resultat::Succes { valeur, .. } => assert_eq!(valeur, Valeur::Entier(BigInt::from(42))),
        autre => panic!("{autre:?}"),
    }
    match evaluer("6 * 7", Mode::Flottant) {
        Resultat::Succes { valeur, .. } => assert_eq!(valeur, Valeur::Flottant(42.0)),
        autre => panic!("{autre:?}"),
    }
}

/* ------------------------ Division selon le domaine ------------------------ */

#[test]
fn sci_sept_sur_deux() {
    assert_contient(&eval_err("7 / 2", Mode::Entier), "remainder");
    let (domaine, texte) = eval_ok("7 / 2", Mode::Flottant);
    assert_eq!(domaine, Domaine::Flottant);
    assert_eq!(texte, "3.5");
}

/* ------------------------ Précédence / associativité ------------------------ */

#[test]
fn sci_precedence() {
    assert_texte("3 + 4 * 2", "11");
    assert_texte("(3 + 4) * 2", "14");
    assert_texte("2 ^ 3 ^ 2", "512");
    assert_texte("-3!", "-6");
    assert_texte("2 × 3 ÷ 3", "2");
    assert_texte("10 - 2 - 3", "5");
    assert_texte("-2 ^ 2", "4");
}

/* ------------------------ Fonctions ------------------------ */

#[test]
fn sci_fonctions() {
    assert_texte("sin(0)", "0");
    assert_texte("log(100)", "2");
    assert_texte("log(8, 2)", "3");
    assert_texte("max(1,5,3)", "5");
    assert_texte("MIN(4, 2, 8)", "2");
    assert_texte("abs(-7)", "7");
    assert_texte("pow(2, 0.5) ^ 2", "2");
    assert_texte("0.1 + 0.2", "0.3");
}

#[test]
fn sci_fonctions_en_mode_entier_refusees() {
    assert_contient(&eval_err("abs(1)", Mode::Entier), "integer mode");
    assert_contient(&eval_err("pi + 1", Mode::Entier), "integer mode");
    assert_contient(&eval_err("1.5", Mode::Entier), "integer");
}

/* ------------------------ Aller-retour entier ------------------------ */

#[test]
fn sci_aller_retour_entier() {
    for expr in ["2^200", "-(3^40)", "30!", "123456789 * 987654321", "-17 % 5"] {
        let (_, premier) = eval_ok(expr, Mode::Auto);
        let (domaine, second) = eval_ok(&premier, Mode::Auto);
        assert_eq!(domaine, Domaine::Entier);
        assert_eq!(premier, second, "expr={expr:?}");
    }
}

/* ------------------------ Bornes ------------------------ */

#[test]
fn sci_bornes_factorielle() {
    let t0 = Instant::now();

    let (_, texte) = eval_ok("170!", Mode::Flottant);
    assert!(texte.len() > 300);
    assert_contient(&eval_err("171!", Mode::Flottant), "overflow");
    assert_contient(&eval_err("50001!", Mode::Entier), "too large");
    assert_contient(&eval_err("5000!", Mode::Entier), "too large");

    budget(t0, Duration::from_secs(10));
}

#[test]
fn sci_plafond_de_chiffres() {
    let t0 = Instant::now();

    assert_contient(&eval_err("10 ^ 10000", Mode::Auto), "too large");
    assert_contient(&eval_err("2 ^ 1000000", Mode::Auto), "too large");
    assert_contient(&eval_err("2 ^ 1000001", Mode::Auto), "exponent");
    assert_contient(&eval_err("2 ^ -1", Mode::Auto), "negative exponent");

    let (_, texte) = eval_ok("10 ^ 9999", Mode::Auto);
    assert_eq!(texte.len(), 10_000);

    budget(t0, Duration::from_secs(10));
}

#[test]
fn sci_flottant_non_fini() {
    assert_contient(&eval_err("1e308 * 10", Mode::Auto), "not finite");
    assert_contient(&eval_err("1 / 0", Mode::Flottant), "division by zero");
    assert_contient(&eval_err("5 % 0", Mode::Auto), "division by zero");
}

#[test]
fn sci_avertissement_precision() {
    let r = evaluer("2^53 * 4", Mode::Flottant);
    assert!(r.est_succes());
    assert_eq!(r.avertissements().len(), 1);
    assert_contient(&r.avertissements()[0], "precision");

    // même chose en entier : exact, sans avertissement
    let r = evaluer("2^53 * 4", Mode::Auto);
    assert!(r.avertissements().is_empty());
    assert_eq!(r.texte(), "36028797018963968");
}

/* ------------------------ Entrées mal formées ------------------------ */

#[test]
fn sci_entrees_mal_formees() {
    let cas = [
        ("(", "mismatched parentheses"),
        (")", "mismatched parentheses"),
        ("1 +", "expression incomplete"),
        ("sin()", "arguments"),
        ("foo(1)", "unknown function: foo"),
        (",", "comma"),
        ("1, 2", "comma"),
        ("x", "unknown identifier: x"),
        ("1 # 2", "'#'"),
        (".", "invalid number"),
        ("2 3", "not well-formed"),
        ("*", "expression incomplete"),
    ];
    for (expr, fragment) in cas {
        for mode in Mode::TOUS {
            let msg = eval_err(expr, mode);
            assert_contient(&msg, fragment);
        }
    }
}

#[test]
fn sci_appel_vide_avec_espaces() {
    assert_eq!(eval_err("min()", Mode::Auto), eval_err("min( )", Mode::Auto));
    assert_eq!(eval_err("max()", Mode::Auto), eval_err("max(\t\n)", Mode::Auto));
}
