//! Tests par propriétés (proptest) sur le pipeline complet.

use num_bigint::BigInt;
use proptest::prelude::*;

use super::format::format_flottant;
use super::{evaluer, Domaine, Mode, Resultat};

fn petit_entier() -> impl Strategy<Value = i64> {
    -1_000_000i64..1_000_000i64
}

fn non_nul() -> impl Strategy<Value = i64> {
    prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
}

/// Écrit un entier comme le ferait un utilisateur (négatif entre parenthèses).
fn litteral(n: i64) -> String {
    if n < 0 {
        format!("({n})")
    } else {
        n.to_string()
    }
}

fn succes(expr: &str, mode: Mode) -> (Domaine, String) {
    match evaluer(expr, mode) {
        Resultat::Succes { domaine, texte, .. } => (domaine, texte),
        Resultat::Echec { message, .. } => panic!("expr={expr:?} err={message}"),
    }
}

proptest! {
    #[test]
    fn entier_concorde_avec_bigint(a in petit_entier(), b in petit_entier(), c in petit_entier()) {
        let expr = format!("{} * {} - {} + {}", litteral(a), litteral(b), litteral(c), litteral(a));
        let attendu = BigInt::from(a) * BigInt::from(b) - BigInt::from(c) + BigInt::from(a);
        let (domaine, texte) = succes(&expr, Mode::Auto);
        prop_assert_eq!(domaine, Domaine::Entier);
        prop_assert_eq!(texte, attendu.to_string());
    }

    #[test]
    fn division_exacte_inverse_la_multiplication(a in petit_entier(), b in non_nul()) {
        let expr = format!("{} * {} / {}", litteral(a), litteral(b), litteral(b));
        let (_, texte) = succes(&expr, Mode::Entier);
        prop_assert_eq!(texte, a.to_string());
    }

    #[test]
    fn modulo_comme_rust(a in petit_entier(), b in non_nul()) {
        let expr = format!("{} % {}", litteral(a), litteral(b));
        let (_, texte) = succes(&expr, Mode::Entier);
        prop_assert_eq!(texte, (a % b).to_string());
    }

    #[test]
    fn aller_retour_entier(a in petit_entier(), e in 0u32..40) {
        let expr = format!("{} ^ {e}", litteral(a));
        let (_, premier) = succes(&expr, Mode::Auto);
        let (domaine, second) = succes(&premier, Mode::Auto);
        prop_assert_eq!(domaine, Domaine::Entier);
        prop_assert_eq!(premier, second);
    }

    #[test]
    fn format_flottant_jamais_zero_negatif(v in any::<f64>().prop_filter("fini", |v| v.is_finite())) {
        let s = format_flottant(v);
        prop_assert!(!s.is_empty());
        prop_assert_ne!(s.as_str(), "-0");
        prop_assert!(!s.ends_with('.'));
    }

    #[test]
    fn format_flottant_relu_proche(v in -1.0e9f64..1.0e9f64) {
        let s = format_flottant(v);
        let relu: f64 = s.parse().unwrap_or(f64::NAN);
        prop_assert!((relu - v).abs() <= 1e-6 * v.abs().max(1.0), "v={} s={}", v, s);
    }
}
