// src/noyau/format.rs

use num_bigint::BigInt;

use super::resultat::Valeur;

/// Chiffres significatifs fiables d’un f64.
const CHIFFRES_SIGNIFICATIFS: usize = 15;

/* ------------------------ Domaine entier ------------------------ */

/// Décimal exact, signe compris, sans séparateur.
pub fn format_entier(n: &BigInt) -> String {
    n.to_string()
}

/* ------------------------ Domaine flottant ------------------------ */

/// Arrondi à 15 chiffres significatifs (équivalent de `toPrecision(15)`).
/// Renvoie (négatif, chiffres, exposant décimal) ; `chiffres` a exactement 15 chiffres.
fn arrondi_significatif(v: f64) -> (bool, String, i32) {
    let sci = format!("{:.*e}", CHIFFRES_SIGNIFICATIFS - 1, v.abs());
    let (mantisse, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let chiffres: String = mantisse.chars().filter(|c| c.is_ascii_digit()).collect();
    let exp = exp.parse::<i32>().unwrap_or(0);
    (v.is_sign_negative(), chiffres, exp)
}

fn retire_zeros_finaux(int_part: &str, frac: &str) -> String {
    let frac = frac.trim_end_matches('0');
    if frac.is_empty() {
        int_part.to_string()
    } else {
        format!("{int_part}.{frac}")
    }
}

/// Rendu d’un f64 :
/// - -0 => "0"
/// - entier exact => entier sans décimale
/// - sinon 15 chiffres significatifs ; notation scientifique conservée telle quelle,
///   sinon zéros finaux (et point orphelin) retirés
pub fn format_flottant(v: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    if v.fract() == 0.0 {
        return format!("{v}");
    }

    let (neg, chiffres, exp) = arrondi_significatif(v);
    let signe = if neg { "-" } else { "" };

    // même bascule que toPrecision : scientifique si exp < -6 ou exp >= précision
    if exp < -6 || exp >= CHIFFRES_SIGNIFICATIFS as i32 {
        let (tete, reste) = chiffres.split_at(1);
        let signe_exp = if exp < 0 { '-' } else { '+' };
        return format!("{signe}{tete}.{reste}e{signe_exp}{}", exp.unsigned_abs());
    }

    let corps = if exp >= 0 {
        let (int_part, frac) = chiffres.split_at(exp as usize + 1);
        retire_zeros_finaux(int_part, frac)
    } else {
        let zeros = "0".repeat((-exp - 1) as usize);
        retire_zeros_finaux("0", &format!("{zeros}{chiffres}"))
    };
    format!("{signe}{corps}")
}

pub fn format_valeur(v: &Valeur) -> String {
    match v {
        Valeur::Entier(n) => format_entier(n),
        Valeur::Flottant(x) => format_flottant(*x),
    }
}
