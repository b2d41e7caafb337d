//! Domaine flottant : machine à pile sur `f64`.
//!
//! Tout résultat non fini est une erreur (jamais propagé en silence).
//! Un entier au-delà de 2^53-1 ajoute un avertissement de perte de précision.

use super::erreur::ErreurEval;
use super::reglages::Reglages;
use super::registre::{valeur_constante, Operateur};
use super::resultat::Avertissements;
use super::rpn::Postfixe;

/// Number.MAX_SAFE_INTEGER
pub const MAX_ENTIER_SUR: f64 = 9_007_199_254_740_991.0;

pub const AVERT_PRECISION: &str =
    "result exceeds the safe integer range (±9,007,199,254,740,991); precision may be lost";

fn fini(v: f64) -> Result<f64, ErreurEval> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(ErreurEval::NonFini)
    }
}

fn surveille_precision(v: f64, avert: &mut Avertissements) {
    if v.fract() == 0.0 && v.abs() > MAX_ENTIER_SUR {
        avert.ajouter(AVERT_PRECISION);
    }
}

fn litteral(raw: &str) -> Result<f64, ErreurEval> {
    let v: f64 = raw
        .parse()
        .map_err(|_| ErreurEval::NombreInvalide(raw.to_string()))?;
    fini(v)
}

fn factorielle(n: f64, r: &Reglages) -> Result<f64, ErreurEval> {
    if n < 0.0 {
        return Err(ErreurEval::FactorielleNegative);
    }
    if n.fract() != 0.0 {
        return Err(ErreurEval::FactorielleNonEntiere);
    }
    if n > r.max_factorielle_flottant as f64 {
        return Err(ErreurEval::FactorielleDeborde(r.max_factorielle_flottant));
    }
    let mut acc = 1.0_f64;
    let mut i = 2.0_f64;
    while i <= n {
        acc *= i;
        i += 1.0;
    }
    Ok(acc)
}

fn binaire(op: Operateur, a: f64, b: f64) -> Result<f64, ErreurEval> {
    match op {
        Operateur::Plus => Ok(a + b),
        Operateur::Moins => Ok(a - b),
        Operateur::Fois => Ok(a * b),
        Operateur::Div => {
            if b == 0.0 {
                return Err(ErreurEval::DivisionParZero);
            }
            Ok(a / b)
        }
        Operateur::Modulo => {
            if b == 0.0 {
                return Err(ErreurEval::DivisionParZero);
            }
            Ok(a % b)
        }
        Operateur::Puissance => Ok(a.powf(b)),
        Operateur::PlusUnaire | Operateur::MoinsUnaire | Operateur::Factorielle => {
            Err(ErreurEval::MalFormee)
        }
    }
}

/// Appel d’une fonction du registre ; `args` dans l’ordre d’écriture.
/// L’arité a déjà été validée au parse.
fn appel(nom: &str, args: &[f64]) -> Result<f64, ErreurEval> {
    let x = *args.first().ok_or(ErreurEval::Incomplete)?;
    let v = match nom {
        "sin" => x.sin(),
        "cos" => x.cos(),
        "tan" => x.tan(),
        "asin" => x.asin(),
        "acos" => x.acos(),
        "atan" => x.atan(),
        "sqrt" => x.sqrt(),
        "abs" => x.abs(),
        "ln" => x.ln(),
        "exp" => x.exp(),
        "log" => match args.get(1) {
            None => x.log10(),
            Some(base) => x.ln() / base.ln(),
        },
        "pow" => {
            let y = *args.get(1).ok_or(ErreurEval::Incomplete)?;
            x.powf(y)
        }
        "min" => args.iter().copied().fold(f64::INFINITY, f64::min),
        "max" => args.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        _ => return Err(ErreurEval::MalFormee),
    };
    Ok(v)
}

/// Évalue un postfixe dans le domaine flottant.
pub fn evaluer_flottant(
    rpn: &[Postfixe],
    r: &Reglages,
    avert: &mut Avertissements,
) -> Result<f64, ErreurEval> {
    let mut st: Vec<f64> = Vec::with_capacity(rpn.len());

    for tok in rpn {
        match tok {
            Postfixe::Num(raw) => st.push(litteral(raw)?),

            Postfixe::Const(nom) => {
                let v = valeur_constante(nom).ok_or(ErreurEval::MalFormee)?;
                st.push(v);
            }

            Postfixe::Op(op @ (Operateur::PlusUnaire | Operateur::MoinsUnaire)) => {
                let a = st.pop().ok_or(ErreurEval::Incomplete)?;
                let v = if *op == Operateur::MoinsUnaire { -a } else { a };
                st.push(fini(v)?);
            }

            Postfixe::Op(Operateur::Factorielle) => {
                let a = st.pop().ok_or(ErreurEval::Incomplete)?;
                let v = fini(factorielle(a, r)?)?;
                surveille_precision(v, avert);
                st.push(v);
            }

            Postfixe::Op(op) => {
                let b = st.pop().ok_or(ErreurEval::Incomplete)?;
                let a = st.pop().ok_or(ErreurEval::Incomplete)?;
                let v = fini(binaire(*op, a, b)?)?;
                surveille_precision(v, avert);
                st.push(v);
            }

            Postfixe::Func { nom, argc } => {
                if st.len() < *argc {
                    return Err(ErreurEval::Incomplete);
                }
                let args = st.split_off(st.len() - argc);
                let v = fini(appel(nom, &args)?)?;
                surveille_precision(v, avert);
                st.push(v);
            }
        }
    }

    if st.len() != 1 {
        return Err(ErreurEval::MalFormee);
    }
    let v = st.pop().ok_or(ErreurEval::MalFormee)?;
    surveille_precision(v, avert);
    Ok(v)
}
