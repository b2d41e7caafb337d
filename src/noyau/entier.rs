//! Domaine entier : machine à pile sur `BigInt`.
//!
//! Division exacte seulement, pas de constantes, pas d’appels de fonction.
//! Chaque résultat est borné en nombre de chiffres (voir `Reglages`).

use num_bigint::BigInt;
use num_traits::{One, Signed, ToPrimitive, Zero};

use super::erreur::ErreurEval;
use super::reglages::Reglages;
use super::registre::Operateur;
use super::rpn::Postfixe;

/// log2(10) : borne de bits par chiffre décimal.
const BITS_PAR_CHIFFRE: f64 = std::f64::consts::LOG2_10;

fn nb_chiffres(n: &BigInt) -> usize {
    if n.is_zero() {
        return 1;
    }
    n.magnitude().to_str_radix(10).len()
}

/// Refuse un entier au-delà du plafond de chiffres.
/// Raccourci par les bits : on ne convertit en décimal que près de la borne.
fn controle_taille(n: &BigInt, max_chiffres: usize) -> Result<(), ErreurEval> {
    let bits = n.bits() as f64;
    let borne_bits = max_chiffres as f64 * BITS_PAR_CHIFFRE;
    if bits + 1.0 < borne_bits {
        return Ok(());
    }
    if bits > borne_bits + 1.0 || nb_chiffres(n) > max_chiffres {
        return Err(ErreurEval::ResultatTropGrand(max_chiffres));
    }
    Ok(())
}

fn litteral(raw: &str, r: &Reglages) -> Result<BigInt, ErreurEval> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ErreurEval::LitteralNonEntier(raw.to_string()));
    }
    let n = BigInt::parse_bytes(raw.as_bytes(), 10)
        .ok_or_else(|| ErreurEval::NombreInvalide(raw.to_string()))?;
    controle_taille(&n, r.max_chiffres_entier)?;
    Ok(n)
}

fn puissance(base: &BigInt, exp: &BigInt, r: &Reglages) -> Result<BigInt, ErreurEval> {
    if exp.is_negative() {
        return Err(ErreurEval::ExposantNegatif);
    }
    let e = exp
        .to_u64()
        .filter(|e| *e <= r.max_exposant_entier)
        .ok_or(ErreurEval::ExposantTropGrand(r.max_exposant_entier))?;

    // estimation avant calcul : |base| >= 2^(bits-1)
    let bits_min = (base.bits().saturating_sub(1)) as f64 * e as f64;
    if bits_min > r.max_chiffres_entier as f64 * BITS_PAR_CHIFFRE + 1.0 {
        return Err(ErreurEval::ResultatTropGrand(r.max_chiffres_entier));
    }

    // e <= max_exposant_entier, qui tient dans u32 par défaut
    let e32 = u32::try_from(e).map_err(|_| ErreurEval::ExposantTropGrand(r.max_exposant_entier))?;
    Ok(base.pow(e32))
}

fn factorielle(n: &BigInt, r: &Reglages) -> Result<BigInt, ErreurEval> {
    if n.is_negative() {
        return Err(ErreurEval::FactorielleNegative);
    }
    let n = n
        .to_u64()
        .filter(|n| *n <= r.max_factorielle_entier)
        .ok_or(ErreurEval::FactorielleTropGrande(r.max_factorielle_entier))?;

    let pas = r.pas_controle_factorielle.max(1);
    let mut acc = BigInt::one();
    for i in 2..=n {
        acc *= i;
        if i % pas == 0 {
            controle_taille(&acc, r.max_chiffres_entier)?;
        }
    }
    Ok(acc)
}

fn binaire(op: Operateur, a: BigInt, b: BigInt, r: &Reglages) -> Result<BigInt, ErreurEval> {
    match op {
        Operateur::Plus => Ok(a + b),
        Operateur::Moins => Ok(a - b),
        Operateur::Fois => Ok(a * b),
        Operateur::Div => {
            if b.is_zero() {
                return Err(ErreurEval::DivisionParZero);
            }
            if !(&a % &b).is_zero() {
                return Err(ErreurEval::DivisionNonExacte);
            }
            Ok(a / b)
        }
        Operateur::Modulo => {
            if b.is_zero() {
                return Err(ErreurEval::DivisionParZero);
            }
            // reste tronqué : signe du dividende
            Ok(a % b)
        }
        Operateur::Puissance => puissance(&a, &b, r),
        Operateur::PlusUnaire | Operateur::MoinsUnaire | Operateur::Factorielle => {
            Err(ErreurEval::MalFormee)
        }
    }
}

/// Évalue un postfixe dans le domaine entier.
pub fn evaluer_entier(rpn: &[Postfixe], r: &Reglages) -> Result<BigInt, ErreurEval> {
    let mut st: Vec<BigInt> = Vec::with_capacity(rpn.len());

    for tok in rpn {
        let v = match tok {
            Postfixe::Num(raw) => litteral(raw, r)?,

            Postfixe::Const(nom) => return Err(ErreurEval::ConstanteEnModeEntier(nom.clone())),

            Postfixe::Func { nom, .. } => {
                return Err(ErreurEval::FonctionEnModeEntier(nom.clone()))
            }

            Postfixe::Op(op @ (Operateur::PlusUnaire | Operateur::MoinsUnaire)) => {
                let a = st.pop().ok_or(ErreurEval::Incomplete)?;
                if *op == Operateur::MoinsUnaire {
                    -a
                } else {
                    a
                }
            }

            Postfixe::Op(Operateur::Factorielle) => {
                let a = st.pop().ok_or(ErreurEval::Incomplete)?;
                factorielle(&a, r)?
            }

            Postfixe::Op(op) => {
                let b = st.pop().ok_or(ErreurEval::Incomplete)?;
                let a = st.pop().ok_or(ErreurEval::Incomplete)?;
                binaire(*op, a, b, r)?
            }
        };

        controle_taille(&v, r.max_chiffres_entier)?;
        st.push(v);
    }

    if st.len() != 1 {
        return Err(ErreurEval::MalFormee);
    }
    st.pop().ok_or(ErreurEval::MalFormee)
}
