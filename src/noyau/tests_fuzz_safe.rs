//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - on accepte certaines erreurs attendues (division par zéro, reste non nul, etc.)
//! - invariant clé : jamais de panique, et un Succes a toujours un texte non vide

use std::time::{Duration, Instant};

use super::{evaluer, Mode, Resultat};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Helpers fuzz ------------------------ */

fn is_erreur_attendue(msg: &str) -> bool {
    // Liste blanche : erreurs *normales* pour un fuzz arithmétique.
    msg.contains("division by zero")
        || msg.contains("remainder")
        || msg.contains("negative exponent")
        || msg.contains("factorial")
        || msg.contains("not finite")
        || msg.contains("too large")
}

fn check_resultat(expr: &str, r: &Resultat, ok: &mut usize, err: &mut usize) {
    match r {
        Resultat::Succes { texte, .. } => {
            assert!(!texte.is_empty(), "texte vide pour {expr:?}");
            assert_ne!(texte, "-0", "zéro négatif affiché pour {expr:?}");
            *ok += 1;
        }
        Resultat::Echec { message, .. } => {
            assert!(
                is_erreur_attendue(message),
                "erreur non attendue: expr={expr:?} err={message}"
            );
            *err += 1;
        }
    }
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

fn gen_nombre(rng: &mut Rng, decimaux: bool) -> String {
    // petits nombres, zéro compris (utile pour tester les divisions)
    let a = rng.pick(10);
    if decimaux && rng.coin() {
        format!("{a}.{}", rng.pick(100))
    } else {
        format!("{a}")
    }
}

fn gen_atom(rng: &mut Rng, decimaux: bool) -> String {
    match rng.pick(6) {
        0 if decimaux => "pi".to_string(),
        1 => format!("{}!", rng.pick(8)),
        2 => format!("-{}", gen_nombre(rng, decimaux)),
        _ => gen_nombre(rng, decimaux),
    }
}

fn gen_expr(rng: &mut Rng, depth: usize, decimaux: bool) -> String {
    if depth == 0 {
        return gen_atom(rng, decimaux);
    }

    let a = gen_expr(rng, depth - 1, decimaux);
    let b = gen_expr(rng, depth - 1, decimaux);
    match rng.pick(10) {
        0 => gen_atom(rng, decimaux),
        1 => format!("({a}+{b})"),
        2 => format!("({a}-{b})"),
        3 => format!("({a}*{b})"),
        4 => format!("({a}/{b})"),
        5 => format!("({a}%{b})"),
        // exposant borné pour rester dans le plafond
        6 => format!("({a})^{}", rng.pick(4)),
        7 if decimaux => format!("max({a}, {b})"),
        // diviseur nul une fois sur deux : garantit des erreurs attendues
        8 => format!("({a}/{})", rng.pick(2)),
        _ => format!("abs({a})"),
    }
}

/* ------------------------ Helper somme balancée anti pile ------------------------ */

fn somme_balancee(terme: &str, n: usize) -> String {
    let mut items: Vec<String> = (0..n).map(|_| terme.to_string()).collect();
    while items.len() > 1 {
        let mut next = Vec::new();
        let mut i = 0;
        while i < items.len() {
            if i + 1 < items.len() {
                next.push(format!("({}+{})", items[i], items[i + 1]));
                i += 2;
            } else {
                next.push(items[i].clone());
                i += 1;
            }
        }
        items = next;
    }
    items.pop().unwrap_or_else(|| "0".to_string())
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_flottant_determinisme() {
    let t0 = Instant::now();
    let max = Duration::from_secs(5);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..150 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 4, true);
        let r1 = evaluer(&expr, Mode::Flottant);
        // même entrée => même sortie
        assert_eq!(r1, evaluer(&expr, Mode::Flottant), "expr={expr:?}");
        check_resultat(&expr, &r1, &mut seen_ok, &mut seen_err);
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 10, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 0, "aucune erreur vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_entier_sans_fonction() {
    let t0 = Instant::now();
    let max = Duration::from_secs(5);

    let mut rng = Rng::new(0xBADC0DE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..150 {
        budget(t0, max);

        // abs() est refusé en entier : on le retire du générateur ici
        let expr = gen_expr(&mut rng, 4, false).replace("abs", "");
        let r = evaluer(&expr, Mode::Entier);
        check_resultat(&expr, &r, &mut seen_ok, &mut seen_err);
    }

    assert!(seen_ok > 10, "trop peu de succès: {seen_ok}");
}

#[test]
fn fuzz_safe_entier_et_flottant_concordent() {
    // Sans division ni modulo, un calcul entier petit est exact dans les deux domaines.
    let mut rng = Rng::new(0x5EED_u64);

    for _ in 0..100 {
        let a = rng.pick(1000);
        let b = rng.pick(1000);
        let c = rng.pick(20);
        let expr = format!("{a} * {b} - {c}^3 + -{a}");

        let entier = evaluer(&expr, Mode::Entier);
        let flottant = evaluer(&expr, Mode::Flottant);
        assert_eq!(entier.texte(), flottant.texte(), "expr={expr:?}");
    }
}

#[test]
fn fuzz_safe_somme_balancee_anti_pile() {
    let t0 = Instant::now();
    let max = Duration::from_secs(2);

    let expr = somme_balancee("1/2", 800);
    let r = evaluer(&expr, Mode::Flottant);
    budget(t0, max);

    // 800*(1/2) = 400
    assert_eq!(r.texte(), "400");
}

#[test]
fn fuzz_safe_texte_arbitraire_sans_panique() {
    let alphabet: Vec<char> = "0123456789.+-*/%^!(),eEpisnx _×÷#".chars().collect();
    let mut rng = Rng::new(0xFEED_u64);

    for _ in 0..500 {
        let n = 1 + rng.pick(16) as usize;
        let expr: String = (0..n)
            .map(|_| alphabet[rng.pick(alphabet.len() as u32) as usize])
            .collect();
        for mode in Mode::TOUS {
            // seul l’absence de panique compte ici
            let r = evaluer(&expr, mode);
            if let Resultat::Echec { message, .. } = &r {
                assert!(!message.is_empty(), "message vide pour {expr:?}");
            }
        }
    }
}
