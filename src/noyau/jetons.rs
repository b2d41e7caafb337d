// src/noyau/jetons.rs

use super::erreur::ErreurLex;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tok {
    // Numéral brut, tel que scanné (zéros de tête, point, exposant conservés).
    // NOTE: l’interprétation est repoussée à l’évaluateur (dépend du domaine).
    Num(String),

    // Nom brut (casse d’origine). La résolution constante/fonction se fait au parse.
    Ident(String),

    // Un des symboles + - * / % ^ ! (× et ÷ déjà normalisés)
    Op(char),

    LPar,
    RPar,
    Virgule,
}

fn est_espace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

/// Normalise un glyphe opérateur : × -> *, ÷ -> /.
fn glyphe_operateur(c: char) -> Option<char> {
    match c {
        '+' | '-' | '*' | '/' | '%' | '^' | '!' => Some(c),
        '×' => Some('*'),
        '÷' => Some('/'),
        _ => None,
    }
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - numéraux : 12, 007, 1.5, .5, 2., 1e-3, 1.5E+7
/// - opérateurs + - * / % ^ ! (et × ÷)
/// - parenthèses ( ) et virgule
/// - identifiants [a-zA-Z_][a-zA-Z0-9_]* (casse conservée)
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurLex> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if est_espace(c) {
            i += 1;
            continue;
        }

        match c {
            '(' => {
                out.push(Tok::LPar);
                i += 1;
                continue;
            }
            ')' => {
                out.push(Tok::RPar);
                i += 1;
                continue;
            }
            ',' => {
                out.push(Tok::Virgule);
                i += 1;
                continue;
            }
            _ => {}
        }

        if let Some(op) = glyphe_operateur(c) {
            out.push(Tok::Op(op));
            i += 1;
            continue;
        }

        // Numéral : chiffres, au plus un point, exposant optionnel
        if c.is_ascii_digit() || c == '.' {
            let start = i;
            let mut vu_point = c == '.';
            i += 1;
            while i < chars.len() {
                let cc = chars[i];
                if cc.is_ascii_digit() {
                    i += 1;
                } else if cc == '.' && !vu_point {
                    vu_point = true;
                    i += 1;
                } else {
                    break;
                }
            }

            if !chars[start..i].iter().any(|ch| ch.is_ascii_digit()) {
                let raw: String = chars[start..i].iter().collect();
                return Err(ErreurLex::NombreInvalide(raw));
            }

            // exposant : si pas de chiffre après e[±], on recule avant le 'e'
            if i < chars.len() && (chars[i] == 'e' || chars[i] == 'E') {
                let pos_e = i;
                i += 1;
                if i < chars.len() && (chars[i] == '+' || chars[i] == '-') {
                    i += 1;
                }
                let debut_exp = i;
                while i < chars.len() && chars[i].is_ascii_digit() {
                    i += 1;
                }
                if debut_exp == i {
                    i = pos_e;
                }
            }

            let raw: String = chars[start..i].iter().collect();
            out.push(Tok::Num(raw));
            continue;
        }

        // Identifiants ASCII : [a-zA-Z_][a-zA-Z0-9_]*
        if c.is_ascii_alphabetic() || c == '_' {
            let start = i;
            i += 1;
            while i < chars.len() && (chars[i].is_ascii_alphanumeric() || chars[i] == '_') {
                i += 1;
            }
            let word: String = chars[start..i].iter().collect();
            out.push(Tok::Ident(word));
            continue;
        }

        return Err(ErreurLex::CaractereInconnu(c));
    }

    Ok(out)
}

/// Format utilitaire (démarche) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::with_capacity(tokens.len());
    for t in tokens {
        let s = match t {
            Tok::Num(raw) => raw.clone(),
            Tok::Ident(name) => name.clone(),
            Tok::Op(op) => op.to_string(),
            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
            Tok::Virgule => ",".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
