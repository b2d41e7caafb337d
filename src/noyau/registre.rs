//! Registre statique : opérateurs, fonctions, constantes.
//!
//! Aucune logique ici, seulement des tables consultées par le parseur et l’évaluateur.

/// Symbole d’opérateur tel qu’il apparaît en postfixe.
/// Unaire et binaire sont distincts : `-` binaire vs `u-` préfixe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Div,
    Modulo,
    Puissance,
    PlusUnaire,
    MoinsUnaire,
    Factorielle,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Assoc {
    Gauche,
    Droite,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Genre {
    Binaire,
    Prefixe,
    Postfixe,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InfoOp {
    pub precedence: u8,
    pub assoc: Assoc,
    pub genre: Genre,
}

impl Operateur {
    /// Opérateur binaire (ou postfixe) associé à un glyphe scanné.
    pub fn depuis_glyphe(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Plus),
            '-' => Some(Self::Moins),
            '*' => Some(Self::Fois),
            '/' => Some(Self::Div),
            '%' => Some(Self::Modulo),
            '^' => Some(Self::Puissance),
            '!' => Some(Self::Factorielle),
            _ => None,
        }
    }

    /// Variante préfixe de `+`/`-` ; les autres n’en ont pas.
    pub fn en_unaire(self) -> Option<Self> {
        match self {
            Self::Plus => Some(Self::PlusUnaire),
            Self::Moins => Some(Self::MoinsUnaire),
            _ => None,
        }
    }

    pub fn info(self) -> InfoOp {
        use Assoc::*;
        use Genre::*;

        let (precedence, assoc, genre) = match self {
            Self::PlusUnaire | Self::MoinsUnaire => (5, Droite, Prefixe),
            Self::Factorielle => (6, Gauche, Postfixe),
            Self::Puissance => (4, Droite, Binaire),
            Self::Fois | Self::Div | Self::Modulo => (3, Gauche, Binaire),
            Self::Plus | Self::Moins => (2, Gauche, Binaire),
        };
        InfoOp {
            precedence,
            assoc,
            genre,
        }
    }

    pub fn symbole(self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Moins => "-",
            Self::Fois => "*",
            Self::Div => "/",
            Self::Modulo => "%",
            Self::Puissance => "^",
            Self::PlusUnaire => "u+",
            Self::MoinsUnaire => "u-",
            Self::Factorielle => "!",
        }
    }
}

/// Bornes d’arité d’une fonction (inclusives).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Arite {
    pub min: usize,
    pub max: usize,
}

impl Arite {
    pub fn accepte(self, argc: usize) -> bool {
        self.min <= argc && argc <= self.max
    }
}

/// Table des fonctions : (nom en minuscules, arité, flottante seulement).
const FONCTIONS: &[(&str, Arite, bool)] = &[
    ("sin", Arite { min: 1, max: 1 }, true),
    ("cos", Arite { min: 1, max: 1 }, true),
    ("tan", Arite { min: 1, max: 1 }, true),
    ("asin", Arite { min: 1, max: 1 }, true),
    ("acos", Arite { min: 1, max: 1 }, true),
    ("atan", Arite { min: 1, max: 1 }, true),
    ("sqrt", Arite { min: 1, max: 1 }, true),
    ("abs", Arite { min: 1, max: 1 }, false),
    ("ln", Arite { min: 1, max: 1 }, true),
    // log(x) base 10 ; log(x, base)
    ("log", Arite { min: 1, max: 2 }, true),
    ("exp", Arite { min: 1, max: 1 }, true),
    ("pow", Arite { min: 2, max: 2 }, false),
    ("min", Arite { min: 1, max: 64 }, false),
    ("max", Arite { min: 1, max: 64 }, false),
];

const CONSTANTES: &[(&str, f64)] = &[("pi", std::f64::consts::PI), ("e", std::f64::consts::E)];

/// Arité d’une fonction connue (`nom` déjà en minuscules).
pub fn arite_fonction(nom: &str) -> Option<Arite> {
    FONCTIONS
        .iter()
        .find(|(n, _, _)| *n == nom)
        .map(|(_, a, _)| *a)
}

/// Fonctions qui n’ont de sens qu’en flottant (sélection du domaine en mode auto).
pub fn est_fonction_flottante(nom: &str) -> bool {
    FONCTIONS.iter().any(|(n, _, f)| *n == nom && *f)
}

pub fn valeur_constante(nom: &str) -> Option<f64> {
    CONSTANTES.iter().find(|(n, _)| *n == nom).map(|(_, v)| *v)
}
