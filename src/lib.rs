//! Calculatrice d’expressions : entier exact ou flottant double précision.
//!
//! ```
//! use calculatrice_expr::{evaluer, Mode};
//!
//! let r = evaluer("2 ^ 3 ^ 2", Mode::Auto);
//! assert_eq!(r.texte(), "512");
//! ```

pub mod noyau;

pub use noyau::{
    evaluer, evaluer_avec, evaluer_avec_demarche, DemarcheNoyau, Domaine, ErreurCalcul, Mode,
    PolitiqueAuto, Reglages, Resultat, Valeur,
};
