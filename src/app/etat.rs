//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l’état de la calculatrice (entrée, mode, résultat, erreur,
//! avertissements, démarche) et offrir des opérations simples (C/CLR/AC)
//! sans logique d’affichage.
//!
//! Contrats :
//! - Aucune évaluation ici (pas de noyau, pas de parsing).
//! - Actions déterministes, sans effet de bord caché.

use calculatrice_expr::{DemarcheNoyau, Mode, Resultat};

#[derive(Clone, Default, Debug)]
pub struct Demarche {
    pub jetons: String,
    pub rpn: String,
    pub domaine: String,
}

impl From<DemarcheNoyau> for Demarche {
    fn from(d: DemarcheNoyau) -> Self {
        Self {
            jetons: d.jetons,
            rpn: d.rpn,
            domaine: d.domaine,
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,
    pub mode: Mode,

    // --- sorties ---
    pub texte: String,                // valeur formatée (dernier succès)
    pub domaine: String,              // "integer" / "float"
    pub erreur: String,               // message d’erreur (si l’évaluation échoue)
    pub avertissements: Vec<String>,  // non fatals, même en cas d’erreur

    // --- démarche (panneau d’explication) ---
    pub demarche: Demarche,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            entree: String::new(),
            mode: Mode::Auto,
            texte: String::new(),
            domaine: String::new(),
            erreur: String::new(),
            avertissements: Vec::new(),
            demarche: Demarche::default(),
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrée + résultats + mode par défaut).
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.clear_resultats();
        self.mode = Mode::Auto;
        self.focus_entree = true;
    }

    /// C : effacer seulement l’entrée (sans toucher aux résultats).
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// CLR : effacer résultat + erreur + avertissements + démarche (sans toucher à l’entrée).
    pub fn clear_resultats(&mut self) {
        self.texte.clear();
        self.domaine.clear();
        self.erreur.clear();
        self.avertissements.clear();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.focus_entree = true;
    }

    /// Dépose un résultat du noyau.
    ///
    /// Choix UX : sur un échec, on CONSERVE le dernier texte (pas d’écran vidé sur une faute),
    /// mais la démarche reflète la tentative en cours.
    pub fn set_resultat(&mut self, resultat: Resultat, demarche: Demarche) {
        self.demarche = demarche;
        self.avertissements = resultat.avertissements().to_vec();

        match resultat {
            Resultat::Succes {
                domaine, texte, ..
            } => {
                self.erreur.clear();
                self.texte = texte;
                self.domaine = domaine.to_string();
            }
            Resultat::Echec { message, .. } => {
                self.erreur = message;
                self.domaine.clear();
            }
        }

        self.focus_entree = true;
    }
}
