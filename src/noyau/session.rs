//! Session : le tampon de saisie.
//!
//! Rôle : accumuler le texte tapé (touches, clavier) SANS validation, puis
//! déléguer l’évaluation au pipeline (nettoyage -> jetons -> double pile).
//!
//! Contrats :
//! - Succès : le tampon est remplacé par la forme canonique du résultat
//!   (chaînage : "4+4=" puis "+2=" donne 10).
//! - Échec  : le tampon est laissé intact, l’utilisateur peut corriger.
//! - Aucun verrou : une session = un appelant à la fois.

use std::fmt;

use super::erreur::ErreurEval;
use super::eval::{eval_expression, DemarcheNoyau};
use super::format::format_resultat;
use super::touches::{ToucheAction, ToucheNumerique, ToucheOperateur};

/// Sentinelle unique renvoyée pour toute erreur au contrat « nombre ou échec ».
pub const SENTINELLE_ECHEC: &str = "SYSTEM EXPLODE!";

/// Sortie repliée : un nombre, ou la sentinelle (sans détail d’erreur).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Sortie {
    Nombre(f64),
    Echec,
}

impl From<Result<f64, ErreurEval>> for Sortie {
    fn from(r: Result<f64, ErreurEval>) -> Self {
        match r {
            Ok(v) => Sortie::Nombre(v),
            Err(_) => Sortie::Echec,
        }
    }
}

impl fmt::Display for Sortie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sortie::Nombre(v) => f.write_str(&format_resultat(*v)),
            Sortie::Echec => f.write_str(SENTINELLE_ECHEC),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Session {
    tampon: String,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /* ------------------------ Touches ------------------------ */

    pub fn press_numeric(&mut self, touche: ToucheNumerique) {
        self.tampon.push(touche.symbole());
    }

    /// Pas de contrôle sur le caractère précédent : "5*-3" est légal à taper.
    pub fn press_operator(&mut self, touche: ToucheOperateur) {
        self.tampon.push(touche.symbole());
    }

    /// Retourne le résultat seulement pour `Egal`.
    pub fn press_action(&mut self, touche: ToucheAction) -> Option<Result<f64, ErreurEval>> {
        match touche {
            ToucheAction::Clear => {
                self.clear();
                None
            }
            ToucheAction::Point => {
                self.tampon.push('.');
                None
            }
            ToucheAction::Egal => Some(self.evaluate()),
        }
    }

    /// Texte brut (clavier, parenthèses, ligne de commande), ajouté tel quel.
    pub fn saisir(&mut self, texte: &str) {
        self.tampon.push_str(texte);
    }

    /// DEL : retire le dernier caractère.
    pub fn backspace(&mut self) {
        self.tampon.pop();
    }

    /* ------------------------ Lecture / remise à zéro ------------------------ */

    pub fn display(&self) -> &str {
        &self.tampon
    }

    pub fn clear(&mut self) {
        self.tampon.clear();
    }

    /* ------------------------ Évaluation ------------------------ */

    pub fn evaluate(&mut self) -> Result<f64, ErreurEval> {
        self.evaluate_detaille().map(|(v, _d)| v)
    }

    /// Contrat replié : nombre ou sentinelle.
    pub fn evaluate_sortie(&mut self) -> Sortie {
        self.evaluate().into()
    }

    /// Comme `evaluate`, avec la démarche (nettoyé, jetons, résultat).
    pub fn evaluate_detaille(&mut self) -> Result<(f64, DemarcheNoyau), ErreurEval> {
        match eval_expression(&self.tampon) {
            Ok((v, d)) => {
                self.tampon = d.resultat.clone();
                Ok((v, d))
            }
            Err(e) => {
                log::warn!("évaluation échouée ({e}), tampon conservé: {:?}", self.tampon);
                Err(e)
            }
        }
    }
}
