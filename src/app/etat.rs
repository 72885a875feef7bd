//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : porter la session (le tampon) + ce que l’écran montre autour
//! (dernière sortie, erreur, démarche) et traduire chaque appui en opération de session.
//!
//! Contrats :
//! - Le tampon vit UNIQUEMENT dans `session` : l’écran ne le recopie pas.
//! - Échec d’évaluation : le tampon reste tel quel, on affiche la sentinelle + le motif.
//! - Actions déterministes, sans effet de bord caché.

use crate::noyau::{
    DemarcheNoyau, ErreurEval, Session, Sortie, ToucheAction, ToucheNumerique, ToucheOperateur,
};

#[derive(Clone, Default, Debug)]
pub struct Demarche {
    pub nettoye: String,
    pub jetons: String,
    pub resultat: String,
}

impl From<DemarcheNoyau> for Demarche {
    fn from(d: DemarcheNoyau) -> Self {
        Self {
            nettoye: d.nettoye,
            jetons: d.jetons,
            resultat: d.resultat,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub session: Session,

    // --- sorties ---
    pub sortie: String, // dernier "=" : nombre ou sentinelle
    pub erreur: String, // motif détaillé (si l’évaluation échoue)

    // --- démarche (panneau d’explication) ---
    pub demarche: Demarche,
}

impl AppCalc {
    /* ------------------------ Actions “boutons” ------------------------ */

    pub fn touche_numerique(&mut self, t: ToucheNumerique) {
        self.session.press_numeric(t);
    }

    pub fn touche_operateur(&mut self, t: ToucheOperateur) {
        self.session.press_operator(t);
    }

    pub fn touche_action(&mut self, t: ToucheAction) {
        if let Some(r) = self.session.press_action(t) {
            // Egal passe par evaluate() : on n’a pas la démarche ici
            self.depose(r.map(|v| (v, None)));
        } else if t == ToucheAction::Clear {
            self.clear_resultats();
        }
    }

    /// "=" avec démarche complète.
    pub fn egal(&mut self) {
        let r = self
            .session
            .evaluate_detaille()
            .map(|(v, d)| (v, Some(d)));
        self.depose(r);
    }

    /// Texte brut tapé au clavier, caractère par caractère.
    /// Chiffres / opérateurs / '.' passent par leurs touches, '=' évalue, le reste est ajouté tel quel.
    pub fn saisir_char(&mut self, c: char) {
        if let Some(t) = ToucheNumerique::depuis_char(c) {
            self.touche_numerique(t);
        } else if let Some(t) = ToucheOperateur::depuis_char(c) {
            self.touche_operateur(t);
        } else if c == '.' {
            self.touche_action(ToucheAction::Point);
        } else if c == '=' {
            self.egal();
        } else if !c.is_control() {
            let mut buf = [0u8; 4];
            self.session.saisir(c.encode_utf8(&mut buf));
        }
    }

    /// DEL : dernier caractère du tampon.
    pub fn backspace(&mut self) {
        self.session.backspace();
    }

    /// CLR : effacer sortie + erreur + démarche (sans toucher au tampon).
    pub fn clear_resultats(&mut self) {
        self.sortie.clear();
        self.erreur.clear();
        self.demarche = Demarche::default();
    }

    /* ------------------------ Résultats ------------------------ */

    fn depose(&mut self, r: Result<(f64, Option<DemarcheNoyau>), ErreurEval>) {
        match r {
            Ok((v, d)) => {
                self.sortie = Sortie::Nombre(v).to_string();
                self.erreur.clear();
                self.demarche = d.map(Demarche::from).unwrap_or_default();
            }
            Err(e) => {
                // On CONSERVE le tampon (la session ne l’a pas touché) ; démarche non fiable
                self.sortie = Sortie::Echec.to_string();
                self.erreur = e.to_string();
                self.demarche = Demarche::default();
            }
        }
    }
}
