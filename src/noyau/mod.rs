//! Noyau de la calculatrice à pavé
//!
//! Organisation interne :
//! - touches.rs   : touches du pavé (chiffres, opérateurs, actions)
//! - session.rs   : tampon de saisie + évaluation sur demande
//! - nettoyage.rs : filtre permissif de l’alphabet
//! - jetons.rs    : tokenisation + table de précédence
//! - eval.rs      : double pile (valeurs / opérateurs) + pipeline complet
//! - format.rs    : forme texte canonique d’un résultat
//! - erreur.rs    : erreurs typées

pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod nettoyage;
pub mod session;
pub mod touches;

#[cfg(test)]
mod tests_session;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::ErreurEval;
pub use eval::DemarcheNoyau;
pub use session::{Session, Sortie};
pub use touches::{ToucheAction, ToucheNumerique, ToucheOperateur};
