//! Erreurs du noyau.
//!
//! Une seule énumération pour tout le pipeline nettoyage -> jetons -> évaluation.
//! La session la renvoie telle quelle (`evaluate`) ou la replie en sentinelle
//! (`evaluate_sortie`) pour le contrat « nombre ou échec ».

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ErreurEval {
    /// Rien ne reste après nettoyage.
    #[error("expression vide")]
    ExpressionVide,

    /// Le texte nettoyé ne contient aucun jeton reconnu (ex: ".").
    #[error("aucun jeton reconnu")]
    AucunJeton,

    /// Moins unaire qui n’est pas suivi d’un nombre (ex: "-(2+3)", "5*-").
    #[error("moins unaire invalide")]
    MoinsUnaireInvalide,

    #[error("parenthèses non équilibrées")]
    ParenthesesDesequilibrees,

    /// Piles incohérentes en fin de scan (opérande manquant, valeurs en trop).
    #[error("expression invalide")]
    ExpressionMalformee,

    #[error("division par zéro")]
    DivisionParZero,

    #[error("opérateur invalide: '{0}'")]
    OperateurInvalide(char),

    /// Littéral numérique illisible en f64.
    #[error("nombre invalide: {0}")]
    NombreInvalide(#[from] std::num::ParseFloatError),

    /// Résultat infini ou NaN (dépassement f64).
    #[error("résultat hors domaine")]
    ResultatNonFini,
}
