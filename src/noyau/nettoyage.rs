// src/noyau/nettoyage.rs
//
// Filtre permissif : on garde chiffres, '.', + - * / et parenthèses.
// Tout le reste disparaît sans erreur (donc "1a2" devient "12").
// Ce n’est PAS un validateur : la grammaire stricte vit dans jetons.rs.

use super::erreur::ErreurEval;

/// Caractère admis par le filtre ?
pub fn est_admis(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | '*' | '/' | '(' | ')')
}

/// Retire tout caractère hors alphabet. Échoue si rien ne reste.
pub fn nettoyer(brut: &str) -> Result<String, ErreurEval> {
    let propre: String = brut.chars().filter(|&c| est_admis(c)).collect();
    if propre.is_empty() {
        return Err(ErreurEval::ExpressionVide);
    }
    Ok(propre)
}
