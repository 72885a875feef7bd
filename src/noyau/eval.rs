//! Noyau — évaluation (pipeline réel)
//!
//! nettoyage -> jetons -> double pile (valeurs / opérateurs) -> f64
//!
//! Pas d’AST : les opérateurs sont appliqués au fil du scan (shunting-yard
//! évalué directement, opérateurs binaires associatifs à gauche + parenthèses).
//! Chaque appel travaille sur ses propres piles, rien n’est partagé.

use num_traits::Zero;

use super::erreur::ErreurEval;
use super::format::format_resultat;
use super::jetons::{format_tokens, tokenize, Operateur, Tok};
use super::nettoyage::nettoyer;

#[derive(Default, Clone, Debug, PartialEq)]
pub struct DemarcheNoyau {
    pub nettoye: String,
    pub jetons: String,
    pub resultat: String,
}

/// Élément de la pile des opérateurs : un opérateur ou une '(' en attente.
#[derive(Clone, Copy, Debug)]
enum Pile {
    Op(Operateur),
    LPar,
}

/// API publique : évalue un texte brut (tampon) et retourne la valeur + la démarche.
pub fn eval_expression(brut: &str) -> Result<(f64, DemarcheNoyau), ErreurEval> {
    // 1) Nettoyage
    let nettoye = nettoyer(brut)?;

    // 2) Jetons
    let jetons = tokenize(&nettoye)?;
    let jetons_txt = format_tokens(&jetons);
    log::debug!("nettoyé={nettoye:?} jetons=[{jetons_txt}]");

    // 3) Double pile
    let valeur = evaluer_jetons(&jetons)?;
    if !valeur.is_finite() {
        return Err(ErreurEval::ResultatNonFini);
    }
    log::debug!("résultat={valeur}");

    let d = DemarcheNoyau {
        nettoye,
        jetons: jetons_txt,
        resultat: format_resultat(valeur),
    };
    Ok((valeur, d))
}

/// Évalue une suite de jetons avec deux piles.
pub fn evaluer_jetons(jetons: &[Tok]) -> Result<f64, ErreurEval> {
    let mut valeurs: Vec<f64> = Vec::new();
    let mut ops: Vec<Pile> = Vec::new();

    let mut i = 0;
    while i < jetons.len() {
        match jetons[i] {
            Tok::Num(v) => valeurs.push(v),

            // moins unaire : en tête, après un opérateur ou après '('
            Tok::Op(Operateur::Moins) if position_unaire(jetons, i) => match jetons.get(i + 1) {
                Some(Tok::Num(v)) => {
                    valeurs.push(-v);
                    i += 1; // le nombre est consommé avec le signe
                }
                _ => return Err(ErreurEval::MoinsUnaireInvalide),
            },

            Tok::Op(op) => {
                // '>=' : associativité à gauche ; on ne traverse jamais une '('
                while let Some(Pile::Op(top)) = ops.last().copied() {
                    if top.precedence() < op.precedence() {
                        break;
                    }
                    ops.pop();
                    reduire(&mut valeurs, top)?;
                }
                ops.push(Pile::Op(op));
            }

            Tok::LPar => ops.push(Pile::LPar),

            Tok::RPar => loop {
                match ops.pop() {
                    Some(Pile::LPar) => break,
                    Some(Pile::Op(op)) => reduire(&mut valeurs, op)?,
                    None => return Err(ErreurEval::ParenthesesDesequilibrees),
                }
            },
        }
        i += 1;
    }

    // vide la pile ops
    while let Some(p) = ops.pop() {
        match p {
            Pile::Op(op) => reduire(&mut valeurs, op)?,
            Pile::LPar => return Err(ErreurEval::ParenthesesDesequilibrees),
        }
    }

    if valeurs.len() != 1 {
        return Err(ErreurEval::ExpressionMalformee);
    }
    valeurs.pop().ok_or(ErreurEval::ExpressionMalformee)
}

/// Applique un opérateur binaire.
pub fn appliquer(gauche: f64, op: Operateur, droite: f64) -> Result<f64, ErreurEval> {
    match op {
        Operateur::Plus => Ok(gauche + droite),
        Operateur::Moins => Ok(gauche - droite),
        Operateur::Fois => Ok(gauche * droite),
        Operateur::Divise => {
            if droite.is_zero() {
                return Err(ErreurEval::DivisionParZero);
            }
            Ok(gauche / droite)
        }
    }
}

/// Un '-' est un signe s’il est premier, ou suit un opérateur ou une '('.
fn position_unaire(jetons: &[Tok], i: usize) -> bool {
    i == 0 || matches!(jetons[i - 1], Tok::Op(_) | Tok::LPar)
}

/// Dépile droite puis gauche, applique, rempile.
fn reduire(valeurs: &mut Vec<f64>, op: Operateur) -> Result<(), ErreurEval> {
    let droite = valeurs.pop().ok_or(ErreurEval::ExpressionMalformee)?;
    let gauche = valeurs.pop().ok_or(ErreurEval::ExpressionMalformee)?;
    valeurs.push(appliquer(gauche, op, droite)?);
    Ok(())
}
