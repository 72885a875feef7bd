//! Tests de session : le pavé tel qu’un utilisateur le tape.
//!
//! Chaque test part d’une session neuve et enchaîne des touches,
//! puis vérifie le tampon (display) et/ou le résultat de "=".

use super::session::{Session, Sortie};
use super::touches::{ToucheAction, ToucheNumerique, ToucheOperateur};

/// Tape une suite de touches décrite en texte : chiffres, + - * /, '.', 'C', '='.
/// Retourne la sortie du dernier '=' (s’il y en a un).
fn taper(s: &mut Session, touches: &str) -> Option<Sortie> {
    let mut derniere = None;
    for c in touches.chars() {
        if let Some(t) = ToucheNumerique::depuis_char(c) {
            s.press_numeric(t);
        } else if let Some(t) = ToucheOperateur::depuis_char(c) {
            s.press_operator(t);
        } else {
            let action = match c {
                '.' => ToucheAction::Point,
                'C' => ToucheAction::Clear,
                '=' => ToucheAction::Egal,
                _ => panic!("touche inconnue: {c:?}"),
            };
            if let Some(r) = s.press_action(action) {
                derniere = Some(Sortie::from(r));
            }
        }
    }
    derniere
}

fn resultat(touches: &str) -> (Option<Sortie>, String) {
    let mut s = Session::new();
    let sortie = taper(&mut s, touches);
    (sortie, s.display().to_string())
}

/* ------------------------ Tampon ------------------------ */

#[test]
fn vide_au_demarrage() {
    assert_eq!(Session::new().display(), "");
}

#[test]
fn vide_apres_clear() {
    let mut s = Session::new();
    taper(&mut s, "12+3");
    s.clear();
    assert_eq!(s.display(), "");

    taper(&mut s, "7C");
    assert_eq!(s.display(), "");
}

#[test]
fn un_chiffre() {
    assert_eq!(resultat("1").1, "1");
    assert_eq!(resultat("2").1, "2");
}

#[test]
fn chiffres_concatenes() {
    assert_eq!(resultat("98").1, "98");
    assert_eq!(resultat("000123").1, "000123");
}

#[test]
fn touches_mixtes_verbatim() {
    assert_eq!(resultat("9+8").1, "9+8");
    assert_eq!(resultat("5*-+").1, "5*-+");
}

/* ------------------------ Évaluation ------------------------ */

#[test]
fn quatre_plus_quatre() {
    assert_eq!(resultat("4+4="), (Some(Sortie::Nombre(8.0)), "8".to_string()));
}

#[test]
fn moins_unaire_en_tete() {
    assert_eq!(resultat("-4+4=").1, "0");
    assert_eq!(resultat("-4+-4=").1, "-8");
}

#[test]
fn precedence() {
    assert_eq!(resultat("-3+7*2=").1, "11");
    assert_eq!(resultat("-3*7+2=").1, "-19");
}

#[test]
fn operandes_multi_chiffres() {
    assert_eq!(resultat("44+44=").1, "88");
    assert_eq!(resultat("15-10=").1, "5");
}

#[test]
fn decimal_via_touche_point() {
    assert_eq!(resultat("1.5*2=").1, "3");
    assert_eq!(resultat("1/8=").1, "0.125");
}

/* ------------------------ Échecs : tampon intact ------------------------ */

#[test]
fn division_par_zero_garde_le_tampon() {
    assert_eq!(resultat("8/0="), (Some(Sortie::Echec), "8/0".to_string()));
}

#[test]
fn parentheses_desequilibrees_gardent_le_tampon() {
    for brut in ["(1+2", "1+2)"] {
        let mut s = Session::new();
        s.saisir(brut);
        assert_eq!(s.evaluate_sortie(), Sortie::Echec, "brut={brut:?}");
        assert_eq!(s.display(), brut);
    }
}

#[test]
fn tampon_vide() {
    assert_eq!(resultat("="), (Some(Sortie::Echec), String::new()));
}

/* ------------------------ Idempotence / chaînage ------------------------ */

#[test]
fn re_evaluer_un_resultat() {
    let mut s = Session::new();
    taper(&mut s, "4+4=");
    assert_eq!(s.evaluate(), Ok(8.0));
    assert_eq!(s.evaluate(), Ok(8.0));
    assert_eq!(s.display(), "8");

    let mut s = Session::new();
    taper(&mut s, "-3*7+2=");
    assert_eq!(s.evaluate(), Ok(-19.0));
    assert_eq!(s.display(), "-19");

    let mut s = Session::new();
    taper(&mut s, "1/3=");
    let tiers = 1.0 / 3.0;
    assert_eq!(s.evaluate(), Ok(tiers));
}

#[test]
fn chainage_apres_succes() {
    let mut s = Session::new();
    assert_eq!(taper(&mut s, "4+4="), Some(Sortie::Nombre(8.0)));
    assert_eq!(s.display(), "8");
    assert_eq!(taper(&mut s, "+2="), Some(Sortie::Nombre(10.0)));
    assert_eq!(s.display(), "10");
}

#[test]
fn chainage_depuis_negatif() {
    let mut s = Session::new();
    taper(&mut s, "-4+-4=");
    assert_eq!(taper(&mut s, "*-2="), Some(Sortie::Nombre(16.0)));
}

#[test]
fn correction_apres_echec() {
    let mut s = Session::new();
    assert_eq!(taper(&mut s, "8/0="), Some(Sortie::Echec));
    s.backspace();
    assert_eq!(taper(&mut s, "2="), Some(Sortie::Nombre(4.0)));
}
