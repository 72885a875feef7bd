//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler la session sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - longueur de saisie bornée
//! - budget temps global
//! - invariants clés :
//!   * jamais de panique
//!   * échec => tampon inchangé
//!   * succès => tampon == forme canonique du résultat, et ré-évaluer redonne la même valeur

use std::time::{Duration, Instant};

use super::erreur::ErreurEval;
use super::format::format_resultat;
use super::session::Session;
use super::touches::{ToucheAction, ToucheNumerique, ToucheOperateur};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération de frappes ------------------------ */

/// Une frappe : chiffre (souvent), opérateur, point, ou parenthèse brute.
fn frappe(rng: &mut Rng, s: &mut Session) {
    match rng.pick(10) {
        0..=4 => s.press_numeric(ToucheNumerique::ALL[rng.pick(10) as usize]),
        5..=7 => s.press_operator(ToucheOperateur::ALL[rng.pick(4) as usize]),
        8 => {
            s.press_action(ToucheAction::Point);
        }
        _ => s.saisir(if rng.pick(2) == 0 { "(" } else { ")" }),
    }
}

fn verifie_evaluation(s: &mut Session) -> Result<f64, ErreurEval> {
    let avant = s.display().to_string();
    let r = s.evaluate();
    match &r {
        Ok(v) => {
            assert!(v.is_finite(), "succès non fini pour {avant:?}");
            assert_eq!(s.display(), format_resultat(*v), "tampon après {avant:?}");

            // idempotence : le tampon résultat se relit à l’identique
            let mut relu = s.clone();
            assert_eq!(relu.evaluate(), Ok(*v), "ré-évaluation de {:?}", s.display());
        }
        Err(_) => assert_eq!(s.display(), avant, "tampon modifié sur échec"),
    }
    r
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_frappes_aleatoires() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..400 {
        budget(t0, max);

        let mut s = Session::new();
        let n = 1 + rng.pick(12);
        for _ in 0..n {
            frappe(&mut rng, &mut s);
        }

        match verifie_evaluation(&mut s) {
            Ok(_) => seen_ok += 1,
            Err(_) => seen_err += 1,
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 10, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 10, "trop peu d’échecs: {seen_err}");
}

#[test]
fn fuzz_safe_chainage() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    let mut rng = Rng::new(0xBADC0DE_u64);
    let mut s = Session::new();

    for _ in 0..200 {
        budget(t0, max);

        // opérateur + nombre, puis "=" : le tampon reste toujours évaluable ou intact
        s.press_operator(ToucheOperateur::ALL[rng.pick(4) as usize]);
        s.press_numeric(ToucheNumerique::ALL[1 + rng.pick(9) as usize]);
        if verifie_evaluation(&mut s).is_err() {
            s.clear();
            s.press_numeric(ToucheNumerique::Un);
        }
    }
}

#[test]
fn fuzz_safe_parentheses_profondes() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let mut s = Session::new();
    s.saisir(&"(".repeat(2000));
    s.saisir("1+1");
    s.saisir(&")".repeat(2000));
    budget(t0, max);

    assert_eq!(verifie_evaluation(&mut s), Ok(2.0));
}

#[test]
fn fuzz_safe_longue_somme() {
    let mut s = Session::new();
    for _ in 0..5000 {
        s.press_numeric(ToucheNumerique::Un);
        s.press_operator(ToucheOperateur::Plus);
    }
    s.press_numeric(ToucheNumerique::Zero);

    assert_eq!(verifie_evaluation(&mut s), Ok(5000.0));
}
