// src/noyau/format.rs
//
// Forme texte canonique d’un résultat (ce qui retourne dans le tampon).
// Contrainte : le texte doit se relire tel quel par nettoyage + jetons,
// donc jamais de notation exponentielle ni de "-0".

/// f64 -> texte canonique.
/// - entier : sans partie décimale ("8", "-19")
/// - sinon  : plus courte écriture qui se relit à l’identique ("0.30000000000000004")
pub fn format_resultat(v: f64) -> String {
    // -0.0 == 0.0 : on écrase le signe
    if v == 0.0 {
        return "0".to_string();
    }
    // Display de f64 : pas d’exposant, aller-retour exact
    format!("{v}")
}
