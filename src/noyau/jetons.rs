// src/noyau/jetons.rs
//
// Tokenisation du texte nettoyé.
// À chaque position, on tente dans l’ordre :
//   1) décimal  : chiffres '.' chiffres   (12.5 reste UN jeton)
//   2) entier   : chiffres
//   3) ( ) + - * /
// Un caractère qui ne démarre aucune règle (un '.' isolé, le '.' final de "5.")
// est sauté, comme le ferait une recherche globale par regex.
//
// Pas de signe dans les nombres : "-4" donne [Op(Moins), Num(4)].
// Le moins unaire est résolu par l’évaluateur.

use super::erreur::ErreurEval;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
}

impl Operateur {
    /// Symbole texte -> opérateur.
    pub fn depuis_symbole(c: char) -> Result<Self, ErreurEval> {
        match c {
            '+' => Ok(Operateur::Plus),
            '-' => Ok(Operateur::Moins),
            '*' => Ok(Operateur::Fois),
            '/' => Ok(Operateur::Divise),
            _ => Err(ErreurEval::OperateurInvalide(c)),
        }
    }

    pub fn symbole(self) -> char {
        match self {
            Operateur::Plus => '+',
            Operateur::Moins => '-',
            Operateur::Fois => '*',
            Operateur::Divise => '/',
        }
    }

    /// Table de précédence (constante) : + - => 1 ; * / => 2.
    pub fn precedence(self) -> u8 {
        match self {
            Operateur::Plus | Operateur::Moins => 1,
            Operateur::Fois | Operateur::Divise => 2,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tok {
    Num(f64),
    Op(Operateur),
    LPar,
    RPar,
}

/// Tokenize une chaîne (normalement déjà nettoyée) en jetons.
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurEval> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        // Nombre : entier, ou décimal si '.' suivi d’au moins un chiffre
        if c.is_ascii_digit() {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
            if i + 1 < chars.len() && chars[i] == '.' && chars[i + 1].is_ascii_digit() {
                i += 1;
                while i < chars.len() && chars[i].is_ascii_digit() {
                    i += 1;
                }
            }
            let texte: String = chars[start..i].iter().collect();
            out.push(Tok::Num(texte.parse::<f64>()?));
            continue;
        }

        match c {
            '(' => out.push(Tok::LPar),
            ')' => out.push(Tok::RPar),
            '+' | '-' | '*' | '/' => out.push(Tok::Op(Operateur::depuis_symbole(c)?)),
            // aucune règle ne démarre ici : on saute
            _ => {}
        }
        i += 1;
    }

    if out.is_empty() {
        return Err(ErreurEval::AucunJeton);
    }
    Ok(out)
}

/// Format utilitaire (journal / “démarche”) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::new();
    for t in tokens {
        let s = match t {
            Tok::Num(v) => format!("{v}"),
            Tok::Op(op) => op.symbole().to_string(),
            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
