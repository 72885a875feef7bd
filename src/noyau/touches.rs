// src/noyau/touches.rs
//
// Touches du pavé : chiffres, opérateurs, actions.
// Chaque touche connaît son symbole texte ; le tampon n’en voit que ça.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToucheNumerique {
    Zero,
    Un,
    Deux,
    Trois,
    Quatre,
    Cinq,
    Six,
    Sept,
    Huit,
    Neuf,
}

impl ToucheNumerique {
    pub const ALL: [ToucheNumerique; 10] = [
        Self::Zero,
        Self::Un,
        Self::Deux,
        Self::Trois,
        Self::Quatre,
        Self::Cinq,
        Self::Six,
        Self::Sept,
        Self::Huit,
        Self::Neuf,
    ];

    pub fn symbole(self) -> char {
        match self {
            Self::Zero => '0',
            Self::Un => '1',
            Self::Deux => '2',
            Self::Trois => '3',
            Self::Quatre => '4',
            Self::Cinq => '5',
            Self::Six => '6',
            Self::Sept => '7',
            Self::Huit => '8',
            Self::Neuf => '9',
        }
    }

    pub fn depuis_char(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.symbole() == c)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToucheOperateur {
    Plus,
    Moins,
    Mult,
    Div,
}

impl ToucheOperateur {
    pub const ALL: [ToucheOperateur; 4] = [Self::Plus, Self::Moins, Self::Mult, Self::Div];

    pub fn symbole(self) -> char {
        match self {
            Self::Plus => '+',
            Self::Moins => '-',
            Self::Mult => '*',
            Self::Div => '/',
        }
    }

    pub fn depuis_char(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.symbole() == c)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToucheAction {
    /// C : vide le tampon
    Clear,
    /// '.' littéral
    Point,
    /// = : évalue
    Egal,
}

impl ToucheAction {
    /// Étiquette de bouton.
    pub fn symbole(self) -> char {
        match self {
            Self::Clear => 'C',
            Self::Point => '.',
            Self::Egal => '=',
        }
    }
}
