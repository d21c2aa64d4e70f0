// src/noyau/jetons.rs

use super::erreur::ErreurEval;

/// Jeton produit par la tokenisation (transitoire, jamais stocké).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tok {
    Num(f64),
    Op(Operateur),
}

/// Opérateur binaire reconnu (vocabulaire fermé).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Minus,
    Star,
    Slash,
}

impl Operateur {
    /// Table char -> opérateur. Ajouter un opérateur = une ligne ici,
    /// plus sa précédence et son application ci-dessous.
    pub fn depuis_char(c: char) -> Option<Operateur> {
        match c {
            '+' => Some(Operateur::Plus),
            '-' => Some(Operateur::Minus),
            '*' => Some(Operateur::Star),
            '/' => Some(Operateur::Slash),
            _ => None,
        }
    }

    /// Précédence : `* /` (2) avant `+ -` (1), associativité gauche partout.
    pub fn precedence(self) -> u8 {
        match self {
            Operateur::Plus | Operateur::Minus => 1,
            Operateur::Star | Operateur::Slash => 2,
        }
    }

    /// Applique l'opérateur à (gauche, droite).
    /// Division par 0.0 : NaN, jamais une erreur.
    pub fn appliquer(self, gauche: f64, droite: f64) -> f64 {
        match self {
            Operateur::Plus => gauche + droite,
            Operateur::Minus => gauche - droite,
            Operateur::Star => gauche * droite,
            Operateur::Slash => {
                if droite != 0.0 {
                    gauche / droite
                } else {
                    f64::NAN
                }
            }
        }
    }
}

/// Tokenise une expression plate en jetons.
///
/// Vocabulaire accepté :
/// - nombres décimaux : chiffres, puis au plus un '.' suivi de chiffres
/// - opérateurs `+ - * /`
/// - parenthèses `( )` : admises mais SANS effet (aucun jeton émis)
/// - '.' isolé (non précédé d'un chiffre) : ignoré lui aussi
///
/// Tout autre caractère (espace compris) => ExpressionMalformee.
pub fn tokenize(texte: &str) -> Result<Vec<Tok>, ErreurEval> {
    let chars: Vec<char> = texte.chars().collect();
    let mut jetons: Vec<Tok> = Vec::new();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        // Nombre : partie entière gloutonne, puis fraction optionnelle.
        // Accumulation chiffre à chiffre : valeur = valeur*10 + chiffre,
        // puis valeur += chiffre*place avec place = 0.1, 0.01, ...
        // Chaque étape arrondit en f64 (on ne re-parse pas la sous-chaîne).
        if c.is_ascii_digit() {
            let mut valeur = 0.0_f64;
            while i < chars.len() && chars[i].is_ascii_digit() {
                valeur = valeur * 10.0 + f64::from(chars[i] as u8 - b'0');
                i += 1;
            }
            if i < chars.len() && chars[i] == '.' {
                i += 1;
                let mut place = 0.1_f64;
                while i < chars.len() && chars[i].is_ascii_digit() {
                    valeur += f64::from(chars[i] as u8 - b'0') * place;
                    place *= 0.1;
                    i += 1;
                }
            }
            jetons.push(Tok::Num(valeur));
            continue;
        }

        // Opérateurs (table fermée)
        if let Some(operateur) = Operateur::depuis_char(c) {
            jetons.push(Tok::Op(operateur));
            i += 1;
            continue;
        }

        // Parenthèses : aucune incidence sur l'évaluation (pas de regroupement).
        if c == '(' || c == ')' {
            i += 1;
            continue;
        }

        // Point isolé : même traitement que les parenthèses.
        if c == '.' {
            i += 1;
            continue;
        }

        return Err(ErreurEval::ExpressionMalformee);
    }

    Ok(jetons)
}
