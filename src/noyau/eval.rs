//! Noyau — évaluation (deux piles, précédence)
//!
//! tokenize -> réduction par précédence -> f64
//!
//! - un nombre : empilé sur la pile d'opérandes
//! - un opérateur : on réduit tant que le sommet de la pile d'opérateurs
//!   a une précédence >= à l'entrant (associativité gauche), puis on empile
//! - fin de lecture : on vide la pile d'opérateurs de la même façon
//!
//! Les deux piles vivent le temps d'un appel : aucun état entre appels.

use super::erreur::ErreurEval;
use super::jetons::{tokenize, Operateur, Tok};

/// API publique : évalue une expression plate (`12+3*4`, `1.5/2`, ...).
///
/// - précédence standard (`* /` avant `+ -`), gauche à droite à égalité
/// - division par zéro : NaN propagé, jamais une erreur
/// - structure irréductible (opérande manquant, opérateur orphelin,
///   entrée vide, caractère hors vocabulaire) : ExpressionMalformee
pub fn evaluer_expression(expression: &str) -> Result<f64, ErreurEval> {
    let jetons = tokenize(expression)?;

    let mut operandes: Vec<f64> = Vec::new();
    let mut operateurs: Vec<Operateur> = Vec::new();

    for jeton in jetons {
        match jeton {
            Tok::Num(valeur) => operandes.push(valeur),

            Tok::Op(entrant) => {
                // réduit d'abord tout ce qui est au moins aussi prioritaire
                while let Some(sommet) = operateurs.last().copied() {
                    if sommet.precedence() < entrant.precedence() {
                        break;
                    }
                    reduire(&mut operandes, &mut operateurs)?;
                }
                operateurs.push(entrant);
            }
        }
    }

    while !operateurs.is_empty() {
        reduire(&mut operandes, &mut operateurs)?;
    }

    // Le résultat est le sommet de pile. S'il reste des opérandes en dessous
    // (nombres juxtaposés sans opérateur), ils sont ignorés.
    operandes.pop().ok_or(ErreurEval::ExpressionMalformee)
}

/// Une étape de réduction : dépile un opérateur et deux opérandes
/// (premier dépilé = côté droit), empile le résultat.
fn reduire(operandes: &mut Vec<f64>, operateurs: &mut Vec<Operateur>) -> Result<(), ErreurEval> {
    let operateur = operateurs.pop().ok_or(ErreurEval::ExpressionMalformee)?;
    let droite = operandes.pop().ok_or(ErreurEval::ExpressionMalformee)?;
    let gauche = operandes.pop().ok_or(ErreurEval::ExpressionMalformee)?;
    operandes.push(operateur.appliquer(gauche, droite));
    Ok(())
}
