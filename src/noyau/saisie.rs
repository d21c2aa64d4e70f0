//! Noyau — saisie (machine à états des touches)
//!
//! Une touche + l'affichage courant => l'affichage suivant. Fonction pure :
//! l'hôte garde l'affichage chez lui et le repasse à chaque appui.
//!
//! - "C" : retour à l'affichage initial "0"
//! - "⌫" : retire le dernier caractère (plancher "0", jamais vide)
//! - "=" : évalue l'affichage; en cas d'échec, texte d'erreur fixe
//! - le reste : remplace le "0" de repos, sinon concatène tel quel
//!
//! Aucune validation à la frappe (opérateurs doublés, points multiples,
//! symboles tapés sur le texte d'erreur...) : tout se juge au "=".

use super::eval::evaluer_expression;
use super::format::formater_resultat;

/// Affichage canonique au repos (l'affichage vide est interdit).
pub const AFFICHAGE_INITIAL: &str = "0";

/// Texte affiché quand l'évaluation échoue.
pub const AFFICHAGE_ERREUR: &str = "Erreur";

// Touches à rôle spécial; tout autre symbole se concatène tel quel.
pub const TOUCHE_EFFACER_TOUT: &str = "C";
pub const TOUCHE_RETOUR: &str = "⌫";
pub const TOUCHE_EGAL: &str = "=";

/// Transition d'une touche sur l'affichage courant.
pub fn traiter_touche(symbole: &str, affichage: &str) -> String {
    match symbole {
        TOUCHE_EFFACER_TOUT => AFFICHAGE_INITIAL.to_string(),

        TOUCHE_RETOUR => {
            let mut texte = affichage.to_string();
            texte.pop();
            if texte.is_empty() {
                AFFICHAGE_INITIAL.to_string()
            } else {
                texte
            }
        }

        TOUCHE_EGAL => match evaluer_expression(affichage) {
            Ok(valeur) => formater_resultat(valeur),
            Err(_) => AFFICHAGE_ERREUR.to_string(),
        },

        _ => {
            if affichage == AFFICHAGE_INITIAL {
                symbole.to_string()
            } else {
                format!("{affichage}{symbole}")
            }
        }
    }
}
