//! src/app/etat.rs
//!
//! État UI (sans vue) : l'hôte de la calculatrice.
//!
//! Rôle : posséder l'affichage (le texte que la vue montre) et l'historique,
//! et router chaque appui de touche vers le noyau. Aucune logique de rendu ici.
//!
//! Contrats :
//! - Le noyau ne garde aucun état : l'affichage vit ici et repasse en
//!   argument à chaque appui.
//! - Seul "=" est traité à part : en cas de succès, la ligne
//!   "expression = résultat" est figée dans l'historique AVANT de
//!   remplacer l'affichage.
//! - Garde-fou : l'historique est borné (les lignes les plus anciennes
//!   sortent en premier).

use crate::noyau::saisie::{AFFICHAGE_ERREUR, AFFICHAGE_INITIAL, TOUCHE_EGAL};
use crate::noyau::traiter_touche;

/// Garde-fou : nombre maximal de lignes d'historique conservées.
const HISTORIQUE_MAX: usize = 200;

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- affichage courant (expression en cours ou dernier résultat) ---
    pub affichage: String,

    // --- lignes "expression = résultat", du plus ancien au plus récent ---
    pub historique: Vec<String>,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            affichage: AFFICHAGE_INITIAL.to_string(),
            historique: Vec::new(),
        }
    }
}

impl AppCalc {
    /* ------------------------ Routage des touches ------------------------ */

    /// Route un appui de touche vers le noyau et commet le nouvel affichage.
    pub fn appui_touche(&mut self, symbole: &str) {
        let suivant = traiter_touche(symbole, &self.affichage);

        if symbole == TOUCHE_EGAL {
            if suivant == AFFICHAGE_ERREUR {
                log::warn!("évaluation échouée: {:?}", self.affichage);
            } else {
                log::debug!("évaluation: {} = {}", self.affichage, suivant);
                self.pousser_historique(format!("{} = {}", self.affichage, suivant));
            }
        }

        self.affichage = suivant;
    }

    /* ------------------------ Historique ------------------------ */

    /// Vide l'historique (l'affichage courant n'est pas touché).
    pub fn vider_historique(&mut self) {
        self.historique.clear();
    }

    fn pousser_historique(&mut self, ligne: String) {
        self.historique.push(ligne);

        // garde-fou : on borne (les plus anciennes lignes sortent)
        if self.historique.len() > HISTORIQUE_MAX {
            let exces = self.historique.len() - HISTORIQUE_MAX;
            self.historique.drain(..exces);
        }
    }
}
