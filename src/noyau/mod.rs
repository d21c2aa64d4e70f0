//! Noyau de calcul (pur, sans UI)
//!
//! Organisation interne :
//! - erreur.rs  : ErreurEval (kind unique, réduction impossible)
//! - jetons.rs  : Tok / Operateur + tokenisation
//! - eval.rs    : réduction à deux piles (précédence)
//! - format.rs  : rendu décimal des résultats
//! - saisie.rs  : machine à états des touches (C / ⌫ / = / concat)

pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod saisie;

#[cfg(test)]
mod tests_proprietes;


// API publique minimale
pub use erreur::ErreurEval;
pub use eval::evaluer_expression;
pub use saisie::traiter_touche;
