// src/noyau/erreur.rs

use thiserror::Error;

/// Erreur d'évaluation du noyau.
///
/// Un seul kind : la structure opérateurs/opérandes ne se réduit pas
/// (opérande manquant, opérateur orphelin, entrée vide, caractère hors
/// vocabulaire). La division par zéro n'est PAS une erreur : elle produit
/// NaN (IEEE-754) qui se propage comme une valeur ordinaire.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ErreurEval {
    /// Réduction impossible : une pile est vide au mauvais moment.
    #[error("expression malformée")]
    ExpressionMalformee,
}
