// src/noyau/format.rs

/* ------------------------ Rendu décimal ------------------------ */

/// Rendu d'un résultat pour l'affichage.
///
/// - valeur finie à partie fractionnaire nulle : exactement une décimale
///   ("15.0", "-2.0"), jamais de notation exponentielle
/// - autre valeur finie : plus courte forme décimale qui relit la même
///   valeur ("3.75")
/// - non finis : "NaN" tel quel, infinis en toutes lettres ("Infinity",
///   "-Infinity"), jamais l'abréviation "inf"
pub fn formater_resultat(valeur: f64) -> String {
    if valeur.is_nan() {
        return "NaN".to_string();
    }
    if valeur.is_infinite() {
        return if valeur.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        };
    }
    if valeur.fract() == 0.0 {
        format!("{valeur:.1}")
    } else {
        format!("{valeur}")
    }
}
