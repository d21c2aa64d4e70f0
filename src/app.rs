// src/app.rs
//
// Calculatrice Classique — module App (racine)
// --------------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l'impl eframe::App (compatible NATIF + WEB)

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

use crate::noyau::saisie::TOUCHE_EFFACER_TOUT;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Raccourci clavier global minimal (safe natif + web) :
        // ESC = tout effacer (même effet que la touche "C" de la façade).
        let esc = ctx.input(|i| i.key_pressed(egui::Key::Escape));
        if esc {
            self.appui_touche(TOUCHE_EFFACER_TOUT);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}
