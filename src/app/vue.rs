// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Historique en haut (collé au bas de sa zone), écran au milieu
//   (fin d'expression toujours visible), façade 5×4 en bas
// - Tactile : gros boutons
//
// Note :
// - Le bouton retour arrière affiche "DEL" (glyphe sûr avec les polices
//   par défaut) mais envoie bien "⌫" au noyau.

use eframe::egui;

use crate::noyau::saisie::{
    AFFICHAGE_ERREUR, TOUCHE_EFFACER_TOUT, TOUCHE_EGAL, TOUCHE_RETOUR,
};

use super::etat::AppCalc;

/// Façade 5×4 : chaque cellule est le symbole envoyé tel quel au noyau.
const FACADE: [[&str; 4]; 5] = [
    [TOUCHE_EFFACER_TOUT, TOUCHE_RETOUR, "/", "*"],
    ["7", "8", "9", "-"],
    ["4", "5", "6", "+"],
    ["1", "2", "3", TOUCHE_EGAL],
    ["0", ".", "(", ")"],
];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.heading("Calculatrice Classique");
        ui.add_space(6.0);

        self.ui_historique(ui);

        ui.add_space(4.0);
        ui.separator();
        ui.add_space(4.0);

        self.ui_ecran(ui);

        ui.add_space(8.0);

        self.ui_facade(ui);
    }

    fn ui_historique(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Historique :");
            let resp = ui
                .small_button("vider")
                .on_hover_text("Efface l'historique (pas l'affichage)");
            if resp.clicked() {
                self.vider_historique();
            }
        });

        ui.push_id("historique_scroll", |ui| {
            egui::ScrollArea::vertical()
                .max_height(150.0)
                .auto_shrink([false, true])
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    if self.historique.is_empty() {
                        ui.weak("aucun calcul pour l'instant");
                    }
                    for ligne in &self.historique {
                        ui.monospace(ligne);
                    }
                });
        });
    }

    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        let en_erreur = self.affichage == AFFICHAGE_ERREUR;

        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.push_id("ecran_scroll", |ui| {
                    // les expressions longues défilent, la fin reste visible
                    egui::ScrollArea::horizontal()
                        .stick_to_right(true)
                        .show(ui, |ui| {
                            let mut texte = egui::RichText::new(&self.affichage)
                                .monospace()
                                .size(34.0)
                                .strong();
                            if en_erreur {
                                texte = texte.color(ui.visuals().error_fg_color);
                            }
                            ui.label(texte);
                        });
                });
            });
    }

    fn ui_facade(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("facade_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for rangee in FACADE {
                    for symbole in rangee {
                        self.bouton_touche(ui, symbole);
                    }
                    ui.end_row();
                }
            });
    }

    fn bouton_touche(&mut self, ui: &mut egui::Ui, symbole: &str) {
        let etiquette = if symbole == TOUCHE_RETOUR { "DEL" } else { symbole };

        let resp = ui.add_sized([72.0, 44.0], egui::Button::new(etiquette));
        let resp = match symbole {
            TOUCHE_EFFACER_TOUT => resp.on_hover_text("Remet l'affichage à zéro"),
            TOUCHE_RETOUR => resp.on_hover_text("Efface le dernier symbole"),
            TOUCHE_EGAL => resp.on_hover_text("Évalue l'expression affichée"),
            _ => resp,
        };

        if resp.clicked() {
            self.appui_touche(symbole);
        }
    }
}
