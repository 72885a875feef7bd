// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Écran = tampon de la session, lecture seule (pas de TextEdit : tout passe par les touches)
// - Tactile : gros boutons ; clavier géré dans app.rs

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::{ToucheAction, ToucheNumerique, ToucheOperateur};

const TAILLE_TOUCHE: [f32; 2] = [56.0, 40.0];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                self.ui_ecran(ui);

                ui.add_space(8.0);

                self.ui_pave(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_demarche(ui);
            });
    }

    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        Self::champ_monospace(ui, "ecran_tampon", self.session.display(), 1);

        ui.horizontal(|ui| {
            ui.label("= ");
            ui.monospace(&self.sortie);
        });

        if !self.erreur.is_empty() {
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        use ToucheNumerique as N;
        use ToucheOperateur as O;

        egui::Grid::new("pave_numerique")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton_action(ui, ToucheAction::Clear, "Vide le tampon");
                self.bouton_texte(ui, "(");
                self.bouton_texte(ui, ")");
                self.bouton_del(ui);
                ui.end_row();

                for ligne in [
                    [N::Sept, N::Huit, N::Neuf],
                    [N::Quatre, N::Cinq, N::Six],
                    [N::Un, N::Deux, N::Trois],
                ] {
                    for t in ligne {
                        self.bouton_numerique(ui, t);
                    }
                    let op = match ligne[0] {
                        N::Sept => O::Div,
                        N::Quatre => O::Mult,
                        _ => O::Moins,
                    };
                    self.bouton_operateur(ui, op);
                    ui.end_row();
                }

                self.bouton_numerique(ui, N::Zero);
                self.bouton_action(ui, ToucheAction::Point, "Point décimal");
                self.bouton_action(ui, ToucheAction::Egal, "Évalue le tampon");
                self.bouton_operateur(ui, O::Plus);
                ui.end_row();
            });
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(false)
            .show(ui, |ui| {
                Self::champ_demarche(ui, "Nettoyé", "demarche_nettoye", &self.demarche.nettoye);
                Self::champ_demarche(ui, "Jetons", "demarche_jetons", &self.demarche.jetons);
                Self::champ_demarche(ui, "Résultat", "demarche_resultat", &self.demarche.resultat);
            });
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        Self::champ_monospace(ui, id, contenu, 1);
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        // Affichage lecture seule “stable”, sans TextEdit interactif.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(
                        rows as f32 * ui.text_style_height(&egui::TextStyle::Monospace),
                    );
                    ui.monospace(contenu);
                });
            });
    }

    /* ------------------------ Boutons ------------------------ */

    fn bouton(ui: &mut egui::Ui, label: impl Into<String>) -> egui::Response {
        ui.add_sized(TAILLE_TOUCHE, egui::Button::new(label.into()))
    }

    fn bouton_numerique(&mut self, ui: &mut egui::Ui, t: ToucheNumerique) {
        if Self::bouton(ui, t.symbole()).clicked() {
            self.touche_numerique(t);
        }
    }

    fn bouton_operateur(&mut self, ui: &mut egui::Ui, t: ToucheOperateur) {
        if Self::bouton(ui, t.symbole()).clicked() {
            self.touche_operateur(t);
        }
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, t: ToucheAction, tip: &str) {
        if Self::bouton(ui, t.symbole()).on_hover_text(tip).clicked() {
            // "=" : démarche complète
            if t == ToucheAction::Egal {
                self.egal();
            } else {
                self.touche_action(t);
            }
        }
    }

    fn bouton_texte(&mut self, ui: &mut egui::Ui, texte: &str) {
        if Self::bouton(ui, texte).clicked() {
            self.session.saisir(texte);
        }
    }

    fn bouton_del(&mut self, ui: &mut egui::Ui) {
        if Self::bouton(ui, "DEL")
            .on_hover_text("Efface le dernier symbole")
            .clicked()
        {
            self.backspace();
        }
    }
}
