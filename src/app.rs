// src/app.rs
//
// Calculatrice à pavé — module App (racine)
// -----------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
// - Clavier global : pas de champ texte, donc pas de conflit de focus
//     * caractères tapés -> mêmes opérations que les boutons
//     * Enter = "=", Backspace = DEL, Escape = C

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

use crate::noyau::ToucheAction;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.clavier(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}

impl AppCalc {
    fn clavier(&mut self, ctx: &egui::Context) {
        let (texte, enter, backspace, esc) = ctx.input(|i| {
            let texte: String = i
                .events
                .iter()
                .filter_map(|e| match e {
                    egui::Event::Text(t) => Some(t.as_str()),
                    _ => None,
                })
                .collect();
            (
                texte,
                i.key_pressed(egui::Key::Enter),
                i.key_pressed(egui::Key::Backspace),
                i.key_pressed(egui::Key::Escape),
            )
        });

        for c in texte.chars() {
            self.saisir_char(c);
        }
        if backspace {
            self.backspace();
        }
        if esc {
            self.touche_action(ToucheAction::Clear);
        }
        if enter {
            self.egal();
        }
    }
}
