// src/main.rs
//
// Calculatrice à pavé — point d’entrée NATIF + WEB (WASM)
// --------------------------------------------------------
// But:
// - NATIF (Linux/Windows/macOS) : ligne de commande (clap) puis
//     * --expr "..." : évaluation unique sans fenêtre (sortie: nombre ou sentinelle)
//     * sinon        : eframe::run_native + NativeOptions
// - WEB  (wasm32)    : eframe::WebRunner + WebOptions + <canvas>
//
// Journal : env_logger en natif, filtré par RUST_LOG (ex: RUST_LOG=debug).
//
// Côté WEB (WASM) : index.html doit contenir un canvas :
//   <canvas id="the_canvas_id"></canvas>

#![cfg_attr(target_arch = "wasm32", allow(unused_imports))]

mod app;
mod noyau;

use app::AppCalc;

/// Titre unique (natif + web).
const TITRE_APP: &str = "Calculatrice à pavé";

/* ------------------------ Entrée NATIF (PC) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
mod natif {
    use clap::Parser;

    use crate::noyau::Session;

    pub const LARGEUR_DEFAUT: f32 = 360.0;
    pub const HAUTEUR_DEFAUT: f32 = 520.0;

    #[derive(Parser, Debug)]
    #[command(version, about, long_about = None)]
    pub struct Args {
        /// Évalue ce texte (tel que tapé) puis quitte, sans ouvrir de fenêtre
        #[arg(short, long)]
        pub expr: Option<String>,

        /// Largeur initiale de la fenêtre (px)
        #[arg(long, default_value_t = LARGEUR_DEFAUT)]
        pub largeur: f32,

        /// Hauteur initiale de la fenêtre (px)
        #[arg(long, default_value_t = HAUTEUR_DEFAUT)]
        pub hauteur: f32,
    }

    /// Mode sans fenêtre : une session neuve, le texte tapé, puis "=".
    /// Retourne le texte à imprimer et le succès.
    pub fn evaluer_une_fois(texte: &str) -> (String, bool) {
        let mut session = Session::new();
        session.saisir(texte);
        let sortie = session.evaluate_sortie();
        let ok = matches!(sortie, crate::noyau::Sortie::Nombre(_));
        (sortie.to_string(), ok)
    }

}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    use clap::Parser;
    use eframe::egui;

    env_logger::init();

    let args = natif::Args::parse();

    if let Some(texte) = args.expr {
        let (sortie, ok) = natif::evaluer_une_fois(&texte);
        println!("{sortie}");
        std::process::exit(if ok { 0 } else { 1 });
    }

    log::info!("ouverture fenêtre {}x{}", args.largeur, args.hauteur);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([args.largeur, args.hauteur])
            .with_min_inner_size([300.0, 420.0]),
        ..Default::default()
    };

    eframe::run_native(
        TITRE_APP,
        options,
        Box::new(|_cc| Ok(Box::<AppCalc>::default())),
    )
}

/* ------------------------ Entrée WEB (WASM) ------------------------ */

#[cfg(target_arch = "wasm32")]
fn main() {
    // En wasm32, le démarrage réel passe par `start()` (wasm_bindgen).
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{AppCalc, TITRE_APP};

    use wasm_bindgen::JsCast;
    use web_sys::{window, HtmlCanvasElement};

    /// ID du canvas attendu dans index.html.
    const CANVAS_ID: &str = "the_canvas_id";

    /// Point d’entrée automatique au chargement de la page.
    #[wasm_bindgen::prelude::wasm_bindgen(start)]
    pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
        let w = window().ok_or_else(|| js_err("window() indisponible"))?;
        let d = w
            .document()
            .ok_or_else(|| js_err("document() indisponible"))?;

        d.set_title(TITRE_APP);

        let el = d
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| js_err("canvas introuvable (id incorrect dans index.html)"))?;

        let canvas: HtmlCanvasElement = el
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| js_err("l’élément trouvé n’est pas un <canvas>"))?;

        eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|_cc| Ok(Box::<AppCalc>::default())),
            )
            .await
    }

    fn js_err(msg: &str) -> wasm_bindgen::JsValue {
        wasm_bindgen::JsValue::from_str(msg)
    }
}
