/**
 * egui Native Desktop App - Main Entry Point
 *
 * This is the main entry point for the egui native desktop application.
 * It implements eframe::App and provides the UI for authentication and
 * the signed-in mailbox landing.
 */
use eframe::egui;
use moxmail::egui_app::{views, AppState};

fn main() -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native(
        "MoxMail",
        options,
        Box::new(|_cc| Ok(Box::new(MoxMailApp::default()))),
    )
}

/// Main application state
struct MoxMailApp {
    state: AppState,
}

impl Default for MoxMailApp {
    fn default() -> Self {
        Self {
            state: AppState::new(),
        }
    }
}

impl eframe::App for MoxMailApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.check_auth_result();

        views::render_top_bar(ctx, &mut self.state);

        views::render_main_panel(ctx, &mut self.state);

        ctx.request_repaint();
    }
}
