/**
 * User Menu
 *
 * Dropdown in the top bar for the signed-in user: shows the profile,
 * role names, and sign-out.
 */

use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::colors;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let Some(user) = state.auth_state.user.clone() else {
        return;
    };

    ui.menu_button(format!("@{}", user.username), |ui| {
        ui.label(
            egui::RichText::new(user.display_name())
                .strong()
                .color(colors::TEXT_LIGHT),
        );

        if let Some(ref email) = user.email {
            ui.label(egui::RichText::new(email).color(colors::TEXT_SECONDARY));
        }

        if user.roles.is_empty() {
            ui.label(egui::RichText::new("No role assigned yet").color(colors::TEXT_SECONDARY));
        } else {
            ui.label(
                egui::RichText::new(format!("Roles: {}", user.roles.join(", ")))
                    .color(colors::TEXT_SECONDARY),
            );
        }

        ui.separator();

        if ui.button("Refresh session").clicked() {
            state.refresh_session();
            ui.close();
        }

        if ui.button("Sign out").clicked() {
            state.logout();
            ui.close();
        }
    });
}
