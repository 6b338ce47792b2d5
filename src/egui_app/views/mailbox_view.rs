/**
 * Mailbox View
 *
 * Signed-in landing panel. Shows the session user, their role names,
 * and which mail capabilities those roles grant.
 */

use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::colors;
use crate::shared::{has_permission, Permission};

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let available_rect = ui.available_rect_before_wrap();
    ui.painter().rect_filled(available_rect, 0.0, colors::BG_DARK);

    let Some(user) = state.auth_state.user.clone() else {
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.label(egui::RichText::new("No session").color(colors::TEXT_SECONDARY));
        });
        return;
    };

    ui.scope_builder(egui::UiBuilder::new().max_rect(available_rect), |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(60.0);

            ui.label(
                egui::RichText::new(format!("Welcome, {}", user.display_name()))
                    .size(28.0)
                    .strong()
                    .color(colors::TEXT_LIGHT),
            );
            ui.add_space(10.0);

            if user.roles.is_empty() {
                // Roles are assigned at first sign-in; an empty list here
                // means the session predates role assignment.
                ui.label(
                    egui::RichText::new("No role assigned yet - try refreshing the session")
                        .color(colors::TEXT_SECONDARY),
                );
            } else {
                ui.label(
                    egui::RichText::new(format!("Signed in as {}", user.roles.join(", ")))
                        .color(colors::TEXT_SECONDARY),
                );
            }

            ui.add_space(30.0);

            let capabilities = [
                (Permission::ReadMail, "Read mail"),
                (Permission::SendMail, "Send mail"),
                (Permission::ExtendedQuota, "Extended storage quota"),
                (Permission::ManageUsers, "Manage users"),
                (Permission::ManageSettings, "Manage site settings"),
            ];

            for (permission, label) in capabilities {
                let granted = has_permission(&user.roles, permission);
                let (icon, color) = if granted {
                    ("✔", colors::SUCCESS)
                } else {
                    ("✖", colors::TEXT_SECONDARY)
                };
                ui.label(egui::RichText::new(format!("{} {}", icon, label)).color(color));
                ui.add_space(4.0);
            }
        });
    });
}
