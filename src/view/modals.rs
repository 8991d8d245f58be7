// Status modal rendering (contact form success/error overlay)

use crate::app::Mirador;
use crate::state::StatusKind;
use crate::style;
use eframe::egui;

impl Mirador {
    pub(crate) fn render_status_modal(&mut self, ctx: &egui::Context) {
        let modal = match &self.status_modal {
            Some(modal) => modal.clone(),
            None => return,
        };

        let mut close = false;
        egui::Window::new("Estado del mensaje")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .default_width(style::modal_width(ctx))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(8.0);
                    match modal.kind {
                        StatusKind::Success => {
                            ui.label(
                                egui::RichText::new("✔")
                                    .size(28.0)
                                    .color(self.theme.accent()),
                            );
                        }
                        StatusKind::Error => {
                            ui.label(
                                egui::RichText::new("✖")
                                    .size(28.0)
                                    .color(self.theme.error()),
                            );
                        }
                    }
                    ui.add_space(8.0);
                    ui.label(&modal.message);
                    ui.add_space(10.0);
                    if ui.button("Cerrar").clicked() {
                        close = true;
                    }
                });
            });

        if close {
            self.status_modal = None;
        }
    }
}
