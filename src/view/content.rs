// Central content region - loading placeholder, fragment display, error
// placeholder, and the simulated contact form

use crate::app::Mirador;
use crate::state::RegionPhase;
use crate::style;
use crate::view::fragment::FragmentContext;
use eframe::egui;

impl Mirador {
    pub(crate) fn render_content(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            if self.site.is_none() {
                self.render_manifest_error(ui);
                return;
            }

            let reset = self.region.take_scroll_reset();
            let mut scroll = egui::ScrollArea::vertical().auto_shrink([false, false]);
            if reset {
                // Fresh content starts at the top of the region
                scroll = scroll.vertical_scroll_offset(0.0);
            }

            scroll.show(ui, |ui| {
                ui.add_space(style::CONTENT_MARGIN);
                match &self.region.phase {
                    RegionPhase::Idle => {}
                    RegionPhase::Loading { .. } => {
                        ui.vertical_centered(|ui| {
                            ui.add_space(40.0);
                            ui.spinner();
                            ui.add_space(10.0);
                            ui.label("Cargando...");
                        });
                    }
                    RegionPhase::Displayed {
                        resource, markup, ..
                    } => {
                        let context = FragmentContext {
                            theme: self.theme,
                            resource: resource.as_str(),
                            requested_nav: &self.requested_nav,
                        };
                        self.fragment_registry.render_fragment(ui, markup, &context);
                    }
                    RegionPhase::Failed { message } => {
                        ui.add_space(40.0);
                        ui.heading("Error de Carga");
                        ui.add_space(10.0);
                        ui.colored_label(self.theme.error(), message);
                    }
                }

                if self.contact_form_visible() {
                    ui.add_space(style::CONTENT_MARGIN);
                    ui.separator();
                    self.render_contact_form(ui);
                }
                ui.add_space(style::CONTENT_MARGIN);
            });
        });
    }

    fn render_manifest_error(&self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(60.0);
            ui.heading("No se pudo abrir el portal");
            ui.add_space(10.0);
            if let Some(err) = &self.manifest_error {
                ui.colored_label(self.theme.error(), err);
            }
            ui.add_space(10.0);
            ui.weak("mirador <manifest.toml> [--view <id>]");
        });
    }

    fn render_contact_form(&mut self, ui: &mut egui::Ui) {
        ui.add_space(6.0);
        egui::Grid::new("contact_form")
            .num_columns(2)
            .spacing([8.0, 6.0])
            .show(ui, |ui| {
                ui.label("Nombre");
                ui.text_edit_singleline(&mut self.contact.name);
                ui.end_row();

                ui.label("Email");
                ui.text_edit_singleline(&mut self.contact.email);
                ui.end_row();

                ui.label("Mensaje");
                ui.text_edit_multiline(&mut self.contact.message);
                ui.end_row();
            });
        ui.add_space(6.0);
        if ui.button("Enviar").clicked() {
            self.submit_contact_form();
        }
    }
}
