// Top bar and nav links - back/forward, location bar, active-state
// highlighting and the collapsed menu for narrow windows

use crate::app::{Mirador, Record};
use crate::style;
use eframe::egui;

impl Mirador {
    /// Nav links collapse behind the menu toggle below this window width.
    fn nav_collapsed(&self, ctx: &egui::Context) -> bool {
        let width = ctx.input(|i| {
            i.viewport()
                .inner_rect
                .map(|r| r.width())
                .unwrap_or(800.0)
        });
        width < self.config.ui.nav_collapse_width
    }

    fn nav_links(&self) -> Vec<(String, String, bool)> {
        match &self.site {
            Some(site) => site
                .nav_entries()
                .map(|v| (v.id.clone(), v.label().to_string(), self.is_link_active(&v.id)))
                .collect(),
            None => Vec::new(),
        }
    }

    pub(crate) fn render_top_bar(&mut self, ctx: &egui::Context) {
        let collapsed = self.nav_collapsed(ctx);
        let links = self.nav_links();
        let mut clicked: Option<String> = None;
        let mut open_location = false;

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.add_space(style::TOP_BAR_SPACING);
            ui.horizontal(|ui| {
                let back = ui.add_enabled(
                    self.history.can_go_back(),
                    egui::Button::new("⬅"),
                );
                let forward = ui.add_enabled(
                    self.history.can_go_forward(),
                    egui::Button::new("➡"),
                );
                if back.on_hover_text("Atrás").clicked() {
                    self.go_back();
                }
                if forward.on_hover_text("Adelante").clicked() {
                    self.go_forward();
                }

                let title = self
                    .site
                    .as_ref()
                    .map(|s| s.title.clone())
                    .unwrap_or_else(|| "mirador".to_string());
                ui.label(egui::RichText::new(title).strong());

                let reserved = if collapsed {
                    style::LOCATION_BAR_RESERVED / 2.0
                } else {
                    style::LOCATION_BAR_RESERVED
                };
                let response = ui.add_sized(
                    ui.available_size() - egui::vec2(reserved, 0.0),
                    egui::TextEdit::singleline(&mut self.location_bar),
                );
                if response.lost_focus() && ctx.input(|i| i.key_pressed(egui::Key::Enter)) {
                    open_location = true;
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if collapsed {
                        if ui.button("☰").on_hover_text("Menú").clicked() {
                            self.nav_menu_open = !self.nav_menu_open;
                        }
                    }
                });
            });

            if !collapsed {
                ui.add_space(style::TOP_BAR_SPACING);
                ui.horizontal(|ui| {
                    ui.spacing_mut().item_spacing.x = style::NAV_LINK_SPACING;
                    for (id, label, active) in &links {
                        if nav_link(ui, label, *active, self.theme.accent()).clicked() {
                            clicked = Some(id.clone());
                        }
                    }
                });
            }
            ui.add_space(style::TOP_BAR_SPACING);
        });

        if open_location {
            self.open_location();
        }
        if let Some(view_id) = clicked {
            self.navigate(&view_id, Record::Push);
        }
    }

    /// Collapsed nav links, shown while the menu toggle is open.
    pub(crate) fn render_nav_menu(&mut self, ctx: &egui::Context) {
        if !self.nav_menu_open || !self.nav_collapsed(ctx) {
            return;
        }
        let links = self.nav_links();
        let mut clicked: Option<String> = None;

        egui::TopBottomPanel::top("nav_menu").show(ctx, |ui| {
            ui.add_space(style::TOP_BAR_SPACING);
            for (id, label, active) in &links {
                if nav_link(ui, label, *active, self.theme.accent()).clicked() {
                    clicked = Some(id.clone());
                }
            }
            ui.add_space(style::TOP_BAR_SPACING);
        });

        if let Some(view_id) = clicked {
            self.navigate(&view_id, Record::Push);
        }
    }

    pub(crate) fn render_status_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                use crate::state::RegionPhase;
                match &self.region.phase {
                    RegionPhase::Idle => {
                        ui.weak("listo");
                    }
                    RegionPhase::Loading { view_id } => {
                        ui.spinner();
                        ui.label(format!("Cargando '{}'...", view_id));
                    }
                    RegionPhase::Displayed {
                        view_id,
                        bytes,
                        loaded_at,
                        ..
                    } => {
                        ui.label(format!(
                            "{} · {} · {}",
                            view_id,
                            bytesize::ByteSize(*bytes),
                            loaded_at.format("%H:%M:%S")
                        ));
                    }
                    RegionPhase::Failed { .. } => {
                        ui.colored_label(self.theme.error(), "error de carga");
                    }
                }
                if let Some(err) = &self.manifest_error {
                    ui.colored_label(self.theme.error(), format!(" | {}", err));
                }
            });
        });
    }
}

fn nav_link(
    ui: &mut egui::Ui,
    label: &str,
    active: bool,
    accent: egui::Color32,
) -> egui::Response {
    let text = if active {
        egui::RichText::new(label).color(accent).underline()
    } else {
        egui::RichText::new(label)
    };
    ui.add(egui::Label::new(text).sense(egui::Sense::click()))
}
