// Plain text fallback handler - claims anything no other handler wants

use crate::view::fragment::handler::{FragmentContext, FragmentHandler};
use eframe::egui;

pub struct TextFragmentHandler;

impl TextFragmentHandler {
    pub fn new() -> Self {
        Self
    }
}

impl FragmentHandler for TextFragmentHandler {
    fn name(&self) -> &str {
        "text"
    }

    fn can_render(&self, _resource: &str, _markup: &str) -> bool {
        true
    }

    fn priority(&self) -> i32 {
        200
    }

    fn render(
        &self,
        ui: &mut egui::Ui,
        markup: &str,
        _context: &FragmentContext,
    ) -> Result<(), String> {
        ui.label(egui::RichText::new(markup).monospace());
        Ok(())
    }
}
