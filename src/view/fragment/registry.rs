// Fragment handler registry for dispatching the content renderer

use super::handler::{FragmentContext, FragmentHandler};
use eframe::egui;
use std::sync::Arc;

/// Registry for managing fragment handlers
pub struct FragmentRegistry {
    handlers: Vec<Arc<dyn FragmentHandler>>,
}

impl FragmentRegistry {
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Register a handler. Handlers are kept sorted by priority.
    pub fn register(&mut self, handler: Arc<dyn FragmentHandler>) {
        self.handlers.push(handler);
        self.handlers.sort_by_key(|h| h.priority());
    }

    /// Render the fragment using the first matching handler.
    ///
    /// Returns true if a handler claimed the fragment.
    pub fn render_fragment(
        &self,
        ui: &mut egui::Ui,
        markup: &str,
        context: &FragmentContext,
    ) -> bool {
        for handler in &self.handlers {
            if handler.can_render(context.resource, markup) {
                match handler.render(ui, markup, context) {
                    Ok(()) => return true,
                    Err(e) => {
                        ui.colored_label(
                            context.theme.error(),
                            format!("Render error ({}): {}", handler.name(), e),
                        );
                        return true; // Still handled, even if error
                    }
                }
            }
        }
        false
    }
}

impl Default for FragmentRegistry {
    fn default() -> Self {
        Self::new()
    }
}
