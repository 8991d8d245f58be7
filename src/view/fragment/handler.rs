// Fragment handler trait and context for the content renderer

use crate::location;
use crate::style::Theme;
use eframe::egui;
use log::warn;
use std::cell::RefCell;

/// Context passed to fragment handlers containing shared resources
pub struct FragmentContext<'a> {
    pub theme: Theme,
    /// Resource path the markup was fetched from, used for handler dispatch.
    pub resource: &'a str,
    /// In-app navigation requested by a rendered link, applied after the
    /// frame by the controller.
    pub requested_nav: &'a RefCell<Option<String>>,
}

impl FragmentContext<'_> {
    /// Route a clicked link: `?view=` targets navigate in-app, absolute
    /// targets open with the system browser.
    pub fn follow_link(&self, target: &str) {
        if let Some(view_id) = location::view_param(target) {
            *self.requested_nav.borrow_mut() = Some(view_id);
        } else if target.starts_with("http://") || target.starts_with("https://") {
            if let Err(e) = open::that(target) {
                warn!("could not open external link {}: {}", target, e);
            }
        }
        // Relative non-view links have no meaning outside the portal; ignore
    }
}

/// Trait for fragment renderers
///
/// Allows the content region to display fragment markup through whichever
/// handler claims it. Handlers are checked in priority order; markup is
/// held verbatim upstream regardless of how it is presented here.
pub trait FragmentHandler: Send + Sync {
    /// Name of this handler (for debugging)
    fn name(&self) -> &str;

    /// Check if this handler can render the given fragment
    fn can_render(&self, resource: &str, markup: &str) -> bool;

    /// Render the fragment into the provided UI context
    fn render(
        &self,
        ui: &mut egui::Ui,
        markup: &str,
        context: &FragmentContext,
    ) -> Result<(), String>;

    /// Priority of this handler (lower = higher priority)
    fn priority(&self) -> i32 {
        100
    }
}
