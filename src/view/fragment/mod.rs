// Modular fragment renderer for the content region
//
// Fetched markup is presented through the first FragmentHandler that claims
// it. The markup itself is stored verbatim in the region state; handlers
// only decide how it looks on screen.

mod handler;
mod handlers;
mod registry;

pub use handler::{FragmentContext, FragmentHandler};
pub use handlers::*;
pub use registry::FragmentRegistry;

use std::sync::Arc;

/// Registry with the standard handlers: markdown, html, plain text.
pub fn create_default_registry() -> FragmentRegistry {
    let mut registry = FragmentRegistry::new();
    registry.register(Arc::new(MarkdownFragmentHandler::new()));
    registry.register(Arc::new(HtmlFragmentHandler::new()));
    registry.register(Arc::new(TextFragmentHandler::new()));
    registry
}
