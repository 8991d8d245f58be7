// Site manifest - the externally supplied mapping from view ids to
// fragment resources, plus the nav link order. Loaded once at startup and
// immutable afterwards.

use crate::error::NavError;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// A single registered view.
#[derive(Deserialize, Clone, Debug)]
pub struct ViewEntry {
    pub id: String,
    /// Resource path, resolved against `base_url` unless already absolute.
    pub resource: String,
    /// Human label for nav links. Falls back to the id.
    #[serde(default)]
    pub label: Option<String>,
    /// Nav link id this view belongs to (e.g. a post under "blog").
    /// Explicit field, not a naming convention.
    #[serde(default)]
    pub category: Option<String>,
}

impl ViewEntry {
    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.id)
    }
}

/// Portal description: title, resource base, view registry, nav order.
#[derive(Deserialize, Clone, Debug)]
pub struct SiteManifest {
    #[serde(default = "default_title")]
    pub title: String,
    /// Base URL fragment resources are fetched relative to.
    pub base_url: String,
    /// View shown when no `?view=` parameter is present.
    #[serde(default = "default_view_id")]
    pub default_view: String,
    /// View whose display enables the simulated contact form.
    #[serde(default = "default_contact_view")]
    pub contact_view: String,
    /// Ordered ids of the views shown as nav links.
    #[serde(default)]
    pub nav: Vec<String>,
    pub views: Vec<ViewEntry>,
}

fn default_title() -> String {
    "Portal".to_string()
}

fn default_view_id() -> String {
    "inicio".to_string()
}

fn default_contact_view() -> String {
    "contacto".to_string()
}

impl SiteManifest {
    /// Load and validate a manifest from a TOML file.
    pub fn load(path: &Path) -> Result<Self, NavError> {
        let contents = fs::read_to_string(path).map_err(|e| {
            NavError::Manifest(format!("could not read {}: {}", path.display(), e))
        })?;
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<Self, NavError> {
        let manifest: SiteManifest = toml::from_str(contents)
            .map_err(|e| NavError::Manifest(format!("invalid manifest: {}", e)))?;
        manifest.validate()?;
        Ok(manifest)
    }

    fn validate(&self) -> Result<(), NavError> {
        if self.views.is_empty() {
            return Err(NavError::Manifest("manifest declares no views".into()));
        }

        let mut seen = HashSet::new();
        for view in &self.views {
            if !seen.insert(view.id.as_str()) {
                return Err(NavError::Manifest(format!(
                    "duplicate view id '{}'",
                    view.id
                )));
            }
        }
        for link in &self.nav {
            if !seen.contains(link.as_str()) {
                return Err(NavError::Manifest(format!(
                    "nav references unknown view '{}'",
                    link
                )));
            }
        }
        if !seen.contains(self.default_view.as_str()) {
            return Err(NavError::Manifest(format!(
                "default view '{}' is not registered",
                self.default_view
            )));
        }
        Ok(())
    }

    /// Exact-match lookup. No fuzzy matching, no fallback - the default-view
    /// policy lives in the navigation controller.
    pub fn resolve(&self, view_id: &str) -> Result<&ViewEntry, NavError> {
        self.views
            .iter()
            .find(|v| v.id == view_id)
            .ok_or_else(|| NavError::UnknownView(view_id.to_string()))
    }

    /// Full URL for a view's fragment resource.
    pub fn resource_url(&self, entry: &ViewEntry) -> String {
        if entry.resource.starts_with("http://") || entry.resource.starts_with("https://") {
            return entry.resource.clone();
        }
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            entry.resource.trim_start_matches('/')
        )
    }

    /// Nav links in manifest order.
    pub fn nav_entries(&self) -> impl Iterator<Item = &ViewEntry> {
        self.nav.iter().filter_map(|id| {
            self.views.iter().find(|v| &v.id == id)
        })
    }
}
