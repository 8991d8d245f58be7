use crate::config::Config;
use crate::error::NavError;
use crate::fetch::{self, FetchCommand, FetchResult};
use crate::location;
use crate::site::SiteManifest;
use crate::state::{ContactForm, ContentRegion, HistoryEntry, SessionHistory, StatusModal};
use crate::style::Theme;
use crate::view::fragment::{create_default_registry, FragmentRegistry};
use eframe::egui;
use log::{debug, error, info, warn};
use std::cell::RefCell;
use std::sync::mpsc::{Receiver, Sender};

/// Whether a completed navigation records a session history entry.
/// Suppressed for startup and for history restoration, so that neither
/// grows the history.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Record {
    Push,
    Suppress,
}

pub struct Mirador {
    // Portal
    pub site: Option<SiteManifest>,
    pub manifest_error: Option<String>,
    pub config: Config,
    pub theme: Theme,

    // Navigation
    pub history: SessionHistory,
    pub region: ContentRegion,
    /// View driving active-link state; only successful displays move it.
    pub active_view: Option<String>,
    pub location_bar: String,
    /// Sequence number of the most recent navigation. Fetch results
    /// carrying an older sequence are stale and dropped.
    nav_seq: u64,
    pending_record: Record,

    // UI
    pub nav_menu_open: bool,
    pub contact: ContactForm,
    pub status_modal: Option<StatusModal>,
    pub fragment_registry: FragmentRegistry,
    /// Navigation requested by a link inside rendered fragment content,
    /// collected during the frame and applied after it.
    pub requested_nav: RefCell<Option<String>>,

    // Fetch worker
    command_tx: Sender<FetchCommand>,
    result_rx: Receiver<FetchResult>,
}

impl Mirador {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        config: Config,
        site: Result<SiteManifest, NavError>,
        launch_location: String,
    ) -> Self {
        let (command_tx, result_rx) =
            fetch::spawn_worker(cc.egui_ctx.clone(), config.fetch.timeout_secs);
        let mut app = Self::with_channels(config, site, launch_location, command_tx, result_rx);
        app.start();
        app
    }

    /// GUI-free constructor; the caller owns the other ends of the channels.
    pub fn with_channels(
        config: Config,
        site: Result<SiteManifest, NavError>,
        launch_location: String,
        command_tx: Sender<FetchCommand>,
        result_rx: Receiver<FetchResult>,
    ) -> Self {
        let (site, manifest_error) = match site {
            Ok(site) => (Some(site), None),
            Err(e) => {
                error!("{}", e);
                (None, Some(e.to_string()))
            }
        };
        let theme = Theme::from_mode(&config.theme.mode);

        Self {
            site,
            manifest_error,
            config,
            theme,
            history: SessionHistory::new(launch_location.clone()),
            region: ContentRegion::new(),
            active_view: None,
            location_bar: launch_location,
            nav_seq: 0,
            pending_record: Record::Suppress,
            nav_menu_open: false,
            contact: ContactForm::new(),
            status_modal: None,
            fragment_registry: create_default_registry(),
            requested_nav: RefCell::new(None),
            command_tx,
            result_rx,
        }
    }

    /// Initial navigation: the view named by the launch location's `view`
    /// parameter, or the portal default. Never recorded.
    pub fn start(&mut self) {
        let view_id = match &self.site {
            Some(site) => location::view_param(&self.location_bar)
                .unwrap_or_else(|| site.default_view.clone()),
            None => return,
        };
        self.navigate(&view_id, Record::Suppress);
    }

    /// Resolve, enter Loading, and hand the fetch to the worker. Unknown
    /// views abort with the prior content still on screen.
    pub fn navigate(&mut self, view_id: &str, record: Record) {
        let site = match &self.site {
            Some(site) => site,
            None => {
                warn!("{}", NavError::MissingRegion);
                return;
            }
        };

        let entry = match site.resolve(view_id) {
            Ok(entry) => entry,
            Err(e) => {
                error!("{}", e);
                return;
            }
        };
        let url = site.resource_url(entry);

        self.nav_seq += 1;
        self.pending_record = record;
        self.region.show_loading(view_id);
        info!("navigating to '{}' ({})", view_id, url);
        let _ = self.command_tx.send(FetchCommand {
            seq: self.nav_seq,
            view_id: entry.id.clone(),
            url,
        });
    }

    /// Apply finished fetches. Only the result matching the latest issued
    /// navigation may touch the region.
    pub fn drain_fetch_results(&mut self) {
        while let Ok(result) = self.result_rx.try_recv() {
            if result.seq != self.nav_seq {
                debug!("discarding stale fetch result for '{}'", result.view_id);
                continue;
            }
            match result.outcome {
                Ok(markup) => self.complete_navigation(result.view_id, result.url, markup),
                Err(e) => {
                    error!("failed to load view '{}': {}", result.view_id, e);
                    self.region.show_error(e.to_string());
                }
            }
        }
    }

    fn complete_navigation(&mut self, view_id: String, url: String, markup: String) {
        self.region.inject(&view_id, &url, markup);

        // The visible location mirrors the current history entry: pushes
        // move it, suppressed navigations (startup, restores) leave it to
        // the entry already in place.
        if self.pending_record == Record::Push {
            let loc = location::for_view(&view_id);
            self.history.record(&view_id, loc.clone());
            self.location_bar = loc;
        }
        self.active_view = Some(view_id);
        self.nav_menu_open = false;
    }

    pub fn go_back(&mut self) {
        if let Some(entry) = self.history.back() {
            let entry = entry.clone();
            self.restore_entry(entry);
        }
    }

    pub fn go_forward(&mut self) {
        if let Some(entry) = self.history.forward() {
            let entry = entry.clone();
            self.restore_entry(entry);
        }
    }

    /// Restore a popped history entry: use its recorded payload, falling
    /// back to the entry's location parameter, then the portal default.
    fn restore_entry(&mut self, entry: HistoryEntry) {
        let view_id = match &self.site {
            Some(site) => entry
                .state
                .clone()
                .or_else(|| location::view_param(&entry.location))
                .unwrap_or_else(|| site.default_view.clone()),
            None => return,
        };
        self.location_bar = entry.location;
        self.navigate(&view_id, Record::Suppress);
    }

    /// Deep link typed into the location bar.
    pub fn open_location(&mut self) {
        let view_id = match &self.site {
            Some(site) => location::view_param(&self.location_bar)
                .unwrap_or_else(|| site.default_view.clone()),
            None => return,
        };
        self.navigate(&view_id, Record::Push);
    }

    /// A nav link is active when it names the displayed view, or when the
    /// displayed view belongs to its category (a post lights up "blog").
    pub fn is_link_active(&self, link_id: &str) -> bool {
        let current = match &self.active_view {
            Some(current) => current,
            None => return false,
        };
        if current == link_id {
            return true;
        }
        match &self.site {
            Some(site) => site
                .resolve(current)
                .ok()
                .and_then(|entry| entry.category.as_deref())
                == Some(link_id),
            None => false,
        }
    }

    pub fn submit_contact_form(&mut self) {
        self.status_modal = Some(self.contact.submit());
    }

    /// Whether the displayed view carries the simulated contact form.
    pub fn contact_form_visible(&self) -> bool {
        match (&self.site, self.region.displayed_view()) {
            (Some(site), Some(view_id)) => view_id == site.contact_view,
            _ => false,
        }
    }
}

impl eframe::App for Mirador {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_fetch_results();

        self.render_top_bar(ctx);
        self.render_nav_menu(ctx);
        self.render_status_bar(ctx);
        self.render_content(ctx);
        self.render_status_modal(ctx);

        // Navigation requested by links inside the rendered fragment
        let requested = self.requested_nav.borrow_mut().take();
        if let Some(view_id) = requested {
            self.navigate(&view_id, Record::Push);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{RegionPhase, StatusKind};
    use std::sync::mpsc::channel;

    const MANIFEST: &str = r#"
        title = "Mi Portal"
        base_url = "https://example.com"
        nav = ["inicio", "blog", "contacto"]

        [[views]]
        id = "inicio"
        resource = "views/inicio.html"

        [[views]]
        id = "blog"
        resource = "views/blog.html"

        [[views]]
        id = "contacto"
        resource = "views/contacto.html"

        [[views]]
        id = "post-rag"
        resource = "views/posts/post-rag.html"
        category = "blog"
    "#;

    struct Harness {
        app: Mirador,
        commands: Receiver<FetchCommand>,
        results: Sender<FetchResult>,
    }

    fn harness(launch_location: &str) -> Harness {
        let (command_tx, commands) = channel();
        let (results, result_rx) = channel();
        let app = Mirador::with_channels(
            Config::default(),
            SiteManifest::parse(MANIFEST),
            launch_location.to_string(),
            command_tx,
            result_rx,
        );
        Harness {
            app,
            commands,
            results,
        }
    }

    impl Harness {
        /// Answer the pending fetch command with markup and apply it.
        fn complete_with(&mut self, markup: &str) -> FetchCommand {
            let cmd = self.commands.try_recv().expect("expected a fetch command");
            self.results
                .send(FetchResult {
                    seq: cmd.seq,
                    view_id: cmd.view_id.clone(),
                    url: cmd.url.clone(),
                    outcome: Ok(markup.to_string()),
                })
                .unwrap();
            self.app.drain_fetch_results();
            cmd
        }

        fn fail_with(&mut self, status: u16) -> FetchCommand {
            let cmd = self.commands.try_recv().expect("expected a fetch command");
            self.results
                .send(FetchResult {
                    seq: cmd.seq,
                    view_id: cmd.view_id.clone(),
                    url: cmd.url.clone(),
                    outcome: Err(NavError::Status {
                        status,
                        url: cmd.url.clone(),
                    }),
                })
                .unwrap();
            self.app.drain_fetch_results();
            cmd
        }
    }

    #[test]
    fn test_navigate_displays_fetched_markup() {
        let mut h = harness("");
        h.app.navigate("blog", Record::Push);
        assert!(h.app.region.is_loading());

        let cmd = h.complete_with("<section><h2>Blog</h2></section>");
        assert_eq!(cmd.url, "https://example.com/views/blog.html");
        match &h.app.region.phase {
            RegionPhase::Displayed { view_id, markup, .. } => {
                assert_eq!(view_id, "blog");
                assert_eq!(markup, "<section><h2>Blog</h2></section>");
            }
            other => panic!("expected Displayed, got {:?}", other),
        }
        assert_eq!(h.app.location_bar, "?view=blog");
    }

    #[test]
    fn test_unknown_view_leaves_region_untouched() {
        let mut h = harness("");
        h.app.navigate("blog", Record::Push);
        h.complete_with("<p>blog</p>");

        h.app.navigate("tienda", Record::Push);
        assert!(h.commands.try_recv().is_err(), "no fetch may be issued");
        assert_eq!(h.app.region.displayed_view(), Some("blog"));
        assert_eq!(h.app.history.len(), 2);
    }

    #[test]
    fn test_recorded_navigation_grows_history_and_back_restores() {
        let mut h = harness("");
        h.app.navigate("inicio", Record::Suppress);
        h.complete_with("<p>inicio</p>");
        assert_eq!(h.app.history.len(), 1);

        h.app.navigate("blog", Record::Push);
        h.complete_with("<p>blog</p>");
        assert_eq!(h.app.history.len(), 2);
        assert_eq!(h.app.location_bar, "?view=blog");

        // Back: the launch entry has no payload, so the view comes from the
        // launch location / default. Restoration must not push again.
        h.app.go_back();
        h.complete_with("<p>inicio</p>");
        assert_eq!(h.app.region.displayed_view(), Some("inicio"));
        assert_eq!(h.app.history.len(), 2);
        assert!(h.app.history.can_go_forward());
    }

    #[test]
    fn test_suppressed_navigation_keeps_history_length() {
        let mut h = harness("");
        h.app.navigate("blog", Record::Suppress);
        h.complete_with("<p>blog</p>");
        assert_eq!(h.app.history.len(), 1);
    }

    #[test]
    fn test_fetch_failure_shows_error_and_records_nothing() {
        let mut h = harness("");
        h.app.navigate("inicio", Record::Suppress);
        h.complete_with("<p>inicio</p>");
        h.app.navigate("blog", Record::Push);
        let cmd = h.fail_with(404);

        match &h.app.region.phase {
            RegionPhase::Failed { message } => {
                assert!(message.contains("404"));
                assert!(message.contains(&cmd.url));
            }
            other => panic!("expected Failed, got {:?}", other),
        }
        assert_eq!(h.app.history.len(), 1);
        // Active link state stays on the previously displayed view
        assert!(h.app.is_link_active("inicio"));
        assert!(!h.app.is_link_active("blog"));
    }

    #[test]
    fn test_startup_defaults_to_inicio_without_recording() {
        let mut h = harness("");
        h.app.start();
        let cmd = h.complete_with("<p>bienvenida</p>");
        assert_eq!(cmd.view_id, "inicio");
        assert_eq!(h.app.history.len(), 1);
        assert_eq!(h.app.region.displayed_view(), Some("inicio"));
    }

    #[test]
    fn test_startup_honors_launch_location() {
        let mut h = harness("?view=blog");
        h.app.start();
        let cmd = h.complete_with("<p>blog</p>");
        assert_eq!(cmd.view_id, "blog");
        assert_eq!(h.app.history.len(), 1);
    }

    #[test]
    fn test_categorized_view_lights_both_links() {
        let mut h = harness("");
        h.app.navigate("post-rag", Record::Push);
        h.complete_with("<article>RAG</article>");
        assert!(h.app.is_link_active("post-rag"));
        assert!(h.app.is_link_active("blog"));
        assert!(!h.app.is_link_active("inicio"));

        h.app.navigate("inicio", Record::Push);
        h.complete_with("<p>inicio</p>");
        assert!(h.app.is_link_active("inicio"));
        assert!(!h.app.is_link_active("blog"));
    }

    #[test]
    fn test_stale_fetch_result_is_discarded() {
        let mut h = harness("");
        h.app.navigate("inicio", Record::Push);
        let first = h.commands.try_recv().unwrap();
        h.app.navigate("blog", Record::Push);
        let second = h.commands.try_recv().unwrap();

        // The slower first fetch lands last in wall-clock order; deliver
        // the newer result first, then the stale one.
        h.results
            .send(FetchResult {
                seq: second.seq,
                view_id: second.view_id.clone(),
                url: second.url.clone(),
                outcome: Ok("<p>blog</p>".to_string()),
            })
            .unwrap();
        h.results
            .send(FetchResult {
                seq: first.seq,
                view_id: first.view_id.clone(),
                url: first.url.clone(),
                outcome: Ok("<p>inicio</p>".to_string()),
            })
            .unwrap();
        h.app.drain_fetch_results();

        assert_eq!(h.app.region.displayed_view(), Some("blog"));
        assert_eq!(h.app.history.len(), 2, "stale result must not record");
    }

    #[test]
    fn test_menu_closes_on_successful_navigation() {
        let mut h = harness("");
        h.app.nav_menu_open = true;
        h.app.navigate("blog", Record::Push);
        assert!(h.app.nav_menu_open, "menu stays open while loading");
        h.complete_with("<p>blog</p>");
        assert!(!h.app.nav_menu_open);
    }

    #[test]
    fn test_contact_form_flow() {
        let mut h = harness("");
        h.app.navigate("contacto", Record::Push);
        h.complete_with("<form>contacto</form>");
        assert!(h.app.contact_form_visible());

        h.app.contact.name = "Ana".to_string();
        h.app.contact.email = "ana@example.com".to_string();
        h.app.contact.message = "Hola".to_string();
        h.app.submit_contact_form();

        let modal = h.app.status_modal.as_ref().expect("modal must open");
        assert_eq!(modal.kind, StatusKind::Success);
        assert!(h.app.contact.name.is_empty());
        // Simulation only: no fetch command was issued by submission
        assert!(h.commands.try_recv().is_err());
    }

    #[test]
    fn test_missing_manifest_blocks_navigation() {
        let (command_tx, commands) = channel();
        let (_results, result_rx) = channel();
        let mut app = Mirador::with_channels(
            Config::default(),
            Err(NavError::Manifest("no such file".to_string())),
            String::new(),
            command_tx,
            result_rx,
        );
        app.start();
        app.navigate("inicio", Record::Push);
        assert!(commands.try_recv().is_err());
        assert!(app.manifest_error.is_some());
    }
}
