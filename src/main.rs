mod app;
mod config;
mod error;
mod fetch;
mod location;
mod site;
mod state;
mod style;
mod view;

use app::Mirador;
use clap::Parser;
use config::Config;
use eframe::egui;
use error::NavError;
use site::SiteManifest;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(
    name = "mirador",
    version,
    about = "Desktop viewer for fragment-based content portals"
)]
struct Cli {
    /// Site manifest (TOML). Falls back to the configured default.
    manifest: Option<PathBuf>,

    /// Open directly at this view, as a ?view=<id> deep link would
    #[clap(long)]
    view: Option<String>,
}

fn main() -> eframe::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let config = Config::load();

    let manifest_path = cli.manifest.or_else(|| config.default_site.clone());
    let site = match manifest_path {
        Some(path) => SiteManifest::load(&path),
        None => Err(NavError::Manifest(
            "no site manifest given (pass a path or set default_site in the config)".into(),
        )),
    };

    let launch_location = cli
        .view
        .as_deref()
        .map(location::for_view)
        .unwrap_or_default();

    let title = site
        .as_ref()
        .map(|s| s.title.clone())
        .unwrap_or_else(|_| "mirador".to_string());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 640.0])
            .with_title(title),
        ..Default::default()
    };

    eframe::run_native(
        "mirador",
        options,
        Box::new(move |cc| Ok(Box::new(Mirador::new(cc, config, site, launch_location)))),
    )
}
