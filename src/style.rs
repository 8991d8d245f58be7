use eframe::egui;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn from_mode(mode: &str) -> Self {
        match mode {
            "light" => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn accent(&self) -> egui::Color32 {
        match self {
            Theme::Dark => egui::Color32::from_rgb(92, 170, 255),
            Theme::Light => egui::Color32::from_rgb(0, 102, 204),
        }
    }

    pub fn error(&self) -> egui::Color32 {
        egui::Color32::from_rgb(220, 53, 69)
    }
}

// --- Sizing ---
pub const TOP_BAR_SPACING: f32 = 4.0;
pub const NAV_LINK_SPACING: f32 = 10.0;
pub const CONTENT_MARGIN: f32 = 16.0;
pub const LOCATION_BAR_RESERVED: f32 = 140.0;

// --- Modals ---
pub const MODAL_MIN_WIDTH: f32 = 300.0;
pub const MODAL_MAX_WIDTH: f32 = 500.0;
pub const MODAL_WIDTH_RATIO: f32 = 0.6;

// --- Heading scale for rendered fragments ---
pub const HEADING_SIZES: [f32; 6] = [26.0, 22.0, 19.0, 17.0, 15.0, 14.0];

// --- Helper functions ---

pub fn modal_width(ctx: &egui::Context) -> f32 {
    let width = ctx.input(|i| {
        i.viewport()
            .inner_rect
            .map(|r| r.width())
            .unwrap_or(800.0)
    });
    (width * MODAL_WIDTH_RATIO).clamp(MODAL_MIN_WIDTH, MODAL_MAX_WIDTH)
}

pub fn heading_size(level: usize) -> f32 {
    HEADING_SIZES[level.clamp(1, 6) - 1]
}
