use std::str::FromStr;

use serde::Deserialize;

pub const SERVICE_WORKER_PATH: &str = "/calendar-peek/sw.js";

/// Which landing page we are running on. Read from `<body data-page="...">`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageVariant {
    #[default]
    CalendarPeek,
    /// Newer layout with the centered nav that hides on scroll down.
    CalendarPeekCentered,
    Digest,
}

impl FromStr for PageVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "calendar-peek" | "home" => Ok(PageVariant::CalendarPeek),
            "calendar-peek-centered" | "centered" => Ok(PageVariant::CalendarPeekCentered),
            "digest" => Ok(PageVariant::Digest),
            other => Err(format!("unknown page variant: {}", other)),
        }
    }
}

impl PageVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            PageVariant::CalendarPeek => "calendar-peek",
            PageVariant::CalendarPeekCentered => "calendar-peek-centered",
            PageVariant::Digest => "digest",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageConfig {
    pub variant: PageVariant,

    pub menu_toggle_selector: String,
    pub nav_links_selector: String,
    pub menu_open_class: String,

    /// Pixels left between the viewport top and an anchor target.
    /// `None` scrolls the target flush with the top.
    pub anchor_offset: Option<f64>,

    pub navbar_selector: String,
    pub navbar_scrolled_class: String,
    pub navbar_threshold: f64,

    /// Only set for the centered layout.
    pub centered_nav_selector: Option<String>,
    pub nav_hidden_class: String,
    pub nav_reveal_zone: f64,

    pub reveal_selector: String,
    pub reveal_class: String,
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,

    pub hero_image_selector: String,
    pub parallax_factor: f64,

    pub hero_selector: String,
    pub hero_threshold: f64,
    pub stat_selector: String,
    pub stat_start_delay_ms: u32,
    pub stat_tick_ms: u32,
    pub stat_steps: u32,

    pub form_selector: String,
    pub email_selector: String,
    pub error_message: String,
    pub success_message: String,
    pub error_timeout_ms: u32,
    pub success_timeout_ms: u32,

    pub cta_selector: String,
    pub feature_card_selector: String,

    pub scroll_debounce_ms: u32,

    pub service_worker_path: Option<String>,
    pub welcome_banner: bool,
}

impl PageConfig {
    pub fn for_variant(variant: PageVariant) -> Self {
        let mut config = PageConfig {
            variant,
            menu_toggle_selector: ".mobile-menu-toggle".to_string(),
            nav_links_selector: ".nav-links".to_string(),
            menu_open_class: "active".to_string(),
            anchor_offset: Some(80.0),
            navbar_selector: ".navbar".to_string(),
            navbar_scrolled_class: "scrolled".to_string(),
            navbar_threshold: 50.0,
            centered_nav_selector: None,
            nav_hidden_class: "nav-hidden".to_string(),
            nav_reveal_zone: 100.0,
            reveal_selector: ".feature-card, .step, .hero-content, .hero-visual".to_string(),
            reveal_class: "animate-in".to_string(),
            reveal_threshold: 0.1,
            reveal_root_margin: "0px 0px -50px 0px".to_string(),
            hero_image_selector: ".hero-image".to_string(),
            parallax_factor: -0.5,
            hero_selector: ".hero".to_string(),
            hero_threshold: 0.5,
            stat_selector: ".stat-number".to_string(),
            stat_start_delay_ms: 500,
            stat_tick_ms: 30,
            stat_steps: 50,
            form_selector: "form".to_string(),
            email_selector: "input[type=\"email\"]".to_string(),
            error_message: "Please enter a valid email address".to_string(),
            success_message: "Thank you! We'll be in touch soon.".to_string(),
            error_timeout_ms: 3000,
            success_timeout_ms: 5000,
            cta_selector: ".primary-button, .cta-button".to_string(),
            feature_card_selector: ".feature-card".to_string(),
            scroll_debounce_ms: 10,
            service_worker_path: Some(SERVICE_WORKER_PATH.to_string()),
            welcome_banner: true,
        };

        match variant {
            PageVariant::CalendarPeek => {}
            PageVariant::CalendarPeekCentered => {
                config.centered_nav_selector = Some(".centered-nav".to_string());
                config.reveal_class = "animated".to_string();
            }
            PageVariant::Digest => {
                config.anchor_offset = None;
                config.service_worker_path = None;
                config.welcome_banner = false;
            }
        }
        config
    }

    /// Behaviours the digest page leaves out.
    pub fn is_landing(&self) -> bool {
        self.variant != PageVariant::Digest
    }

    pub fn apply(&mut self, overrides: ConfigOverrides) {
        if let Some(v) = overrides.anchor_offset {
            self.anchor_offset = Some(v);
        }
        if let Some(v) = overrides.navbar_threshold {
            self.navbar_threshold = v;
        }
        if let Some(v) = overrides.nav_reveal_zone {
            self.nav_reveal_zone = v;
        }
        if let Some(v) = overrides.reveal_class {
            self.reveal_class = v;
        }
        if let Some(v) = overrides.parallax_factor {
            self.parallax_factor = v;
        }
        if let Some(v) = overrides.stat_start_delay_ms {
            self.stat_start_delay_ms = v;
        }
        if let Some(v) = overrides.stat_tick_ms {
            self.stat_tick_ms = v;
        }
        if let Some(v) = overrides.stat_steps {
            self.stat_steps = v.max(1);
        }
        if let Some(v) = overrides.error_timeout_ms {
            self.error_timeout_ms = v;
        }
        if let Some(v) = overrides.success_timeout_ms {
            self.success_timeout_ms = v;
        }
        if let Some(v) = overrides.scroll_debounce_ms {
            self.scroll_debounce_ms = v;
        }
        if let Some(path) = overrides.service_worker_path {
            self.service_worker_path = if path.is_empty() { None } else { Some(path) };
        }
        if let Some(v) = overrides.welcome_banner {
            self.welcome_banner = v;
        }
    }
}

/// Optional per-page tweaks, read from `<script type="application/json" id="page-config">`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ConfigOverrides {
    pub anchor_offset: Option<f64>,
    pub navbar_threshold: Option<f64>,
    pub nav_reveal_zone: Option<f64>,
    pub reveal_class: Option<String>,
    pub parallax_factor: Option<f64>,
    pub stat_start_delay_ms: Option<u32>,
    pub stat_tick_ms: Option<u32>,
    pub stat_steps: Option<u32>,
    pub error_timeout_ms: Option<u32>,
    pub success_timeout_ms: Option<u32>,
    pub scroll_debounce_ms: Option<u32>,
    pub service_worker_path: Option<String>,
    pub welcome_banner: Option<bool>,
}

impl ConfigOverrides {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}
