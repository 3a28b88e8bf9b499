// Tuning values and fixed strings for the portfolio site.

// Observers
pub const PREFETCH_MARGIN_PX: f64 = 50.0; // portfolio photos start loading this far out
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_BOTTOM_INSET_PX: f64 = 50.0;

// Attributes and classes
pub const PENDING_ATTR: &str = "data-src";
pub const ACTIVE_ATTR: &str = "src";
pub const WATCH_ID_PREFIX: &str = "data-watch-"; // followed by the observer label
pub const LOADED_CLASS: &str = "loaded";
pub const ACTIVE_CLASS: &str = "active";
pub const MOBILE_CLASS: &str = "mobile-device";

// Navbar
pub const NAVBAR_SCROLL_THRESHOLD_PX: f64 = 50.0;
pub const NAVBAR_SHADOW_SCROLLED: &str = "0 10px 40px rgba(0, 0, 0, 0.15)";
pub const NAVBAR_BACKGROUND_SCROLLED: &str = "rgba(255, 255, 255, 0.98)";
pub const NAVBAR_SHADOW_RESTING: &str = "0 5px 15px rgba(0, 0, 0, 0.08)";
pub const NAVBAR_BACKGROUND_RESTING: &str = "rgba(255, 255, 255, 0.95)";

// Smooth scroll: height of the fixed header
pub const HEADER_OFFSET_PX: f64 = 80.0;

// Parallax speed per decoration
pub const PARALLAX_CIRCLE: f64 = 0.5;
pub const PARALLAX_SQUARE: f64 = 0.3;
pub const PARALLAX_TRIANGLE: f64 = 0.4;

// Counter animation
pub const COUNTER_TICK_MS: i32 = 16;
pub const COUNTER_DEFAULT_DURATION_MS: f64 = 2000.0;

// Contact and sharing
pub const WHATSAPP_NUMBER: &str = "5518997274433";
pub const WHATSAPP_MESSAGE: &str =
    "Olá Bruna! Gostaria de solicitar um orçamento para meu projeto personalizado.";
pub const SHARE_TITLE: &str = "Bruna Personaliza Love - Papelaria Personalizada";
pub const SHARE_WINDOW_FEATURES: &str = "width=600,height=400";
pub const INSTAGRAM_URL: &str = "https://www.instagram.com/bruna_personalizalove";
pub const SERVICE_WORKER_PATH: &str = "sw.js";

// Inline style presets: (property, value)
pub type StyleSet = &'static [(&'static str, &'static str)];

pub const REVEAL_HIDDEN: StyleSet = &[
    ("opacity", "0"),
    ("transform", "translateY(20px)"),
    ("transition", "opacity 0.6s ease-out, transform 0.6s ease-out"),
];
pub const REVEAL_SHOWN: StyleSet = &[("opacity", "1"), ("transform", "translateY(0)")];

pub const CARD_HOVER: StyleSet = &[("transform", "translateY(-15px)")];
pub const CARD_REST: StyleSet = &[("transform", "translateY(0)")];

pub const STORY_HOVER: StyleSet = &[("transform", "scale(1.1) rotate(5deg)")];
pub const STORY_REST: StyleSet = &[("transform", "scale(1) rotate(0deg)")];

pub const PHONE_HOVER: StyleSet = &[
    ("transform", "translateY(-10px)"),
    ("box-shadow", "0 30px 80px rgba(0, 0, 0, 0.4)"),
];
pub const PHONE_REST: StyleSet = &[
    ("transform", "translateY(0)"),
    ("box-shadow", "0 20px 60px rgba(0, 0, 0, 0.3)"),
];

pub const BODY_FADE_IN: StyleSet = &[("opacity", "1"), ("transition", "opacity 0.5s ease-out")];
pub const PHOTO_FADE_IN: StyleSet = &[("animation", "fadeIn 0.5s ease-in")];

pub const FILTER_SHOWN: StyleSet = &[
    ("display", "block"),
    ("animation", "slideInUp 0.6s ease-out forwards"),
];
pub const FILTER_HIDDEN: StyleSet = &[("display", "none")];

pub const SLIDE_IN_UP_KEYFRAMES: &str = "
    @keyframes slideInUp {
        from {
            opacity: 0;
            transform: translateY(20px);
        }
        to {
            opacity: 1;
            transform: translateY(0);
        }
    }
";

pub const FADE_IN_KEYFRAMES: &str = "
    @keyframes fadeIn {
        from {
            opacity: 0;
        }
        to {
            opacity: 1;
        }
    }
";
