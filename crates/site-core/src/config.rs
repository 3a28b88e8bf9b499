//! Observer tuning and page-level settings.

use crate::constants::*;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("threshold {0} is outside 0.0..=1.0")]
    ThresholdOutOfRange(f64),
    #[error("invalid margin length `{0}` (expected px or %)")]
    InvalidLength(String),
    #[error("root margin takes 1 to 4 values, got {0}")]
    MarginArity(usize),
}

/// One side of a root margin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Length {
    Px(f64),
    Percent(f64),
}

impl Length {
    pub const ZERO: Length = Length::Px(0.0);
}

impl FromStr for Length {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigError::InvalidLength(s.to_string());
        let parse = |n: &str| {
            n.parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(invalid)
        };
        if let Some(n) = s.strip_suffix("px") {
            parse(n).map(Length::Px)
        } else if let Some(n) = s.strip_suffix('%') {
            parse(n).map(Length::Percent)
        } else if s == "0" {
            Ok(Length::ZERO)
        } else {
            Err(invalid())
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Length::Px(v) => write!(f, "{}px", v),
            Length::Percent(v) => write!(f, "{}%", v),
        }
    }
}

/// Expansion of the viewport test area, CSS margin order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RootMargin {
    pub top: Length,
    pub right: Length,
    pub bottom: Length,
    pub left: Length,
}

impl RootMargin {
    pub const fn uniform(len: Length) -> Self {
        Self {
            top: len,
            right: len,
            bottom: len,
            left: len,
        }
    }
}

impl Default for RootMargin {
    fn default() -> Self {
        Self::uniform(Length::ZERO)
    }
}

impl FromStr for RootMargin {
    type Err = ConfigError;

    /// Accepts the 1-4 value CSS shorthand, e.g. `50px` or `0px 0px -50px 0px`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = s
            .split_whitespace()
            .map(str::parse::<Length>)
            .collect::<Result<Vec<_>, _>>()?;
        match parts.as_slice() {
            [all] => Ok(Self::uniform(*all)),
            [v, h] => Ok(Self {
                top: *v,
                right: *h,
                bottom: *v,
                left: *h,
            }),
            [t, h, b] => Ok(Self {
                top: *t,
                right: *h,
                bottom: *b,
                left: *h,
            }),
            [t, r, b, l] => Ok(Self {
                top: *t,
                right: *r,
                bottom: *b,
                left: *l,
            }),
            other => Err(ConfigError::MarginArity(other.len())),
        }
    }
}

impl fmt::Display for RootMargin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.top, self.right, self.bottom, self.left)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObserverConfig {
    /// Fraction of the element that must be visible; 0 means any pixel.
    pub threshold: f64,
    pub root_margin: RootMargin,
}

impl Default for ObserverConfig {
    fn default() -> Self {
        Self {
            threshold: 0.0,
            root_margin: RootMargin::default(),
        }
    }
}

impl ObserverConfig {
    pub fn new(threshold: f64, root_margin: &str) -> Result<Self, ConfigError> {
        if !(0.0..=1.0).contains(&threshold) {
            return Err(ConfigError::ThresholdOutOfRange(threshold));
        }
        Ok(Self {
            threshold,
            root_margin: root_margin.parse()?,
        })
    }

    /// Starts loading slightly before the element scrolls into view.
    pub fn prefetch() -> Self {
        Self {
            threshold: 0.0,
            root_margin: RootMargin::uniform(Length::Px(PREFETCH_MARGIN_PX)),
        }
    }

    /// Waits until a tenth of the element is on screen, ignoring the bottom strip.
    pub fn reveal() -> Self {
        Self {
            threshold: REVEAL_THRESHOLD,
            root_margin: RootMargin {
                bottom: Length::Px(-REVEAL_BOTTOM_INSET_PX),
                ..RootMargin::default()
            },
        }
    }
}

/// Page-level settings, defaulting to the values in [`crate::constants`].
#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub navbar_scroll_threshold: f64,
    pub header_offset: f64,
    pub whatsapp_number: String,
    pub whatsapp_message: String,
    pub share_title: String,
    pub instagram_url: String,
    pub service_worker_path: String,
    pub lazy_images: ObserverConfig,
    pub portfolio_photos: ObserverConfig,
    pub reveal: ObserverConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            navbar_scroll_threshold: NAVBAR_SCROLL_THRESHOLD_PX,
            header_offset: HEADER_OFFSET_PX,
            whatsapp_number: WHATSAPP_NUMBER.to_string(),
            whatsapp_message: WHATSAPP_MESSAGE.to_string(),
            share_title: SHARE_TITLE.to_string(),
            instagram_url: INSTAGRAM_URL.to_string(),
            service_worker_path: SERVICE_WORKER_PATH.to_string(),
            lazy_images: ObserverConfig::default(),
            portfolio_photos: ObserverConfig::prefetch(),
            reveal: ObserverConfig::reveal(),
        }
    }
}
