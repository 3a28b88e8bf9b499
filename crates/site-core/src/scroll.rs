use crate::constants::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavbarStyle {
    pub box_shadow: &'static str,
    pub background: &'static str,
}

/// Navbar look for the given vertical scroll offset.
#[inline]
pub fn navbar_style(scroll_y: f64, threshold: f64) -> NavbarStyle {
    if scroll_y > threshold {
        NavbarStyle {
            box_shadow: NAVBAR_SHADOW_SCROLLED,
            background: NAVBAR_BACKGROUND_SCROLLED,
        }
    } else {
        NavbarStyle {
            box_shadow: NAVBAR_SHADOW_RESTING,
            background: NAVBAR_BACKGROUND_RESTING,
        }
    }
}

/// True for in-page anchors other than the bare `#`.
#[inline]
pub fn is_section_anchor(href: &str) -> bool {
    href.starts_with('#') && href != "#"
}

/// Document offset to scroll to so the target clears the fixed header.
#[inline]
pub fn smooth_scroll_top(element_top: f64, page_y_offset: f64, header_offset: f64) -> f64 {
    element_top + page_y_offset - header_offset
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParallaxTransforms {
    pub circle: String,
    pub square: String,
    pub triangle: String,
}

pub fn parallax_transforms(scroll_y: f64) -> ParallaxTransforms {
    ParallaxTransforms {
        circle: format!("translateY({}px)", scroll_y * PARALLAX_CIRCLE),
        square: format!("translateY({}px) rotate(45deg)", scroll_y * PARALLAX_SQUARE),
        triangle: format!("translateY({}px)", scroll_y * PARALLAX_TRIANGLE),
    }
}
