// Host-side tests for the pure rules behind scroll, menu, filter, counter
// and device behaviors.

use site_core::constants::*;
use site_core::device::{is_mobile_user_agent, parallax_enabled};
use site_core::scroll::{is_section_anchor, navbar_style, parallax_transforms, smooth_scroll_top};
use site_core::{CounterAnimation, MenuState, PortfolioFilter};

#[test]
fn navbar_switches_past_threshold() {
    let resting = navbar_style(50.0, 50.0);
    assert_eq!(resting.box_shadow, NAVBAR_SHADOW_RESTING);
    assert_eq!(resting.background, NAVBAR_BACKGROUND_RESTING);

    let scrolled = navbar_style(50.5, 50.0);
    assert_eq!(scrolled.box_shadow, NAVBAR_SHADOW_SCROLLED);
    assert_eq!(scrolled.background, NAVBAR_BACKGROUND_SCROLLED);

    assert_eq!(navbar_style(0.0, 50.0), resting);
}

#[test]
fn section_anchors() {
    assert!(is_section_anchor("#portfolio"));
    assert!(!is_section_anchor("#"));
    assert!(!is_section_anchor("https://example.com/#portfolio"));
    assert!(!is_section_anchor(""));
}

#[test]
fn smooth_scroll_clears_header() {
    assert_eq!(smooth_scroll_top(300.0, 1000.0, 80.0), 1220.0);
    assert_eq!(smooth_scroll_top(-200.0, 1000.0, 80.0), 720.0);
}

#[test]
fn parallax_offsets_scale_with_scroll() {
    let still = parallax_transforms(0.0);
    assert_eq!(still.circle, "translateY(0px)");
    assert_eq!(still.square, "translateY(0px) rotate(45deg)");
    assert_eq!(still.triangle, "translateY(0px)");

    assert_eq!(parallax_transforms(100.0).circle, "translateY(50px)");
    assert_eq!(parallax_transforms(5.0).circle, "translateY(2.5px)");
}

#[test]
fn menu_toggles_and_closes() {
    let mut menu = MenuState::default();
    assert!(!menu.open);
    assert!(menu.toggle());
    assert!(!menu.toggle());
    menu.toggle();
    menu.close();
    assert!(!menu.open);
}

#[test]
fn outside_click_closes_only_open_menu() {
    let open = MenuState { open: true };
    let closed = MenuState { open: false };

    assert!(open.closes_on_click(false, false));
    assert!(!open.closes_on_click(true, false));
    assert!(!open.closes_on_click(false, true));
    assert!(!closed.closes_on_click(false, false));
}

#[test]
fn filter_from_button_attribute() {
    assert_eq!(PortfolioFilter::from_attr(Some("all")), PortfolioFilter::All);
    assert_eq!(
        PortfolioFilter::from_attr(Some("convites")),
        PortfolioFilter::Category("convites".into())
    );
    assert_eq!(PortfolioFilter::from_attr(None), PortfolioFilter::Uncategorized);
}

#[test]
fn filter_matches_categories() {
    let all = PortfolioFilter::All;
    let invites = PortfolioFilter::Category("convites".into());
    let none = PortfolioFilter::Uncategorized;

    assert!(all.matches(Some("convites")));
    assert!(all.matches(None));
    assert!(invites.matches(Some("convites")));
    assert!(!invites.matches(Some("topos")));
    assert!(!invites.matches(None));
    assert!(none.matches(None));
    assert!(!none.matches(Some("convites")));

    assert_eq!(invites.item_style(Some("convites")), FILTER_SHOWN);
    assert_eq!(invites.item_style(Some("topos")), FILTER_HIDDEN);
}

#[test]
fn counter_counts_up_and_lands_on_target() {
    let mut counter = CounterAnimation::new(100.0, COUNTER_DEFAULT_DURATION_MS);
    let mut frames = Vec::new();
    for _ in 0..1000 {
        let frame = counter.tick();
        let done = frame.finished;
        frames.push(frame);
        if done {
            break;
        }
    }

    let last = frames.last().unwrap();
    assert!(last.finished);
    assert_eq!(last.text, "100");
    assert!(counter.is_finished());
    // ~2000ms / 16ms ticks.
    assert!((125..=127).contains(&frames.len()), "took {} ticks", frames.len());

    let shown: Vec<u32> = frames[..frames.len() - 1]
        .iter()
        .map(|f| f.text.parse().unwrap())
        .collect();
    assert_eq!(shown[0], 0);
    assert!(shown.windows(2).all(|w| w[0] <= w[1]));
    assert!(shown.iter().all(|v| *v < 100));
}

#[test]
fn counter_edge_cases_finish_immediately() {
    let mut zero = CounterAnimation::new(0.0, 2000.0);
    let frame = zero.tick();
    assert!(frame.finished);
    assert_eq!(frame.text, "0");

    let mut instant = CounterAnimation::new(42.0, 0.0);
    let frame = instant.tick();
    assert!(frame.finished);
    assert_eq!(frame.text, "42");

    // Once finished, further ticks keep showing the target.
    assert_eq!(instant.tick().text, "42");
}

#[test]
fn mobile_user_agents() {
    let iphone = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15";
    let android = "Mozilla/5.0 (Linux; ANDROID 14; Pixel 8) AppleWebKit/537.36";
    let desktop = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 Chrome/126.0 Safari/537.36";

    assert!(is_mobile_user_agent(iphone));
    assert!(is_mobile_user_agent(android));
    assert!(is_mobile_user_agent("Opera/9.80 (J2ME/MIDP; Opera Mini/9.80)"));
    assert!(!is_mobile_user_agent(desktop));
    assert!(!is_mobile_user_agent(""));

    assert!(!parallax_enabled(iphone));
    assert!(parallax_enabled(desktop));
}
