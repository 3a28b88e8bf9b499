use once_cell::sync::Lazy;
use regex::Regex;

static MOBILE_UA_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)Android|webOS|iPhone|iPad|iPod|BlackBerry|IEMobile|Opera Mini")
        .expect("valid mobile user-agent regex")
});

/// Coarse phone/tablet check on the navigator user agent.
pub fn is_mobile_user_agent(user_agent: &str) -> bool {
    MOBILE_UA_RE.is_match(user_agent)
}

/// Parallax is skipped on mobile devices.
#[inline]
pub fn parallax_enabled(user_agent: &str) -> bool {
    !is_mobile_user_agent(user_agent)
}
