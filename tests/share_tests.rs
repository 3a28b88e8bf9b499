// Host-side tests for share and WhatsApp link construction.

use site_core::share::{encode_uri_component, is_whatsapp_link, share_url, whatsapp_chat_url};
use site_core::{SharePlatform, UnknownPlatform};

const PAGE: &str = "https://example.com/#portfolio";

#[test]
fn encodes_like_encode_uri_component() {
    assert_eq!(encode_uri_component("abcXYZ019-_.!~*'()"), "abcXYZ019-_.!~*'()");
    assert_eq!(encode_uri_component("a b&c=d"), "a%20b%26c%3Dd");
    assert_eq!(encode_uri_component("Olá"), "Ol%C3%A1");
    assert_eq!(encode_uri_component(PAGE), "https%3A%2F%2Fexample.com%2F%23portfolio");
    assert_eq!(encode_uri_component(""), "");
    assert_eq!(encode_uri_component("orçamento 💕"), "or%C3%A7amento%20%F0%9F%92%95");
    assert_eq!(encode_uri_component("a/b?c#d"), "a%2Fb%3Fc%23d");
}

#[test]
fn platform_names_parse() {
    assert_eq!("facebook".parse(), Ok(SharePlatform::Facebook));
    assert_eq!("twitter".parse(), Ok(SharePlatform::Twitter));
    assert_eq!("whatsapp".parse(), Ok(SharePlatform::WhatsApp));
    assert_eq!("linkedin".parse(), Ok(SharePlatform::LinkedIn));
    assert_eq!(
        "myspace".parse::<SharePlatform>(),
        Err(UnknownPlatform("myspace".into()))
    );
    // Names are case-sensitive.
    assert!("Facebook".parse::<SharePlatform>().is_err());
    assert_eq!(SharePlatform::LinkedIn.to_string(), "linkedin");
}

#[test]
fn share_urls_per_platform() {
    let enc = "https%3A%2F%2Fexample.com%2F%23portfolio";
    assert_eq!(
        share_url(SharePlatform::Facebook, PAGE, "Title"),
        format!("https://www.facebook.com/sharer/sharer.php?u={}", enc)
    );
    assert_eq!(
        share_url(SharePlatform::Twitter, PAGE, "My Title"),
        format!("https://twitter.com/intent/tweet?url={}&text=My%20Title", enc)
    );
    assert_eq!(
        share_url(SharePlatform::WhatsApp, PAGE, "Hi"),
        format!("https://wa.me/?text=Hi%20{}", enc)
    );
    assert_eq!(
        share_url(SharePlatform::LinkedIn, PAGE, "ignored"),
        format!("https://www.linkedin.com/sharing/share-offsite/?url={}", enc)
    );
}

#[test]
fn whatsapp_chat_link() {
    assert_eq!(
        whatsapp_chat_url("5511999990000", "Olá! Quero um orçamento."),
        "https://wa.me/5511999990000?text=Ol%C3%A1!%20Quero%20um%20or%C3%A7amento."
    );
    assert!(is_whatsapp_link("https://wa.me/5511999990000"));
    assert!(!is_whatsapp_link("https://instagram.com/someone"));
    assert!(!is_whatsapp_link("#contato"));
}
