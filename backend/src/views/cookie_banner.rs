//! Cookie consent banner.
//!
//! The choice lives only in the browser under `localStorage.cookieConsent`;
//! the banner stays hidden once either button has been pressed.

use maud::{Markup, PreEscaped, html};

const DEFAULT_PRIVACY_SLUG: &str = "privacy-policy";

const CONSENT_SCRIPT: &str = r#"
(function () {
  var banner = document.getElementById('cookie-banner');
  if (!banner) { return; }
  if (window.localStorage.getItem('cookieConsent')) { return; }
  banner.hidden = false;
  banner.querySelectorAll('[data-consent]').forEach(function (button) {
    button.addEventListener('click', function () {
      window.localStorage.setItem('cookieConsent', button.dataset.consent);
      banner.hidden = true;
    });
  });
})();
"#;

/// Banner linking to the privacy page at `/{privacy_slug}`.
pub fn cookie_banner(privacy_slug: Option<&str>) -> Markup {
    let slug = privacy_slug
        .map(str::trim)
        .filter(|slug| !slug.is_empty())
        .unwrap_or(DEFAULT_PRIVACY_SLUG);
    html! {
        div.cookie-banner id="cookie-banner" role="dialog" aria-label="Cookie consent" hidden {
            p {
                "We use cookies to improve your experience. See our "
                a href={ "/" (slug) } { "privacy policy" }
                "."
            }
            button.button type="button" data-consent="accepted" { "Accept" }
            button.button.secondary type="button" data-consent="declined" { "Decline" }
        }
        script { (PreEscaped(CONSENT_SCRIPT)) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some("privacy"), r#"href="/privacy""#)]
    #[case(None, r#"href="/privacy-policy""#)]
    #[case(Some(" "), r#"href="/privacy-policy""#)]
    fn links_to_privacy_page(#[case] slug: Option<&str>, #[case] expected: &str) {
        assert!(cookie_banner(slug).into_string().contains(expected));
    }

    #[rstest]
    fn stores_choice_under_consent_key() {
        let html = cookie_banner(None).into_string();
        assert!(html.contains("localStorage.setItem('cookieConsent'"));
        assert!(html.contains(r#"data-consent="accepted""#));
        assert!(html.contains(r#"data-consent="declined""#));
    }
}
