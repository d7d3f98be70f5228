use maud::{DOCTYPE, Markup, html};

use super::{cookie_banner, site_footer, site_header};
use crate::domain::{PageMetadata, SiteChrome};

/// Full HTML document: head metadata, header, `main`, footer and the
/// cookie banner.
pub fn document(
    metadata: &PageMetadata,
    chrome: &SiteChrome,
    site_name: &str,
    privacy_slug: Option<&str>,
    main: Markup,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (metadata.title) }
                meta name="description" content=(metadata.description);
                meta property="og:title" content=(metadata.title);
                meta property="og:description" content=(metadata.description);
                meta property="og:type" content=(metadata.og_type.as_str());
                meta property="og:site_name" content=(site_name);
                @for image in &metadata.images {
                    meta property="og:image" content=(image);
                }
            }
            body {
                (site_header(chrome.navigation.as_ref(), site_name))
                main { (main) }
                (site_footer(chrome.footer.as_ref(), &chrome.footer_pages))
                (cookie_banner(privacy_slug))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::OgType;

    #[test]
    fn head_carries_metadata() {
        let metadata = PageMetadata {
            title: "Blog | Lydia Lockhart".to_owned(),
            description: "Insights & tips".to_owned(),
            og_type: OgType::Article,
            images: vec!["https://cdn/og.jpg".to_owned()],
        };
        let html = document(&metadata, &SiteChrome::fallback(), "Lydia Lockhart", None, html! { p { "body" } })
            .into_string();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Blog | Lydia Lockhart</title>"));
        assert!(html.contains(r#"content="Insights &amp; tips""#));
        assert!(html.contains(r#"content="article""#));
        assert!(html.contains(r#"content="https://cdn/og.jpg""#));
        assert!(html.contains("<main><p>body</p></main>"));
        assert!(html.contains("Navigation section - content not available"));
    }
}
