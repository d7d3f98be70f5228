//! Free-form static pages (legal notices, policies).

use std::cmp::Ordering;

use serde::Deserialize;

use super::media::Slug;
use super::nullable::or_default;
use super::rich_text::RichText;

/// Editor-managed page served from the catch-all route.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaticPage {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub slug: Option<Slug>,
    #[serde(default, deserialize_with = "or_default")]
    pub content: RichText,
    #[serde(default)]
    pub meta_description: Option<String>,
    #[serde(default, deserialize_with = "or_default")]
    pub is_published: bool,
    #[serde(default, deserialize_with = "or_default")]
    pub show_in_footer: bool,
    #[serde(default)]
    pub footer_order: Option<f64>,
}

impl StaticPage {
    pub fn path(&self) -> Option<String> {
        self.slug
            .as_ref()
            .filter(|slug| !slug.is_empty())
            .map(|slug| format!("/{slug}"))
    }
}

fn footer_order_cmp(a: &StaticPage, b: &StaticPage) -> Ordering {
    match (a.footer_order, b.footer_order) {
        (Some(left), Some(right)) => left.total_cmp(&right),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Stable ascending sort by footer order; pages without one go last.
pub fn sort_footer_pages(pages: &mut [StaticPage]) {
    pages.sort_by(footer_order_cmp);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(id: &str, footer_order: Option<f64>) -> StaticPage {
        StaticPage {
            id: Some(id.to_owned()),
            footer_order,
            ..StaticPage::default()
        }
    }

    #[test]
    fn footer_pages_sort_with_unordered_last() {
        let mut pages = vec![
            page("none-1", None),
            page("three", Some(3.0)),
            page("one", Some(1.0)),
            page("none-2", None),
            page("also-one", Some(1.0)),
        ];
        sort_footer_pages(&mut pages);
        let ids: Vec<_> = pages.iter().filter_map(|p| p.id.as_deref()).collect();
        assert_eq!(ids, vec!["one", "also-one", "three", "none-1", "none-2"]);
    }

    #[test]
    fn path_requires_slug() {
        let mut item = page("p", None);
        assert!(item.path().is_none());
        item.slug = Some(Slug::new("privacy-policy"));
        assert_eq!(item.path().as_deref(), Some("/privacy-policy"));
    }
}
