//! Frequently asked questions, grouped by category.

use serde::Deserialize;

use super::nullable::or_default;
use super::rich_text::RichText;

/// Category used for questions without one.
pub const DEFAULT_CATEGORY: &str = "general";

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Faq {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default, deserialize_with = "or_default")]
    pub answer: RichText,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub order: Option<f64>,
    #[serde(default, deserialize_with = "or_default")]
    pub is_active: bool,
}

/// Questions sharing a category, labelled for display.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FaqCategory {
    pub name: String,
    pub faqs: Vec<Faq>,
}

/// Upper-case the first character, leaving the rest untouched.
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Group active questions by category in first-appearance order.
///
/// Member order is preserved; a blank or missing category groups under
/// [`DEFAULT_CATEGORY`].
///
/// # Examples
/// ```
/// use coaching_site::domain::content::{Faq, group_faqs};
///
/// let faq = |category: &str| Faq {
///     category: Some(category.to_owned()),
///     is_active: true,
///     ..Faq::default()
/// };
/// let groups = group_faqs(vec![faq("services"), faq(""), faq("services")]);
/// let names: Vec<_> = groups.iter().map(|group| group.name.as_str()).collect();
/// assert_eq!(names, ["Services", "General"]);
/// ```
pub fn group_faqs(faqs: Vec<Faq>) -> Vec<FaqCategory> {
    let mut groups: Vec<(String, Vec<Faq>)> = Vec::new();
    for faq in faqs.into_iter().filter(|faq| faq.is_active) {
        let key = faq
            .category
            .as_deref()
            .map(str::trim)
            .filter(|category| !category.is_empty())
            .unwrap_or(DEFAULT_CATEGORY)
            .to_owned();
        match groups.iter_mut().find(|(name, _)| *name == key) {
            Some((_, members)) => members.push(faq),
            None => groups.push((key, vec![faq])),
        }
    }
    groups
        .into_iter()
        .map(|(name, faqs)| FaqCategory {
            name: capitalize(&name),
            faqs,
        })
        .collect()
}
