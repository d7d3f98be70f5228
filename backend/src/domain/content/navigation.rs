//! Header navigation singleton.

use serde::Deserialize;

use super::media::{CallToAction, ImageRef};
use super::nullable::or_default;
use super::settings::PageVisibility;

/// Logo, menu and header call-to-action.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationContent {
    #[serde(default)]
    pub logo: Option<ImageRef>,
    #[serde(default, deserialize_with = "or_default")]
    pub menu_items: Vec<MenuItem>,
    #[serde(default, deserialize_with = "or_default")]
    pub show_blog_link: bool,
    #[serde(default, deserialize_with = "or_default")]
    pub show_faq_link: bool,
    #[serde(default)]
    pub cta_button: Option<NavigationButton>,
}

/// One entry of the header menu.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub open_in_new_tab: Option<bool>,
}

impl MenuItem {
    /// Items are shown unless explicitly deactivated and need a label and URL.
    pub fn is_renderable(&self) -> bool {
        self.is_active != Some(false)
            && self.label.as_deref().is_some_and(|label| !label.trim().is_empty())
            && self.url.as_deref().is_some_and(|url| !url.trim().is_empty())
    }
}

/// Header button.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationButton {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub is_visible: Option<bool>,
}

impl NavigationContent {
    /// Drop menu items the editor switched off.
    pub(crate) fn retain_active(mut self) -> Self {
        self.menu_items.retain(|item| item.is_active != Some(false));
        self
    }

    /// Overwrite blog and FAQ link flags from the site-wide visibility.
    pub fn apply_visibility(&mut self, visibility: PageVisibility) {
        self.show_blog_link = visibility.blog;
        self.show_faq_link = visibility.faq;
    }

    /// Header button, unless hidden or incomplete.
    pub fn call_to_action(&self) -> Option<CallToAction> {
        let button = self.cta_button.as_ref()?;
        if button.is_visible == Some(false) {
            return None;
        }
        CallToAction::from_parts(button.text.as_deref(), button.url.as_deref(), false)
    }
}
