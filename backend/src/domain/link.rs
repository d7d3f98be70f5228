//! Internal versus external link classification.

/// How an anchor should open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget {
    /// Same tab, no `rel`.
    Internal,
    /// New tab with `rel="noopener noreferrer"`.
    External,
}

impl LinkTarget {
    /// Classify `url`. Paths and fragments are internal; everything else is
    /// external. `force_external` wins over the URL shape.
    ///
    /// # Examples
    /// ```
    /// use coaching_site::domain::LinkTarget;
    ///
    /// assert_eq!(LinkTarget::classify("/about", false), LinkTarget::Internal);
    /// assert_eq!(LinkTarget::classify("#contact", false), LinkTarget::Internal);
    /// assert_eq!(LinkTarget::classify("https://example.com", false), LinkTarget::External);
    /// ```
    pub fn classify(url: &str, force_external: bool) -> Self {
        if force_external {
            return Self::External;
        }
        if url.starts_with('/') || url.starts_with('#') {
            Self::Internal
        } else {
            Self::External
        }
    }

    pub fn is_external(self) -> bool {
        self == Self::External
    }

    /// `target` attribute value, if any.
    pub fn target(self) -> Option<&'static str> {
        self.is_external().then_some("_blank")
    }

    /// `rel` attribute value, if any.
    pub fn rel(self) -> Option<&'static str> {
        self.is_external().then_some("noopener noreferrer")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("/about", false, LinkTarget::Internal)]
    #[case("#contact", false, LinkTarget::Internal)]
    #[case("https://example.com", false, LinkTarget::External)]
    #[case("mailto:hello@example.com", false, LinkTarget::External)]
    #[case("about", false, LinkTarget::External)]
    #[case("/about", true, LinkTarget::External)]
    fn classifies_urls(#[case] url: &str, #[case] forced: bool, #[case] expected: LinkTarget) {
        assert_eq!(LinkTarget::classify(url, forced), expected);
    }

    #[rstest]
    fn external_links_carry_attributes() {
        let target = LinkTarget::External;
        assert_eq!(target.target(), Some("_blank"));
        assert_eq!(target.rel(), Some("noopener noreferrer"));
        assert_eq!(LinkTarget::Internal.rel(), None);
    }
}
