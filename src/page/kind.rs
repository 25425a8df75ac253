//! Page section classification.

use crate::core::UrlPath;

/// Site section a page belongs to, derived from its URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageKind {
    /// Blog post under `/blog/`.
    Blog,
    /// Documentation page under `/docs/`.
    Docs,
    /// Feature explainer under `/features/`.
    Features,
    /// Everything else (landing page, `/terms/`, ...).
    #[default]
    Page,
}

impl PageKind {
    pub fn from_url(url: &UrlPath) -> Self {
        if url.starts_with("/blog/") {
            Self::Blog
        } else if url.starts_with("/docs/") {
            Self::Docs
        } else if url.starts_with("/features/") {
            Self::Features
        } else {
            Self::Page
        }
    }

    #[inline]
    pub fn is_blog(self) -> bool {
        matches!(self, Self::Blog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_url() {
        assert_eq!(
            PageKind::from_url(&UrlPath::from_page("/blog/dataview/")),
            PageKind::Blog
        );
        assert_eq!(
            PageKind::from_url(&UrlPath::from_page("/docs/build/")),
            PageKind::Docs
        );
        assert_eq!(
            PageKind::from_url(&UrlPath::from_page("/features/modules/")),
            PageKind::Features
        );
        assert_eq!(PageKind::from_url(&UrlPath::from_page("/")), PageKind::Page);
        assert_eq!(
            PageKind::from_url(&UrlPath::from_page("/terms/")),
            PageKind::Page
        );
    }
}
