//! Per-page content documents.
//!
//! [`PageContentDocument`] pairs a page with its typed document so the
//! loader and the HTTP layer can treat every page uniformly.

use serde::Serialize;

use crate::about::{AboutDocument, AboutView};
use crate::media::MediaResolver;
use crate::page::PageKey;
use crate::service::{ServicePageDocument, ServiceView};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PageContentDocument {
    About(AboutDocument),
    Service(ServicePageDocument),
}

/// View model of any page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageView {
    About(AboutView),
    Service(ServiceView),
}

impl PageContentDocument {
    /// The bundled default document for `page`.
    pub fn defaults_for(page: PageKey) -> Self {
        match page.service() {
            Some(kind) => Self::Service(ServicePageDocument::defaults_for(kind)),
            None => Self::About(AboutDocument::default()),
        }
    }

    /// Title shown in page listings.
    pub fn title(&self) -> &str {
        match self {
            Self::About(doc) => &doc.section_title,
            Self::Service(doc) => &doc.title,
        }
    }

    pub fn view(&self, page: PageKey, media: &MediaResolver) -> PageView {
        match self {
            Self::About(doc) => PageView::About(doc.view(media)),
            Self::Service(doc) => PageView::Service(doc.view(page, media)),
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn about_page_gets_about_defaults() {
        assert_matches!(
            PageContentDocument::defaults_for(PageKey::About),
            PageContentDocument::About(_)
        );
    }

    #[test]
    fn service_pages_get_their_own_title() {
        let doc = PageContentDocument::defaults_for(PageKey::MicrowaveOvenRepair);
        assert_eq!(doc.title(), "Microwave Oven Repair Service");
        let doc = PageContentDocument::defaults_for(PageKey::AcRepair);
        assert_eq!(doc.title(), "AC Repair Service");
    }

    #[test]
    fn view_is_tagged_by_kind() {
        let media = MediaResolver::new("https://cdn.example/uploads");
        let view = PageContentDocument::defaults_for(PageKey::About).view(PageKey::About, &media);
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["kind"], "about");
        assert_eq!(json["title"][1]["highlighted"], true);
    }
}
