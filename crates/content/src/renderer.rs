//! Page content loading with per-field fallback.
//!
//! A page starts in [`LoadState::Loading`] showing its bundled defaults.
//! One fetch later it is [`LoadState::Ready`], holding either the remote
//! document merged over the defaults or, on any failure, the defaults
//! unchanged. `Ready` is terminal.

use std::sync::Arc;

use deccan_core::document::PageContentDocument;
use deccan_core::merge::merge_over_defaults;
use deccan_core::page::PageKey;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::envelope::unwrap_payload;
use crate::error::ContentError;
use crate::source::{ContentSource, HttpContentSource};

// ---------------------------------------------------------------------------
// Load state
// ---------------------------------------------------------------------------

/// Where a ready document's content came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentOrigin {
    /// Remote content merged over the defaults.
    Remote,
    /// The bundled defaults, because remote content was unavailable.
    Defaults,
}

/// Lifecycle of one page load.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<D> {
    Loading { document: D },
    Ready { document: D, origin: ContentOrigin },
}

impl<D> LoadState<D> {
    /// Start loading with the page's default document on display.
    pub fn loading(defaults: D) -> Self {
        LoadState::Loading { document: defaults }
    }

    /// The document to render in the current state.
    pub fn document(&self) -> &D {
        match self {
            LoadState::Loading { document } | LoadState::Ready { document, .. } => document,
        }
    }

    pub fn into_document(self) -> D {
        match self {
            LoadState::Loading { document } | LoadState::Ready { document, .. } => document,
        }
    }

    pub fn origin(&self) -> Option<ContentOrigin> {
        match self {
            LoadState::Loading { .. } => None,
            LoadState::Ready { origin, .. } => Some(*origin),
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, LoadState::Ready { .. })
    }

    pub fn label(&self) -> &'static str {
        match self {
            LoadState::Loading { .. } => "loading",
            LoadState::Ready { .. } => "ready",
        }
    }

    /// Apply the outcome of the fetch.
    ///
    /// A resolved document replaces the defaults wholesale; an error keeps
    /// them. Completing a state that is already `Ready` changes nothing.
    pub fn complete(self, outcome: Result<D, ContentError>) -> Self {
        match self {
            LoadState::Loading { document } => match outcome {
                Ok(resolved) => LoadState::Ready {
                    document: resolved,
                    origin: ContentOrigin::Remote,
                },
                Err(_) => LoadState::Ready {
                    document,
                    origin: ContentOrigin::Defaults,
                },
            },
            ready @ LoadState::Ready { .. } => ready,
        }
    }

    pub fn map<T>(self, f: impl FnOnce(D) -> T) -> LoadState<T> {
        match self {
            LoadState::Loading { document } => LoadState::Loading {
                document: f(document),
            },
            LoadState::Ready { document, origin } => LoadState::Ready {
                document: f(document),
                origin,
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

/// Merge a remote page object over `defaults` and read it back as `D`.
///
/// Fails with [`ContentError::Parse`] when the merged document does not
/// fit `D`, e.g. a number where a title string belongs.
pub fn resolve_document<D>(defaults: &D, remote: &Value) -> Result<D, ContentError>
where
    D: Serialize + DeserializeOwned,
{
    let base = serde_json::to_value(defaults)?;
    let merged = merge_over_defaults(&base, remote);
    Ok(serde_json::from_value(merged)?)
}

// ---------------------------------------------------------------------------
// Renderer
// ---------------------------------------------------------------------------

/// Loads page documents from a [`ContentSource`], falling back to defaults.
///
/// Holds no per-page state: every call is an independent load.
#[derive(Clone)]
pub struct ContentPageRenderer {
    source: Arc<dyn ContentSource>,
}

impl ContentPageRenderer {
    pub fn new(source: Arc<dyn ContentSource>) -> Self {
        Self { source }
    }

    /// Renderer backed by the HTTP content API at `api_url`.
    pub fn http(api_url: impl Into<String>) -> Self {
        Self::new(Arc::new(HttpContentSource::new(api_url)))
    }

    /// Load the document for `page`.
    pub async fn load(&self, page: PageKey) -> LoadState<PageContentDocument> {
        match PageContentDocument::defaults_for(page) {
            PageContentDocument::About(defaults) => self
                .load_document(page.endpoint(), defaults)
                .await
                .map(PageContentDocument::About),
            PageContentDocument::Service(defaults) => self
                .load_document(page.endpoint(), defaults)
                .await
                .map(PageContentDocument::Service),
        }
    }

    /// Load any document type from `endpoint` over the given defaults.
    ///
    /// Always returns a `Ready` state. Failures are logged at warn level
    /// and never returned.
    pub async fn load_document<D>(&self, endpoint: &str, defaults: D) -> LoadState<D>
    where
        D: Serialize + DeserializeOwned + Send + Sync,
    {
        let state = LoadState::loading(defaults);
        let outcome = self.fetch_resolved(endpoint, state.document()).await;

        match &outcome {
            Ok(_) => tracing::debug!(endpoint, "Loaded remote page content"),
            Err(e) => tracing::warn!(
                endpoint,
                error = %e,
                "Remote page content unavailable, using defaults"
            ),
        }

        state.complete(outcome)
    }

    async fn fetch_resolved<D>(&self, endpoint: &str, defaults: &D) -> Result<D, ContentError>
    where
        D: Serialize + DeserializeOwned + Send + Sync,
    {
        let body = self.source.fetch(endpoint).await?;
        let remote = unwrap_payload(body)?;
        resolve_document(defaults, &remote)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use deccan_core::about::{AboutDocument, Feature};
    use deccan_core::page::ServiceKind;
    use deccan_core::service::ServicePageDocument;
    use deccan_core::text::TextList;
    use serde_json::json;

    use super::*;

    /// Serves one canned body, or a canned HTTP status failure.
    struct StubSource(Result<Value, u16>);

    #[async_trait]
    impl ContentSource for StubSource {
        async fn fetch(&self, _endpoint: &str) -> Result<Value, ContentError> {
            self.0.clone().map_err(ContentError::HttpStatus)
        }
    }

    fn renderer(body: Result<Value, u16>) -> ContentPageRenderer {
        ContentPageRenderer::new(Arc::new(StubSource(body)))
    }

    fn microwave_defaults() -> ServicePageDocument {
        ServicePageDocument::defaults_for(ServiceKind::MicrowaveOven)
    }

    #[test]
    fn complete_success_replaces_defaults() {
        let state = LoadState::loading(1).complete(Ok(2));
        assert_eq!(
            state,
            LoadState::Ready {
                document: 2,
                origin: ContentOrigin::Remote
            }
        );
    }

    #[test]
    fn complete_failure_keeps_defaults() {
        let state = LoadState::loading(1).complete(Err(ContentError::HttpStatus(500)));
        assert_eq!(state.document(), &1);
        assert_eq!(state.origin(), Some(ContentOrigin::Defaults));
    }

    #[test]
    fn ready_is_terminal() {
        let ready = LoadState::loading(1).complete(Ok(2));
        let again = ready.clone().complete(Ok(3));
        assert_eq!(again, ready);
    }

    #[test]
    fn loading_state_shows_defaults() {
        let state = LoadState::loading("defaults");
        assert!(!state.is_ready());
        assert_eq!(state.label(), "loading");
        assert_eq!(state.origin(), None);
        assert_eq!(*state.document(), "defaults");
    }

    #[tokio::test]
    async fn unreachable_api_renders_default_title() {
        let state = renderer(Err(503)).load(PageKey::MicrowaveOvenRepair).await;
        assert_eq!(state.origin(), Some(ContentOrigin::Defaults));
        assert_eq!(state.document().title(), "Microwave Oven Repair Service");
    }

    #[tokio::test]
    async fn custom_title_overrides_only_title() {
        let state = renderer(Ok(json!({"success": true, "data": {"title": "Custom Title"}})))
            .load_document("microwave-oven-repair-service", microwave_defaults())
            .await;

        let expected = ServicePageDocument {
            title: "Custom Title".into(),
            ..microwave_defaults()
        };
        assert_eq!(state.origin(), Some(ContentOrigin::Remote));
        assert_eq!(state.into_document(), expected);
    }

    #[tokio::test]
    async fn failed_envelope_yields_exact_defaults() {
        let state = renderer(Ok(json!({"success": false, "message": "nope", "data": {"title": "X"}})))
            .load_document("about-section", AboutDocument::default())
            .await;
        assert_eq!(state.origin(), Some(ContentOrigin::Defaults));
        assert_eq!(state.into_document(), AboutDocument::default());
    }

    #[tokio::test]
    async fn bare_string_description_is_normalized() {
        let state = renderer(Ok(json!({"success": true, "data": {"description": "X"}})))
            .load_document("about-section", AboutDocument::default())
            .await;
        assert_eq!(state.document().description, TextList::new(["X"]));
        assert_eq!(state.document().features, AboutDocument::default().features);
    }

    #[tokio::test]
    async fn raw_page_object_with_tagged_paragraphs() {
        let state = renderer(Ok(json!({
            "service_description": {"description": [{"paragraph": "P1"}, {"paragraph": "P2"}]},
            "repair_process": {"steps": [{"step": "S1"}]}
        })))
        .load_document("microwave-oven-repair-service", microwave_defaults())
        .await;

        let doc = state.into_document();
        assert_eq!(doc.service_description.description.as_slice(), ["P1", "P2"]);
        assert_eq!(doc.repair_process.steps.as_slice(), ["S1"]);
        assert_eq!(doc.repair_process.title, microwave_defaults().repair_process.title);
    }

    #[tokio::test]
    async fn schema_mismatch_falls_back_to_defaults() {
        let state = renderer(Ok(json!({"success": true, "data": {"title": 42}})))
            .load_document("microwave-oven-repair-service", microwave_defaults())
            .await;
        assert_eq!(state.origin(), Some(ContentOrigin::Defaults));
        assert_eq!(state.into_document(), microwave_defaults());
    }

    #[tokio::test]
    async fn about_page_dispatches_to_about_document() {
        let state = renderer(Ok(json!({"success": true, "data": {"section_title": "Who We Are"}})))
            .load(PageKey::About)
            .await;
        assert!(state.is_ready());
        assert_eq!(state.document().title(), "Who We Are");
    }

    #[tokio::test]
    async fn incomplete_feature_keeps_remote_title() {
        let state = renderer(Ok(json!({"success": true, "data": {
            "section_title": "Who We Are",
            "features": [{"iconName": "shield", "title": "Warranty"}]
        }})))
        .load_document("about-section", AboutDocument::default())
        .await;

        assert_eq!(state.origin(), Some(ContentOrigin::Remote));
        let doc = state.into_document();
        assert_eq!(doc.section_title, "Who We Are");
        assert_eq!(doc.features, vec![Feature::new("shield", "Warranty", "")]);
        assert_eq!(doc.description, AboutDocument::default().description);
    }

    #[tokio::test]
    async fn null_feature_description_keeps_other_remote_fields() {
        let state = renderer(Ok(json!({"success": true, "data": {
            "highlighted_text": "Who",
            "image_url": "about/team.jpg",
            "features": [
                {"iconName": "clock", "title": "Quick", "description": null},
                {"iconName": "users", "title": "Experts", "description": "Certified"}
            ]
        }})))
        .load_document("about-section", AboutDocument::default())
        .await;

        assert_eq!(state.origin(), Some(ContentOrigin::Remote));
        let doc = state.into_document();
        assert_eq!(doc.highlighted_text, "Who");
        assert_eq!(doc.image_url, "about/team.jpg");
        assert_eq!(
            doc.features,
            vec![
                Feature::new("clock", "Quick", ""),
                Feature::new("users", "Experts", "Certified"),
            ]
        );
    }

    #[tokio::test]
    async fn textless_step_keeps_remaining_steps_and_title() {
        let state = renderer(Ok(json!({"success": true, "data": {
            "title": "Oven Fixes",
            "repair_process": {"steps": [{"step": "S1"}, {"step": null}, {"step": "S2"}]}
        }})))
        .load_document("microwave-oven-repair-service", microwave_defaults())
        .await;

        assert_eq!(state.origin(), Some(ContentOrigin::Remote));
        let doc = state.into_document();
        assert_eq!(doc.title, "Oven Fixes");
        assert_eq!(doc.repair_process.steps.as_slice(), ["S1", "S2"]);
        assert_eq!(doc.repair_process.note, microwave_defaults().repair_process.note);
    }
}
