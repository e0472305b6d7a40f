//! Remote content loading for site pages.
//!
//! Fetches page documents from the content API, unwraps the response
//! envelope and resolves them over the bundled defaults. Failures never
//! escape [`renderer::ContentPageRenderer`]: they are logged and the page
//! keeps its default document.

pub mod envelope;
pub mod error;
pub mod renderer;
pub mod source;

pub use error::ContentError;
pub use renderer::{ContentOrigin, ContentPageRenderer, LoadState};
pub use source::{ContentSource, HttpContentSource};
