//! Domain core for the Deccan Services marketing site.
//!
//! Holds the page catalogue, bundled default documents, the remote-over-
//! default merge, text normalization, media URL resolution and the view
//! models handed to the presentation layer. The crate performs no I/O;
//! remote content is fetched by `deccan-content` and passed in.

pub mod about;
pub mod document;
pub mod error;
pub mod media;
pub mod merge;
pub mod page;
pub mod service;
pub mod site;
pub mod text;
